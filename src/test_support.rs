//! In-process doubles shared by unit tests

use crate::download::engine::{AudioEngine, EngineRequest};
use crate::error::DzytError;
use crate::platform::search::WebSearch;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

/// Search double replaying scripted responses, then empty results
pub(crate) struct ScriptedSearch {
    responses: Mutex<VecDeque<Result<Vec<String>, DzytError>>>,
    calls: AtomicU32,
}

impl ScriptedSearch {
    pub(crate) fn new(responses: Vec<Result<Vec<String>, DzytError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicU32::new(0),
        }
    }

    pub(crate) fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WebSearch for ScriptedSearch {
    async fn search(&self, _query: &str) -> Result<Vec<String>, DzytError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

pub(crate) fn urls(list: &[&str]) -> Result<Vec<String>, DzytError> {
    Ok(list.iter().map(|s| s.to_string()).collect())
}

/// Engine double recording requests; fails for URLs listed in `failing`
#[derive(Clone, Default)]
pub(crate) struct RecordingEngine {
    pub(crate) requests: Arc<Mutex<Vec<EngineRequest>>>,
    failing: Vec<String>,
}

impl RecordingEngine {
    pub(crate) fn failing_on(url: &str) -> Self {
        Self {
            failing: vec![url.to_string()],
            ..Self::default()
        }
    }

    pub(crate) fn invocations(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl AudioEngine for RecordingEngine {
    async fn fetch_audio(&self, request: &EngineRequest) -> Result<(), DzytError> {
        self.requests.lock().unwrap().push(request.clone());
        if self.failing.contains(&request.url) {
            return Err(DzytError::Engine("yt-dlp exited with exit status: 1".to_string()));
        }
        Ok(())
    }
}

/// Cloneable in-memory writer for capturing console output
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
