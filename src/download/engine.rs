//! External download/transcode engine (yt-dlp)

use crate::error::DzytError;
use crate::Result;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Format selector handed to the engine
pub const AUDIO_FORMAT_SELECTOR: &str = "bestaudio/best";

/// One engine invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineRequest {
    /// Resolved video URL
    pub url: String,
    /// Output path template; the engine fills in the extension
    pub output_template: PathBuf,
    /// Target audio codec
    pub codec: String,
    /// Target quality in kbps
    pub quality: String,
}

/// Something that fetches a URL and leaves an encoded audio file behind
#[async_trait]
pub trait AudioEngine: Send + Sync {
    /// Download and transcode; an error means no usable file was produced
    async fn fetch_audio(&self, request: &EngineRequest) -> Result<()>;
}

/// yt-dlp command line engine
#[derive(Debug, Clone)]
pub struct YtDlpEngine {
    program: String,
}

impl YtDlpEngine {
    /// Create an engine running `program` (usually `yt-dlp`)
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Command line arguments for a request
    pub fn args(&self, request: &EngineRequest) -> Vec<OsString> {
        #[rustfmt::skip]
        let mut args: Vec<OsString> = [
            "--quiet",
            "--no-warnings",
            "--no-playlist",
            "--color", "never",
            "--format", AUDIO_FORMAT_SELECTOR,
            "--extract-audio",
            "--audio-format", request.codec.as_str(),
            "--audio-quality", format!("{}K", request.quality).as_str(),
            "--output",
        ]
        .iter()
        .map(OsString::from)
        .collect();

        args.push(request.output_template.clone().into_os_string());
        args.push(OsString::from("--"));
        args.push(OsString::from(&request.url));
        args
    }
}

impl Default for YtDlpEngine {
    fn default() -> Self {
        Self::new("yt-dlp")
    }
}

#[async_trait]
impl AudioEngine for YtDlpEngine {
    async fn fetch_audio(&self, request: &EngineRequest) -> Result<()> {
        let args = self.args(request);
        debug!("Running {} {:?}", self.program, args);

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| DzytError::Engine(format!("failed to run {}: {}", self.program, e)))?;

        if output.status.success() {
            info!("{} finished for {}", self.program, request.url);
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = stderr
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .unwrap_or("no error output")
            .trim()
            .to_string();

        Err(DzytError::Engine(format!(
            "{} exited with {}: {}",
            self.program, output.status, reason
        )))
    }
}
