//! FFprobe-based media probing.

use crate::command::ToolCommand;
use crate::{require_tool, Error, Result};
use std::path::{Path, PathBuf};
use tvrecode_plan::{normalize, ContainerInfo, StreamRecord};

/// Everything the probe reports about a file.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub container: ContainerInfo,
    pub streams: Vec<StreamRecord>,
}

/// Run ffprobe from `PATH` on `path` and return its JSON output, streams and
/// format sections in one document.
pub fn ffprobe_json(path: &Path) -> Result<serde_json::Value> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    ffprobe_json_with(require_tool("ffprobe")?, path)
}

/// Same as [`ffprobe_json`] with an explicit ffprobe binary.
pub fn ffprobe_json_with(ffprobe: PathBuf, path: &Path) -> Result<serde_json::Value> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    let mut cmd = ToolCommand::new(ffprobe);
    cmd.args([
        "-v",
        "quiet",
        "-print_format",
        "json",
        "-show_format",
        "-show_streams",
    ])
    .arg(path.to_string_lossy());

    let output = cmd.execute()?;

    serde_json::from_str(&output.stdout)
        .map_err(|e| Error::parse_error("ffprobe", format!("invalid JSON: {}", e)))
}

/// Probe a file and normalize its streams.
pub fn probe(path: &Path) -> Result<ProbeResult> {
    let raw = ffprobe_json(path)?;
    parse_probe(&raw)
}

/// Normalize already captured ffprobe output.
pub fn parse_probe(raw: &serde_json::Value) -> Result<ProbeResult> {
    let streams = normalize(raw)?;
    Ok(ProbeResult {
        container: ContainerInfo::from_probe(raw),
        streams,
    })
}
