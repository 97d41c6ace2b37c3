//! # tvrecode-av
//!
//! The parts of tvrecode that touch external tools:
//! - Probing files with ffprobe and normalizing the result
//! - Detecting ffmpeg/ffprobe installations
//! - Rendering a recode plan as an ffmpeg command and running it
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use tvrecode_av::{probe, require_tool, FfmpegInvocation};
//! use tvrecode_plan::{plan, PolicyConfig};
//!
//! let input = Path::new("/path/to/video.mkv");
//! let probed = probe(input)?;
//! let plan = plan(&probed.streams, &PolicyConfig::default())?;
//!
//! let invocation = FfmpegInvocation::new(input, Path::new("/tmp/out.mkv"), plan.directives);
//! let status = invocation.to_command(require_tool("ffmpeg")?).output()?.status;
//! println!("ffmpeg exited with {}", status);
//! # Ok::<(), tvrecode_av::Error>(())
//! ```

pub mod command;
mod error;
pub mod ffmpeg;
pub mod probe;
pub mod tools;

// Re-exports
pub use command::{ToolCommand, ToolOutput};
pub use error::{Error, Result};
pub use ffmpeg::FfmpegInvocation;
pub use probe::{ffprobe_json, ffprobe_json_with, parse_probe, ProbeResult};
pub use tools::{check_tool, check_tools, require_tool, ToolInfo};

/// Probe a media file and return its normalized streams.
pub fn probe<P: AsRef<std::path::Path>>(path: P) -> Result<ProbeResult> {
    probe::probe(path.as_ref())
}
