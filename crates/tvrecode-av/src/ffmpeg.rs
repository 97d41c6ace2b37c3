//! Rendering recode directives as an ffmpeg command line.

use crate::command::ToolCommand;
use std::path::{Path, PathBuf};
use tvrecode_plan::{CodecAction, Directive, Downmix, TrackKind};

/// ffmpeg stream specifier letter for a track kind.
fn specifier(track: TrackKind) -> &'static str {
    match track {
        TrackKind::Video => "v",
        TrackKind::Audio => "a",
        TrackKind::Subtitle => "s",
    }
}

/// Render a downmix as a `pan` filter expression.
pub fn pan_filter(downmix: &Downmix) -> String {
    let channel = |terms: &[(u8, f32)]| {
        terms
            .iter()
            .map(|&(input, gain)| {
                if gain == 1.0 {
                    format!("c{}", input)
                } else {
                    format!("{:.2}*c{}", gain, input)
                }
            })
            .collect::<Vec<_>>()
            .join("+")
    };

    format!(
        "pan=stereo|c0={}|c1={}",
        channel(downmix.left),
        channel(downmix.right)
    )
}

/// ffmpeg arguments for a directive list, in order.
///
/// Every output has at most one track of each kind, so output stream
/// specifiers always address track 0.
pub fn directive_args(directives: &[Directive]) -> Vec<String> {
    let mut args = Vec::new();

    for directive in directives {
        match directive {
            Directive::Map { index, .. } => {
                args.push("-map".to_string());
                args.push(format!("0:{}", index));
            }
            Directive::Codec {
                track,
                action,
                params,
            } => {
                args.push(format!("-c:{}", specifier(*track)));
                match action {
                    CodecAction::Copy => args.push("copy".to_string()),
                    CodecAction::Transcode { codec } => {
                        args.push(codec.clone());
                        if let Some(params) = params {
                            args.extend(params.split_whitespace().map(str::to_string));
                        }
                    }
                }
            }
            Directive::Scale(scale) => {
                args.push("-filter:v".to_string());
                args.push(format!("scale={}:{}", scale.width, scale.height));
            }
            Directive::Downmix(downmix) => {
                args.push("-filter:a".to_string());
                args.push(pan_filter(downmix));
            }
            Directive::Title { track, title } => {
                args.push(format!("-metadata:s:{}:0", specifier(*track)));
                args.push(format!("title={}", title));
            }
            Directive::DefaultDisposition { track } => {
                args.push(format!("-disposition:{}:0", specifier(*track)));
                args.push("default".to_string());
            }
        }
    }

    args
}

/// A complete ffmpeg run for one file.
#[derive(Debug, Clone)]
pub struct FfmpegInvocation {
    pub input: PathBuf,
    pub output: PathBuf,
    pub directives: Vec<Directive>,
    /// Free-form arguments appended after the directives.
    pub extra: String,
    /// Overwrite an existing output file.
    pub overwrite: bool,
}

impl FfmpegInvocation {
    pub fn new(input: &Path, output: &Path, directives: Vec<Directive>) -> Self {
        Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            directives,
            extra: String::new(),
            overwrite: false,
        }
    }

    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = extra.into();
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Full argument list, without the program name.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "-hide_banner".to_string(),
            if self.overwrite { "-y" } else { "-n" }.to_string(),
            "-i".to_string(),
            self.input.to_string_lossy().to_string(),
        ];
        args.extend(directive_args(&self.directives));
        args.extend(self.extra.split_whitespace().map(str::to_string));
        args.push(self.output.to_string_lossy().to_string());
        args
    }

    /// Build the command for the given ffmpeg binary.
    pub fn to_command(&self, ffmpeg: PathBuf) -> ToolCommand {
        let mut cmd = ToolCommand::new(ffmpeg);
        cmd.args(self.args());
        cmd
    }
}
