use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tvrecode_plan::{CodecPolicy, PolicyConfig};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    pub recoding: RecodingConfig,

    pub files: FilesConfig,

    pub logging: LoggingConfig,

    pub tools: ToolsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RecodingConfig {
    pub preferred_languages: PreferredLanguages,

    pub subtitles: SubtitleOptions,

    pub codecs: CodecsConfig,

    pub dimensions: DimensionsConfig,

    pub quality: QualityConfig,

    /// Extra ffmpeg arguments placed before the output file
    pub extra: String,
}

impl RecodingConfig {
    /// Policy handed to the planner.
    pub fn policy(&self) -> PolicyConfig {
        PolicyConfig {
            preferred_audio_languages: self.preferred_languages.audio.clone(),
            preferred_subtitle_languages: self.preferred_languages.subtitles.clone(),
            video: self.codecs.video.policy(),
            audio: self.codecs.audio.policy(),
            subtitle: self.codecs.subtitle.policy(),
            max_width: self.dimensions.max.width,
            max_height: self.dimensions.max.height,
            video_quality: self.quality.video.parameter.clone(),
            exclude_audio_language_subtitles: self.subtitles.exclude_audio_language,
        }
    }
}

/// Language codes (ISO 639-2) in order of preference
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PreferredLanguages {
    pub audio: Vec<String>,

    pub subtitles: Vec<String>,
}

fn default_languages() -> Vec<String> {
    vec!["eng".to_string(), "cze".to_string(), "slo".to_string()]
}

impl Default for PreferredLanguages {
    fn default() -> Self {
        Self {
            audio: default_languages(),
            subtitles: default_languages(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SubtitleOptions {
    /// Skip preferred subtitles in the same language as the audio track
    pub exclude_audio_language: bool,
}

impl Default for SubtitleOptions {
    fn default() -> Self {
        Self {
            exclude_audio_language: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CodecsConfig {
    pub video: CodecConfig,

    pub audio: CodecConfig,

    pub subtitle: CodecConfig,
}

impl Default for CodecsConfig {
    fn default() -> Self {
        Self {
            video: CodecConfig::new(&["h264", "mpeg4", "mp4", "libx264"], "libx264"),
            audio: CodecConfig::new(&["aac", "ac3", "mp3"], "aac"),
            subtitle: CodecConfig::new(&["subrip", "ass"], "subrip"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CodecConfig {
    /// Codecs the player handles; these are copied as-is
    pub allowed: Vec<String>,

    /// Encoder used for everything else
    pub fallback: String,
}

impl CodecConfig {
    fn new(allowed: &[&str], fallback: &str) -> Self {
        Self {
            allowed: allowed.iter().map(|s| s.to_string()).collect(),
            fallback: fallback.to_string(),
        }
    }

    fn policy(&self) -> CodecPolicy {
        CodecPolicy::new(self.allowed.iter().cloned(), self.fallback.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DimensionsConfig {
    pub max: Resolution,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct QualityConfig {
    pub video: VideoQuality,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VideoQuality {
    /// Encoder arguments used when video is re-encoded, e.g. "-q:v 50"
    pub parameter: String,
}

impl Default for VideoQuality {
    fn default() -> Self {
        Self {
            parameter: "-b:v 3400k".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FilesConfig {
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Appended to the input file stem: `movie.avi` -> `movie-<suffix>.<extension>`
    pub suffix: String,

    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: "recoded4tv".to_string(),
            extension: "mkv".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub to_console: bool,

    pub to_file: bool,

    pub file_path: PathBuf,

    pub format: LogFormat,

    /// error, warn, info, debug, trace or off
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            to_console: true,
            to_file: false,
            file_path: PathBuf::from("recode.log"),
            format: LogFormat::Full,
            level: "error".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Full,
    Compact,
}

/// Explicit tool locations; tools are looked up on PATH when unset
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ToolsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ffmpeg_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ffprobe_path: Option<PathBuf>,
}
