//! Recoding policy: what the target device can play and what to prefer.

use serde::{Deserialize, Serialize};

/// What to do with a selected stream's codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CodecAction {
    /// Pass the stream through unmodified.
    Copy,
    /// Re-encode with the given codec.
    Transcode { codec: String },
}

impl CodecAction {
    pub fn is_copy(&self) -> bool {
        matches!(self, CodecAction::Copy)
    }
}

/// Allowed codecs for one track type plus the codec to encode to otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecPolicy {
    /// Codecs the device plays as-is. Empty means nothing is allowed.
    pub allowed: Vec<String>,
    /// Encoder used when the source codec is not allowed.
    pub fallback: String,
}

impl CodecPolicy {
    pub fn new<I, S>(allowed: I, fallback: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
            fallback: fallback.into(),
        }
    }

    /// Whether `codec` may be copied. Codec names compare case-insensitively.
    pub fn allows(&self, codec: &str) -> bool {
        self.allowed.iter().any(|c| c.eq_ignore_ascii_case(codec))
    }

    /// Copy when the codec is allowed and nothing forces a re-encode,
    /// otherwise transcode to the fallback.
    pub fn action_for(&self, codec: &str, force_transcode: bool) -> CodecAction {
        if force_transcode || !self.allows(codec) {
            CodecAction::Transcode {
                codec: self.fallback.clone(),
            }
        } else {
            CodecAction::Copy
        }
    }
}

/// Full policy handed to every decision component. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub preferred_audio_languages: Vec<String>,
    pub preferred_subtitle_languages: Vec<String>,
    pub video: CodecPolicy,
    pub audio: CodecPolicy,
    pub subtitle: CodecPolicy,
    pub max_width: u32,
    pub max_height: u32,
    /// Encoder arguments used when video is re-encoded, e.g. `-b:v 3400k`.
    pub video_quality: String,
    /// Skip preferred subtitles in the same language as the fallback audio.
    pub exclude_audio_language_subtitles: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            preferred_audio_languages: vec!["eng".into(), "cze".into(), "slo".into()],
            preferred_subtitle_languages: vec!["eng".into(), "cze".into(), "slo".into()],
            video: CodecPolicy::new(["h264", "mpeg4", "mp4", "libx264"], "libx264"),
            audio: CodecPolicy::new(["aac", "ac3", "mp3"], "aac"),
            subtitle: CodecPolicy::new(["subrip", "ass"], "subrip"),
            max_width: 1920,
            max_height: 1080,
            video_quality: "-b:v 3400k".to_string(),
            exclude_audio_language_subtitles: true,
        }
    }
}
