//! Merge per-track decisions into one ordered list of directives.
//!
//! Directives are plain data. Rendering them into a concrete tool's command
//! line is left to the caller.

use crate::audio::{AudioDecision, Downmix};
use crate::policy::CodecAction;
use crate::subtitle::SubtitleDecision;
use crate::video::{Scale, VideoDecision};
use serde::Serialize;

/// Track type a directive applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackKind {
    Video,
    Audio,
    Subtitle,
}

/// One instruction for the encoder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "directive", rename_all = "snake_case")]
pub enum Directive {
    /// Include input stream `index` as the output track of this kind.
    Map { track: TrackKind, index: usize },
    /// Copy or encode the track. `params` carries encoder arguments.
    Codec {
        track: TrackKind,
        action: CodecAction,
        params: Option<String>,
    },
    /// Resize the video.
    Scale(Scale),
    /// Mix the audio down to stereo.
    Downmix(Downmix),
    /// Set the track title metadata.
    Title { track: TrackKind, title: String },
    /// Mark the track as the default of its kind.
    DefaultDisposition { track: TrackKind },
}

/// All decisions for one file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decisions {
    pub video: VideoDecision,
    pub audio: Option<AudioDecision>,
    pub subtitle: Option<SubtitleDecision>,
}

/// Lay out the directives: video first, then audio and subtitle blocks when
/// those tracks were selected.
pub fn assemble(decisions: &Decisions) -> Vec<Directive> {
    let mut directives = Vec::new();

    let video = &decisions.video;
    directives.push(Directive::Map {
        track: TrackKind::Video,
        index: video.index,
    });
    directives.push(Directive::Codec {
        track: TrackKind::Video,
        action: video.action.clone(),
        params: video.quality.clone(),
    });
    if let Some(scale) = video.scale {
        directives.push(Directive::Scale(scale));
    }

    if let Some(audio) = &decisions.audio {
        directives.push(Directive::Map {
            track: TrackKind::Audio,
            index: audio.index,
        });
        directives.push(Directive::Title {
            track: TrackKind::Audio,
            title: audio.title.clone(),
        });
        directives.push(Directive::Codec {
            track: TrackKind::Audio,
            action: audio.action.clone(),
            params: None,
        });
        if let Some(downmix) = audio.downmix {
            directives.push(Directive::Downmix(downmix));
        }
    }

    if let Some(subtitle) = &decisions.subtitle {
        directives.push(Directive::Map {
            track: TrackKind::Subtitle,
            index: subtitle.index,
        });
        directives.push(Directive::DefaultDisposition {
            track: TrackKind::Subtitle,
        });
        directives.push(Directive::Title {
            track: TrackKind::Subtitle,
            title: subtitle.title.clone(),
        });
        directives.push(Directive::Codec {
            track: TrackKind::Subtitle,
            action: subtitle.action.clone(),
            params: None,
        });
    }

    directives
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{AudioMatch, STEREO_DOWNMIX};

    fn copy_video() -> VideoDecision {
        VideoDecision {
            index: 0,
            action: CodecAction::Copy,
            quality: None,
            scale: None,
        }
    }

    #[test]
    fn test_video_only() {
        let decisions = Decisions {
            video: copy_video(),
            audio: None,
            subtitle: None,
        };
        assert_eq!(
            assemble(&decisions),
            vec![
                Directive::Map {
                    track: TrackKind::Video,
                    index: 0
                },
                Directive::Codec {
                    track: TrackKind::Video,
                    action: CodecAction::Copy,
                    params: None
                },
            ]
        );
    }

    #[test]
    fn test_full_layout_order() {
        let decisions = Decisions {
            video: VideoDecision {
                index: 0,
                action: CodecAction::Transcode {
                    codec: "libx264".to_string(),
                },
                quality: Some("-crf 20".to_string()),
                scale: Some(Scale {
                    width: 1920,
                    height: 800,
                }),
            },
            audio: Some(AudioDecision {
                index: 2,
                language: "eng".to_string(),
                matched: AudioMatch::Preferred,
                title: "English".to_string(),
                action: CodecAction::Transcode {
                    codec: "aac".to_string(),
                },
                downmix: Some(STEREO_DOWNMIX),
            }),
            subtitle: Some(SubtitleDecision {
                index: 4,
                language: "eng".to_string(),
                title: "English (forced)".to_string(),
                forced: true,
                action: CodecAction::Copy,
            }),
        };

        let directives = assemble(&decisions);
        assert_eq!(directives.len(), 11);
        assert!(matches!(directives[2], Directive::Scale(_)));
        assert_eq!(
            directives[3],
            Directive::Map {
                track: TrackKind::Audio,
                index: 2
            }
        );
        assert!(matches!(
            directives[4],
            Directive::Title {
                track: TrackKind::Audio,
                ..
            }
        ));
        assert!(matches!(directives[6], Directive::Downmix(_)));
        assert_eq!(
            directives[8],
            Directive::DefaultDisposition {
                track: TrackKind::Subtitle
            }
        );
        assert_eq!(
            directives[9],
            Directive::Title {
                track: TrackKind::Subtitle,
                title: "English (forced)".to_string()
            }
        );
    }
}
