//! # tvrecode-plan
//!
//! Decides how to recode a media file for a TV: which video, audio and
//! subtitle streams to keep, whether each can be copied or must be
//! re-encoded, the target resolution, and the titles to attach.
//!
//! The crate is pure: it takes ffprobe-style metadata and a [`PolicyConfig`]
//! and returns a [`Plan`]. Probing and encoding happen elsewhere.
//!
//! ## Example
//!
//! ```
//! use tvrecode_plan::{normalize_str, plan, PolicyConfig};
//!
//! let probe = r#"{"streams": [
//!     {"codec_type": "video", "codec_name": "hevc", "width": 3840, "height": 2160},
//!     {"codec_type": "audio", "codec_name": "aac", "channels": 2, "tags": {"language": "eng"}}
//! ]}"#;
//!
//! let streams = normalize_str(probe)?;
//! let plan = plan(&streams, &PolicyConfig::default())?;
//! assert!(plan.decisions.video.scale.is_some());
//! assert_eq!(plan.decisions.audio.unwrap().title, "English");
//! # Ok::<(), tvrecode_plan::Error>(())
//! ```

pub mod assemble;
pub mod audio;
mod error;
pub mod language;
pub mod policy;
pub mod stream;
pub mod subtitle;
pub mod video;

#[cfg(test)]
pub(crate) mod test_fixtures;

// Re-exports
pub use assemble::{assemble, Decisions, Directive, TrackKind};
pub use audio::{AudioDecision, AudioMatch, Downmix, STEREO_DOWNMIX};
pub use error::{Error, Result};
pub use language::resolve_title;
pub use policy::{CodecAction, CodecPolicy, PolicyConfig};
pub use stream::{normalize, normalize_str, ContainerInfo, StreamKind, StreamRecord};
pub use subtitle::SubtitleDecision;
pub use video::{Scale, VideoDecision};

use serde::Serialize;

/// Decisions for one file together with the directive list built from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    pub decisions: Decisions,
    pub directives: Vec<Directive>,
}

/// Decide every track of a file.
///
/// Video and audio are independent; the subtitle decision needs the audio
/// result. Nothing is returned unless every step succeeds.
pub fn plan(streams: &[StreamRecord], policy: &PolicyConfig) -> Result<Plan> {
    let video = video::decide_video(streams, policy)?;
    let audio = audio::decide_audio(streams, policy);
    let subtitle = subtitle::decide_subtitle(streams, audio.as_ref(), policy);

    let decisions = Decisions {
        video,
        audio,
        subtitle,
    };
    let directives = assemble(&decisions);

    tracing::debug!("Planned {} directives", directives.len());

    Ok(Plan {
        decisions,
        directives,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{audio, forced_subtitle, subtitle, video};

    #[test]
    fn test_plan_without_video_fails() {
        let streams = vec![audio(0, "aac", "eng", 2), subtitle(1, "subrip", "eng")];
        assert!(matches!(
            plan(&streams, &PolicyConfig::default()),
            Err(Error::NoVideoStream)
        ));
    }

    #[test]
    fn test_selected_indices_reference_streams() {
        let streams = vec![
            video(0, "hevc", 3840, 2160),
            audio(1, "truehd", "eng", 8),
            audio(2, "ac3", "cze", 6),
            subtitle(3, "hdmv_pgs_subtitle", "eng"),
            forced_subtitle(4, "subrip", "cze"),
        ];
        let policy = PolicyConfig {
            preferred_audio_languages: vec!["cze".to_string()],
            ..PolicyConfig::default()
        };

        let plan = plan(&streams, &policy).unwrap();
        let audio = plan.decisions.audio.as_ref().unwrap();
        let subtitle = plan.decisions.subtitle.as_ref().unwrap();

        assert_eq!(plan.decisions.video.index, 0);
        assert_eq!(audio.index, 2);
        assert_eq!(subtitle.index, 4);
        assert_eq!(subtitle.title, "Czech (forced)");

        for directive in &plan.directives {
            if let Directive::Map { index, .. } = directive {
                assert!(streams.iter().any(|s| s.index == *index));
            }
        }
    }

    #[test]
    fn test_video_only_plan() {
        let streams = vec![video(0, "h264", 1280, 720)];
        let plan = plan(&streams, &PolicyConfig::default()).unwrap();
        assert!(plan.decisions.audio.is_none());
        assert!(plan.decisions.subtitle.is_none());
        assert_eq!(plan.directives.len(), 2);
    }
}
