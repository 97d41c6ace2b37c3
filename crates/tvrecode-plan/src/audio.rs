//! Audio stream selection, downmix and transcode decision.

use crate::language::resolve_title;
use crate::policy::{CodecAction, PolicyConfig};
use crate::stream::StreamRecord;
use serde::Serialize;
use std::collections::HashMap;

/// How the audio stream was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioMatch {
    /// One of the preferred languages was found.
    Preferred,
    /// No preferred language present; the default stream was kept.
    Fallback,
}

/// One output channel of a pan filter: `(input channel, gain)` terms.
pub type PanTerms = &'static [(u8, f32)];

/// Fixed-coefficient downmix to stereo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Downmix {
    pub left: PanTerms,
    pub right: PanTerms,
}

/// Centre at full gain, each front and rear side mixed in at 0.30.
pub const STEREO_DOWNMIX: Downmix = Downmix {
    left: &[(2, 1.0), (0, 0.30), (4, 0.30)],
    right: &[(2, 1.0), (1, 0.30), (5, 0.30)],
};

/// Outcome for the audio track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioDecision {
    pub index: usize,
    pub language: String,
    pub matched: AudioMatch,
    pub title: String,
    pub action: CodecAction,
    pub downmix: Option<Downmix>,
}

/// Decide the audio track, or `None` for files without audio.
///
/// The first audio stream is the default candidate, replaced by the last
/// stream flagged default. A preferred language present in the file beats the
/// candidate; if several streams share a language the last one is used.
pub fn decide_audio(streams: &[StreamRecord], policy: &PolicyConfig) -> Option<AudioDecision> {
    let mut by_language: HashMap<&str, &StreamRecord> = HashMap::new();
    let mut candidate: Option<&StreamRecord> = None;

    for stream in streams.iter().filter(|s| s.is_audio()) {
        by_language.insert(stream.language.as_str(), stream);
        if candidate.is_none() || stream.is_default {
            candidate = Some(stream);
        }
    }

    let candidate = candidate?;

    let (stream, matched) = policy
        .preferred_audio_languages
        .iter()
        .find_map(|lang| by_language.get(lang.as_str()))
        .map(|stream| (*stream, AudioMatch::Preferred))
        .unwrap_or((candidate, AudioMatch::Fallback));

    let title = resolve_title(&stream.language, stream.title.as_deref());
    let downmix = (stream.channels().unwrap_or(0) > 2).then_some(STEREO_DOWNMIX);
    let action = policy
        .audio
        .action_for(&stream.codec_name, downmix.is_some());

    tracing::debug!(
        index = stream.index,
        language = %stream.language,
        ?matched,
        downmix = downmix.is_some(),
        ?action,
        "Audio decision"
    );

    Some(AudioDecision {
        index: stream.index,
        language: stream.language.clone(),
        matched,
        title,
        action,
        downmix,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{audio, subtitle, video};

    fn policy_with_audio(langs: &[&str]) -> PolicyConfig {
        PolicyConfig {
            preferred_audio_languages: langs.iter().map(|l| l.to_string()).collect(),
            ..PolicyConfig::default()
        }
    }

    #[test]
    fn test_no_audio_streams() {
        let streams = vec![video(0, "h264", 1920, 1080), subtitle(1, "subrip", "eng")];
        assert!(decide_audio(&streams, &PolicyConfig::default()).is_none());
    }

    #[test]
    fn test_first_preferred_language_wins() {
        let streams = vec![
            video(0, "h264", 1920, 1080),
            audio(1, "aac", "eng", 2),
            audio(2, "aac", "cze", 2),
            audio(3, "aac", "slo", 2),
        ];
        let decision = decide_audio(&streams, &policy_with_audio(&["cze", "slo"])).unwrap();
        assert_eq!(decision.index, 2);
        assert_eq!(decision.language, "cze");
        assert_eq!(decision.matched, AudioMatch::Preferred);
        assert_eq!(decision.title, "Czech");
    }

    #[test]
    fn test_preference_order_not_stream_order() {
        let streams = vec![
            audio(0, "aac", "eng", 2),
            audio(1, "aac", "cze", 2),
            audio(2, "aac", "slo", 2),
        ];
        let decision = decide_audio(&streams, &policy_with_audio(&["cze", "slo"])).unwrap();
        assert_eq!(decision.index, 1);
        assert_eq!(decision.language, "cze");

        let decision = decide_audio(&streams, &policy_with_audio(&["slo", "cze"])).unwrap();
        assert_eq!(decision.index, 2);
    }

    #[test]
    fn test_preferred_language_beats_default_flag() {
        let mut streams = vec![audio(0, "aac", "eng", 2), audio(1, "aac", "cze", 2)];
        streams[0].is_default = true;
        let decision = decide_audio(&streams, &policy_with_audio(&["cze"])).unwrap();
        assert_eq!(decision.index, 1);
    }

    #[test]
    fn test_fallback_to_last_default() {
        let mut streams = vec![
            audio(0, "aac", "jpn", 2),
            audio(1, "aac", "fre", 2),
            audio(2, "aac", "ita", 2),
        ];
        streams[1].is_default = true;
        let decision = decide_audio(&streams, &policy_with_audio(&["eng"])).unwrap();
        assert_eq!(decision.index, 1);
        assert_eq!(decision.matched, AudioMatch::Fallback);
        assert_eq!(decision.title, "French");
    }

    #[test]
    fn test_fallback_to_first_without_default() {
        let streams = vec![audio(0, "aac", "jpn", 2), audio(1, "aac", "fre", 2)];
        let decision = decide_audio(&streams, &policy_with_audio(&["eng"])).unwrap();
        assert_eq!(decision.index, 0);
        assert_eq!(decision.matched, AudioMatch::Fallback);
    }

    #[test]
    fn test_duplicate_language_uses_last_stream() {
        let streams = vec![audio(0, "aac", "eng", 2), audio(1, "ac3", "eng", 2)];
        let decision = decide_audio(&streams, &policy_with_audio(&["eng"])).unwrap();
        assert_eq!(decision.index, 1);
    }

    #[test]
    fn test_multichannel_is_downmixed_and_transcoded() {
        let streams = vec![audio(0, "ac3", "eng", 6)];
        let decision = decide_audio(&streams, &PolicyConfig::default()).unwrap();
        assert_eq!(decision.downmix, Some(STEREO_DOWNMIX));
        assert_eq!(
            decision.action,
            CodecAction::Transcode {
                codec: "aac".to_string()
            }
        );
    }

    #[test]
    fn test_stereo_allowed_codec_is_copied() {
        let streams = vec![audio(0, "mp3", "eng", 2)];
        let decision = decide_audio(&streams, &PolicyConfig::default()).unwrap();
        assert_eq!(decision.downmix, None);
        assert_eq!(decision.action, CodecAction::Copy);
    }

    #[test]
    fn test_disallowed_codec_is_transcoded() {
        let streams = vec![audio(0, "dts", "eng", 2)];
        let decision = decide_audio(&streams, &PolicyConfig::default()).unwrap();
        assert_eq!(decision.downmix, None);
        assert!(!decision.action.is_copy());
    }

    #[test]
    fn test_unknown_language_title_from_stream() {
        let mut streams = vec![audio(0, "aac", "xyz", 2)];
        streams[0].title = Some("My Commentary".to_string());
        let decision = decide_audio(&streams, &PolicyConfig::default()).unwrap();
        assert_eq!(decision.title, "My Commentary");
    }
}
