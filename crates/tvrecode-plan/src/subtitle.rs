//! Subtitle stream selection.
//!
//! Runs after the audio decision: the chosen audio language and whether it
//! came from the preference list drive which subtitle, if any, is kept.

use crate::audio::{AudioDecision, AudioMatch};
use crate::language::resolve_title;
use crate::policy::{CodecAction, PolicyConfig};
use crate::stream::StreamRecord;
use serde::Serialize;
use std::collections::HashMap;

/// Outcome for the subtitle track. The selected stream is always marked as
/// the default subtitle in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubtitleDecision {
    pub index: usize,
    pub language: String,
    pub title: String,
    /// Selected because it is a forced track for the audio language.
    pub forced: bool,
    pub action: CodecAction,
}

/// Decide the subtitle track.
///
/// 1. A forced subtitle in the audio language is always taken.
/// 2. Otherwise, only when the audio did not come from the preference list,
///    the first preferred subtitle language with a regular (non-forced)
///    track is taken, skipping the audio language when the policy says so.
/// 3. Otherwise no subtitle is kept.
pub fn decide_subtitle(
    streams: &[StreamRecord],
    audio: Option<&AudioDecision>,
    policy: &PolicyConfig,
) -> Option<SubtitleDecision> {
    let mut by_language: HashMap<&str, &StreamRecord> = HashMap::new();
    let mut forced: HashMap<&str, &StreamRecord> = HashMap::new();

    for stream in streams.iter().filter(|s| s.is_subtitle()) {
        by_language.insert(stream.language.as_str(), stream);
        if stream.is_forced_subtitle() {
            forced.insert(stream.language.as_str(), stream);
        }
    }

    let audio_language = audio.map(|a| a.language.as_str());

    if let Some(stream) = audio_language.and_then(|lang| forced.get(lang)) {
        let title = format!(
            "{} (forced)",
            resolve_title(&stream.language, stream.title.as_deref())
        );
        return Some(decision(stream, title, true, policy));
    }

    let audio_preferred = audio.is_some_and(|a| a.matched == AudioMatch::Preferred);
    if audio_preferred {
        return None;
    }

    let stream = policy
        .preferred_subtitle_languages
        .iter()
        .map(String::as_str)
        .filter(|lang| !forced.contains_key(lang))
        .filter(|lang| {
            !(policy.exclude_audio_language_subtitles && audio_language == Some(*lang))
        })
        .find_map(|lang| by_language.get(lang).copied())?;

    let title = resolve_title(&stream.language, stream.title.as_deref());
    Some(decision(stream, title, false, policy))
}

fn decision(
    stream: &StreamRecord,
    title: String,
    forced: bool,
    policy: &PolicyConfig,
) -> SubtitleDecision {
    let action = policy.subtitle.action_for(&stream.codec_name, false);

    tracing::debug!(
        index = stream.index,
        language = %stream.language,
        forced,
        ?action,
        "Subtitle decision"
    );

    SubtitleDecision {
        index: stream.index,
        language: stream.language.clone(),
        title,
        forced,
        action,
    }
}
