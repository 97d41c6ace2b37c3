//! Planning through the library API, starting from ffprobe JSON.

use assert_matches::assert_matches;
use serde_json::json;
use std::path::{Path, PathBuf};
use tvrecode::config::{parse_config, Config};
use tvrecode::recode::{plan_probe, RecodeError, RecodeRequest};
use tvrecode_av::parse_probe;
use tvrecode_plan::{AudioMatch, CodecAction, Directive, TrackKind};

fn request() -> RecodeRequest {
    RecodeRequest {
        input: PathBuf::from("movie.mkv"),
        output: None,
        force: false,
    }
}

/// A 4K release with a 5.1 English track, a Czech stereo track and a forced
/// Czech subtitle.
fn uhd_release() -> serde_json::Value {
    json!({
        "streams": [
            {"index": 0, "codec_type": "video", "codec_name": "hevc",
             "width": 3840, "height": 2160, "disposition": {"default": 1}},
            {"index": 1, "codec_type": "audio", "codec_name": "eac3", "channels": 6,
             "disposition": {"default": 1}, "tags": {"language": "eng"}},
            {"index": 2, "codec_type": "audio", "codec_name": "ac3", "channels": 2,
             "tags": {"language": "cze", "title": "Dabing"}},
            {"index": 3, "codec_type": "subtitle", "codec_name": "subrip",
             "tags": {"language": "eng"}},
            {"index": 4, "codec_type": "subtitle", "codec_name": "subrip",
             "disposition": {"forced": 1}, "tags": {"language": "cze"}},
            {"index": 5, "codec_type": "attachment", "codec_name": "ttf"}
        ],
        "format": {"format_name": "matroska,webm", "duration": "7200.5", "size": "1000"}
    })
}

#[test]
fn test_uhd_release_with_defaults() {
    let probe = parse_probe(&uhd_release()).unwrap();
    assert_eq!(probe.streams.len(), 6);
    assert_eq!(probe.container.format_name.as_deref(), Some("matroska,webm"));

    let prepared = plan_probe(probe, &request(), Path::new("out.mkv"), &Config::default()).unwrap();
    let decisions = &prepared.plan.decisions;

    let video = &decisions.video;
    assert_eq!(video.index, 0);
    assert_eq!(
        video.action,
        CodecAction::Transcode {
            codec: "libx264".to_string()
        }
    );
    assert_eq!(video.quality.as_deref(), Some("-b:v 3400k"));
    let scale = video.scale.unwrap();
    assert_eq!((scale.width, scale.height), (1920, 1080));

    let audio = decisions.audio.as_ref().unwrap();
    assert_eq!(audio.index, 1);
    assert_eq!(audio.matched, AudioMatch::Preferred);
    assert_eq!(audio.title, "English");
    assert!(audio.downmix.is_some());

    // English audio came from the preference list and has no forced track.
    assert!(decisions.subtitle.is_none());

    let args = prepared.invocation.args();
    assert!(args.windows(2).any(|w| w == ["-filter:v", "scale=1920:1080"]));
    assert!(args.windows(2).any(|w| w[0] == "-filter:a" && w[1].starts_with("pan=stereo|")));
    assert!(!args.iter().any(|a| a == "0:5"));
}

#[test]
fn test_czech_viewer_gets_forced_subtitle() {
    let config = parse_config(
        r#"
        [recoding.preferred_languages]
        audio = ["cze", "eng"]
        subtitles = ["cze", "eng"]
        "#,
    )
    .unwrap();

    let probe = parse_probe(&uhd_release()).unwrap();
    let prepared = plan_probe(probe, &request(), Path::new("out.mkv"), &config).unwrap();
    let decisions = &prepared.plan.decisions;

    let audio = decisions.audio.as_ref().unwrap();
    assert_eq!(audio.index, 2);
    assert_eq!(audio.title, "Czech");
    assert!(audio.downmix.is_none());
    assert_eq!(audio.action, CodecAction::Copy);

    let subtitle = decisions.subtitle.as_ref().unwrap();
    assert_eq!(subtitle.index, 4);
    assert!(subtitle.forced);
    assert_eq!(subtitle.title, "Czech (forced)");

    assert!(prepared.plan.directives.contains(&Directive::DefaultDisposition {
        track: TrackKind::Subtitle
    }));
}

#[test]
fn test_unpreferred_audio_gets_subtitles() {
    let raw = json!({
        "streams": [
            {"codec_type": "video", "codec_name": "h264", "width": 1280, "height": 720},
            {"codec_type": "audio", "codec_name": "aac", "channels": 2,
             "tags": {"language": "jpn"}},
            {"codec_type": "subtitle", "codec_name": "ass", "tags": {"language": "ger"}},
            {"codec_type": "subtitle", "codec_name": "dvd_subtitle", "tags": {"language": "cze"}}
        ]
    });

    let probe = parse_probe(&raw).unwrap();
    let prepared = plan_probe(probe, &request(), Path::new("out.mkv"), &Config::default()).unwrap();
    let decisions = &prepared.plan.decisions;

    assert_eq!(decisions.video.action, CodecAction::Copy);
    assert!(decisions.video.quality.is_none());
    assert!(decisions.video.scale.is_none());

    let audio = decisions.audio.as_ref().unwrap();
    assert_eq!(audio.matched, AudioMatch::Fallback);
    assert_eq!(audio.title, "Japanese");

    let subtitle = decisions.subtitle.as_ref().unwrap();
    assert_eq!(subtitle.index, 3);
    assert_eq!(subtitle.title, "Czech");
    assert_eq!(
        subtitle.action,
        CodecAction::Transcode {
            codec: "subrip".to_string()
        }
    );

    let args = prepared.invocation.args();
    assert!(args.windows(2).any(|w| w == ["-c:s", "subrip"]));
    assert!(args.windows(2).any(|w| w == ["-metadata:s:s:0", "title=Czech"]));
}

#[test]
fn test_plan_serializes_to_json() {
    let probe = parse_probe(&uhd_release()).unwrap();
    let prepared = plan_probe(probe, &request(), Path::new("out.mkv"), &Config::default()).unwrap();

    let value = serde_json::to_value(&prepared.plan).unwrap();
    assert_eq!(value["decisions"]["video"]["index"], 0);
    assert_eq!(value["decisions"]["audio"]["title"], "English");
    assert!(value["directives"].as_array().unwrap().len() > 4);
}

#[test]
fn test_empty_probe_output() {
    assert!(parse_probe(&json!({"streams": []})).is_err());
    assert!(parse_probe(&json!("not an object")).is_err());
}

#[test]
fn test_audio_only_file() {
    let raw = json!({"streams": [{"codec_type": "audio", "codec_name": "flac", "channels": 2}]});
    let probe = parse_probe(&raw).unwrap();
    assert_matches!(
        plan_probe(probe, &request(), Path::new("out.mkv"), &Config::default()),
        Err(RecodeError::Plan(tvrecode_plan::Error::NoVideoStream))
    );
}
