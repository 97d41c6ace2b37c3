//! Normalized stream records built from ffprobe-style metadata.

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// Language used when a stream carries no language tag.
pub const UNDETERMINED_LANGUAGE: &str = "und";

/// Kind of an elementary stream, with the properties that matter per kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamKind {
    /// Video stream with its frame size in pixels.
    Video { width: u32, height: u32 },
    /// Audio stream with its channel count.
    Audio { channels: u32 },
    /// Subtitle stream.
    Subtitle,
    /// Anything else (data, attachments). Kept so indices stay stable.
    Other { codec_type: String },
}

/// One stream of the probed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamRecord {
    /// Position among all streams of the container, 0-based.
    pub index: usize,
    pub kind: StreamKind,
    pub codec_name: String,
    /// Language tag, or [`UNDETERMINED_LANGUAGE`].
    pub language: String,
    pub is_default: bool,
    pub is_forced: bool,
    pub title: Option<String>,
}

impl StreamRecord {
    pub fn is_video(&self) -> bool {
        matches!(self.kind, StreamKind::Video { .. })
    }

    pub fn is_audio(&self) -> bool {
        matches!(self.kind, StreamKind::Audio { .. })
    }

    pub fn is_subtitle(&self) -> bool {
        matches!(self.kind, StreamKind::Subtitle)
    }

    /// Frame size for video streams.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match self.kind {
            StreamKind::Video { width, height } => Some((width, height)),
            _ => None,
        }
    }

    /// Channel count for audio streams.
    pub fn channels(&self) -> Option<u32> {
        match self.kind {
            StreamKind::Audio { channels } => Some(channels),
            _ => None,
        }
    }

    /// Whether the stream is meant to always display.
    ///
    /// Besides the disposition flag, muxers often only mark forced subtitles
    /// in the title, so a title containing "forced" counts too.
    pub fn is_forced_subtitle(&self) -> bool {
        self.is_forced
            || self
                .title
                .as_deref()
                .is_some_and(|t| t.to_lowercase().contains("forced"))
    }
}

/// Container-level information from the probe's `format` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContainerInfo {
    pub format_name: Option<String>,
    pub duration_secs: Option<f64>,
    pub size_bytes: Option<u64>,
    pub bit_rate: Option<u64>,
}

impl ContainerInfo {
    /// Read the `format` section of probe output. Missing fields stay `None`.
    pub fn from_probe(raw: &serde_json::Value) -> Self {
        let format = &raw["format"];
        let number = |key: &str| -> Option<String> {
            match &format[key] {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            }
        };

        Self {
            format_name: format["format_name"].as_str().map(str::to_string),
            duration_secs: number("duration").and_then(|s| s.parse().ok()),
            size_bytes: number("size").and_then(|s| s.parse().ok()),
            bit_rate: number("bit_rate").and_then(|s| s.parse().ok()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawProbe {
    streams: Option<Vec<RawStream>>,
}

#[derive(Debug, Deserialize)]
struct RawStream {
    #[serde(default)]
    codec_type: Option<String>,
    #[serde(default)]
    codec_name: Option<String>,
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
    #[serde(default)]
    channels: Option<u32>,
    #[serde(default)]
    disposition: RawDisposition,
    #[serde(default)]
    tags: RawTags,
}

#[derive(Debug, Default, Deserialize)]
struct RawDisposition {
    #[serde(default, deserialize_with = "flag")]
    default: bool,
    #[serde(default, deserialize_with = "flag")]
    forced: bool,
}

#[derive(Debug, Default, Deserialize)]
struct RawTags {
    language: Option<String>,
    title: Option<String>,
}

/// ffprobe writes dispositions as 0/1; accept booleans as well.
fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        serde_json::Value::String(s) => matches!(s.as_str(), "1" | "true"),
        _ => false,
    })
}

/// Build stream records from probe output text.
pub fn normalize_str(json: &str) -> Result<Vec<StreamRecord>> {
    let raw: serde_json::Value =
        serde_json::from_str(json).map_err(|e| Error::metadata(format!("not JSON: {}", e)))?;
    normalize(&raw)
}

/// Build stream records from probe output.
///
/// The `streams` and `format` sections share one document, as produced by
/// `ffprobe -show_streams -show_format`. Records keep container order.
pub fn normalize(raw: &serde_json::Value) -> Result<Vec<StreamRecord>> {
    if !raw.is_object() {
        return Err(Error::metadata("expected a JSON object"));
    }

    let probe = RawProbe::deserialize(raw).map_err(|e| Error::metadata(e.to_string()))?;
    let streams = probe
        .streams
        .ok_or_else(|| Error::metadata("missing streams section"))?;

    if streams.is_empty() {
        return Err(Error::metadata("no streams"));
    }

    let records: Vec<StreamRecord> = streams
        .into_iter()
        .enumerate()
        .map(|(index, stream)| to_record(index, stream))
        .collect();

    tracing::debug!("Normalized {} streams", records.len());

    Ok(records)
}

fn to_record(index: usize, stream: RawStream) -> StreamRecord {
    let codec_type = stream.codec_type.unwrap_or_default();
    let kind = match codec_type.as_str() {
        "video" => StreamKind::Video {
            width: stream.width.unwrap_or(0),
            height: stream.height.unwrap_or(0),
        },
        "audio" => StreamKind::Audio {
            channels: stream.channels.unwrap_or(2),
        },
        "subtitle" => StreamKind::Subtitle,
        _ => StreamKind::Other { codec_type },
    };

    StreamRecord {
        index,
        kind,
        codec_name: stream.codec_name.unwrap_or_default(),
        language: stream
            .tags
            .language
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| UNDETERMINED_LANGUAGE.to_string()),
        is_default: stream.disposition.default,
        is_forced: stream.disposition.forced,
        title: stream.tags.title,
    }
}
