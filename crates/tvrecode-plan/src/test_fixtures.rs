//! Stream builders shared by unit tests.

use crate::stream::{StreamKind, StreamRecord};

pub fn video(index: usize, codec: &str, width: u32, height: u32) -> StreamRecord {
    record(index, StreamKind::Video { width, height }, codec, "und")
}

pub fn audio(index: usize, codec: &str, language: &str, channels: u32) -> StreamRecord {
    record(index, StreamKind::Audio { channels }, codec, language)
}

pub fn subtitle(index: usize, codec: &str, language: &str) -> StreamRecord {
    record(index, StreamKind::Subtitle, codec, language)
}

pub fn forced_subtitle(index: usize, codec: &str, language: &str) -> StreamRecord {
    StreamRecord {
        is_forced: true,
        ..subtitle(index, codec, language)
    }
}

fn record(index: usize, kind: StreamKind, codec: &str, language: &str) -> StreamRecord {
    StreamRecord {
        index,
        kind,
        codec_name: codec.to_string(),
        language: language.to_string(),
        is_default: false,
        is_forced: false,
        title: None,
    }
}
