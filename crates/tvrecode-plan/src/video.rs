//! Video stream selection and resize/transcode decision.

use crate::policy::{CodecAction, PolicyConfig};
use crate::stream::StreamRecord;
use crate::{Error, Result};
use serde::Serialize;

/// Target frame size for the scale filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scale {
    pub width: u32,
    pub height: u32,
}

/// Outcome for the video track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoDecision {
    /// Index of the selected stream in the normalized sequence.
    pub index: usize,
    pub action: CodecAction,
    /// Encoder arguments, present only when transcoding.
    pub quality: Option<String>,
    /// Present whenever the frame had to be resized.
    pub scale: Option<Scale>,
}

/// Pick the primary video stream: the first one, unless a later stream is
/// flagged default, in which case the last such stream wins.
pub fn select_video(streams: &[StreamRecord]) -> Option<&StreamRecord> {
    let mut selected: Option<&StreamRecord> = None;
    for stream in streams.iter().filter(|s| s.is_video()) {
        if selected.is_none() || stream.is_default {
            selected = Some(stream);
        }
    }
    selected
}

/// Compute the scaled frame size, or `None` if the frame already fits.
///
/// The height and width limits are checked independently against the
/// original size. When both are exceeded the width result replaces the
/// height result, so the final height can still exceed `max_height`.
pub fn compute_scale(width: u32, height: u32, max_width: u32, max_height: u32) -> Option<Scale> {
    let mut scale = None;

    if height > max_height {
        scale = Some(Scale {
            width: scaled(width, max_height, height),
            height: max_height,
        });
    }

    if width > max_width {
        let mut new_width = max_width;
        let mut new_height = scaled(height, max_width, width);
        // Encoders such as libx264 reject odd heights.
        if new_height % 2 == 1 {
            new_width = scaled(new_width, new_height + 1, new_height);
            new_height += 1;
        }
        scale = Some(Scale {
            width: new_width,
            height: new_height,
        });
    }

    scale
}

/// `round(value * numerator / denominator)`
fn scaled(value: u32, numerator: u32, denominator: u32) -> u32 {
    (value as f64 * numerator as f64 / denominator as f64).round() as u32
}

/// Decide what happens to the video track.
pub fn decide_video(streams: &[StreamRecord], policy: &PolicyConfig) -> Result<VideoDecision> {
    let stream = select_video(streams).ok_or(Error::NoVideoStream)?;
    let (width, height) = stream.dimensions().unwrap_or((0, 0));

    let scale = compute_scale(width, height, policy.max_width, policy.max_height);
    let action = policy
        .video
        .action_for(&stream.codec_name, scale.is_some());

    let quality = match action {
        CodecAction::Transcode { .. } => Some(policy.video_quality.clone()),
        CodecAction::Copy => None,
    };

    tracing::debug!(
        index = stream.index,
        codec = %stream.codec_name,
        width,
        height,
        ?scale,
        ?action,
        "Video decision"
    );

    Ok(VideoDecision {
        index: stream.index,
        action,
        quality,
        scale,
    })
}
