//! Keyframe camera operations
//!
//! Text format: the first meaningful line holds the frame count, every
//! following meaningful line holds ten floats
//! (eye.xyz direction.xyz up.xyz fov). Blank lines and lines starting with
//! `#` are ignored. Bad frame lines are skipped with a warning.

use super::keyframe_data::{CameraKeyframe, KeyframePlayback, KeyframeTrack, PlaybackStep};
use crate::constants::playback::VALUES_PER_FRAME;
use crate::error::{PathContext, ViewerError, ViewerResult};
use glam::{Mat4, Vec3};
use std::path::Path;

// ============================================================================
// LOADING
// ============================================================================

/// Read and parse a keyframe file
pub fn load_keyframes(path: &Path) -> ViewerResult<KeyframeTrack> {
    let text = std::fs::read_to_string(path)
        .map_err(ViewerError::from)
        .with_path(path)?;
    let track = parse_keyframes(&text, &path.display().to_string())?;
    log::info!(
        "[Keyframes::load] Loaded {} frames from {}",
        track.frames.len(),
        path.display()
    );
    Ok(track)
}

/// Parse keyframe text
///
/// Fails only when the header is unusable or no frame survives parsing.
pub fn parse_keyframes(text: &str, source_name: &str) -> ViewerResult<KeyframeTrack> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let (header_line, header) = lines.next().ok_or_else(|| ViewerError::NoKeyframes {
        source_name: source_name.to_string(),
    })?;
    let declared: usize = header.parse().map_err(|_| ViewerError::KeyframeParse {
        line: header_line,
        reason: format!("expected frame count, found '{}'", header),
    })?;

    let mut frames = Vec::with_capacity(declared);
    let mut ignored = 0usize;
    for (line_number, line) in lines {
        if frames.len() == declared {
            ignored += 1;
            continue;
        }
        match parse_keyframe_line(line_number, line) {
            Ok(frame) => frames.push(frame),
            Err(err) => log::warn!("[Keyframes::parse] {}: skipping line: {}", source_name, err),
        }
    }

    if ignored > 0 {
        log::warn!(
            "[Keyframes::parse] {}: ignoring {} lines past the declared {} frames",
            source_name,
            ignored,
            declared
        );
    }

    if frames.is_empty() {
        return Err(ViewerError::NoKeyframes {
            source_name: source_name.to_string(),
        });
    }

    if frames.len() < declared {
        log::warn!(
            "[Keyframes::parse] {}: expected {} frames but only {} loaded",
            source_name,
            declared,
            frames.len()
        );
    }

    Ok(KeyframeTrack {
        frames,
        source_name: source_name.to_string(),
    })
}

/// Parse one frame line
pub fn parse_keyframe_line(line_number: usize, line: &str) -> ViewerResult<CameraKeyframe> {
    let values = line
        .split_whitespace()
        .map(|token| {
            token.parse::<f32>().map_err(|_| ViewerError::KeyframeParse {
                line: line_number,
                reason: format!("'{}' is not a number", token),
            })
        })
        .collect::<ViewerResult<Vec<f32>>>()?;

    if values.len() != VALUES_PER_FRAME {
        return Err(ViewerError::KeyframeParse {
            line: line_number,
            reason: format!("expected {} values, found {}", VALUES_PER_FRAME, values.len()),
        });
    }

    let direction = Vec3::new(values[3], values[4], values[5]);
    let direction = direction.try_normalize().ok_or_else(|| ViewerError::KeyframeParse {
        line: line_number,
        reason: "view direction has zero length".to_string(),
    })?;

    Ok(CameraKeyframe {
        eye: Vec3::new(values[0], values[1], values[2]),
        direction,
        up: Vec3::new(values[6], values[7], values[8]),
        fov_degrees: values[9],
    })
}

// ============================================================================
// PLAYBACK
// ============================================================================

/// Start a playback cursor at frame zero
pub fn init_playback(frame_duration: f32) -> KeyframePlayback {
    KeyframePlayback {
        frame_duration,
        ..Default::default()
    }
}

/// Rewind to frame zero
pub fn reset_playback(playback: &mut KeyframePlayback) {
    playback.frame_index = 0;
    playback.accumulated = 0.0;
}

/// Accumulate elapsed time and step whole frames
///
/// Frames are held, never blended. Running past the last frame wraps to
/// frame zero and reports `Looped` so the caller can restore its default pose.
pub fn advance_playback(
    playback: &mut KeyframePlayback,
    track: &KeyframeTrack,
    delta_time: f32,
) -> PlaybackStep {
    let frame_count = track.frames.len();
    if frame_count == 0 || playback.frame_duration <= 0.0 || !delta_time.is_finite() {
        return PlaybackStep::Holding;
    }

    playback.accumulated += delta_time.max(0.0);
    let start = playback.frame_index % frame_count;

    // Whole frames in one division; `as` saturates on absurd elapsed times
    let steps = (playback.accumulated / playback.frame_duration).floor() as usize;
    playback.accumulated %= playback.frame_duration;

    let looped = steps >= frame_count - start;
    playback.frame_index = (start + steps % frame_count) % frame_count;

    if looped {
        log::debug!("[Keyframes::advance] {} looped to frame 0", track.source_name);
        PlaybackStep::Looped
    } else if playback.frame_index != start {
        PlaybackStep::Advanced(playback.frame_index)
    } else {
        PlaybackStep::Holding
    }
}

/// Frame under the playback cursor
pub fn current_keyframe<'a>(
    playback: &KeyframePlayback,
    track: &'a KeyframeTrack,
) -> Option<&'a CameraKeyframe> {
    track.frames.get(playback.frame_index)
}

/// View matrix for a keyframe
pub fn keyframe_view_matrix(frame: &CameraKeyframe) -> Mat4 {
    Mat4::look_at_rh(frame.eye, frame.eye + frame.direction, frame.up)
}
