//! Command synthesis.
//!
//! A pure, total function over already-validated inputs: by the time
//! synthesis runs, every way the configuration could be invalid has been
//! eliminated during resolution, so there is nothing left to fail.

use std::path::PathBuf;

use quickrec_capture_model::{AudioSelection, CommandSpec, QualityPreset, Screen};

/// Capture frame rate for every session.
pub const CAPTURE_FPS: u32 = 30;

/// Assemble the immutable `CommandSpec` from the resolved configuration.
///
/// The derived stream plan (`CommandSpec::stream_plan`) guarantees the
/// index and ordering invariants: video at input 0, mic before system,
/// filter references matching the audio input indices.
pub fn synthesize(
    screen: Screen,
    audio: AudioSelection,
    quality: QualityPreset,
    output_path: PathBuf,
) -> CommandSpec {
    tracing::debug!(
        screen = %screen.name,
        audio = audio.label(),
        quality = quality.label.as_str(),
        output = %output_path.display(),
        "Synthesizing command spec"
    );

    CommandSpec {
        screen,
        audio,
        quality,
        fps: CAPTURE_FPS,
        output_path,
    }
}
