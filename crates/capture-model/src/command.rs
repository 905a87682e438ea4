//! The fully-resolved command specification and its derived stream plan.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::audio::AudioSelection;
use crate::quality::QualityPreset;
use crate::screen::Screen;

/// The sole artifact handed to the executor: an immutable description of
/// the capture/encode operation, produced exactly once per session after
/// screen, audio, and quality have all been resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub screen: Screen,
    pub audio: AudioSelection,
    pub quality: QualityPreset,
    /// Capture frame rate for the video input.
    pub fps: u32,
    /// Timestamp-qualified output file. Its parent directory exists by the
    /// time the spec is handed over.
    pub output_path: PathBuf,
}

/// One input stream of the eventual transcoding command, identified by its
/// position in the plan's input list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputStream {
    /// The screen grab. Always input index 0.
    VideoCapture {
        width: u32,
        height: u32,
        offset_x: i32,
        offset_y: i32,
        fps: u32,
    },
    /// One audio source. Mic sorts before system when both are present;
    /// filter references are index-based and rely on this order.
    AudioCapture { backend_id: String },
}

/// How a mix filter terminates relative to its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MixDuration {
    /// Run until the longest input ends.
    Longest,
}

/// A two-into-one audio mix over input stream indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixFilter {
    /// Input indices of the streams being mixed, in plan order.
    pub input_indices: [usize; 2],
    pub duration: MixDuration,
    /// Input gain normalization; disabled so neither source is attenuated.
    pub normalize: bool,
}

/// A stream mapping clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamMap {
    /// Map the video stream of the given input.
    Video { input: usize },
    /// Map the audio stream of the given input unmixed.
    AudioInput { input: usize },
    /// Map the output of the mix filter.
    MixOutput,
}

/// The ordered stream index plan derived from a `CommandSpec`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamPlan {
    pub inputs: Vec<InputStream>,
    pub filter: Option<MixFilter>,
    pub maps: Vec<StreamMap>,
}

impl CommandSpec {
    /// Derive the ordered stream index plan.
    ///
    /// Guarantees, exhaustively over `AudioSelection`:
    /// - input 0 is the video capture;
    /// - audio inputs follow in mic-then-system order;
    /// - exactly one video map;
    /// - at most one audio map, raw for single sources, the mix output for
    ///   both;
    /// - a filter is present iff two audio inputs are, and it references
    ///   exactly their indices.
    pub fn stream_plan(&self) -> StreamPlan {
        let mut inputs = vec![InputStream::VideoCapture {
            width: self.screen.width,
            height: self.screen.height,
            offset_x: self.screen.offset_x,
            offset_y: self.screen.offset_y,
            fps: self.fps,
        }];

        for device in self.audio.devices() {
            inputs.push(InputStream::AudioCapture {
                backend_id: device.backend_id.clone(),
            });
        }

        let filter = if self.audio.requires_mix() {
            Some(MixFilter {
                input_indices: [1, 2],
                duration: MixDuration::Longest,
                normalize: false,
            })
        } else {
            None
        };

        let mut maps = vec![StreamMap::Video { input: 0 }];
        match &self.audio {
            AudioSelection::None => {}
            AudioSelection::MicOnly(_) | AudioSelection::SystemOnly(_) => {
                maps.push(StreamMap::AudioInput { input: 1 });
            }
            AudioSelection::Both { .. } => {
                maps.push(StreamMap::MixOutput);
            }
        }

        StreamPlan {
            inputs,
            filter,
            maps,
        }
    }
}

impl StreamPlan {
    /// Number of audio inputs after the video input.
    pub fn audio_input_count(&self) -> usize {
        self.inputs.len().saturating_sub(1)
    }
}
