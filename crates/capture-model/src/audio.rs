//! Audio sources and the closed set of recordable combinations.

use serde::{Deserialize, Serialize};

/// What side of the audio graph a source sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceKind {
    /// A physical or virtual microphone input.
    Capture,
    /// A loopback/monitor of system output ("system audio").
    Monitor,
}

/// An enumerated audio source.
///
/// Capture and monitor devices come from disjoint pools; a device belongs
/// to exactly one kind within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioDevice {
    /// Human-readable name shown in menus (e.g., "USB Mic").
    pub display_name: String,

    /// Backend identifier handed to the executor (e.g., a PulseAudio
    /// source name). Unique per device.
    pub backend_id: String,

    /// Which pool this device was enumerated from.
    pub kind: DeviceKind,
}

impl AudioDevice {
    pub fn capture(display_name: impl Into<String>, backend_id: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            backend_id: backend_id.into(),
            kind: DeviceKind::Capture,
        }
    }

    pub fn monitor(display_name: impl Into<String>, backend_id: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            backend_id: backend_id.into(),
            kind: DeviceKind::Monitor,
        }
    }
}

/// The resolved audio configuration for a session.
///
/// A closed sum type rather than two independent options: the mapping and
/// filter rules in the synthesizer are exhaustive over these four states,
/// which keeps inconsistent audio states unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioSelection {
    /// Video only.
    None,
    /// Microphone only. The device is Capture kind.
    MicOnly(AudioDevice),
    /// System loopback only. The device is Monitor kind.
    SystemOnly(AudioDevice),
    /// Microphone and system loopback, mixed into one output stream.
    /// Distinctness is structural: the two devices come from disjoint
    /// kind-partitioned pools.
    Both {
        mic: AudioDevice,
        system: AudioDevice,
    },
}

impl AudioSelection {
    /// Number of audio inputs this selection contributes after the video
    /// input.
    pub fn input_count(&self) -> usize {
        match self {
            AudioSelection::None => 0,
            AudioSelection::MicOnly(_) | AudioSelection::SystemOnly(_) => 1,
            AudioSelection::Both { .. } => 2,
        }
    }

    /// Whether the selection needs a mix filter (two streams into one).
    pub fn requires_mix(&self) -> bool {
        matches!(self, AudioSelection::Both { .. })
    }

    /// The contributed devices in stream-index order: mic before system.
    pub fn devices(&self) -> Vec<&AudioDevice> {
        match self {
            AudioSelection::None => vec![],
            AudioSelection::MicOnly(dev) | AudioSelection::SystemOnly(dev) => vec![dev],
            AudioSelection::Both { mic, system } => vec![mic, system],
        }
    }

    /// Short state label for summaries and logs.
    pub fn label(&self) -> &'static str {
        match self {
            AudioSelection::None => "none",
            AudioSelection::MicOnly(_) => "microphone",
            AudioSelection::SystemOnly(_) => "system audio",
            AudioSelection::Both { .. } => "microphone + system audio",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_counts_match_state() {
        let mic = AudioDevice::capture("USB Mic", "alsa_input.usb");
        let sys = AudioDevice::monitor("Monitor of Speakers", "alsa_output.monitor");

        assert_eq!(AudioSelection::None.input_count(), 0);
        assert_eq!(AudioSelection::MicOnly(mic.clone()).input_count(), 1);
        assert_eq!(AudioSelection::SystemOnly(sys.clone()).input_count(), 1);
        assert_eq!(
            AudioSelection::Both {
                mic: mic.clone(),
                system: sys.clone()
            }
            .input_count(),
            2
        );
    }

    #[test]
    fn test_both_orders_mic_before_system() {
        let mic = AudioDevice::capture("USB Mic", "alsa_input.usb");
        let sys = AudioDevice::monitor("Monitor of Speakers", "alsa_output.monitor");
        let both = AudioSelection::Both {
            mic: mic.clone(),
            system: sys.clone(),
        };

        let devices = both.devices();
        assert_eq!(devices, vec![&mic, &sys]);
        assert!(both.requires_mix());
    }

    #[test]
    fn test_single_selections_do_not_mix() {
        let mic = AudioDevice::capture("USB Mic", "alsa_input.usb");
        assert!(!AudioSelection::None.requires_mix());
        assert!(!AudioSelection::MicOnly(mic).requires_mix());
    }
}
