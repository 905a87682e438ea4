//! Audio source enumeration via pactl.
//!
//! PulseAudio (and PipeWire's pulse shim) expose every recordable stream
//! as a "source". Monitor sources mirror a sink's output and carry a name
//! ending in `.monitor`; everything else is a capture input.

use std::process::Command;

use quickrec_capture_model::AudioDevice;
use quickrec_common::error::{QuickrecError, QuickrecResult};

/// The two disjoint device pools handed to audio resolution.
#[derive(Debug, Clone, Default)]
pub struct AudioPools {
    /// Microphone-style inputs.
    pub capture: Vec<AudioDevice>,
    /// Loopback/monitor sources ("system audio").
    pub monitor: Vec<AudioDevice>,
}

/// Enumerate audio sources into capture and monitor pools.
///
/// Either pool may come back empty; the selection engine offers only the
/// combinations the pools can satisfy.
pub fn detect_audio_devices() -> QuickrecResult<AudioPools> {
    tracing::debug!("Enumerating audio sources via pactl");

    let output = Command::new("pactl")
        .args(["list", "sources"])
        .output()
        .map_err(|e| QuickrecError::platform(format!("Failed to run pactl: {e}")))?;

    if !output.status.success() {
        return Err(QuickrecError::platform(format!(
            "pactl exited with status {}",
            output.status
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let pools = parse_pactl_sources(&stdout);
    tracing::debug!(
        capture = pools.capture.len(),
        monitor = pools.monitor.len(),
        "Audio sources enumerated"
    );
    Ok(pools)
}

/// Parse `pactl list sources` output.
///
/// Each source block carries indented `Name:` and `Description:` lines;
/// the description is what users recognize, the name is what the backend
/// wants. A block missing either line is dropped.
pub fn parse_pactl_sources(output: &str) -> AudioPools {
    let mut pools = AudioPools::default();

    let mut name: Option<String> = None;
    let mut description: Option<String> = None;

    let mut flush = |name: &mut Option<String>, description: &mut Option<String>| {
        if let (Some(backend_id), Some(display_name)) = (name.take(), description.take()) {
            let device = if backend_id.ends_with(".monitor") {
                AudioDevice::monitor(display_name, backend_id)
            } else {
                AudioDevice::capture(display_name, backend_id)
            };
            match device.kind {
                quickrec_capture_model::DeviceKind::Capture => pools.capture.push(device),
                quickrec_capture_model::DeviceKind::Monitor => pools.monitor.push(device),
            }
        }
        *name = None;
        *description = None;
    };

    for line in output.lines() {
        if line.starts_with("Source #") {
            flush(&mut name, &mut description);
            continue;
        }

        let trimmed = line.trim();
        if let Some(value) = trimmed.strip_prefix("Name: ") {
            name = Some(value.trim().to_string());
        } else if let Some(value) = trimmed.strip_prefix("Description: ") {
            description = Some(value.trim().to_string());
        }
    }
    flush(&mut name, &mut description);

    pools
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickrec_capture_model::DeviceKind;

    const PACTL_FIXTURE: &str = "\
Source #0
\tState: SUSPENDED
\tName: alsa_output.pci-0000_00_1f.3.analog-stereo.monitor
\tDescription: Monitor of Built-in Audio Analog Stereo
\tDriver: module-alsa-card.c
Source #1
\tState: SUSPENDED
\tName: alsa_input.pci-0000_00_1f.3.analog-stereo
\tDescription: Built-in Audio Analog Stereo
\tDriver: module-alsa-card.c
Source #2
\tState: RUNNING
\tName: alsa_input.usb-Generic_USB_Mic-00.mono-fallback
\tDescription: USB Mic
\tDriver: module-alsa-card.c
";

    #[test]
    fn test_splits_capture_and_monitor_pools() {
        let pools = parse_pactl_sources(PACTL_FIXTURE);

        assert_eq!(pools.capture.len(), 2);
        assert_eq!(pools.monitor.len(), 1);

        assert_eq!(pools.monitor[0].display_name, "Monitor of Built-in Audio Analog Stereo");
        assert_eq!(pools.monitor[0].kind, DeviceKind::Monitor);
        assert!(pools.monitor[0].backend_id.ends_with(".monitor"));

        assert_eq!(pools.capture[1].display_name, "USB Mic");
        assert_eq!(
            pools.capture[1].backend_id,
            "alsa_input.usb-Generic_USB_Mic-00.mono-fallback"
        );
    }

    #[test]
    fn test_block_missing_description_is_dropped() {
        let partial = "Source #0\n\tName: alsa_input.orphan\nSource #1\n\tName: alsa_input.ok\n\tDescription: Ok Mic\n";
        let pools = parse_pactl_sources(partial);
        assert_eq!(pools.capture.len(), 1);
        assert_eq!(pools.capture[0].display_name, "Ok Mic");
    }

    #[test]
    fn test_empty_output_yields_empty_pools() {
        let pools = parse_pactl_sources("");
        assert!(pools.capture.is_empty());
        assert!(pools.monitor.is_empty());
    }
}
