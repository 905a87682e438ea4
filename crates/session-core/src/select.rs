//! Screen and audio-source resolution.
//!
//! Two behavioral contracts carried over from the interactive flow:
//! - exactly one candidate is auto-selected without prompting, so
//!   single-display/single-device setups stay frictionless;
//! - declining a required choice aborts the whole resolution. A declined
//!   mic picker after choosing "both" never downgrades to system-only.

use quickrec_capture_model::{AudioDevice, AudioSelection, Screen};
use quickrec_common::error::{QuickrecError, QuickrecResult};

/// The interactive chooser collaborator.
///
/// Given a prompt and an ordered list of labeled options, returns the
/// chosen index or `None` when the user declines. Singleton lists are
/// resolved by the callers here without ever invoking the chooser.
pub trait Chooser {
    fn choose(&mut self, prompt: &str, options: &[String]) -> Option<usize>;
}

/// Resolve exactly one screen from the enumerated candidates.
pub fn resolve_screen(chooser: &mut dyn Chooser, candidates: &[Screen]) -> QuickrecResult<Screen> {
    match candidates {
        [] => Err(QuickrecError::no_candidates("screens")),
        [only] => {
            tracing::debug!(screen = %only.name, "Auto-selected the only screen");
            Ok(only.clone())
        }
        many => {
            let labels: Vec<String> = many.iter().map(Screen::label).collect();
            let idx = chooser
                .choose("Select screen to record", &labels)
                .ok_or(QuickrecError::SelectionAborted)?;
            many.get(idx)
                .cloned()
                .ok_or(QuickrecError::SelectionAborted)
        }
    }
}

/// The audio combinations structurally possible given pool occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AudioCombo {
    None,
    MicOnly,
    SystemOnly,
    Both,
}

impl AudioCombo {
    fn label(self) -> &'static str {
        match self {
            AudioCombo::None => "No audio",
            AudioCombo::MicOnly => "Microphone only",
            AudioCombo::SystemOnly => "System audio only",
            AudioCombo::Both => "Microphone + system audio",
        }
    }
}

/// Resolve the session's audio configuration from the two device pools.
///
/// The combination menu offers only what the pools can satisfy: `None` is
/// always present, the others require their pool(s) to be non-empty. The
/// menu and each device sub-choice both follow the singleton auto-select
/// rule. Any decline aborts with `DeviceSelectionAborted`.
pub fn resolve_audio(
    chooser: &mut dyn Chooser,
    capture_pool: &[AudioDevice],
    monitor_pool: &[AudioDevice],
) -> QuickrecResult<AudioSelection> {
    let mut combos = vec![AudioCombo::None];
    if !capture_pool.is_empty() {
        combos.push(AudioCombo::MicOnly);
    }
    if !monitor_pool.is_empty() {
        combos.push(AudioCombo::SystemOnly);
    }
    if !capture_pool.is_empty() && !monitor_pool.is_empty() {
        combos.push(AudioCombo::Both);
    }

    let combo = match combos.as_slice() {
        [only] => {
            tracing::debug!("No audio devices enumerated; recording without audio");
            *only
        }
        many => {
            let labels: Vec<String> = many.iter().map(|c| c.label().to_string()).collect();
            let idx = chooser
                .choose("Select audio sources", &labels)
                .ok_or_else(|| {
                    QuickrecError::device_selection_aborted("audio combination declined")
                })?;
            *many.get(idx).ok_or_else(|| {
                QuickrecError::device_selection_aborted("audio combination declined")
            })?
        }
    };

    match combo {
        AudioCombo::None => Ok(AudioSelection::None),
        AudioCombo::MicOnly => {
            let mic = resolve_device(chooser, capture_pool, "microphone")?;
            Ok(AudioSelection::MicOnly(mic))
        }
        AudioCombo::SystemOnly => {
            let system = resolve_device(chooser, monitor_pool, "system audio source")?;
            Ok(AudioSelection::SystemOnly(system))
        }
        AudioCombo::Both => {
            // Mic first, then system: resolution order matches the stream
            // index order the synthesizer assigns.
            let mic = resolve_device(chooser, capture_pool, "microphone")?;
            let system = resolve_device(chooser, monitor_pool, "system audio source")?;
            Ok(AudioSelection::Both { mic, system })
        }
    }
}

/// Resolve one device from a pool the chosen combination requires.
fn resolve_device(
    chooser: &mut dyn Chooser,
    pool: &[AudioDevice],
    what: &str,
) -> QuickrecResult<AudioDevice> {
    match pool {
        [] => Err(QuickrecError::no_candidates(what)),
        [only] => {
            tracing::debug!(device = %only.display_name, "Auto-selected the only {what}");
            Ok(only.clone())
        }
        many => {
            let labels: Vec<String> = many.iter().map(|d| d.display_name.clone()).collect();
            let idx = chooser
                .choose(&format!("Select {what}"), &labels)
                .ok_or_else(|| {
                    QuickrecError::device_selection_aborted(format!("{what} choice declined"))
                })?;
            many.get(idx).cloned().ok_or_else(|| {
                QuickrecError::device_selection_aborted(format!("{what} choice declined"))
            })
        }
    }
}
