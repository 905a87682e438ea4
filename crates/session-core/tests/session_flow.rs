//! End-to-end resolution scenarios over the session pipeline:
//! enumerated candidates in, synthesized command spec out.

use std::path::PathBuf;

use quickrec_capture_model::{
    AudioDevice, AudioSelection, InputStream, MixDuration, QualityLabel, Screen, StreamMap,
};
use quickrec_common::error::QuickrecError;
use quickrec_session_core::{resolve_audio, resolve_quality, resolve_screen, synthesize, Chooser};

struct ScriptedChooser {
    answers: Vec<Option<usize>>,
    calls: usize,
}

impl ScriptedChooser {
    fn new(answers: Vec<Option<usize>>) -> Self {
        Self { answers, calls: 0 }
    }
}

impl Chooser for ScriptedChooser {
    fn choose(&mut self, _prompt: &str, _options: &[String]) -> Option<usize> {
        let answer = self
            .answers
            .get(self.calls)
            .copied()
            .expect("chooser invoked more times than scripted");
        self.calls += 1;
        answer
    }
}

fn primary_screen() -> Screen {
    Screen {
        name: "eDP-1".to_string(),
        width: 1920,
        height: 1080,
        offset_x: 0,
        offset_y: 0,
        primary: true,
    }
}

fn usb_mic() -> AudioDevice {
    AudioDevice::capture("USB Mic", "alsa_input.usb-mic.analog-stereo")
}

fn speakers_monitor() -> AudioDevice {
    AudioDevice::monitor(
        "Monitor of Speakers",
        "alsa_output.pci-0000.analog-stereo.monitor",
    )
}

/// Scenario A: one screen, zero audio devices, quality Medium. One input,
/// no audio map, crf 28 / veryfast / 192k.
#[test]
fn scenario_a_video_only_medium() {
    let mut chooser = ScriptedChooser::new(vec![Some(1)]); // quality menu only

    let screen = resolve_screen(&mut chooser, &[primary_screen()]).unwrap();
    let audio = resolve_audio(&mut chooser, &[], &[]).unwrap();
    let quality = resolve_quality(&mut chooser);

    // Screen and audio were singletons; only the quality menu prompted.
    assert_eq!(chooser.calls, 1);

    let spec = synthesize(
        screen,
        audio,
        quality,
        PathBuf::from("/tmp/rec/recording_2026-01-01_00-00-00.mp4"),
    );

    assert_eq!(spec.audio, AudioSelection::None);
    assert_eq!(spec.quality.label, QualityLabel::Medium);
    assert_eq!(spec.quality.crf, 28);
    assert_eq!(spec.quality.audio_bitrate_kbps, 192);

    let plan = spec.stream_plan();
    assert_eq!(plan.inputs.len(), 1);
    assert!(plan.filter.is_none());
    assert_eq!(plan.maps, vec![StreamMap::Video { input: 0 }]);
}

/// Scenario B: one screen, one capture device, one monitor device, Both,
/// quality High. Three inputs, one mix filter over indices 1 and 2 with
/// longest-duration termination and no normalization.
#[test]
fn scenario_b_both_high() {
    // Audio combo menu: [None, MicOnly, SystemOnly, Both] -> index 3.
    // Both device pools are singletons. Quality menu -> High (index 2).
    let mut chooser = ScriptedChooser::new(vec![Some(3), Some(2)]);

    let screen = resolve_screen(&mut chooser, &[primary_screen()]).unwrap();
    let audio = resolve_audio(&mut chooser, &[usb_mic()], &[speakers_monitor()]).unwrap();
    let quality = resolve_quality(&mut chooser);
    assert_eq!(chooser.calls, 2);

    let spec = synthesize(
        screen,
        audio,
        quality,
        PathBuf::from("/tmp/rec/recording_2026-01-01_00-00-01.mp4"),
    );

    assert_eq!(spec.quality.crf, 18);
    assert_eq!(spec.quality.audio_bitrate_kbps, 256);

    let plan = spec.stream_plan();
    assert_eq!(plan.inputs.len(), 3);
    assert!(matches!(plan.inputs[0], InputStream::VideoCapture { .. }));
    assert_eq!(
        plan.inputs[1],
        InputStream::AudioCapture {
            backend_id: usb_mic().backend_id
        }
    );
    assert_eq!(
        plan.inputs[2],
        InputStream::AudioCapture {
            backend_id: speakers_monitor().backend_id
        }
    );

    let filter = plan.filter.expect("both state must produce a mix filter");
    assert_eq!(filter.input_indices, [1, 2]);
    assert_eq!(filter.duration, MixDuration::Longest);
    assert!(!filter.normalize);

    assert_eq!(
        plan.maps,
        vec![StreamMap::Video { input: 0 }, StreamMap::MixOutput]
    );
}

/// Choosing "Both" and then declining the system-device picker aborts the
/// session before any spec exists.
#[test]
fn declined_sub_choice_aborts_before_synthesis() {
    let mut chooser = ScriptedChooser::new(vec![Some(3), None]);

    let capture = [usb_mic()];
    let monitors = [
        speakers_monitor(),
        AudioDevice::monitor("Monitor of HDMI", "alsa_output.hdmi.monitor"),
    ];

    // Mic pool is a singleton, so the declined prompt is the system picker.
    let err = resolve_audio(&mut chooser, &capture, &monitors).unwrap_err();
    assert!(matches!(err, QuickrecError::DeviceSelectionAborted { .. }));
}

/// Identical enumerator outputs and identical choices yield an identical
/// spec apart from the output path.
#[test]
fn resolution_is_idempotent_modulo_output_path() {
    let run = |path: &str| {
        let mut chooser = ScriptedChooser::new(vec![Some(3), Some(2)]);
        let screen = resolve_screen(&mut chooser, &[primary_screen()]).unwrap();
        let audio = resolve_audio(&mut chooser, &[usb_mic()], &[speakers_monitor()]).unwrap();
        let quality = resolve_quality(&mut chooser);
        synthesize(screen, audio, quality, PathBuf::from(path))
    };

    let first = run("/tmp/rec/recording_2026-01-01_00-00-00.mp4");
    let second = run("/tmp/rec/recording_2026-01-01_00-00-07.mp4");

    assert_ne!(first.output_path, second.output_path);

    let mut second_aligned = second.clone();
    second_aligned.output_path = first.output_path.clone();
    assert_eq!(first, second_aligned);
    assert_eq!(first.stream_plan(), second.stream_plan());
}
