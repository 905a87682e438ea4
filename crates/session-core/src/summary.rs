//! Confirmation summary rendering. Presentation only, no decision logic.

use quickrec_capture_model::{AudioSelection, CommandSpec};

/// Render the resolved configuration as a human-readable block for the
/// user to confirm before the executor launches.
pub fn render_summary(spec: &CommandSpec) -> String {
    let mut out = String::new();
    out.push_str("Recording configuration\n");
    out.push_str(&"-".repeat(50));
    out.push('\n');

    out.push_str(&format!(
        "  Screen:  {} {}{}\n",
        spec.screen.name,
        spec.screen.geometry(),
        if spec.screen.primary { " (primary)" } else { "" }
    ));

    out.push_str(&format!("  Audio:   {}\n", spec.audio.label()));
    match &spec.audio {
        AudioSelection::None => {}
        AudioSelection::MicOnly(dev) | AudioSelection::SystemOnly(dev) => {
            out.push_str(&format!("           {}\n", dev.display_name));
        }
        AudioSelection::Both { mic, system } => {
            out.push_str(&format!("           mic:    {}\n", mic.display_name));
            out.push_str(&format!("           system: {}\n", system.display_name));
        }
    }

    out.push_str(&format!(
        "  Quality: {} (crf {}, {}, {} kbps audio)\n",
        spec.quality.label.as_str(),
        spec.quality.crf,
        spec.quality.encoder_preset.as_str(),
        spec.quality.audio_bitrate_kbps
    ));
    out.push_str(&format!("  FPS:     {}\n", spec.fps));
    out.push_str(&format!("  Output:  {}\n", spec.output_path.display()));

    out
}
