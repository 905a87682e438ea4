//! Quality preset resolution.

use quickrec_capture_model::{QualityLabel, QualityPreset};

use crate::select::Chooser;

/// Resolve the encoding quality for the session.
///
/// Unlike screen and device resolution, a decline here does not abort:
/// the documented default is Medium. Infallible by design.
pub fn resolve_quality(chooser: &mut dyn Chooser) -> QualityPreset {
    let labels: Vec<String> = QualityLabel::ALL
        .iter()
        .map(|l| describe(*l))
        .collect();

    let label = match chooser.choose("Select quality", &labels) {
        Some(idx) => QualityLabel::ALL
            .get(idx)
            .copied()
            .unwrap_or(QualityLabel::Medium),
        None => {
            tracing::debug!("Quality choice declined; defaulting to Medium");
            QualityLabel::Medium
        }
    };

    QualityPreset::for_label(label)
}

fn describe(label: QualityLabel) -> String {
    let preset = QualityPreset::for_label(label);
    format!(
        "{} (crf {}, {}, {} kbps audio)",
        label.as_str(),
        preset.crf,
        preset.encoder_preset.as_str(),
        preset.audio_bitrate_kbps
    )
}
