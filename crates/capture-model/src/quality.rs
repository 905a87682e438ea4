//! Encoding quality presets.
//!
//! The three-row table is static configuration data, not logic. The numbers
//! are a user-visible contract and must not drift.

use serde::{Deserialize, Serialize};

/// Tri-level quality label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityLabel {
    Low,
    Medium,
    High,
}

impl QualityLabel {
    pub const ALL: [QualityLabel; 3] = [QualityLabel::Low, QualityLabel::Medium, QualityLabel::High];

    pub fn as_str(self) -> &'static str {
        match self {
            QualityLabel::Low => "Low",
            QualityLabel::Medium => "Medium",
            QualityLabel::High => "High",
        }
    }

}

/// x264 speed/compression preset names used by the fixed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncoderPreset {
    Ultrafast,
    Veryfast,
    Slow,
}

impl EncoderPreset {
    pub fn as_str(self) -> &'static str {
        match self {
            EncoderPreset::Ultrafast => "ultrafast",
            EncoderPreset::Veryfast => "veryfast",
            EncoderPreset::Slow => "slow",
        }
    }
}

/// A resolved encoding parameter tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityPreset {
    pub label: QualityLabel,
    /// Constant rate factor, 0..=51.
    pub crf: u8,
    pub encoder_preset: EncoderPreset,
    pub audio_bitrate_kbps: u32,
}

impl QualityPreset {
    /// Look up the fixed preset for a label. Pure and total.
    pub fn for_label(label: QualityLabel) -> QualityPreset {
        match label {
            QualityLabel::Low => QualityPreset {
                label,
                crf: 35,
                encoder_preset: EncoderPreset::Ultrafast,
                audio_bitrate_kbps: 128,
            },
            QualityLabel::Medium => QualityPreset {
                label,
                crf: 28,
                encoder_preset: EncoderPreset::Veryfast,
                audio_bitrate_kbps: 192,
            },
            QualityLabel::High => QualityPreset {
                label,
                crf: 18,
                encoder_preset: EncoderPreset::Slow,
                audio_bitrate_kbps: 256,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_table_values() {
        let low = QualityPreset::for_label(QualityLabel::Low);
        assert_eq!(low.crf, 35);
        assert_eq!(low.encoder_preset, EncoderPreset::Ultrafast);
        assert_eq!(low.audio_bitrate_kbps, 128);

        let medium = QualityPreset::for_label(QualityLabel::Medium);
        assert_eq!(medium.crf, 28);
        assert_eq!(medium.encoder_preset, EncoderPreset::Veryfast);
        assert_eq!(medium.audio_bitrate_kbps, 192);

        let high = QualityPreset::for_label(QualityLabel::High);
        assert_eq!(high.crf, 18);
        assert_eq!(high.encoder_preset, EncoderPreset::Slow);
        assert_eq!(high.audio_bitrate_kbps, 256);
    }

    #[test]
    fn test_crf_within_x264_range() {
        for label in QualityLabel::ALL {
            assert!(QualityPreset::for_label(label).crf <= 51);
        }
    }
}
