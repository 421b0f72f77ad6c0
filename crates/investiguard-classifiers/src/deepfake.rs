//! Simulated deepfake detection
//!
//! There is no media analysis here. Each content kind maps to a reproducible
//! outcome drawn from a `StdRng` seeded with the configured seed mixed with a
//! SHA-256 digest of the kind, so results are stable across platforms and runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use sha2::{Digest, Sha256};

pub const INDICATORS: &[&str] = &[
    "unnatural_face_movements",
    "inconsistent_lighting",
    "audio_sync_issues",
    "blurred_edges",
    "repetitive_patterns",
    "metadata_inconsistencies",
];

/// Outcome of one simulated detection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeepfakeReport {
    pub is_deepfake: bool,
    pub confidence: u8,
    pub detected_indicators: Vec<String>,
    pub analysis: String,
}

#[derive(Debug, Clone, Copy)]
pub struct DeepfakeDetector {
    seed: u64,
}

impl DeepfakeDetector {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Deterministic detection for a content kind such as `text`, `link` or `webpage`
    pub fn detect(&self, content_kind: &str) -> DeepfakeReport {
        let mut rng = StdRng::seed_from_u64(self.seed ^ stable_hash(content_kind));

        // One draw flags either every indicator or none
        let detected_indicators: Vec<String> = if rng.gen_ratio(1, 3) {
            INDICATORS.iter().map(|i| i.to_string()).collect()
        } else {
            Vec::new()
        };

        let is_deepfake = detected_indicators.len() > 2;
        let confidence = (detected_indicators.len() * 15).clamp(60, 95) as u8;

        DeepfakeReport {
            is_deepfake,
            confidence,
            analysis: format!(
                "AI analysis suggests content is {}.",
                if is_deepfake {
                    "artificially generated"
                } else {
                    "authentic"
                }
            ),
            detected_indicators,
        }
    }
}

impl Default for DeepfakeDetector {
    fn default() -> Self {
        Self::new(0)
    }
}

/// First eight bytes of the SHA-256 digest, big-endian
pub(crate) fn stable_hash(value: &str) -> u64 {
    let digest = Sha256::digest(value.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}
