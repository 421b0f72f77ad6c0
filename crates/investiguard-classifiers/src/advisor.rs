//! Static investment advisor registry
//!
//! A hard-coded lookup of advisor names to credentials and regulator
//! registrations, plus the capitalized-word heuristic used to pull a candidate
//! advisor name out of free text.

use serde::Serialize;
use std::collections::HashMap;

/// Registration marker for advisors without a regulator record
pub const UNREGISTERED: &str = "UNREGISTERED";

/// One registry entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisorRecord {
    pub credentials: Vec<String>,
    pub registration: String,
}

impl AdvisorRecord {
    fn new(credentials: &[&str], registration: &str) -> Self {
        Self {
            credentials: credentials.iter().map(|c| c.to_string()).collect(),
            registration: registration.to_string(),
        }
    }

    fn unregistered() -> Self {
        Self::new(&[], UNREGISTERED)
    }

    /// Verified means registered with at least one credential
    pub fn is_verified(&self) -> bool {
        self.registration != UNREGISTERED && !self.credentials.is_empty()
    }
}

/// Outcome of verifying one advisor name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisorVerification {
    pub verified: bool,
    pub credentials: Vec<String>,
    pub registration: String,
    pub status: &'static str,
    pub risk_level: &'static str,
}

/// Immutable advisor lookup table
#[derive(Debug, Clone)]
pub struct AdvisorRegistry {
    advisors: HashMap<String, AdvisorRecord>,
}

impl AdvisorRegistry {
    /// Registry with the built-in advisor table
    pub fn new() -> Self {
        let advisors = [
            ("john smith", AdvisorRecord::new(&["CFP", "CFA"], "SEC123456")),
            ("sarah johnson", AdvisorRecord::new(&["CFP"], "FINRA789012")),
            ("mike williams", AdvisorRecord::new(&[], UNREGISTERED)),
        ]
        .into_iter()
        .map(|(name, record)| (name.to_string(), record))
        .collect();

        Self { advisors }
    }

    /// Look up a full name, case-insensitively
    pub fn lookup(&self, name: &str) -> Option<&AdvisorRecord> {
        self.advisors.get(&name.trim().to_lowercase())
    }

    pub fn verify(&self, name: &str) -> AdvisorVerification {
        let record = self
            .lookup(name)
            .cloned()
            .unwrap_or_else(AdvisorRecord::unregistered);
        let verified = record.is_verified();

        AdvisorVerification {
            verified,
            credentials: record.credentials,
            registration: record.registration,
            status: if verified { "active" } else { "unknown" },
            risk_level: if verified { "low" } else { "high" },
        }
    }

    /// Verify the first candidate name found in `text`; false when there is none
    pub fn verify_mentioned(&self, text: &str) -> bool {
        extract_candidate_name(text)
            .map(|name| self.verify(name).verified)
            .unwrap_or(false)
    }
}

impl Default for AdvisorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// First whitespace-separated title-case word longer than two characters.
///
/// Only one word is returned, so multi-word registry names never match
/// through this path. Kept for compatibility with existing clients.
pub fn extract_candidate_name(text: &str) -> Option<&str> {
    text.split_whitespace()
        .find(|word| word.chars().count() > 2 && is_title_case(word))
}

/// Every cased run starts with an uppercase letter followed only by lowercase ones
fn is_title_case(word: &str) -> bool {
    let mut seen_cased = false;
    let mut previous_cased = false;

    for c in word.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else {
            previous_cased = false;
        }
    }

    seen_cased
}
