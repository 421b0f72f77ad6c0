//! Phrase pattern tables
//!
//! Two fixed lists of case-insensitive regular expressions: phrases that raise
//! fraud risk and phrases that lower it. Each table is compiled once into a
//! `RegexSet`, so a scan reports which patterns are present rather than how
//! often they occur.

use investiguard_core::Result;
use regex::{RegexSet, RegexSetBuilder};

/// Phrases typical of investment fraud pitches
pub const SUSPICIOUS_PATTERNS: &[&str] = &[
    r"guaranteed\s+(?:\w+\s+)?(?:returns?|profits?|income|money|investments?)",
    r"get\s+rich\s+quick",
    r"limited\s+time\s+(?:offer|opportunity|deal)",
    r"insider\s+(?:information|tips?|knowledge)",
    r"\bno[\s-]+risk\b",
    r"double\s+(?:your\s+)?money",
    r"100%\s+(?:guaranteed|safe|secure)",
    r"exclusive\s+(?:opportunity|offer|deal)",
    r"act\s+now\s+or\s+miss\s+out",
    r"once\s+in\s+a\s+lifetime\s+opportunity",
    r"secret\s+(?:strategy|method|system)",
    r"overnight\s+(?:success|profits?|wealth)",
    r"risk[\s-]+free\s+(?:investment|trading|returns?)",
    r"government\s+(?:secret|hidden|classified)",
    r"millionaire\s+(?:secret|formula|blueprint)",
];

/// Phrases typical of responsible investment material
pub const REASSURING_PATTERNS: &[&str] = &[
    r"diversified\s+(?:portfolio|investments?)",
    r"long[\s-]+term\s+(?:investment|strategy)",
    r"thorough\s+(?:research|analysis)",
    r"regulated\s+(?:investment|advisor|adviser)",
    r"transparent\s+(?:fees|costs|risks)",
    r"past\s+performance\s+disclaimer",
    r"consult\s+(?:an?\s+)?(?:advisor|adviser|professional)",
    r"careful\s+(?:consideration|evaluation)",
];

/// Presence counts from one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternCounts {
    pub suspicious: usize,
    pub reassuring: usize,
}

/// Immutable suspicious/reassuring pattern tables
#[derive(Debug, Clone)]
pub struct PatternTables {
    suspicious: RegexSet,
    reassuring: RegexSet,
}

impl PatternTables {
    /// Build the built-in tables
    pub fn new() -> Result<Self> {
        Self::from_patterns(SUSPICIOUS_PATTERNS, REASSURING_PATTERNS)
    }

    /// Build tables from custom pattern lists
    pub fn from_patterns<S: AsRef<str>>(suspicious: &[S], reassuring: &[S]) -> Result<Self> {
        Ok(Self {
            suspicious: compile("suspicious", suspicious)?,
            reassuring: compile("reassuring", reassuring)?,
        })
    }

    /// Count the distinct patterns of each table present in `text`
    pub fn scan(&self, text: &str) -> PatternCounts {
        let lowered = text.to_lowercase();
        PatternCounts {
            suspicious: self.suspicious.matches(&lowered).iter().count(),
            reassuring: self.reassuring.matches(&lowered).iter().count(),
        }
    }

}

fn compile<S: AsRef<str>>(table: &str, patterns: &[S]) -> Result<RegexSet> {
    RegexSetBuilder::new(patterns.iter().map(|p| p.as_ref()))
        .case_insensitive(true)
        .build()
        .map_err(|e| {
            investiguard_core::Error::classifier(format!(
                "Failed to compile {} pattern table: {}",
                table, e
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_compile() {
        assert!(PatternTables::new().is_ok());
        assert_eq!(SUSPICIOUS_PATTERNS.len(), 15);
        assert_eq!(REASSURING_PATTERNS.len(), 8);
    }

    #[test]
    fn test_empty_text_matches_nothing() {
        let tables = PatternTables::new().unwrap();
        assert_eq!(tables.scan(""), PatternCounts::default());
    }

    #[test]
    fn test_pitch_matches_three_patterns() {
        let tables = PatternTables::new().unwrap();
        let text = "This is a guaranteed investment opportunity with no risk and double your money in 30 days!";
        let counts = tables.scan(text);
        assert!(counts.suspicious >= 3, "got {:?}", counts);
        assert_eq!(counts.reassuring, 0);
    }

    #[test]
    fn test_case_insensitive() {
        let tables = PatternTables::new().unwrap();
        assert_eq!(tables.scan("GET RICH QUICK").suspicious, 1);
        assert_eq!(tables.scan("Consult An Advisor first").reassuring, 1);
    }

    #[test]
    fn test_presence_not_frequency() {
        let tables = PatternTables::new().unwrap();
        let once = tables.scan("double your money");
        let many = tables.scan("double your money, double your money, double your money");
        assert_eq!(once, many);
    }

    #[test]
    fn test_reassuring_phrases() {
        let tables = PatternTables::new().unwrap();
        let counts = tables.scan(
            "Build a diversified portfolio with a long-term strategy and transparent fees.",
        );
        assert_eq!(counts.reassuring, 3);
        assert_eq!(counts.suspicious, 0);
    }

    #[test]
    fn test_invalid_custom_pattern() {
        let result = PatternTables::from_patterns(&["(unclosed"], &["fine"]);
        assert!(result.is_err());
    }
}
