//! Final integrated result

use crate::panel::confidence::Confidence;
use serde::{Deserialize, Serialize};

/// The arbiter's integrated verdict (Value Object)
///
/// Produced exactly once per run, after every expert stage has settled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalResult {
    /// The reconciled analysis
    pub integrated_analysis: String,
    /// Composite confidence derived from the panel's reports
    pub confidence: Confidence,
    /// Insights that shaped the result, most important first
    #[serde(default)]
    pub key_insights: Vec<String>,
    /// Disagreements the arbiter could not resolve
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dissenting_opinions: Option<Vec<String>>,
}

impl FinalResult {
    pub fn new(integrated_analysis: impl Into<String>, confidence: Confidence) -> Self {
        Self {
            integrated_analysis: integrated_analysis.into(),
            confidence,
            key_insights: Vec::new(),
            dissenting_opinions: None,
        }
    }

    pub fn with_key_insights(mut self, insights: Vec<String>) -> Self {
        self.key_insights = insights;
        self
    }

    pub fn with_dissenting_opinions(mut self, dissents: Vec<String>) -> Self {
        self.dissenting_opinions = Some(dissents);
        self
    }

    /// Whether any disagreement survived integration
    pub fn has_dissent(&self) -> bool {
        self.dissenting_opinions
            .as_ref()
            .is_some_and(|d| !d.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dissent_detection() {
        let confidence = Confidence::try_new(0.7).unwrap();
        let quiet = FinalResult::new("all agreed", confidence);
        assert!(!quiet.has_dissent());

        let contested = FinalResult::new("split panel", confidence)
            .with_dissenting_opinions(vec!["risk maintains the deal is overpriced".to_string()]);
        assert!(contested.has_dissent());
    }

    #[test]
    fn test_empty_dissent_list_is_not_dissent() {
        let confidence = Confidence::try_new(0.7).unwrap();
        let result = FinalResult::new("unanimous", confidence).with_dissenting_opinions(vec![]);
        assert!(!result.has_dissent());
    }
}
