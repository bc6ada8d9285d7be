//! Output formatter trait

use roundtable_domain::PanelReport;

/// Trait for formatting panel reports
pub trait OutputFormatter {
    /// Format the complete panel report
    fn format(&self, report: &PanelReport) -> String;

    /// Format as JSON
    fn format_json(&self, report: &PanelReport) -> String;

    /// Format the final result only (concise output)
    fn format_final_only(&self, report: &PanelReport) -> String;
}
