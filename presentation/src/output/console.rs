//! Console output formatter for panel reports

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use roundtable_domain::{PanelReport, WorkerOutput};

/// Formats panel reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete panel report
    pub fn format(report: &PanelReport) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&Self::header("Roundtable Panel Report"));
        output.push('\n');

        // Task
        output.push_str(&format!("{} {}\n\n", "Task:".cyan().bold(), report.task));

        // Plan
        output.push_str(&Self::section_header("Stage 1: Plan"));
        output.push_str(&format!("\n{}\n", report.plan.task_analysis()));
        if !report.plan.is_empty() {
            output.push_str(&format!("\n{}\n", "Convened roles:".cyan().bold()));
            for (role, weight) in report.plan.weighted_roles() {
                output.push_str(&format!("  * {} (weight {:.2})\n", role, weight));
            }
        } else {
            output.push_str(&format!(
                "\n{}\n",
                "No expert roles convened.".dimmed()
            ));
        }

        // Analyze
        output.push_str(&Self::section_header("Stage 2: Expert Analyses"));
        for analysis in &report.analyses {
            output.push_str(&Self::worker_block(analysis));
        }

        // Critique (if it ran)
        if !report.reviews.is_empty() {
            output.push_str(&Self::section_header("Stage 3: Critique Round"));
            for review in &report.reviews {
                output.push_str(&Self::worker_block(review));
                for critique in &review.critiques {
                    output.push_str(&format!(
                        "  {} {}: {}\n",
                        "->".yellow(),
                        format!("on {}", critique.target_role).bold(),
                        critique.feedback
                    ));
                    if let Some(correction) = &critique.suggested_correction {
                        output.push_str(&format!("     suggested: {}\n", correction));
                    }
                }
            }
        }

        // Failures (if the run degraded)
        if report.degraded() {
            output.push_str(&Self::section_header("Dropped Roles"));
            for failure in &report.failures {
                output.push_str(&format!(
                    "\n{} {}/{}: {}\n",
                    "x".red().bold(),
                    failure.stage.as_str(),
                    failure.role,
                    failure.reason
                ));
            }
        }

        // Final verdict
        output.push_str(&Self::section_header("Final: Integrated Verdict"));
        output.push_str(&format!(
            "\n{}\n\n{}\n",
            format!("Confidence: {:.2}", report.final_result.confidence.value())
                .yellow()
                .bold(),
            report.final_result.integrated_analysis
        ));

        // Key insights (if extracted)
        if !report.final_result.key_insights.is_empty() {
            output.push_str(&format!("\n{}\n", "Key Insights:".cyan().bold()));
            for insight in &report.final_result.key_insights {
                output.push_str(&format!("  * {}\n", insight));
            }
        }

        // Dissenting opinions (if any survived integration)
        if let Some(dissents) = &report.final_result.dissenting_opinions {
            output.push_str(&format!("\n{}\n", "Dissenting Opinions:".yellow().bold()));
            for dissent in dissents {
                output.push_str(&format!("  * {}\n", dissent));
            }
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(report: &PanelReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the final result only (concise output)
    pub fn format_final_only(report: &PanelReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Roundtable Verdict ===".cyan().bold()
        ));

        output.push_str(&format!("{} {}\n\n", "Task:".bold(), report.task));

        let roles: Vec<String> = report
            .plan
            .required_roles()
            .iter()
            .map(|r| r.to_string())
            .collect();
        output.push_str(&format!(
            "{} {}\n\n",
            "Roles consulted:".dimmed(),
            if roles.is_empty() {
                "none".to_string()
            } else {
                roles.join(", ")
            }
        ));

        if report.degraded() {
            let dropped: Vec<String> = report
                .failures
                .iter()
                .map(|f| f.role.to_string())
                .collect();
            output.push_str(&format!(
                "{} {}\n\n",
                "Dropped:".red(),
                dropped.join(", ")
            ));
        }

        output.push_str(&report.final_result.integrated_analysis);
        output.push('\n');

        if let Some(dissents) = &report.final_result.dissenting_opinions {
            output.push_str(&format!("\n{}\n", "Dissenting Opinions:".yellow().bold()));
            for dissent in dissents {
                output.push_str(&format!("  * {}\n", dissent));
            }
        }

        output.push_str(&format!(
            "\n{} {:.2}\n",
            "Confidence:".dimmed(),
            report.final_result.confidence.value()
        ));

        output
    }

    fn worker_block(output_item: &WorkerOutput) -> String {
        format!(
            "\n{}\n{}\n\n{}\n{}\n",
            format!("── {} ──", output_item.role).yellow().bold(),
            output_item.thought.reasoning,
            format!("Conclusion: {}", output_item.thought.conclusion).bold(),
            format!("Confidence: {:.2}", output_item.thought.confidence.value()).dimmed()
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, report: &PanelReport) -> String {
        Self::format(report)
    }

    fn format_json(&self, report: &PanelReport) -> String {
        Self::format_json(report)
    }

    fn format_final_only(&self, report: &PanelReport) -> String {
        Self::format_final_only(report)
    }
}
