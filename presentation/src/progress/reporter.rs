//! Progress reporting for panel execution

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use roundtable_application::ProgressNotifier;
use roundtable_domain::Stage;
use std::sync::Mutex;

/// Reports progress during panel execution with fancy progress bars
pub struct ProgressReporter {
    multi: MultiProgress,
    stage_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            stage_bar: Mutex::new(None),
        }
    }

    fn stage_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }

    fn stage_display_name(stage: &Stage) -> &'static str {
        match stage {
            Stage::Plan => "Stage 1: Plan",
            Stage::Analyze => "Stage 2: Analyze",
            Stage::Critique => "Stage 3: Critique",
            Stage::Integrate => "Stage 4: Integrate",
        }
    }

    fn stage_short_name(stage: &Stage) -> &'static str {
        match stage {
            Stage::Plan => "Plan",
            Stage::Analyze => "Analyze",
            Stage::Critique => "Critique",
            Stage::Integrate => "Integrate",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: &Stage, total_tasks: usize) {
        let stage_name = Self::stage_display_name(stage);

        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::stage_style());
        pb.set_prefix(stage_name.to_string());
        pb.set_message("Starting...");

        *self.stage_bar.lock().unwrap() = Some(pb);
    }

    fn on_role_complete(&self, _stage: &Stage, role: &str, success: bool) {
        if let Some(pb) = self.stage_bar.lock().unwrap().as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), role)
            } else {
                format!("{} {}", "x".red(), role)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_stage_complete(&self, stage: &Stage) {
        if let Some(pb) = self.stage_bar.lock().unwrap().take() {
            let stage_name = Self::stage_short_name(stage);
            pb.finish_with_message(format!("{} complete!", stage_name.green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: &Stage, total_tasks: usize) {
        let stage_name = ProgressReporter::stage_display_name(stage);
        println!(
            "{} {} ({} tasks)",
            "->".cyan(),
            stage_name.bold(),
            total_tasks
        );
    }

    fn on_role_complete(&self, _stage: &Stage, role: &str, success: bool) {
        if success {
            println!("  {} {}", "v".green(), role);
        } else {
            println!("  {} {} (failed)", "x".red(), role);
        }
    }

    fn on_stage_complete(&self, _stage: &Stage) {
        println!();
    }
}
