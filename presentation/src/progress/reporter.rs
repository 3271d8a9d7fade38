//! Progress reporting for panel runs

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use panel_application::ports::progress::ProgressNotifier;
use panel_domain::{AgentId, InsightSummary, Phase};
use std::sync::Mutex;

/// Reports progress with an indicatif bar per phase.
///
/// Transcript lines and shared summaries are printed above the bar so they
/// stay readable while the bar redraws.
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn phase_title(phase: &Phase, round: usize) -> String {
        match phase {
            Phase::FinalReport => phase.display_name().to_string(),
            _ => format!("Round {}: {}", round, phase.display_name()),
        }
    }

    fn print(&self, line: String) {
        match self.phase_bar.lock() {
            Ok(guard) => match guard.as_ref() {
                Some(pb) => pb.println(line),
                None => {
                    let _ = self.multi.println(line);
                }
            },
            Err(_) => println!("{}", line),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: &Phase, round: usize, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(Self::phase_title(phase, round));
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.phase_bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_phase_complete(&self, phase: &Phase, _round: usize) {
        let Ok(mut bar) = self.phase_bar.lock() else {
            return;
        };
        if let Some(pb) = bar.take() {
            pb.finish_with_message(format!("{} complete!", phase.display_name().green()));
        }
    }

    fn on_turn(&self, subgroup: usize, agent: &AgentId, response: &str) {
        self.print(format!(
            "{} {}",
            format!("[{}]", subgroup + 1).dimmed(),
            ConsoleFormatter::transcript_line(&format!("{}: {}", agent, response))
        ));
        if let Ok(bar) = self.phase_bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            pb.set_message(agent.to_string());
            pb.inc(1);
        }
    }

    fn on_insight(&self, insight: &InsightSummary) {
        self.print(format!(
            "{} {}",
            format!("Summary from subgroup {}:", insight.subgroup + 1)
                .green()
                .bold(),
            insight.content
        ));
        if let Ok(bar) = self.phase_bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            pb.inc(1);
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: &Phase, round: usize, total_tasks: usize) {
        println!(
            "{} {} ({} tasks)",
            "->".cyan(),
            ProgressReporter::phase_title(phase, round).bold(),
            total_tasks
        );
    }

    fn on_phase_complete(&self, _phase: &Phase, _round: usize) {
        println!();
    }

    fn on_turn(&self, subgroup: usize, agent: &AgentId, response: &str) {
        println!(
            "  [{}] {}",
            subgroup + 1,
            ConsoleFormatter::transcript_line(&format!("{}: {}", agent, response))
        );
    }

    fn on_insight(&self, insight: &InsightSummary) {
        println!(
            "  {} {}",
            format!("Summary from subgroup {}:", insight.subgroup + 1).green(),
            insight.content
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_titles() {
        assert_eq!(
            ProgressReporter::phase_title(&Phase::Discussion, 2),
            "Round 2: Discussion"
        );
        assert_eq!(
            ProgressReporter::phase_title(&Phase::FinalReport, 3),
            "Final Report"
        );
    }

    #[test]
    fn test_reporter_survives_full_phase_cycle() {
        let reporter = ProgressReporter::new();
        reporter.on_turn(0, &AgentId::numbered(0), "before any phase");
        reporter.on_phase_start(&Phase::Discussion, 1, 2);
        reporter.on_turn(0, &AgentId::numbered(0), "a");
        reporter.on_turn(1, &AgentId::numbered(2), "b");
        reporter.on_phase_complete(&Phase::Discussion, 1);
        reporter.on_insight(&InsightSummary::new(1, 0, "s"));

        assert!(reporter.phase_bar.lock().unwrap().is_none());
    }
}
