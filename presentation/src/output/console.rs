//! Console output formatter for panel results

use colored::Colorize;
use panel_domain::{NetworkReport, OutputFormat};

/// Formats panel results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render `report` in the requested format
    pub fn render(report: &NetworkReport, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(report),
            OutputFormat::Report => Self::format_report_only(report),
            OutputFormat::Json => Self::format_json(report),
        }
    }

    /// Format the complete run: transcripts, shared insights and report
    pub fn format(report: &NetworkReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Agent Panel Results"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n\n",
            "Topic:".cyan().bold(),
            Self::first_line(&report.topic)
        ));
        output.push_str(&format!(
            "{} {} subgroups, {} rounds, {} turns\n",
            "Panel:".cyan().bold(),
            report.subgroups.len(),
            report.rounds,
            report.total_turns()
        ));

        for (i, subgroup) in report.subgroups.iter().enumerate() {
            output.push_str(&Self::section_header(&format!(
                "Subgroup {} ({})",
                i + 1,
                subgroup.agents.join(", ")
            )));
            for line in &subgroup.lines {
                output.push_str(&Self::transcript_line(line));
                output.push('\n');
            }
        }

        if !report.insights.is_empty() {
            output.push_str(&Self::section_header("Shared Insights"));
            for insight in &report.insights {
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    format!(
                        "── Round {}, subgroup {} ──",
                        insight.round,
                        insight.subgroup + 1
                    )
                    .yellow()
                    .bold(),
                    insight.content
                ));
            }
        }

        output.push_str(&Self::section_header("Final Report"));
        output.push_str(&format!("\n{}\n", report.final_report));

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(report: &NetworkReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Final report only (concise output)
    pub fn format_report_only(report: &NetworkReport) -> String {
        format!(
            "{}\n\n{}\n",
            "=== Final Report ===".cyan().bold(),
            report.final_report
        )
    }

    /// Color the speaker of a `"<agent>: <text>"` line
    pub fn transcript_line(line: &str) -> String {
        match line.split_once(": ") {
            Some((agent, text)) => format!("{} {}", format!("{}:", agent).yellow().bold(), text),
            None => line.to_string(),
        }
    }

    fn first_line(text: &str) -> &str {
        text.lines().next().unwrap_or("")
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
