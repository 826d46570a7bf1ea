use std::io::{stderr, stdout, Write};

use crossterm::{
    execute,
    style::{Print, Stylize},
};

use crate::{
    export::structured::records_to_json,
    model::tier::Tier,
    service::{
        collector::CollectionOutcome,
        report::{Reporter, Severity},
    },
};

const BAR_WIDTH: usize = 30;

/// Terminal frontend: a progress line per tier, diagnostics as colored notices.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, severity: Severity, message: &str) {
        let label = match severity {
            Severity::Info => "info".blue(),
            Severity::Warning => "warning".yellow(),
            Severity::Error => "error".red().bold(),
        };
        let mut err = stderr();
        let _ = execute!(err, Print(format!("{}: {}\n", label, message)));
    }

    fn tier_started(&self, tier: Tier, index: usize, total: usize) {
        let line = format!("{} {} collecting...\n", progress_bar(index, total), tier.as_str().bold());
        let mut err = stderr();
        let _ = execute!(err, Print(line));
    }

    fn tier_finished(&self, tier: Tier, collected: usize, index: usize, total: usize) {
        let count = if collected == 0 {
            "no matches".to_string().red()
        } else {
            format!("{} matches", collected).green()
        };
        let line = format!("{} {} {}\n", progress_bar(index + 1, total), tier.as_str().bold(), count);
        let mut err = stderr();
        let _ = execute!(err, Print(line));
    }
}

fn progress_bar(done: usize, total: usize) -> String {
    let filled = if total == 0 { BAR_WIDTH } else { done * BAR_WIDTH / total };
    format!("[{}{}] {}/{}", "#".repeat(filled), " ".repeat(BAR_WIDTH - filled), done, total)
}

pub fn print_summary(outcome: &CollectionOutcome) {
    let mut out = stdout();
    let _ = writeln!(out, "\n{}", "Collection summary".bold().underlined());
    let _ = writeln!(out, "Started:  {}", outcome.started_at.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out, "Elapsed:  {}s", outcome.elapsed().num_seconds());
    for (tier, count) in &outcome.per_tier {
        let _ = writeln!(out, "  {:<12} {:>3}", tier.as_str(), count);
    }
    let _ = writeln!(out, "Total matches collected: {}", outcome.records.len().to_string().bold());
}

/// Prints the first `limit` records the way they are exported.
pub fn print_preview(outcome: &CollectionOutcome, limit: usize) {
    if limit == 0 || outcome.records.is_empty() {
        return;
    }

    let shown = &outcome.records[..limit.min(outcome.records.len())];
    let mut out = stdout();
    let _ = writeln!(out, "\n{}", format!("Preview ({} of {})", shown.len(), outcome.records.len()).bold());
    let _ = writeln!(out, "{}", records_to_json(shown).pretty(2));
}
