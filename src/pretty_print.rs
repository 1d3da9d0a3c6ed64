use std::io::Result;
use std::io::Write;

use colored::*;

use crate::summary::TimingsSummary;

/// Width every timing is right-aligned to.
const COLUMN_WIDTH: usize = 7;

pub fn format_summary(summary: &TimingsSummary, color: bool) -> Vec<String> {
    let mut lines = vec![String::new()];
    lines.extend(
        summary
            .timings()
            .iter()
            .map(|t| format!("{:>width$}", t, width = COLUMN_WIDTH)),
    );
    lines.push(format!(" {}", "=".repeat(6)));

    let total = format!("{:>width$}", summary.total(), width = COLUMN_WIDTH);
    // Pad before coloring, escape codes would count towards the width
    if color {
        lines.push(total.bold().to_string());
    } else {
        lines.push(total);
    }
    lines
}

pub fn format_usage(program_name: &str) -> String {
    format!("Usage: {} timings", program_name)
}

/// Need this producer so that nothing is formatted when the writer is unused
pub fn write_to(output_producer: impl Fn() -> Vec<String>, writer: &mut dyn Write) -> Result<()> {
    let output = output_producer();
    writeln!(writer, "{}", output.join("\n"))?;
    writer.flush()
}
