//! Terminal rendering of the aggregated per-day session log.

use ansi_term::Colour;

use crate::models::DayGroup;
use crate::utils::time::clock_12h;

/// Print the day groups most recent first: a bold header per day with the
/// session count and summed duration, then the numbered sessions in file
/// order with 12-hour clock times.
pub fn render(groups: &[DayGroup]) {
    if groups.is_empty() {
        println!("No sessions logged yet.");
        return;
    }

    for group in groups {
        let plural = if group.session_count() == 1 {
            "session"
        } else {
            "sessions"
        };
        let header = format!(
            "{} ({} {})",
            group.date,
            group.session_count(),
            plural
        );
        println!(
            "{}  total {}",
            Colour::Blue.bold().paint(header),
            Colour::Green.bold().paint(group.total_str())
        );

        for (i, row) in group.sessions.iter().enumerate() {
            println!(
                "  └─ Session {}  {} → {}  [{}]",
                i + 1,
                clock_12h(&row.start_time),
                clock_12h(&row.end_time),
                row.duration_raw
            );
        }
        println!();
    }
}
