use std::io::{self, Write};

use crgms::{ChargeState, ConformerTable, Microstate, format_count, format_energy};

use crate::util::text::{format_charges, truncate};

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

const RANKING_WIDTH: usize = 90 - INDENT.len();
const MAX_RANKED_ROWS: usize = 15;

pub fn print_input_summary(
    conformers: &ConformerTable,
    samples: &[Microstate],
    states: &[ChargeState],
) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let occurrences = saturating_total(samples.iter().map(|s| s.count));
    let sites = samples.first().map_or(0, Microstate::site_count);

    let rows = vec![
        ("Conformers", format_count(conformers.len() as u64)),
        ("Microstates", format_count(samples.len() as u64)),
        ("Occurrences", format_count(occurrences)),
        ("Sites", format_count(sites as u64)),
        ("Charge States", format_count(states.len() as u64)),
    ];

    print_kv_table(&mut out, "Sampling Summary", &rows);
}

/// Prints the first ranked states with their share of all sampled occurrences.
pub fn print_ranking(title: &str, ranked: &[ChargeState], all: &[ChargeState]) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let total = saturating_total(all.iter().map(ChargeState::count));

    let rank_w = 4usize;
    let count_w = 9usize;
    let energy_w = 10usize;
    let share_w = 14usize;
    let sep_overhead = 16;
    let state_w =
        RANKING_WIDTH.saturating_sub(rank_w + count_w + energy_w + share_w + sep_overhead);

    let line = |left: &str, mid: &str, right: &str| {
        format!(
            "{INDENT}{left}{}{mid}{}{mid}{}{mid}{}{mid}{}{right}",
            "─".repeat(rank_w + 2),
            "─".repeat(count_w + 2),
            "─".repeat(energy_w + 2),
            "─".repeat(share_w + 2),
            "─".repeat(state_w + 2),
        )
    };

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, RANKING_WIDTH - 6)
    );
    let _ = writeln!(out, "{}", line("┌", "┬", "┐"));
    let _ = writeln!(
        out,
        "{INDENT}│ {:>rank_w$} │ {:>count_w$} │ {:>energy_w$} │ {:<share_w$} │ {:<state_w$} │",
        "#", "Count", "E", "Share", "State",
    );
    let _ = writeln!(out, "{}", line("├", "┼", "┤"));

    for (i, state) in ranked.iter().take(MAX_RANKED_ROWS).enumerate() {
        let pct = if total == 0 {
            0.0
        } else {
            state.count() as f64 / total as f64 * 100.0
        };
        let share = format!("{} {:>5.1}%", make_bar(pct, share_w - 7), pct);
        let _ = writeln!(
            out,
            "{INDENT}│ {:>rank_w$} │ {:>count_w$} │ {:>energy_w$} │ {:<share_w$} │ {:<state_w$} │",
            i + 1,
            truncate(&format_count(state.count()), count_w),
            truncate(&format_energy(state.average_energy()), energy_w),
            share,
            truncate(&format_charges(&state.charges()), state_w),
        );
    }

    if ranked.len() > MAX_RANKED_ROWS {
        let _ = writeln!(
            out,
            "{INDENT}│ {:>rank_w$} │ {:>count_w$} │ {:>energy_w$} │ {:<share_w$} │ {:<state_w$} │",
            "...",
            "...",
            "...",
            "",
            format!("({} more)", ranked.len() - MAX_RANKED_ROWS),
        );
    }

    let _ = writeln!(out, "{}", line("└", "┴", "┘"));
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<key_w$} │ {:>val_w$} │",
        INDENT, "Metric", "Value",
    );
    let _ = writeln!(
        out,
        "{}├{k_line}┼{v_line}┤",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}

fn saturating_total(counts: impl IntoIterator<Item = u64>) -> u64 {
    counts.into_iter().fold(0, u64::saturating_add)
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = (((pct / 100.0) * max_width as f64).round() as usize).min(max_width);
    let empty = max_width - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(make_bar(0.0, 4), "░░░░");
        assert_eq!(make_bar(50.0, 4), "██░░");
        assert_eq!(make_bar(100.0, 4), "████");
    }

    #[test]
    fn totals_clamp_instead_of_overflowing() {
        assert_eq!(saturating_total([3, 4]), 7);
        assert_eq!(saturating_total([u64::MAX, 1, 5]), u64::MAX);
        assert_eq!(saturating_total([]), 0);
    }

    #[test]
    fn bar_never_overflows() {
        assert_eq!(make_bar(250.0, 3), "███");
    }
}
