/// Greedy word wrap; words longer than `width` are split across lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        while chars.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = chars.split_off(width);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }

        let word_len = chars.len();
        if word_len == 0 {
            continue;
        }
        if current_len == 0 {
            current = chars.into_iter().collect();
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.extend(chars);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::replace(&mut current, chars.into_iter().collect()));
            current_len = word_len;
        }
    }

    if current_len > 0 {
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Shortens `s` to at most `max_len` characters, marking the cut with `…`.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len == 0 {
        return String::new();
    }

    let mut out: String = s.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

/// Compact signed rendering of a charge pattern: `+1 0 -1`.
pub fn format_charges(charges: &[i32]) -> String {
    charges
        .iter()
        .map(|&c| if c > 0 { format!("+{c}") } else { c.to_string() })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap("unknown conformer", 40), vec!["unknown conformer"]);
    }

    #[test]
    fn wrap_breaks_between_words() {
        assert_eq!(
            wrap("charge state has zero count", 12),
            vec!["charge state", "has zero", "count"]
        );
    }

    #[test]
    fn wrap_splits_overlong_words() {
        assert_eq!(
            wrap("see /very/long/path ok", 6),
            vec!["see", "/very/", "long/p", "ath ok"]
        );
    }

    #[test]
    fn wrap_of_empty_text_is_one_empty_line() {
        assert_eq!(wrap("   ", 10), vec![String::new()]);
    }

    #[test]
    fn truncate_leaves_fitting_text_alone() {
        assert_eq!(truncate("count", 5), "count");
        assert_eq!(truncate("E", 10), "E");
    }

    #[test]
    fn truncate_marks_the_cut() {
        assert_eq!(truncate("+1 0 -1 +1 0", 6), "+1 0 …");
        assert_eq!(truncate("Å·Å·Å", 3), "Å·…");
        assert_eq!(truncate("abc", 1), "…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn charges_render_with_explicit_sign() {
        assert_eq!(format_charges(&[1, 0, -1, 2]), "+1 0 -1 +2");
        assert_eq!(format_charges(&[]), "");
    }
}
