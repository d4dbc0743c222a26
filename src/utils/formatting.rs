//! Formatting utilities used for report and export outputs.

/// Capitalize the first letter of every word, lowercase the rest.
///
/// A "word" starts after any non-alphabetic character, so
/// `"new york city"` → `"New York City"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}

/// Seconds as printed in reports: integral values have no fractional part.
pub fn format_seconds(secs: f64) -> String {
    if secs.fract() == 0.0 && secs.abs() < 1e15 {
        format!("{}", secs as i64)
    } else {
        format!("{}", secs)
    }
}

/// Share of `count` over `total`, in percent.
pub fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Horizontal separator line built from the configured character.
pub fn separator_line(ch: &str, width: usize) -> String {
    ch.repeat(width)
}
