//! Formatting utilities used for CLI and report outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Currency amount with thousands separators: `1234567` → `1,234,567`.
pub fn fmt_money(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if value < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

/// Hours with trailing zeros trimmed: `6.50` → `6.5`, `10.0` → `10`.
/// Rounded to two decimals.
pub fn fmt_hours(hours: f64) -> String {
    let s = format!("{:.2}", hours);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
