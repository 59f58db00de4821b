//! Raw text → numbers, numbers → stored cells.
//!
//! Blank and unparseable input both resolve to `None` ("no value"), never to zero.
//! On the way back, `None` and zero both become a blank cell: the store cannot tell
//! "explicitly zero" from "never entered".

/// Largest amount accepted from input or read back from a cell. Keeps every
/// monthly sum far inside `i64`.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

fn clean(text: &str) -> Option<String> {
    let s = text.trim();
    if s.is_empty() {
        return None;
    }
    Some(s.replace(',', ""))
}

/// Parse an integer amount such as `12000`, `1,234` or `6.0`.
/// Fractions are truncated toward zero. Magnitudes above [`MAX_AMOUNT`] are absent.
pub fn parse_number_strict(text: &str) -> Option<i64> {
    let t = parse_number_decimal(text)?.trunc();
    if t.abs() > MAX_AMOUNT as f64 {
        return None;
    }
    Some(t as i64)
}

/// Parse a decimal such as `6.5` or `1,234.5`.
pub fn parse_number_decimal(text: &str) -> Option<f64> {
    let s = clean(text)?;
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Values that can be written into a text cell of the `records` table.
pub trait CellValue: Copy {
    fn is_zero(&self) -> bool;
    fn render(&self) -> String;
}

impl CellValue for i64 {
    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl CellValue for f64 {
    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn render(&self) -> String {
        // shortest representation that parses back to the same value
        format!("{}", self)
    }
}

/// `None` or zero → blank cell, anything else → its literal numeric form.
pub fn to_stored_cell<T: CellValue>(value: Option<T>) -> String {
    match value {
        Some(v) if !v.is_zero() => v.render(),
        _ => String::new(),
    }
}

/// Digits-only reading used by the per-client amount box: `"¥12,000"` → 12000,
/// no digits at all → 0. `None` when the digits exceed [`MAX_AMOUNT`].
pub fn digits_only_amount(text: &str) -> Option<i64> {
    let digits: String = text
        .chars()
        .filter(|c| c.is_ascii_digit())
        .skip_while(|c| *c == '0')
        .collect();
    if digits.is_empty() {
        return Some(0);
    }
    digits.parse::<i64>().ok().filter(|v| *v <= MAX_AMOUNT)
}
