//! Number formatting shared by the SSR fragments and the live page.

/// Format a number the way the page prints raw values: integers without a
/// fractional part, everything else with the shortest exact representation.
///
/// ```rust
/// use footprint_report::format::format_number;
///
/// assert_eq!(format_number(340.0), "340");
/// assert_eq!(format_number(3.2), "3.2");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Format with thousands separators, e.g. `2400` -> `2,400`.
pub fn format_thousands(value: f64) -> String {
    let raw = format_number(value);
    let (sign, rest) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Format with a fixed number of decimals (`toFixed`).
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_drop_fraction() {
        assert_eq!(format_number(45.0), "45");
        assert_eq!(format_number(-20.0), "-20");
        assert_eq!(format_number(22.5), "22.5");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_thousands(2400.0), "2,400");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1234567.5), "1,234,567.5");
        assert_eq!(format_thousands(-1500.0), "-1,500");
    }

    #[test]
    fn fixed_pads_decimals() {
        assert_eq!(format_fixed(10.0, 1), "10.0");
        assert_eq!(format_fixed(66.0, 0), "66");
    }
}
