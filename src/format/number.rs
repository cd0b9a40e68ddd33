const COMPACT_DECIMALS: usize = 6;

/// Shortest readable form of an input-like value: `2`, `-0.5`, `0.333333`.
pub fn compact(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{:.0}", value + 0.0);
    }
    let text = format!("{value:.prec$}", prec = COMPACT_DECIMALS);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    normalize_zero(trimmed)
}

/// Fixed number of decimals, used for computed values.
pub fn fixed(value: f64, precision: usize) -> String {
    normalize_zero(&format!("{value:.precision$}"))
}

fn normalize_zero(text: &str) -> String {
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_drops_needless_decimals() {
        assert_eq!(compact(2.0), "2");
        assert_eq!(compact(-3.0), "-3");
        assert_eq!(compact(-0.0), "0");
        assert_eq!(compact(2.5), "2.5");
        assert_eq!(compact(1.0 / 3.0), "0.333333");
        assert_eq!(compact(-1e-9), "0");
    }

    #[test]
    fn fixed_pads_and_clears_negative_zero() {
        assert_eq!(fixed(2.0, 3), "2.000");
        assert_eq!(fixed(-0.0001, 3), "0.000");
        assert_eq!(fixed(-1.23456, 2), "-1.23");
    }
}
