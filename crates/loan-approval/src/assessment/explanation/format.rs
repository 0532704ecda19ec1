use super::super::locale::Locale;

/// Group the integer digits of `amount` and keep up to three fraction digits, trimming zeros.
pub(crate) fn grouped_number(amount: f64, locale: Locale) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let fixed = format!("{:.3}", round_half_up(amount.abs(), 3));
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let separator = locale.thousands_separator();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }

    if !fraction.is_empty() {
        grouped.push(locale.decimal_separator());
        grouped.push_str(fraction);
    }

    if amount < 0.0 && grouped.chars().any(|c| c.is_ascii_digit() && c != '0') {
        grouped.insert(0, '-');
    }

    grouped
}

pub(crate) fn currency(amount: f64, locale: Locale) -> String {
    format!("{} €", grouped_number(amount, locale))
}

/// Ratio rendered as a percentage with one decimal, e.g. `0.17` -> `17.0%`.
pub(crate) fn ratio_percent(ratio: f64) -> String {
    format!("{:.1}%", round_half_up(ratio * 100.0, 1))
}

/// `{:.N}` alone rounds exact ties to even; display values round them away from zero.
fn round_half_up(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    let rounded = (value * scale).round() / scale;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// Shortest decimal form followed by `%`, e.g. `11` -> `11%`, `11.5` -> `11.5%`.
pub(crate) fn plain_percent(value: f64) -> String {
    format!("{value}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn french_grouping_uses_narrow_spaces() {
        assert_eq!(grouped_number(60_000.0, Locale::French), "60\u{202f}000");
        assert_eq!(
            grouped_number(1_234_567.5, Locale::French),
            "1\u{202f}234\u{202f}567,5"
        );
        assert_eq!(grouped_number(999.0, Locale::French), "999");
    }

    #[test]
    fn english_grouping_uses_commas() {
        assert_eq!(grouped_number(60_000.0, Locale::English), "60,000");
        assert_eq!(grouped_number(12_345.678, Locale::English), "12,345.678");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        assert_eq!(grouped_number(-4_500.0, Locale::English), "-4,500");
    }

    #[test]
    fn exact_ties_round_up() {
        assert_eq!(ratio_percent(0.0625), "6.3%");
        assert_eq!(
            grouped_number(1_000.0625, Locale::French),
            "1\u{202f}000,063"
        );
        assert_eq!(grouped_number(0.0625, Locale::English), "0.063");
    }

    #[test]
    fn percentages() {
        assert_eq!(ratio_percent(0.17), "17.0%");
        assert_eq!(plain_percent(11.0), "11%");
        assert_eq!(plain_percent(11.5), "11.5%");
    }
}
