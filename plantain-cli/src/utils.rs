use plantain_core::calculations::common::round_half_up;
use rust_decimal::Decimal;

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into an optional [`Decimal`].
///
/// Handles comma as thousands separator. Returns `None` for empty or whitespace-only input,
/// or when parsing fails (logs a warning on parse failure).
pub fn parse_optional_decimal(s: &str) -> Option<Decimal> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        None
    } else {
        normalized.parse().map_or_else(
            |e| {
                tracing::warn!(input = %s, "invalid optional decimal: {}", e);
                None
            },
            Some,
        )
    }
}

/// Parses a form field, falling back to `default` when the field is empty,
/// unparseable or zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use plantain_cli::utils::decimal_or;
///
/// assert_eq!(decimal_or("2,500", dec!(1000)), dec!(2500));
/// assert_eq!(decimal_or("", dec!(1000)), dec!(1000));
/// assert_eq!(decimal_or("0", dec!(1000)), dec!(1000));
/// ```
pub fn decimal_or(
    s: &str,
    default: Decimal,
) -> Decimal {
    match parse_optional_decimal(s) {
        Some(value) if !value.is_zero() => value,
        _ => default,
    }
}

/// Parses a whole-number form field with the same fallback rules as
/// [`decimal_or`]. Negative or fractional input also falls back.
pub fn count_or(
    s: &str,
    default: u32,
) -> u32 {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return default;
    }
    match normalized.parse::<u32>() {
        Ok(0) => default,
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(input = %s, "invalid count: {}", e);
            default
        }
    }
}

/// Reads a yes/no select. Anything other than an affirmative answer is "no".
pub fn parse_yes_no(s: &str) -> bool {
    matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "yes" | "y" | "true" | "1"
    )
}

/// Groups the integer digits of `value` in thousands after rounding to two
/// places. Trailing zero decimals are dropped.
///
/// ```
/// use rust_decimal_macros::dec;
/// use plantain_cli::utils::format_thousands;
///
/// assert_eq!(format_thousands(dec!(40800000)), "40,800,000");
/// assert_eq!(format_thousands(dec!(16133.3665)), "16,133.37");
/// ```
pub fn format_thousands(value: Decimal) -> String {
    let rounded = round_half_up(value).normalize();
    let text = rounded.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 + 4);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Formats an amount in naira, e.g. `₦1,055,000`.
pub fn naira(value: Decimal) -> String {
    format!("₦{}", format_thousands(value))
}

/// Formats an optional [`Decimal`] for display, using "n/a" when `None`.
pub fn opt_decimal_display(d: &Option<Decimal>) -> String {
    d.as_ref()
        .map(|v| format_thousands(*v))
        .unwrap_or_else(|| "n/a".to_string())
}
