//! Fixed-precision formatting for reported quantities.
//!
//! Precision is part of the reporting contract: mass and volume at 2
//! decimals with space-grouped thousands, density at 3, temperature at 1,
//! percentages at 2 with an explicit sign.

/// Mass in kilograms: 2 decimals, space grouping.
pub fn format_mass(value: f64) -> String {
    format_grouped(value, 2)
}

/// Volume in liters: 2 decimals, space grouping.
pub fn format_volume(value: f64) -> String {
    format_grouped(value, 2)
}

/// Density in kg/l: 3 decimals.
pub fn format_density(value: f64) -> String {
    format!("{value:.3}")
}

/// Temperature in °C: 1 decimal.
pub fn format_temperature(value: f64) -> String {
    format!("{value:.1}")
}

/// Percentage: 2 decimals with an explicit sign.
pub fn format_percent(value: f64) -> String {
    format!("{value:+.2}")
}

/// Group the integer part with spaces every three digits.
fn format_grouped(value: f64, decimals: usize) -> String {
    let fixed = format!("{value:.decimals$}");
    let (number, fraction) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
