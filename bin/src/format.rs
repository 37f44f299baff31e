//! Output formatting helpers.

use bizval::traits::numeric::round_half_up;

/// Format a currency amount as whole units with thousands separators.
pub(crate) fn money(value: f64) -> String {
    let rounded = round_half_up(value);
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Format a multiple, e.g. `3.25x`.
pub(crate) fn multiple(value: f64) -> String {
    format!("{value:.2}x")
}
