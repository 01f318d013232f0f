//! Number rendering expected by the remote API.

/// Render an amount or fee with exactly two fraction digits.
///
/// `12.5` becomes `"12.50"` and `3.14159` becomes `"3.14"`. The value is
/// rounded to nearest from its exact binary representation. Infinities
/// render as `+Inf` / `-Inf` and NaN as `NaN`, which is what the API has
/// always received for them.
pub fn format_amount(amount: f64) -> String {
    if amount.is_infinite() {
        return if amount > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    format!("{amount:.2}")
}
