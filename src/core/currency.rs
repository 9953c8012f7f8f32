use rust_decimal::Decimal;

/// Display scale for US-dollar amounts
const USD_SCALE: u32 = 2;

/// Rounds an amount to whole cents.
///
/// Accumulated amounts (cart subtotals, taxes) are kept at full precision;
/// rounding happens only at presentation time so repeated aggregation never
/// compounds rounding error.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp(USD_SCALE)
}

/// Formats an amount as a US-dollar string with exactly two fraction digits
/// and thousands separators, e.g. `$1,234.56` or `-$5.00`.
pub fn format_usd(amount: Decimal) -> String {
    let cents = round_cents(amount);
    let negative = cents.is_sign_negative();
    let text = format!("{:.2}", cents.abs());
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if negative {
        format!("-${}.{}", grouped, frac)
    } else {
        format!("${}.{}", grouped, frac)
    }
}
