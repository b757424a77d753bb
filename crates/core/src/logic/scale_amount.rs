use crate::prelude::*;

/// Decimals assumed when the token metadata is unknown.
pub const DEFAULT_DECIMALS: u8 = 18;

/// Splits a plain decimal (`12`, `1.5`, `.5`, `5.`) into its integer and
/// fractional digits. Signs, exponents and anything but ASCII digits are
/// rejected.
pub(crate) fn split_decimal(amount: &str) -> Option<(&str, &str)> {
    let (integer, fraction) = amount.split_once('.').unwrap_or((amount, ""));
    if integer.is_empty() && fraction.is_empty() {
        return None;
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(integer) || !all_digits(fraction) {
        return None;
    }
    Some((integer, fraction))
}

/// Replaces the first decimal comma with a point.
pub(crate) fn normalize_amount(amount: &str) -> String {
    amount.replacen(',', ".", 1)
}

/// Returns `true` if `amount` is a plain decimal greater than zero.
pub fn is_positive_amount(amount: &str) -> bool {
    split_decimal(amount).is_some_and(|(integer, fraction)| {
        integer.bytes().chain(fraction.bytes()).any(|b| b != b'0')
    })
}

/// Converts a decimal amount into an integer of the token's smallest unit,
/// i.e. `amount * 10^decimals`, exactly.
///
/// Fractional digits beyond `decimals` are rejected unless they are all
/// zeros. Nothing is ever rounded.
pub fn scale_amount(amount: &str, decimals: u8) -> Result<U256, ScaleAmountError> {
    let normalized = normalize_amount(amount);
    let (integer, fraction) =
        split_decimal(&normalized).ok_or_else(|| ScaleAmountError::NotADecimal {
            amount: amount.to_owned(),
        })?;

    let fraction = fraction.trim_end_matches('0');
    let width = usize::from(decimals);
    if fraction.len() > width {
        return Err(ScaleAmountError::TooManyDecimals {
            amount: amount.to_owned(),
            decimals,
        });
    }

    let digits = format!("{integer}{fraction:0<width$}");
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(digits, 10).map_err(|_| ScaleAmountError::Overflow {
        amount: amount.to_owned(),
    })
}

/// Renders a scaled amount back as a decimal string without trailing zeros.
pub fn format_amount(value: U256, decimals: u8) -> String {
    let digits = value.to_string();
    let width = usize::from(decimals);
    if width == 0 {
        return digits;
    }
    let padded = format!("{digits:0>width$}", width = width + 1);
    let (integer, fraction) = padded.split_at(padded.len() - width);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        integer.to_owned()
    } else {
        format!("{integer}.{fraction}")
    }
}
