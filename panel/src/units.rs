//! Conversions between human-entered decimal strings and token base units.
//!
//! Token amounts travel on-chain as integers of the token's smallest unit.
//! The panel shows and accepts them as decimal strings with [`Unit::get`]
//! fraction digits.
use alloy::primitives::{
    utils::{self, ParseUnits, Unit},
    U256,
};

use crate::Error;

/// Converts a decimal string such as `"1.5"` into base units of `unit`.
///
/// Surrounding whitespace is ignored. Only ASCII digits and a single `.` are
/// accepted. Fraction digits beyond the unit's precision are rounded half up
/// on the first dropped digit.
///
/// # Errors
///
/// * [`Error::InvalidAmount`] - If `input` is empty, not a decimal number,
///   negative, or too large for 256 bits.
pub fn parse_units(input: &str, unit: Unit) -> Result<U256, Error> {
    let amount = input.trim();
    if amount.is_empty() {
        return Err(Error::invalid_amount(input, "amount is empty"));
    }

    let (negative, digits) = match amount.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, amount),
    };
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (integer.is_empty() && fraction.is_empty())
        || !is_digits(integer)
        || !is_digits(fraction)
    {
        return Err(Error::invalid_amount(input, "not a decimal number"));
    }
    if negative {
        return Err(Error::invalid_amount(input, "amount is negative"));
    }

    let decimals = usize::from(unit.get());
    let (kept, round_up) = match fraction.as_bytes().get(decimals) {
        Some(&dropped) => (&fraction[..decimals], dropped >= b'5'),
        None => (fraction, false),
    };
    let integer = if integer.is_empty() { "0" } else { integer };
    let normalized = if kept.is_empty() {
        integer.to_owned()
    } else {
        format!("{integer}.{kept}")
    };

    let value = match utils::parse_units(&normalized, unit.get()) {
        Ok(ParseUnits::U256(value)) => value,
        Ok(ParseUnits::I256(_)) => {
            return Err(Error::invalid_amount(input, "amount is negative"))
        }
        Err(e) => return Err(Error::invalid_amount(input, e)),
    };
    if round_up {
        value
            .checked_add(U256::from(1))
            .ok_or_else(|| Error::invalid_amount(input, "amount is too large"))
    } else {
        Ok(value)
    }
}

/// Formats `value` base units as the shortest decimal string.
///
/// Trailing fraction zeros are removed, so one whole token reads `"1"` and
/// half a token reads `"0.5"`.
#[must_use]
pub fn format_units(value: U256, unit: Unit) -> String {
    let (integer, fraction) = split(value, unit);
    let fraction = pad(fraction, unit.get());
    join(&integer.to_string(), fraction.trim_end_matches('0'))
}

/// Formats `value` base units with exactly `places` fraction digits.
///
/// Digits past `places` are rounded half up.
#[must_use]
pub fn format_fixed(value: U256, unit: Unit, places: u8) -> String {
    let decimals = unit.get();
    if places >= decimals {
        let (integer, fraction) = split(value, unit);
        let mut fraction = pad(fraction, decimals);
        fraction.push_str(&"0".repeat(usize::from(places - decimals)));
        return join(&integer.to_string(), &fraction);
    }

    let scale = U256::from(10).pow(U256::from(decimals - places));
    let (mut quotient, remainder) = value.div_rem(scale);
    // `remainder >= scale / 2` without overflowing for large units.
    if remainder >= scale - remainder {
        quotient += U256::from(1);
    }

    let (integer, fraction) =
        quotient.div_rem(U256::from(10).pow(U256::from(places)));
    join(&integer.to_string(), &pad(fraction, places))
}

/// Formats a read result, showing `"0"` when the value is absent.
#[must_use]
pub fn display_or_zero(value: Option<U256>, unit: Unit) -> String {
    value.map_or_else(|| "0".to_owned(), |value| format_units(value, unit))
}

/// Formats a read result with `places` fraction digits, showing zeros with
/// the same shape (`"0.00"`) when the value is absent.
#[must_use]
pub fn display_fixed_or_zero(
    value: Option<U256>,
    unit: Unit,
    places: u8,
) -> String {
    format_fixed(value.unwrap_or_default(), unit, places)
}

fn split(value: U256, unit: Unit) -> (U256, U256) {
    value.div_rem(unit.wei())
}

/// Left-pads `fraction` with zeros to `digits` characters.
fn pad(fraction: U256, digits: u8) -> String {
    if digits == 0 {
        return String::new();
    }
    let digits = usize::from(digits);
    format!("{:0>digits$}", fraction.to_string())
}

fn join(integer: &str, fraction: &str) -> String {
    if fraction.is_empty() {
        integer.to_owned()
    } else {
        format!("{integer}.{fraction}")
    }
}
