//! Turns free-form amounts like `"1.5 ether"` or `"21000"` into an exact number of wei.
//!
//! Amounts with a fraction are split into their integer and fractional digits, each is scaled by
//! the unit multiplier using integer maths only. Floats never get involved.

use num::{BigInt, BigUint, Integer, Zero};
use thiserror::Error;
use tracing::{debug, instrument};

use super::{
    unit::{Unit, UnknownUnitError},
    WeiAmount,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseWeiError {
    #[error("failed to parse empty value")]
    EmptyInput,
    #[error("unknown format of {0}")]
    MalformedInput(String),
    #[error(transparent)]
    UnknownUnit(#[from] UnknownUnitError),
    #[error("{0} results in a fractional number of wei")]
    FractionalBaseUnit(String),
    #[error("{0} results in a negative number of wei")]
    NegativeResult(String),
}

/// The digits of a number before multiplying by its unit. An absent integer part, as in `.5`, is
/// read as zero.
#[derive(Debug, PartialEq, Eq)]
pub struct ParsedQuantity {
    pub integer: Option<BigUint>,
    /// Fractional digits with trailing zeros trimmed, and how many digits that was.
    pub fraction: Option<(BigUint, usize)>,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{digits} fractional digits is finer than one wei in {unit}")]
pub struct FractionTooPrecise {
    pub digits: usize,
    pub unit: Unit,
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|byte| byte.is_ascii_digit())
}

impl ParsedQuantity {
    pub fn parse(number: &str) -> Option<Self> {
        let (integer, fraction) = match number.split_once('.') {
            None => (number, None),
            Some((integer, fraction)) => (integer, Some(fraction)),
        };

        let integer = match (integer, fraction) {
            ("", Some(_)) => None,
            (integer, _) if is_digits(integer) => Some(integer.parse::<BigUint>().ok()?),
            _ => return None,
        };

        let fraction = match fraction {
            None => None,
            Some(fraction) if !is_digits(fraction) => return None,
            Some(fraction) => {
                let trimmed = fraction.trim_end_matches('0');
                if trimmed.is_empty() {
                    None
                } else {
                    Some((trimmed.parse::<BigUint>().ok()?, trimmed.len()))
                }
            }
        };

        Some(ParsedQuantity { integer, fraction })
    }

    /// Scales both parts by the unit multiplier.
    pub fn to_wei(&self, unit: Unit) -> Result<BigInt, FractionTooPrecise> {
        let multiplier = unit.multiplier();

        let integer_wei = match &self.integer {
            Some(integer) => integer * &multiplier,
            None => BigUint::zero(),
        };

        let fraction_wei = match &self.fraction {
            None => BigUint::zero(),
            Some((fraction, digits)) => {
                if *digits > unit.exponent() as usize {
                    return Err(FractionTooPrecise {
                        digits: *digits,
                        unit,
                    });
                }
                let scale = BigUint::from(10u32).pow(*digits as u32);
                let (per_digit, remainder) = multiplier.div_rem(&scale);
                if !remainder.is_zero() {
                    return Err(FractionTooPrecise {
                        digits: *digits,
                        unit,
                    });
                }
                per_digit * fraction
            }
        };

        Ok(BigInt::from(integer_wei + fraction_wei))
    }
}

/// Splits on the single separating space. Bare numbers are denominated in wei.
pub fn split_number_and_unit(input: &str) -> Result<(&str, &str), ParseWeiError> {
    match input.split(' ').collect::<Vec<_>>().as_slice() {
        [number] => Ok((*number, "")),
        [number, unit] => Ok((*number, *unit)),
        _ => Err(ParseWeiError::MalformedInput(input.to_string())),
    }
}

#[instrument(level = "trace")]
pub fn parse_wei(input: &str) -> Result<WeiAmount, ParseWeiError> {
    if input.is_empty() {
        return Err(ParseWeiError::EmptyInput);
    }

    let (number, unit_name) = split_number_and_unit(input)?;

    let quantity = ParsedQuantity::parse(number).ok_or_else(|| {
        debug!(input, number, "failed to parse numeric value");
        ParseWeiError::MalformedInput(input.to_string())
    })?;

    let unit = unit_name.parse::<Unit>().map_err(|error| {
        debug!(input, %error, "failed to parse unit");
        error
    })?;

    let wei = quantity.to_wei(unit).map_err(|error| {
        debug!(input, %error, "fraction is more precise than one wei");
        ParseWeiError::FractionalBaseUnit(input.to_string())
    })?;

    wei.to_biguint()
        .map(WeiAmount)
        .ok_or_else(|| ParseWeiError::NegativeResult(input.to_string()))
}
