//! Turns a number of wei into a readable amount in the most natural unit, e.g. `1.5 Ether`.
//!
//! Because floats can't show these amounts exactly, the decimal point is placed in the digit
//! string directly.

use std::fmt;

use num::{BigUint, Integer, Zero};
use thiserror::Error;
use tracing::{instrument, trace};

use super::{unit::Unit, WeiAmount};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatWeiError {
    #[error("{0} wei is too large to express in any unit")]
    UnitOverflow(String),
}

#[derive(Debug, PartialEq, Eq)]
pub struct FormattedQuantity {
    pub value: String,
    pub unit: Unit,
}

impl fmt::Display for FormattedQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

const DIGITS_PER_TIER: usize = Unit::TIER_STEP_DIGITS as usize;

/// Steps down whole thousands. Returns what is left and how many tiers were stepped.
fn reduce_tiers(wei: &BigUint) -> (BigUint, usize) {
    let thousand = BigUint::from(1000u32);
    let mut remaining = wei.clone();
    let mut tier = 0;
    loop {
        if remaining < thousand {
            break;
        }
        let (quotient, remainder) = remaining.div_rem(&thousand);
        if !remainder.is_zero() {
            break;
        }
        remaining = quotient;
        tier += 1;
    }
    (remaining, tier)
}

/// Moves values with more than three integer digits up to a coarser unit. In standard mode
/// anything past GWei is shown in Ether.
fn desired_tier(tier: usize, digit_count: usize, standard: bool) -> usize {
    let desired = if digit_count > DIGITS_PER_TIER {
        let steps = digit_count / DIGITS_PER_TIER;
        if digit_count % DIGITS_PER_TIER == 0 {
            tier + steps - 1
        } else {
            tier + steps
        }
    } else {
        tier
    };

    if standard && desired > Unit::Gwei.tier() {
        Unit::Ether.tier()
    } else {
        desired
    }
}

/// Rewrites `digits`, a quantity at `tier`, as the same quantity at `desired`.
fn place_decimal(digits: &str, tier: usize, desired: usize) -> String {
    if desired < tier {
        let padding = "0".repeat((tier - desired) * DIGITS_PER_TIER);
        return format!("{digits}{padding}");
    }

    let shift = (desired - tier) * DIGITS_PER_TIER;
    if shift >= digits.len() {
        let leading_zeros = "0".repeat(shift - digits.len());
        format!("0.{leading_zeros}{digits}")
    } else if shift > 0 {
        let (integer, fraction) = digits.split_at(digits.len() - shift);
        format!("{integer}.{fraction}")
    } else {
        digits.to_string()
    }
}

fn trim_fraction(value: String) -> String {
    match value.split_once('.') {
        None => value,
        Some((integer, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                integer.to_string()
            } else {
                format!("{integer}.{fraction}")
            }
        }
    }
}

impl FormattedQuantity {
    pub fn from_wei(WeiAmount(wei): &WeiAmount, standard: bool) -> Result<Self, FormatWeiError> {
        let (reduced, tier) = reduce_tiers(wei);
        let digits = reduced.to_string();
        let desired = desired_tier(tier, digits.len(), standard);

        let unit = Unit::from_tier(desired)
            .ok_or_else(|| FormatWeiError::UnitOverflow(wei.to_string()))?;
        let value = trim_fraction(place_decimal(&digits, tier, desired));

        trace!(%wei, tier, desired, %unit, "formatted wei");

        Ok(FormattedQuantity { value, unit })
    }
}

/// Formats a number of wei. With `standard` set only Wei, KWei, MWei, GWei and Ether and up are
/// used.
#[instrument(level = "trace")]
pub fn format_wei(amount: &WeiAmount, standard: bool) -> Result<String, FormatWeiError> {
    FormattedQuantity::from_wei(amount, standard).map(|formatted| formatted.to_string())
}
