use std::{fmt::Display, ops::Add, str::FromStr};

use num::{BigUint, Zero};
use serde::{Deserialize, Serialize};

use super::parse::{parse_wei, ParseWeiError};

pub const WEI_PER_GWEI: u128 = 1_000_000_000;

pub const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

// Arbitrary precision, so no amount of ETH overflows. When serializing, always a string, JSON
// numbers lose accuracy past 2^53.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct WeiAmount(pub BigUint);

impl WeiAmount {
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn from_eth(eth: u64) -> Self {
        Self(BigUint::from(eth) * WEI_PER_ETH)
    }

    /// None when `rhs` is larger, an amount is never negative.
    pub fn checked_sub(&self, WeiAmount(rhs): &WeiAmount) -> Option<WeiAmount> {
        let WeiAmount(lhs) = self;
        if rhs > lhs {
            None
        } else {
            Some(WeiAmount(lhs - rhs))
        }
    }
}

impl Add<WeiAmount> for WeiAmount {
    type Output = Self;

    fn add(self, WeiAmount(rhs): Self) -> Self::Output {
        let WeiAmount(lhs) = self;
        WeiAmount(lhs + rhs)
    }
}

impl Display for WeiAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let WeiAmount(amount) = self;
        write!(f, "{amount}")
    }
}

impl From<WeiAmount> for String {
    fn from(WeiAmount(amount): WeiAmount) -> Self {
        amount.to_string()
    }
}

impl FromStr for WeiAmount {
    type Err = ParseWeiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wei(s)
    }
}

impl TryFrom<String> for WeiAmount {
    type Error = ParseWeiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_wei(&value)
    }
}

impl From<u64> for WeiAmount {
    fn from(amount: u64) -> Self {
        WeiAmount(BigUint::from(amount))
    }
}

impl From<u128> for WeiAmount {
    fn from(amount: u128) -> Self {
        WeiAmount(BigUint::from(amount))
    }
}

impl From<BigUint> for WeiAmount {
    fn from(amount: BigUint) -> Self {
        WeiAmount(amount)
    }
}
