use std::{collections::HashMap, fmt, str::FromStr};

use enum_iterator::{all, Sequence};
use lazy_static::lazy_static;
use num::BigUint;
use thiserror::Error;

/// One rung on the unit ladder. Variants are in tier order, each one 1000x the previous.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Sequence)]
pub enum Unit {
    Wei,
    Kwei,
    Mwei,
    Gwei,
    Microether,
    Milliether,
    Ether,
    Kiloether,
    Megaether,
    Gigaether,
    Teraether,
}

use Unit::*;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown unit {0}")]
pub struct UnknownUnitError(pub String);

lazy_static! {
    static ref UNITS_BY_ALIAS: HashMap<&'static str, Unit> = all::<Unit>()
        .flat_map(|unit| unit.aliases().iter().map(move |alias| (*alias, unit)))
        .collect();
}

impl Unit {
    pub const TIER_STEP_DIGITS: u32 = 3;

    pub fn tier(self) -> usize {
        match self {
            Wei => 0,
            Kwei => 1,
            Mwei => 2,
            Gwei => 3,
            Microether => 4,
            Milliether => 5,
            Ether => 6,
            Kiloether => 7,
            Megaether => 8,
            Gigaether => 9,
            Teraether => 10,
        }
    }

    pub fn from_tier(tier: usize) -> Option<Self> {
        all::<Unit>().nth(tier)
    }

    /// Power of ten this unit is worth in wei.
    pub fn exponent(self) -> u32 {
        self.tier() as u32 * Self::TIER_STEP_DIGITS
    }

    pub fn multiplier(self) -> BigUint {
        BigUint::from(10u32).pow(self.exponent())
    }

    pub fn label(self) -> &'static str {
        match self {
            Wei => "Wei",
            Kwei => "KWei",
            Mwei => "MWei",
            Gwei => "GWei",
            Microether => "Microether",
            Milliether => "Milliether",
            Ether => "Ether",
            Kiloether => "Kiloether",
            Megaether => "Megaether",
            Gigaether => "Gigaether",
            Teraether => "Teraether",
        }
    }

    /// Every lower-case name that resolves to this unit. The empty string means wei.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Wei => &["", "wei"],
            Kwei => &["ada", "kwei", "kilowei"],
            Mwei => &["babbage", "mwei", "megawei"],
            Gwei => &["shannon", "gwei", "gigawei"],
            // szazbo is a long-standing misspelling still found in scripts.
            Microether => &["szabo", "szazbo", "micro", "microether"],
            Milliether => &["finney", "milli", "milliether"],
            Ether => &["ether"],
            Kiloether => &["einstein", "kilo", "kiloether"],
            Megaether => &["mega", "megaether"],
            Gigaether => &["giga", "gigaether"],
            Teraether => &["tera", "teraether"],
        }
    }

    pub fn named_alias(self) -> Option<&'static str> {
        match self {
            Kwei => Some("ada"),
            Mwei => Some("babbage"),
            Gwei => Some("shannon"),
            Microether => Some("szabo"),
            Milliether => Some("finney"),
            Kiloether => Some("einstein"),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Unit {
    type Err = UnknownUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UNITS_BY_ALIAS
            .get(s.to_lowercase().as_str())
            .copied()
            .ok_or_else(|| UnknownUnitError(s.to_string()))
    }
}

/// Multiplier relative to wei for a case-insensitive unit name.
pub fn multiplier_for(unit_name: &str) -> Result<BigUint, UnknownUnitError> {
    unit_name.parse::<Unit>().map(Unit::multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_wei_are_one_test() {
        assert_eq!(multiplier_for("").unwrap(), BigUint::from(1u32));
        assert_eq!(multiplier_for("wei").unwrap(), BigUint::from(1u32));
    }

    #[test]
    fn named_and_metric_aliases_agree_test() {
        assert_eq!(
            multiplier_for("finney").unwrap(),
            multiplier_for("milliether").unwrap()
        );
        assert_eq!(
            multiplier_for("shannon").unwrap(),
            BigUint::from(1_000_000_000u64)
        );
        assert_eq!(
            multiplier_for("szazbo").unwrap(),
            multiplier_for("szabo").unwrap()
        );
    }

    #[test]
    fn ether_multiplier_test() {
        assert_eq!(
            multiplier_for("ether").unwrap(),
            BigUint::from(1_000_000_000_000_000_000u64)
        );
    }

    #[test]
    fn tera_ether_multiplier_test() {
        let expected = "1000000000000000000000000000000".parse::<BigUint>().unwrap();
        assert_eq!(multiplier_for("teraether").unwrap(), expected);
        assert_eq!(multiplier_for("TERA").unwrap(), expected);
    }

    #[test]
    fn case_insensitive_test() {
        assert_eq!("GWei".parse::<Unit>(), Ok(Gwei));
        assert_eq!("ETHER".parse::<Unit>(), Ok(Ether));
        assert_eq!("Finney".parse::<Unit>(), Ok(Milliether));
    }

    #[test]
    fn unknown_unit_test() {
        assert_eq!(
            multiplier_for("bogus"),
            Err(UnknownUnitError("bogus".to_string()))
        );
        // Labels are not prefixes.
        assert!("eth".parse::<Unit>().is_err());
    }

    #[test]
    fn tiers_follow_declaration_order_test() {
        for (index, unit) in all::<Unit>().enumerate() {
            assert_eq!(unit.tier(), index);
            assert_eq!(Unit::from_tier(index), Some(unit));
        }
        assert_eq!(Unit::from_tier(11), None);
    }

    #[test]
    fn labels_parse_back_test() {
        for unit in all::<Unit>() {
            assert_eq!(unit.label().parse::<Unit>(), Ok(unit));
        }
    }

    #[test]
    fn named_alias_test() {
        assert_eq!(Microether.named_alias(), Some("szabo"));
        assert_eq!(Milliether.named_alias(), Some("finney"));
        assert_eq!(Ether.named_alias(), None);
        assert_eq!(Wei.named_alias(), None);
        for unit in all::<Unit>() {
            if let Some(named) = unit.named_alias() {
                assert!(unit.aliases().contains(&named), "{named} missing for {unit}");
            }
        }
    }

    #[test]
    fn aliases_are_unique_test() {
        let alias_count: usize = all::<Unit>().map(|unit| unit.aliases().len()).sum();
        assert_eq!(UNITS_BY_ALIAS.len(), alias_count);
    }
}
