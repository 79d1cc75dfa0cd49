use std::{fmt::Display, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

use super::DROPS_PER_XRP;

/// An amount of the native currency in its base unit. Balances arrive as base-10 strings, which
/// is also how we write them back out.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct DropsNewtype(pub u128);

impl DropsNewtype {
    pub fn from_xrp(xrp: u128) -> Self {
        Self(xrp * DROPS_PER_XRP)
    }

    pub fn checked_add(self, DropsNewtype(rhs): Self) -> Option<Self> {
        let DropsNewtype(lhs) = self;
        lhs.checked_add(rhs).map(DropsNewtype)
    }

    /// Amount in whole XRP, the last six digits forming the fraction.
    pub fn xrp_string(&self) -> String {
        let DropsNewtype(amount) = self;
        format!("{}.{:06}", amount / DROPS_PER_XRP, amount % DROPS_PER_XRP)
    }
}

impl Display for DropsNewtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let DropsNewtype(amount) = self;
        write!(f, "{amount}")
    }
}

impl From<DropsNewtype> for String {
    fn from(DropsNewtype(amount): DropsNewtype) -> Self {
        amount.to_string()
    }
}

impl FromStr for DropsNewtype {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u128>().map(DropsNewtype)
    }
}

impl TryFrom<String> for DropsNewtype {
    type Error = ParseIntError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse::<u128>().map(DropsNewtype)
    }
}

impl From<u128> for DropsNewtype {
    fn from(amount: u128) -> Self {
        DropsNewtype(amount)
    }
}
