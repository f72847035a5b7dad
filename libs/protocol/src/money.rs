//! Money values.
//!
//! The API writes money as a bare decimal string (`"2.50"`) or number with
//! no currency marker; amounts are tagged USD on the way in unless a caller
//! says otherwise.

use rust_decimal::Decimal;

/// A fixed-point currency amount tagged with a currency code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Money {
    pub amount: Decimal,
    pub currency: String,
}

impl Money {
    /// Currency assumed when the wire carries a bare amount.
    pub const DEFAULT_CURRENCY: &'static str = "USD";

    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// A USD amount.
    pub fn usd(amount: Decimal) -> Self {
        Self::new(amount, Self::DEFAULT_CURRENCY)
    }
}

impl std::fmt::Display for Money {
    /// Canonical wire form: two decimal places, no currency marker.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.amount)
    }
}

impl serde::Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let amount = <Decimal as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::usd(amount))
    }
}
