use std::collections::HashMap;

use crate::core::FxError;

/// Mapping from currency code (ISO-4217-like, uppercase, case-sensitive)
/// to its price relative to a fixed base currency.
///
/// All rates are positive; the base currency's own rate is implicitly 1.0
/// and its key may be absent. A table is replaced wholesale on refresh,
/// never partially merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable(HashMap<String, f64>);

impl RateTable {
    /// An empty table, the state before any successful fetch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The rate for `code`, if cached.
    #[must_use]
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.0.get(code).copied()
    }

    /// Whether `code` is a key of the table. Lookup is case-sensitive.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.0.contains_key(code)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Cross-rate arithmetic against the table's implicit base: converts
    /// `amount` from `from` to `to` when both codes are cached, without
    /// any network involvement.
    ///
    /// Valid only because every cached rate is expressed against the same
    /// base currency.
    #[must_use]
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Option<f64> {
        let from_rate = self.rate(from)?;
        let to_rate = self.rate(to)?;
        Some((amount / from_rate) * to_rate)
    }

    /// Build a table from the provider's wire map, rejecting non-positive
    /// rates as data errors.
    pub(crate) fn from_wire(map: HashMap<String, f64>) -> Result<Self, FxError> {
        if let Some((code, rate)) = map.iter().find(|(_, r)| !(**r > 0.0)) {
            return Err(FxError::Decode(serde::de::Error::custom(format!(
                "non-positive rate {rate} for {code}"
            ))));
        }
        Ok(Self(map))
    }
}

impl FromIterator<(String, f64)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A full `/latest` answer: the quote base, the provider's quote date
/// (as reported, e.g. `2024-11-16`), and the rate table itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RatesSnapshot {
    pub base: String,
    pub date: String,
    pub rates: RateTable,
}

/// One conversion attempt, validated at construction so an invalid request
/// cannot reach the network layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    amount: f64,
    from: String,
    to: String,
}

impl ConversionRequest {
    /// Validate and build a request: `amount` must be finite and positive,
    /// both currency codes non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::InvalidRequest`] describing the failed check.
    pub fn new(
        amount: f64,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<Self, FxError> {
        let from = from.into();
        let to = to.into();
        if !amount.is_finite() || amount <= 0.0 {
            return Err(FxError::InvalidRequest(format!(
                "amount must be a positive finite number, got {amount}"
            )));
        }
        if from.is_empty() || to.is_empty() {
            return Err(FxError::InvalidRequest(
                "currency codes must be non-empty".into(),
            ));
        }
        Ok(Self { amount, from, to })
    }

    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    #[must_use]
    pub fn from(&self) -> &str {
        &self.from
    }

    #[must_use]
    pub fn to(&self) -> &str {
        &self.to
    }
}

/// A conversion answered by the provider's `/convert` endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub result: f64,
}
