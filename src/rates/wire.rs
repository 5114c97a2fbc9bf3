use std::collections::HashMap;

use serde::Deserialize;

/// `/latest` answer: `{"base": "USD", "rates": {"VND": 25000.0}, "date": "2024-11-16"}`.
#[derive(Deserialize)]
pub(crate) struct LatestEnvelope {
    pub(crate) base: String,
    pub(crate) rates: HashMap<String, f64>,
    pub(crate) date: String,
}

/// `/convert` answer: `{"from": "USD", "to": "EUR", "amount": 10.0, "result": 9.2}`.
#[derive(Deserialize)]
pub(crate) struct ConversionEnvelope {
    pub(crate) from: String,
    pub(crate) to: String,
    pub(crate) amount: f64,
    pub(crate) result: f64,
}
