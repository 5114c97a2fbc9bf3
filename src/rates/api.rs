use crate::{
    core::{FxClient, FxError, Method, QueryParams},
    rates::{
        model::{Conversion, ConversionRequest, RateTable, RatesSnapshot},
        wire,
    },
};

pub(super) async fn fetch_latest(client: &FxClient, base: &str) -> Result<RatesSnapshot, FxError> {
    let mut query = QueryParams::new();
    query.insert("base".to_string(), base.to_string());

    let env: wire::LatestEnvelope = client.call("latest", Method::Get, Some(&query), None).await?;

    Ok(RatesSnapshot {
        base: env.base,
        date: env.date,
        rates: RateTable::from_wire(env.rates)?,
    })
}

pub(super) async fn fetch_convert(
    client: &FxClient,
    req: &ConversionRequest,
) -> Result<Conversion, FxError> {
    let mut query = QueryParams::new();
    query.insert("from".to_string(), req.from().to_string());
    query.insert("to".to_string(), req.to().to_string());
    // f64's shortest round-trip formatting, so the amount survives intact.
    query.insert("amount".to_string(), req.amount().to_string());

    let env: wire::ConversionEnvelope =
        client.call("convert", Method::Get, Some(&query), None).await?;

    Ok(Conversion {
        from: env.from,
        to: env.to,
        amount: env.amount,
        result: env.result,
    })
}
