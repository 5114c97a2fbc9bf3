//! The single outbound-call pipeline: target resolution, auth attachment,
//! connectivity race, dispatch, status classification, decode.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::{FxClient, Method, QueryParams};
use crate::core::connectivity;
use crate::core::error::FxError;

/// Application-level error body some providers return alongside non-2xx
/// statuses, e.g. `{"code": 104, "info": "usage limit reached"}`.
#[derive(Deserialize)]
struct ProviderFault {
    code: i64,
    info: String,
}

impl FxClient {
    /// Issue one authenticated call against the provider and decode the
    /// response into `T`.
    ///
    /// The access key is attached twice, as the `access_key` query
    /// parameter and as a bearer `Authorization` header. A JSON `body` is
    /// only sent for `Post`/`Put`.
    ///
    /// When a connectivity watch is attached and reports offline, the call
    /// fails fast with [`FxError::Disconnected`]; a disconnect observed
    /// while the request is in flight preempts it. The watch clone taken
    /// for the race is dropped when the call settles.
    ///
    /// # Errors
    ///
    /// Every failure is classified into one [`FxError`] variant; see the
    /// error type for the taxonomy. No variant is retried automatically.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, query, body), err, fields(endpoint = %endpoint))
    )]
    pub async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: Method,
        query: Option<&QueryParams>,
        body: Option<&serde_json::Value>,
    ) -> Result<T, FxError> {
        let url = self.request_target(endpoint, query)?;

        let mut req = self
            .http()
            .request(method.as_reqwest(), url.clone())
            .bearer_auth(self.api_key())
            .header("accept", "application/json");

        if matches!(method, Method::Post | Method::Put)
            && let Some(b) = body
        {
            req = req.json(b);
        }

        let resp = match self.connectivity() {
            Some(watch) => {
                // Fail fast before opening a socket on a host known to be
                // offline.
                if !*watch.borrow() {
                    return Err(FxError::Disconnected);
                }
                tokio::select! {
                    () = connectivity::went_offline(watch.clone()) => {
                        return Err(FxError::Disconnected);
                    }
                    resp = req.send() => resp?,
                }
            }
            None => req.send().await?,
        };

        let status = resp.status().as_u16();
        let final_url = resp.url().to_string();
        let text = resp.text().await?;

        if !(200..=299).contains(&status) {
            return Err(classify_failure(status, final_url, &text));
        }

        if text.is_empty() {
            return Err(FxError::NoData);
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn request_target(&self, endpoint: &str, query: Option<&QueryParams>) -> Result<Url, FxError> {
        let mut url = self.base_url().join(endpoint)?;
        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("access_key", self.api_key());
            if let Some(params) = query {
                for (k, v) in params {
                    qp.append_pair(k, v);
                }
            }
        }
        Ok(url)
    }
}

/// Map a non-2xx response to an error, in priority order: 429 outranks
/// everything (the quota answer is authoritative whatever the body says),
/// then a decodable provider `{code, info}` body, then 401, then the bare
/// status.
fn classify_failure(status: u16, url: String, body: &str) -> FxError {
    if status == 429 {
        return FxError::RateLimited { url };
    }
    if let Ok(fault) = serde_json::from_str::<ProviderFault>(body) {
        return FxError::Provider {
            code: fault.code,
            info: fault.info,
        };
    }
    if status == 401 {
        return FxError::Unauthorized { url };
    }
    FxError::Status { status, url }
}
