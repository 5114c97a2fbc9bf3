//! fxrates-rs: ergonomic client for Fixer-compatible foreign-exchange APIs.
//!
//! The crate has two halves:
//! - a thin network client ([`FxClient`]) that issues authenticated calls
//!   against the pricing provider and classifies every failure into a
//!   structured [`FxError`], and
//! - a conversion session ([`FxSession`]) that caches the provider's rate
//!   table and answers conversions locally whenever both currencies are
//!   cached, falling back to the provider's `/convert` endpoint otherwise.
//!
//! ```no_run
//! use fxrates_rs::{ConversionRequest, FxClient, FxSession};
//!
//! # async fn run() -> Result<(), fxrates_rs::FxError> {
//! let client = FxClient::builder().api_key("...").build()?;
//! let mut session = FxSession::new(client);
//! session.refresh_rates().await?;
//! let converted = session
//!     .convert(ConversionRequest::new(10.0, "USD", "VND")?)
//!     .await?;
//! println!("10 USD = {converted} VND");
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod rates;
pub mod session;

pub use crate::core::{FxClient, FxClientBuilder, FxError};
pub use rates::{
    Conversion, ConversionRequest, ConvertBuilder, LatestBuilder, RateTable, RatesSnapshot,
};
pub use session::{ConversionOutcome, FxSession, SessionPhase};
