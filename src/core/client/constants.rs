use std::time::Duration;

/// Fallback base when the embedding application supplies none.
pub(super) const DEFAULT_BASE_URL: &str = "https://data.fixer.io/api/";

/// Fallback key when the embedding application supplies none. The provider
/// rejects it; the rejection comes back classified, not as a panic.
pub(super) const DEFAULT_API_KEY: &str = "";

pub(super) const USER_AGENT: &str =
    concat!("fxrates-rs/", env!("CARGO_PKG_VERSION"));

/// Overall per-request deadline. Timeouts surface as `FxError::Transport`.
pub(super) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
