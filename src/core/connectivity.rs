//! Reachability signal consumed by the request pipeline.
//!
//! The crate does not probe the network itself: the platform (or the
//! embedding application) owns a path monitor and publishes its verdict
//! through a [`tokio::sync::watch`] channel. The client only reads it.

use tokio::sync::watch;

/// Receiving half of the platform's "network reachable" observable.
///
/// `true` means a satisfied network path exists. A client built without a
/// watch assumes reachability and lets the transport layer report failures.
pub type ConnectivityWatch = watch::Receiver<bool>;

/// A watch that always reports the given status. Handy in tests and for
/// platforms without a native path monitor.
///
/// The sending half is dropped; a closed watch keeps serving its last value.
pub fn fixed(reachable: bool) -> ConnectivityWatch {
    let (_tx, rx) = watch::channel(reachable);
    rx
}

/// Resolves once `watch` reports offline; pends forever while it stays
/// online. Used by the client to race the HTTP dispatch.
pub(crate) async fn went_offline(mut watch: ConnectivityWatch) {
    loop {
        if !*watch.borrow() {
            return;
        }
        if watch.changed().await.is_err() {
            // Publisher is gone and the last value was "online": the signal
            // can never flip again, so never resolve.
            std::future::pending::<()>().await;
        }
    }
}
