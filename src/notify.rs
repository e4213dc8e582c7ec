// src/notify.rs

use log::{info, warn};

use crate::session::Session;
use crate::store::RemoteStore;

/// Register the session's device push token against the signed-in user for
/// later push delivery. Registration is best-effort: a failure is logged and
/// never surfaced, and nothing happens when the session carries no token.
pub async fn register_push_token(store: &dyn RemoteStore, session: &Session) {
    let Some(token) = session.push_token() else {
        return;
    };
    match store.store_push_token(session.user_id(), token).await {
        Ok(()) => info!("push token registered for {}", session.user_id()),
        Err(e) => warn!(
            "failed to register push token for {}: {}",
            session.user_id(),
            e
        ),
    }
}
