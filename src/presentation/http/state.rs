// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Cancelled on server shutdown; every request token is a child of it.
    pub shutdown: CancellationToken,
}
