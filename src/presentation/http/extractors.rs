// src/presentation/http/extractors.rs
use crate::presentation::http::state::HttpState;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;
use tokio_util::sync::{CancellationToken, DropGuard};

/// Per-request cancellation token.
///
/// The token is a child of the server shutdown token and is cancelled when
/// the extractor is dropped, which happens when the handler future is
/// dropped after a client disconnect.
pub struct RequestCancellation {
    token: CancellationToken,
    _guard: DropGuard,
}

impl RequestCancellation {
    pub fn new(parent: Option<&CancellationToken>) -> Self {
        let token = parent.map_or_else(CancellationToken::new, CancellationToken::child_token);
        let guard = token.clone().drop_guard();
        Self {
            token,
            _guard: guard,
        }
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

impl<S> FromRequestParts<S> for RequestCancellation
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let parent = parts
            .extensions
            .get::<HttpState>()
            .map(|state| &state.shutdown);
        Ok(Self::new(parent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropping_the_extractor_cancels_its_token() {
        let cancellation = RequestCancellation::new(None);
        let token = cancellation.token().clone();
        assert!(!token.is_cancelled());
        drop(cancellation);
        assert!(token.is_cancelled());
    }

    #[test]
    fn shutdown_cancels_request_tokens() {
        let shutdown = CancellationToken::new();
        let cancellation = RequestCancellation::new(Some(&shutdown));
        shutdown.cancel();
        assert!(cancellation.token().is_cancelled());
    }

    #[test]
    fn request_end_does_not_cancel_shutdown() {
        let shutdown = CancellationToken::new();
        drop(RequestCancellation::new(Some(&shutdown)));
        assert!(!shutdown.is_cancelled());
    }
}
