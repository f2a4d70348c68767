//! The request-lifecycle algorithm shared by the `use_api` and
//! `use_api_request` hooks.
//!
//! [`run_request`] wraps one transport future with the loading/error
//! bookkeeping every request gets: loading flips on and any stale error
//! clears before the future is polled, failures are normalized and both
//! recorded and returned, unauthorized failures additionally fire the
//! injected logout callback, and loading flips off on every path.
//!
//! The state sinks are plain closures so the algorithm stays independent
//! of Yew; the hooks pass `UseStateHandle` setters, tests pass recorders.

use std::future::Future;

use client::{ApiError, ClientError, is_authentication_error, parse_api_error};
use uuid::Uuid;

/// A failed request as recorded in hook state: the parsed message, when
/// it happened, an id for correlating with logs, and the normalized
/// cause.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestFailure {
    pub message: String,
    pub occurred_at: jiff::Timestamp,
    pub request_id: Uuid,
    pub cause: ApiError,
}

impl RequestFailure {
    fn new(cause: ApiError) -> Self {
        Self {
            message: cause.message.clone(),
            occurred_at: jiff::Timestamp::now(),
            request_id: Uuid::new_v4(),
            cause,
        }
    }
}

/// Run one transport call with lifecycle bookkeeping.
///
/// Failures are never swallowed: the normalized error is recorded via
/// `set_error` and returned, so callers observe the failure both
/// imperatively and through their rendered state.
pub async fn run_request<T, Fut, L, E, U>(
    set_loading: L,
    set_error: E,
    on_unauthorized: U,
    fut: Fut,
) -> Result<T, ApiError>
where
    Fut: Future<Output = Result<T, ClientError>>,
    L: Fn(bool),
    E: Fn(Option<RequestFailure>),
    U: Fn(),
{
    set_loading(true);
    set_error(None);

    let result = match fut.await {
        Ok(value) => Ok(value),
        Err(error) => {
            if is_authentication_error(&error) {
                on_unauthorized();
            }
            let normalized = parse_api_error(&error);
            let failure = RequestFailure::new(normalized.clone());
            tracing::warn!(
                request_id = %failure.request_id,
                status_code = failure.cause.status_code,
                "request failed: {}",
                failure.message,
            );
            set_error(Some(failure));
            Err(normalized)
        }
    };

    set_loading(false);
    result
}
