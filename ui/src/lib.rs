//! Persisted list-state and request-lifecycle hooks for Yew apps.
//!
//! Two independent pieces, typically used side by side on a table page:
//!
//! - [`hooks::use_pagination`](fn@hooks::use_pagination) owns
//!   page/page-size/sort state for a dataset whose total size is supplied
//!   by the caller, clamps it into range as that total changes, and
//!   persists the user's choices so they survive reloads.
//! - [`hooks::use_api`](fn@hooks::use_api) /
//!   [`hooks::use_api_request`](fn@hooks::use_api_request) give any transport
//!   call shared loading/error observability, normalize failures into one
//!   error shape, and force a logout when a request comes back
//!   unauthorized.
//!
//! Neither piece knows about the other; pagination state determines the
//! request parameters, the request hooks fetch the page's data.

pub mod hooks;
pub mod logs;
pub mod pagination;
pub mod request;
pub mod state;
pub mod storage;

pub use client::{Api, ApiError, ClientError};
pub use request::RequestFailure;
pub use state::{AuthState, State};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api() -> Api {
    // Try environment variable first (set at build time)
    let address = match option_env!("BACKEND_URL") {
        Some(url) => url.to_string(),
        // Fallback to same origin
        None => origin_fallback(),
    };

    Api::new(address)
}

#[cfg(target_arch = "wasm32")]
fn origin_fallback() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn origin_fallback() -> String {
    String::new()
}
