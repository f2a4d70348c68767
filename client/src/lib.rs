//! Transport and error-normalization layer shared by the UI hooks.
//!
//! [`Api`] performs the actual HTTP requests; [`parse_api_error`] and
//! [`is_authentication_error`] turn whatever the transport rejected with
//! into the uniform [`ApiError`] shape the hooks record.

mod api;
mod error;

pub use api::{Api, ok_body, ok_empty};
pub use error::{ApiError, ClientError, is_authentication_error, parse_api_error};
