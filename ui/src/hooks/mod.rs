pub mod use_api;
pub mod use_api_request;
pub mod use_logout;
pub mod use_pagination;

pub use use_api::{ApiHandle, use_api, use_api_with};
pub use use_api_request::{ApiRequestHandle, use_api_request};
pub use use_logout::use_logout;
pub use use_pagination::{
    PaginationHandle, use_pagination, use_pagination_with_store,
};
