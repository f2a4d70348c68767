use std::future::Future;

use client::{ApiError, ClientError};
use yew::prelude::*;

use crate::request::{RequestFailure, run_request};

/// Single-request handle: tracks the last successful payload alongside
/// the loading/error pair, local to one call site.
pub struct ApiRequestHandle<T: 'static> {
    data: UseStateHandle<Option<T>>,
    loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<RequestFailure>>,
    on_unauthorized: Callback<()>,
}

impl<T> Clone for ApiRequestHandle<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            loading: self.loading.clone(),
            error: self.error.clone(),
            on_unauthorized: self.on_unauthorized.clone(),
        }
    }
}

impl<T: Clone> ApiRequestHandle<T> {
    pub fn data(&self) -> Option<&T> {
        (*self.data).as_ref()
    }

    pub fn loading(&self) -> bool {
        *self.loading
    }

    pub fn error(&self) -> Option<&RequestFailure> {
        (*self.error).as_ref()
    }

    /// Returns true if this is the initial load (no data yet, currently
    /// loading, and no error).
    pub fn is_initial_loading(&self) -> bool {
        self.loading() && self.data().is_none() && self.error().is_none()
    }

    /// Run one transport call through the lifecycle, storing the
    /// resolved value as `data` on success.
    pub async fn execute<Fut>(&self, fut: Fut) -> Result<T, ApiError>
    where
        Fut: Future<Output = Result<T, ClientError>>,
    {
        let loading = self.loading.clone();
        let error = self.error.clone();
        let on_unauthorized = self.on_unauthorized.clone();

        let result = run_request(
            move |value| loading.set(value),
            move |failure| error.set(failure),
            move || on_unauthorized.emit(()),
            fut,
        )
        .await;

        if let Ok(value) = &result {
            self.data.set(Some(value.clone()));
        }
        result
    }

    /// Clear data, loading, and error back to their initial values.
    pub fn reset(&self) {
        self.data.set(None);
        self.loading.set(false);
        self.error.set(None);
    }
}

/// Hook tracking one request's data/loading/error in a dedicated state
/// slot. Pair with [`ApiRequestHandle::execute`]:
///
/// ```rust,ignore
/// let profile = use_api_request::<UserProfile>(use_logout());
/// let on_refresh = {
///     let profile = profile.clone();
///     Callback::from(move |_| {
///         let profile = profile.clone();
///         yew::platform::spawn_local(async move {
///             let api = get_api();
///             let _ = profile.execute(api.get("user_profile")).await;
///         });
///     })
/// };
/// ```
#[hook]
pub fn use_api_request<T: 'static>(
    on_unauthorized: Callback<()>,
) -> ApiRequestHandle<T> {
    let data = use_state(|| None::<T>);
    let loading = use_state(|| false);
    let error = use_state(|| None::<RequestFailure>);

    ApiRequestHandle {
        data,
        loading,
        error,
        on_unauthorized,
    }
}
