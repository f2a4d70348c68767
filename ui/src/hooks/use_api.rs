use std::future::Future;
use std::rc::Rc;

use client::{Api, ApiError, ClientError};
use serde::{Serialize, de::DeserializeOwned};
use yew::prelude::*;

use crate::request::{RequestFailure, run_request};

/// Shared-state request handle: one loading/error pair covering every
/// request issued through it.
///
/// Overlapping calls through the same handle clobber each other's
/// loading flag; issue overlapping requests through separate handles (or
/// a dedicated [`use_api_request`](fn@crate::hooks::use_api_request) slot
/// each).
#[derive(Clone)]
pub struct ApiHandle {
    api: Rc<Api>,
    loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<RequestFailure>>,
    on_unauthorized: Callback<()>,
}

impl ApiHandle {
    pub fn loading(&self) -> bool {
        *self.loading
    }

    pub fn error(&self) -> Option<&RequestFailure> {
        (*self.error).as_ref()
    }

    async fn run<T, Fut>(&self, fut: Fut) -> Result<T, ApiError>
    where
        Fut: Future<Output = Result<T, ClientError>>,
    {
        let loading = self.loading.clone();
        let error = self.error.clone();
        let on_unauthorized = self.on_unauthorized.clone();
        run_request(
            move |value| loading.set(value),
            move |failure| error.set(failure),
            move || on_unauthorized.emit(()),
            fut,
        )
        .await
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        self.run(self.api.get::<T>(path)).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.run(self.api.post::<T, B>(path, body)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.run(self.api.put::<T, B>(path, body)).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.run(self.api.patch::<T, B>(path, body)).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        self.run(self.api.delete::<T>(path)).await
    }
}

/// Hook wrapping the global API client with shared loading/error state.
///
/// `on_unauthorized` fires once per request that fails with a 401;
/// [`use_logout`](fn@crate::hooks::use_logout) is the usual choice.
#[hook]
pub fn use_api(on_unauthorized: Callback<()>) -> ApiHandle {
    let api = use_memo((), |_| crate::get_api());
    use_api_with(api, on_unauthorized)
}

/// [`use_api`] with an explicit client, for tests and custom backends.
#[hook]
pub fn use_api_with(api: Rc<Api>, on_unauthorized: Callback<()>) -> ApiHandle {
    let loading = use_state(|| false);
    let error = use_state(|| None::<RequestFailure>);

    ApiHandle {
        api,
        loading,
        error,
        on_unauthorized,
    }
}
