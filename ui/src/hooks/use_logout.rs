use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;

/// Hook returning the logout side effect: tell the backend (best-effort)
/// and flip the shared auth state to logged out.
///
/// This is the canonical `on_unauthorized` callback for the request
/// hooks.
#[hook]
pub fn use_logout() -> Callback<()> {
    let (_, dispatch) = use_store::<State>();

    Callback::from(move |_| {
        let dispatch = dispatch.clone();

        yew::platform::spawn_local(async move {
            let api = crate::get_api();
            let _ = api.post_empty("logout").await;

            dispatch.reduce_mut(|state| {
                state.logout();
            });
        });
    })
}
