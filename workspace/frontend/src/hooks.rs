use common::ApiError;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

/// API fetch state enum
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(ApiError),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T: Clone> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The outcome once the fetch has completed.
    pub fn result(&self) -> Option<Result<T, ApiError>> {
        match self {
            Self::Success(data) => Some(Ok(data.clone())),
            Self::Error(err) => Some(Err(err.clone())),
            Self::NotStarted | Self::Loading => None,
        }
    }
}

/// Runs `fetch_fn` on mount and returns its state plus a callback that
/// runs it again.
#[hook]
pub fn use_fetch_with_refetch<T, F, Fut>(fetch_fn: F) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let fetch_fn = use_state(|| Rc::new(fetch_fn));

    let refetch = {
        let fetch_state = fetch_state.clone();
        let fetch_fn = fetch_fn.clone();

        use_callback((), move |_, _| {
            let fetch_state = fetch_state.clone();
            let fetch_fn = fetch_fn.clone();

            fetch_state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let fut = (*fetch_fn)();
                match fut.await {
                    Ok(data) => fetch_state.set(FetchState::Success(data)),
                    Err(err) => fetch_state.set(FetchState::Error(err)),
                }
            });
        })
    };

    // Fetch on mount
    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
            || ()
        });
    }

    (fetch_state, refetch)
}
