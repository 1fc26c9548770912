//! Platform glue for detached work.

use std::future::Future;

/// Run a future to completion in the background.
///
/// Browser builds hand it to the JS microtask queue; elsewhere it rides on the
/// Dioxus runtime of the calling component.
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(future);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        dioxus::prelude::spawn(future);
    }
}
