//! Browser History
//!
//! Keeps the address bar in step with the route signal.
//! Outside the browser (unit tests) these are no-ops.

use leptos::prelude::*;

use crate::error::AppResult;
use crate::routes::Route;

#[cfg(target_arch = "wasm32")]
mod browser {
    use leptos::prelude::*;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    use crate::error::{AppError, AppResult};
    use crate::routes::Route;

    fn window() -> AppResult<web_sys::Window> {
        web_sys::window().ok_or_else(|| AppError::Navigation("no window".to_string()))
    }

    pub fn current_route() -> Route {
        let path = window()
            .and_then(|w| {
                w.location()
                    .pathname()
                    .map_err(|e| AppError::Navigation(format!("{:?}", e)))
            })
            .unwrap_or_else(|_| "/".to_string());
        Route::parse(&path)
    }

    pub fn push(path: &str) -> AppResult<()> {
        window()?
            .history()
            .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(path)))
            .map_err(|e| AppError::Navigation(format!("{:?}", e)))
    }

    pub fn bind_popstate(set_route: WriteSignal<Route>) {
        let on_popstate = Closure::<dyn FnMut(web_sys::PopStateEvent)>::new(move |_ev: web_sys::PopStateEvent| {
            let route = current_route();
            log::debug!("popstate -> {:?}", route);
            set_route.set(route);
        });
        if let Ok(win) = window() {
            let _ = win.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
        }
        on_popstate.forget();
    }
}

/// Route for the page's current location
pub fn current_route() -> Route {
    #[cfg(target_arch = "wasm32")]
    {
        browser::current_route()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Route::List
    }
}

/// Push a path onto the history stack
pub fn push(path: &str) -> AppResult<()> {
    #[cfg(target_arch = "wasm32")]
    {
        browser::push(path)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = path;
        Ok(())
    }
}

/// Follow back/forward navigation
pub fn bind_popstate(set_route: WriteSignal<Route>) {
    #[cfg(target_arch = "wasm32")]
    browser::bind_popstate(set_route);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_route;
}
