//! Router access for the shell.
//!
//! Routing itself is done by [`yew_router`]. The shell only needs the current path and a way to
//! navigate to an arbitrary path.

use yew::prelude::*;
use yew_router::prelude::*;
use yew_router::AnyRoute;

/// The route currently displayed by the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentRoute {
    /// The path of the route.
    pub path: AttrValue,
}

/// Returns the current route, or `None` if there is no router.
#[hook]
pub fn use_current_route() -> Option<CurrentRoute> {
    use_location().map(|m| CurrentRoute {
        path: AttrValue::from(m.path().to_string()),
    })
}

/// Returns a callback that navigates to a path.
#[hook]
pub fn use_navigate() -> Callback<String> {
    let navigator = use_navigator();

    use_callback(
        |path: String, navigator| match navigator {
            Some(m) => {
                tracing::debug!("navigating to {}", path);
                m.push(&AnyRoute::new(path));
            }
            None => tracing::warn!("cannot navigate to {}: no router", path),
        },
        navigator,
    )
}

/// Reloads the current page.
pub fn reload_page() {
    let Some(window) = web_sys::window() else {
        return;
    };

    if let Err(e) = window.location().reload() {
        tracing::error!("failed to reload page: {:?}", e);
    }
}
