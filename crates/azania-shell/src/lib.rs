//! Azania Shell.
//!
//! This crate contains the application shell of the Azania Academy website: it resolves the
//! current route to a page, shows a loading screen until the page is ready and falls back to a
//! not-found screen when no page can be resolved.

#![deny(clippy::all)]
#![deny(missing_debug_implementations)]
#![deny(unsafe_code)]
#![deny(non_snake_case)]
#![deny(clippy::cognitive_complexity)]
#![deny(missing_docs)]
#![cfg_attr(documenting, feature(doc_cfg))]
#![cfg_attr(documenting, feature(doc_auto_cfg))]
#![cfg_attr(any(releasing, not(debug_assertions)), deny(dead_code, unused_imports))]

use std::rc::Rc;

use yew::prelude::*;

use crate::root::{ShellRoot, ShellRootProps};

mod app;
pub mod components;
mod config;
mod error;
mod page;
pub mod providers;
mod resolution;
mod root;
pub mod router;
mod shell;
pub mod state;
mod storage;
pub mod task;
pub mod trace;

pub use app::App;
pub use config::ShellConfig;
pub use error::{ConfigError, ConfigResult, ResolveError, ResolveResult};
pub use page::Page;
pub use resolution::{PageResolver, Resolution, Resolver};
pub use shell::{Shell, ShellProps};

/// The Azania Shell Renderer.
///
/// This type wraps the [Yew Renderer](yew::Renderer) and mounts the [`App`] with its resolver,
/// configuration and navigation.
///
/// # Note
///
/// The renderer provides [`BrowserRouter`](yew_router::BrowserRouter),
/// [`BounceRoot`](bounce::BounceRoot) and a stylist style manager to the application.
#[derive(Debug)]
pub struct Renderer {
    resolver: Resolver,
    config: ShellConfig,
    nav: Vec<components::NavItem>,
}

impl Renderer {
    /// Creates a Renderer with the default configuration.
    pub fn new<R>(resolver: R) -> Self
    where
        R: 'static + PageResolver,
    {
        Self {
            resolver: Resolver::new(resolver),
            config: ShellConfig::default(),
            nav: Vec::new(),
        }
    }

    /// Sets the shell configuration.
    pub fn config(mut self, config: ShellConfig) -> Self {
        self.config = config;

        self
    }

    /// Sets the navigation entries of the page layout.
    pub fn nav<I>(mut self, nav: I) -> Self
    where
        I: IntoIterator<Item = components::NavItem>,
    {
        self.nav = nav.into_iter().collect();

        self
    }

    fn into_yew_renderer(self) -> yew::Renderer<ShellRoot> {
        let Self {
            resolver,
            config,
            nav,
        } = self;

        let toast_defaults = config.toast.clone();
        let props = ShellProps {
            resolver,
            config: Rc::new(config),
            nav,
        };

        let children = html! {
            <App ..props />
        };

        let props = ShellRootProps {
            children,
            toast_defaults,
        };

        yew::Renderer::with_props(props)
    }

    /// Renders the application into the document body.
    pub fn render(self) {
        let renderer = self.into_yew_renderer();

        tracing::info!("starting application shell");
        renderer.render();
    }
}
