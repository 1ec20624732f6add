//! The state machine of the application shell.

use std::rc::Rc;

use yew::prelude::*;

use crate::page::Page;

/// Progress of the emergency page load started when the watchdog expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackLoad {
    /// No emergency load is needed.
    #[default]
    Idle,
    /// The watchdog expired without a page and an emergency load should start.
    Requested,
    /// The emergency load has finished, successfully or not.
    Settled,
}

/// Actions accepted by [`ShellState`].
#[derive(Debug, Clone, PartialEq)]
pub enum ShellAction {
    /// The route handler produced a page, or `None` if the route has no page.
    ComponentChanged(Option<Page>),
    /// The route handler started or finished loading.
    LoadingChanged(bool),
    /// The watchdog fired before the shell was initialised.
    ///
    /// The emergency page load is only requested when a route is present. Without a route the
    /// shell goes straight to the not-found view.
    WatchdogExpired {
        /// Whether the router reported a current route when the watchdog fired.
        has_route: bool,
    },
    /// The emergency page load finished.
    FallbackSettled(Option<Page>),
}

/// The stage shown by the loading screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingStage {
    /// The route handler has not finished loading.
    Initializing,
    /// Loading has finished but the shell has not been initialised yet.
    Preparing,
}

impl LoadingStage {
    /// The message displayed for this stage.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Initializing => "Initializing application...",
            Self::Preparing => "Preparing your experience...",
        }
    }
}

/// What the shell should render for a given state.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellView {
    /// The loading screen.
    Loading(LoadingStage),
    /// A resolved page.
    Page(Page),
    /// The not-found screen.
    NotFound,
}

/// The state of the application shell.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellState {
    component: Option<Page>,
    loading: bool,
    initialized: bool,
    fallback: FallbackLoad,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            component: None,
            loading: true,
            initialized: false,
            fallback: FallbackLoad::Idle,
        }
    }
}

impl ShellState {
    /// The page currently held by the shell.
    pub fn component(&self) -> Option<&Page> {
        self.component.as_ref()
    }

    /// Returns `true` while the route handler reports loading.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Returns `true` once the shell has been initialised. This never resets.
    pub fn initialized(&self) -> bool {
        self.initialized
    }

    /// Progress of the emergency page load.
    pub fn fallback(&self) -> FallbackLoad {
        self.fallback
    }

    /// Returns what should be rendered for this state.
    pub fn view(&self) -> ShellView {
        if self.loading || !self.initialized {
            let stage = match self.loading {
                true => LoadingStage::Initializing,
                false => LoadingStage::Preparing,
            };

            return ShellView::Loading(stage);
        }

        match self.component {
            Some(ref m) => ShellView::Page(m.clone()),
            None => ShellView::NotFound,
        }
    }
}

impl Reducible for ShellState {
    type Action = ShellAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            ShellAction::ComponentChanged(component) => {
                tracing::debug!(
                    "component changed: {}",
                    component.as_ref().map(|m| m.name()).unwrap_or("none")
                );

                if component.is_some() && next.loading {
                    next.loading = false;
                }
                next.component = component;
                next.initialized = true;
            }

            ShellAction::LoadingChanged(loading) => {
                tracing::debug!("loading changed: {}", loading);

                next.loading = loading;
                if !loading {
                    next.initialized = true;
                }
            }

            ShellAction::WatchdogExpired { has_route } => {
                if next.initialized {
                    return self;
                }

                tracing::warn!("shell did not initialise in time, forcing initialisation");
                next.loading = false;
                next.initialized = true;

                if next.component.is_none() && has_route && next.fallback == FallbackLoad::Idle {
                    next.fallback = FallbackLoad::Requested;
                }
            }

            ShellAction::FallbackSettled(component) => {
                if next.fallback != FallbackLoad::Requested {
                    return self;
                }

                next.fallback = FallbackLoad::Settled;
                if next.component.is_none() {
                    next.component = component;
                }
            }
        }

        if next == *self {
            return self;
        }

        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::tests::{About, Home};

    fn run(actions: impl IntoIterator<Item = ShellAction>) -> Rc<ShellState> {
        actions
            .into_iter()
            .fold(Rc::new(ShellState::default()), |state, action| {
                let state = state.reduce(action);
                // The loading screen is shown exactly when loading or not initialised.
                assert_eq!(
                    matches!(state.view(), ShellView::Loading(_)),
                    state.loading() || !state.initialized()
                );
                state
            })
    }

    fn home() -> Page {
        Page::of::<Home>("Home")
    }

    fn about() -> Page {
        Page::of::<About>("About")
    }

    #[test]
    fn starts_loading() {
        let state = ShellState::default();

        assert!(state.loading());
        assert!(!state.initialized());
        assert_eq!(state.view(), ShellView::Loading(LoadingStage::Initializing));
    }

    #[test]
    fn component_dismisses_loading() {
        let state = run([ShellAction::ComponentChanged(Some(home()))]);

        assert!(!state.loading());
        assert!(state.initialized());
        assert_eq!(state.view(), ShellView::Page(home()));
    }

    #[test]
    fn missing_component_keeps_loading_until_loading_finishes() {
        let state = run([ShellAction::ComponentChanged(None)]);
        assert!(state.initialized());
        assert_eq!(state.view(), ShellView::Loading(LoadingStage::Initializing));

        let state = state.reduce(ShellAction::LoadingChanged(false));
        assert_eq!(state.view(), ShellView::NotFound);
    }

    #[test]
    fn loading_finished_without_component_is_not_found() {
        let state = run([ShellAction::LoadingChanged(false)]);

        assert!(state.initialized());
        assert_eq!(state.view(), ShellView::NotFound);
    }

    #[test]
    fn loading_again_shows_loading_screen_without_resetting_initialized() {
        let state = run([
            ShellAction::ComponentChanged(Some(home())),
            ShellAction::LoadingChanged(true),
        ]);

        assert!(state.initialized());
        assert_eq!(state.view(), ShellView::Loading(LoadingStage::Initializing));
    }

    #[test]
    fn loading_screen_never_renders_held_component() {
        let state = run([
            ShellAction::LoadingChanged(true),
            ShellAction::ComponentChanged(Some(home())),
            ShellAction::LoadingChanged(true),
        ]);

        assert_eq!(state.component(), Some(&home()));
        assert!(matches!(state.view(), ShellView::Loading(_)));
    }

    #[test]
    fn initialized_is_monotonic() {
        let actions = [
            ShellAction::LoadingChanged(true),
            ShellAction::ComponentChanged(None),
            ShellAction::LoadingChanged(true),
            ShellAction::WatchdogExpired { has_route: true },
            ShellAction::ComponentChanged(Some(home())),
            ShellAction::LoadingChanged(true),
            ShellAction::FallbackSettled(None),
        ];

        let mut state = Rc::new(ShellState::default());
        let mut seen_initialized = false;
        for action in actions {
            state = state.reduce(action);
            seen_initialized |= state.initialized();
            assert_eq!(state.initialized(), seen_initialized);
        }
    }

    #[test]
    fn watchdog_does_not_override_component() {
        let before = run([ShellAction::ComponentChanged(Some(home()))]);
        let after = before.clone().reduce(ShellAction::WatchdogExpired { has_route: true });

        assert!(Rc::ptr_eq(&before, &after));
        assert_eq!(after.view(), ShellView::Page(home()));
        assert_eq!(after.fallback(), FallbackLoad::Idle);
    }

    #[test]
    fn watchdog_forces_initialisation_and_requests_one_fallback() {
        let state = run([ShellAction::WatchdogExpired { has_route: true }]);

        assert!(!state.loading());
        assert!(state.initialized());
        assert_eq!(state.fallback(), FallbackLoad::Requested);
        assert_eq!(state.view(), ShellView::NotFound);

        let state = state.reduce(ShellAction::WatchdogExpired { has_route: true });
        assert_eq!(state.fallback(), FallbackLoad::Requested);

        let state = state.reduce(ShellAction::FallbackSettled(Some(home())));
        assert_eq!(state.fallback(), FallbackLoad::Settled);
        assert_eq!(state.view(), ShellView::Page(home()));
    }

    #[test]
    fn watchdog_without_route_skips_fallback() {
        let state = run([ShellAction::WatchdogExpired { has_route: false }]);

        assert_eq!(state.fallback(), FallbackLoad::Idle);
        assert_eq!(state.view(), ShellView::NotFound);
    }

    #[test]
    fn unrequested_fallback_result_is_ignored() {
        let state = run([
            ShellAction::FallbackSettled(Some(home())),
            ShellAction::WatchdogExpired { has_route: true },
        ]);

        assert_eq!(state.fallback(), FallbackLoad::Requested);
        assert_eq!(state.component(), None);
    }

    #[test]
    fn failed_fallback_degrades_to_not_found() {
        let state = run([
            ShellAction::WatchdogExpired { has_route: true },
            ShellAction::FallbackSettled(None),
        ]);

        assert_eq!(state.fallback(), FallbackLoad::Settled);
        assert_eq!(state.view(), ShellView::NotFound);
    }

    #[test]
    fn fallback_does_not_replace_a_late_route_component() {
        let state = run([
            ShellAction::WatchdogExpired { has_route: true },
            ShellAction::ComponentChanged(Some(about())),
            ShellAction::FallbackSettled(Some(home())),
        ]);

        assert_eq!(state.view(), ShellView::Page(about()));
        assert_eq!(state.fallback(), FallbackLoad::Settled);
    }

    #[test]
    fn navigation_replaces_component() {
        let state = run([
            ShellAction::ComponentChanged(Some(home())),
            ShellAction::ComponentChanged(Some(about())),
        ]);
        assert_eq!(state.view(), ShellView::Page(about()));

        let state = state.reduce(ShellAction::ComponentChanged(None));
        assert_eq!(state.view(), ShellView::NotFound);
    }

    #[test]
    fn preparing_stage_message() {
        let mut state = ShellState::default();
        state.loading = false;

        assert_eq!(state.view(), ShellView::Loading(LoadingStage::Preparing));
        assert_eq!(LoadingStage::Preparing.message(), "Preparing your experience...");
        assert_eq!(LoadingStage::Initializing.message(), "Initializing application...");
    }
}
