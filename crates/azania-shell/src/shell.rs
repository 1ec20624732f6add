use std::rc::Rc;

use bounce::helmet::Helmet;
use yew::prelude::*;

use crate::components::{
    LoadingScreen, NavItem, NotFound, NotFoundProps, PageLayout, PageTransition, RouteHandler,
};
use crate::config::ShellConfig;
use crate::page::Page;
use crate::resolution::{Resolution, Resolver};
use crate::router::use_current_route;
use crate::state::{FallbackLoad, ShellAction, ShellState, ShellView};
use crate::task::{spawn_cancellable, Timeout};

/// Props for [`Shell`].
#[derive(Properties, PartialEq, Debug, Clone)]
pub struct ShellProps {
    /// Resolves paths to pages.
    pub resolver: Resolver,
    /// The shell configuration.
    #[prop_or_default]
    pub config: Rc<ShellConfig>,
    /// Navigation entries of the page layout.
    #[prop_or_default]
    pub nav: Vec<NavItem>,
}

fn not_found_props(config: &ShellConfig) -> NotFoundProps {
    yew::props!(NotFoundProps {
        home_path: config.fallback_path.clone(),
    })
}

/// The application shell.
///
/// Shows a loading screen until the route handler reports the first page, then renders the page
/// inside the [`PageLayout`], or the [`NotFound`] screen if no page could be resolved.
///
/// If the route handler does not report anything before the watchdog timeout, the shell stops
/// loading on its own and makes one attempt to load the fallback page.
#[function_component]
pub fn Shell(props: &ShellProps) -> Html {
    let ShellProps {
        resolver,
        config,
        nav,
    } = props;

    let state = use_reducer_eq(ShellState::default);
    let route = use_current_route();

    // Read when the watchdog fires, not when it is armed.
    let has_route = use_mut_ref(|| false);
    *has_route.borrow_mut() = route.is_some();

    let on_component_change = use_callback(
        |component: Option<Page>, dispatcher| {
            dispatcher.dispatch(ShellAction::ComponentChanged(component))
        },
        state.dispatcher(),
    );
    let on_loading_change = use_callback(
        |loading: bool, dispatcher| dispatcher.dispatch(ShellAction::LoadingChanged(loading)),
        state.dispatcher(),
    );

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |(initialized, timeout)| {
                let watchdog = (!*initialized).then(|| {
                    Timeout::new(*timeout, move || {
                        let has_route = *has_route.borrow();
                        dispatcher.dispatch(ShellAction::WatchdogExpired { has_route });
                    })
                });

                move || drop(watchdog)
            },
            (state.initialized(), config.watchdog_timeout()),
        );
    }

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |(fallback, resolver, path)| {
                let task = (*fallback == FallbackLoad::Requested).then(|| {
                    let resolver = resolver.clone();
                    let path = path.clone();
                    tracing::warn!("loading fallback page {}", path);

                    spawn_cancellable(async move {
                        let page = match resolver.resolve(&path).await {
                            Ok(Resolution::Resolved(m)) => Some(m),
                            Ok(_) => {
                                tracing::warn!("fallback page {} does not exist", path);
                                None
                            }
                            Err(e) => {
                                tracing::warn!("failed to load fallback page: {}", e);
                                None
                            }
                        };

                        dispatcher.dispatch(ShellAction::FallbackSettled(page));
                    })
                });

                move || drop(task)
            },
            (state.fallback(), resolver.clone(), config.fallback_path.clone()),
        );
    }

    let app_name = AttrValue::from(config.app_name.clone());
    let current_path = route.map(|m| m.path);

    let content = match state.view() {
        ShellView::Loading(stage) => html! {
            <LoadingScreen app_name={app_name.clone()} {stage} />
        },
        ShellView::Page(page) => {
            tracing::debug!(
                "rendering {} at {}",
                page.name(),
                current_path.as_deref().unwrap_or("<none>")
            );
            let transition_key = current_path
                .clone()
                .unwrap_or(AttrValue::Static("component"));

            html! {
                <PageLayout app_name={app_name.clone()} current_path={current_path.clone()} nav={nav.clone()}>
                    <PageTransition {transition_key}>
                        {page.render()}
                    </PageTransition>
                </PageLayout>
            }
        }
        ShellView::NotFound => html! {
            <PageLayout app_name={app_name.clone()} current_path={current_path.clone()} nav={nav.clone()}>
                <PageTransition transition_key="fallback">
                    <NotFound ..not_found_props(&config) />
                </PageTransition>
            </PageLayout>
        },
    };

    html! {
        <>
            <Helmet>
                <title>{app_name}</title>
            </Helmet>
            <RouteHandler
                resolver={resolver.clone()}
                {on_component_change}
                {on_loading_change}
            />
            {content}
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_goes_home_to_the_fallback_path() {
        let config = ShellConfig {
            fallback_path: "/home".to_string(),
            ..ShellConfig::default()
        };

        assert_eq!(not_found_props(&config).home_path.as_str(), "/home");
        assert_eq!(
            not_found_props(&ShellConfig::default()).home_path.as_str(),
            "/"
        );
    }
}
