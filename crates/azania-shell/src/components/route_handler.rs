use yew::prelude::*;

use crate::error::ResolveResult;
use crate::page::Page;
use crate::resolution::{Resolution, Resolver};
use crate::router::use_current_route;
use crate::task::spawn_cancellable;

/// Props for [`RouteHandler`].
#[derive(Properties, PartialEq, Debug)]
pub struct RouteHandlerProps {
    /// Resolves the current path to a page.
    pub resolver: Resolver,
    /// Called with the resolved page, or `None` if the path has no page.
    pub on_component_change: Callback<Option<Page>>,
    /// Called with `false` once a resolution has settled.
    pub on_loading_change: Callback<bool>,
}

fn page_of(result: ResolveResult<Resolution>) -> Option<Page> {
    match result {
        Ok(Resolution::Pending) => {
            tracing::warn!("resolver returned a pending resolution, treating as not found");
            None
        }
        Ok(m) => m.into_page(),
        Err(e) => {
            tracing::error!("{}", e);
            None
        }
    }
}

fn settle(
    page: Option<Page>,
    on_component_change: &Callback<Option<Page>>,
    on_loading_change: &Callback<bool>,
) {
    on_component_change.emit(page);
    on_loading_change.emit(false);
}

/// Resolves the current route and reports the result through callbacks.
///
/// Resolution starts on mount and again whenever the path changes. A resolution that has not
/// settled when the path changes or the handler unmounts is cancelled and never reported.
///
/// Every settled resolution emits `on_component_change` followed by `on_loading_change(false)`,
/// including failed ones, which are reported as not found.
#[function_component]
pub fn RouteHandler(props: &RouteHandlerProps) -> Html {
    let path = use_current_route().map(|m| m.path);

    use_effect_with_deps(
        |(path, resolver, on_component_change, on_loading_change)| {
            let task = match path.clone() {
                Some(path) => {
                    let resolver = resolver.clone();
                    let on_component_change = on_component_change.clone();
                    let on_loading_change = on_loading_change.clone();

                    tracing::debug!("resolving {}", path);
                    Some(spawn_cancellable(async move {
                        let page = page_of(resolver.resolve(&path).await);
                        settle(page, &on_component_change, &on_loading_change);
                    }))
                }
                None => {
                    tracing::warn!("no current route to resolve");
                    settle(None, on_component_change, on_loading_change);
                    None
                }
            };

            move || drop(task)
        },
        (
            path,
            props.resolver.clone(),
            props.on_component_change.clone(),
            props.on_loading_change.clone(),
        ),
    );

    Html::default()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::error::ResolveError;
    use crate::page::tests::Home;

    #[derive(Debug, PartialEq)]
    enum Reported {
        Component(Option<&'static str>),
        Loading(bool),
    }

    fn recording() -> (
        Rc<RefCell<Vec<Reported>>>,
        Callback<Option<Page>>,
        Callback<bool>,
    ) {
        let reported = Rc::new(RefCell::new(Vec::new()));

        let on_component_change = {
            let reported = reported.clone();
            Callback::from(move |m: Option<Page>| {
                reported
                    .borrow_mut()
                    .push(Reported::Component(m.map(|m| m.name())))
            })
        };
        let on_loading_change = {
            let reported = reported.clone();
            Callback::from(move |m: bool| reported.borrow_mut().push(Reported::Loading(m)))
        };

        (reported, on_component_change, on_loading_change)
    }

    #[test]
    fn resolved_page_is_reported() {
        assert_eq!(
            page_of(Ok(Resolution::Resolved(Page::of::<Home>("Home")))),
            Some(Page::of::<Home>("Home"))
        );
    }

    #[test]
    fn missing_pending_and_failed_are_not_found() {
        assert_eq!(page_of(Ok(Resolution::NotFound)), None);
        assert_eq!(page_of(Ok(Resolution::Pending)), None);
        assert_eq!(
            page_of(Err(ResolveError::Unavailable {
                path: "/about".to_string(),
                reason: "chunk failed to load".to_string(),
            })),
            None
        );
    }

    #[test]
    fn settle_reports_component_before_loading() {
        let (reported, on_component_change, on_loading_change) = recording();

        settle(
            Some(Page::of::<Home>("Home")),
            &on_component_change,
            &on_loading_change,
        );

        assert_eq!(
            *reported.borrow(),
            vec![Reported::Component(Some("Home")), Reported::Loading(false)]
        );
    }

    #[test]
    fn failed_resolution_settles_as_not_found() {
        let (reported, on_component_change, on_loading_change) = recording();

        let page = page_of(Err(ResolveError::Failed {
            path: "/contact".to_string(),
            reason: "network".to_string(),
        }));
        settle(page, &on_component_change, &on_loading_change);

        assert_eq!(
            *reported.borrow(),
            vec![Reported::Component(None), Reported::Loading(false)]
        );
    }
}
