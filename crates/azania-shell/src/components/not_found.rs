use stylist::yew::styled_component;
use yew::prelude::*;

use crate::router::{reload_page, use_navigate};

/// Props for [`NotFound`].
#[derive(Properties, PartialEq, Debug)]
pub struct NotFoundProps {
    /// The path opened by the "Go to Homepage" button.
    #[prop_or(AttrValue::Static("/"))]
    pub home_path: AttrValue,
}

/// Shown when no page could be resolved for the current route.
///
/// Offers two ways out: navigating to the home page or reloading the browser.
#[styled_component]
pub fn NotFound(props: &NotFoundProps) -> Html {
    let navigate = use_navigate();

    let go_home = use_callback(
        |_: MouseEvent, (navigate, home_path)| navigate.emit(home_path.to_string()),
        (navigate, props.home_path.clone()),
    );
    let reload = Callback::from(|_: MouseEvent| reload_page());

    let button = css!(r#"
        width: 100%;
        padding: 0.75rem 1.5rem;
        border-radius: 0.5rem;
        font-family: var(--font-heading);
        cursor: pointer;
        transition: background-color 150ms;
    "#);

    html! {
        <div class={css!(r#"
            min-height: 100vh;
            background: var(--background);
            display: flex;
            align-items: center;
            justify-content: center;
        "#)}>
            <div class={css!("text-align: center; max-width: 28rem;")}>
                <div class={css!(r#"
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    background: var(--muted);
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                "#)}>{"🏫"}</div>
                <h1 class={css!(r#"
                    font-size: 1.5rem;
                    font-family: var(--font-heading);
                    font-weight: 600;
                    margin-bottom: 1rem;
                "#)}>{"Page Not Found"}</h1>
                <p class="shell-muted" style="margin-bottom: 1.5rem;">
                    {"The page you're looking for doesn't exist or there was an error loading it."}
                </p>
                <div class={css!("display: flex; flex-direction: column; gap: 0.75rem;")}>
                    <button
                        class={classes!(button.clone(), css!(r#"
                            background: var(--gold);
                            color: black;
                            border: none;
                            &:hover { background: var(--gold-600); }
                        "#))}
                        onclick={go_home}
                    >
                        {"Go to Homepage"}
                    </button>
                    <button
                        class={classes!(button, css!(r#"
                            background: transparent;
                            color: var(--foreground);
                            border: 1px solid var(--border);
                            &:hover { background: var(--muted); }
                        "#))}
                        onclick={reload}
                    >
                        {"Refresh Page"}
                    </button>
                </div>
            </div>
        </div>
    }
}
