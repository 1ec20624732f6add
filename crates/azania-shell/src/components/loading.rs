use stylist::yew::styled_component;
use yew::prelude::*;

use crate::state::LoadingStage;

/// Props for [`LoadingScreen`].
#[derive(Properties, PartialEq, Debug)]
pub struct LoadingScreenProps {
    /// The name of the application.
    pub app_name: AttrValue,
    /// Which part of loading is still in progress.
    pub stage: LoadingStage,
}

/// A full screen spinner shown until the shell is ready.
#[styled_component]
pub fn LoadingScreen(props: &LoadingScreenProps) -> Html {
    let LoadingScreenProps { app_name, stage } = props;

    html! {
        <div class={css!(r#"
            min-height: 100vh;
            background: var(--background);
            display: flex;
            align-items: center;
            justify-content: center;
        "#)}>
            <div class={css!(r#"
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 1rem;
            "#)}>
                <div class={css!(r#"
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    border-bottom: 2px solid var(--gold);
                    animation: shell-spin 1s linear infinite;
                "#)} />
                <div class={css!("text-align: center;")}>
                    <h2 class={css!(r#"
                        font-family: var(--font-heading);
                        font-weight: 500;
                        font-size: 1.125rem;
                        margin-bottom: 0.5rem;
                    "#)}>{format!("Loading {app_name}...")}</h2>
                    <p class="shell-muted">{stage.message()}</p>
                </div>
                <div class={css!(r#"
                    width: 12rem;
                    height: 0.25rem;
                    background: var(--muted);
                    border-radius: 9999px;
                    overflow: hidden;
                "#)}>
                    <div class={css!(r#"
                        height: 100%;
                        width: 60%;
                        background: var(--gold);
                        border-radius: 9999px;
                        animation: shell-pulse 2s ease-in-out infinite;
                    "#)} />
                </div>
                <div class="shell-muted shell-hint">
                    {"If this takes longer than expected, please refresh your browser"}
                </div>
            </div>
        </div>
    }
}
