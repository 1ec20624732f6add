use azania_shell::providers::use_auth;
use stylist::yew::styled_component;
use yew::prelude::*;

#[styled_component]
pub fn HomePage() -> Html {
    let auth = use_auth();
    let welcome = match auth.as_ref().and_then(|m| m.session()) {
        Some(m) => format!("Welcome back, {}.", m.display_name),
        None => "Welcome to Azania Academy.".to_string(),
    };

    html! {
        <section class={css!(r#"
            max-width: 48rem;
            margin: 0 auto;
            padding: 4rem 2rem;
            text-align: center;
        "#)}>
            <h1 class={css!("font-family: var(--font-heading); font-size: 2.5rem;")}>{welcome}</h1>
            <p class="shell-muted">
                {"Nurturing curious minds from early learning through matric."}
            </p>
        </section>
    }
}
