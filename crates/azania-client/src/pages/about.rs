use stylist::yew::styled_component;
use yew::prelude::*;

#[styled_component]
pub fn AboutPage() -> Html {
    html! {
        <section class={css!("max-width: 48rem; margin: 0 auto; padding: 3rem 2rem;")}>
            <h1>{"About Us"}</h1>
            <p>
                {"Azania Academy is an independent school committed to academic excellence, \
                  character and community."}
            </p>
        </section>
    }
}
