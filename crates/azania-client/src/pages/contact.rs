use azania_shell::components::{use_toast, ToastKind, ToastRequest};
use stylist::yew::styled_component;
use yew::prelude::*;

#[styled_component]
pub fn ContactPage() -> Html {
    let toast = use_toast();

    let onsubmit = Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        toast.show(
            ToastRequest::new(ToastKind::Success, "Message sent")
                .description("Our admissions office will get back to you shortly."),
        );
    });

    html! {
        <section class={css!("max-width: 32rem; margin: 0 auto; padding: 3rem 2rem;")}>
            <h1>{"Contact"}</h1>
            <form
                class={css!("display: flex; flex-direction: column; gap: 0.75rem;")}
                {onsubmit}
            >
                <input type="email" placeholder="Your email" required={true} />
                <textarea placeholder="Your message" required={true} />
                <button type="submit">{"Send"}</button>
            </form>
        </section>
    }
}
