use stylist::yew::styled_component;
use yew::prelude::*;

const PROGRAMS: &[(&str, &str)] = &[
    ("Foundation Phase", "Grades R to 3"),
    ("Intermediate Phase", "Grades 4 to 6"),
    ("Senior Phase", "Grades 7 to 9"),
    ("FET Phase", "Grades 10 to 12"),
];

#[styled_component]
pub fn ProgramsPage() -> Html {
    html! {
        <section class={css!("max-width: 48rem; margin: 0 auto; padding: 3rem 2rem;")}>
            <h1>{"Programs"}</h1>
            <ul class={css!(r#"
                list-style: none;
                padding: 0;
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr));
                gap: 1rem;
            "#)}>
                {for PROGRAMS.iter().map(|(name, grades)| html! {
                    <li class={css!(r#"
                        background: var(--card);
                        border: 1px solid var(--border);
                        border-radius: 0.5rem;
                        padding: 1rem;
                    "#)}>
                        <strong>{*name}</strong>
                        <div class="shell-muted">{*grades}</div>
                    </li>
                })}
            </ul>
        </section>
    }
}
