use stylist::yew::styled_component;
use yew::prelude::*;

use crate::providers::{use_auth, use_theme, ResolvedTheme};
use crate::router::use_navigate;

/// An entry of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// The text of the link.
    pub label: AttrValue,
    /// The path the link opens.
    pub path: AttrValue,
}

impl NavItem {
    /// Creates a navigation entry.
    pub fn new(label: impl Into<AttrValue>, path: impl Into<AttrValue>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// Returns `true` if the entry should be highlighted for `current_path`.
    pub fn is_active(&self, current_path: Option<&str>) -> bool {
        let Some(current_path) = current_path else {
            return false;
        };

        match self.path.as_str() {
            "/" => current_path == "/",
            m => {
                current_path == m
                    || current_path
                        .strip_prefix(m)
                        .map(|rest| rest.starts_with('/'))
                        .unwrap_or(false)
            }
        }
    }
}

/// Props for [`PageLayout`].
#[derive(Properties, PartialEq, Debug)]
pub struct PageLayoutProps {
    /// The name shown in the header and the footer.
    pub app_name: AttrValue,
    /// The path being displayed, used to highlight the navigation.
    #[prop_or_default]
    pub current_path: Option<AttrValue>,
    /// Navigation entries.
    #[prop_or_default]
    pub nav: Vec<NavItem>,
    /// The page.
    #[prop_or_default]
    pub children: Children,
}

/// Wraps a page with the site header, navigation and footer.
#[styled_component]
pub fn PageLayout(props: &PageLayoutProps) -> Html {
    let navigate = use_navigate();
    let theme = use_theme();
    let auth = use_auth();

    let current_path = props.current_path.as_deref();

    let links = props.nav.iter().map(|item| {
        let onclick = {
            let path = item.path.to_string();
            navigate.reform(move |e: MouseEvent| {
                e.prevent_default();
                path.clone()
            })
        };
        let active = item.is_active(current_path).then_some("active");

        html! {
            <a
                href={item.path.clone()}
                class={classes!("shell-nav-link", active)}
                {onclick}
            >
                {item.label.clone()}
            </a>
        }
    });

    let toggle_theme = theme.toggle.reform(|_: MouseEvent| ());
    let theme_label = match theme.resolved {
        ResolvedTheme::Light => "Dark mode",
        ResolvedTheme::Dark => "Light mode",
    };

    let greeting = auth
        .as_ref()
        .and_then(|m| m.session())
        .map(|m| html! { <span class="shell-muted">{format!("Signed in as {}", m.display_name)}</span> });

    html! {
        <div class={css!(r#"
            min-height: 100vh;
            display: flex;
            flex-direction: column;
            background: var(--background);
            color: var(--foreground);
        "#)}>
            <header class={css!(r#"
                display: flex;
                align-items: center;
                justify-content: space-between;
                gap: 1rem;
                padding: 1rem 2rem;
                border-bottom: 1px solid var(--border);

                .shell-nav-link {
                    margin-right: 1rem;
                    color: var(--foreground);
                    text-decoration: none;
                }

                .shell-nav-link.active {
                    color: var(--gold);
                    font-weight: 600;
                }
            "#)}>
                <span class={css!("font-family: var(--font-heading); font-weight: 600;")}>
                    {props.app_name.clone()}
                </span>
                <nav>{for links}</nav>
                <div class={css!("display: flex; align-items: center; gap: 1rem;")}>
                    {greeting}
                    <button
                        class={css!(r#"
                            background: transparent;
                            border: 1px solid var(--border);
                            border-radius: 0.5rem;
                            padding: 0.25rem 0.75rem;
                            color: var(--foreground);
                            cursor: pointer;
                        "#)}
                        onclick={toggle_theme}
                    >
                        {theme_label}
                    </button>
                </div>
            </header>
            <main class={css!("flex: 1;")}>
                {for props.children.iter()}
            </main>
            <footer class={css!(r#"
                padding: 1.5rem 2rem;
                border-top: 1px solid var(--border);
                text-align: center;
            "#)}>
                <span class="shell-muted">{format!("© {}", props.app_name)}</span>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_active_only_at_root() {
        let home = NavItem::new("Home", "/");

        assert!(home.is_active(Some("/")));
        assert!(!home.is_active(Some("/about")));
        assert!(!home.is_active(None));
    }

    #[test]
    fn section_matches_nested_paths() {
        let programs = NavItem::new("Programs", "/programs");

        assert!(programs.is_active(Some("/programs")));
        assert!(programs.is_active(Some("/programs/science")));
        assert!(!programs.is_active(Some("/programs-archive")));
        assert!(!programs.is_active(Some("/")));
    }
}
