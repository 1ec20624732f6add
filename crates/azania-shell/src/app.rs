use yew::prelude::*;

use crate::components::Toaster;
use crate::providers::{AuthProvider, ThemeProvider};
use crate::shell::{Shell, ShellProps};

/// The application: the [`Shell`] wrapped in the theme and authentication providers, next to the
/// global [`Toaster`].
#[function_component]
pub fn App(props: &ShellProps) -> Html {
    let props = props.clone();
    let default_theme = props.config.default_theme;

    html! {
        <ThemeProvider {default_theme}>
            <AuthProvider>
                <Shell ..props />
                <Toaster />
            </AuthProvider>
        </ThemeProvider>
    }
}
