use anymap2::AnyMap;
use bounce::helmet::HelmetBridge;
use bounce::BounceRoot;
use stylist::css;
use stylist::manager::StyleManager;
use stylist::yew::{Global, ManagerProvider};
use yew::prelude::*;
use yew_router::BrowserRouter;

use crate::components::ToastDefaults;

#[derive(Properties, PartialEq, Clone)]
pub(crate) struct ShellRootProps {
    #[prop_or_default]
    pub children: Html,
    pub toast_defaults: ToastDefaults,
}

#[function_component]
fn GlobalStyle() -> Html {
    html! {
        <Global css={css!(r#"
            :root, :root.light {
                --background: #ffffff;
                --foreground: #1a1a1a;
                --card: #ffffff;
                --card-foreground: #1a1a1a;
                --muted: #f3f4f6;
                --muted-foreground: #6b7280;
                --border: #e5e7eb;
                --gold: #d4a017;
                --gold-600: #b8860b;
                --font-heading: "Montserrat", sans-serif;
            }

            :root.dark {
                --background: #0f1115;
                --foreground: #f5f5f5;
                --card: #181b21;
                --card-foreground: #f5f5f5;
                --muted: #262a33;
                --muted-foreground: #9ca3af;
                --border: #2f3540;
            }

            .shell-muted {
                color: var(--muted-foreground);
                font-size: 0.875rem;
            }

            .shell-hint {
                font-size: 0.75rem;
                max-width: 28rem;
                text-align: center;
            }

            @keyframes shell-spin {
                to { transform: rotate(360deg); }
            }

            @keyframes shell-pulse {
                50% { opacity: 0.5; }
            }

            @keyframes shell-fade-in {
                from { opacity: 0; }
                to { opacity: 1; }
            }

            @keyframes shell-page-enter {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }

            @keyframes shell-page-exit {
                from { opacity: 1; transform: translateY(0); }
                to { opacity: 0; transform: translateY(-20px); }
            }
        "#)} />
    }
}

#[function_component]
pub(crate) fn ShellRoot(props: &ShellRootProps) -> Html {
    let ShellRootProps {
        children,
        toast_defaults,
    } = props.clone();

    let get_init_states = use_callback(
        move |_, toast_defaults| {
            let mut states = AnyMap::new();
            states.insert(toast_defaults.clone());

            states
        },
        toast_defaults,
    );

    let manager = use_memo(|_| StyleManager::new().ok(), ());

    let content = html! {
        <BounceRoot {get_init_states}>
            <HelmetBridge />
            <BrowserRouter>
                <GlobalStyle />
                {children}
            </BrowserRouter>
        </BounceRoot>
    };

    match manager.as_ref() {
        Some(manager) => html! {
            <ManagerProvider manager={manager.clone()}>
                {content}
            </ManagerProvider>
        },
        None => {
            tracing::error!("failed to create style manager, using the default one");
            content
        }
    }
}
