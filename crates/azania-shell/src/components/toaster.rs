use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use bounce::{use_atom_value, use_slice_dispatch, use_slice_value, Atom, Slice};
use serde::{Deserialize, Serialize};
use stylist::yew::styled_component;
use yew::prelude::*;

use crate::task::Timeout;

/// Where toasts are stacked on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    /// Top right corner.
    #[default]
    TopRight,
    /// Top left corner.
    TopLeft,
    /// Top edge, centred.
    TopCenter,
    /// Bottom right corner.
    BottomRight,
    /// Bottom left corner.
    BottomLeft,
    /// Bottom edge, centred.
    BottomCenter,
}

impl ToastPosition {
    fn placement(&self) -> &'static str {
        match self {
            Self::TopRight => "top: 1rem; right: 1rem;",
            Self::TopLeft => "top: 1rem; left: 1rem;",
            Self::TopCenter => "top: 1rem; left: 50%; transform: translateX(-50%);",
            Self::BottomRight => "bottom: 1rem; right: 1rem;",
            Self::BottomLeft => "bottom: 1rem; left: 1rem;",
            Self::BottomCenter => "bottom: 1rem; left: 50%; transform: translateX(-50%);",
        }
    }
}

/// Defaults applied to every toast.
///
/// The values are seeded from [`ShellConfig`](crate::ShellConfig) when the shell starts.
#[derive(Atom, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastDefaults {
    /// How long a toast stays on screen.
    pub duration_ms: u64,
    /// Where toasts are stacked.
    pub position: ToastPosition,
    /// CSS background of a toast.
    pub background: String,
    /// CSS text colour of a toast.
    pub color: String,
    /// CSS border of a toast.
    pub border: String,
}

impl Default for ToastDefaults {
    fn default() -> Self {
        Self {
            duration_ms: 4000,
            position: ToastPosition::TopRight,
            background: "var(--card)".to_string(),
            color: "var(--card-foreground)".to_string(),
            border: "1px solid var(--border)".to_string(),
        }
    }
}

impl ToastDefaults {
    /// The default display duration.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// The kind of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// A neutral message.
    Info,
    /// An operation succeeded.
    Success,
    /// Something needs attention.
    Warning,
    /// An operation failed.
    Error,
}

impl ToastKind {
    fn accent(&self) -> &'static str {
        match self {
            Self::Info => "var(--border)",
            Self::Success => "var(--success, #16a34a)",
            Self::Warning => "var(--gold)",
            Self::Error => "var(--destructive, #dc2626)",
        }
    }
}

/// Identifies a toast in the [`ToastQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

/// A toast to display.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    /// The identifier, assigned by the queue.
    pub id: ToastId,
    /// The kind of the toast.
    pub kind: ToastKind,
    /// The headline.
    pub title: String,
    /// Optional text below the headline.
    pub description: Option<String>,
    /// Display duration, if it differs from [`ToastDefaults`].
    pub duration: Option<Duration>,
}

/// A request to display a toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastRequest {
    /// The kind of the toast.
    pub kind: ToastKind,
    /// The headline.
    pub title: String,
    /// Optional text below the headline.
    pub description: Option<String>,
    /// Display duration, if it differs from [`ToastDefaults`].
    pub duration: Option<Duration>,
}

impl ToastRequest {
    /// Creates a request with the default duration and no description.
    pub fn new(kind: ToastKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: None,
            duration: None,
        }
    }

    /// Adds a description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overrides the display duration.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

/// Actions accepted by [`ToastQueue`].
#[derive(Debug, Clone, PartialEq)]
pub enum ToastAction {
    /// Displays a toast.
    Push(ToastRequest),
    /// Removes a toast.
    Dismiss(ToastId),
}

/// The toasts currently on screen, oldest first.
#[derive(Slice, Debug, Clone, PartialEq, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// The toasts currently on screen.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push(request) => {
                let mut next = (*self).clone();
                let ToastRequest {
                    kind,
                    title,
                    description,
                    duration,
                } = request;

                next.toasts.push(Toast {
                    id: ToastId(next.next_id),
                    kind,
                    title,
                    description,
                    duration,
                });
                next.next_id += 1;

                next.into()
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|m| m.id == id) {
                    return self;
                }

                let mut next = (*self).clone();
                next.toasts.retain(|m| m.id != id);

                next.into()
            }
        }
    }
}

/// A handle returned by [`use_toast`].
#[derive(Clone)]
pub struct ToastHandle {
    dispatch: Rc<dyn Fn(ToastAction)>,
}

impl fmt::Debug for ToastHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ToastHandle")
    }
}

impl ToastHandle {
    /// Displays a toast.
    pub fn show(&self, request: ToastRequest) {
        (self.dispatch)(ToastAction::Push(request));
    }

    /// Displays a neutral toast.
    pub fn info(&self, title: impl Into<String>) {
        self.show(ToastRequest::new(ToastKind::Info, title));
    }

    /// Displays a success toast.
    pub fn success(&self, title: impl Into<String>) {
        self.show(ToastRequest::new(ToastKind::Success, title));
    }

    /// Displays a warning toast.
    pub fn warning(&self, title: impl Into<String>) {
        self.show(ToastRequest::new(ToastKind::Warning, title));
    }

    /// Displays an error toast.
    pub fn error(&self, title: impl Into<String>) {
        self.show(ToastRequest::new(ToastKind::Error, title));
    }

    /// Removes a toast before its duration has elapsed.
    pub fn dismiss(&self, id: ToastId) {
        (self.dispatch)(ToastAction::Dismiss(id));
    }
}

/// Returns a handle to display toasts on the global [`Toaster`].
#[hook]
pub fn use_toast() -> ToastHandle {
    ToastHandle {
        dispatch: use_slice_dispatch::<ToastQueue>(),
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    duration: Duration,
    defaults: Rc<ToastDefaults>,
    on_dismiss: Callback<ToastId>,
}

#[styled_component]
fn ToastItem(props: &ToastItemProps) -> Html {
    let ToastItemProps {
        toast,
        duration,
        defaults,
        on_dismiss,
    } = props;

    {
        let on_dismiss = on_dismiss.clone();
        use_effect_with_deps(
            move |(id, duration)| {
                let id = *id;
                let timeout = Timeout::new(*duration, move || on_dismiss.emit(id));

                move || drop(timeout)
            },
            (toast.id, *duration),
        );
    }

    let onclick = {
        let id = toast.id;
        on_dismiss.reform(move |_: MouseEvent| id)
    };

    let style = format!(
        "background: {}; color: {}; border: {}; border-left: 4px solid {};",
        defaults.background,
        defaults.color,
        defaults.border,
        toast.kind.accent(),
    );

    html! {
        <div
            role="status"
            {style}
            class={css!(r#"
                min-width: 18rem;
                max-width: 24rem;
                padding: 0.75rem 1rem;
                border-radius: 0.5rem;
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                cursor: pointer;
                animation: shell-fade-in 200ms ease-out both;
            "#)}
            {onclick}
        >
            <div class={css!("font-weight: 600;")}>{toast.title.clone()}</div>
            if let Some(ref description) = toast.description {
                <div class="shell-muted">{description.clone()}</div>
            }
        </div>
    }
}

/// The global notification surface.
///
/// Toasts pushed with [`use_toast`] are displayed here and dismissed after their duration or when
/// clicked.
#[styled_component]
pub fn Toaster() -> Html {
    let queue = use_slice_value::<ToastQueue>();
    let defaults = use_atom_value::<ToastDefaults>();
    let dispatch = use_slice_dispatch::<ToastQueue>();

    let on_dismiss = Callback::from(move |id: ToastId| dispatch(ToastAction::Dismiss(id)));

    let placement = defaults.position.placement();

    html! {
        <div
            aria-live="polite"
            style={placement}
            class={css!(r#"
                position: fixed;
                z-index: 100;
                display: flex;
                flex-direction: column;
                gap: 0.5rem;
            "#)}
        >
            {for queue.toasts().iter().map(|toast| {
                let duration = toast.duration.unwrap_or_else(|| defaults.duration());

                html! {
                    <ToastItem
                        key={toast.id.0}
                        toast={toast.clone()}
                        {duration}
                        defaults={defaults.clone()}
                        on_dismiss={on_dismiss.clone()}
                    />
                }
            })}
        </div>
    }
}
