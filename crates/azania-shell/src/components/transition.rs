use std::rc::Rc;
use std::time::Duration;

use stylist::yew::styled_component;
use yew::prelude::*;

use crate::task::Timeout;

/// How long the exit animation plays before the next content is mounted.
pub const EXIT_DURATION: Duration = Duration::from_millis(300);

/// The animation currently applied to the displayed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// The content is entering (or has entered).
    Entering,
    /// The content is leaving and will be replaced once the exit animation ends.
    Exiting,
}

/// Actions accepted by [`TransitionState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionAction {
    /// Content under `key` has been provided.
    Update(AttrValue),
    /// The exit animation has finished.
    ExitFinished,
}

/// A keyed transition that waits for the old content to exit before the new content enters.
///
/// Only keys are tracked. The content itself is rendered by [`PageTransition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionState {
    key: AttrValue,
    phase: TransitionPhase,
    pending: Option<AttrValue>,
}

impl TransitionState {
    /// Creates a transition showing the content under `key`.
    pub fn new(key: AttrValue) -> Self {
        Self {
            key,
            phase: TransitionPhase::Entering,
            pending: None,
        }
    }

    /// The key of the displayed content.
    pub fn key(&self) -> &AttrValue {
        &self.key
    }

    /// The key that will be displayed once the exit animation ends.
    pub fn pending(&self) -> Option<&AttrValue> {
        self.pending.as_ref()
    }

    /// The current phase.
    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Returns `true` while the displayed content is leaving.
    pub fn is_exiting(&self) -> bool {
        self.phase == TransitionPhase::Exiting
    }

    /// Returns `true` if the content under `key` is the one on screen and not leaving.
    pub fn displays(&self, key: &AttrValue) -> bool {
        self.phase == TransitionPhase::Entering && &self.key == key
    }
}

impl Reducible for TransitionState {
    type Action = TransitionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match (action, self.phase) {
            (TransitionAction::Update(key), TransitionPhase::Entering) => {
                if key != next.key {
                    next.phase = TransitionPhase::Exiting;
                    next.pending = Some(key);
                }
            }
            (TransitionAction::Update(key), TransitionPhase::Exiting) => {
                if key == next.key {
                    // Returned to the leaving content before it finished exiting.
                    next.phase = TransitionPhase::Entering;
                    next.pending = None;
                } else {
                    next.pending = Some(key);
                }
            }
            (TransitionAction::ExitFinished, TransitionPhase::Exiting) => {
                if let Some(key) = next.pending.take() {
                    next.key = key;
                }
                next.phase = TransitionPhase::Entering;
            }
            (TransitionAction::ExitFinished, TransitionPhase::Entering) => {}
        }

        if next == *self {
            return self;
        }

        next.into()
    }
}

/// Props for [`PageTransition`].
#[derive(Properties, PartialEq, Debug)]
pub struct PageTransitionProps {
    /// Changing the key replaces the children with an exit and an enter animation.
    pub transition_key: AttrValue,
    /// Children.
    #[prop_or_default]
    pub children: Children,
}

/// Animates page changes.
///
/// When the key changes, the old children fade out upwards, then the new children are mounted
/// and fade in from below. Children updated under the same key are updated in place.
#[styled_component]
pub fn PageTransition(props: &PageTransitionProps) -> Html {
    let state = {
        let key = props.transition_key.clone();
        use_reducer_eq(move || TransitionState::new(key))
    };
    // The children last rendered under the displayed key, shown while they exit.
    let outgoing = use_mut_ref(Html::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |key| {
                dispatcher.dispatch(TransitionAction::Update(key.clone()));
            },
            props.transition_key.clone(),
        );
    }

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |exiting| {
                let timeout = exiting.then(|| {
                    Timeout::new(EXIT_DURATION, move || {
                        dispatcher.dispatch(TransitionAction::ExitFinished)
                    })
                });

                move || drop(timeout)
            },
            state.is_exiting(),
        );
    }

    let content = if state.displays(&props.transition_key) {
        let content = html! { <>{for props.children.iter()}</> };
        *outgoing.borrow_mut() = content.clone();

        content
    } else {
        outgoing.borrow().clone()
    };

    let animation = match state.phase() {
        TransitionPhase::Entering => css!("animation: shell-page-enter 300ms ease-in-out both;"),
        TransitionPhase::Exiting => css!("animation: shell-page-exit 300ms ease-in-out both;"),
    };

    html! {
        <div key={state.key().to_string()} class={classes!("page-transition", animation)}>
            {content}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::tests::Home;
    use crate::page::Page;

    fn update(key: &'static str) -> TransitionAction {
        TransitionAction::Update(AttrValue::Static(key))
    }

    fn start() -> Rc<TransitionState> {
        Rc::new(TransitionState::new(AttrValue::Static("/about")))
    }

    #[test]
    fn new_key_exits_before_entering() {
        let state = start().reduce(update("/contact"));

        assert_eq!(state.phase(), TransitionPhase::Exiting);
        assert_eq!(state.key().as_str(), "/about");
        assert_eq!(state.pending().map(|m| m.as_str()), Some("/contact"));
        assert!(!state.displays(&AttrValue::Static("/contact")));

        let state = state.reduce(TransitionAction::ExitFinished);

        assert_eq!(state.phase(), TransitionPhase::Entering);
        assert_eq!(state.key().as_str(), "/contact");
        assert_eq!(state.pending(), None);
        assert!(state.displays(&AttrValue::Static("/contact")));
    }

    #[test]
    fn rerendering_under_the_same_key_keeps_state() {
        let page = Page::of::<Home>("Home");
        // Component nodes never compare equal, so content cannot take part in the state.
        assert_ne!(page.render(), page.render());

        let state = start();
        let next = state.clone().reduce(update("/about"));
        let next = next.reduce(update("/about"));

        assert!(Rc::ptr_eq(&state, &next));
        assert!(next.displays(&AttrValue::Static("/about")));
    }

    #[test]
    fn latest_key_wins_during_exit() {
        let state = start()
            .reduce(update("/contact"))
            .reduce(update("/news"))
            .reduce(TransitionAction::ExitFinished);

        assert_eq!(state.key().as_str(), "/news");
        assert!(state.displays(&AttrValue::Static("/news")));
    }

    #[test]
    fn returning_during_exit_cancels_the_exit() {
        let state = start()
            .reduce(update("/contact"))
            .reduce(update("/about"));

        assert_eq!(state.phase(), TransitionPhase::Entering);
        assert_eq!(state.pending(), None);
        assert!(state.displays(&AttrValue::Static("/about")));

        let state = state.reduce(TransitionAction::ExitFinished);
        assert_eq!(state.key().as_str(), "/about");
    }

    #[test]
    fn stray_exit_finished_is_ignored() {
        let state = start();
        let next = state.clone().reduce(TransitionAction::ExitFinished);

        assert!(Rc::ptr_eq(&state, &next));
    }
}
