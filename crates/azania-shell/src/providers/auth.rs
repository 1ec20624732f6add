use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::storage;

const STORAGE_KEY: &str = "azania-session";

/// A signed-in visitor.
///
/// The session is issued by the authentication service. The shell only stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The identifier of the user.
    pub user_id: String,
    /// The name shown to the user.
    pub display_name: String,
}

/// Actions accepted by [`AuthState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    /// A user has signed in.
    SignIn(Session),
    /// The user has signed out.
    SignOut,
}

/// The authentication state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthState {
    /// The current session, if any.
    pub session: Option<Session>,
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let session = match action {
            AuthAction::SignIn(m) => Some(m),
            AuthAction::SignOut => None,
        };

        if self.session == session {
            return self;
        }

        Self { session }.into()
    }
}

fn restore_session() -> Option<Session> {
    let stored = storage::read(STORAGE_KEY)?;

    match serde_json::from_str(&stored) {
        Ok(m) => Some(m),
        Err(e) => {
            tracing::warn!("discarding unreadable session: {}", e);
            storage::remove(STORAGE_KEY);
            None
        }
    }
}

fn persist_session(session: Option<&Session>) {
    match session.map(serde_json::to_string) {
        Some(Ok(m)) => storage::write(STORAGE_KEY, &m),
        Some(Err(e)) => tracing::warn!("failed to serialise session: {}", e),
        None => storage::remove(STORAGE_KEY),
    }
}

/// The authentication context provided by [`AuthProvider`].
#[derive(Debug, Clone, PartialEq)]
pub struct AuthContext {
    state: UseReducerHandle<AuthState>,
}

impl AuthContext {
    /// The current session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.state.session.as_ref()
    }

    /// Returns `true` if a user is signed in.
    pub fn is_signed_in(&self) -> bool {
        self.state.session.is_some()
    }

    /// Stores a session issued by the authentication service.
    pub fn sign_in(&self, session: Session) {
        persist_session(Some(&session));
        self.state.dispatch(AuthAction::SignIn(session));
    }

    /// Forgets the current session.
    pub fn sign_out(&self) {
        persist_session(None);
        self.state.dispatch(AuthAction::SignOut);
    }
}

/// Props for [`AuthProvider`].
#[derive(Properties, PartialEq, Debug)]
pub struct AuthProviderProps {
    /// Children.
    #[prop_or_default]
    pub children: Children,
}

/// Provides an [`AuthContext`] to its children.
///
/// A session stored by a previous visit is restored when the provider mounts.
#[function_component]
pub fn AuthProvider(props: &AuthProviderProps) -> Html {
    let state = use_reducer_eq(|| AuthState {
        session: restore_session(),
    });

    use_effect_with_deps(
        |_| {
            tracing::debug!("auth provider mounted");

            || tracing::debug!("auth provider unmounted")
        },
        (),
    );

    let context = AuthContext { state };

    html! {
        <ContextProvider<AuthContext> {context}>
            {for props.children.iter()}
        </ContextProvider<AuthContext>>
    }
}

/// Returns the authentication context.
///
/// Returns `None` outside of an [`AuthProvider`].
#[hook]
pub fn use_auth() -> Option<AuthContext> {
    use_context::<AuthContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            user_id: "u-1".to_string(),
            display_name: "Thandi".to_string(),
        }
    }

    #[test]
    fn sign_in_and_out() {
        let state = Rc::new(AuthState::default());

        let state = state.reduce(AuthAction::SignIn(session()));
        assert_eq!(state.session, Some(session()));

        let state = state.reduce(AuthAction::SignOut);
        assert_eq!(state.session, None);
    }

    #[test]
    fn repeated_sign_out_keeps_state() {
        let state = Rc::new(AuthState::default());
        let next = state.clone().reduce(AuthAction::SignOut);

        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn session_json() {
        let json = serde_json::to_string(&session()).unwrap();

        assert_eq!(json, r#"{"user_id":"u-1","display_name":"Thandi"}"#);
        assert_eq!(serde_json::from_str::<Session>(&json).unwrap(), session());
    }
}
