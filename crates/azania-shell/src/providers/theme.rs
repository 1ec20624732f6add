use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MediaQueryList;
use yew::prelude::*;

use crate::storage;

const STORAGE_KEY: &str = "azania-theme";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// The theme mode picked by the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Always light.
    #[default]
    Light,
    /// Always dark.
    Dark,
    /// Follow the operating system preference.
    System,
}

impl ThemeMode {
    /// The name of the mode, as stored and configured.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Resolves the mode to a concrete theme.
    pub fn resolve(&self, prefers_dark: bool) -> ResolvedTheme {
        match (self, prefers_dark) {
            (Self::Light, _) | (Self::System, false) => ResolvedTheme::Light,
            (Self::Dark, _) | (Self::System, true) => ResolvedTheme::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error returned when parsing an unknown theme mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownThemeMode(pub String);

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            m => Err(UnknownThemeMode(m.to_string())),
        }
    }
}

/// A concrete theme applied to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    /// The light theme.
    Light,
    /// The dark theme.
    Dark,
}

impl ResolvedTheme {
    /// The class added to the document element.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite theme.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// The theme context provided by [`ThemeProvider`].
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeContext {
    /// The mode picked by the visitor.
    pub mode: ThemeMode,
    /// The theme currently applied.
    pub resolved: ResolvedTheme,
    /// Changes the theme mode.
    pub set_mode: Callback<ThemeMode>,
    /// Switches between the light and the dark theme.
    pub toggle: Callback<()>,
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Light,
            resolved: ResolvedTheme::Light,
            set_mode: Callback::noop(),
            toggle: Callback::noop(),
        }
    }
}

/// Props for [`ThemeProvider`].
#[derive(Properties, PartialEq, Debug)]
pub struct ThemeProviderProps {
    /// The mode used when the visitor has not picked one.
    #[prop_or_default]
    pub default_theme: ThemeMode,
    /// Children.
    #[prop_or_default]
    pub children: Children,
}

fn dark_query() -> Option<MediaQueryList> {
    web_sys::window().and_then(|m| m.match_media(DARK_QUERY).ok().flatten())
}

fn prefers_dark() -> bool {
    dark_query().map(|m| m.matches()).unwrap_or(false)
}

/// Reports changes of the operating system colour scheme until dropped.
struct PreferenceListener {
    query: MediaQueryList,
    on_change: Closure<dyn Fn()>,
}

impl PreferenceListener {
    fn new<F>(f: F) -> Option<Self>
    where
        F: 'static + Fn(bool),
    {
        let query = dark_query()?;
        let on_change = {
            let query = query.clone();
            Closure::<dyn Fn()>::new(move || f(query.matches()))
        };

        if let Err(e) =
            query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        {
            tracing::warn!("failed to watch the colour scheme preference: {:?}", e);
            return None;
        }

        Some(Self { query, on_change })
    }
}

impl Drop for PreferenceListener {
    fn drop(&mut self) {
        let _ = self
            .query
            .remove_event_listener_with_callback("change", self.on_change.as_ref().unchecked_ref());
    }
}

fn stored_mode() -> Option<ThemeMode> {
    storage::read(STORAGE_KEY).and_then(|m| m.parse().ok())
}

fn set_document_class(theme: ResolvedTheme, present: bool) {
    let Some(root) = web_sys::window()
        .and_then(|m| m.document())
        .and_then(|m| m.document_element())
    else {
        return;
    };

    let class_list = root.class_list();
    let result = match present {
        true => class_list.add_1(theme.class_name()),
        false => class_list.remove_1(theme.class_name()),
    };

    if let Err(e) = result {
        tracing::warn!("failed to update theme class: {:?}", e);
    }
}

/// Provides a [`ThemeContext`] to its children and applies the theme to the document.
///
/// [`ThemeMode::System`] follows changes of the operating system preference while mounted. The
/// theme class is removed from the document when the provider unmounts.
#[function_component]
pub fn ThemeProvider(props: &ThemeProviderProps) -> Html {
    let default_theme = props.default_theme;
    let mode = use_state_eq(move || stored_mode().unwrap_or(default_theme));
    let system_dark = use_state_eq(prefers_dark);
    let resolved = mode.resolve(*system_dark);

    {
        let system_dark = system_dark.setter();
        use_effect_with_deps(
            move |_| {
                let listener = PreferenceListener::new(move |dark| system_dark.set(dark));

                move || drop(listener)
            },
            (),
        );
    }

    use_effect_with_deps(
        |resolved| {
            let resolved = *resolved;
            tracing::debug!("applying {} theme", resolved.class_name());
            set_document_class(resolved, true);

            move || set_document_class(resolved, false)
        },
        resolved,
    );

    let set_mode = use_callback(
        |next: ThemeMode, mode| {
            storage::write(STORAGE_KEY, next.as_str());
            mode.set(next);
        },
        mode.setter(),
    );

    let toggle = use_callback(
        |_, (resolved, set_mode)| {
            let next = match resolved.toggled() {
                ResolvedTheme::Light => ThemeMode::Light,
                ResolvedTheme::Dark => ThemeMode::Dark,
            };
            set_mode.emit(next);
        },
        (resolved, set_mode.clone()),
    );

    let context = ThemeContext {
        mode: *mode,
        resolved,
        set_mode,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> {context}>
            {for props.children.iter()}
        </ContextProvider<ThemeContext>>
    }
}

/// Returns the current theme context.
///
/// Outside of a [`ThemeProvider`], this returns a light theme whose callbacks do nothing.
#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_modes() {
        assert_eq!("light".parse(), Ok(ThemeMode::Light));
        assert_eq!("dark".parse(), Ok(ThemeMode::Dark));
        assert_eq!("system".parse(), Ok(ThemeMode::System));
        assert_eq!(
            "sepia".parse::<ThemeMode>(),
            Err(UnknownThemeMode("sepia".to_string()))
        );
    }

    #[test]
    fn mode_names_round_trip_through_display() {
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
            assert_eq!(mode.to_string().parse(), Ok(mode));
        }
    }

    #[test]
    fn system_follows_preference() {
        assert_eq!(ThemeMode::System.resolve(true), ResolvedTheme::Dark);
        assert_eq!(ThemeMode::System.resolve(false), ResolvedTheme::Light);
        assert_eq!(ThemeMode::Light.resolve(true), ResolvedTheme::Light);
        assert_eq!(ThemeMode::Dark.resolve(false), ResolvedTheme::Dark);
    }

    #[test]
    fn toggled_theme() {
        assert_eq!(ResolvedTheme::Light.toggled(), ResolvedTheme::Dark);
        assert_eq!(ResolvedTheme::Dark.toggled().class_name(), "light");
    }

    #[test]
    fn deserializes_lowercase() {
        assert_eq!(
            serde_json::from_str::<ThemeMode>("\"system\"").unwrap(),
            ThemeMode::System
        );
    }
}
