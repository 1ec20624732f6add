//! Context providers wrapping the shell.

mod auth;
mod theme;

pub use auth::{
    use_auth, AuthAction, AuthContext, AuthProvider, AuthProviderProps, AuthState, Session,
};
pub use theme::{
    use_theme, ResolvedTheme, ThemeContext, ThemeMode, ThemeProvider, ThemeProviderProps,
    UnknownThemeMode,
};
