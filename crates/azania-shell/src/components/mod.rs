//! Components rendered by the shell.

mod layout;
mod loading;
mod not_found;
mod route_handler;
mod toaster;
mod transition;

pub use layout::{NavItem, PageLayout, PageLayoutProps};
pub use loading::{LoadingScreen, LoadingScreenProps};
pub use not_found::{NotFound, NotFoundProps};
pub use route_handler::{RouteHandler, RouteHandlerProps};
pub use toaster::{
    use_toast, Toast, ToastAction, ToastDefaults, ToastHandle, ToastId, ToastKind,
    ToastPosition, ToastQueue, ToastRequest, Toaster,
};
pub use transition::{
    PageTransition, PageTransitionProps, TransitionAction, TransitionPhase, TransitionState,
    EXIT_DURATION,
};
