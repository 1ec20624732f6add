//! Route-to-page resolution.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use async_trait::async_trait;

use crate::error::ResolveResult;
use crate::page::Page;

/// The state of a page resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The resolution has not settled yet.
    Pending,
    /// The path resolved to a page.
    Resolved(Page),
    /// No page exists for the path.
    NotFound,
}

impl Resolution {
    /// Returns `true` if the resolution has settled.
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Returns the resolved page, if any.
    pub fn into_page(self) -> Option<Page> {
        match self {
            Self::Resolved(m) => Some(m),
            Self::Pending | Self::NotFound => None,
        }
    }
}

impl From<Option<Page>> for Resolution {
    fn from(value: Option<Page>) -> Self {
        match value {
            Some(m) => Self::Resolved(m),
            None => Self::NotFound,
        }
    }
}

/// Resolves a path to a page component.
///
/// Implementations may load page code lazily. A resolver should never return
/// [`Resolution::Pending`].
#[async_trait(?Send)]
pub trait PageResolver: fmt::Debug {
    /// Resolves `path` to a page.
    async fn resolve(&self, path: &str) -> ResolveResult<Resolution>;
}

/// A shareable page resolver that can be passed as a component property.
#[derive(Clone)]
pub struct Resolver {
    inner: Rc<dyn PageResolver>,
}

impl Resolver {
    /// Wraps a page resolver.
    pub fn new<R>(resolver: R) -> Self
    where
        R: 'static + PageResolver,
    {
        Self {
            inner: Rc::new(resolver),
        }
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Resolver").field(&self.inner).finish()
    }
}

impl PartialEq for Resolver {
    // A resolver is not expected to change after the shell is created.
    #[allow(clippy::vtable_address_comparisons)]
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Deref for Resolver {
    type Target = dyn PageResolver;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}
