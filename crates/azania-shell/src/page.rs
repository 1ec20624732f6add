use std::any::TypeId;
use std::fmt;

use yew::prelude::*;

fn render_page<COMP>() -> Html
where
    COMP: BaseComponent,
    COMP::Properties: Default,
{
    let props = COMP::Properties::default();

    html! { <COMP ..props /> }
}

/// A reference to a renderable page component.
///
/// Two pages are equal if they refer to the same component type.
#[derive(Clone)]
pub struct Page {
    name: &'static str,
    type_id: TypeId,
    render: fn() -> Html,
}

impl Page {
    /// Creates a page reference for a component with default props.
    pub fn of<COMP>(name: &'static str) -> Self
    where
        COMP: BaseComponent,
        COMP::Properties: Default,
    {
        Self {
            name,
            type_id: TypeId::of::<COMP>(),
            render: render_page::<COMP>,
        }
    }

    /// The display name of the page.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Renders the page component.
    pub fn render(&self) -> Html {
        (self.render)()
    }
}

impl PartialEq for Page {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Page {}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Page").field(&self.name).finish()
    }
}
