//! View-state for the interactive parts of the page. Components keep these in
//! signals and forward events to them; nothing here touches the DOM.

mod contact;
mod gallery;
mod nav;

pub use contact::ContactWidget;
pub use gallery::Gallery;
pub use nav::{NavMenu, ScrollRequest};
