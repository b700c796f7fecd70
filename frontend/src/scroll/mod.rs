//! Scroll geometry: which section is current, and how to get somewhere.

pub mod dom;
pub mod frame;
pub mod locator;

pub use dom::{DocumentLayout, ScrollEngine, WindowScroll};
pub use frame::FrameGate;
pub use locator::{SectionId, SectionLocator};
