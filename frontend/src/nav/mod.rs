pub mod links;
pub mod menu;

pub use links::{NavLinks, NavbarTone};
pub use menu::MobileMenu;
