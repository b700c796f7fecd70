//! Lead capture: validation, session flags, popup policy and the webhook.

pub mod lead;
pub mod popup;
pub mod session;
pub mod submit;

pub use lead::{Field, LeadForm};
pub use popup::Popup;
pub use session::SessionStore;
pub use submit::submit_lead;
