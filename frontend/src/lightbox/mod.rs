pub mod state;

pub use state::{Key, Lightbox, Phase};
