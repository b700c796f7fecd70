pub mod state;

pub use state::{Carousel, TimerCommand};
