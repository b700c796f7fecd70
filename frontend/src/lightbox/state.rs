use crate::cycle::{self, Direction};

/// Visual lifecycle of the lightbox. Navigation only happens from `Shown`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Opening,
    Shown,
    /// Current image leaving towards the side opposite to `direction`'s entry.
    SlidingOut { direction: Direction, target: usize },
    /// Waiting for the off-screen preload of `target`.
    Loading { direction: Direction, target: usize },
    /// New image entering from the opposite edge.
    SlidingIn { direction: Direction },
    Closing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

/// Where the image sits for the current phase, as a CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Center,
    ExitLeft,
    ExitRight,
    EnterFromLeft,
    EnterFromRight,
}

impl Placement {
    pub fn class(self) -> &'static str {
        match self {
            Placement::Center => "lightbox-image",
            Placement::ExitLeft => "lightbox-image slide-out-left",
            Placement::ExitRight => "lightbox-image slide-out-right",
            Placement::EnterFromLeft => "lightbox-image slide-in-left",
            Placement::EnterFromRight => "lightbox-image slide-in-right",
        }
    }
}

/// Cyclic navigator over a fixed, ordered list of image sources.
#[derive(Clone, Debug, PartialEq)]
pub struct Lightbox {
    images: Vec<String>,
    index: usize,
    phase: Phase,
    /// Overlay carries its `show` class; set one frame after opening.
    revealed: bool,
}

impl Lightbox {
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            index: 0,
            phase: Phase::Closed,
            revealed: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != Phase::Closed
    }

    /// Source that should be on screen right now.
    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    /// Source the component must preload before calling `loaded`.
    pub fn pending_source(&self) -> Option<&str> {
        match self.phase {
            Phase::Loading { target, .. } => self.images.get(target).map(String::as_str),
            _ => None,
        }
    }

    /// Opens on `src`; unknown sources fall back to the first image.
    pub fn open(&mut self, src: &str) -> bool {
        if self.images.is_empty() || self.phase != Phase::Closed {
            return false;
        }
        self.index = self.images.iter().position(|s| s == src).unwrap_or(0);
        self.phase = Phase::Opening;
        self.revealed = false;
        true
    }

    /// First frame after mount: start the open animation.
    pub fn reveal(&mut self) -> bool {
        if self.phase != Phase::Opening || self.revealed {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn overlay_class(&self) -> &'static str {
        if self.revealed {
            "lightbox show"
        } else {
            "lightbox"
        }
    }

    pub fn opened(&mut self) -> bool {
        self.advance_from(|phase| matches!(phase, Phase::Opening).then_some(Phase::Shown))
    }

    pub fn next(&mut self) -> bool {
        self.navigate(Direction::Forward)
    }

    pub fn previous(&mut self) -> bool {
        self.navigate(Direction::Backward)
    }

    pub fn slide_out_done(&mut self) -> bool {
        self.advance_from(|phase| match phase {
            Phase::SlidingOut { direction, target } => Some(Phase::Loading { direction, target }),
            _ => None,
        })
    }

    /// Preload finished: swap the source and start sliding in.
    pub fn loaded(&mut self) -> bool {
        let Phase::Loading { direction, target } = self.phase else {
            return false;
        };
        self.index = target;
        self.phase = Phase::SlidingIn { direction };
        true
    }

    pub fn slide_in_done(&mut self) -> bool {
        self.advance_from(|phase| matches!(phase, Phase::SlidingIn { .. }).then_some(Phase::Shown))
    }

    pub fn close(&mut self) -> bool {
        if matches!(self.phase, Phase::Closed | Phase::Closing) {
            return false;
        }
        self.phase = Phase::Closing;
        self.revealed = false;
        true
    }

    pub fn closed(&mut self) -> bool {
        self.advance_from(|phase| matches!(phase, Phase::Closing).then_some(Phase::Closed))
    }

    /// Keyboard is only honoured while the lightbox is fully shown.
    pub fn on_key(&mut self, key: Key) -> bool {
        if self.phase != Phase::Shown {
            return false;
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowLeft => self.previous(),
            Key::ArrowRight => self.next(),
            Key::Other => false,
        }
    }

    pub fn placement(&self) -> Placement {
        match self.phase {
            // Moving forward, the old image leaves to the left and the new one
            // comes in from the right.
            Phase::SlidingOut { direction: Direction::Forward, .. }
            | Phase::Loading { direction: Direction::Forward, .. } => Placement::ExitLeft,
            Phase::SlidingOut { direction: Direction::Backward, .. }
            | Phase::Loading { direction: Direction::Backward, .. } => Placement::ExitRight,
            Phase::SlidingIn { direction: Direction::Forward } => Placement::EnterFromRight,
            Phase::SlidingIn { direction: Direction::Backward } => Placement::EnterFromLeft,
            _ => Placement::Center,
        }
    }

    fn navigate(&mut self, direction: Direction) -> bool {
        if self.phase != Phase::Shown {
            return false;
        }
        let Some(target) = cycle::step(self.index, self.images.len(), direction) else {
            return false;
        };
        self.phase = Phase::SlidingOut { direction, target };
        true
    }

    fn advance_from(&mut self, transition: impl FnOnce(Phase) -> Option<Phase>) -> bool {
        match transition(self.phase) {
            Some(phase) => {
                self.phase = phase;
                true
            }
            None => false,
        }
    }
}
