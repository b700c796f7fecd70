use crate::cycle::{self, Direction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Autoplay {
    Running,
    /// Pointer or finger is resting on the slider.
    Paused,
    /// Nothing to rotate.
    Stopped,
}

/// What the owner of the interval handle should do after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerCommand {
    Keep,
    Restart,
    Stop,
}

/// Cyclic slide index with autoplay bookkeeping. The interval handle itself
/// lives with whoever drives the carousel; this only says when to replace it.
#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    index: usize,
    count: usize,
    autoplay: Autoplay,
}

impl Carousel {
    pub fn new(count: usize) -> Self {
        Self {
            index: 0,
            count,
            autoplay: if count == 0 {
                Autoplay::Stopped
            } else {
                Autoplay::Running
            },
        }
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    #[cfg(test)]
    pub fn autoplay(&self) -> Autoplay {
        self.autoplay
    }

    /// Interval tick. Does not touch the timer.
    pub fn tick(&mut self) -> Option<usize> {
        if self.autoplay != Autoplay::Running {
            return None;
        }
        self.advance(Direction::Forward)
    }

    pub fn next(&mut self) -> TimerCommand {
        self.manual(|c| c.advance(Direction::Forward))
    }

    pub fn previous(&mut self) -> TimerCommand {
        self.manual(|c| c.advance(Direction::Backward))
    }

    pub fn go_to(&mut self, index: usize) -> TimerCommand {
        self.manual(|c| {
            if c.count == 0 {
                return None;
            }
            c.index = index % c.count;
            Some(c.index)
        })
    }

    pub fn pause(&mut self) -> TimerCommand {
        if self.autoplay != Autoplay::Running {
            return TimerCommand::Keep;
        }
        self.autoplay = Autoplay::Paused;
        TimerCommand::Stop
    }

    pub fn resume(&mut self) -> TimerCommand {
        if self.autoplay != Autoplay::Paused {
            return TimerCommand::Keep;
        }
        self.autoplay = Autoplay::Running;
        TimerCommand::Restart
    }

    /// Viewport resized: back to the first slide with a fresh interval.
    pub fn reset(&mut self) -> TimerCommand {
        if self.count == 0 {
            return TimerCommand::Keep;
        }
        self.index = 0;
        self.autoplay = Autoplay::Running;
        TimerCommand::Restart
    }

    /// CSS transform for the slide track.
    pub fn translate(&self) -> String {
        format!("translateX(-{}%)", self.index * 100)
    }

    /// One entry per slide; `true` marks the current one.
    pub fn dots(&self) -> Vec<bool> {
        (0..self.count).map(|i| i == self.index).collect()
    }

    fn advance(&mut self, direction: Direction) -> Option<usize> {
        let index = cycle::step(self.index, self.count, direction)?;
        self.index = index;
        Some(index)
    }

    // Manual navigation restarts the interval unless the pointer is still
    // resting on the slider, in which case the pause holds.
    fn manual(&mut self, nav: impl FnOnce(&mut Self) -> Option<usize>) -> TimerCommand {
        if nav(self).is_none() {
            return TimerCommand::Keep;
        }
        match self.autoplay {
            Autoplay::Running => TimerCommand::Restart,
            Autoplay::Paused | Autoplay::Stopped => TimerCommand::Keep,
        }
    }
}
