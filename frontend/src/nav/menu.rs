/// Mobile menu open/closed state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[cfg(test)]
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    pub fn close(self) -> Self {
        Self { open: false }
    }

    pub fn class(self) -> &'static str {
        if self.open {
            "mobile-menu open"
        } else {
            "mobile-menu"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_then_close() {
        let menu = MobileMenu::default().toggle();
        assert!(menu.is_open());
        assert_eq!(menu.class(), "mobile-menu open");
        assert!(!menu.close().is_open());
        assert!(!menu.toggle().is_open());
    }
}
