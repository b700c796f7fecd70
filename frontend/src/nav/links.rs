use crate::scroll::SectionId;

/// Navbar background, which decides how the active link is painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarTone {
    Dark,
    Transparent,
}

impl NavbarTone {
    /// Black as soon as the page has moved off the very top.
    pub fn from_offset(scroll_offset: f64) -> Self {
        if scroll_offset > 0.0 {
            NavbarTone::Dark
        } else {
            NavbarTone::Transparent
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            NavbarTone::Dark => "bg-black",
            NavbarTone::Transparent => "bg-transparent",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkStyle {
    Default,
    Hovered,
    ActiveOnDark,
    ActiveOnLight,
}

impl LinkStyle {
    #[cfg(test)]
    pub fn is_active(self) -> bool {
        matches!(self, LinkStyle::ActiveOnDark | LinkStyle::ActiveOnLight)
    }

    pub fn class(self) -> &'static str {
        match self {
            LinkStyle::Default => "nav-link",
            LinkStyle::Hovered => "nav-link hovered",
            LinkStyle::ActiveOnDark => "nav-link active active-dark",
            LinkStyle::ActiveOnLight => "nav-link active active-light",
        }
    }
}

/// Proof of a particular suspension; only the latest one may lift it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuspendTicket(u64);

/// Tracks the single highlighted nav link.
///
/// Scroll-spy updates are ignored while a click-initiated scroll is in
/// flight. The suspension is lifted by `resume` with the ticket handed out
/// by the most recent click, so an older timer can never end a newer
/// suspension early.
#[derive(Clone, Debug)]
pub struct NavLinks {
    links: Vec<SectionId>,
    active: Option<SectionId>,
    hovered: Option<SectionId>,
    tone: NavbarTone,
    suspended: bool,
    generation: u64,
}

impl NavLinks {
    pub fn new(links: Vec<SectionId>, tone: NavbarTone) -> Self {
        let active = links.first().cloned();
        Self {
            links,
            active,
            hovered: None,
            tone,
            suspended: false,
            generation: 0,
        }
    }

    #[cfg(test)]
    pub fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    #[cfg(test)]
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub fn tone(&self) -> NavbarTone {
        self.tone
    }

    pub fn set_active(&mut self, link: &SectionId) {
        if !self.links.contains(link) {
            log::debug!("ignoring unknown nav link #{}", link);
            return;
        }
        self.active = Some(link.clone());
    }

    /// Scroll-spy input. `None` leaves the current link alone.
    pub fn on_scroll(&mut self, section: Option<SectionId>) -> bool {
        if self.suspended {
            return false;
        }
        match section {
            Some(section) if self.active.as_ref() != Some(&section) => {
                self.set_active(&section);
                self.active.as_ref() == Some(&section)
            }
            _ => false,
        }
    }

    /// The caller scrolls to `link` and calls `resume` with the ticket once
    /// the suspension window has elapsed.
    pub fn on_user_click(&mut self, link: &SectionId) -> SuspendTicket {
        self.generation += 1;
        self.suspended = true;
        self.set_active(link);
        SuspendTicket(self.generation)
    }

    /// Returns whether updates were actually re-enabled.
    pub fn resume(&mut self, ticket: SuspendTicket) -> bool {
        if ticket.0 != self.generation || !self.suspended {
            return false;
        }
        self.suspended = false;
        true
    }

    pub fn set_tone(&mut self, tone: NavbarTone) -> bool {
        if self.tone == tone {
            return false;
        }
        self.tone = tone;
        true
    }

    pub fn hover(&mut self, link: &SectionId) {
        self.hovered = Some(link.clone());
    }

    pub fn leave(&mut self, link: &SectionId) {
        if self.hovered.as_ref() == Some(link) {
            self.hovered = None;
        }
    }

    pub fn style_of(&self, link: &SectionId) -> LinkStyle {
        if self.active.as_ref() == Some(link) {
            match self.tone {
                NavbarTone::Dark => LinkStyle::ActiveOnDark,
                NavbarTone::Transparent => LinkStyle::ActiveOnLight,
            }
        } else if self.hovered.as_ref() == Some(link) {
            LinkStyle::Hovered
        } else {
            LinkStyle::Default
        }
    }

    #[cfg(test)]
    pub fn styles(&self) -> Vec<(SectionId, LinkStyle)> {
        self.links
            .iter()
            .map(|link| (link.clone(), self.style_of(link)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> SectionId {
        SectionId::from(s)
    }

    fn nav() -> NavLinks {
        NavLinks::new(
            vec![id("home"), id("overview"), id("amenities"), id("contact")],
            NavbarTone::Transparent,
        )
    }

    fn active_count(nav: &NavLinks) -> usize {
        nav.styles().iter().filter(|(_, s)| s.is_active()).count()
    }

    #[test]
    fn set_active_twice_leaves_one_active() {
        let mut nav = nav();
        nav.set_active(&id("amenities"));
        nav.set_active(&id("amenities"));
        assert_eq!(active_count(&nav), 1);
        for (link, style) in nav.styles() {
            if link == id("amenities") {
                assert!(style.is_active());
            } else {
                assert_eq!(style, LinkStyle::Default);
            }
        }
    }

    #[test]
    fn active_style_follows_navbar_tone() {
        let mut nav = nav();
        nav.set_active(&id("overview"));
        assert_eq!(nav.style_of(&id("overview")), LinkStyle::ActiveOnLight);

        assert!(nav.set_tone(NavbarTone::from_offset(12.0)));
        assert_eq!(nav.style_of(&id("overview")), LinkStyle::ActiveOnDark);
        assert!(!nav.set_tone(NavbarTone::Dark));
    }

    #[test]
    fn scroll_updates_active_link() {
        let mut nav = nav();
        assert!(nav.on_scroll(Some(id("overview"))));
        assert_eq!(nav.active(), Some(&id("overview")));
        assert!(!nav.on_scroll(Some(id("overview"))));
        assert!(!nav.on_scroll(None));
        assert_eq!(nav.active(), Some(&id("overview")));
    }

    #[test]
    fn click_suspends_scroll_spy_until_resumed() {
        let mut nav = nav();
        let ticket = nav.on_user_click(&id("contact"));
        assert!(nav.is_suspended());
        assert_eq!(nav.active(), Some(&id("contact")));

        assert!(!nav.on_scroll(Some(id("amenities"))));
        assert_eq!(nav.active(), Some(&id("contact")));

        assert!(nav.resume(ticket));
        assert!(nav.on_scroll(Some(id("amenities"))));
    }

    #[test]
    fn newer_click_outlives_older_timer() {
        let mut nav = nav();
        let first = nav.on_user_click(&id("overview"));
        let second = nav.on_user_click(&id("overview"));

        assert!(!nav.resume(first));
        assert!(nav.is_suspended());
        assert!(nav.resume(second));
        assert!(!nav.is_suspended());
    }

    #[test]
    fn hover_is_cosmetic() {
        let mut nav = nav();
        nav.set_active(&id("home"));
        nav.hover(&id("amenities"));
        assert_eq!(nav.style_of(&id("amenities")), LinkStyle::Hovered);
        assert_eq!(nav.active(), Some(&id("home")));

        nav.hover(&id("home"));
        assert!(nav.style_of(&id("home")).is_active());

        nav.leave(&id("home"));
        assert_eq!(nav.style_of(&id("amenities")), LinkStyle::Default);
        assert_eq!(nav.active(), Some(&id("home")));
    }

    #[test]
    fn unknown_links_are_ignored() {
        let mut nav = nav();
        nav.set_active(&id("pricing"));
        assert_eq!(nav.active(), Some(&id("home")));
        assert!(!nav.on_scroll(Some(id("pricing"))));
    }
}
