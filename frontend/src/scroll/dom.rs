use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::locator::{Layout, SectionId};

/// Scroll position source and scroll-to-target animation.
pub trait ScrollEngine {
    fn offset(&self) -> f64;
    fn scroll_to(&self, target: &SectionId);
}

/// Native smooth scrolling on `window`, landing sections just below the
/// fixed navbar.
#[derive(Clone, Debug)]
pub struct WindowScroll {
    navbar_id: &'static str,
}

impl WindowScroll {
    pub fn new(navbar_id: &'static str) -> Self {
        Self { navbar_id }
    }

    fn navbar_height(&self, document: &Document) -> f64 {
        document
            .get_element_by_id(self.navbar_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| el.offset_height() as f64)
            .unwrap_or(0.0)
    }
}

impl ScrollEngine for WindowScroll {
    fn offset(&self) -> f64 {
        window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    fn scroll_to(&self, target: &SectionId) {
        let Some(window) = window() else { return };
        let Some(document) = window.document() else { return };
        let Some(top) = DocumentLayout::top_of(&window, &document, target) else {
            log::debug!("scroll target #{} not in document", target);
            return;
        };

        let options = ScrollToOptions::new();
        options.set_top((top - self.navbar_height(&document)).max(0.0));
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Reads section geometry straight from the live document.
pub struct DocumentLayout;

impl DocumentLayout {
    fn top_of(window: &Window, document: &Document, id: &SectionId) -> Option<f64> {
        let element = document.get_element_by_id(id.as_str())?;
        let scroll_y = window.scroll_y().ok()?;
        Some(element.get_bounding_client_rect().top() + scroll_y)
    }
}

impl Layout for DocumentLayout {
    fn section_top(&self, id: &SectionId) -> Option<f64> {
        let window = window()?;
        let document = window.document()?;
        Self::top_of(&window, &document, id)
    }
}
