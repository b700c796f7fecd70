use std::time::Duration;

#[cfg(debug_assertions)]
pub fn get_webhook_url() -> &'static str {
    match option_env!("LEAD_WEBHOOK_URL") {
        Some(url) => url,
        None => "http://localhost:3001/leads", // Local sheet mock
    }
}

#[cfg(not(debug_assertions))]
pub fn get_webhook_url() -> &'static str {
    option_env!("LEAD_WEBHOOK_URL").unwrap_or("")
}

pub const SHEET_NAME: &str = "Leads";
pub const LEAD_LOCATION: &str = "Landing Page Popup";

pub const NAVBAR_ID: &str = "navbar";

/// Page sections in document order. The first one wins near the top.
pub const SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("overview", "Overview"),
    ("amenities", "Amenities"),
    ("gallery", "Gallery"),
    ("location", "Location"),
    ("contact", "Contact"),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timings {
    /// Distance below the viewport top a section must cross to become current.
    pub section_trigger_px: f64,
    /// Under this offset the first section is always current.
    pub top_threshold_px: f64,
    pub nav_suspend: Duration,
    pub carousel_autoplay: Duration,
    pub resize_debounce: Duration,
    pub lightbox_open: Duration,
    pub lightbox_slide_out: Duration,
    pub lightbox_slide_in: Duration,
    pub lightbox_close: Duration,
    pub popup_auto_open: Duration,
    pub notification: Duration,
}

pub const TIMINGS: Timings = Timings {
    section_trigger_px: 150.0,
    top_threshold_px: 50.0,
    nav_suspend: Duration::from_millis(2000),
    carousel_autoplay: Duration::from_millis(5000),
    resize_debounce: Duration::from_millis(250),
    lightbox_open: Duration::from_millis(300),
    lightbox_slide_out: Duration::from_millis(150),
    lightbox_slide_in: Duration::from_millis(400),
    lightbox_close: Duration::from_millis(300),
    popup_auto_open: Duration::from_millis(8000),
    notification: Duration::from_millis(3000),
};

/// gloo timers take milliseconds as `u32`.
pub fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
