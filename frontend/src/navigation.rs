use log::{debug, warn};
use web_sys::{window, ScrollBehavior, ScrollToOptions};

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub section: &'static str,
}

pub const EAT_DRINK_SECTION: &str = "eat-drink";
pub const BOOKINGS_SECTION: &str = "bookings";
pub const CONTACT_SECTION: &str = "contact";

pub const MAIN_MENU: [MenuItem; 3] = [
    MenuItem { label: "What's On", section: EAT_DRINK_SECTION },
    MenuItem { label: "Bookings", section: BOOKINGS_SECTION },
    MenuItem { label: "Contact Us", section: CONTACT_SECTION },
];

/// Document offset that puts the top of a section just below the fixed nav.
pub fn scroll_target(element_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    element_top + scroll_y - header_offset
}

/// 0.0 at the top of the page, 1.0 at the bottom.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// How far a section has travelled through the viewport: 0.0 when its top
/// meets the bottom edge, 1.0 once its bottom has left the top edge.
pub fn section_progress(section_top: f64, section_height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + section_height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - section_top) / travel).clamp(0.0, 1.0)
}

/// Smooth-scrolls to the element with `id`. Returns false if it isn't on
/// the current page.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(window) = window() else {
        return false;
    };
    let Some(element) = window.document().and_then(|doc| doc.get_element_by_id(id)) else {
        warn!("No section with id '{}' on this page", id);
        return false;
    };
    let element_top = element.get_bounding_client_rect().top();
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let top = scroll_target(element_top, scroll_y, config::HEADER_OFFSET_PX);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    debug!("Scrolling to #{} at {}", id, top);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_menu_targets_page_sections() {
        let sections: Vec<_> = MAIN_MENU.iter().map(|item| item.section).collect();
        assert_eq!(sections, vec!["eat-drink", "bookings", "contact"]);
    }

    #[test]
    fn scroll_target_subtracts_header() {
        assert_eq!(scroll_target(250.0, 1000.0, 100.0), 1150.0);
        assert_eq!(scroll_target(-400.0, 1000.0, 100.0), 500.0);
    }

    #[test]
    fn scroll_progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(5000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn section_progress_spans_entry_to_exit() {
        // Top edge just entering from below.
        assert_eq!(section_progress(1000.0, 600.0, 1000.0), 0.0);
        // Centred: 1000 + 600 of travel, halfway through.
        assert_eq!(section_progress(200.0, 600.0, 1000.0), 0.5);
        // Bottom edge gone past the top.
        assert_eq!(section_progress(-600.0, 600.0, 1000.0), 1.0);
        assert_eq!(section_progress(-5000.0, 600.0, 1000.0), 1.0);
        assert_eq!(section_progress(5000.0, 600.0, 1000.0), 0.0);
    }
}
