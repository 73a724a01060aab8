use log::Level;

// Verbose state transitions when running locally
#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const CONFIRMATION_DELAY_MS: u32 = 2000;
pub const HEADER_OFFSET_PX: f64 = 100.0;
pub const BUBBLE_COUNT: usize = 30;
/// Past this many pixels the nav bar switches to its solid style.
pub const NAV_SCROLLED_PX: f64 = 50.0;

pub const LOGO_URL: &str = "https://static.wixstatic.com/media/b6f2c5_80f0668f46994301aa5a8bbf075ccbca~mv2.png/v1/fill/w_232,h_306,al_c,q_85,usm_0.66_1.00_0.01,enc_avif,quality_auto/FIZZY%20MOON%20WHITE.png";
pub const VENUE_IMAGE_URL: &str = "https://images.unsplash.com/photo-1514933651103-005eec06c04b?q=80&w=1000&auto=format&fit=crop";
pub const ADDRESS: &str = "35 Regent St, Leamington Spa CV32 5EE";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_takes_two_seconds() {
        assert_eq!(CONFIRMATION_DELAY_MS, 2000);
    }
}
