//! Scroll-offset thresholds shared by the fixed page chrome.

/// The navbar gains its solid background past this offset.
pub const NAVBAR_THRESHOLD: f64 = 60.0;

/// The floating contact button appears past this offset.
pub const FLOATING_CTA_THRESHOLD: f64 = 300.0;

pub fn past_threshold(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floating_cta_threshold() {
        assert!(past_threshold(301.0, FLOATING_CTA_THRESHOLD));
        assert!(!past_threshold(299.0, FLOATING_CTA_THRESHOLD));
        assert!(!past_threshold(300.0, FLOATING_CTA_THRESHOLD));
    }

    #[test]
    fn navbar_threshold() {
        assert!(past_threshold(61.0, NAVBAR_THRESHOLD));
        assert!(!past_threshold(59.0, NAVBAR_THRESHOLD));
    }
}
