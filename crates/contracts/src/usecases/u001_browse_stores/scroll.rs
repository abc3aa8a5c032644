/// Distance from the bottom of the document (px) that counts as "reached the end"
pub const SCROLL_THRESHOLD_PX: f64 = 100.0;

/// `window.innerHeight + documentElement.scrollTop >= documentElement.offsetHeight - threshold`
pub fn is_near_bottom(inner_height: f64, scroll_top: f64, offset_height: f64) -> bool {
    inner_height + scroll_top >= offset_height - SCROLL_THRESHOLD_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_bottom_threshold() {
        // 800px viewport over a 3000px document
        assert!(!is_near_bottom(800.0, 0.0, 3000.0));
        assert!(!is_near_bottom(800.0, 2099.0, 3000.0));
        assert!(is_near_bottom(800.0, 2100.0, 3000.0));
        assert!(is_near_bottom(800.0, 2200.0, 3000.0));
    }

    #[test]
    fn test_short_document_is_always_near_bottom() {
        assert!(is_near_bottom(800.0, 0.0, 500.0));
    }
}
