//! Smooth scrolling to in-page anchors below a fixed header

/// Selector for an anchor's fragment target, if it has a usable one.
///
/// Returns `None` for the bare `"#"` and for anything that is not a fragment.
pub fn fragment_target(href: &str) -> Option<&str> {
    let href = href.trim();
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

/// Document offset to scroll to so the target sits just below the header.
pub fn scroll_offset(element_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    element_top + scroll_y - header_offset
}

/// Where to scroll for a click on `href`, or `None` when nothing should move.
///
/// `locate` returns the target's viewport-relative top for a fragment selector,
/// or `None` when no such element exists.
pub fn plan_scroll<F>(href: &str, scroll_y: f64, header_offset: f64, locate: F) -> Option<f64>
where
    F: FnOnce(&str) -> Option<f64>,
{
    let selector = fragment_target(href)?;
    let top = locate(selector)?;
    Some(scroll_offset(top, scroll_y, header_offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_target() {
        assert_eq!(fragment_target("#features"), Some("#features"));
        assert_eq!(fragment_target(" #faq "), Some("#faq"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target(""), None);
        assert_eq!(fragment_target("/pricing"), None);
    }

    #[test]
    fn test_scroll_offset_subtracts_header() {
        assert_eq!(scroll_offset(250.0, 1000.0, 100.0), 1150.0);
        assert_eq!(scroll_offset(-300.0, 1000.0, 100.0), 600.0);
    }

    #[test]
    fn test_plan_scroll_existing_target() {
        let planned = plan_scroll("#pricing", 400.0, 100.0, |selector| {
            assert_eq!(selector, "#pricing");
            Some(820.0)
        });
        assert_eq!(planned, Some(1120.0));
    }

    #[test]
    fn test_plan_scroll_missing_target_does_not_scroll() {
        assert_eq!(plan_scroll("#nowhere", 400.0, 100.0, |_| None), None);
    }

    #[test]
    fn test_plan_scroll_bare_hash_never_looks_up() {
        let planned = plan_scroll("#", 400.0, 100.0, |_| -> Option<f64> {
            panic!("bare hash must not be resolved")
        });
        assert_eq!(planned, None);
    }
}
