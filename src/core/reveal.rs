//! Scroll-reveal activation rule

use super::dom::ClassList;

/// One intersection report for an observed element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility {
    pub is_intersecting: bool,
    /// Visible fraction of the element's area, 0.0..=1.0
    pub ratio: f64,
}

/// Browsers may report a crossing ratio a rounding error below the threshold itself.
const RATIO_TOLERANCE: f64 = 1e-6;

impl Visibility {
    pub fn qualifies(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio + RATIO_TOLERANCE >= threshold
    }
}

/// Marks elements active the first time they become visible enough
#[derive(Debug, Clone)]
pub struct RevealRule {
    threshold: f64,
    active_class: String,
}

impl RevealRule {
    pub fn new(threshold: f64, active_class: impl Into<String>) -> Self {
        Self {
            threshold,
            active_class: active_class.into(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Apply one report. Returns true only on the transition to active.
    ///
    /// The class is never removed, so leaving and re-entering is a no-op.
    pub fn observe<T: ClassList>(&self, target: &T, visibility: Visibility) -> bool {
        if target.contains(&self.active_class) || !visibility.qualifies(self.threshold) {
            return false;
        }
        target.add(&self.active_class);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dom::fakes::FakeElement;

    fn seen(ratio: f64) -> Visibility {
        Visibility {
            is_intersecting: ratio > 0.0,
            ratio,
        }
    }

    #[test]
    fn test_below_threshold_stays_inactive() {
        let rule = RevealRule::new(0.1, "active");
        let element = FakeElement::with_classes(&["reveal"]);

        for ratio in [0.0, 0.02, 0.05, 0.099] {
            assert!(!rule.observe(&element, seen(ratio)));
        }
        assert!(!element.contains("active"));
    }

    #[test]
    fn test_activates_at_threshold() {
        let rule = RevealRule::new(0.1, "active");
        let element = FakeElement::with_classes(&["reveal"]);

        assert!(rule.observe(&element, seen(0.1)));
        assert!(element.contains("active"));
    }

    #[test]
    fn test_crossing_reported_just_under_threshold_activates() {
        let rule = RevealRule::new(0.1, "active");
        let element = FakeElement::with_classes(&["reveal"]);

        assert!(rule.observe(&element, seen(0.099_999_999_5)));
        assert!(element.contains("active"));
    }

    #[test]
    fn test_not_intersecting_never_qualifies() {
        let visibility = Visibility {
            is_intersecting: false,
            ratio: 0.5,
        };
        assert!(!visibility.qualifies(0.1));
    }

    #[test]
    fn test_stays_active_after_leaving() {
        let rule = RevealRule::new(0.1, "active");
        let element = FakeElement::with_classes(&["reveal"]);

        assert!(rule.observe(&element, seen(0.4)));
        assert!(!rule.observe(&element, seen(0.0)));
        assert!(element.contains("active"));

        // re-entry does not count as a second transition
        assert!(!rule.observe(&element, seen(1.0)));
        assert_eq!(
            element.class_names(),
            vec!["active".to_string(), "reveal".to_string()]
        );
    }
}
