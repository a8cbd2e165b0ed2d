// Copyright 2026 the Scrollin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS value formatting.
//!
//! Pure string helpers shared by both backends. Kept free of `web-sys` so they
//! can be unit tested on the host.

use scrollin_core::easing::Easing;
use scrollin_core::region::{Inset, ObserverConfig};

/// Properties every transition animates.
pub(crate) const TRANSITION_PROPERTY: &str = "opacity, transform";

/// Compositor hint written while a target is primed.
pub(crate) const WILL_CHANGE: &str = "transform, opacity";

/// Rounds to three decimals so float noise (`0.18000000000000002`) does not
/// reach the style sheet.
fn tidy(v: f64) -> f64 {
    let t = (v * 1000.0).round() / 1000.0;
    // Avoid "-0".
    if t == 0.0 { 0.0 } else { t }
}

/// `translate3d(0, <y>px, 0)`
pub(crate) fn translate_y(y: f64) -> String {
    format!("translate3d(0, {}px, 0)", tidy(y))
}

/// A unitless opacity.
pub(crate) fn opacity(o: f64) -> String {
    format!("{}", tidy(o.clamp(0.0, 1.0)))
}

/// A CSS `<time>` in seconds.
pub(crate) fn seconds(s: f64) -> String {
    format!("{}s", tidy(s))
}

/// `cubic-bezier(x1, y1, x2, y2)`
pub(crate) fn timing_function(easing: &Easing) -> String {
    let [x1, y1, x2, y2] = easing.control_points();
    format!(
        "cubic-bezier({}, {}, {}, {})",
        tidy(x1),
        tidy(y1),
        tidy(x2),
        tidy(y2)
    )
}

/// A root-margin component, `sign` being `1.0` to grow the root and `-1.0`
/// to shrink it.
fn margin(inset: Inset, sign: f64) -> String {
    match inset {
        Inset::Percent(p) if tidy(p) == 0.0 => "0px".into(),
        Inset::Pixels(px) if tidy(px) == 0.0 => "0px".into(),
        Inset::Percent(p) => format!("{}%", tidy(sign * p)),
        Inset::Pixels(px) => format!("{}px", tidy(sign * px)),
    }
}

/// Observer `rootMargin`: the top edge grown by the outset, the bottom edge
/// pulled up by the inset.
pub(crate) fn root_margin(config: &ObserverConfig) -> String {
    format!(
        "{} 0px {} 0px",
        margin(config.top_outset, 1.0),
        margin(config.bottom_inset, -1.0)
    )
}

#[cfg(test)]
mod tests {
    use scrollin_core::region::TriggerRegion;

    use super::*;

    #[test]
    fn hidden_and_visible_transforms() {
        assert_eq!(translate_y(14.0), "translate3d(0, 14px, 0)");
        assert_eq!(translate_y(0.0), "translate3d(0, 0px, 0)");
        assert_eq!(translate_y(-0.0), "translate3d(0, 0px, 0)");
        assert_eq!(translate_y(7.25), "translate3d(0, 7.25px, 0)");
    }

    #[test]
    fn stagger_delays_are_tidy() {
        assert_eq!(seconds(3.0 * 0.06), "0.18s");
        assert_eq!(seconds(0.0), "0s");
        assert_eq!(seconds(0.7), "0.7s");
    }

    #[test]
    fn opacity_is_clamped() {
        assert_eq!(opacity(1.0), "1");
        assert_eq!(opacity(0.0), "0");
        assert_eq!(opacity(1.5), "1");
    }

    #[test]
    fn default_easing_matches_site_curve() {
        assert_eq!(
            timing_function(&Easing::EASE_OUT),
            "cubic-bezier(0.2, 0.8, 0.2, 1)"
        );
    }

    #[test]
    fn default_region_root_margin() {
        let config = TriggerRegion::DEFAULT.observer_config(800.0);
        assert_eq!(root_margin(&config), "0px 0px -20% 0px");
    }

    #[test]
    fn bottom_anchor_has_no_inset() {
        let config = TriggerRegion::parse("top bottom")
            .unwrap()
            .observer_config(800.0);
        assert_eq!(root_margin(&config), "0px 0px 0px 0px");
    }

    #[test]
    fn pixel_anchor_is_measured_from_the_bottom() {
        let config = TriggerRegion::parse("top 600px")
            .unwrap()
            .observer_config(800.0);
        assert_eq!(root_margin(&config), "0px 0px -200px 0px");
    }

    #[test]
    fn center_anchor_grows_the_root_upward() {
        let config = TriggerRegion::parse("center 80%")
            .unwrap()
            .observer_config(800.0);
        assert_eq!(root_margin(&config), "1000% 0px -20% 0px");
    }
}
