use web_sys::js_sys::Reflect;
use web_sys::Window;

use crate::config::MOBILE_BREAKPOINT;

/// What the visitor's device can comfortably animate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeviceCapabilities {
    pub is_mobile: bool,
    pub is_touch: bool,
    pub prefers_reduced_motion: bool,
}

impl DeviceCapabilities {
    pub fn from_measurements(
        viewport_width: f64,
        max_touch_points: i32,
        has_touch_events: bool,
        prefers_reduced_motion: bool,
    ) -> Self {
        Self {
            is_mobile: viewport_width < MOBILE_BREAKPOINT,
            is_touch: has_touch_events || max_touch_points > 0,
            prefers_reduced_motion,
        }
    }

    /// Reads the current window. Anything that can't be read counts as a
    /// plain desktop browser.
    pub fn detect(window: &Window) -> Self {
        let width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(MOBILE_BREAKPOINT);
        let touch_points = window.navigator().max_touch_points();
        let has_touch_events = Reflect::has(window, &"ontouchstart".into()).unwrap_or(false);
        let reduced = window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false);

        Self::from_measurements(width, touch_points, has_touch_events, reduced)
    }

    /// Phones and anything driven by touch.
    pub fn is_handheld(&self) -> bool {
        self.is_mobile || self.is_touch
    }

    pub fn should_reduce_animations(&self) -> bool {
        self.is_mobile || self.is_touch || self.prefers_reduced_motion
    }
}

/// Effect settings derived once at startup and handed down as context.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    pub capabilities: DeviceCapabilities,
    pub transition_duration: f64,
    pub enable_blur: bool,
    pub enable_3d: bool,
    pub enable_parallax: bool,
    pub custom_cursor: bool,
    pub staggered_text: bool,
    pub pinned_services: bool,
}

impl MotionConfig {
    pub fn for_device(capabilities: DeviceCapabilities) -> Self {
        let reduce = capabilities.should_reduce_animations();
        Self {
            capabilities,
            transition_duration: if reduce { 0.3 } else { 0.6 },
            enable_blur: !reduce,
            enable_3d: !reduce,
            enable_parallax: !reduce,
            custom_cursor: !capabilities.is_handheld(),
            staggered_text: !capabilities.prefers_reduced_motion,
            pinned_services: !reduce,
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self::for_device(DeviceCapabilities::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewports_are_mobile() {
        let caps = DeviceCapabilities::from_measurements(390.0, 0, false, false);
        assert!(caps.is_mobile);
        assert!(caps.should_reduce_animations());

        let caps = DeviceCapabilities::from_measurements(768.0, 0, false, false);
        assert!(!caps.is_mobile);
        assert!(!caps.should_reduce_animations());
    }

    #[test]
    fn touch_or_preference_reduces_effects() {
        assert!(DeviceCapabilities::from_measurements(1440.0, 5, false, false).should_reduce_animations());
        assert!(DeviceCapabilities::from_measurements(1440.0, 0, true, false).should_reduce_animations());
        assert!(DeviceCapabilities::from_measurements(1440.0, 0, false, true).should_reduce_animations());
    }

    #[test]
    fn wide_touch_screens_are_handheld() {
        assert!(DeviceCapabilities::from_measurements(1440.0, 0, true, false).is_handheld());
        assert!(DeviceCapabilities::from_measurements(1440.0, 10, false, false).is_handheld());
        assert!(DeviceCapabilities::from_measurements(390.0, 0, false, false).is_handheld());
        assert!(!DeviceCapabilities::from_measurements(1440.0, 0, false, true).is_handheld());
    }

    #[test]
    fn desktop_gets_full_effects() {
        let config = MotionConfig::default();
        assert!(config.custom_cursor);
        assert!(config.pinned_services);
        assert!(config.staggered_text);
    }

    #[test]
    fn reduced_motion_on_desktop_keeps_cursor_but_drops_motion() {
        let caps = DeviceCapabilities::from_measurements(1440.0, 0, false, true);
        let config = MotionConfig::for_device(caps);
        assert!(config.custom_cursor);
        assert!(!config.staggered_text);
        assert!(!config.pinned_services);
        assert_eq!(config.transition_duration, 0.3);
        assert!(!config.enable_3d);
    }

    #[test]
    fn phones_lose_the_cursor() {
        let caps = DeviceCapabilities::from_measurements(390.0, 5, true, false);
        let config = MotionConfig::for_device(caps);
        assert!(!config.custom_cursor);
        assert!(config.staggered_text);
        assert!(!config.enable_blur);
    }
}
