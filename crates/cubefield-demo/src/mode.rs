/// Which half of the demo receives input.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum OverlayMode {
    /// Fly camera active, pointer captured, cubes spinning.
    #[default]
    Navigation,
    /// Menu shown, pointer free, cubes frozen, button hit-testing active.
    Overlay,
}

impl OverlayMode {
    pub fn toggled(self) -> Self {
        match self {
            OverlayMode::Navigation => OverlayMode::Overlay,
            OverlayMode::Overlay => OverlayMode::Navigation,
        }
    }

    pub fn is_overlay(self) -> bool {
        self == OverlayMode::Overlay
    }

    /// Whether the pointer should be hidden and grabbed in this mode.
    pub fn captures_pointer(self) -> bool {
        self == OverlayMode::Navigation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_navigation_with_capture() {
        let mode = OverlayMode::default();
        assert_eq!(mode, OverlayMode::Navigation);
        assert!(mode.captures_pointer());
        assert!(!mode.is_overlay());
    }

    #[test]
    fn toggling_twice_returns_to_start() {
        let mode = OverlayMode::Navigation.toggled();
        assert!(mode.is_overlay());
        assert!(!mode.captures_pointer());
        assert_eq!(mode.toggled(), OverlayMode::Navigation);
    }
}
