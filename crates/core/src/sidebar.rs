/// Viewport classification supplied by the layout's width watcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Desktop,
    Mobile,
}

/// Width at or below which the dashboard is classified as mobile.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

#[must_use]
pub const fn classify_width(width_px: u32) -> ViewportClass {
    if width_px <= MOBILE_BREAKPOINT_PX {
        ViewportClass::Mobile
    } else {
        ViewportClass::Desktop
    }
}

/// Sidebar visual state. Desktop collapses in place; mobile overlays the
/// content and auto-dismisses after navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarState {
    DesktopExpanded,
    DesktopCollapsed,
    MobileOpen,
    MobileClosed,
}

impl SidebarState {
    /// State after the viewport classification flips. Any prior collapse
    /// flag is discarded.
    #[must_use]
    pub const fn reset_for(viewport: ViewportClass) -> Self {
        match viewport {
            ViewportClass::Desktop => Self::DesktopExpanded,
            ViewportClass::Mobile => Self::MobileClosed,
        }
    }

    #[must_use]
    pub const fn viewport(self) -> ViewportClass {
        match self {
            Self::DesktopExpanded | Self::DesktopCollapsed => ViewportClass::Desktop,
            Self::MobileOpen | Self::MobileClosed => ViewportClass::Mobile,
        }
    }

    /// Toggle trigger: the sidebar button or the Ctrl/Cmd+B shortcut.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::DesktopExpanded => Self::DesktopCollapsed,
            Self::DesktopCollapsed => Self::DesktopExpanded,
            Self::MobileOpen => Self::MobileClosed,
            Self::MobileClosed => Self::MobileOpen,
        }
    }

    /// Session selection dismisses an open mobile sidebar so the lesson is
    /// visible after navigation. Desktop is unaffected.
    #[must_use]
    pub const fn session_selected(self) -> Self {
        match self {
            Self::MobileOpen => Self::MobileClosed,
            other => other,
        }
    }

    /// True when the navigation column occupies layout space.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::DesktopExpanded | Self::MobileOpen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_is_identity_within_a_viewport() {
        for state in [
            SidebarState::DesktopExpanded,
            SidebarState::DesktopCollapsed,
            SidebarState::MobileOpen,
            SidebarState::MobileClosed,
        ] {
            assert_eq!(state.toggled().toggled(), state);
        }
    }

    #[test]
    fn breakpoint_crossing_discards_collapse_flag() {
        // desktop collapsed, window shrinks past the breakpoint
        let state = SidebarState::DesktopCollapsed;
        assert_eq!(
            SidebarState::reset_for(ViewportClass::Mobile),
            SidebarState::MobileClosed,
        );
        // and back out again
        let _ = state;
        assert_eq!(
            SidebarState::reset_for(ViewportClass::Desktop),
            SidebarState::DesktopExpanded,
        );
    }

    #[test]
    fn selection_dismisses_mobile_only() {
        assert_eq!(
            SidebarState::MobileOpen.session_selected(),
            SidebarState::MobileClosed,
        );
        assert_eq!(
            SidebarState::DesktopExpanded.session_selected(),
            SidebarState::DesktopExpanded,
        );
        assert_eq!(
            SidebarState::DesktopCollapsed.session_selected(),
            SidebarState::DesktopCollapsed,
        );
    }

    #[test]
    fn classify_width_uses_inclusive_breakpoint() {
        assert_eq!(classify_width(MOBILE_BREAKPOINT_PX), ViewportClass::Mobile);
        assert_eq!(
            classify_width(MOBILE_BREAKPOINT_PX + 1),
            ViewportClass::Desktop,
        );
    }
}
