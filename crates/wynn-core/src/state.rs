//! UI state machines.

/// Mobile navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        };
    }

    /// Selecting a link always lands here.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }
}

/// Full-screen image preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PreviewState {
    #[default]
    Closed,
    Open,
}

impl PreviewState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn open(&mut self) {
        *self = Self::Open;
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }
}

/// One-shot visibility latch for scroll-reveal content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    /// Not yet seen; rendered transparent and offset.
    #[default]
    Pending,
    /// Seen at least once; stays visible.
    Shown,
}

impl RevealState {
    pub fn is_shown(self) -> bool {
        self == Self::Shown
    }

    /// Feed an intersection change. Returns `true` on the transition to
    /// [`RevealState::Shown`].
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && *self == Self::Pending {
            *self = Self::Shown;
            true
        } else {
            false
        }
    }
}

/// Whether the page is scrolled past the navbar's compact threshold.
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggle_twice_returns_closed() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert_eq!(menu, MenuState::Closed);
    }

    #[test]
    fn test_menu_link_closes() {
        let mut menu = MenuState::Open;
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_preview_transitions() {
        let mut preview = PreviewState::default();
        assert!(!preview.is_open());
        preview.open();
        assert!(preview.is_open());
        preview.open();
        assert!(preview.is_open());
        preview.close();
        assert_eq!(preview, PreviewState::Closed);
    }

    #[test]
    fn test_reveal_latches() {
        let mut reveal = RevealState::default();
        assert!(!reveal.observe(false));
        assert!(!reveal.is_shown());
        assert!(reveal.observe(true));
        assert!(reveal.is_shown());
        // leaving the viewport never hides it again
        assert!(!reveal.observe(false));
        assert!(reveal.is_shown());
        assert!(!reveal.observe(true));
    }

    #[test]
    fn test_is_scrolled_threshold() {
        assert!(!is_scrolled(0.0, 50.0));
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(50.5, 50.0));
    }
}
