//! Mobile navigation menu state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Class toggled on the navigation list while the mobile menu is open.
pub const OPEN_CLASS: &str = "active";

/// Icon glyph shown on the toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Hamburger icon, shown while closed.
    Bars,
    /// Close icon, shown while open.
    Times,
}

impl Glyph {
    /// Icon class for this glyph.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Bars => "fa-bars",
            Self::Times => "fa-times",
        }
    }

    /// Icon class for the other glyph, which must be removed when this one is shown.
    #[must_use]
    pub fn other_class(self) -> &'static str {
        match self {
            Self::Bars => Self::Times.class(),
            Self::Times => Self::Bars.class(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Flip the menu and return the glyph to display.
    pub fn toggle(&mut self) -> Glyph {
        self.open = !self.open;
        self.glyph()
    }

    /// Close the menu (a navigation link was followed).
    pub fn close(&mut self) -> Glyph {
        self.open = false;
        self.glyph()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn glyph(&self) -> Glyph {
        if self.open { Glyph::Times } else { Glyph::Bars }
    }
}
