/// Display mode for the page. Dark is the designed default; Light only
/// swaps the base background tokens on the page root and the navbar, the
/// decorative regions keep their dark palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// The flipped mode. The toggle has no guard conditions and no other
    /// transitions, so this is the whole state machine.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Icon glyph shown on the navbar toggle button.
    pub fn glyph(self) -> &'static str {
        match self {
            ThemeMode::Dark => "fa-moon",
            ThemeMode::Light => "fa-sun",
        }
    }

    /// Base background token for the page root.
    pub fn page_class(self) -> &'static str {
        match self {
            ThemeMode::Dark => "bg-navy-900",
            ThemeMode::Light => "bg-gray-100",
        }
    }

    /// Base background token for the fixed navbar pill.
    pub fn nav_class(self) -> &'static str {
        match self {
            ThemeMode::Dark => "bg-navy-900/80",
            ThemeMode::Light => "bg-gray-100/80",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn test_double_toggle_is_identity() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn test_toggle_glyphs() {
        assert_eq!(ThemeMode::Dark.glyph(), "fa-moon");
        assert_eq!(ThemeMode::Light.glyph(), "fa-sun");
    }

    #[test]
    fn test_fresh_load_toggle_scenario() {
        // Fresh load defaults to dark on the navy base token
        let mode = ThemeMode::default();
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(mode.page_class(), "bg-navy-900");

        // First click switches to light and the sun glyph
        let mode = mode.toggled();
        assert_eq!(mode, ThemeMode::Light);
        assert_eq!(mode.glyph(), "fa-sun");
        assert_eq!(mode.page_class(), "bg-gray-100");

        // Second click restores dark and the moon glyph
        let mode = mode.toggled();
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(mode.glyph(), "fa-moon");
    }
}
