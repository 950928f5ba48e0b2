//! Soft keyboard control

/// Requested soft keyboard layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum KeyboardMode {
    /// No keyboard
    #[default]
    Hidden,
    /// Keyboard for a portrait screen
    Portrait,
    /// Keyboard for a landscape screen
    Landscape,
}

/// Platform toggle a mode maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyboardToggle {
    /// Hide unless the user opened it explicitly
    HideImplicit,
    /// Show even without a focused text field
    ShowForced,
}

impl KeyboardMode {
    /// The platform toggle for this mode
    pub const fn toggle(self) -> KeyboardToggle {
        match self {
            Self::Hidden => KeyboardToggle::HideImplicit,
            Self::Portrait | Self::Landscape => KeyboardToggle::ShowForced,
        }
    }
}

/// Soft keyboard service
pub trait SoftKeyboard {
    /// Show or hide the keyboard
    fn set_mode(&mut self, mode: KeyboardMode);

    /// Last requested mode
    fn mode(&self) -> KeyboardMode;
}

/// Keyboard for hosts without one; remembers and logs requests
#[derive(Debug, Default)]
pub struct HeadlessKeyboard {
    mode: KeyboardMode,
}

impl SoftKeyboard for HeadlessKeyboard {
    fn set_mode(&mut self, mode: KeyboardMode) {
        log::debug!("Soft keyboard {:?} ({:?})", mode, mode.toggle());
        self.mode = mode;
    }

    fn mode(&self) -> KeyboardMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_toggles() {
        assert_eq!(KeyboardMode::Hidden.toggle(), KeyboardToggle::HideImplicit);
        assert_eq!(KeyboardMode::Portrait.toggle(), KeyboardToggle::ShowForced);
        assert_eq!(KeyboardMode::Landscape.toggle(), KeyboardToggle::ShowForced);
    }

    #[test]
    fn test_headless_keyboard_remembers_mode() {
        let mut keyboard = HeadlessKeyboard::default();
        keyboard.set_mode(KeyboardMode::Landscape);
        assert_eq!(keyboard.mode(), KeyboardMode::Landscape);
    }
}
