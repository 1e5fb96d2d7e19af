use serde::{Deserialize, Serialize};

/// Light or dark presentation. Starts out light and only changes through
/// [`Theme::toggle`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Flip between light and dark.
    pub fn toggle(&mut self) {
        *self = self.toggled();
        tracing::debug!("Theme set to {}", self.class());
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Class applied to the root element.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Label for the toggle button: names the theme it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert!(!Theme::default().is_dark());
    }

    #[test]
    fn test_toggle_is_an_involution() {
        for start in [Theme::Light, Theme::Dark] {
            let mut theme = start;
            theme.toggle();
            assert_ne!(theme, start);
            theme.toggle();
            assert_eq!(theme, start);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Theme::Light.toggle_label(), "Dark Mode");
        assert_eq!(Theme::Dark.toggle_label(), "Light Mode");
        assert_eq!(Theme::Dark.class(), "dark");
    }
}
