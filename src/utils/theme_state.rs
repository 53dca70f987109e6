use std::fmt::{ Display, Formatter };
use std::str::FromStr;
use serde::{ Deserialize, Serialize };
use crate::error::ThemeError;
use crate::utils::theme_preference::ThemePreference;

/// The two visual modes the page can render in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeFlag {
    #[default]
    Light,
    Dark,
}

impl ThemeFlag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    /// Decodes a value read back from the preference store.
    ///
    /// An empty value counts as absent. Any other value that isn't `dark`
    /// is light, so a hand-edited or stale entry never flips the page dark.
    pub fn from_stored(value: &str) -> Option<Self> {
        if value.is_empty() {
            return None;
        }
        Some(Self::from_dark(value == Self::Dark.as_str()))
    }
}

impl Display for ThemeFlag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeFlag {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(ThemeError::Unrecognized(s.to_string())),
        }
    }
}

/// Theme state shared with every view through context.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ThemeState {
    pub flag: ThemeFlag,
}

impl ThemeState {
    pub fn resolve(preference: &ThemePreference) -> Self {
        Self { flag: preference.resolve() }
    }

    pub fn is_dark(&self) -> bool {
        self.flag.is_dark()
    }

    /// Class applied to the app root so `dark:` utility variants kick in.
    pub fn root_class(&self) -> &'static str {
        if self.is_dark() { "dark" } else { "" }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
    }

    /// Flips the flag and records the new choice. Returns the flag now displayed.
    pub fn toggle(&mut self, preference: &ThemePreference) -> ThemeFlag {
        self.flag = self.flag.toggled();
        preference.set(self.flag);
        self.flag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored_treats_unknown_values_as_light() {
        assert_eq!(ThemeFlag::from_stored("dark"), Some(ThemeFlag::Dark));
        assert_eq!(ThemeFlag::from_stored("light"), Some(ThemeFlag::Light));
        assert_eq!(ThemeFlag::from_stored("solarized"), Some(ThemeFlag::Light));
        assert_eq!(ThemeFlag::from_stored(""), None);
    }

    #[test]
    fn test_from_str_is_strict() {
        assert_eq!(" Dark ".parse::<ThemeFlag>(), Ok(ThemeFlag::Dark));
        assert_eq!("light".parse::<ThemeFlag>(), Ok(ThemeFlag::Light));
        assert_eq!(
            "dim".parse::<ThemeFlag>(),
            Err(ThemeError::Unrecognized("dim".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_storage_literals() {
        assert_eq!(serde_json::to_string(&ThemeFlag::Dark).unwrap(), "\"dark\"");
        let flag: ThemeFlag = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(flag, ThemeFlag::Light);
    }

    #[test]
    fn test_root_class_follows_flag() {
        assert_eq!(ThemeState { flag: ThemeFlag::Dark }.root_class(), "dark");
        assert_eq!(ThemeState::default().root_class(), "");
    }
}
