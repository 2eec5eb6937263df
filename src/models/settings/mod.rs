// Settings module
// User interface preferences. Schedule data is never part of the settings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;
pub const MAX_TOAST_SECONDS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
    /// Follow the operating system preference
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemePreference,
    /// Mark the row containing the current wall-clock time
    pub show_current_time: bool,
    pub window_width: f32,
    pub window_height: f32,
    /// How long confirmation toasts stay on screen
    pub toast_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::Light,
            show_current_time: true,
            window_width: 1100.0,
            window_height: 800.0,
            toast_seconds: 3,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.window_width >= MIN_WINDOW_WIDTH && self.window_height >= MIN_WINDOW_HEIGHT) {
            return Err(SettingsError::WindowTooSmall {
                width: self.window_width,
                height: self.window_height,
            });
        }

        if self.toast_seconds == 0 || self.toast_seconds > MAX_TOAST_SECONDS {
            return Err(SettingsError::ToastDuration(self.toast_seconds));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("window size {width}x{height} is below the {MIN_WINDOW_WIDTH}x{MIN_WINDOW_HEIGHT} minimum")]
    WindowTooSmall { width: f32, height: f32 },
    #[error("toast duration must be between 1 and {MAX_TOAST_SECONDS} seconds, got {0}")]
    ToastDuration(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.theme, ThemePreference::Light);
        assert!(settings.show_current_time);
    }

    #[test]
    fn test_small_window_rejected() {
        let settings = Settings {
            window_width: 320.0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::WindowTooSmall { .. })
        ));
    }

    #[test]
    fn test_nan_window_rejected() {
        let settings = Settings {
            window_height: f32::NAN,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_toast_duration_bounds() {
        let zero = Settings {
            toast_seconds: 0,
            ..Settings::default()
        };
        assert_eq!(zero.validate(), Err(SettingsError::ToastDuration(0)));

        let long = Settings {
            toast_seconds: 31,
            ..Settings::default()
        };
        assert_eq!(long.validate(), Err(SettingsError::ToastDuration(31)));
    }
}
