//! Theme module for the scheduler window
//!
//! Defines the SchedulerTheme structure and resolves the configured theme
//! preference, including the operating system preference.

use egui::Color32;

use crate::models::settings::ThemePreference;

/// Colors used by the grid and the surrounding window
#[derive(Debug, Clone, PartialEq)]
pub struct SchedulerTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Header row background
    pub header_background: Color32,

    /// Time label column background
    pub time_column_background: Color32,

    /// Free slot background
    pub cell_background: Color32,

    /// Overlay drawn on a free slot under the pointer
    pub cell_hover: Color32,

    /// Line above each full hour
    pub hour_line: Color32,

    /// Line between quarter-hour rows
    pub slot_line: Color32,

    /// Primary text color (headings, labels)
    pub text_primary: Color32,

    /// Secondary text color (time labels)
    pub text_secondary: Color32,

    /// Drop target highlight
    pub accent: Color32,
}

impl SchedulerTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(243, 244, 246),
            header_background: Color32::from_rgb(243, 244, 246),
            time_column_background: Color32::from_rgb(255, 255, 255),
            cell_background: Color32::from_rgb(255, 255, 255),
            cell_hover: Color32::from_rgb(229, 231, 235),
            hour_line: Color32::from_rgb(156, 163, 175),
            slot_line: Color32::from_rgb(209, 213, 219),
            text_primary: Color32::from_rgb(17, 17, 17),
            text_secondary: Color32::from_rgb(75, 85, 99),
            accent: Color32::from_rgb(100, 150, 255),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            header_background: Color32::from_rgb(35, 35, 38),
            time_column_background: Color32::from_rgb(40, 40, 40),
            cell_background: Color32::from_rgb(40, 40, 40),
            cell_hover: Color32::from_rgb(58, 58, 62),
            hour_line: Color32::from_rgb(90, 90, 90),
            slot_line: Color32::from_rgb(60, 60, 60),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            accent: Color32::from_rgb(100, 150, 255),
        }
    }

    /// Resolve a preference to a concrete theme.
    /// `System` asks the OS and falls back to light when it has no opinion.
    pub fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
            ThemePreference::System => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.panel_fill = self.app_background;
        visuals.widgets.hovered.bg_fill = self.cell_hover;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_theme() {
        let theme = SchedulerTheme::light();
        assert!(!theme.is_dark);
        assert_eq!(theme.cell_background, Color32::WHITE);
    }

    #[test]
    fn test_dark_theme() {
        let theme = SchedulerTheme::dark();
        assert!(theme.is_dark);
        assert_eq!(theme.app_background, Color32::from_rgb(30, 30, 30));
    }

    #[test]
    fn test_explicit_preferences() {
        assert_eq!(SchedulerTheme::for_preference(ThemePreference::Light), SchedulerTheme::light());
        assert_eq!(SchedulerTheme::for_preference(ThemePreference::Dark), SchedulerTheme::dark());
    }
}
