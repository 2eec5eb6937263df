use crate::models::assignment::ColorTag;
use crate::ui_egui::theme::SchedulerTheme;
use egui::Color32;

/// On-screen color of an assignment tag
pub fn resolve_color_tag(tag: ColorTag) -> Color32 {
    match tag {
        ColorTag::Green => Color32::from_rgb(34, 197, 94),
        ColorTag::Blue => Color32::from_rgb(59, 130, 246),
        ColorTag::Red => Color32::from_rgb(239, 68, 68),
        ColorTag::Yellow => Color32::from_rgb(234, 179, 8),
        ColorTag::Purple => Color32::from_rgb(168, 85, 247),
    }
}

pub(crate) fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[derive(Clone, Copy)]
pub struct GridPalette {
    pub header_bg: Color32,
    pub header_text: Color32,
    pub time_bg: Color32,
    pub time_text: Color32,
    pub cell_bg: Color32,
    pub hover_overlay: Color32,
    pub hour_line: Color32,
    pub slot_line: Color32,
    pub divider: Color32,
    pub drop_fill: Color32,
    pub drop_stroke: Color32,
    pub block_text: Color32,
    pub now_line: Color32,
}

impl GridPalette {
    pub fn from_theme(theme: &SchedulerTheme) -> Self {
        Self {
            header_bg: theme.header_background,
            header_text: theme.text_primary,
            time_bg: theme.time_column_background,
            time_text: theme.text_secondary,
            cell_bg: theme.cell_background,
            hover_overlay: theme.cell_hover,
            hour_line: theme.hour_line,
            slot_line: theme.slot_line,
            divider: with_alpha(theme.hour_line, 220),
            drop_fill: with_alpha(theme.accent, 35),
            drop_stroke: theme.accent,
            block_text: Color32::WHITE,
            now_line: Color32::from_rgb(255, 100, 100),
        }
    }
}
