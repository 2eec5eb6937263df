//! Toast notification system for brief feedback messages.
//!
//! Toasts are non-blocking notifications that appear briefly and fade away.
//! They confirm bookings and moves.

use super::status_bar::STATUS_BAR_HEIGHT;
use egui::{Color32, Context, Pos2, RichText};
use std::time::{Duration, Instant};

/// Types of toast notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    /// Success message (green)
    Success,
    /// Informational message (blue)
    Info,
}

impl ToastLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Info => "ℹ",
        }
    }

    pub fn background_color(&self, is_dark_theme: bool) -> Color32 {
        match (self, is_dark_theme) {
            (ToastLevel::Success, true) => Color32::from_rgb(30, 70, 40),
            (ToastLevel::Info, true) => Color32::from_rgb(30, 50, 80),
            (ToastLevel::Success, false) => Color32::from_rgb(220, 255, 220),
            (ToastLevel::Info, false) => Color32::from_rgb(220, 235, 255),
        }
    }

    pub fn text_color(&self, is_dark_theme: bool) -> Color32 {
        match (self, is_dark_theme) {
            (ToastLevel::Success, true) => Color32::from_rgb(100, 220, 120),
            (ToastLevel::Info, true) => Color32::from_rgb(100, 180, 255),
            (ToastLevel::Success, false) => Color32::from_rgb(30, 120, 50),
            (ToastLevel::Info, false) => Color32::from_rgb(30, 80, 150),
        }
    }
}

/// A single toast notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel, duration: Duration) -> Self {
        Self {
            message: message.into(),
            level,
            created_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Opacity for the final half second fade out
    pub fn opacity(&self) -> f32 {
        let elapsed = self.created_at.elapsed();
        let fade_start = self.duration.saturating_sub(Duration::from_millis(500));

        if elapsed >= self.duration {
            0.0
        } else if elapsed >= fade_start {
            let fade_progress = (self.duration - elapsed).as_secs_f32() / 0.5;
            fade_progress.clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

/// Manager for toast notifications
#[derive(Debug)]
pub struct ToastManager {
    toasts: Vec<Toast>,
    duration: Duration,
}

impl ToastManager {
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            duration,
        }
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.toasts
            .push(Toast::new(message, ToastLevel::Success, self.duration));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.toasts
            .push(Toast::new(message, ToastLevel::Info, self.duration));
    }

    /// Remove expired toasts
    pub fn cleanup(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    /// Render all active toasts from the bottom-right corner, stacking upward
    pub fn render(&mut self, ctx: &Context, is_dark_theme: bool) {
        self.cleanup();

        if self.toasts.is_empty() {
            return;
        }

        ctx.request_repaint();

        let screen_rect = ctx.screen_rect();
        let toast_width = 320.0;
        let toast_height = 40.0;
        let margin = 10.0;
        let spacing = 5.0;

        for (i, toast) in self.toasts.iter().enumerate() {
            let opacity = toast.opacity();
            if opacity <= 0.0 {
                continue;
            }

            let pos = toast_position(screen_rect, i, toast_width, toast_height, margin, spacing);

            egui::Area::new(egui::Id::new(("toast", i)))
                .fixed_pos(pos)
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    let bg = toast.level.background_color(is_dark_theme);
                    let text = toast.level.text_color(is_dark_theme);
                    let bg = Color32::from_rgba_unmultiplied(
                        bg.r(),
                        bg.g(),
                        bg.b(),
                        (230.0 * opacity) as u8,
                    );
                    let text = Color32::from_rgba_unmultiplied(
                        text.r(),
                        text.g(),
                        text.b(),
                        (255.0 * opacity) as u8,
                    );

                    egui::Frame::none()
                        .fill(bg)
                        .rounding(6.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .stroke(egui::Stroke::new(1.0, text.gamma_multiply(0.3)))
                        .show(ui, |ui| {
                            ui.set_min_width(toast_width - 24.0);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(toast.level.icon()).color(text).strong());
                                ui.label(RichText::new(&toast.message).color(text));
                            });
                        });
                });
        }
    }
}

/// Top-left corner of the `index`th toast, stacked upward from above the status bar
fn toast_position(
    screen_rect: egui::Rect,
    index: usize,
    width: f32,
    height: f32,
    margin: f32,
    spacing: f32,
) -> Pos2 {
    let stack_offset = index as f32 * (height + spacing);
    Pos2::new(
        screen_rect.right() - width - margin,
        screen_rect.bottom() - STATUS_BAR_HEIGHT - margin - height - stack_offset,
    )
}
