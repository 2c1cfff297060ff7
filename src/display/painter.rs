//! egui backend for `DisplayLayout`

use eframe::egui;

use super::layout::{DisplayLayout, DisplayStyle, TextBlock};
use crate::constants::layout::FACE_GAP;

/// Paint `layout` into `ui`, filling the available space with the background
///
/// `scale` shrinks font sizes and spacing for the editor preview; the
/// viewer paints at 1.0.
pub fn paint(ui: &mut egui::Ui, layout: &DisplayLayout, scale: f32, margin: i8) {
    egui::Frame::new()
        .fill(layout.background)
        .inner_margin(egui::Margin::same(margin))
        .show(ui, |ui| {
            ui.set_min_size(ui.available_size());
            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                if let Some(face) = &layout.face {
                    ui.label(rich_text(face, layout, scale));
                    ui.add_space(FACE_GAP * scale);
                }
                ui.label(rich_text(&layout.body, layout, scale));
            });
        });
}

fn rich_text(block: &TextBlock, layout: &DisplayLayout, scale: f32) -> egui::RichText {
    // Named faces are not loaded; map each style onto the closest built-in family
    let family = match layout.style {
        DisplayStyle::Modern => egui::FontFamily::Proportional,
        DisplayStyle::Classic => egui::FontFamily::Monospace,
    };

    let text = egui::RichText::new(&block.text)
        .size((block.size as f32 * scale).max(1.0))
        .family(family)
        .color(layout.text_color());

    if block.bold { text.strong() } else { text }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use crate::display::render;

    fn paint_headless(layout: &DisplayLayout, scale: f32) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| paint(ui, layout, scale, 80));
        });
    }

    #[test]
    fn test_paint_huge_sizes_from_file() {
        for doc in [
            r#"{"face_size": 5000}"#,
            r#"{"face_size": 20000, "text_size": 20000}"#,
            r#"{"face_size": 4294967295}"#,
        ] {
            let config: DisplayConfig = serde_json::from_str(doc).unwrap();
            paint_headless(&render(&config), 1.0);
        }
    }

    #[test]
    fn test_paint_both_styles() {
        let classic = DisplayConfig {
            is_old: true,
            ..DisplayConfig::default()
        };
        paint_headless(&render(&DisplayConfig::default()), 1.0);
        paint_headless(&render(&classic), 0.5);
    }
}
