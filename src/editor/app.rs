//! Editor window implemented with egui/eframe

use anyhow::{Result, anyhow};
use eframe::{NativeOptions, egui};
use tracing::info;

use super::state::EditorState;
use crate::config::{ConfigStore, DisplayConfig};
use crate::constants::editor::*;
use crate::display::{self, DisplayStyle};

/// Button row actions, applied after the controls panel is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditorAction {
    None,
    Save,
    SaveAndQuit,
}

struct EditorApp {
    state: EditorState,
}

impl EditorApp {
    fn new(cc: &eframe::CreationContext<'_>, state: EditorState) -> Self {
        info!(path = ?state.store.path(), "Initializing editor");

        let mut visuals = egui::Visuals::light();
        visuals.panel_fill = PANEL_GRAY;
        visuals.window_fill = PANEL_GRAY;
        cc.egui_ctx.set_visuals(visuals);

        Self { state }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = &mut self.state;

        egui::TopBottomPanel::top("editor_header")
            .frame(
                egui::Frame::new()
                    .fill(TITLE_BLUE)
                    .inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(WINDOW_TITLE)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if state.has_unsaved_changes() {
                            ui.label(
                                egui::RichText::new("Unsaved changes")
                                    .color(egui::Color32::WHITE)
                                    .small(),
                            );
                        }
                    });
                });
            });

        let mut action = EditorAction::None;

        egui::SidePanel::left("editor_controls")
            .resizable(false)
            .exact_width(CONTROLS_WIDTH)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if controls_ui(ui, state, &mut action) {
                        state.status_message = None;
                    }
                });
            });

        match action {
            EditorAction::Save => {
                state.save();
            }
            EditorAction::SaveAndQuit => {
                if state.save() {
                    info!("Saved, closing editor");
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            }
            EditorAction::None => {}
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(egui::RichText::new("Preview").strong());
            ui.add_space(ITEM_SPACING);

            egui::Frame::new()
                .stroke(egui::Stroke::new(2.0, BORDER_DARK))
                .show(ui, |ui| {
                    let layout = display::render(&state.preview_config());
                    display::painter::paint(ui, &layout, PREVIEW_SCALE, PREVIEW_MARGIN);
                });
        });

        validation_dialog(ctx, state);
    }
}

/// Draws every editable field and the button row; returns true if any
/// field changed this frame
fn controls_ui(ui: &mut egui::Ui, state: &mut EditorState, action: &mut EditorAction) -> bool {
    let mut changed = false;
    let form = &mut state.form;

    changed |= text_field(ui, "Face Text", &mut form.face_text);
    changed |= text_field(ui, "Face Size", &mut form.face_size);
    changed |= text_field(ui, "Text Size", &mut form.text_size);
    changed |= text_field(ui, "Stop Code", &mut form.stop_code);
    changed |= text_field(ui, "Percentage", &mut form.percentage);

    ui.horizontal(|ui| {
        changed |= text_field(ui, "Background Color", &mut form.bg_color);
        if let Some(color) = crate::common::color::hex_to_color32(&form.bg_color) {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 0.0, color);
        }
    });

    ui.add_space(SECTION_SPACING);
    ui.label(egui::RichText::new("System Settings").strong());
    changed |= ui
        .checkbox(&mut form.enable_shutdown, "Enable Shutdown")
        .changed();
    ui.label(
        egui::RichText::new("Restarts this computer a few seconds after the screen appears")
            .small()
            .weak(),
    );

    ui.add_space(SECTION_SPACING);
    ui.label(egui::RichText::new("BSOD Style").strong());
    for style in [DisplayStyle::Modern, DisplayStyle::Classic] {
        changed |= ui.radio_value(&mut form.style, style, style.label()).changed();
    }

    changed |= text_field(ui, "Classic BSOD Font", &mut form.classic_font);

    ui.add_space(SECTION_SPACING);
    ui.horizontal(|ui| {
        if ui.button("Save").clicked() {
            *action = EditorAction::Save;
        }
        if ui.button("Save & Quit").clicked() {
            *action = EditorAction::SaveAndQuit;
        }
    });

    if let Some(message) = &state.status_message {
        ui.add_space(ITEM_SPACING);
        ui.colored_label(message.color, &message.text);
    }

    changed
}

fn text_field(ui: &mut egui::Ui, label: &str, value: &mut String) -> bool {
    ui.vertical(|ui| {
        ui.label(label);
        ui.add(egui::TextEdit::singleline(value).desired_width(CONTROLS_WIDTH - 40.0))
            .changed()
    })
    .inner
}

/// Modal listing the fields that blocked the last save
fn validation_dialog(ctx: &egui::Context, state: &mut EditorState) {
    if state.validation_errors.is_empty() {
        return;
    }

    let mut dismissed = false;
    egui::Window::new("Invalid Input")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            for err in &state.validation_errors {
                ui.colored_label(COLOR_ERROR, err.to_string());
            }
            ui.add_space(ITEM_SPACING);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    if dismissed {
        state.validation_errors.clear();
    }
}

/// Open the editor window and block until it closes
pub fn run(store: ConfigStore, config: DisplayConfig) -> Result<()> {
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
        .with_title(format!("{WINDOW_TITLE} - v{}", env!("CARGO_PKG_VERSION")));

    let options = NativeOptions {
        viewport,
        ..Default::default()
    };

    let state = EditorState::new(store, config);

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(EditorApp::new(cc, state)))),
    )
    .map_err(|err| anyhow!("Failed to launch editor window: {err}"))
}
