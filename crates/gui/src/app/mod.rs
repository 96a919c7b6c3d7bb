//! Main application module

mod keyboard;
mod menus;
mod styles;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{status_bar, toolbar};
use crate::viewport::ViewportPanel;

/// Longest frame delta fed to the animation, seconds. Keeps a stall (window
/// drag, suspend) from jumping a slice most of the way through its turn.
const MAX_FRAME_DT: f32 = 0.1;

/// Main application
pub struct CubeApp {
    state: AppState,
    viewport: ViewportPanel,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
}

impl CubeApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state = AppState::default();

        // Apply initial styles with font size from settings
        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        let mut viewport = ViewportPanel::new();

        // Initialize GL renderer if glow context is available
        if let Some(gl) = cc.gl.as_ref() {
            viewport.init_gl(gl);
        }

        let last_font_size = state.settings.ui.font_size;

        Self {
            state,
            viewport,
            last_font_size,
        }
    }
}

impl eframe::App for CubeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size if changed
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        // Advance the slice animation before anything reads puzzle state
        let dt = ctx.input(|i| i.stable_dt).min(MAX_FRAME_DT);
        self.state.puzzle.update(dt);
        if self.state.puzzle.is_rotating() {
            ctx.request_repaint();
        }

        keyboard::handle_keyboard(ctx, &mut self.state, &mut self.viewport);

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::file_menu(ui, &mut self.state);
                menus::view_menu(ui, &mut self.state, &mut self.viewport);
                menus::settings_menu(ui, &mut self.state);
            });
        });

        // ── Settings window ──────────────────────────────────
        menus::settings_window(ctx, &mut self.state);

        // ── Toolbar ───────────────────────────────────────────
        if self.state.panels.toolbar {
            egui::TopBottomPanel::top("toolbar")
                .frame(
                    egui::Frame::side_top_panel(&ctx.style())
                        .inner_margin(egui::Margin::symmetric(8, 4)),
                )
                .show(ctx, |ui| {
                    toolbar::show(ui, &mut self.state);
                });
        }

        // ── Status bar ───────────────────────────────────────
        if self.state.panels.status_bar {
            egui::TopBottomPanel::bottom("status_bar")
                .exact_height(22.0)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style())
                        .inner_margin(egui::Margin::symmetric(8, 2)),
                )
                .show(ctx, |ui| {
                    status_bar::show(ui, &self.state);
                });
        }

        // ── Central panel: 3D viewport ───────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.state);
            });
    }

    fn on_exit(&mut self, _gl: Option<&glow::Context>) {
        self.state.settings.save();
    }
}
