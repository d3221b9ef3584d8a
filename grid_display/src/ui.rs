// ui.rs - Renders engine snapshots and forwards clicks and edits as intents

use conway::Controller;
use eframe::egui;
use egui::{Color32, Pos2, Rect, Vec2};
use std::time::Instant;

const CELL_SIZE: f32 = 5.0;
const SPACING: f32 = 1.0;

pub struct GridApp {
    controller: Controller,
    interval_text: String,  // Text field contents, kept in sync with the engine's buffer
    live_color: Color32,
    dead_color: Color32,
}

impl Default for GridApp {
    fn default() -> Self {
        let controller = Controller::default();
        let interval_text = controller.snapshot().interval_text;
        Self {
            controller,
            interval_text,
            live_color: Color32::from_rgb(0, 128, 0),
            dead_color: Color32::WHITE,
        }
    }
}

impl eframe::App for GridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.controller.poll(now);

        let snapshot = self.controller.snapshot();
        let grid = &snapshot.grid;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Draw the grid
            let pitch = CELL_SIZE + SPACING;
            let total_size = Vec2::new(
                pitch * grid.cols() as f32 - SPACING,
                pitch * grid.rows() as f32 - SPACING,
            );

            egui::ScrollArea::both().max_height(520.0).show(ui, |ui| {
                let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
                let origin = response.rect.min;

                painter.rect_filled(response.rect, 0.0, Color32::BLACK);

                for (row, cells) in grid.rows_iter().enumerate() {
                    for (col, &alive) in cells.iter().enumerate() {
                        let min = origin + Vec2::new(col as f32 * pitch, row as f32 * pitch);
                        let rect = Rect::from_min_size(min, Vec2::splat(CELL_SIZE));
                        let color = if alive { self.live_color } else { self.dead_color };
                        painter.rect_filled(rect, 0.0, color);
                    }
                }

                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        if let Some((row, col)) = cell_at(pos, origin, pitch, grid.rows(), grid.cols()) {
                            self.controller.toggle_cell(row, col);
                        }
                    }
                }
            });

            ui.separator();

            // Controls
            ui.horizontal(|ui| {
                if ui.button("Reset").clicked() {
                    self.controller.reset(now);
                }

                let button_text = if self.controller.is_running() { "Stop" } else { "Start" };
                if ui.button(button_text).clicked() {
                    self.controller.toggle_running(now);
                }

                ui.separator();

                ui.label(format!("Current generation: {}", snapshot.display_generation()));
            });

            ui.horizontal(|ui| {
                ui.label("Interval (milliseconds):");
                let edit = ui.add(egui::TextEdit::singleline(&mut self.interval_text).desired_width(80.0));
                if edit.changed() && self.controller.set_configured_interval(&self.interval_text).is_err() {
                    // Non-numeric text is dropped, restore what the engine holds
                    self.interval_text = self.controller.snapshot().interval_text;
                }

                if ui.button("Set").clicked() {
                    // Failures show up below through last_error
                    let _ = self.controller.commit_interval(now);
                }

                ui.label(format!("Active: {}", snapshot.active_interval));
            });

            if let Some(error) = &snapshot.last_error {
                ui.colored_label(Color32::RED, error);
            }

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);

                ui.separator();

                let live = grid.live_count();
                ui.label(format!("Live cells: {}", live));
                ui.label(format!("Dead cells: {}", grid.cell_count() - live));
                ui.label(format!("Population: {:.1}%", grid.population()));
            });
        });

        // Wake up for the next generation even without input
        if let Some(wait) = self.controller.time_until_next_tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}

/// Maps a pointer position to the cell under it; gaps between cells miss.
fn cell_at(pos: Pos2, origin: Pos2, pitch: f32, rows: usize, cols: usize) -> Option<(usize, usize)> {
    let offset = pos - origin;
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let (col, row) = ((offset.x / pitch) as usize, (offset.y / pitch) as usize);
    let inside_cell = offset.x - col as f32 * pitch <= CELL_SIZE && offset.y - row as f32 * pitch <= CELL_SIZE;
    (row < rows && col < cols && inside_cell).then_some((row, col))
}
