// ui.rs - egui front end: controls, board painting and click-to-toggle

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use life::patterns;
use std::time::{Duration, Instant};

use crate::{GRID_SIZE, GameOfLife, Halt};

const BOX_SIZE: f32 = 15.0;
const SPACING: f32 = 0.5;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.halted = None;
                        self.last_update = Instant::now();
                    }
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                    self.update_generation();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.apply_random_pattern();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.simulation().step()));
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            match self.halted {
                Some(Halt::Extinct) => ui.label("Every cell has died."),
                Some(Halt::Cycle) => ui.label("The board is repeating itself."),
                None => ui.label("Click cells to toggle them while paused. Use Start/Pause to run."),
            };

            ui.separator();

            let start_pos = ui.cursor().min;
            let pitch = BOX_SIZE + SPACING;
            let total_size = Vec2::splat(pitch * GRID_SIZE as f32 - SPACING);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            let cell_rect = |x: usize, y: usize| {
                Rect::from_min_size(
                    egui::pos2(start_pos.x + x as f32 * pitch, start_pos.y + y as f32 * pitch),
                    Vec2::splat(BOX_SIZE),
                )
            };

            // Fill background
            painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::BLACK);

            for y in 0..GRID_SIZE {
                for x in 0..GRID_SIZE {
                    let rect = cell_rect(x, y);
                    painter.rect_filled(rect, 1.0, self.dead_color);
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                }
            }

            self.simulation().for_each_live_cell(|x, y| {
                painter.rect_filled(cell_rect(x, y), 1.0, self.live_color);
            });

            // Handle clicking (only when not running)
            if !self.is_running && response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let offset = pos - start_pos;
                    if offset.x >= 0.0 && offset.y >= 0.0 {
                        let x = (offset.x / pitch) as usize;
                        let y = (offset.y / pitch) as usize;
                        if cell_rect(x, y).contains(pos) {
                            self.toggle_cell(x, y);
                        }
                    }
                }
            }

            ui.separator();

            // Statistics
            let total = GRID_SIZE * GRID_SIZE;
            let live_cells = self.simulation().population();

            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            });
        });

        // Keep repainting while running so the cadence holds
        if self.is_running {
            ctx.request_repaint();
        }
    }
}
