// ui.rs - Controls and grid painter for the playback window

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};

use conway::UpdateMode;

use crate::{seed_names, GameOfLife};

const GRID_PIXELS: f32 = 760.0;

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
                    if self.is_running {
                        self.is_running = false;
                    } else {
                        self.resume();
                    }
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                    self.update_generation();
                }

                if ui.button("⟲ Reset").clicked() {
                    self.is_running = false;
                    self.reset();
                }

                ui.separator();

                // Seed dropdown
                ui.label("Seed:");
                let selected = seed_names().nth(self.selected_seed).unwrap_or("Quadrant");
                egui::ComboBox::from_id_source("seed_selector")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for (i, name) in seed_names().enumerate() {
                            ui.selectable_value(&mut self.selected_seed, i, name);
                        }
                    });

                ui.separator();

                ui.label(format!("Generation: {}", self.universe().generation()));
            });

            ui.separator();

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

            ui.horizontal(|ui| {
                let mut sequential = self.universe().mode() == UpdateMode::Sequential;
                if ui.checkbox(&mut sequential, "In-place (sequential) update").changed() {
                    self.set_mode(if sequential { UpdateMode::Sequential } else { UpdateMode::Synchronous });
                }
                ui.checkbox(&mut self.use_row_tasks, "Row tasks");
            });

            if let Some(status) = &self.status {
                ui.colored_label(Color32::YELLOW, status);
            }

            ui.separator();

            // Draw the grid
            let universe = self.universe();
            let (width, height) = (universe.width(), universe.height());
            let spacing = 0.5;
            let box_size = (GRID_PIXELS / width.max(height) as f32 - spacing).clamp(1.0, 15.0);

            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(
                (box_size + spacing) * width as f32 - spacing,
                (box_size + spacing) * height as f32 - spacing,
            );

            let (_response, painter) = ui.allocate_painter(total_size, egui::Sense::hover());

            // Fill background
            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::BLACK,
            );

            for cell in universe.cells() {
                let x = start_pos.x + cell.y() as f32 * (box_size + spacing);
                let y = start_pos.y + cell.x() as f32 * (box_size + spacing);

                let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                let cell_color = if cell.is_alive() { self.live_color } else { self.dead_color };
                painter.rect_filled(rect, 1.0, cell_color);

                // Subtle border, only when cells are big enough to show it
                if box_size >= 6.0 {
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                }
            }

            ui.separator();

            let total = width * height;
            let live_cells = universe.population();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
                ui.label(format!("Changed last tick: {}", universe.cells_updated()));
            });
        });

        // Request repaint if running to keep animation smooth
        if self.is_running {
            ctx.request_repaint();
        }
    }
}
