// ui.rs - Input panel, rule buttons and the waterfall itself

use eframe::egui;
use egui::{Color32, Painter, Rect, Sense, Stroke, Vec2};

use waterfall::WaterfallInterface;
use waterfall::config::{CELL_SIZE, MAX_BITS, MAX_LENGTH, MAX_WIDTH, MIN_BITS};

use crate::WaterfallApp;

const GAP: f32 = 4.0;

impl eframe::App for WaterfallApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("input").show(ctx, |ui| {
            ui.heading("Input");

            ui.horizontal(|ui| {
                ui.label("bits:");
                let mut bits = self.controller.bits();
                if ui
                    .add(egui::DragValue::new(&mut bits).clamp_range(MIN_BITS..=MAX_BITS))
                    .changed()
                {
                    let result = self.controller.change_bits(bits);
                    self.report(result);
                }
            });

            ui.horizontal_wrapped(|ui| {
                ui.label("rule:");
                for index in 0..self.controller.rule_table().size() {
                    if self.rule_button(ui, index) {
                        let result = self.controller.toggle_rule(index);
                        self.report(result);
                    }
                }
            });

            ui.horizontal(|ui| {
                let mut width = self.controller.width();
                let mut length = self.controller.length();
                ui.label("width:");
                let width_changed = ui
                    .add(egui::DragValue::new(&mut width).clamp_range(1..=MAX_WIDTH))
                    .changed();
                ui.label("length:");
                let length_changed = ui
                    .add(egui::DragValue::new(&mut length).clamp_range(1..=MAX_LENGTH))
                    .changed();
                if width_changed || length_changed {
                    let result = self.controller.resize(width, length);
                    self.report(result);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label(format!("Rule number: {}", self.controller.rule_number()));
                ui.separator();
                ui.label(format!("Live cells: {}", self.controller.grid().population()));
                if let Some(error) = &self.last_error {
                    ui.separator();
                    ui.colored_label(Color32::LIGHT_RED, error.as_str());
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label("Click cells in the top row to toggle the start state.");
            ui.separator();

            egui::ScrollArea::both()
                .auto_shrink([false; 2])
                .show(ui, |ui| self.waterfall(ui));
        });
    }
}

impl WaterfallApp {
    /// Draws one rule entry as its input pattern above its output cell.
    /// Returns whether it was clicked.
    fn rule_button(&self, ui: &mut egui::Ui, index: usize) -> bool {
        let rule = self.controller.rule_table();
        let bits = rule.bits();
        let size = Vec2::new(
            bits as f32 * (CELL_SIZE + GAP) + 1.0,
            2.0 * (CELL_SIZE + GAP) + 1.0,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        let rect = response.rect;
        let selected = rule.get(index);

        let visuals = ui.style().interact_selectable(&response, selected);
        painter.rect_filled(rect, 2.0, visuals.bg_fill);
        painter.rect_stroke(rect, 2.0, visuals.bg_stroke);

        for (i, &alive) in rule.pattern(index).iter().enumerate() {
            let min = rect.min + Vec2::new(GAP / 2.0 + (CELL_SIZE + GAP) * i as f32, GAP / 2.0);
            self.paint_cell(&painter, Rect::from_min_size(min, Vec2::splat(CELL_SIZE)), alive);
        }
        let min = rect.min
            + Vec2::new((rect.width() - CELL_SIZE) / 2.0, GAP / 2.0 + CELL_SIZE + GAP);
        self.paint_cell(&painter, Rect::from_min_size(min, Vec2::splat(CELL_SIZE)), selected);

        response.clicked()
    }

    /// Draws the visible rows of the grid and forwards clicks on generation 0.
    fn waterfall(&mut self, ui: &mut egui::Ui) {
        let grid = self.controller.grid();
        let (width, length) = (grid.width(), grid.length());
        let size = Vec2::new(width as f32 * CELL_SIZE, length as f32 * CELL_SIZE) + Vec2::splat(1.0);
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        let origin = response.rect.min;

        // Only rows inside the scroll viewport
        let clip = painter.clip_rect();
        let first = ((clip.min.y - origin.y) / CELL_SIZE).floor().max(0.0) as usize;
        let last = (((clip.max.y - origin.y) / CELL_SIZE).ceil().max(0.0) as usize).min(length);

        for generation in first..last {
            let y = origin.y + generation as f32 * CELL_SIZE;
            for (x, &alive) in grid.row(generation).iter().enumerate() {
                let min = egui::pos2(origin.x + x as f32 * CELL_SIZE, y);
                self.paint_cell(&painter, Rect::from_min_size(min, Vec2::splat(CELL_SIZE)), alive);
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - origin;
                let result = self.controller.click(local.x, local.y);
                self.report(result);
            }
        }
    }

    fn paint_cell(&self, painter: &Painter, rect: Rect, alive: bool) {
        if alive {
            painter.rect_filled(rect.expand(0.5), 0.0, self.live_color);
        } else {
            painter.rect_stroke(rect, 0.0, Stroke::new(1.0, self.dead_color));
        }
    }
}
