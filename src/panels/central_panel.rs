use super::color32;
use crate::codegen::OutputFormat;
use crate::color::{Rgb, hex_to_rgb};
use crate::document::Document;
use egui::{Color32, Rounding, epaint::Shadow};
use std::time::Duration;

const PREVIEW_HEIGHT: f32 = 320.0;
const BOX_SIZE: f32 = 160.0;

/// How long the copy button says "Copied!" after a click, in seconds.
pub const COPY_FEEDBACK_SECS: f64 = 2.0;

/// Remembers when the last copy happened.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CopyFeedback {
    copied_at: Option<f64>,
}

impl CopyFeedback {
    pub fn copied(&mut self, now: f64) {
        self.copied_at = Some(now);
    }

    pub fn is_visible(&self, now: f64) -> bool {
        self.copied_at
            .is_some_and(|at| now >= at && now - at < COPY_FEEDBACK_SECS)
    }

    pub fn button_label(&self, format: OutputFormat, now: f64) -> String {
        if self.is_visible(now) {
            "Copied!".to_string()
        } else {
            format!("Copy {}", format.label())
        }
    }
}

/// View state of the output area: selected tab and copy feedback.
#[derive(Debug, Default)]
pub struct OutputPanel {
    pub format: OutputFormat,
    pub feedback: CopyFeedback,
}

/// Preview of the box on its canvas, followed by the generated code.
pub fn central_panel(ctx: &egui::Context, document: &Document, output: &mut OutputPanel) {
    egui::CentralPanel::default().show(ctx, |ui| {
        preview(ui, document);
        ui.separator();
        outputs(ctx, ui, document, output);
    });
}

fn preview(ui: &mut egui::Ui, document: &Document) {
    let props = document.box_properties();
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), PREVIEW_HEIGHT),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, color32(&props.canvas_color, Color32::WHITE));

    let box_rect = egui::Rect::from_center_size(rect.center(), egui::vec2(BOX_SIZE, BOX_SIZE));
    let rounding = Rounding::same(props.border_radius as f32);

    // CSS puts the first shadow on top, so paint from the last one up.
    // egui has no inset shadows; those only show up in the generated code.
    for layer in document.shadow_layers().iter().rev().filter(|layer| !layer.inset) {
        let Rgb { r, g, b } = hex_to_rgb(&layer.color).unwrap_or(Rgb::BLACK);
        let alpha = (layer.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        let shadow = Shadow {
            offset: egui::vec2(layer.horizontal as f32, layer.vertical as f32),
            blur: layer.blur as f32,
            spread: layer.spread as f32,
            color: Color32::from_rgba_unmultiplied(r, g, b, alpha),
        };
        painter.add(shadow.as_shape(box_rect, rounding));
    }

    painter.rect_filled(box_rect, rounding, color32(&props.background_color, Color32::YELLOW));
}

fn outputs(ctx: &egui::Context, ui: &mut egui::Ui, document: &Document, output: &mut OutputPanel) {
    ui.horizontal(|ui| {
        for format in OutputFormat::ALL {
            ui.selectable_value(&mut output.format, format, format.label());
        }
    });

    let text = output.format.generate(document);
    egui::ScrollArea::vertical()
        .max_height(ui.available_height() - 40.0)
        .show(ui, |ui| {
            let mut view = text.as_str();
            ui.add(
                egui::TextEdit::multiline(&mut view)
                    .code_editor()
                    .desired_width(f32::INFINITY),
            );
        });

    let now = ctx.input(|i| i.time);
    if ui.button(output.feedback.button_label(output.format, now)).clicked() {
        ctx.copy_text(text);
        output.feedback.copied(now);
        log::info!("Copied {} output to clipboard", output.format.label());
    }
    if output.feedback.is_visible(now) {
        // Repaint once more so the label reverts without user input
        ctx.request_repaint_after(Duration::from_secs_f64(COPY_FEEDBACK_SECS));
    }
}
