use super::color_button;
use crate::command::{BackgroundField, Update};
use crate::config::{ANGLE_RANGE, PERCENT_RANGE};
use crate::document::Document;
use crate::layer::{BackgroundLayer, ColorStop, GradientKind, MIN_STOPS, RadialShape, RadialSize};

/// Right panel: gradient layer list and the controls of the active gradient.
pub fn background_panel(ctx: &egui::Context, document: &mut Document) {
    egui::SidePanel::right("background_panel")
        .resizable(true)
        .default_width(300.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                background_layer_list(ui, document);
                ui.separator();

                let updates = match document.active_background() {
                    Some(layer) => layer_controls(ui, layer),
                    None => {
                        ui.label("Add a gradient layer above, or edit the base color.");
                        Vec::new()
                    }
                };
                for update in updates {
                    document.apply(Update::Background(update));
                }
            });
        });
}

fn background_layer_list(ui: &mut egui::Ui, document: &mut Document) {
    ui.horizontal(|ui| {
        ui.heading(format!("Gradients ({})", document.background_layers().len()));
    });
    ui.horizontal(|ui| {
        for kind in GradientKind::ALL {
            if ui.button(format!("+ {}", kind.label())).clicked() {
                document.add_background_layer(kind);
            }
        }
    });

    let active = document.active_background_index();
    let mut select = None;
    let mut remove = None;
    for (index, layer) in document.background_layers().iter().enumerate() {
        ui.horizontal(|ui| {
            if ui
                .selectable_label(active == Some(index), layer.kind.label())
                .clicked()
            {
                select = Some(index);
            }
            if ui.small_button("×").on_hover_text("Remove gradient").clicked() {
                remove = Some(index);
            }
        });
    }

    if let Some(index) = select {
        document.select_background_layer(Some(index));
    }
    if let Some(index) = remove {
        document.remove_background_layer(index);
    }
}

fn layer_controls(ui: &mut egui::Ui, layer: &BackgroundLayer) -> Vec<BackgroundField> {
    let mut updates = Vec::new();

    let mut kind = layer.kind;
    egui::ComboBox::from_label("Type")
        .selected_text(kind.label())
        .show_ui(ui, |ui| {
            for option in GradientKind::ALL {
                ui.selectable_value(&mut kind, option, option.label());
            }
        });
    if kind != layer.kind {
        updates.push(BackgroundField::Type(kind));
    }

    match layer.kind {
        GradientKind::Linear => {
            let mut angle = layer.angle;
            if ui
                .add(egui::Slider::new(&mut angle, ANGLE_RANGE).text("Angle").suffix("°"))
                .changed()
            {
                updates.push(BackgroundField::Angle(angle));
            }
        }
        GradientKind::Radial => {
            let mut shape = layer.shape;
            egui::ComboBox::from_label("Shape")
                .selected_text(shape.as_css())
                .show_ui(ui, |ui| {
                    for option in RadialShape::ALL {
                        ui.selectable_value(&mut shape, option, option.as_css());
                    }
                });
            if shape != layer.shape {
                updates.push(BackgroundField::Shape(shape));
            }

            let mut size = layer.size;
            egui::ComboBox::from_label("Size")
                .selected_text(size.as_css())
                .show_ui(ui, |ui| {
                    for option in RadialSize::ALL {
                        ui.selectable_value(&mut size, option, option.as_css());
                    }
                });
            if size != layer.size {
                updates.push(BackgroundField::Size(size));
            }

            let mut pos_x = layer.pos_x;
            if ui
                .add(egui::Slider::new(&mut pos_x, PERCENT_RANGE).text("Position X").suffix("%"))
                .changed()
            {
                updates.push(BackgroundField::PosX(pos_x));
            }
            let mut pos_y = layer.pos_y;
            if ui
                .add(egui::Slider::new(&mut pos_y, PERCENT_RANGE).text("Position Y").suffix("%"))
                .changed()
            {
                updates.push(BackgroundField::PosY(pos_y));
            }
        }
    }

    updates.extend(stop_controls(ui, layer).map(BackgroundField::Stops));
    updates
}

/// Stop rows; any edit yields the complete replacement stop list.
fn stop_controls(ui: &mut egui::Ui, layer: &BackgroundLayer) -> Option<Vec<ColorStop>> {
    let mut new_stops = None;

    ui.horizontal(|ui| {
        ui.label("Colors (stops)");
        if ui.button("+ Add color").clicked() {
            new_stops = Some(layer.with_added_stop());
        }
    });

    let can_remove = layer.stops.len() > MIN_STOPS;
    for (index, stop) in layer.stops.iter().enumerate() {
        ui.push_id(index, |ui| {
            ui.horizontal(|ui| {
                if let Some(color) = color_button(ui, &stop.color) {
                    let mut stops = layer.stops.clone();
                    stops[index].color = color;
                    new_stops = Some(stops);
                }

                let mut position = stop.position;
                if ui
                    .add(egui::Slider::new(&mut position, PERCENT_RANGE).suffix("%"))
                    .changed()
                {
                    let mut stops = layer.stops.clone();
                    stops[index].position = position;
                    new_stops = Some(stops);
                }

                let remove = ui
                    .add_enabled(can_remove, egui::Button::new("×").small())
                    .on_hover_text("Remove color");
                if remove.clicked() {
                    match layer.with_removed_stop(index) {
                        Some(stops) => new_stops = Some(stops),
                        None => log::warn!("A gradient needs at least {} colors", MIN_STOPS),
                    }
                }
            });
        });
    }

    new_stops
}
