use super::color_button;
use crate::command::{BoxProperty, ShadowField, Update};
use crate::config::{ControlCategory, ControlId, ControlSpec, controls_in};
use crate::document::{BoxProperties, Document};
use crate::layer::ShadowLayer;
use crate::presets::Preset;

/// Left panel: shadow layer list, controls of the active shadow, box
/// properties and presets.
pub fn layers_panel(ctx: &egui::Context, document: &mut Document) {
    egui::SidePanel::left("layers_panel")
        .resizable(true)
        .default_width(280.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                shadow_layer_list(ui, document);
                ui.separator();

                ui.heading("Shadow");
                let mut updates = Vec::new();
                {
                    let state = document.combined_state();
                    for spec in controls_in(ControlCategory::Shadow) {
                        updates.extend(shadow_control(ui, spec, state.shadow));
                    }

                    ui.separator();
                    ui.heading("Box");
                    for spec in controls_in(ControlCategory::Shape) {
                        updates.extend(box_control(ui, spec, state.box_properties));
                    }
                    updates.extend(box_colors(ui, state.box_properties));
                }
                for update in updates {
                    document.apply(update);
                }

                ui.separator();
                presets(ui, document);
            });
        });
}

fn shadow_layer_list(ui: &mut egui::Ui, document: &mut Document) {
    ui.horizontal(|ui| {
        ui.heading("Layers");
        if ui.button("+").on_hover_text("Add layer").clicked() {
            document.add_shadow_layer();
        }
    });

    let active = document.active_shadow_index();
    let mut select = None;
    let mut remove = None;
    for index in 0..document.shadow_layers().len() {
        ui.horizontal(|ui| {
            if ui
                .selectable_label(index == active, format!("Layer {}", index + 1))
                .clicked()
            {
                select = Some(index);
            }
            if ui.small_button("×").on_hover_text("Remove layer").clicked() {
                remove = Some(index);
            }
        });
    }

    if let Some(index) = select {
        document.select_shadow_layer(index);
    }
    if let Some(index) = remove {
        document.remove_shadow_layer(index);
    }
}

/// Unsigned model values above `i32::MAX` pin to the top of the slider.
fn saturating_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn slider(ui: &mut egui::Ui, spec: &ControlSpec, value: i32) -> Option<i32> {
    let mut value = value;
    let response = ui.add(egui::Slider::new(&mut value, spec.bounds()).text(spec.label));
    response.changed().then_some(value)
}

fn shadow_control(ui: &mut egui::Ui, spec: &ControlSpec, shadow: &ShadowLayer) -> Option<Update> {
    let field = match spec.id {
        ControlId::Color => ui
            .horizontal(|ui| {
                ui.label(spec.label);
                color_button(ui, &shadow.color)
            })
            .inner
            .map(ShadowField::Color),
        ControlId::Inset => {
            let mut inset = shadow.inset;
            ui.checkbox(&mut inset, spec.label)
                .changed()
                .then_some(ShadowField::Inset(inset))
        }
        // The slider works in percent, the model in 0..=1
        ControlId::Opacity => {
            let percent = (shadow.opacity * 100.0).round() as i32;
            slider(ui, spec, percent).map(|percent| ShadowField::Opacity(f64::from(percent) / 100.0))
        }
        ControlId::Horizontal => slider(ui, spec, shadow.horizontal).map(ShadowField::Horizontal),
        ControlId::Vertical => slider(ui, spec, shadow.vertical).map(ShadowField::Vertical),
        ControlId::Blur => {
            slider(ui, spec, saturating_i32(shadow.blur)).map(|blur| ShadowField::Blur(blur.max(0) as u32))
        }
        ControlId::Spread => slider(ui, spec, shadow.spread).map(ShadowField::Spread),
        ControlId::BorderRadius => None,
    };
    field.map(Update::Shadow)
}

fn box_control(ui: &mut egui::Ui, spec: &ControlSpec, props: &BoxProperties) -> Option<Update> {
    match spec.id {
        ControlId::BorderRadius => slider(ui, spec, saturating_i32(props.border_radius))
            .map(|radius| Update::Box(BoxProperty::BorderRadius(radius.max(0) as u32))),
        _ => None,
    }
}

fn box_colors(ui: &mut egui::Ui, props: &BoxProperties) -> Vec<Update> {
    let mut updates = Vec::new();
    ui.horizontal(|ui| {
        ui.label("Base color");
        if let Some(color) = color_button(ui, &props.background_color) {
            updates.push(Update::Box(BoxProperty::BackgroundColor(color)));
        }
    });
    ui.horizontal(|ui| {
        ui.label("Canvas color");
        if let Some(color) = color_button(ui, &props.canvas_color) {
            updates.push(Update::Box(BoxProperty::CanvasColor(color)));
        }
    });
    updates
}

fn presets(ui: &mut egui::Ui, document: &mut Document) {
    ui.heading("Presets");
    ui.horizontal_wrapped(|ui| {
        for preset in Preset::ALL {
            if ui.button(preset.label()).clicked() {
                preset.apply(document);
            }
        }
    });
    if ui.button("Reset").clicked() {
        document.reset();
    }
}
