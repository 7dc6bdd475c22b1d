use serde_json::json;
use shadow_studio::codegen::{background_css, flutter_code, tailwind_classes};
use shadow_studio::command::{BackgroundField, BoxProperty, ShadowField, Update, UpdateError};
use shadow_studio::layer::{ColorStop, GradientKind, RadialSize, ShadowLayer};
use shadow_studio::Document;

// Checks the shadow invariants that must hold after any operation
fn assert_shadow_invariants(document: &Document) {
    assert!(!document.shadow_layers().is_empty());
    assert!(document.active_shadow_index() < document.shadow_layers().len());
}

#[test]
fn test_initial_document() {
    let document = Document::new();

    assert_eq!(document.shadow_layers().len(), 1);
    assert_eq!(document.active_shadow_index(), 0);
    assert!(document.background_layers().is_empty());
    assert_eq!(document.active_background_index(), None);

    let layer = &document.shadow_layers()[0];
    assert_eq!(layer.horizontal, 5);
    assert_eq!(layer.vertical, 5);
    assert_eq!(layer.blur, 10);
    assert_eq!(layer.spread, 3);
    assert_eq!(layer.color, "#000000");
    assert_eq!(layer.opacity, 0.2);
    assert!(!layer.inset);

    let props = document.box_properties();
    assert_eq!(props.border_radius, 0);
    assert_eq!(props.background_color, "#ffdd00");
    assert_eq!(props.canvas_color, "#ffffff");
}

#[test]
fn test_add_shadow_layer_selects_it() {
    let mut document = Document::new();
    document.add_shadow_layer();

    assert_eq!(document.shadow_layers().len(), 2);
    assert_eq!(document.active_shadow_index(), 1);
    // New layers are stronger than the initial one
    assert_eq!(document.shadow_layers()[1], ShadowLayer::default());
    assert_eq!(document.shadow_layers()[1].opacity, 0.5);
}

#[test]
fn test_remove_last_shadow_layer_is_refused() {
    let mut document = Document::new();
    document.remove_shadow_layer(0);
    assert_eq!(document.shadow_layers().len(), 1);
    assert_shadow_invariants(&document);
}

#[test]
fn test_remove_shadow_layer_clamps_active_index() {
    let mut document = Document::new();
    document.add_shadow_layer();
    document.add_shadow_layer();
    assert_eq!(document.active_shadow_index(), 2);

    document.remove_shadow_layer(2);
    assert_eq!(document.shadow_layers().len(), 2);
    assert_eq!(document.active_shadow_index(), 1);
}

#[test]
fn test_remove_shadow_layer_before_active_keeps_index() {
    let mut document = Document::new();
    document.add_shadow_layer();
    document.add_shadow_layer();
    document.select_shadow_layer(1);

    document.remove_shadow_layer(0);
    assert_eq!(document.shadow_layers().len(), 2);
    assert_eq!(document.active_shadow_index(), 1);
}

#[test]
fn test_shadow_invariants_survive_any_removal_sequence() {
    let mut document = Document::new();
    for _ in 0..4 {
        document.add_shadow_layer();
    }
    for index in [4, 0, 7, 1, 0, 0, 0, 3] {
        document.remove_shadow_layer(index);
        assert_shadow_invariants(&document);
    }
    assert_eq!(document.shadow_layers().len(), 1);
}

#[test]
fn test_select_shadow_layer_ignores_out_of_range() {
    let mut document = Document::new();
    document.add_shadow_layer();
    document.add_shadow_layer();

    document.select_shadow_layer(1);
    assert_eq!(document.active_shadow_index(), 1);

    document.select_shadow_layer(99);
    assert_eq!(document.active_shadow_index(), 1);
}

#[test]
fn test_background_layer_lifecycle() {
    let mut document = Document::new();
    document.add_background_layer(GradientKind::Linear);
    assert_eq!(document.active_background_index(), Some(0));

    document.add_background_layer(GradientKind::Radial);
    assert_eq!(document.background_layers().len(), 2);
    assert_eq!(document.active_background_index(), Some(1));
    assert_eq!(document.background_layers()[1].kind, GradientKind::Radial);

    let layer = &document.background_layers()[0];
    assert_eq!(layer.angle, 90);
    assert_eq!(layer.stops.len(), 2);
    assert_eq!(layer.opacity, 1.0);
}

#[test]
fn test_remove_background_layer_selects_first() {
    let mut document = Document::new();
    document.add_background_layer(GradientKind::Linear);
    document.add_background_layer(GradientKind::Linear);
    document.add_background_layer(GradientKind::Radial);

    // Selection goes back to the first layer, not to a neighbour
    document.remove_background_layer(2);
    assert_eq!(document.active_background_index(), Some(0));

    document.remove_background_layer(0);
    document.remove_background_layer(0);
    assert!(document.background_layers().is_empty());
    assert_eq!(document.active_background_index(), None);
}

#[test]
fn test_select_background_layer_is_unchecked() {
    let mut document = Document::new();
    document.add_background_layer(GradientKind::Linear);

    document.select_background_layer(Some(5));
    assert_eq!(document.active_background_index(), Some(5));
    assert!(document.active_background().is_none());

    // Edits go nowhere while the selection dangles
    document.apply(Update::Background(BackgroundField::Angle(10)));
    assert_eq!(document.background_layers()[0].angle, 90);

    document.select_background_layer(None);
    assert!(document.combined_state().current_bg_layer.is_none());
}

#[test]
fn test_reset_restores_initial_document() {
    let mut document = Document::new();
    document.apply(Update::Shadow(ShadowField::Horizontal(100)));
    document.apply(Update::Box(BoxProperty::BorderRadius(50)));
    document.apply(Update::Box(BoxProperty::BackgroundColor("#123456".to_string())));
    document.add_shadow_layer();
    document.add_background_layer(GradientKind::Radial);

    document.reset();
    assert_eq!(document, Document::new());

    let once = document.clone();
    document.reset();
    assert_eq!(document, once);
}

#[test]
fn test_typed_updates_target_active_layers() {
    let mut document = Document::new();
    document.add_shadow_layer();
    document.apply(Update::Shadow(ShadowField::Blur(42)));
    document.apply(Update::Shadow(ShadowField::Inset(true)));

    assert_eq!(document.shadow_layers()[0].blur, 10);
    assert_eq!(document.shadow_layers()[1].blur, 42);
    assert!(document.shadow_layers()[1].inset);

    document.add_background_layer(GradientKind::Linear);
    document.apply(Update::Background(BackgroundField::Type(GradientKind::Radial)));
    document.apply(Update::Background(BackgroundField::Size(RadialSize::ClosestSide)));
    let layer = document.active_background().unwrap();
    assert_eq!(layer.kind, GradientKind::Radial);
    assert_eq!(layer.size, RadialSize::ClosestSide);
    // Switching kind keeps the linear settings around
    assert_eq!(layer.angle, 90);
}

#[test]
fn test_string_keyed_updates_route_by_namespace() {
    let mut document = Document::new();
    document.update("horizontal", json!(10)).unwrap();
    document.update("vertical", json!(-15)).unwrap();
    document.update("opacity", json!(0.75)).unwrap();
    document.update("color", json!("#ff5500")).unwrap();
    document.update("borderRadius", json!(15)).unwrap();
    document.update("backgroundColor", json!("#ff0000")).unwrap();
    document.update("canvasColor", json!("#333333")).unwrap();

    let layer = &document.shadow_layers()[0];
    assert_eq!(layer.horizontal, 10);
    assert_eq!(layer.vertical, -15);
    assert_eq!(layer.opacity, 0.75);
    assert_eq!(layer.color, "#ff5500");

    let props = document.box_properties();
    assert_eq!(props.border_radius, 15);
    assert_eq!(props.background_color, "#ff0000");
    assert_eq!(props.canvas_color, "#333333");
}

#[test]
fn test_string_keyed_background_updates() {
    let mut document = Document::new();
    document.add_background_layer(GradientKind::Linear);

    document.update("bgLayerAngle", json!(45)).unwrap();
    document.update("bgLayerType", json!("radial")).unwrap();
    document.update("bgLayerPosX", json!(25)).unwrap();
    document.update("bgLayerPosY", json!(75)).unwrap();
    document.update("bgLayerShape", json!("ellipse")).unwrap();
    document.update("bgLayerSize", json!("farthest-side")).unwrap();
    document
        .update(
            "bgLayerStops",
            json!([
                { "color": "#ff0000", "position": 0 },
                { "color": "#00ff00", "position": 100 },
            ]),
        )
        .unwrap();

    let layer = &document.background_layers()[0];
    assert_eq!(layer.angle, 45);
    assert_eq!(layer.kind, GradientKind::Radial);
    assert_eq!((layer.pos_x, layer.pos_y), (25, 75));
    assert_eq!(layer.size, RadialSize::FarthestSide);
    assert_eq!(
        layer.stops,
        vec![ColorStop::new("#ff0000", 0), ColorStop::new("#00ff00", 100)]
    );
}

#[test]
fn test_background_update_without_active_layer_is_ignored() {
    let mut document = Document::new();
    document.update("bgLayerAngle", json!(45)).unwrap();
    assert_eq!(document, Document::new());
}

#[test]
fn test_rejected_updates_leave_document_untouched() {
    let mut document = Document::new();

    assert_eq!(
        document.update("shadowColour", json!("#fff")),
        Err(UpdateError::UnknownKey("shadowColour".to_string()))
    );
    assert!(matches!(
        document.update("blur", json!(-3)),
        Err(UpdateError::InvalidValue { .. })
    ));
    assert!(matches!(
        document.update("opacity", json!(50)),
        Err(UpdateError::InvalidValue { .. })
    ));
    assert!(matches!(
        document.update("horizontal", json!("10")),
        Err(UpdateError::InvalidValue { .. })
    ));
    assert!(matches!(
        document.update("bgLayerType", json!("conic")),
        Err(UpdateError::InvalidValue { .. })
    ));

    assert_eq!(document, Document::new());
}

#[test]
fn test_stops_below_minimum_are_refused() {
    let mut document = Document::new();
    document.add_background_layer(GradientKind::Linear);
    let before = document.background_layers()[0].stops.clone();

    document.apply(Update::Background(BackgroundField::Stops(vec![ColorStop::new("#fff", 0)])));
    assert_eq!(document.background_layers()[0].stops, before);
}

#[test]
fn test_stop_list_helpers() {
    let mut document = Document::new();
    document.add_background_layer(GradientKind::Linear);
    let layer = document.active_background().unwrap().clone();

    // Two stops is the minimum
    assert!(layer.with_removed_stop(0).is_none());

    let three = layer.with_added_stop();
    assert_eq!(three.len(), 3);
    assert_eq!(three[2], ColorStop::new("#888888", 100));

    document.apply(Update::Background(BackgroundField::Stops(three)));
    let layer = document.active_background().unwrap();
    let two = layer.with_removed_stop(0).unwrap();
    assert_eq!(two[0].color, "#000000");
    assert!(layer.with_removed_stop(3).is_none());
}

#[test]
fn test_sorted_stops_are_a_stable_read_projection() {
    let mut document = Document::new();
    document.add_background_layer(GradientKind::Linear);
    let stops = vec![
        ColorStop::new("#000000", 100),
        ColorStop::new("#ff0000", 50),
        ColorStop::new("#ffffff", 0),
        ColorStop::new("#00ff00", 50),
    ];
    document.apply(Update::Background(BackgroundField::Stops(stops.clone())));

    let layer = document.active_background().unwrap();
    let sorted: Vec<&str> = layer.sorted_stops().iter().map(|s| s.color.as_str()).collect();
    assert_eq!(sorted, vec!["#ffffff", "#ff0000", "#00ff00", "#000000"]);
    // Storage order is untouched
    assert_eq!(layer.stops, stops);
}

#[test]
fn test_combined_state_view() {
    let mut document = Document::new();
    document.add_shadow_layer();
    document.apply(Update::Shadow(ShadowField::Horizontal(-8)));

    let state = document.combined_state();
    assert_eq!(state.layer_count, 2);
    assert_eq!(state.current_layer_index, 1);
    assert_eq!(state.shadow.horizontal, -8);
    assert_eq!(state.box_properties.background_color, "#ffdd00");
    assert!(state.current_bg_layer.is_none());
}

#[test]
fn test_combined_state_json_shape() {
    let mut document = Document::new();
    let value = serde_json::to_value(document.combined_state()).unwrap();

    for key in [
        "horizontal",
        "vertical",
        "blur",
        "spread",
        "color",
        "opacity",
        "inset",
        "borderRadius",
        "backgroundColor",
        "canvasColor",
        "layerCount",
        "currentLayerIndex",
        "backgroundLayers",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert_eq!(value["currentBgLayerIndex"], json!(-1));
    assert_eq!(value["currentBgLayer"], serde_json::Value::Null);

    document.add_background_layer(GradientKind::Radial);
    let value = serde_json::to_value(document.combined_state()).unwrap();
    assert_eq!(value["currentBgLayerIndex"], json!(0));
    assert_eq!(value["currentBgLayer"]["type"], json!("radial"));
    assert_eq!(value["currentBgLayer"]["size"], json!("farthest-corner"));
    assert_eq!(value["currentBgLayer"]["posX"], json!(50));
}

#[test]
fn test_background_opacity_is_stored_but_not_rendered() {
    let mut document = Document::new();
    document.add_background_layer(GradientKind::Radial);
    let css = background_css(&document);
    let flutter = flutter_code(&document);
    let tailwind = tailwind_classes(&document);

    assert_eq!(document.update("bgLayerOpacity", json!(0.3)), Ok(()));
    assert_eq!(document.active_background().unwrap().opacity, 0.3);

    assert_eq!(background_css(&document), css);
    assert_eq!(flutter_code(&document), flutter);
    assert_eq!(tailwind_classes(&document), tailwind);

    // Same 0..=1 validation as shadow opacity
    assert!(matches!(
        document.update("bgLayerOpacity", json!(30)),
        Err(UpdateError::InvalidValue { .. })
    ));
    assert_eq!(document.active_background().unwrap().opacity, 0.3);
}
