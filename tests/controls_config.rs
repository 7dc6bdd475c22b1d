use serde_json::json;
use shadow_studio::Document;
use shadow_studio::config::{
    ControlCategory, ControlId, ControlKind, SHADOW_CONTROLS, control, controls_in,
};

#[test]
fn test_control_table_layout() {
    assert_eq!(SHADOW_CONTROLS.len(), 8);
    assert_eq!(controls_in(ControlCategory::Shadow).count(), 7);
    assert_eq!(controls_in(ControlCategory::Shape).count(), 1);
}

#[test]
fn test_control_ranges() {
    let horizontal = control(ControlId::Horizontal).unwrap();
    assert_eq!(horizontal.bounds(), -100..=100);
    assert_eq!(horizontal.category, ControlCategory::Shadow);

    assert_eq!(control(ControlId::Vertical).unwrap().bounds(), -100..=100);
    assert_eq!(control(ControlId::Blur).unwrap().bounds(), 0..=100);
    assert_eq!(control(ControlId::Spread).unwrap().bounds(), -100..=100);
    assert_eq!(control(ControlId::Opacity).unwrap().bounds(), 0..=100);

    assert_eq!(control(ControlId::Color).unwrap().kind, ControlKind::Color);
    assert_eq!(control(ControlId::Inset).unwrap().kind, ControlKind::Checkbox);
    assert_eq!(
        control(ControlId::BorderRadius).unwrap().category,
        ControlCategory::Shape
    );
}

#[test]
fn test_every_control_key_is_accepted_by_the_model() {
    let mut document = Document::new();
    for spec in SHADOW_CONTROLS.iter() {
        let value = match (spec.id, spec.kind) {
            (_, ControlKind::Color) => json!("#123456"),
            (_, ControlKind::Checkbox) => json!(true),
            // Percent slider, converted before it reaches the model
            (ControlId::Opacity, _) => json!(f64::from(spec.max) / 100.0),
            (_, ControlKind::Range) => json!(spec.max),
        };
        assert_eq!(document.update(spec.id.key(), value), Ok(()), "{}", spec.label);
    }

    let layer = document.active_shadow();
    assert_eq!(layer.color, "#123456");
    assert_eq!(layer.opacity, 1.0);
    assert!(layer.inset);
    assert_eq!(document.box_properties().border_radius, 100);
}
