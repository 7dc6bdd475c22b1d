//! Static configuration: the editing controls and their ranges, and the
//! native window settings.

use std::ops::RangeInclusive;

/// Which document field a control edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlId {
    Horizontal,
    Vertical,
    Blur,
    Spread,
    Color,
    Opacity,
    Inset,
    BorderRadius,
}

impl ControlId {
    /// The key this control writes through `Document::update`.
    pub fn key(&self) -> &'static str {
        match self {
            ControlId::Horizontal => "horizontal",
            ControlId::Vertical => "vertical",
            ControlId::Blur => "blur",
            ControlId::Spread => "spread",
            ControlId::Color => "color",
            ControlId::Opacity => "opacity",
            ControlId::Inset => "inset",
            ControlId::BorderRadius => "borderRadius",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Range,
    Color,
    Checkbox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCategory {
    Shadow,
    Shape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlSpec {
    pub id: ControlId,
    pub label: &'static str,
    pub kind: ControlKind,
    /// Slider bounds in UI units (opacity is in percent)
    pub min: i32,
    pub max: i32,
    pub category: ControlCategory,
}

impl ControlSpec {
    const fn range(id: ControlId, label: &'static str, min: i32, max: i32, category: ControlCategory) -> Self {
        Self {
            id,
            label,
            kind: ControlKind::Range,
            min,
            max,
            category,
        }
    }

    pub fn bounds(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }
}

pub static SHADOW_CONTROLS: [ControlSpec; 8] = [
    ControlSpec::range(ControlId::Horizontal, "Horizontal", -100, 100, ControlCategory::Shadow),
    ControlSpec::range(ControlId::Vertical, "Vertical", -100, 100, ControlCategory::Shadow),
    ControlSpec::range(ControlId::Blur, "Blur", 0, 100, ControlCategory::Shadow),
    ControlSpec::range(ControlId::Spread, "Spread", -100, 100, ControlCategory::Shadow),
    ControlSpec {
        id: ControlId::Color,
        label: "Color",
        kind: ControlKind::Color,
        min: 0,
        max: 0,
        category: ControlCategory::Shadow,
    },
    ControlSpec::range(ControlId::Opacity, "Opacity (%)", 0, 100, ControlCategory::Shadow),
    ControlSpec {
        id: ControlId::Inset,
        label: "Inset",
        kind: ControlKind::Checkbox,
        min: 0,
        max: 0,
        category: ControlCategory::Shadow,
    },
    ControlSpec::range(ControlId::BorderRadius, "Border radius", 0, 100, ControlCategory::Shape),
];

pub fn control(id: ControlId) -> Option<&'static ControlSpec> {
    SHADOW_CONTROLS.iter().find(|spec| spec.id == id)
}

pub fn controls_in(category: ControlCategory) -> impl Iterator<Item = &'static ControlSpec> {
    SHADOW_CONTROLS.iter().filter(move |spec| spec.category == category)
}

// Background layer controls
pub const ANGLE_RANGE: RangeInclusive<u32> = 0..=360;
pub const PERCENT_RANGE: RangeInclusive<u32> = 0..=100;

/// Native window settings.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: &'static str,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Shadow Studio",
            inner_size: [1280.0, 800.0],
            min_inner_size: [900.0, 560.0],
        }
    }
}

impl WindowConfig {
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title)
                .with_inner_size(self.inner_size)
                .with_min_inner_size(self.min_inner_size),
            ..Default::default()
        }
    }
}
