use crate::document::Document;
use crate::panels::{OutputPanel, background_panel, central_panel, layers_panel};

/// The editor window. Owns the one document for the whole session; nothing
/// is persisted between runs.
#[derive(Debug, Default)]
pub struct ShadowApp {
    document: Document,
    output: OutputPanel,
}

impl ShadowApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        log::info!("Starting with a fresh document");
        Self::default()
    }
}

impl eframe::App for ShadowApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Side panels first so the central panel gets the remaining space
        layers_panel(ctx, &mut self.document);
        background_panel(ctx, &mut self.document);
        central_panel(ctx, &self.document, &mut self.output);
    }
}
