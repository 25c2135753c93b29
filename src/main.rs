mod app;
mod translate;
mod utils;

use app::DocxTranslator;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt().init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([480.0, 440.0])
            .with_min_inner_size([400.0, 380.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Docx Translator",
        options,
        Box::new(|cc| Box::new(DocxTranslator::new(cc))),
    )
}
