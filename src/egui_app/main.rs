/**
 * egui Native Desktop App - Bubble Demo
 *
 * Renders a seeded conversation with interactive message bubbles backed by
 * an in-memory conversation store.
 */
use eframe::egui;
use chat_bubble::egui_app::{theme::styles, Config, MessagingDemo};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().unwrap_or_else(|e| {
        tracing::error!("Invalid configuration, using defaults: {}", e);
        Config::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 720.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Bubble Demo",
        options,
        Box::new(move |cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(BubbleApp::new(&config)))
        }),
    )
}

/// Main application state
struct BubbleApp {
    demo: MessagingDemo,
}

impl BubbleApp {
    fn new(config: &Config) -> Self {
        Self {
            demo: MessagingDemo::new(config),
        }
    }
}

impl eframe::App for BubbleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                self.demo.render(ui);
            });
    }
}
