//! # Hydro Dashboard
//!
//! Dashboard interativo de qualidade de água com GUI acelerada por GPU
//! via eframe/egui.
//!
//! Exibe leituras simuladas dos sensores (pH, temperatura, oxigênio
//! dissolvido, condutividade, turbidez), sinaliza valores fora de faixa e
//! libera a edição do dataset apenas para o papel Technician.
//!
//! ## Atalhos
//! - `F` / `F11`: Fullscreen
//! - `R`: Regenerar leituras
//! - `T`: Alternar tema
//! - `Q` / `Esc`: Sair

mod app;
mod panels;
mod theme_egui;

use app::WaterDashboard;
use hydro_core::config::AppConfig;
use tracing::warn;

fn main() -> eframe::Result<()> {
    // ── Logging ──
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // ── Config ──
    let config_path = AppConfig::default_path();
    let config = AppConfig::load(&config_path);

    for error in config.validate() {
        warn!("Config inválida: {error}");
    }

    if !config_path.exists() {
        let _ = config.save(&config_path);
    }

    // ── Janela eframe ──
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("💧 Water Quality Center")
            .with_inner_size([1366.0, 768.0])
            .with_min_inner_size([1024.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Water Quality Center",
        options,
        Box::new(move |cc| Ok(Box::new(WaterDashboard::new(cc, config)))),
    )
}
