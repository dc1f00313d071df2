//! Conversão de temas para `egui::Color32`.

use egui::Color32;
use hydro_core::theme::{self, Theme};
use hydro_core::types::Parameter;

/// Tema convertido para tipos egui.
#[derive(Clone)]
pub struct EguiTheme {
    pub name: String,
    pub bg: Color32,
    pub panel: Color32,
    pub border: Color32,
    pub text: Color32,
    pub dim: Color32,
    pub title: Color32,
    pub ph: Color32,
    pub temperature: Color32,
    pub dissolved_oxygen: Color32,
    pub conductivity: Color32,
    pub turbidity: Color32,
    pub ok: Color32,
    pub warning: Color32,
    pub critical: Color32,
}

impl EguiTheme {
    /// Converte um [`Theme`] do core para [`EguiTheme`].
    pub fn from_core(t: &Theme) -> Self {
        Self {
            name: t.name.clone(),
            bg: hex_color(&t.bg),
            panel: hex_color(&t.panel),
            border: hex_color(&t.border),
            text: hex_color(&t.text),
            dim: hex_color(&t.dim),
            title: hex_color(&t.title),
            ph: hex_color(&t.ph),
            temperature: hex_color(&t.temperature),
            dissolved_oxygen: hex_color(&t.dissolved_oxygen),
            conductivity: hex_color(&t.conductivity),
            turbidity: hex_color(&t.turbidity),
            ok: hex_color(&t.ok),
            warning: hex_color(&t.warning),
            critical: hex_color(&t.critical),
        }
    }

    /// Retorna a cor associada a um parâmetro.
    pub fn parameter_color(&self, parameter: Parameter) -> Color32 {
        match parameter {
            Parameter::Ph => self.ph,
            Parameter::Temperature => self.temperature,
            Parameter::DissolvedOxygen => self.dissolved_oxygen,
            Parameter::Conductivity => self.conductivity,
            Parameter::Turbidity => self.turbidity,
        }
    }
}

fn hex_color(hex: &str) -> Color32 {
    let (r, g, b) = theme::hex_to_rgb(hex);
    Color32::from_rgb(r, g, b)
}

/// Carrega todos os temas disponíveis.
pub fn all_themes() -> Vec<EguiTheme> {
    theme::theme_names()
        .iter()
        .map(|name| EguiTheme::from_core(&theme::get_theme(name)))
        .collect()
}
