//! Definição de temas visuais para o dashboard.
//!
//! O tema claro usa a paleta verde/azul-água padrão do dashboard;
//! o escuro é a variante para salas de controle.

use serde::{Deserialize, Serialize};

use crate::types::Parameter;

/// Definição completa de um tema de cores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Cores de fundo
    pub bg: Color32Hex,
    pub panel: Color32Hex,
    pub border: Color32Hex,
    // Cores de texto
    pub text: Color32Hex,
    pub dim: Color32Hex,
    pub title: Color32Hex,
    // Cores por parâmetro
    pub ph: Color32Hex,
    pub temperature: Color32Hex,
    pub dissolved_oxygen: Color32Hex,
    pub conductivity: Color32Hex,
    pub turbidity: Color32Hex,
    // Cores de status
    pub ok: Color32Hex,
    pub warning: Color32Hex,
    pub critical: Color32Hex,
}

/// Cor em formato hex string (ex: "#66B2FF") para serialização.
/// A conversão para `egui::Color32` é feita no dashboard.
pub type Color32Hex = String;

impl Theme {
    /// Cor associada a um parâmetro.
    pub fn parameter_color(&self, parameter: Parameter) -> &str {
        match parameter {
            Parameter::Ph => &self.ph,
            Parameter::Temperature => &self.temperature,
            Parameter::DissolvedOxygen => &self.dissolved_oxygen,
            Parameter::Conductivity => &self.conductivity,
            Parameter::Turbidity => &self.turbidity,
        }
    }
}

/// Converte uma string hex "#RRGGBB" para tupla (r, g, b).
pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return (255, 255, 255); // fallback branco
    }
    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);
    (r, g, b)
}

/// Tema Claro (padrão).
pub fn light_theme() -> Theme {
    Theme {
        name: "light".into(),
        bg: "#F9FAF9".into(),
        panel: "#FFFFFF".into(),
        border: "#2E5E4E".into(),
        text: "#1E1E1E".into(),
        dim: "#777777".into(),
        title: "#2E5E4E".into(),
        ph: "#2E5E4E".into(),
        temperature: "#CC6644".into(),
        dissolved_oxygen: "#66B2FF".into(),
        conductivity: "#9955AA".into(),
        turbidity: "#8B7355".into(),
        ok: "#2E8B57".into(),
        warning: "#FFD580".into(),
        critical: "#FF6B6B".into(),
    }
}

/// Tema Escuro.
pub fn dark_theme() -> Theme {
    Theme {
        name: "dark".into(),
        bg: "#14201C".into(),
        panel: "#1C2A25".into(),
        border: "#3E6E5E".into(),
        text: "#E8F0EC".into(),
        dim: "#7A8A84".into(),
        title: "#66B2FF".into(),
        ph: "#66CC99".into(),
        temperature: "#FF9966".into(),
        dissolved_oxygen: "#66B2FF".into(),
        conductivity: "#BB88DD".into(),
        turbidity: "#C2A477".into(),
        ok: "#44CC88".into(),
        warning: "#FFD580".into(),
        critical: "#FF6B6B".into(),
    }
}

/// Retorna tema pelo nome.
pub fn get_theme(name: &str) -> Theme {
    match name.to_lowercase().as_str() {
        "dark" => dark_theme(),
        _ => light_theme(),
    }
}

/// Nomes de temas disponíveis.
pub fn theme_names() -> Vec<&'static str> {
    vec!["light", "dark"]
}
