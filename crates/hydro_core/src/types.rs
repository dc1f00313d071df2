//! Definição de tipos/structs do domínio de qualidade de água.
//!
//! Uma [`Reading`] é um snapshot imutável dos cinco parâmetros monitorados;
//! o [`Dataset`] é a sequência ordenada por timestamp mantida na sessão.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ──────────────────────────────────────────────
// Parâmetros monitorados
// ──────────────────────────────────────────────

/// Um dos cinco parâmetros de qualidade de água monitorados.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parameter {
    Ph,
    Temperature,
    DissolvedOxygen,
    Conductivity,
    Turbidity,
}

impl Parameter {
    /// Todos os parâmetros, na ordem das abas do dashboard.
    pub const ALL: [Parameter; 5] = [
        Parameter::Ph,
        Parameter::Temperature,
        Parameter::DissolvedOxygen,
        Parameter::Conductivity,
        Parameter::Turbidity,
    ];

    /// Rótulo exibido no dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            Parameter::Ph => "pH",
            Parameter::Temperature => "Temperature",
            Parameter::DissolvedOxygen => "Dissolved Oxygen",
            Parameter::Conductivity => "Conductivity",
            Parameter::Turbidity => "Turbidity",
        }
    }

    /// Unidade de medida (vazia para pH, adimensional).
    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::Ph => "",
            Parameter::Temperature => "°C",
            Parameter::DissolvedOxygen => "mg/L",
            Parameter::Conductivity => "µS/cm",
            Parameter::Turbidity => "NTU",
        }
    }
}

// ──────────────────────────────────────────────
// Reading
// ──────────────────────────────────────────────

/// Uma leitura dos sensores: timestamp + cinco valores numéricos.
///
/// Imutável depois de produzida; edições substituem a linha inteira
/// via [`crate::store::SessionStore::set`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub timestamp: DateTime<Utc>,
    /// pH (adimensional)
    pub ph: f64,
    /// Temperatura (°C)
    pub temperature: f64,
    /// Oxigênio dissolvido (mg/L)
    pub dissolved_oxygen: f64,
    /// Condutividade (µS/cm)
    pub conductivity: f64,
    /// Turbidez (NTU)
    pub turbidity: f64,
}

impl Reading {
    /// Valor de um parâmetro pelo enum, para iteração genérica.
    pub fn value(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Ph => self.ph,
            Parameter::Temperature => self.temperature,
            Parameter::DissolvedOxygen => self.dissolved_oxygen,
            Parameter::Conductivity => self.conductivity,
            Parameter::Turbidity => self.turbidity,
        }
    }

    /// Substitui o valor de um parâmetro (usado pelo editor).
    pub fn set_value(&mut self, parameter: Parameter, value: f64) {
        match parameter {
            Parameter::Ph => self.ph = value,
            Parameter::Temperature => self.temperature = value,
            Parameter::DissolvedOxygen => self.dissolved_oxygen = value,
            Parameter::Conductivity => self.conductivity = value,
            Parameter::Turbidity => self.turbidity = value,
        }
    }
}

impl Default for Reading {
    fn default() -> Self {
        Self {
            timestamp: DateTime::<Utc>::UNIX_EPOCH,
            ph: 0.0,
            temperature: 0.0,
            dissolved_oxygen: 0.0,
            conductivity: 0.0,
            turbidity: 0.0,
        }
    }
}

// ──────────────────────────────────────────────
// Dataset
// ──────────────────────────────────────────────

/// Sequência ordenada de leituras mantida para visualização/edição.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    rows: Vec<Reading>,
}

impl Dataset {
    pub fn new(rows: Vec<Reading>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Reading] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Leitura mais recente (última linha), se houver.
    pub fn latest(&self) -> Option<&Reading> {
        self.rows.last()
    }

    pub fn push(&mut self, reading: Reading) {
        self.rows.push(reading);
    }

    pub fn remove(&mut self, index: usize) -> Option<Reading> {
        if index < self.rows.len() {
            Some(self.rows.remove(index))
        } else {
            None
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reading> {
        self.rows.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Reading> {
        self.rows.iter_mut()
    }
}

impl IntoIterator for Dataset {
    type Item = Reading;
    type IntoIter = std::vec::IntoIter<Reading>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

// ──────────────────────────────────────────────
// Estações de monitoramento
// ──────────────────────────────────────────────

/// Status de uma estação de coleta exibido na tabela de localizações.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteStatus {
    pub name: String,
    pub active: bool,
}

/// Estações fixas do dashboard.
pub fn monitoring_sites() -> Vec<SiteStatus> {
    vec![
        SiteStatus { name: "Site A".into(), active: true },
        SiteStatus { name: "Site B".into(), active: false },
        SiteStatus { name: "Site C".into(), active: true },
    ]
}

// ──────────────────────────────────────────────
// Testes
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn reading_at(secs: i64) -> Reading {
        Reading {
            timestamp: Utc.timestamp_opt(secs, 0).unwrap(),
            ph: 7.0,
            ..Default::default()
        }
    }

    #[test]
    fn value_matches_field() {
        let r = Reading {
            ph: 7.2,
            temperature: 25.0,
            dissolved_oxygen: 6.5,
            conductivity: 300.0,
            turbidity: 2.0,
            ..Default::default()
        };
        assert_eq!(r.value(Parameter::Ph), 7.2);
        assert_eq!(r.value(Parameter::Temperature), 25.0);
        assert_eq!(r.value(Parameter::DissolvedOxygen), 6.5);
        assert_eq!(r.value(Parameter::Conductivity), 300.0);
        assert_eq!(r.value(Parameter::Turbidity), 2.0);
    }

    #[test]
    fn set_value_roundtrip() {
        let mut r = Reading::default();
        for p in Parameter::ALL {
            r.set_value(p, 42.0);
            assert_eq!(r.value(p), 42.0);
        }
    }

    #[test]
    fn latest_is_last_row() {
        let mut ds = Dataset::default();
        assert!(ds.latest().is_none());
        ds.push(reading_at(0));
        ds.push(reading_at(60));
        assert_eq!(ds.latest().unwrap().timestamp, reading_at(60).timestamp);
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn remove_out_of_bounds_is_none() {
        let mut ds = Dataset::new(vec![reading_at(0)]);
        assert!(ds.remove(3).is_none());
        assert!(ds.remove(0).is_some());
        assert!(ds.is_empty());
    }

    #[test]
    fn sites_match_dashboard_table() {
        let sites = monitoring_sites();
        assert_eq!(sites.len(), 3);
        assert!(sites[0].active);
        assert!(!sites[1].active);
    }
}
