//! Sistema de alertas – avaliação de thresholds por parâmetro.
//!
//! As cinco regras são independentes e todas avaliadas (sem short-circuit):
//! uma única leitura pode disparar de 0 a 5 alertas. Leitura nominal ⇔
//! nenhum alerta.

use crate::config::AlertThresholds;
use crate::types::{Parameter, Reading};

/// Um alerta disparado por uma regra violada.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub parameter: Parameter,
    pub value: f64,
    pub message: String,
}

/// Avalia uma leitura contra os thresholds e retorna os alertas violados.
pub fn evaluate_alerts(reading: &Reading, thresholds: &AlertThresholds) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if reading.ph < thresholds.ph_min || reading.ph > thresholds.ph_max {
        alerts.push(Alert {
            parameter: Parameter::Ph,
            value: reading.ph,
            message: format!("pH out of range: {:.2}", reading.ph),
        });
    }

    if reading.temperature > thresholds.temperature_max {
        alerts.push(Alert {
            parameter: Parameter::Temperature,
            value: reading.temperature,
            message: format!("High temperature: {:.1} °C", reading.temperature),
        });
    }

    if reading.dissolved_oxygen < thresholds.dissolved_oxygen_min {
        alerts.push(Alert {
            parameter: Parameter::DissolvedOxygen,
            value: reading.dissolved_oxygen,
            message: format!("Low dissolved oxygen: {:.2} mg/L", reading.dissolved_oxygen),
        });
    }

    if reading.conductivity > thresholds.conductivity_max {
        alerts.push(Alert {
            parameter: Parameter::Conductivity,
            value: reading.conductivity,
            message: format!("High conductivity: {:.0} µS/cm", reading.conductivity),
        });
    }

    if reading.turbidity > thresholds.turbidity_max {
        alerts.push(Alert {
            parameter: Parameter::Turbidity,
            value: reading.turbidity,
            message: format!("High turbidity: {:.2} NTU", reading.turbidity),
        });
    }

    alerts
}

/// Status geral é nominal sse nenhuma regra foi violada.
pub fn is_nominal(alerts: &[Alert]) -> bool {
    alerts.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(ph: f64, temp: f64, oxygen: f64, cond: f64, turb: f64) -> Reading {
        Reading {
            ph,
            temperature: temp,
            dissolved_oxygen: oxygen,
            conductivity: cond,
            turbidity: turb,
            ..Default::default()
        }
    }

    #[test]
    fn nominal_reading_raises_no_alerts() {
        let alerts = evaluate_alerts(
            &reading(7.2, 25.0, 6.5, 300.0, 2.0),
            &AlertThresholds::default(),
        );
        assert!(alerts.is_empty());
        assert!(is_nominal(&alerts));
    }

    #[test]
    fn all_rules_violated_raises_five_alerts() {
        let alerts = evaluate_alerts(
            &reading(9.0, 31.0, 4.0, 600.0, 6.0),
            &AlertThresholds::default(),
        );
        assert_eq!(alerts.len(), 5);
        let params: Vec<Parameter> = alerts.iter().map(|a| a.parameter).collect();
        assert_eq!(params, Parameter::ALL);
        assert!(!is_nominal(&alerts));
    }

    #[test]
    fn ph_alert_on_both_sides_of_range() {
        let th = AlertThresholds::default();
        let low = evaluate_alerts(&reading(6.4, 25.0, 6.5, 300.0, 2.0), &th);
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].message, "pH out of range: 6.40");

        let high = evaluate_alerts(&reading(8.6, 25.0, 6.5, 300.0, 2.0), &th);
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].parameter, Parameter::Ph);
    }

    #[test]
    fn boundary_values_are_in_range() {
        // Comparações estritas: os limites em si não violam
        let th = AlertThresholds::default();
        let r = reading(6.5, 30.0, 5.0, 500.0, 5.0);
        assert!(evaluate_alerts(&r, &th).is_empty());
        let r = reading(8.5, 25.0, 6.5, 300.0, 2.0);
        assert!(evaluate_alerts(&r, &th).is_empty());
    }

    #[test]
    fn message_formats_match_dashboard() {
        let th = AlertThresholds::default();
        let alerts = evaluate_alerts(&reading(7.0, 31.26, 4.126, 612.7, 6.126), &th);
        assert_eq!(alerts.len(), 4);
        assert_eq!(alerts[0].message, "High temperature: 31.3 °C");
        assert_eq!(alerts[1].message, "Low dissolved oxygen: 4.13 mg/L");
        assert_eq!(alerts[2].message, "High conductivity: 613 µS/cm");
        assert_eq!(alerts[3].message, "High turbidity: 6.13 NTU");
    }

    #[test]
    fn rules_are_independent() {
        // Uma violação não suprime as demais
        let th = AlertThresholds::default();
        let alerts = evaluate_alerts(&reading(9.0, 25.0, 4.0, 300.0, 2.0), &th);
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].parameter, Parameter::Ph);
        assert_eq!(alerts[1].parameter, Parameter::DissolvedOxygen);
    }
}
