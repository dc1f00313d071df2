//! Configuração unificada via TOML.
//!
//! Um único `config.toml` ao lado do executável concentra thresholds de
//! alerta, parâmetros das séries simuladas, segredo de acesso e preferências
//! do dashboard. Campos ausentes caem nos defaults de domínio.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::generator::{Anchor, ParameterDistributions, SeriesSpec, ValueDistribution};

/// Thresholds de alerta por parâmetro.
///
/// Defaults são as faixas aceitáveis do domínio: violação é estrita
/// (`< min` / `> max`), os limites em si são considerados dentro da faixa.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertThresholds {
    pub ph_min: f64,
    pub ph_max: f64,
    pub temperature_max: f64,
    pub dissolved_oxygen_min: f64,
    pub conductivity_max: f64,
    pub turbidity_max: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            ph_min: 6.5,
            ph_max: 8.5,
            temperature_max: 30.0,
            dissolved_oxygen_min: 5.0,
            conductivity_max: 500.0,
            turbidity_max: 5.0,
        }
    }
}

/// Série ao vivo exibida nos tiles e gráficos (termina "agora").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveSeriesConfig {
    pub periods: u32,
    pub interval_secs: i64,
    pub distributions: ParameterDistributions,
}

impl Default for LiveSeriesConfig {
    fn default() -> Self {
        Self {
            periods: 20,
            interval_secs: 60,
            distributions: ParameterDistributions {
                ph: ValueDistribution::Normal { mean: 7.2, std_dev: 0.2 },
                temperature: ValueDistribution::Normal { mean: 25.0, std_dev: 1.5 },
                dissolved_oxygen: ValueDistribution::Normal { mean: 6.5, std_dev: 0.5 },
                conductivity: ValueDistribution::Normal { mean: 300.0, std_dev: 50.0 },
                turbidity: ValueDistribution::Normal { mean: 2.0, std_dev: 0.5 },
            },
        }
    }
}

impl LiveSeriesConfig {
    /// Especificação da série ancorada no instante dado.
    pub fn spec(&self, now: DateTime<Utc>) -> SeriesSpec {
        SeriesSpec {
            periods: self.periods,
            interval: Duration::seconds(self.interval_secs),
            anchor: Anchor::EndsAt(now),
            distributions: self.distributions,
        }
    }
}

/// Série histórica diária que semeia o dataset editável.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoricalSeriesConfig {
    pub periods: u32,
    pub interval_days: i64,
    pub start_date: DateTime<Utc>,
    pub distributions: ParameterDistributions,
}

impl Default for HistoricalSeriesConfig {
    fn default() -> Self {
        Self {
            periods: 10,
            interval_days: 1,
            start_date: Utc
                .with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
                .single()
                .expect("data fixa válida"),
            distributions: ParameterDistributions {
                ph: ValueDistribution::Uniform { min: 6.5, max: 8.5 },
                temperature: ValueDistribution::Uniform { min: 20.0, max: 30.0 },
                dissolved_oxygen: ValueDistribution::Uniform { min: 5.0, max: 9.0 },
                conductivity: ValueDistribution::Uniform { min: 300.0, max: 500.0 },
                turbidity: ValueDistribution::Uniform { min: 1.0, max: 5.0 },
            },
        }
    }
}

impl HistoricalSeriesConfig {
    pub fn spec(&self) -> SeriesSpec {
        SeriesSpec {
            periods: self.periods,
            interval: Duration::days(self.interval_days),
            anchor: Anchor::StartsAt(self.start_date),
            distributions: self.distributions,
        }
    }
}

/// Parâmetros das duas séries simuladas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub live: LiveSeriesConfig,
    pub historical: HistoricalSeriesConfig,
}

/// Controle de acesso.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Segredo compartilhado que libera o papel Technician.
    /// Rotacionável via config, nunca embutido no código.
    pub technician_secret: String,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            technician_secret: "admin123".into(),
        }
    }
}

/// Preferências do dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Tema: "light" ou "dark"
    pub theme: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { theme: "light".into() }
    }
}

/// Configuração raiz do aplicativo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub alerts: AlertThresholds,
    pub generator: GeneratorConfig,
    pub access: AccessConfig,
    pub dashboard: DashboardConfig,
}

impl AppConfig {
    /// Carrega configuração de um arquivo TOML.
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match toml::from_str::<AppConfig>(&content) {
                    Ok(config) => {
                        info!("Configuração carregada de {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        warn!("Erro ao parsear {}: {}", path.display(), e);
                    }
                },
                Err(e) => {
                    warn!("Erro ao ler {}: {}", path.display(), e);
                }
            }
        }

        info!("Usando configuração padrão");
        AppConfig::default()
    }

    /// Salva configuração em arquivo TOML.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content = toml::to_string_pretty(self).map_err(|e| e.to_string())?;
        std::fs::write(path, content).map_err(|e| e.to_string())?;
        info!("Configuração salva em {}", path.display());
        Ok(())
    }

    /// Retorna o caminho padrão do config.toml.
    pub fn default_path() -> PathBuf {
        let exe_dir = std::env::current_exe()
            .map(|p| p.parent().unwrap_or(Path::new(".")).to_path_buf())
            .unwrap_or_else(|_| PathBuf::from("."));
        exe_dir.join("config.toml")
    }

    /// Valida a configuração e retorna lista de erros.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.alerts.ph_min >= self.alerts.ph_max {
            errors.push(format!(
                "Faixa de pH inválida: min {} >= max {}",
                self.alerts.ph_min, self.alerts.ph_max
            ));
        }
        if self.generator.live.periods == 0 {
            errors.push("Períodos da série ao vivo não podem ser 0".into());
        }
        if self.generator.live.interval_secs <= 0 {
            errors.push(format!(
                "Intervalo da série ao vivo inválido: {}s",
                self.generator.live.interval_secs
            ));
        }
        if self.generator.historical.periods == 0 {
            errors.push("Períodos da série histórica não podem ser 0".into());
        }
        if self.generator.historical.interval_days <= 0 {
            errors.push(format!(
                "Intervalo da série histórica inválido: {} dias",
                self.generator.historical.interval_days
            ));
        }
        if self.access.technician_secret.is_empty() {
            errors.push("Segredo de Technician não pode ser vazio".into());
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        let errors = config.validate();
        assert!(errors.is_empty(), "Erros: {:?}", errors);
    }

    #[test]
    fn roundtrip_toml() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.alerts.ph_min, config.alerts.ph_min);
        assert_eq!(parsed.access.technician_secret, config.access.technician_secret);
        assert_eq!(parsed.generator.live.periods, 20);
        assert_eq!(
            parsed.generator.historical.start_date,
            config.generator.historical.start_date
        );
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let partial = r#"
[access]
technician_secret = "rotated!"
"#;
        let config: AppConfig = toml::from_str(partial).unwrap();
        assert_eq!(config.access.technician_secret, "rotated!");
        // Outros campos devem ter valor padrão
        assert_eq!(config.alerts.ph_max, 8.5);
        assert_eq!(config.generator.live.interval_secs, 60);
        assert_eq!(config.dashboard.theme, "light");
    }

    #[test]
    fn invalid_values_are_reported() {
        let mut config = AppConfig::default();
        config.generator.live.periods = 0;
        config.access.technician_secret.clear();
        let errors = config.validate();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn live_spec_matches_config() {
        let cfg = LiveSeriesConfig::default();
        let now = Utc::now();
        let spec = cfg.spec(now);
        assert_eq!(spec.periods, 20);
        assert_eq!(spec.interval, Duration::seconds(60));
        assert_eq!(spec.anchor, Anchor::EndsAt(now));
    }

    #[test]
    fn historical_spec_starts_at_configured_date() {
        let cfg = HistoricalSeriesConfig::default();
        let spec = cfg.spec();
        assert_eq!(spec.periods, 10);
        assert_eq!(spec.interval, Duration::days(1));
        assert_eq!(
            spec.anchor,
            Anchor::StartsAt(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap())
        );
    }
}
