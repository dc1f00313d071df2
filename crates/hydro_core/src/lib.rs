//! # Hydro Core
//!
//! Crate compartilhada que define as estruturas de dados, regras de alerta,
//! geração de séries sintéticas, controle de acesso e configuração TOML do
//! dashboard de qualidade de água.
//!
//! ## Módulos
//! - [`types`] – Structs do domínio (Reading, Dataset, Parameter…)
//! - [`alerts`] – Thresholds e avaliação de alertas por parâmetro
//! - [`generator`] – Séries sintéticas de leituras (RNG injetável)
//! - [`access`] – Resolução de papel (Viewer/Technician) via credencial
//! - [`store`] – Dataset editável com escopo de sessão
//! - [`config`] – Configuração unificada via TOML
//! - [`theme`] – Definição de temas (Light, Dark)

pub mod access;
pub mod alerts;
pub mod config;
pub mod generator;
pub mod store;
pub mod theme;
pub mod types;

// Re-exports convenientes
pub use access::{AccessOutcome, CredentialVerifier, Role, RoleResolution, SharedSecretVerifier};
pub use alerts::{Alert, evaluate_alerts, is_nominal};
pub use config::{AlertThresholds, AppConfig};
pub use generator::{Anchor, SeriesSpec, generate};
pub use store::SessionStore;
pub use types::{Dataset, Parameter, Reading};
