//! Controle de acesso – resolução do papel efetivo da sessão.
//!
//! Sem estado: a resolução é reavaliada a cada interação e uma credencial
//! rejeitada apenas rebaixa o papel para Viewer (nunca é fatal). Não há
//! lockout nem rate limiting; segurança de autenticação está fora do escopo
//! do dashboard.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Papel de acesso da sessão.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Somente leitura (padrão e fallback em falha de credencial).
    #[default]
    Viewer,
    /// Leitura e edição do dataset.
    Technician,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Viewer => "Viewer",
            Role::Technician => "Technician",
        }
    }
}

/// Resultado da verificação de credencial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    Granted,
    /// Credencial ausente ou incorreta; papel rebaixado para Viewer.
    CredentialRejected,
}

/// Papel efetivo + como ele foi obtido.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleResolution {
    pub role: Role,
    pub outcome: AccessOutcome,
}

impl RoleResolution {
    pub fn is_rejected(&self) -> bool {
        self.outcome == AccessOutcome::CredentialRejected
    }
}

impl Default for RoleResolution {
    fn default() -> Self {
        Self {
            role: Role::Viewer,
            outcome: AccessOutcome::Granted,
        }
    }
}

/// Verificador de credencial injetável.
///
/// Mantém o segredo fora do código: a implementação padrão lê o segredo da
/// configuração e pode ser trocada sem tocar na resolução de papel.
pub trait CredentialVerifier {
    fn verify(&self, candidate: &str) -> bool;
}

/// Verificador por segredo compartilhado (vindo do `config.toml`).
#[derive(Debug, Clone)]
pub struct SharedSecretVerifier {
    secret: String,
}

impl SharedSecretVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self { secret: secret.into() }
    }
}

impl CredentialVerifier for SharedSecretVerifier {
    fn verify(&self, candidate: &str) -> bool {
        candidate == self.secret
    }
}

/// Resolve o papel efetivo a partir do papel pedido + credencial.
///
/// - Viewer pedido ⇒ Viewer, credencial ignorada.
/// - Technician pedido ⇒ Technician sse a credencial verifica; caso
///   contrário Viewer com [`AccessOutcome::CredentialRejected`].
pub fn resolve_role(
    requested: Role,
    credential: Option<&str>,
    verifier: &dyn CredentialVerifier,
) -> RoleResolution {
    match requested {
        Role::Viewer => RoleResolution {
            role: Role::Viewer,
            outcome: AccessOutcome::Granted,
        },
        Role::Technician => match credential {
            Some(candidate) if verifier.verify(candidate) => {
                info!("Acesso Technician concedido");
                RoleResolution {
                    role: Role::Technician,
                    outcome: AccessOutcome::Granted,
                }
            }
            _ => {
                warn!("Credencial de Technician rejeitada, sessão segue como Viewer");
                RoleResolution {
                    role: Role::Viewer,
                    outcome: AccessOutcome::CredentialRejected,
                }
            }
        },
    }
}
