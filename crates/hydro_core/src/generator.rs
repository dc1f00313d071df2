//! Geração de séries sintéticas de leituras.
//!
//! Função pura dos argumentos + fonte de aleatoriedade injetada: o mesmo
//! seed produz sempre a mesma série, o que mantém os testes determinísticos.
//! Cada parâmetro é amostrado de forma independente da distribuição
//! configurada (normal ou uniforme).

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand_distr::{Distribution as _, Normal, Uniform};
use serde::{Deserialize, Serialize};

use crate::types::{Dataset, Parameter, Reading};

/// Erros do gerador.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("Argumento inválido: {0}")]
    InvalidArgument(String),
}

/// Distribuição de amostragem de um parâmetro.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueDistribution {
    Normal { mean: f64, std_dev: f64 },
    Uniform { min: f64, max: f64 },
}

impl ValueDistribution {
    fn validate(&self, parameter: Parameter) -> Result<(), GeneratorError> {
        match *self {
            ValueDistribution::Normal { std_dev, .. } if std_dev <= 0.0 => {
                Err(GeneratorError::InvalidArgument(format!(
                    "std_dev de {} deve ser positivo (recebido {std_dev})",
                    parameter.label()
                )))
            }
            ValueDistribution::Uniform { min, max } if min >= max => {
                Err(GeneratorError::InvalidArgument(format!(
                    "intervalo de {} inválido: min {min} >= max {max}",
                    parameter.label()
                )))
            }
            _ => Ok(()),
        }
    }
}

/// Distribuições dos cinco parâmetros de uma série.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterDistributions {
    pub ph: ValueDistribution,
    pub temperature: ValueDistribution,
    pub dissolved_oxygen: ValueDistribution,
    pub conductivity: ValueDistribution,
    pub turbidity: ValueDistribution,
}

impl ParameterDistributions {
    pub fn get(&self, parameter: Parameter) -> ValueDistribution {
        match parameter {
            Parameter::Ph => self.ph,
            Parameter::Temperature => self.temperature,
            Parameter::DissolvedOxygen => self.dissolved_oxygen,
            Parameter::Conductivity => self.conductivity,
            Parameter::Turbidity => self.turbidity,
        }
    }
}

/// Ponto de ancoragem da série no tempo.
///
/// A série ao vivo termina "agora"; a série histórica começa numa data fixa.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    StartsAt(DateTime<Utc>),
    EndsAt(DateTime<Utc>),
}

/// Especificação completa de uma série a gerar.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub periods: u32,
    pub interval: Duration,
    pub anchor: Anchor,
    pub distributions: ParameterDistributions,
}

// Sampler pré-construído por parâmetro, um por série
enum Sampler {
    Normal(Normal<f64>),
    Uniform(Uniform<f64>),
}

impl Sampler {
    fn build(dist: ValueDistribution) -> Result<Self, GeneratorError> {
        match dist {
            ValueDistribution::Normal { mean, std_dev } => Normal::new(mean, std_dev)
                .map(Sampler::Normal)
                .map_err(|e| GeneratorError::InvalidArgument(e.to_string())),
            ValueDistribution::Uniform { min, max } => {
                Ok(Sampler::Uniform(Uniform::new(min, max)))
            }
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Sampler::Normal(n) => n.sample(rng),
            Sampler::Uniform(u) => u.sample(rng),
        }
    }
}

/// Gera uma série de `periods` leituras com timestamps estritamente
/// crescentes, espaçados exatamente por `interval`.
pub fn generate<R: Rng + ?Sized>(
    spec: &SeriesSpec,
    rng: &mut R,
) -> Result<Dataset, GeneratorError> {
    if spec.periods == 0 {
        return Err(GeneratorError::InvalidArgument(
            "periods deve ser no mínimo 1".into(),
        ));
    }
    if spec.interval <= Duration::zero() {
        return Err(GeneratorError::InvalidArgument(format!(
            "interval deve ser positivo (recebido {})",
            spec.interval
        )));
    }
    for parameter in Parameter::ALL {
        spec.distributions.get(parameter).validate(parameter)?;
    }

    let samplers: Vec<Sampler> = Parameter::ALL
        .iter()
        .map(|&p| Sampler::build(spec.distributions.get(p)))
        .collect::<Result<_, _>>()?;

    let first = match spec.anchor {
        Anchor::StartsAt(start) => start,
        Anchor::EndsAt(end) => end - spec.interval * (spec.periods as i32 - 1),
    };

    let mut rows = Vec::with_capacity(spec.periods as usize);
    for i in 0..spec.periods {
        let mut reading = Reading {
            timestamp: first + spec.interval * i as i32,
            ..Default::default()
        };
        for (parameter, sampler) in Parameter::ALL.iter().zip(&samplers) {
            reading.set_value(*parameter, sampler.sample(rng));
        }
        rows.push(reading);
    }

    Ok(Dataset::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn normal_distributions() -> ParameterDistributions {
        ParameterDistributions {
            ph: ValueDistribution::Normal { mean: 7.2, std_dev: 0.2 },
            temperature: ValueDistribution::Normal { mean: 25.0, std_dev: 1.5 },
            dissolved_oxygen: ValueDistribution::Normal { mean: 6.5, std_dev: 0.5 },
            conductivity: ValueDistribution::Normal { mean: 300.0, std_dev: 50.0 },
            turbidity: ValueDistribution::Normal { mean: 2.0, std_dev: 0.5 },
        }
    }

    fn anchor_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn twenty_periods_one_minute_apart() {
        let spec = SeriesSpec {
            periods: 20,
            interval: Duration::minutes(1),
            anchor: Anchor::EndsAt(anchor_time()),
            distributions: normal_distributions(),
        };
        let ds = generate(&spec, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(ds.len(), 20);

        // Estritamente crescente, espaçado por 1 minuto
        for pair in ds.rows().windows(2) {
            assert_eq!(pair[1].timestamp - pair[0].timestamp, Duration::minutes(1));
        }
        assert_eq!(ds.latest().unwrap().timestamp, anchor_time());
    }

    #[test]
    fn starts_at_anchor() {
        let spec = SeriesSpec {
            periods: 10,
            interval: Duration::days(1),
            anchor: Anchor::StartsAt(anchor_time()),
            distributions: normal_distributions(),
        };
        let ds = generate(&spec, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(ds.rows()[0].timestamp, anchor_time());
        assert_eq!(
            ds.latest().unwrap().timestamp,
            anchor_time() + Duration::days(9)
        );
    }

    #[test]
    fn same_seed_same_series() {
        let spec = SeriesSpec {
            periods: 20,
            interval: Duration::minutes(1),
            anchor: Anchor::EndsAt(anchor_time()),
            distributions: normal_distributions(),
        };
        let a = generate(&spec, &mut StdRng::seed_from_u64(1337)).unwrap();
        let b = generate(&spec, &mut StdRng::seed_from_u64(1337)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn uniform_samples_stay_in_range() {
        let spec = SeriesSpec {
            periods: 50,
            interval: Duration::minutes(1),
            anchor: Anchor::StartsAt(anchor_time()),
            distributions: ParameterDistributions {
                ph: ValueDistribution::Uniform { min: 6.5, max: 8.5 },
                temperature: ValueDistribution::Uniform { min: 20.0, max: 30.0 },
                dissolved_oxygen: ValueDistribution::Uniform { min: 5.0, max: 9.0 },
                conductivity: ValueDistribution::Uniform { min: 300.0, max: 500.0 },
                turbidity: ValueDistribution::Uniform { min: 1.0, max: 5.0 },
            },
        };
        let ds = generate(&spec, &mut StdRng::seed_from_u64(9)).unwrap();
        for reading in ds.iter() {
            assert!(reading.ph >= 6.5 && reading.ph < 8.5);
            assert!(reading.conductivity >= 300.0 && reading.conductivity < 500.0);
        }
    }

    #[test]
    fn zero_periods_is_invalid() {
        let spec = SeriesSpec {
            periods: 0,
            interval: Duration::minutes(1),
            anchor: Anchor::EndsAt(anchor_time()),
            distributions: normal_distributions(),
        };
        assert!(matches!(
            generate(&spec, &mut StdRng::seed_from_u64(0)),
            Err(GeneratorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn non_positive_interval_is_invalid() {
        let mut spec = SeriesSpec {
            periods: 5,
            interval: Duration::zero(),
            anchor: Anchor::EndsAt(anchor_time()),
            distributions: normal_distributions(),
        };
        assert!(generate(&spec, &mut StdRng::seed_from_u64(0)).is_err());

        spec.interval = Duration::minutes(-1);
        assert!(generate(&spec, &mut StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn invalid_distribution_is_rejected() {
        let mut dists = normal_distributions();
        dists.ph = ValueDistribution::Normal { mean: 7.2, std_dev: 0.0 };
        let spec = SeriesSpec {
            periods: 5,
            interval: Duration::minutes(1),
            anchor: Anchor::EndsAt(anchor_time()),
            distributions: dists,
        };
        assert!(generate(&spec, &mut StdRng::seed_from_u64(0)).is_err());

        let mut dists = normal_distributions();
        dists.turbidity = ValueDistribution::Uniform { min: 5.0, max: 1.0 };
        let spec = SeriesSpec { distributions: dists, ..spec };
        assert!(generate(&spec, &mut StdRng::seed_from_u64(0)).is_err());
    }
}
