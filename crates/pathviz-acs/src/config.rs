use crate::error::AcsError;

/// Ant Colony System parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AcsConfig {
    pub alpha: f64,            // pheromone influence
    pub beta: f64,             // visibility influence
    pub rho: f64,              // evaporation rate, in (0, 1]
    pub n_ants: Option<usize>, // None = one ant per location
    pub max_iterations: usize,
    pub seed: Option<u64>, // None = seeded from the thread RNG
}

impl Default for AcsConfig {
    fn default() -> Self {
        AcsConfig {
            alpha: 1.0,
            beta: 3.0,
            rho: 0.5,
            n_ants: None,
            max_iterations: 100,
            seed: None,
        }
    }
}

impl AcsConfig {
    /// Same config with a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Same config with a different iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Check every parameter is usable.
    pub fn validate(&self) -> Result<(), AcsError> {
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta)] {
            if !value.is_finite() || value < 0.0 {
                return Err(AcsError::InvalidParameter { name, value });
            }
        }
        if !(self.rho > 0.0 && self.rho <= 1.0) {
            return Err(AcsError::InvalidParameter {
                name: "rho",
                value: self.rho,
            });
        }
        if self.n_ants == Some(0) {
            return Err(AcsError::InvalidParameter {
                name: "n_ants",
                value: 0.0,
            });
        }
        Ok(())
    }

    /// Number of ants for a problem with `n_locations` points.
    pub fn ants_for(&self, n_locations: usize) -> usize {
        self.n_ants.unwrap_or(n_locations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = AcsConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.ants_for(7), 7);
        assert_eq!(c.with_seed(3).seed, Some(3));
    }

    #[test]
    fn rejects_bad_parameters() {
        let bad_rho = AcsConfig {
            rho: 0.0,
            ..Default::default()
        };
        assert_eq!(
            bad_rho.validate(),
            Err(AcsError::InvalidParameter {
                name: "rho",
                value: 0.0
            })
        );
        let bad_beta = AcsConfig {
            beta: f64::NAN,
            ..Default::default()
        };
        assert!(bad_beta.validate().is_err());
        let no_ants = AcsConfig {
            n_ants: Some(0),
            ..Default::default()
        };
        assert!(no_ants.validate().is_err());
    }
}
