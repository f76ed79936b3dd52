//! SA configuration and cooling schedules.

/// Cooling schedule for temperature reduction.
///
/// # References
///
/// - Cauchy (fast annealing): Szu & Hartley (1987)
/// - Geometric: standard textbook approach
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Cauchy cooling: `T_k = T_0 / (1 + k)`.
    ///
    /// Cools quickly at first, then slowly.
    Cauchy,

    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Cauchy
    }
}

/// Configuration for Simulated Annealing on the QAP.
///
/// The initial temperature is derived from the starting cost:
/// `T_0 = (mu / -ln(phi)) * initial_cost`, i.e. a solution `mu` times worse
/// than the initial one is accepted with probability `phi` at the start.
///
/// # Examples
///
/// ```
/// use qap_metaheur::sa::{SaConfig, CoolingSchedule};
///
/// let config = SaConfig::default()
///     .with_stages_factor(20)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.95 });
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Relative worsening accepted with probability `phi` at `T_0`.
    pub mu: f64,

    /// Initial acceptance probability for a `mu`-worse solution, in (0, 1).
    pub phi: f64,

    /// Temperature floor. The search stops once T drops below it, and at or
    /// below it only improving moves are accepted.
    pub min_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Number of cooling stages per unit: `M = stages_factor * n`.
    pub stages_factor: usize,

    /// A Markov chain ends after this many generated neighbors...
    pub max_neighbors: usize,

    /// ...or after this many accepted moves, whichever comes first.
    pub max_successes: usize,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            mu: 0.3,
            phi: 0.3,
            min_temperature: 1e-3,
            cooling: CoolingSchedule::default(),
            stages_factor: 50,
            max_neighbors: 40,
            max_successes: 5,
        }
    }
}

impl SaConfig {
    pub fn with_mu(mut self, mu: f64) -> Self {
        self.mu = mu;
        self
    }

    pub fn with_phi(mut self, phi: f64) -> Self {
        self.phi = phi;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_stages_factor(mut self, factor: usize) -> Self {
        self.stages_factor = factor;
        self
    }

    pub fn with_max_neighbors(mut self, n: usize) -> Self {
        self.max_neighbors = n;
        self
    }

    pub fn with_max_successes(mut self, n: usize) -> Self {
        self.max_successes = n;
        self
    }

    /// Initial temperature for a given starting cost.
    ///
    /// A starting cost ≤ 0 (possible with coefficients of mixed sign) gives
    /// `T0 ≤ 0`: the run then performs a single stage that accepts only
    /// improving moves and stops.
    pub fn initial_temperature(&self, initial_cost: i64) -> f64 {
        (self.mu / -self.phi.ln()) * initial_cost as f64
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.mu <= 0.0 {
            return Err("mu must be positive".into());
        }
        if self.phi <= 0.0 || self.phi >= 1.0 {
            return Err(format!("phi must be in (0, 1), got {}", self.phi));
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.stages_factor == 0 {
            return Err("stages_factor must be at least 1".into());
        }
        if self.max_neighbors == 0 || self.max_successes == 0 {
            return Err("markov chain limits must be at least 1".into());
        }
        if let CoolingSchedule::Geometric { alpha } = self.cooling {
            if alpha <= 0.0 || alpha >= 1.0 {
                return Err(format!("geometric alpha must be in (0, 1), got {alpha}"));
            }
        }
        Ok(())
    }
}
