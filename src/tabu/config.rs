//! Tabu Search configuration.

/// Configuration parameters for Tabu Search.
///
/// Budgets scale with the instance size n.
///
/// # Examples
///
/// ```
/// use qap_metaheur::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_iterations_factor(50)
///     .with_tenure(7)
///     .with_aspiration(true);
/// assert_eq!(config.tenure_for(20), 7);
/// assert_eq!(TabuConfig::default().tenure_for(20), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Total iterations = `iterations_factor * n`.
    pub iterations_factor: usize,
    /// Restart from a random solution every `restart_factor * n` iterations.
    /// 0 disables restarts.
    pub restart_factor: usize,
    /// Random candidate moves sampled per iteration.
    pub candidates: usize,
    /// Iterations a move stays tabu. `None` means `n / 2`.
    pub tenure: Option<usize>,
    /// Whether a tabu move that would beat the best-ever cost is allowed.
    pub aspiration: bool,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            iterations_factor: 100,
            restart_factor: 8,
            candidates: 40,
            tenure: None,
            aspiration: true,
        }
    }
}

impl TabuConfig {
    /// Sets the iteration budget per unit.
    pub fn with_iterations_factor(mut self, factor: usize) -> Self {
        self.iterations_factor = factor;
        self
    }

    /// Sets the restart period per unit.
    pub fn with_restart_factor(mut self, factor: usize) -> Self {
        self.restart_factor = factor;
        self
    }

    /// Sets the number of sampled candidate moves.
    pub fn with_candidates(mut self, candidates: usize) -> Self {
        self.candidates = candidates;
        self
    }

    /// Sets a fixed tabu tenure.
    pub fn with_tenure(mut self, tenure: usize) -> Self {
        self.tenure = Some(tenure);
        self
    }

    /// Enables or disables aspiration criterion.
    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.aspiration = aspiration;
        self
    }

    /// Effective tenure for an instance of size `n`.
    pub fn tenure_for(&self, n: usize) -> usize {
        self.tenure.unwrap_or(n / 2)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.iterations_factor == 0 {
            return Err("iterations_factor must be at least 1".into());
        }
        if self.candidates == 0 {
            return Err("candidates must be at least 1".into());
        }
        Ok(())
    }
}
