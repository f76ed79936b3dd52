//! GRASP configuration.

/// Configuration parameters for GRASP.
///
/// # Examples
///
/// ```
/// use qap_metaheur::grasp::GraspConfig;
///
/// let config = GraspConfig::default().with_max_iterations(50).with_alpha(0.2);
/// assert_eq!(config.max_iterations, 50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraspConfig {
    /// Number of construct + improve iterations.
    pub max_iterations: usize,
    /// Restricted candidate list fraction in [0, 1]: 0 is pure greedy,
    /// 1 is a uniformly random assignment.
    pub alpha: f64,
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self {
            max_iterations: 25,
            alpha: 0.1,
        }
    }
}

impl GraspConfig {
    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the LRC fraction.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(format!("alpha must be in [0, 1], got {}", self.alpha));
        }
        Ok(())
    }
}
