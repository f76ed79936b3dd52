//! Iterated Local Search configuration.

/// Configuration parameters for Iterated Local Search.
///
/// # Examples
///
/// ```
/// use qap_metaheur::ils::IlsConfig;
///
/// let config = IlsConfig::default().with_rounds(30);
/// assert_eq!(config.rounds, 30);
/// assert_eq!(config.kick_size(20), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IlsConfig {
    /// Perturb + refine rounds after the initial local optimum.
    pub rounds: usize,
    /// Kick width = `n / sublist_divisor` positions.
    pub sublist_divisor: usize,
}

impl Default for IlsConfig {
    fn default() -> Self {
        Self {
            rounds: 9,
            sublist_divisor: 4,
        }
    }
}

impl IlsConfig {
    /// Sets the number of rounds.
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the kick width divisor.
    pub fn with_sublist_divisor(mut self, divisor: usize) -> Self {
        self.sublist_divisor = divisor;
        self
    }

    /// Kick width for an instance of size `n`. Widths below 2 leave the
    /// incumbent unperturbed.
    pub fn kick_size(&self, n: usize) -> usize {
        n / self.sublist_divisor
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.sublist_divisor == 0 {
            return Err("sublist_divisor must be at least 1".into());
        }
        Ok(())
    }
}
