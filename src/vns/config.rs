//! Variable Neighborhood Search configuration.

/// Configuration parameters for Variable Neighborhood Search.
///
/// Neighborhood `k` (1-based) shakes a circular sublist of
/// `max(2, n / (size_offset - k))` positions, so larger `k` means a wider kick.
///
/// # Examples
///
/// ```
/// use qap_metaheur::vns::VnsConfig;
///
/// let config = VnsConfig::default().with_max_rounds(100);
/// assert_eq!(config.max_rounds, 100);
/// assert_eq!(config.shake_size(1, 40), 5);
/// assert_eq!(config.shake_size(5, 40), 10);
/// assert_eq!(config.shake_size(1, 6), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VnsConfig {
    /// Number of neighborhoods.
    pub k_max: usize,
    /// Rounds before stopping. A round ends on an improvement or after an
    /// unsuccessful sweep through all neighborhoods.
    pub max_rounds: usize,
    /// Divisor offset for the shake size; must exceed `k_max`.
    pub size_offset: usize,
}

impl Default for VnsConfig {
    fn default() -> Self {
        Self {
            k_max: 5,
            max_rounds: 50,
            size_offset: 9,
        }
    }
}

impl VnsConfig {
    /// Sets the number of neighborhoods.
    pub fn with_k_max(mut self, k_max: usize) -> Self {
        self.k_max = k_max;
        self
    }

    /// Sets the round budget.
    pub fn with_max_rounds(mut self, n: usize) -> Self {
        self.max_rounds = n;
        self
    }

    /// Sets the shake size divisor offset.
    pub fn with_size_offset(mut self, offset: usize) -> Self {
        self.size_offset = offset;
        self
    }

    /// Sublist size used by neighborhood `k` on an instance of size `n`.
    pub fn shake_size(&self, k: usize, n: usize) -> usize {
        (n / (self.size_offset - k)).max(2)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.k_max == 0 {
            return Err("k_max must be at least 1".into());
        }
        if self.max_rounds == 0 {
            return Err("max_rounds must be at least 1".into());
        }
        if self.size_offset <= self.k_max {
            return Err(format!(
                "size_offset ({}) must be greater than k_max ({})",
                self.size_offset, self.k_max
            ));
        }
        Ok(())
    }
}
