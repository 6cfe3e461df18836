use crate::error::ConfigError;

/// Minimum number of elements for which splitting work across threads pays off.
pub const SEQUENTIAL_THRESHOLD: usize = 5000;

/// Parallelism used when the host doesn't report its concurrency level.
pub const FALLBACK_PARALLELISM: usize = 2;

// number of threads the host can run concurrently
pub fn default_parallelism() -> usize {
    match num_cpus::get() {
        0 => FALLBACK_PARALLELISM,
        cores => cores,
    }
}

/// Tuning knobs for a parallel reduction.
///
/// Both values are guaranteed to be non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    sequential_threshold: usize,
    max_parallelism: usize,
}

impl Config {
    pub fn new(sequential_threshold: usize, max_parallelism: usize) -> Result<Self, ConfigError> {
        if sequential_threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        if max_parallelism == 0 {
            return Err(ConfigError::ZeroParallelism);
        }
        Ok(Config {
            sequential_threshold,
            max_parallelism,
        })
    }

    pub fn with_sequential_threshold(self, sequential_threshold: usize) -> Result<Self, ConfigError> {
        Config::new(sequential_threshold, self.max_parallelism)
    }

    pub fn with_max_parallelism(self, max_parallelism: usize) -> Result<Self, ConfigError> {
        Config::new(self.sequential_threshold, max_parallelism)
    }

    /// Ranges shorter than this are reduced on the calling thread only.
    pub fn sequential_threshold(&self) -> usize {
        self.sequential_threshold
    }

    /// Upper bound on the number of slices, the inline one included.
    pub fn max_parallelism(&self) -> usize {
        self.max_parallelism
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sequential_threshold: SEQUENTIAL_THRESHOLD,
            max_parallelism: default_parallelism(),
        }
    }
}
