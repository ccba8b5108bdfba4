/// Main configuration struct for logmend
///
/// Built once from the CLI before batch processing begins and passed by
/// read-only reference from there on; nothing is re-derived per line.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub performance: PerformanceConfig,
}

/// Input configuration
#[derive(Debug, Clone, Default)]
pub struct InputConfig {
    /// Files concatenated into one batch; stdin when empty.
    pub files: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub quiet: bool,
    pub stats: bool,
}

/// Performance configuration
#[derive(Debug, Clone, Default)]
pub struct PerformanceConfig {
    /// Worker threads; 0 means one per logical core.
    pub threads: usize,
    /// Lines per work-channel chunk; 0 means the pool default.
    pub chunk_size: usize,
}

impl Config {
    /// Create configuration from CLI arguments
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        Self {
            input: InputConfig {
                files: cli.files.clone(),
            },
            output: OutputConfig {
                quiet: cli.quiet,
                stats: cli.stats,
            },
            performance: PerformanceConfig {
                threads: cli.threads,
                chunk_size: cli.chunk_size,
            },
        }
    }

    /// Get effective thread count with defaults
    pub fn effective_threads(&self) -> usize {
        if self.performance.threads == 0 {
            num_cpus::get()
        } else {
            self.performance.threads
        }
    }

    /// Get effective chunk size with defaults
    pub fn effective_chunk_size(&self) -> usize {
        if self.performance.chunk_size == 0 {
            256
        } else {
            self.performance.chunk_size
        }
    }
}
