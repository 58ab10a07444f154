use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8001";
pub const DEFAULT_DATABASE_PATH: &str = "defects.db";
pub const DEFAULT_SAMPLE_SIZE: usize = 500;
pub const MAX_SAMPLE_SIZE: usize = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bind_addr: String,
    pub cors_origins: Vec<String>,
    pub database_path: PathBuf,
    pub sample_size: usize,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            cors_origins: vec!["*".to_string()],
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Settings {
        Settings::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup; unset or unparseable values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let cors_origins = read("CORS_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .filter(|origins| !origins.is_empty())
            .unwrap_or(defaults.cors_origins);

        let sample_size = read("DEFECT_SAMPLE_SIZE")
            .and_then(|raw| parse_or_warn::<usize>("DEFECT_SAMPLE_SIZE", &raw))
            .unwrap_or(defaults.sample_size)
            .clamp(1, MAX_SAMPLE_SIZE);

        let seed = read("DEFECT_SEED").and_then(|raw| parse_or_warn::<u64>("DEFECT_SEED", &raw));

        Settings {
            bind_addr: read("DEFECTS_BIND_ADDR").unwrap_or(defaults.bind_addr),
            cors_origins,
            database_path: read("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            sample_size,
            seed,
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }

    pub fn allows_origin(&self, origin: &str) -> bool {
        self.allows_any_origin() || self.cors_origins.iter().any(|o| o == origin)
    }

    /// Randomness for one request: fixed when a seed is configured, entropy otherwise.
    pub fn dataset_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_or_warn<T: std::str::FromStr>(key: &str, raw: &str) -> Option<T> {
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring invalid {key}={raw:?}; using default");
            None
        }
    }
}
