use std::sync::OnceLock;

use crate::models::ECLevel;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_ec_level(name: &str, default: ECLevel) -> ECLevel {
    std::env::var(name)
        .ok()
        .map(|v| ECLevel::from_str_or(&v, default))
        .unwrap_or(default)
}

static DEFAULT_EC_LEVEL: OnceLock<ECLevel> = OnceLock::new();

/// Level used by `EncodeOptions::default()`, from `QR_DEFAULT_ECL`
pub(crate) fn default_ec_level() -> ECLevel {
    *DEFAULT_EC_LEVEL.get_or_init(|| parse_env_ec_level("QR_DEFAULT_ECL", ECLevel::M))
}

static BATCH_PARALLEL_MIN: OnceLock<usize> = OnceLock::new();

/// Batches smaller than this are encoded on the calling thread
pub(crate) fn batch_parallel_min() -> usize {
    *BATCH_PARALLEL_MIN.get_or_init(|| parse_env_usize("QR_BATCH_PARALLEL_MIN", 4).max(1))
}
