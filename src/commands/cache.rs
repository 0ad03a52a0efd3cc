use crate::core::{
    config::StatuslineConfig,
    error::{Result, StatuslineError},
    print_success,
};

/// Rewrite the cache file keeping only the latest live entry per key
pub fn execute_cache_compact(config: &StatuslineConfig) -> Result<()> {
    let cache = config
        .cache()
        .ok_or(StatuslineError::HomeDirectoryNotFound)?;

    let kept = cache.compact()?;
    print_success(&format!(
        "Compacted {}: {kept} entr{} kept",
        cache.path().display(),
        if kept == 1 { "y" } else { "ies" }
    ));
    Ok(())
}
