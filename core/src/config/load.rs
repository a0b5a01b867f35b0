use std::path::Path;

use super::types::WriterConfig;

/// Load configuration for the property layer.
///
/// Priority 1: `./projprops.toml` if present, otherwise built-in defaults.
/// Priority 0 (highest): the `PROJPROPS_CAPABILITY_FLAG` environment
/// variable overrides the capability flag from either source.
pub fn load_default() -> anyhow::Result<WriterConfig> {
    let local_config = Path::new("projprops.toml");

    let mut cfg = if local_config.exists() {
        load_from(local_config)?
    } else {
        WriterConfig::default()
    };

    if let Ok(v) = std::env::var("PROJPROPS_CAPABILITY_FLAG") {
        if !v.trim().is_empty() {
            cfg.capability_flag = v;
        }
    }

    Ok(cfg)
}

pub fn load_from(path: &Path) -> anyhow::Result<WriterConfig> {
    let s = std::fs::read_to_string(path)?;
    Ok(toml::from_str::<WriterConfig>(&s)?)
}
