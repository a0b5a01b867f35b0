use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriterConfig {
    /// Capability flag that marks the modern project system.
    #[serde(default = "default_capability_flag")]
    pub capability_flag: String,

    #[serde(default)]
    pub resolver: ResolverConfig,
}

fn default_capability_flag() -> String {
    "CPS".to_string()
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            capability_flag: default_capability_flag(),
            resolver: ResolverConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub provider: ResolverProvider,
}

/// Which solution-resolver adapter backs project lookup when no live host is
/// injected. Implementations live in the `plugins` crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolverProvider {
    Memory(MemoryResolverConfig),
}

impl Default for ResolverProvider {
    fn default() -> Self {
        Self::Memory(MemoryResolverConfig::default())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryResolverConfig {
    /// Match project unique names case-insensitively, the way hosts on
    /// case-insensitive filesystems do.
    #[serde(default)]
    pub case_insensitive: bool,
}
