use std::sync::Arc;

use projprops_core::api::{HostServices, MemoryResolverConfig, WriterConfig, WriterContext};
use projprops_plugins::host::memory::{MemoryProject, MemorySolution};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

pub fn solution() -> Arc<MemorySolution> {
    Arc::new(MemorySolution::new(MemoryResolverConfig::default()))
}

pub fn context_with(solution: Arc<MemorySolution>) -> WriterContext {
    WriterContext::new(WriterConfig::default(), HostServices::new(solution))
}

pub fn modern_project(unique_name: &str) -> MemoryProject {
    MemoryProject::new(unique_name).with_capability("CPS")
}

pub fn legacy_project(unique_name: &str, configurations: &[&str]) -> MemoryProject {
    configurations.iter().fold(
        MemoryProject::new(unique_name),
        |project, configuration| project.with_configuration(configuration),
    )
}
