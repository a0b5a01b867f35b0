use std::sync::Arc;

use projprops_core::api::{
    HostServices, ResolverConfig, ResolverProvider, SolutionResolver, WriterConfig, WriterContext,
};

use crate::host::memory::MemorySolution;

/// Builds the solution-resolver adapter selected by configuration.
pub fn build_resolver(cfg: &ResolverConfig) -> Arc<dyn SolutionResolver> {
    match &cfg.provider {
        ResolverProvider::Memory(mem_cfg) => Arc::new(MemorySolution::new(mem_cfg.clone())),
    }
}

/// Wires a writer context from configuration plus a resolver.
pub fn build_context(cfg: WriterConfig, solution: Arc<dyn SolutionResolver>) -> WriterContext {
    WriterContext::new(cfg, HostServices::new(solution))
}
