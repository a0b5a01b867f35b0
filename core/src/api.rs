//! Stable re-exports for consumers (`plugins` and embedding extensions).
//!
//! Prefer importing from `projprops_core::api` instead of reaching into
//! internal modules.

pub use crate::config::{
    load_default, load_from, MemoryResolverConfig, ResolverConfig, ResolverProvider, WriterConfig,
};
pub use crate::context::{HostServices, WriterContext};
pub use crate::error::PropertyError;
pub use crate::host::{
    BuildPropertyStore, Configuration, ConfigurationManager, PersistScope, ProjectHandle,
    ProjectHierarchy, PropertyNamePair, SolutionResolver, LANG_VERSION,
};
pub use crate::writer::ProjectPropertyWriter;
