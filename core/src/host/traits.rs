use std::sync::Arc;

use super::types::PersistScope;

/// Looks up projects in the host's solution model.
pub trait SolutionResolver: Send + Sync {
    /// Resolves a loaded project to its hierarchy handle. Fails when the
    /// project is not present in the solution.
    fn resolve_project(&self, unique_name: &str) -> anyhow::Result<Arc<dyn ProjectHierarchy>>;
}

/// A project as the solution's hierarchy model sees it.
pub trait ProjectHierarchy: Send + Sync {
    /// Whether the backing project system reports the given capability flag.
    fn is_capability_match(&self, flag: &str) -> bool;

    /// Binds the hierarchy's direct build-property store.
    ///
    /// Both project systems may expose one, but only the modern system keeps
    /// the project file and the in-memory model in sync, so callers should
    /// only bind it after a capability match.
    fn build_property_store(&self) -> anyhow::Result<Arc<dyn BuildPropertyStore>>;
}

/// The caller-facing project handle, owned by the host's project model.
pub trait ProjectHandle: Send + Sync {
    /// Solution-unique name of the project.
    fn unique_name(&self) -> &str;

    /// Binds the project's configuration manager.
    fn configuration_manager(&self) -> anyhow::Result<Arc<dyn ConfigurationManager>>;
}

/// Direct property persistence on the project file, independent of build
/// configuration.
pub trait BuildPropertyStore: Send + Sync {
    fn set_value(&self, name: &str, scope: PersistScope, value: &str) -> anyhow::Result<()>;
}

/// Enumerates the build configurations currently defined on a project.
pub trait ConfigurationManager: Send + Sync {
    /// Enumeration order is whatever the host provides; callers must not
    /// rely on it.
    fn configurations(&self) -> anyhow::Result<Vec<Arc<dyn Configuration>>>;
}

/// One build configuration (Debug, Release, per-platform variants) with its
/// live property collection.
pub trait Configuration: Send + Sync {
    fn name(&self) -> &str;

    fn set_property(&self, name: &str, value: &str) -> anyhow::Result<()>;
}
