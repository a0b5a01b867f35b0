use thiserror::Error;

/// Failures surfaced by the property writer.
///
/// Nothing is retried or swallowed at this layer; host errors ride along as
/// sources and the caller decides how to present them.
#[derive(Error, Debug)]
pub enum PropertyError {
    #[error("cannot resolve project '{unique_name}' in the solution: {source}")]
    ProjectResolution {
        unique_name: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("build property store rejected '{name}': {source}")]
    PropertyStorage {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("configuration enumeration failed: {source}")]
    ConfigurationEnumeration {
        #[source]
        source: anyhow::Error,
    },

    /// A per-configuration write aborted mid-iteration. The first `updated`
    /// configurations keep the new value; the rest were never touched.
    #[error("write to configuration '{configuration}' failed after {updated} of {total} configurations were updated: {source}")]
    ConfigurationWrite {
        configuration: String,
        updated: usize,
        total: usize,
        #[source]
        source: anyhow::Error,
    },
}
