pub mod traits;
pub mod types;

pub use traits::{
    BuildPropertyStore, Configuration, ConfigurationManager, ProjectHandle, ProjectHierarchy,
    SolutionResolver,
};
pub use types::{PersistScope, PropertyNamePair, LANG_VERSION};
