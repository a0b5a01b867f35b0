/// Where a direct property write is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersistScope {
    /// The project file itself, shared across configurations.
    ProjectFile,
    /// The per-user settings file next to the project.
    UserFile,
}

/// The two names one logical setting goes by.
///
/// The build name is the key in the project file (e.g. `LangVersion`); the
/// configuration name is the same setting on the per-configuration property
/// interface (e.g. `LanguageVersion`). Callers must supply both because the
/// selected strategy decides which one is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyNamePair<'a> {
    pub build: &'a str,
    pub configuration: &'a str,
}

impl<'a> PropertyNamePair<'a> {
    pub const fn new(build: &'a str, configuration: &'a str) -> Self {
        Self {
            build,
            configuration,
        }
    }
}

/// Language version of the project's compiler input.
pub const LANG_VERSION: PropertyNamePair<'static> =
    PropertyNamePair::new("LangVersion", "LanguageVersion");
