use std::sync::Arc;

use crate::config::WriterConfig;
use crate::context::HostServices;
use crate::error::PropertyError;
use crate::host::{
    BuildPropertyStore, ConfigurationManager, PersistScope, ProjectHandle, PropertyNamePair,
};

/// Per-project dispatch over the two host project systems.
///
/// The modern project system keeps the project file and its in-memory model
/// in sync, so one configuration-independent write through the build
/// property store takes effect immediately. The legacy system only picks up
/// changes made through the live per-configuration property objects; a
/// direct build-file write would stay invisible until the project is
/// unloaded and reloaded. The legacy path therefore iterates every
/// configuration and writes the equivalent configuration-level property.
///
/// The property may go by a different name on each path: the build name is
/// the project-file key, the configuration name belongs to the
/// per-configuration property interface.
pub enum ProjectPropertyWriter {
    DirectStore(Arc<dyn BuildPropertyStore>),
    PerConfiguration(Arc<dyn ConfigurationManager>),
}

impl std::fmt::Debug for ProjectPropertyWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectPropertyWriter::DirectStore(_) => f.write_str("DirectStore"),
            ProjectPropertyWriter::PerConfiguration(_) => f.write_str("PerConfiguration"),
        }
    }
}

impl ProjectPropertyWriter {
    /// Resolves the project in the solution, probes its capability flag and
    /// binds the matching strategy.
    ///
    /// Fails with [`PropertyError::ProjectResolution`] when the project is
    /// not loaded in the solution or when the selected backing interface
    /// cannot be bound; no writer is produced in that case.
    pub fn create(
        project: &dyn ProjectHandle,
        services: &HostServices,
        cfg: &WriterConfig,
    ) -> Result<Self, PropertyError> {
        let unique_name = project.unique_name();
        let hierarchy = services
            .solution
            .resolve_project(unique_name)
            .map_err(|source| PropertyError::ProjectResolution {
                unique_name: unique_name.to_string(),
                source,
            })?;

        if hierarchy.is_capability_match(&cfg.capability_flag) {
            tracing::debug!(
                project = unique_name,
                flag = %cfg.capability_flag,
                "capability matched, binding direct build property store"
            );
            let store =
                hierarchy
                    .build_property_store()
                    .map_err(|source| PropertyError::ProjectResolution {
                        unique_name: unique_name.to_string(),
                        source,
                    })?;
            Ok(Self::DirectStore(store))
        } else {
            tracing::debug!(
                project = unique_name,
                flag = %cfg.capability_flag,
                "no capability match, binding configuration manager"
            );
            let manager =
                project
                    .configuration_manager()
                    .map_err(|source| PropertyError::ProjectResolution {
                        unique_name: unique_name.to_string(),
                        source,
                    })?;
            Ok(Self::PerConfiguration(manager))
        }
    }

    /// Writes one property under whichever name the bound strategy uses.
    ///
    /// Direct store: a single project-file-scoped write under
    /// `build_property_name`. Per configuration: `configuration_property_name`
    /// is overwritten on every configuration, in host enumeration order. A
    /// failure mid-iteration aborts without rollback; the error records how
    /// far the write got.
    ///
    /// Callers must not invoke this concurrently for the same project;
    /// serialization of project mutation is owned by the host.
    pub fn set_property(
        &self,
        build_property_name: &str,
        configuration_property_name: &str,
        value: &str,
    ) -> Result<(), PropertyError> {
        match self {
            Self::DirectStore(store) => {
                store
                    .set_value(build_property_name, PersistScope::ProjectFile, value)
                    .map_err(|source| PropertyError::PropertyStorage {
                        name: build_property_name.to_string(),
                        source,
                    })?;
                tracing::info!(property = build_property_name, "project property written");
                Ok(())
            }
            Self::PerConfiguration(manager) => {
                let configurations = manager
                    .configurations()
                    .map_err(|source| PropertyError::ConfigurationEnumeration { source })?;
                let total = configurations.len();

                for (updated, configuration) in configurations.iter().enumerate() {
                    if let Err(source) =
                        configuration.set_property(configuration_property_name, value)
                    {
                        tracing::warn!(
                            configuration = configuration.name(),
                            updated,
                            total,
                            "aborting mid-write, earlier configurations keep the new value"
                        );
                        return Err(PropertyError::ConfigurationWrite {
                            configuration: configuration.name().to_string(),
                            updated,
                            total,
                            source,
                        });
                    }
                }

                tracing::info!(
                    property = configuration_property_name,
                    configurations = total,
                    "configuration property written"
                );
                Ok(())
            }
        }
    }

    /// [`Self::set_property`] with a well-known name pair.
    pub fn set_pair(&self, pair: PropertyNamePair<'_>, value: &str) -> Result<(), PropertyError> {
        self.set_property(pair.build, pair.configuration, value)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use anyhow::anyhow;

    use super::*;
    use crate::host::{Configuration, ProjectHierarchy, SolutionResolver};

    struct FakeStore {
        writes: Mutex<Vec<(String, PersistScope, String)>>,
    }

    impl FakeStore {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                writes: Mutex::new(Vec::new()),
            })
        }
    }

    impl BuildPropertyStore for FakeStore {
        fn set_value(&self, name: &str, scope: PersistScope, value: &str) -> anyhow::Result<()> {
            self.writes
                .lock()
                .unwrap()
                .push((name.to_string(), scope, value.to_string()));
            Ok(())
        }
    }

    struct FakeConfiguration {
        name: String,
        properties: Mutex<Vec<(String, String)>>,
    }

    impl FakeConfiguration {
        fn new(name: &str) -> Arc<Self> {
            Arc::new(Self {
                name: name.to_string(),
                properties: Mutex::new(Vec::new()),
            })
        }
    }

    impl Configuration for FakeConfiguration {
        fn name(&self) -> &str {
            &self.name
        }

        fn set_property(&self, name: &str, value: &str) -> anyhow::Result<()> {
            self.properties
                .lock()
                .unwrap()
                .push((name.to_string(), value.to_string()));
            Ok(())
        }
    }

    struct FakeManager {
        configurations: Vec<Arc<FakeConfiguration>>,
    }

    impl ConfigurationManager for FakeManager {
        fn configurations(&self) -> anyhow::Result<Vec<Arc<dyn Configuration>>> {
            Ok(self
                .configurations
                .iter()
                .map(|c| Arc::clone(c) as Arc<dyn Configuration>)
                .collect())
        }
    }

    struct FakeHierarchy {
        capabilities: Vec<String>,
        store: Arc<FakeStore>,
    }

    impl ProjectHierarchy for FakeHierarchy {
        fn is_capability_match(&self, flag: &str) -> bool {
            self.capabilities.iter().any(|c| c == flag)
        }

        fn build_property_store(&self) -> anyhow::Result<Arc<dyn BuildPropertyStore>> {
            Ok(Arc::clone(&self.store) as Arc<dyn BuildPropertyStore>)
        }
    }

    struct FakeSolution {
        hierarchy: Option<Arc<FakeHierarchy>>,
    }

    impl SolutionResolver for FakeSolution {
        fn resolve_project(&self, unique_name: &str) -> anyhow::Result<Arc<dyn ProjectHierarchy>> {
            self.hierarchy
                .clone()
                .map(|h| h as Arc<dyn ProjectHierarchy>)
                .ok_or_else(|| anyhow!("project '{unique_name}' is not loaded"))
        }
    }

    struct FakeProject {
        unique_name: String,
        configurations: Vec<Arc<FakeConfiguration>>,
    }

    impl ProjectHandle for FakeProject {
        fn unique_name(&self) -> &str {
            &self.unique_name
        }

        fn configuration_manager(&self) -> anyhow::Result<Arc<dyn ConfigurationManager>> {
            Ok(Arc::new(FakeManager {
                configurations: self.configurations.clone(),
            }))
        }
    }

    fn services_with(hierarchy: Option<Arc<FakeHierarchy>>) -> HostServices {
        HostServices::new(Arc::new(FakeSolution { hierarchy }))
    }

    #[test]
    fn capability_match_selects_direct_store() {
        let hierarchy = Arc::new(FakeHierarchy {
            capabilities: vec!["CPS".to_string()],
            store: FakeStore::new(),
        });
        let project = FakeProject {
            unique_name: "App\\App.csproj".to_string(),
            configurations: vec![],
        };

        let writer = ProjectPropertyWriter::create(
            &project,
            &services_with(Some(hierarchy)),
            &WriterConfig::default(),
        )
        .unwrap();

        assert!(matches!(writer, ProjectPropertyWriter::DirectStore(_)));
    }

    #[test]
    fn missing_capability_selects_per_configuration() {
        let hierarchy = Arc::new(FakeHierarchy {
            capabilities: vec![],
            store: FakeStore::new(),
        });
        let project = FakeProject {
            unique_name: "Legacy\\Legacy.csproj".to_string(),
            configurations: vec![FakeConfiguration::new("Debug")],
        };

        let writer = ProjectPropertyWriter::create(
            &project,
            &services_with(Some(hierarchy)),
            &WriterConfig::default(),
        )
        .unwrap();

        assert!(matches!(writer, ProjectPropertyWriter::PerConfiguration(_)));
    }

    #[test]
    fn direct_store_writes_build_name_at_project_file_scope() {
        let store = FakeStore::new();
        let writer =
            ProjectPropertyWriter::DirectStore(Arc::clone(&store) as Arc<dyn BuildPropertyStore>);

        writer
            .set_property("LangVersion", "LanguageVersion", "7.3")
            .unwrap();

        let writes = store.writes.lock().unwrap();
        assert_eq!(
            *writes,
            vec![(
                "LangVersion".to_string(),
                PersistScope::ProjectFile,
                "7.3".to_string()
            )]
        );
    }

    #[test]
    fn per_configuration_writes_configuration_name_everywhere() {
        let debug = FakeConfiguration::new("Debug");
        let release = FakeConfiguration::new("Release");
        let writer = ProjectPropertyWriter::PerConfiguration(Arc::new(FakeManager {
            configurations: vec![Arc::clone(&debug), Arc::clone(&release)],
        }));

        writer
            .set_property("LangVersion", "LanguageVersion", "7.3")
            .unwrap();

        for configuration in [debug, release] {
            let properties = configuration.properties.lock().unwrap();
            assert_eq!(
                *properties,
                vec![("LanguageVersion".to_string(), "7.3".to_string())]
            );
        }
    }

    #[test]
    fn unresolvable_project_propagates_resolution_failure() {
        let project = FakeProject {
            unique_name: "Gone\\Gone.csproj".to_string(),
            configurations: vec![],
        };

        let err =
            ProjectPropertyWriter::create(&project, &services_with(None), &WriterConfig::default())
                .unwrap_err();

        assert!(matches!(err, PropertyError::ProjectResolution { .. }));
    }

    #[test]
    fn custom_capability_flag_is_honored() {
        let hierarchy = Arc::new(FakeHierarchy {
            capabilities: vec!["MPS".to_string()],
            store: FakeStore::new(),
        });
        let project = FakeProject {
            unique_name: "App\\App.csproj".to_string(),
            configurations: vec![],
        };
        let cfg = WriterConfig {
            capability_flag: "MPS".to_string(),
            ..WriterConfig::default()
        };

        let writer =
            ProjectPropertyWriter::create(&project, &services_with(Some(hierarchy)), &cfg)
                .unwrap();

        assert!(matches!(writer, ProjectPropertyWriter::DirectStore(_)));
    }
}
