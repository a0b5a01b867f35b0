//! In-memory host adapters.
//!
//! Stand-ins for a live IDE host. An embedding extension injects the real
//! solution model; these back offline harnesses and tests. The store keeps a
//! write journal and configurations support failure injection, so the
//! writer's externally visible behavior can be asserted without a host.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use anyhow::anyhow;

use projprops_core::api::{
    BuildPropertyStore, Configuration, ConfigurationManager, MemoryResolverConfig, PersistScope,
    ProjectHandle, ProjectHierarchy, SolutionResolver,
};

/// One recorded direct-store write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedWrite {
    pub name: String,
    pub scope: PersistScope,
    pub value: String,
}

#[derive(Default)]
pub struct MemoryPropertyStore {
    values: RwLock<HashMap<(PersistScope, String), String>>,
    journal: Mutex<Vec<RecordedWrite>>,
}

impl MemoryPropertyStore {
    pub fn value(&self, scope: PersistScope, name: &str) -> Option<String> {
        self.values
            .read()
            .ok()?
            .get(&(scope, name.to_string()))
            .cloned()
    }

    pub fn writes(&self) -> Vec<RecordedWrite> {
        self.journal.lock().map(|j| j.clone()).unwrap_or_default()
    }

    pub fn write_count(&self) -> usize {
        self.journal.lock().map(|j| j.len()).unwrap_or(0)
    }

    /// Snapshot of the persisted state, for end-state comparisons.
    pub fn snapshot(&self) -> HashMap<(PersistScope, String), String> {
        self.values.read().map(|v| v.clone()).unwrap_or_default()
    }
}

impl BuildPropertyStore for MemoryPropertyStore {
    fn set_value(&self, name: &str, scope: PersistScope, value: &str) -> anyhow::Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|_| anyhow!("property store lock poisoned"))?;
        values.insert((scope, name.to_string()), value.to_string());

        let mut journal = self
            .journal
            .lock()
            .map_err(|_| anyhow!("property store journal lock poisoned"))?;
        journal.push(RecordedWrite {
            name: name.to_string(),
            scope,
            value: value.to_string(),
        });
        Ok(())
    }
}

pub struct MemoryConfiguration {
    name: String,
    properties: RwLock<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryConfiguration {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            properties: RwLock::new(HashMap::new()),
            fail_writes: AtomicBool::new(false),
        })
    }

    /// Makes every subsequent write on this configuration fail, to exercise
    /// the writer's mid-iteration abort.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn property(&self, name: &str) -> Option<String> {
        self.properties.read().ok()?.get(name).cloned()
    }
}

impl Configuration for MemoryConfiguration {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_property(&self, name: &str, value: &str) -> anyhow::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(anyhow!(
                "injected write failure on configuration '{}'",
                self.name
            ));
        }
        let mut properties = self
            .properties
            .write()
            .map_err(|_| anyhow!("configuration lock poisoned"))?;
        properties.insert(name.to_string(), value.to_string());
        Ok(())
    }
}

struct MemoryConfigurationManager {
    configurations: Vec<Arc<MemoryConfiguration>>,
    fail_enumeration: Arc<AtomicBool>,
}

impl ConfigurationManager for MemoryConfigurationManager {
    fn configurations(&self) -> anyhow::Result<Vec<Arc<dyn Configuration>>> {
        if self.fail_enumeration.load(Ordering::SeqCst) {
            return Err(anyhow!("injected configuration enumeration failure"));
        }
        Ok(self
            .configurations
            .iter()
            .map(|c| Arc::clone(c) as Arc<dyn Configuration>)
            .collect())
    }
}

/// A project registered with a [`MemorySolution`].
///
/// Implements both the caller-facing handle and the hierarchy view of the
/// same project, the way a live host exposes one underlying object through
/// two interfaces.
pub struct MemoryProject {
    unique_name: String,
    capabilities: Vec<String>,
    store: Arc<MemoryPropertyStore>,
    configurations: Vec<Arc<MemoryConfiguration>>,
    fail_enumeration: Arc<AtomicBool>,
}

impl MemoryProject {
    pub fn new(unique_name: &str) -> Self {
        Self {
            unique_name: unique_name.to_string(),
            capabilities: Vec::new(),
            store: Arc::new(MemoryPropertyStore::default()),
            configurations: Vec::new(),
            fail_enumeration: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_capability(mut self, flag: &str) -> Self {
        self.capabilities.push(flag.to_string());
        self
    }

    pub fn with_configuration(mut self, name: &str) -> Self {
        self.configurations.push(MemoryConfiguration::new(name));
        self
    }

    pub fn store(&self) -> Arc<MemoryPropertyStore> {
        Arc::clone(&self.store)
    }

    pub fn configuration(&self, name: &str) -> Option<Arc<MemoryConfiguration>> {
        self.configurations
            .iter()
            .find(|c| c.name() == name)
            .cloned()
    }

    pub fn configurations(&self) -> &[Arc<MemoryConfiguration>] {
        &self.configurations
    }

    /// Makes configuration enumeration fail on the next writer call.
    pub fn fail_configuration_enumeration(&self, fail: bool) {
        self.fail_enumeration.store(fail, Ordering::SeqCst);
    }
}

impl ProjectHandle for MemoryProject {
    fn unique_name(&self) -> &str {
        &self.unique_name
    }

    fn configuration_manager(&self) -> anyhow::Result<Arc<dyn ConfigurationManager>> {
        Ok(Arc::new(MemoryConfigurationManager {
            configurations: self.configurations.clone(),
            fail_enumeration: Arc::clone(&self.fail_enumeration),
        }))
    }
}

impl ProjectHierarchy for MemoryProject {
    fn is_capability_match(&self, flag: &str) -> bool {
        self.capabilities.iter().any(|c| c == flag)
    }

    fn build_property_store(&self) -> anyhow::Result<Arc<dyn BuildPropertyStore>> {
        Ok(Arc::clone(&self.store) as Arc<dyn BuildPropertyStore>)
    }
}

/// Solution model holding registered [`MemoryProject`]s.
pub struct MemorySolution {
    cfg: MemoryResolverConfig,
    projects: RwLock<HashMap<String, Arc<MemoryProject>>>,
}

impl MemorySolution {
    pub fn new(cfg: MemoryResolverConfig) -> Self {
        Self {
            cfg,
            projects: RwLock::new(HashMap::new()),
        }
    }

    pub fn add_project(&self, project: MemoryProject) -> Arc<MemoryProject> {
        let project = Arc::new(project);
        if let Ok(mut projects) = self.projects.write() {
            projects.insert(project.unique_name.clone(), Arc::clone(&project));
        }
        tracing::debug!(project = %project.unique_name, "project registered in memory solution");
        project
    }
}

impl SolutionResolver for MemorySolution {
    fn resolve_project(&self, unique_name: &str) -> anyhow::Result<Arc<dyn ProjectHierarchy>> {
        let projects = self
            .projects
            .read()
            .map_err(|_| anyhow!("solution lock poisoned"))?;

        let found = if self.cfg.case_insensitive {
            projects
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(unique_name))
                .map(|(_, project)| Arc::clone(project))
        } else {
            projects.get(unique_name).cloned()
        };

        found
            .map(|project| project as Arc<dyn ProjectHierarchy>)
            .ok_or_else(|| anyhow!("project '{unique_name}' is not loaded in the solution"))
    }
}
