use std::sync::Arc;

use crate::config::WriterConfig;
use crate::error::PropertyError;
use crate::host::{ProjectHandle, SolutionResolver};
use crate::writer::ProjectPropertyWriter;

/// Host services injected by the embedding extension.
#[derive(Clone)]
pub struct HostServices {
    pub solution: Arc<dyn SolutionResolver>,
}

impl HostServices {
    pub fn new(solution: Arc<dyn SolutionResolver>) -> Self {
        Self { solution }
    }
}

/// Configuration plus host services, threaded through property updates.
#[derive(Clone)]
pub struct WriterContext {
    cfg: WriterConfig,
    services: HostServices,
}

impl WriterContext {
    pub fn new(cfg: WriterConfig, services: HostServices) -> Self {
        Self { cfg, services }
    }

    pub fn cfg(&self) -> &WriterConfig {
        &self.cfg
    }

    pub fn services(&self) -> &HostServices {
        &self.services
    }

    pub fn with_config(&self, cfg: WriterConfig) -> Self {
        Self {
            cfg,
            services: self.services.clone(),
        }
    }

    /// Builds a fresh writer for one property update on the given project.
    pub fn create_writer(
        &self,
        project: &dyn ProjectHandle,
    ) -> Result<ProjectPropertyWriter, PropertyError> {
        ProjectPropertyWriter::create(project, &self.services, &self.cfg)
    }
}
