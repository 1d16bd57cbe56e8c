//! Dependency graph for a host application.
//!
//! Built once at startup: one transport, one API client and one shared
//! repository. Screen controllers are produced fresh on demand and receive
//! the repository through their constructor.

use std::sync::Arc;

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::controller::{DetailController, ListController};
use crate::error::ApiError;
use crate::repository::CharacterRepository;
use crate::transport::{ReqwestTransport, Transport};

#[derive(Debug, Clone)]
pub struct AppGraph {
    repository: Arc<CharacterRepository>,
}

impl AppGraph {
    /// Wire the graph over the production HTTP transport.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::with_transport(&config.base_url, Arc::new(transport)))
    }

    /// Wire the graph over any transport.
    pub fn with_transport(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        let api = ApiClient::new(base_url, transport);
        Self {
            repository: Arc::new(CharacterRepository::new(api)),
        }
    }

    pub fn repository(&self) -> Arc<CharacterRepository> {
        Arc::clone(&self.repository)
    }

    /// A new list controller; starts loading immediately.
    pub fn list_controller(&self) -> ListController {
        ListController::new(self.repository())
    }

    pub fn detail_controller(&self) -> DetailController {
        DetailController::new(self.repository())
    }
}
