use async_trait::async_trait;
use axum::Router;

use crate::context::AppContext;

/// Context provided to modules during initialization
pub struct InitCtx<'a> {
    pub settings: &'a crate::settings::Settings,
    pub app: &'a AppContext,
}

/// Trait implemented by every mountable campus module
#[async_trait]
pub trait Module: Sync + Send {
    /// Unique name for this module, also its mount point under `/api`
    fn name(&self) -> &'static str;

    /// Called once at startup, before the server accepts connections
    async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Return the Axum router for this module's routes
    /// Routes will be mounted under `/api/{module_name}`
    fn routes(&self, _ctx: AppContext) -> Router {
        Router::new()
    }

    /// Return OpenAPI specification fragment for this module as JSON
    /// Paths are relative to the module mount point and get merged with other modules' specs
    fn openapi(&self) -> Option<serde_json::Value> {
        None
    }

    /// Called after the server has shut down
    async fn stop(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
