mod handlers;
pub mod models;

use async_trait::async_trait;
use axum::{routing::get, Router};
use campus_kernel::{AppContext, InitCtx, Module};
use serde_json::json;

use crate::openapi::crud_paths;

/// Student records, mounted under `/api/students`
pub struct StudentsModule;

impl StudentsModule {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StudentsModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for StudentsModule {
    fn name(&self) -> &'static str {
        "students"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            backend = ctx.app.store.backend(),
            collection = handlers::COLLECTION,
            "students module initialized"
        );
        Ok(())
    }

    fn routes(&self, ctx: AppContext) -> Router {
        Router::new()
            .route(
                "/",
                get(handlers::list_students).post(handlers::create_student),
            )
            .route(
                "/{id}",
                get(handlers::get_student)
                    .put(handlers::update_student)
                    .delete(handlers::delete_student),
            )
            .with_state(ctx)
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": crud_paths("Students", "Student", "NewStudent", "StudentPatch"),
            "components": {
                "schemas": {
                    "Student": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string", "description": "Record identifier" },
                            "name": { "type": "string" },
                            "age": { "type": "integer", "format": "int64" },
                            "email": { "type": "string" },
                            "course": { "type": "string" },
                            "grade": { "type": "string", "description": "Empty when not graded" }
                        },
                        "required": ["id", "name", "age", "email", "course", "grade"]
                    },
                    "NewStudent": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string" },
                            "age": { "type": "integer", "format": "int64" },
                            "email": { "type": "string" },
                            "course": { "type": "string" },
                            "grade": { "type": "string" }
                        },
                        "required": ["name", "age", "email", "course"]
                    },
                    "StudentPatch": {
                        "type": "object",
                        "description": "Only supplied fields are written; at least one is required",
                        "properties": {
                            "name": { "type": "string" },
                            "age": { "type": "integer", "format": "int64" },
                            "email": { "type": "string" },
                            "course": { "type": "string" },
                            "grade": { "type": "string" }
                        }
                    }
                }
            }
        }))
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "students module stopped");
        Ok(())
    }
}

/// Create a new instance of the students module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(StudentsModule::new())
}
