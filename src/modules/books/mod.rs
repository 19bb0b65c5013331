mod handlers;
pub mod models;

use async_trait::async_trait;
use axum::{routing::get, Router};
use campus_kernel::{AppContext, InitCtx, Module};
use serde_json::json;

use crate::openapi::crud_paths;

/// Book records, mounted under `/api/books`
pub struct BooksModule;

impl BooksModule {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for BooksModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            backend = ctx.app.store.backend(),
            collection = handlers::COLLECTION,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self, ctx: AppContext) -> Router {
        Router::new()
            .route("/", get(handlers::list_books).post(handlers::create_book))
            .route(
                "/{id}",
                get(handlers::get_book)
                    .put(handlers::update_book)
                    .delete(handlers::delete_book),
            )
            .with_state(ctx)
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": crud_paths("Books", "Book", "NewBook", "BookPatch"),
            "components": {
                "schemas": {
                    "Book": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string", "description": "Record identifier" },
                            "title": { "type": "string" },
                            "author": { "type": "string" },
                            "isbn": { "type": "string" },
                            "year": { "type": "integer", "format": "int64" },
                            "available": { "type": "boolean" }
                        },
                        "required": ["id", "title", "author", "isbn", "year", "available"]
                    },
                    "NewBook": {
                        "type": "object",
                        "properties": {
                            "title": { "type": "string" },
                            "author": { "type": "string" },
                            "isbn": { "type": "string" },
                            "year": { "type": "integer", "format": "int64" },
                            "available": { "type": "boolean", "default": true }
                        },
                        "required": ["title", "author", "isbn", "year"]
                    },
                    "BookPatch": {
                        "type": "object",
                        "description": "Only supplied fields are written; at least one is required",
                        "properties": {
                            "title": { "type": "string" },
                            "author": { "type": "string" },
                            "isbn": { "type": "string" },
                            "year": { "type": "integer", "format": "int64" },
                            "available": { "type": "boolean" }
                        }
                    }
                }
            }
        }))
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

/// Create a new instance of the books module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BooksModule::new())
}
