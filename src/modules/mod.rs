pub mod books;
pub mod students;

use campus_kernel::ModuleRegistry;
use serde::{Deserialize, Serialize};

/// Register all record modules with the registry
pub fn register_all(registry: &mut ModuleRegistry) {
    registry.register(students::create_module());
    registry.register(books::create_module());
}

/// Body returned by a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deleted {
    pub message: String,
}

impl Deleted {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
