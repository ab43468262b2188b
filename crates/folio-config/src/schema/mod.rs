//! Configuration schema types for folio.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod assistant;
mod chat;
mod logging;

pub use assistant::*;
pub use chat::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for folio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct FolioConfig {
    pub assistant: AssistantConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
