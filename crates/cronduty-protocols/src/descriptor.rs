//! Process descriptor types.

use serde::{Deserialize, Serialize};

/// Registration metadata for a scheduling operation.
///
/// Hosting frameworks use this to advertise the operation and its
/// input/output schemas; the core itself only constructs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Unique identifier for the operation.
    pub id: String,

    /// Human-readable name.
    pub name: String,

    /// Description of what the operation does.
    pub description: String,

    /// JSON Schema for the inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs_schema: Option<serde_json::Value>,

    /// JSON Schema for the outputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs_schema: Option<serde_json::Value>,
}

impl ProcessDescriptor {
    /// Create a new descriptor.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            inputs_schema: None,
            outputs_schema: None,
        }
    }

    /// Set the inputs schema.
    pub fn with_inputs_schema(mut self, schema: serde_json::Value) -> Self {
        self.inputs_schema = Some(schema);
        self
    }

    /// Set the outputs schema.
    pub fn with_outputs_schema(mut self, schema: serde_json::Value) -> Self {
        self.outputs_schema = Some(schema);
        self
    }
}
