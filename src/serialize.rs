//! Serializer boundary
//!
//! The normalizer hands each selected item to an [`ItemSerializer`] and
//! assembles the returned representations without interpreting them. The
//! actual serializer lives outside this crate (resource serialization is a
//! framework concern); [`IdentitySerializer`] is a pass-through
//! implementation for tests and raw-value pipelines.

use serde_json::Value;

use crate::error::Result;
use crate::types::Operation;

/// Context passed to the serializer for every item of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializerContext {
    /// Resource name being serialized
    pub resource: String,
    /// Whether this is a collection operation
    pub collection: bool,
}

impl SerializerContext {
    /// Build the context for an operation
    pub fn for_operation(operation: &Operation) -> Self {
        Self {
            resource: operation.resource.clone(),
            collection: operation.is_collection(),
        }
    }
}

/// Transforms one raw item into its normalized representation
pub trait ItemSerializer: Send + Sync {
    /// Serialize a single item
    ///
    /// Called once per selected item; the result is embedded verbatim in
    /// the output structure.
    fn serialize(&self, item: &Value, context: &SerializerContext) -> Result<Value>;
}

/// Pass-through serializer returning each item unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentitySerializer;

impl ItemSerializer for IdentitySerializer {
    fn serialize(&self, item: &Value, _context: &SerializerContext) -> Result<Value> {
        Ok(item.clone())
    }
}

impl<F> ItemSerializer for F
where
    F: Fn(&Value, &SerializerContext) -> Result<Value> + Send + Sync,
{
    fn serialize(&self, item: &Value, context: &SerializerContext) -> Result<Value> {
        self(item, context)
    }
}
