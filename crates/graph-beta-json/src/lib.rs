//! JSON wire format for Graph beta model bindings.

mod factory;
mod parse_node;
mod writer;

pub use factory::{JsonParseNodeFactory, JsonSerializationWriterFactory};
pub use parse_node::JsonParseNode;
pub use writer::JsonSerializationWriter;

use graph_beta_abstractions::{
    Parsable, ParsableFactory, ParseNode, SerializationError, SerializationRegistry, SerializationWriter,
};
use serde_json::Value;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Registry with the JSON reader and writer registered.
pub fn default_registry() -> SerializationRegistry {
    let mut registry = SerializationRegistry::new();
    registry.register_parse_node_factory(JsonParseNodeFactory);
    registry.register_serialization_writer_factory(JsonSerializationWriterFactory::new());
    registry
}

/// Builds a model from a JSON document. A `null` document is rejected.
pub fn deserialize<T: Parsable>(content: &[u8], factory: ParsableFactory<T>) -> Result<T, SerializationError> {
    let root = JsonParseNode::from_slice(content)?;
    from_node(&root, factory)
}

pub fn deserialize_value<T: Parsable>(value: &Value, factory: ParsableFactory<T>) -> Result<T, SerializationError> {
    from_node(&JsonParseNode::borrowed(value), factory)
}

fn from_node<T: Parsable>(root: &dyn ParseNode, factory: ParsableFactory<T>) -> Result<T, SerializationError> {
    root.get_object_value(factory)?
        .ok_or(SerializationError::TypeMismatch {
            expected: "object",
            found: "null",
        })
}

pub fn serialize(model: &dyn Parsable) -> Result<Vec<u8>, SerializationError> {
    let mut writer = JsonSerializationWriter::new();
    writer.write_object_value("", Some(model))?;
    writer.get_serialized_content()
}

pub fn serialize_to_value(model: &dyn Parsable) -> Result<Value, SerializationError> {
    let mut writer = JsonSerializationWriter::new();
    writer.write_object_value("", Some(model))?;
    writer
        .take_value()?
        .ok_or_else(|| SerializationError::WriterState("nothing was written".to_string()))
}
