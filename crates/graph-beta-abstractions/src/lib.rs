//! Serialization abstractions for Graph beta models.
//!
//! Models are decoupled from the wire format: they read through a
//! [`ParseNode`] and write through a [`SerializationWriter`], and each
//! format supplies its own implementation of both.

pub mod enum_value;
pub mod error;
pub mod factory;
pub mod iso_duration;
pub mod parsable;
pub mod parse_node;
pub mod serialization_writer;

pub use enum_value::{serialize_enum_values, unknown_enum_value, EnumValue};
pub use error::SerializationError;
pub use factory::{
    clean_content_type, ParseNodeFactory, SerializationRegistry, SerializationWriterFactory,
};
pub use iso_duration::IsoDuration;
pub use parsable::{
    assign_fields, AdditionalData, AdditionalDataHolder, FieldDeserializer, FieldDeserializers,
    Parsable, ParsableFactory,
};
pub use parse_node::{ParseNode, Primitive};
pub use serialization_writer::SerializationWriter;

/// Wire key carrying the concrete type of a polymorphic object.
pub const ODATA_TYPE_KEY: &str = "@odata.type";
