//! Content-type keyed factories for readers and writers.

use indexmap::IndexMap;

use crate::{Parsable, ParsableFactory, ParseNode, SerializationError, SerializationWriter};

pub trait ParseNodeFactory {
    /// The cleaned content type this factory handles, e.g. `application/json`.
    fn valid_content_type(&self) -> &'static str;

    fn get_root_parse_node(
        &self,
        content_type: &str,
        content: &[u8],
    ) -> Result<Box<dyn ParseNode>, SerializationError>;
}

pub trait SerializationWriterFactory {
    fn valid_content_type(&self) -> &'static str;

    fn get_serialization_writer(
        &self,
        content_type: &str,
    ) -> Result<Box<dyn SerializationWriter>, SerializationError>;
}

/// Lowercases, drops parameters and collapses vendor types:
/// `Application/vnd.foo+JSON; charset=utf-8` becomes `application/json`.
pub fn clean_content_type(content_type: &str) -> String {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match essence.split_once('/') {
        Some((top, sub)) => match sub.rsplit_once('+') {
            Some((_, suffix)) => format!("{top}/{suffix}"),
            None => essence,
        },
        None => essence,
    }
}

#[derive(Default)]
pub struct SerializationRegistry {
    parse_node_factories: IndexMap<String, Box<dyn ParseNodeFactory>>,
    writer_factories: IndexMap<String, Box<dyn SerializationWriterFactory>>,
}

impl SerializationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a reader factory under its content type, replacing any
    /// previous one.
    pub fn register_parse_node_factory(&mut self, factory: impl ParseNodeFactory + 'static) {
        self.parse_node_factories
            .insert(factory.valid_content_type().to_owned(), Box::new(factory));
    }

    pub fn register_serialization_writer_factory(
        &mut self,
        factory: impl SerializationWriterFactory + 'static,
    ) {
        self.writer_factories
            .insert(factory.valid_content_type().to_owned(), Box::new(factory));
    }

    pub fn content_types(&self) -> impl Iterator<Item = &str> + '_ {
        self.parse_node_factories.keys().map(String::as_str)
    }

    pub fn get_root_parse_node(
        &self,
        content_type: &str,
        content: &[u8],
    ) -> Result<Box<dyn ParseNode>, SerializationError> {
        let cleaned = clean_content_type(content_type);
        let factory = self
            .parse_node_factories
            .get(&cleaned)
            .ok_or_else(|| SerializationError::UnsupportedContentType(content_type.to_owned()))?;
        tracing::debug!(content_type, resolved = %cleaned, "resolved parse node factory");
        factory.get_root_parse_node(&cleaned, content)
    }

    pub fn get_serialization_writer(
        &self,
        content_type: &str,
    ) -> Result<Box<dyn SerializationWriter>, SerializationError> {
        let cleaned = clean_content_type(content_type);
        let factory = self
            .writer_factories
            .get(&cleaned)
            .ok_or_else(|| SerializationError::UnsupportedContentType(content_type.to_owned()))?;
        tracing::debug!(content_type, resolved = %cleaned, "resolved serialization writer factory");
        factory.get_serialization_writer(&cleaned)
    }

    /// Decodes `content` and builds a model through `factory`. A `null`
    /// payload is rejected.
    pub fn deserialize<T: Parsable>(
        &self,
        content_type: &str,
        content: &[u8],
        factory: ParsableFactory<T>,
    ) -> Result<T, SerializationError> {
        let root = self.get_root_parse_node(content_type, content)?;
        root.get_object_value(factory)?
            .ok_or(SerializationError::TypeMismatch {
                expected: "object",
                found: "null",
            })
    }

    pub fn serialize(&self, content_type: &str, model: &dyn Parsable) -> Result<Vec<u8>, SerializationError> {
        let mut writer = self.get_serialization_writer(content_type)?;
        writer.write_object_value("", Some(model))?;
        writer.get_serialized_content()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleans_content_types() {
        assert_eq!(clean_content_type("application/json"), "application/json");
        assert_eq!(
            clean_content_type("Application/JSON; charset=utf-8"),
            "application/json"
        );
        assert_eq!(
            clean_content_type("application/vnd.ms-graph+json;odata.metadata=minimal"),
            "application/json"
        );
        assert_eq!(clean_content_type("text/plain"), "text/plain");
        assert_eq!(clean_content_type(""), "");
    }

    #[test]
    fn empty_registry_rejects_everything() {
        let registry = SerializationRegistry::new();
        assert_eq!(registry.content_types().count(), 0);
        assert!(matches!(
            registry.get_serialization_writer("application/json"),
            Err(SerializationError::UnsupportedContentType(ct)) if ct == "application/json"
        ));
        assert!(matches!(
            registry.get_root_parse_node("text/plain", b"{}"),
            Err(SerializationError::UnsupportedContentType(_))
        ));
    }
}
