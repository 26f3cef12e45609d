//! The contract every model implements, plus the field-deserializer tables
//! that drive decoding.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

use crate::{ParseNode, SerializationError, SerializationWriter};

/// Wire fields a model has no named property for, in payload order.
pub type AdditionalData = serde_json::Map<String, Value>;

/// Creates an empty model for a node, possibly choosing a variant from its
/// discriminator. Field values are assigned afterwards.
pub type ParsableFactory<T> = fn(&dyn ParseNode) -> Result<T, SerializationError>;

/// Reads one wire field into a model.
pub type FieldDeserializer<T> = Box<dyn Fn(&mut T, &dyn ParseNode) -> Result<(), SerializationError>>;

pub trait Parsable {
    /// Fills fields from an object node. A field that is missing or `null`
    /// on the wire keeps whatever value it already had.
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError>;

    /// Writes fields into the current object of `writer`, base fields first.
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError>;
}

pub trait AdditionalDataHolder {
    fn additional_data(&self) -> &AdditionalData;
    fn additional_data_mut(&mut self) -> &mut AdditionalData;

    fn set_additional_data(&mut self, value: AdditionalData) {
        *self.additional_data_mut() = value;
    }
}

/// Ordered table from wire key to deserializer.
pub struct FieldDeserializers<T> {
    entries: IndexMap<&'static str, FieldDeserializer<T>>,
}

impl<T> Default for FieldDeserializers<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T> fmt::Debug for FieldDeserializers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.keys()).finish()
    }
}

impl<T: 'static> FieldDeserializers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a subtype's table with every entry of its supertype's.
    /// `project` reaches the embedded supertype inside the subtype.
    pub fn inherit<B: 'static>(base: FieldDeserializers<B>, project: fn(&mut T) -> &mut B) -> Self {
        let entries = base
            .entries
            .into_iter()
            .map(|(key, deserializer)| {
                let lifted: FieldDeserializer<T> =
                    Box::new(move |model: &mut T, node: &dyn ParseNode| deserializer(project(model), node));
                (key, lifted)
            })
            .collect();
        Self { entries }
    }

    /// Adds a key, or replaces an inherited one in place.
    pub fn insert<F>(&mut self, key: &'static str, deserializer: F)
    where
        F: Fn(&mut T, &dyn ParseNode) -> Result<(), SerializationError> + 'static,
    {
        self.entries.insert(key, Box::new(deserializer));
    }

    pub fn get(&self, key: &str) -> Option<&FieldDeserializer<T>> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Walks the fields of an object node in payload order. Mapped keys go
/// through their deserializer; the rest are kept verbatim in additional data.
pub fn assign_fields<T: AdditionalDataHolder + 'static>(
    model: &mut T,
    deserializers: &FieldDeserializers<T>,
    node: &dyn ParseNode,
) -> Result<(), SerializationError> {
    let Some(fields) = node.object_fields()? else {
        return Ok(());
    };
    for (key, child) in fields {
        match deserializers.get(key) {
            Some(deserialize) => deserialize(model, child.as_ref())?,
            None => {
                tracing::trace!(key, "keeping unmapped field in additional data");
                let value = child.get_untyped_value()?;
                model.additional_data_mut().insert(key.to_owned(), value);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Base {
        name: Option<String>,
    }

    #[derive(Default)]
    struct Sub {
        base: Base,
        size: Option<i64>,
    }

    fn base_table() -> FieldDeserializers<Base> {
        let mut table = FieldDeserializers::new();
        table.insert("name", |m: &mut Base, n: &dyn ParseNode| {
            m.name = n.get_string_value()?;
            Ok(())
        });
        table.insert("id", |_: &mut Base, _: &dyn ParseNode| Ok(()));
        table
    }

    #[test]
    fn inherit_keeps_base_keys_first() {
        let mut table: FieldDeserializers<Sub> =
            FieldDeserializers::inherit(base_table(), |m: &mut Sub| &mut m.base);
        table.insert("size", |m: &mut Sub, n: &dyn ParseNode| {
            m.size = n.get_int64_value()?;
            Ok(())
        });
        table.insert("name", |_: &mut Sub, _: &dyn ParseNode| Ok(()));
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["name", "id", "size"]);
        assert_eq!(table.len(), 3);
        assert!(table.contains_key("id"));
        assert!(!table.contains_key("missing"));
    }

    #[test]
    fn empty_table() {
        let table: FieldDeserializers<Sub> = FieldDeserializers::new();
        assert!(table.is_empty());
        assert!(table.get("name").is_none());
        let sub = Sub::default();
        assert!(sub.base.name.is_none() && sub.size.is_none());
    }
}
