//! The reader capability: typed extraction over one node of a decoded payload.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    EnumValue, IsoDuration, Parsable, ParsableFactory, SerializationError, ODATA_TYPE_KEY,
};

/// A node of a decoded wire payload.
///
/// Every typed getter returns `Ok(None)` when the node holds `null`, so a
/// field that is absent or explicitly null never reads back as a zero value.
/// Text-encoded types (uuid, timestamps, durations) have default
/// implementations on top of [`ParseNode::get_string_value`].
pub trait ParseNode {
    /// Child of an object node; `None` when the key is missing or the node is null.
    fn get_child_node(&self, key: &str) -> Result<Option<Box<dyn ParseNode + '_>>, SerializationError>;

    /// Fields of an object node in payload order; `None` for a null node.
    fn object_fields(
        &self,
    ) -> Result<Option<Vec<(&str, Box<dyn ParseNode + '_>)>>, SerializationError>;

    /// Elements of an array node in payload order; `None` for a null node.
    fn collection_elements(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>, SerializationError>;

    fn is_null(&self) -> bool;

    fn get_string_value(&self) -> Result<Option<String>, SerializationError>;

    fn get_bool_value(&self) -> Result<Option<bool>, SerializationError>;

    fn get_int32_value(&self) -> Result<Option<i32>, SerializationError>;

    fn get_int64_value(&self) -> Result<Option<i64>, SerializationError>;

    fn get_float64_value(&self) -> Result<Option<f64>, SerializationError>;

    fn get_byte_array_value(&self) -> Result<Option<Vec<u8>>, SerializationError>;

    /// The node as an untyped value, used to keep unmapped fields verbatim.
    fn get_untyped_value(&self) -> Result<Value, SerializationError>;

    fn get_uuid_value(&self) -> Result<Option<Uuid>, SerializationError> {
        self.get_string_value()?
            .map(|s| Uuid::parse_str(&s).map_err(|e| SerializationError::invalid_value("uuid", &s, e)))
            .transpose()
    }

    /// RFC 3339 timestamp.
    fn get_time_value(&self) -> Result<Option<DateTime<FixedOffset>>, SerializationError> {
        self.get_string_value()?
            .map(|s| {
                DateTime::parse_from_rfc3339(&s)
                    .map_err(|e| SerializationError::invalid_value("timestamp", &s, e))
            })
            .transpose()
    }

    /// Calendar date, `YYYY-MM-DD`.
    fn get_date_only_value(&self) -> Result<Option<NaiveDate>, SerializationError> {
        self.get_string_value()?
            .map(|s| {
                NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                    .map_err(|e| SerializationError::invalid_value("date", &s, e))
            })
            .transpose()
    }

    /// Wall-clock time, `HH:MM:SS` with optional fractional seconds.
    fn get_time_only_value(&self) -> Result<Option<NaiveTime>, SerializationError> {
        self.get_string_value()?
            .map(|s| {
                NaiveTime::parse_from_str(&s, "%H:%M:%S%.f")
                    .map_err(|e| SerializationError::invalid_value("time", &s, e))
            })
            .transpose()
    }

    fn get_iso_duration_value(&self) -> Result<Option<IsoDuration>, SerializationError> {
        self.get_string_value()?.map(|s| s.parse()).transpose()
    }
}

/// Scalar types that can appear in a collection of primitive values.
pub trait Primitive: Sized {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError>;
}

impl Primitive for String {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_string_value()
    }
}

impl Primitive for bool {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_bool_value()
    }
}

impl Primitive for i32 {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_int32_value()
    }
}

impl Primitive for i64 {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_int64_value()
    }
}

impl Primitive for f64 {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_float64_value()
    }
}

impl Primitive for Uuid {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_uuid_value()
    }
}

impl Primitive for DateTime<FixedOffset> {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_time_value()
    }
}

impl Primitive for NaiveDate {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_date_only_value()
    }
}

impl Primitive for NaiveTime {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_time_only_value()
    }
}

impl Primitive for IsoDuration {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_iso_duration_value()
    }
}

impl<'a> dyn ParseNode + 'a {
    /// Reads the `@odata.type` child as a string.
    pub fn get_discriminator_value(&self) -> Result<Option<String>, SerializationError> {
        match self.get_child_node(ODATA_TYPE_KEY)? {
            Some(node) => node.get_string_value(),
            None => Ok(None),
        }
    }

    /// Builds a model with `factory` and fills it from this node's fields.
    pub fn get_object_value<T: Parsable>(
        &self,
        factory: ParsableFactory<T>,
    ) -> Result<Option<T>, SerializationError> {
        if self.is_null() {
            return Ok(None);
        }
        let mut value = factory(self)?;
        value.assign_field_values(self)?;
        Ok(Some(value))
    }

    /// Each element is resolved through `factory` on its own, so a
    /// polymorphic collection can hold different variants.
    /// `null` elements are dropped, so the result can be shorter than the
    /// array on the wire.
    pub fn get_collection_of_object_values<T: Parsable>(
        &self,
        factory: ParsableFactory<T>,
    ) -> Result<Option<Vec<T>>, SerializationError> {
        let Some(elements) = self.collection_elements()? else {
            return Ok(None);
        };
        let mut out = Vec::with_capacity(elements.len());
        for element in &elements {
            if let Some(value) = element.get_object_value(factory)? {
                out.push(value);
            }
        }
        Ok(Some(out))
    }

    pub fn get_enum_value<E: EnumValue>(&self) -> Result<Option<E>, SerializationError> {
        self.get_string_value()?
            .map(|s| E::parse_str(&s))
            .transpose()
    }

    pub fn get_collection_of_enum_values<E: EnumValue>(
        &self,
    ) -> Result<Option<Vec<E>>, SerializationError> {
        let Some(elements) = self.collection_elements()? else {
            return Ok(None);
        };
        let mut out = Vec::with_capacity(elements.len());
        for element in &elements {
            if let Some(value) = element.get_enum_value::<E>()? {
                out.push(value);
            }
        }
        Ok(Some(out))
    }

    pub fn get_collection_of_primitive_values<P: Primitive>(
        &self,
    ) -> Result<Option<Vec<P>>, SerializationError> {
        let Some(elements) = self.collection_elements()? else {
            return Ok(None);
        };
        let mut out = Vec::with_capacity(elements.len());
        for element in &elements {
            if let Some(value) = P::read(element.as_ref())? {
                out.push(value);
            }
        }
        Ok(Some(out))
    }
}
