//! The writer capability: emits keyed fields into the object being built.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, SecondsFormat};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    serialize_enum_values, AdditionalData, EnumValue, IsoDuration, Parsable, SerializationError,
};

/// Sink for model fields.
///
/// A `None` value writes nothing. The empty key addresses the root or a
/// collection element rather than a field.
pub trait SerializationWriter {
    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> Result<(), SerializationError>;

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<(), SerializationError>;

    fn write_int32_value(&mut self, key: &str, value: Option<i32>) -> Result<(), SerializationError>;

    fn write_int64_value(&mut self, key: &str, value: Option<i64>) -> Result<(), SerializationError>;

    fn write_float64_value(&mut self, key: &str, value: Option<f64>) -> Result<(), SerializationError>;

    fn write_byte_array_value(&mut self, key: &str, value: Option<&[u8]>) -> Result<(), SerializationError>;

    fn write_null_value(&mut self, key: &str) -> Result<(), SerializationError>;

    fn write_untyped_value(&mut self, key: &str, value: Option<&Value>) -> Result<(), SerializationError>;

    fn write_object_value(
        &mut self,
        key: &str,
        value: Option<&dyn Parsable>,
    ) -> Result<(), SerializationError>;

    fn write_collection_of_object_values(
        &mut self,
        key: &str,
        values: Option<&[&dyn Parsable]>,
    ) -> Result<(), SerializationError>;

    fn write_collection_of_string_values(
        &mut self,
        key: &str,
        values: Option<&[String]>,
    ) -> Result<(), SerializationError>;

    /// Takes the finished payload; the writer is empty afterwards.
    fn get_serialized_content(&mut self) -> Result<Vec<u8>, SerializationError>;

    fn write_uuid_value(&mut self, key: &str, value: Option<Uuid>) -> Result<(), SerializationError> {
        let text = value.map(|v| v.hyphenated().to_string());
        self.write_string_value(key, text.as_deref())
    }

    fn write_time_value(
        &mut self,
        key: &str,
        value: Option<DateTime<FixedOffset>>,
    ) -> Result<(), SerializationError> {
        let text = value.map(|v| trim_fraction(&v.to_rfc3339_opts(SecondsFormat::Nanos, true)));
        self.write_string_value(key, text.as_deref())
    }

    fn write_date_only_value(&mut self, key: &str, value: Option<NaiveDate>) -> Result<(), SerializationError> {
        let text = value.map(|v| v.format("%Y-%m-%d").to_string());
        self.write_string_value(key, text.as_deref())
    }

    fn write_time_only_value(&mut self, key: &str, value: Option<NaiveTime>) -> Result<(), SerializationError> {
        let text = value.map(|v| trim_fraction(&v.format("%H:%M:%S%.9f").to_string()));
        self.write_string_value(key, text.as_deref())
    }

    fn write_iso_duration_value(
        &mut self,
        key: &str,
        value: Option<IsoDuration>,
    ) -> Result<(), SerializationError> {
        let text = value.map(|v| v.to_string());
        self.write_string_value(key, text.as_deref())
    }

    /// Emits each entry as a keyed field, in insertion order.
    fn write_additional_data(&mut self, data: &AdditionalData) -> Result<(), SerializationError> {
        for (key, value) in data {
            self.write_untyped_value(key, Some(value))?;
        }
        Ok(())
    }
}

/// Drops trailing zeros from the fractional seconds, and the dot with them
/// when nothing is left: `10:00:00.123456700Z` becomes `10:00:00.1234567Z`.
fn trim_fraction(text: &str) -> String {
    let Some(dot) = text.find('.') else {
        return text.to_owned();
    };
    let end = text[dot + 1..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(text.len(), |i| dot + 1 + i);
    let digits = text[dot + 1..end].trim_end_matches('0');
    if digits.is_empty() {
        format!("{}{}", &text[..dot], &text[end..])
    } else {
        format!("{}.{}{}", &text[..dot], digits, &text[end..])
    }
}

impl<'a> dyn SerializationWriter + 'a {
    pub fn write_object<T: Parsable>(&mut self, key: &str, value: Option<&T>) -> Result<(), SerializationError> {
        self.write_object_value(key, value.map(|v| v as &dyn Parsable))
    }

    pub fn write_objects<T: Parsable>(
        &mut self,
        key: &str,
        values: Option<&[T]>,
    ) -> Result<(), SerializationError> {
        let Some(values) = values else {
            return Ok(());
        };
        let items: Vec<&dyn Parsable> = values.iter().map(|v| v as &dyn Parsable).collect();
        self.write_collection_of_object_values(key, Some(&items))
    }

    pub fn write_collection_of_enum_values<E: EnumValue>(
        &mut self,
        key: &str,
        values: Option<&[E]>,
    ) -> Result<(), SerializationError> {
        let Some(values) = values else {
            return Ok(());
        };
        self.write_collection_of_string_values(key, Some(&serialize_enum_values(values)))
    }

    pub fn write_enum_value<E: EnumValue>(&mut self, key: &str, value: Option<E>) -> Result<(), SerializationError> {
        self.write_string_value(key, value.map(|v| v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::trim_fraction;

    #[test]
    fn fraction_trimming() {
        assert_eq!(trim_fraction("2023-05-01T10:00:00.123456700Z"), "2023-05-01T10:00:00.1234567Z");
        assert_eq!(trim_fraction("2023-05-01T10:00:00.000000000+02:00"), "2023-05-01T10:00:00+02:00");
        assert_eq!(trim_fraction("2023-05-01T10:00:00.250000000Z"), "2023-05-01T10:00:00.25Z");
        assert_eq!(trim_fraction("08:30:00.000000000"), "08:30:00");
        assert_eq!(trim_fraction("08:30:00.500000000"), "08:30:00.5");
        assert_eq!(trim_fraction("2023-05-01T10:00:00Z"), "2023-05-01T10:00:00Z");
    }
}
