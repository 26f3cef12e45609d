//! String codec shared by all model enums.

use crate::SerializationError;

/// An enum whose members travel as fixed wire strings.
pub trait EnumValue: Copy + Sized + 'static {
    /// Name used in error messages.
    const TYPE_NAME: &'static str;
    /// Every member, in declaration order.
    const VALUES: &'static [Self];

    fn as_str(&self) -> &'static str;
    fn parse_str(s: &str) -> Result<Self, SerializationError>;
}

pub fn unknown_enum_value<E: EnumValue>(value: &str) -> SerializationError {
    SerializationError::UnknownEnumValue {
        type_name: E::TYPE_NAME,
        value: value.to_owned(),
    }
}

/// Wire strings for a list of members; order and length are preserved.
pub fn serialize_enum_values<E: EnumValue>(values: &[E]) -> Vec<String> {
    values.iter().map(|v| v.as_str().to_owned()).collect()
}
