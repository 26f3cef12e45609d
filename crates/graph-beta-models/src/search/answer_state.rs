use std::fmt;
use std::str::FromStr;

use graph_beta_abstractions::{unknown_enum_value, EnumValue, SerializationError};

/// Publication state of a search answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerState {
    Published,
    Draft,
    Excluded,
    UnknownFutureValue,
}

impl AnswerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerState::Published => "published",
            AnswerState::Draft => "draft",
            AnswerState::Excluded => "excluded",
            AnswerState::UnknownFutureValue => "unknownFutureValue",
        }
    }

    pub fn parse_str(s: &str) -> Result<Self, SerializationError> {
        match s {
            "published" => Ok(AnswerState::Published),
            "draft" => Ok(AnswerState::Draft),
            "excluded" => Ok(AnswerState::Excluded),
            "unknownFutureValue" => Ok(AnswerState::UnknownFutureValue),
            other => Err(unknown_enum_value::<Self>(other)),
        }
    }
}

impl EnumValue for AnswerState {
    const TYPE_NAME: &'static str = "AnswerState";
    const VALUES: &'static [Self] = &[
        AnswerState::Published,
        AnswerState::Draft,
        AnswerState::Excluded,
        AnswerState::UnknownFutureValue,
    ];

    fn as_str(&self) -> &'static str {
        AnswerState::as_str(self)
    }

    fn parse_str(s: &str) -> Result<Self, SerializationError> {
        AnswerState::parse_str(s)
    }
}

impl FromStr for AnswerState {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnswerState::parse_str(s)
    }
}

impl fmt::Display for AnswerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
