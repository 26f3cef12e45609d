use std::fmt;
use std::str::FromStr;

use graph_beta_abstractions::{unknown_enum_value, EnumValue, SerializationError};

/// What happens to access when reviewers do not respond in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessReviewTimeoutBehavior {
    KeepAccess,
    RemoveAccess,
    AcceptAccessRecommendation,
    UnknownFutureValue,
}

impl AccessReviewTimeoutBehavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessReviewTimeoutBehavior::KeepAccess => "keepAccess",
            AccessReviewTimeoutBehavior::RemoveAccess => "removeAccess",
            AccessReviewTimeoutBehavior::AcceptAccessRecommendation => "acceptAccessRecommendation",
            AccessReviewTimeoutBehavior::UnknownFutureValue => "unknownFutureValue",
        }
    }

    pub fn parse_str(s: &str) -> Result<Self, SerializationError> {
        match s {
            "keepAccess" => Ok(AccessReviewTimeoutBehavior::KeepAccess),
            "removeAccess" => Ok(AccessReviewTimeoutBehavior::RemoveAccess),
            "acceptAccessRecommendation" => Ok(AccessReviewTimeoutBehavior::AcceptAccessRecommendation),
            "unknownFutureValue" => Ok(AccessReviewTimeoutBehavior::UnknownFutureValue),
            other => Err(unknown_enum_value::<Self>(other)),
        }
    }
}

impl EnumValue for AccessReviewTimeoutBehavior {
    const TYPE_NAME: &'static str = "AccessReviewTimeoutBehavior";
    const VALUES: &'static [Self] = &[
        AccessReviewTimeoutBehavior::KeepAccess,
        AccessReviewTimeoutBehavior::RemoveAccess,
        AccessReviewTimeoutBehavior::AcceptAccessRecommendation,
        AccessReviewTimeoutBehavior::UnknownFutureValue,
    ];

    fn as_str(&self) -> &'static str {
        AccessReviewTimeoutBehavior::as_str(self)
    }

    fn parse_str(s: &str) -> Result<Self, SerializationError> {
        AccessReviewTimeoutBehavior::parse_str(s)
    }
}

impl FromStr for AccessReviewTimeoutBehavior {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccessReviewTimeoutBehavior::parse_str(s)
    }
}

impl fmt::Display for AccessReviewTimeoutBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
