//! Bookings enums.

use std::fmt;
use std::str::FromStr;

use graph_beta_abstractions::{unknown_enum_value, EnumValue, SerializationError};

// ── BookingStaffRole ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingStaffRole {
    Guest,
    Administrator,
    Viewer,
    ExternalGuest,
    UnknownFutureValue,
    Scheduler,
    TeamMember,
}

impl BookingStaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStaffRole::Guest => "guest",
            BookingStaffRole::Administrator => "administrator",
            BookingStaffRole::Viewer => "viewer",
            BookingStaffRole::ExternalGuest => "externalGuest",
            BookingStaffRole::UnknownFutureValue => "unknownFutureValue",
            BookingStaffRole::Scheduler => "scheduler",
            BookingStaffRole::TeamMember => "teamMember",
        }
    }

    pub fn parse_str(s: &str) -> Result<Self, SerializationError> {
        match s {
            "guest" => Ok(BookingStaffRole::Guest),
            "administrator" => Ok(BookingStaffRole::Administrator),
            "viewer" => Ok(BookingStaffRole::Viewer),
            "externalGuest" => Ok(BookingStaffRole::ExternalGuest),
            "unknownFutureValue" => Ok(BookingStaffRole::UnknownFutureValue),
            "scheduler" => Ok(BookingStaffRole::Scheduler),
            "teamMember" => Ok(BookingStaffRole::TeamMember),
            other => Err(unknown_enum_value::<Self>(other)),
        }
    }
}

impl EnumValue for BookingStaffRole {
    const TYPE_NAME: &'static str = "BookingStaffRole";
    const VALUES: &'static [Self] = &[
        BookingStaffRole::Guest,
        BookingStaffRole::Administrator,
        BookingStaffRole::Viewer,
        BookingStaffRole::ExternalGuest,
        BookingStaffRole::UnknownFutureValue,
        BookingStaffRole::Scheduler,
        BookingStaffRole::TeamMember,
    ];

    fn as_str(&self) -> &'static str {
        BookingStaffRole::as_str(self)
    }

    fn parse_str(s: &str) -> Result<Self, SerializationError> {
        BookingStaffRole::parse_str(s)
    }
}

impl FromStr for BookingStaffRole {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingStaffRole::parse_str(s)
    }
}

impl fmt::Display for BookingStaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DayOfWeek ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "sunday",
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
        }
    }

    pub fn parse_str(s: &str) -> Result<Self, SerializationError> {
        match s {
            "sunday" => Ok(DayOfWeek::Sunday),
            "monday" => Ok(DayOfWeek::Monday),
            "tuesday" => Ok(DayOfWeek::Tuesday),
            "wednesday" => Ok(DayOfWeek::Wednesday),
            "thursday" => Ok(DayOfWeek::Thursday),
            "friday" => Ok(DayOfWeek::Friday),
            "saturday" => Ok(DayOfWeek::Saturday),
            other => Err(unknown_enum_value::<Self>(other)),
        }
    }
}

impl EnumValue for DayOfWeek {
    const TYPE_NAME: &'static str = "DayOfWeek";
    const VALUES: &'static [Self] = &[
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    fn as_str(&self) -> &'static str {
        DayOfWeek::as_str(self)
    }

    fn parse_str(s: &str) -> Result<Self, SerializationError> {
        DayOfWeek::parse_str(s)
    }
}

impl FromStr for DayOfWeek {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayOfWeek::parse_str(s)
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
