//! Bookings people: the staff who deliver services and the customers who
//! book them.

use std::ops::{Deref, DerefMut};

use chrono::NaiveTime;
use graph_beta_abstractions::{
    assign_fields, AdditionalData, AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode,
    SerializationError, SerializationWriter, ODATA_TYPE_KEY,
};

use crate::enums::{BookingStaffRole, DayOfWeek};
use crate::Entity;

// ── BookingNamedEntity ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingNamedEntity {
    base: Entity,
    display_name: Option<String>,
}

impl Deref for BookingNamedEntity {
    type Target = Entity;

    fn deref(&self) -> &Entity {
        &self.base
    }
}

impl DerefMut for BookingNamedEntity {
    fn deref_mut(&mut self) -> &mut Entity {
        &mut self.base
    }
}

impl BookingNamedEntity {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.bookingNamedEntity";

    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, value: Option<String>) {
        self.display_name = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::inherit(Entity::field_deserializers(), |m: &mut Self| &mut m.base);
        res.insert("displayName", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_display_name(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for BookingNamedEntity {
    fn additional_data(&self) -> &AdditionalData {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.base.additional_data_mut()
    }
}

impl Parsable for BookingNamedEntity {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize(writer)?;
        writer.write_string_value("displayName", self.display_name())
    }
}

// ── BookingPerson ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingPerson {
    base: BookingNamedEntity,
    email_address: Option<String>,
}

impl Deref for BookingPerson {
    type Target = BookingNamedEntity;

    fn deref(&self) -> &BookingNamedEntity {
        &self.base
    }
}

impl DerefMut for BookingPerson {
    fn deref_mut(&mut self) -> &mut BookingNamedEntity {
        &mut self.base
    }
}

impl BookingPerson {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.bookingPerson";

    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn email_address(&self) -> Option<&str> {
        self.email_address.as_deref()
    }

    pub fn set_email_address(&mut self, value: Option<String>) {
        self.email_address = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res =
            FieldDeserializers::inherit(BookingNamedEntity::field_deserializers(), |m: &mut Self| &mut m.base);
        res.insert("emailAddress", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_email_address(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for BookingPerson {
    fn additional_data(&self) -> &AdditionalData {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.base.additional_data_mut()
    }
}

impl Parsable for BookingPerson {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize(writer)?;
        writer.write_string_value("emailAddress", self.email_address())
    }
}

// ── BookingCustomer ───────────────────────────────────────────────────────

/// A customer of a booking business. Addresses and phone numbers are not
/// bound and stay in additional data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingCustomer {
    base: BookingPerson,
}

impl Deref for BookingCustomer {
    type Target = BookingPerson;

    fn deref(&self) -> &BookingPerson {
        &self.base
    }
}

impl DerefMut for BookingCustomer {
    fn deref_mut(&mut self) -> &mut BookingPerson {
        &mut self.base
    }
}

impl BookingCustomer {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.bookingCustomer";

    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        FieldDeserializers::inherit(BookingPerson::field_deserializers(), |m: &mut Self| &mut m.base)
    }
}

impl AdditionalDataHolder for BookingCustomer {
    fn additional_data(&self) -> &AdditionalData {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.base.additional_data_mut()
    }
}

impl Parsable for BookingCustomer {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize(writer)
    }
}

// ── BookingStaffMember ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingStaffMember {
    base: BookingPerson,
    availability_is_affected_by_personal_calendar: Option<bool>,
    color_index: Option<i32>,
    is_email_notification_enabled: Option<bool>,
    role: Option<BookingStaffRole>,
    time_zone: Option<String>,
    use_business_hours: Option<bool>,
    working_hours: Option<Vec<BookingWorkHours>>,
}

impl Deref for BookingStaffMember {
    type Target = BookingPerson;

    fn deref(&self) -> &BookingPerson {
        &self.base
    }
}

impl DerefMut for BookingStaffMember {
    fn deref_mut(&mut self) -> &mut BookingPerson {
        &mut self.base
    }
}

impl BookingStaffMember {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.bookingStaffMember";

    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn availability_is_affected_by_personal_calendar(&self) -> Option<bool> {
        self.availability_is_affected_by_personal_calendar
    }

    pub fn set_availability_is_affected_by_personal_calendar(&mut self, value: Option<bool>) {
        self.availability_is_affected_by_personal_calendar = value;
    }

    /// Index into the calendar colour palette, 0 through 23.
    pub fn color_index(&self) -> Option<i32> {
        self.color_index
    }

    pub fn set_color_index(&mut self, value: Option<i32>) {
        self.color_index = value;
    }

    pub fn is_email_notification_enabled(&self) -> Option<bool> {
        self.is_email_notification_enabled
    }

    pub fn set_is_email_notification_enabled(&mut self, value: Option<bool>) {
        self.is_email_notification_enabled = value;
    }

    pub fn role(&self) -> Option<BookingStaffRole> {
        self.role
    }

    pub fn set_role(&mut self, value: Option<BookingStaffRole>) {
        self.role = value;
    }

    pub fn time_zone(&self) -> Option<&str> {
        self.time_zone.as_deref()
    }

    pub fn set_time_zone(&mut self, value: Option<String>) {
        self.time_zone = value;
    }

    pub fn use_business_hours(&self) -> Option<bool> {
        self.use_business_hours
    }

    pub fn set_use_business_hours(&mut self, value: Option<bool>) {
        self.use_business_hours = value;
    }

    /// Ignored by the service while `useBusinessHours` is true.
    pub fn working_hours(&self) -> Option<&[BookingWorkHours]> {
        self.working_hours.as_deref()
    }

    pub fn set_working_hours(&mut self, value: Option<Vec<BookingWorkHours>>) {
        self.working_hours = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::inherit(BookingPerson::field_deserializers(), |m: &mut Self| &mut m.base);
        res.insert("availabilityIsAffectedByPersonalCalendar", |m, n| {
            if let Some(v) = n.get_bool_value()? {
                m.set_availability_is_affected_by_personal_calendar(Some(v));
            }
            Ok(())
        });
        res.insert("colorIndex", |m, n| {
            if let Some(v) = n.get_int32_value()? {
                m.set_color_index(Some(v));
            }
            Ok(())
        });
        res.insert("isEmailNotificationEnabled", |m, n| {
            if let Some(v) = n.get_bool_value()? {
                m.set_is_email_notification_enabled(Some(v));
            }
            Ok(())
        });
        res.insert("role", |m, n| {
            if let Some(v) = n.get_enum_value()? {
                m.set_role(Some(v));
            }
            Ok(())
        });
        res.insert("timeZone", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_time_zone(Some(v));
            }
            Ok(())
        });
        res.insert("useBusinessHours", |m, n| {
            if let Some(v) = n.get_bool_value()? {
                m.set_use_business_hours(Some(v));
            }
            Ok(())
        });
        res.insert("workingHours", |m, n| {
            if let Some(v) = n.get_collection_of_object_values(BookingWorkHours::create_from_discriminator_value)? {
                m.set_working_hours(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for BookingStaffMember {
    fn additional_data(&self) -> &AdditionalData {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.base.additional_data_mut()
    }
}

impl Parsable for BookingStaffMember {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize(writer)?;
        writer.write_bool_value(
            "availabilityIsAffectedByPersonalCalendar",
            self.availability_is_affected_by_personal_calendar(),
        )?;
        writer.write_int32_value("colorIndex", self.color_index())?;
        writer.write_bool_value("isEmailNotificationEnabled", self.is_email_notification_enabled())?;
        writer.write_enum_value("role", self.role())?;
        writer.write_string_value("timeZone", self.time_zone())?;
        writer.write_bool_value("useBusinessHours", self.use_business_hours())?;
        writer.write_objects("workingHours", self.working_hours())
    }
}

// ── BookingPersonKind ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum BookingPersonKind {
    Person(BookingPerson),
    Customer(BookingCustomer),
    StaffMember(BookingStaffMember),
}

impl Default for BookingPersonKind {
    fn default() -> Self {
        BookingPersonKind::Person(BookingPerson::default())
    }
}

impl BookingPersonKind {
    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, SerializationError> {
        let discriminator = node.get_discriminator_value()?;
        Ok(match discriminator.as_deref() {
            Some(BookingCustomer::ODATA_TYPE) => BookingPersonKind::Customer(BookingCustomer::default()),
            Some(BookingStaffMember::ODATA_TYPE) => BookingPersonKind::StaffMember(BookingStaffMember::default()),
            Some(BookingPerson::ODATA_TYPE) => BookingPersonKind::Person(BookingPerson::default()),
            other => {
                tracing::debug!(discriminator = ?other, "unrecognized booking person type, using base");
                BookingPersonKind::Person(BookingPerson::default())
            }
        })
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            BookingPersonKind::Person(_) => BookingPerson::ODATA_TYPE,
            BookingPersonKind::Customer(_) => BookingCustomer::ODATA_TYPE,
            BookingPersonKind::StaffMember(_) => BookingStaffMember::ODATA_TYPE,
        }
    }

    pub fn as_booking_person(&self) -> &BookingPerson {
        match self {
            BookingPersonKind::Person(v) => v,
            BookingPersonKind::Customer(v) => &v.base,
            BookingPersonKind::StaffMember(v) => &v.base,
        }
    }
}

impl AdditionalDataHolder for BookingPersonKind {
    fn additional_data(&self) -> &AdditionalData {
        self.as_booking_person().additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        match self {
            BookingPersonKind::Person(v) => v.additional_data_mut(),
            BookingPersonKind::Customer(v) => v.additional_data_mut(),
            BookingPersonKind::StaffMember(v) => v.additional_data_mut(),
        }
    }
}

impl Parsable for BookingPersonKind {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        match self {
            BookingPersonKind::Person(v) => v.assign_field_values(node),
            BookingPersonKind::Customer(v) => v.assign_field_values(node),
            BookingPersonKind::StaffMember(v) => v.assign_field_values(node),
        }
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        match self {
            BookingPersonKind::Person(v) => v.serialize(writer),
            BookingPersonKind::Customer(v) => v.serialize(writer),
            BookingPersonKind::StaffMember(v) => v.serialize(writer),
        }
    }
}

// ── BookingWorkHours ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingWorkHours {
    additional_data: AdditionalData,
    day: Option<DayOfWeek>,
    odata_type: Option<String>,
    time_slots: Option<Vec<BookingWorkTimeSlot>>,
}

impl BookingWorkHours {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn day(&self) -> Option<DayOfWeek> {
        self.day
    }

    pub fn set_day(&mut self, value: Option<DayOfWeek>) {
        self.day = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn time_slots(&self) -> Option<&[BookingWorkTimeSlot]> {
        self.time_slots.as_deref()
    }

    pub fn set_time_slots(&mut self, value: Option<Vec<BookingWorkTimeSlot>>) {
        self.time_slots = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::<Self>::new();
        res.insert("day", |m, n| {
            if let Some(v) = n.get_enum_value()? {
                m.set_day(Some(v));
            }
            Ok(())
        });
        res.insert(ODATA_TYPE_KEY, |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_odata_type(Some(v));
            }
            Ok(())
        });
        res.insert("timeSlots", |m, n| {
            if let Some(v) = n.get_collection_of_object_values(BookingWorkTimeSlot::create_from_discriminator_value)? {
                m.set_time_slots(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for BookingWorkHours {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for BookingWorkHours {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_enum_value("day", self.day())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_objects("timeSlots", self.time_slots())?;
        writer.write_additional_data(&self.additional_data)
    }
}

// ── BookingWorkTimeSlot ───────────────────────────────────────────────────

/// A span of local wall-clock time within one working day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingWorkTimeSlot {
    additional_data: AdditionalData,
    end: Option<NaiveTime>,
    odata_type: Option<String>,
    start: Option<NaiveTime>,
}

impl BookingWorkTimeSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn end(&self) -> Option<NaiveTime> {
        self.end
    }

    pub fn set_end(&mut self, value: Option<NaiveTime>) {
        self.end = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn start(&self) -> Option<NaiveTime> {
        self.start
    }

    pub fn set_start(&mut self, value: Option<NaiveTime>) {
        self.start = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::<Self>::new();
        res.insert("end", |m, n| {
            if let Some(v) = n.get_time_only_value()? {
                m.set_end(Some(v));
            }
            Ok(())
        });
        res.insert(ODATA_TYPE_KEY, |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_odata_type(Some(v));
            }
            Ok(())
        });
        res.insert("start", |m, n| {
            if let Some(v) = n.get_time_only_value()? {
                m.set_start(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for BookingWorkTimeSlot {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for BookingWorkTimeSlot {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_time_only_value("end", self.end())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_time_only_value("start", self.start())?;
        writer.write_additional_data(&self.additional_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph_beta_json::{deserialize_value, serialize_to_value};
    use serde_json::json;

    #[test]
    fn staff_member_table_is_three_levels_deep() {
        let keys: Vec<&str> = BookingStaffMember::field_deserializers().keys().collect();
        assert_eq!(&keys[..4], &["id", "@odata.type", "displayName", "emailAddress"]);
        assert!(keys.contains(&"workingHours"));
    }

    #[test]
    fn working_hours_round_trip() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.bookingStaffMember",
            "displayName": "Dana",
            "emailAddress": "dana@contoso.com",
            "role": "teamMember",
            "useBusinessHours": false,
            "workingHours": [
                {"day": "monday", "timeSlots": [{"end": "17:00:00", "start": "08:30:00"}]}
            ]
        });
        let kind = deserialize_value(&payload, BookingPersonKind::create_from_discriminator_value).unwrap();
        let BookingPersonKind::StaffMember(staff) = &kind else {
            panic!("expected staff member, got {kind:?}");
        };
        assert_eq!(staff.display_name(), Some("Dana"));
        assert_eq!(staff.role(), Some(BookingStaffRole::TeamMember));
        let slot = &staff.working_hours().unwrap()[0].time_slots().unwrap()[0];
        assert_eq!(slot.start(), NaiveTime::from_hms_opt(8, 30, 0));

        assert_eq!(serialize_to_value(&kind).unwrap(), payload);
    }

    #[test]
    fn bad_time_slot_is_invalid_value() {
        let payload = json!({"start": "8am"});
        let err = deserialize_value(&payload, BookingWorkTimeSlot::create_from_discriminator_value).unwrap_err();
        assert!(matches!(err, SerializationError::InvalidValue { kind: "time", .. }));
    }
}
