use chrono::{DateTime, FixedOffset};
use graph_beta_abstractions::{
    assign_fields, AdditionalData, AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode,
    SerializationError, SerializationWriter, ODATA_TYPE_KEY,
};

use crate::enums::AccessReviewTimeoutBehavior;
use crate::UserSetKind;

/// Recurring review configuration attached to an access package assignment
/// policy.
///
/// `recurrenceType` and `reviewerType` are free-form strings on the wire
/// (`weekly`, `monthly`, ... and `Self`, `Reviewers`, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentReviewSettings {
    additional_data: AdditionalData,
    access_review_timeout_behavior: Option<AccessReviewTimeoutBehavior>,
    duration_in_days: Option<i32>,
    is_access_recommendation_enabled: Option<bool>,
    is_approval_justification_required: Option<bool>,
    is_enabled: Option<bool>,
    odata_type: Option<String>,
    recurrence_type: Option<String>,
    reviewers: Option<Vec<UserSetKind>>,
    reviewer_type: Option<String>,
    start_date_time: Option<DateTime<FixedOffset>>,
}

impl AssignmentReviewSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn access_review_timeout_behavior(&self) -> Option<AccessReviewTimeoutBehavior> {
        self.access_review_timeout_behavior
    }

    pub fn set_access_review_timeout_behavior(&mut self, value: Option<AccessReviewTimeoutBehavior>) {
        self.access_review_timeout_behavior = value;
    }

    pub fn duration_in_days(&self) -> Option<i32> {
        self.duration_in_days
    }

    pub fn set_duration_in_days(&mut self, value: Option<i32>) {
        self.duration_in_days = value;
    }

    pub fn is_access_recommendation_enabled(&self) -> Option<bool> {
        self.is_access_recommendation_enabled
    }

    pub fn set_is_access_recommendation_enabled(&mut self, value: Option<bool>) {
        self.is_access_recommendation_enabled = value;
    }

    pub fn is_approval_justification_required(&self) -> Option<bool> {
        self.is_approval_justification_required
    }

    pub fn set_is_approval_justification_required(&mut self, value: Option<bool>) {
        self.is_approval_justification_required = value;
    }

    pub fn is_enabled(&self) -> Option<bool> {
        self.is_enabled
    }

    pub fn set_is_enabled(&mut self, value: Option<bool>) {
        self.is_enabled = value;
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn recurrence_type(&self) -> Option<&str> {
        self.recurrence_type.as_deref()
    }

    pub fn set_recurrence_type(&mut self, value: Option<String>) {
        self.recurrence_type = value;
    }

    /// Each reviewer keeps its own concrete user-set variant.
    pub fn reviewers(&self) -> Option<&[UserSetKind]> {
        self.reviewers.as_deref()
    }

    pub fn set_reviewers(&mut self, value: Option<Vec<UserSetKind>>) {
        self.reviewers = value;
    }

    pub fn reviewer_type(&self) -> Option<&str> {
        self.reviewer_type.as_deref()
    }

    pub fn set_reviewer_type(&mut self, value: Option<String>) {
        self.reviewer_type = value;
    }

    pub fn start_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.start_date_time
    }

    pub fn set_start_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.start_date_time = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::<Self>::new();
        res.insert("accessReviewTimeoutBehavior", |m, n| {
            if let Some(v) = n.get_enum_value()? {
                m.set_access_review_timeout_behavior(Some(v));
            }
            Ok(())
        });
        res.insert("durationInDays", |m, n| {
            if let Some(v) = n.get_int32_value()? {
                m.set_duration_in_days(Some(v));
            }
            Ok(())
        });
        res.insert("isAccessRecommendationEnabled", |m, n| {
            if let Some(v) = n.get_bool_value()? {
                m.set_is_access_recommendation_enabled(Some(v));
            }
            Ok(())
        });
        res.insert("isApprovalJustificationRequired", |m, n| {
            if let Some(v) = n.get_bool_value()? {
                m.set_is_approval_justification_required(Some(v));
            }
            Ok(())
        });
        res.insert("isEnabled", |m, n| {
            if let Some(v) = n.get_bool_value()? {
                m.set_is_enabled(Some(v));
            }
            Ok(())
        });
        res.insert(ODATA_TYPE_KEY, |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_odata_type(Some(v));
            }
            Ok(())
        });
        res.insert("recurrenceType", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_recurrence_type(Some(v));
            }
            Ok(())
        });
        res.insert("reviewers", |m, n| {
            if let Some(v) = n.get_collection_of_object_values(UserSetKind::create_from_discriminator_value)? {
                m.set_reviewers(Some(v));
            }
            Ok(())
        });
        res.insert("reviewerType", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_reviewer_type(Some(v));
            }
            Ok(())
        });
        res.insert("startDateTime", |m, n| {
            if let Some(v) = n.get_time_value()? {
                m.set_start_date_time(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for AssignmentReviewSettings {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl Parsable for AssignmentReviewSettings {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_enum_value("accessReviewTimeoutBehavior", self.access_review_timeout_behavior())?;
        writer.write_int32_value("durationInDays", self.duration_in_days())?;
        writer.write_bool_value("isAccessRecommendationEnabled", self.is_access_recommendation_enabled())?;
        writer.write_bool_value("isApprovalJustificationRequired", self.is_approval_justification_required())?;
        writer.write_bool_value("isEnabled", self.is_enabled())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_string_value("recurrenceType", self.recurrence_type())?;
        writer.write_objects("reviewers", self.reviewers())?;
        writer.write_string_value("reviewerType", self.reviewer_type())?;
        writer.write_time_value("startDateTime", self.start_date_time())?;
        writer.write_additional_data(&self.additional_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph_beta_json::{deserialize_value, serialize_to_value};
    use serde_json::json;

    #[test]
    fn reviewers_keep_their_variants() {
        let payload = json!({
            "accessReviewTimeoutBehavior": "removeAccess",
            "durationInDays": 14,
            "isEnabled": true,
            "reviewers": [
                {"@odata.type": "#microsoft.graph.singleUser", "id": "u-1", "isBackup": false},
                {"@odata.type": "#microsoft.graph.groupMembers", "id": "g-1"},
                {"@odata.type": "#microsoft.graph.somethingNew", "isBackup": true}
            ],
            "startDateTime": "2024-01-15T10:30:00Z"
        });
        let settings =
            deserialize_value(&payload, AssignmentReviewSettings::create_from_discriminator_value).unwrap();

        assert_eq!(
            settings.access_review_timeout_behavior(),
            Some(AccessReviewTimeoutBehavior::RemoveAccess)
        );
        assert_eq!(settings.duration_in_days(), Some(14));
        let reviewers = settings.reviewers().unwrap();
        assert!(matches!(reviewers[0], UserSetKind::SingleUser(_)));
        assert!(matches!(reviewers[1], UserSetKind::GroupMembers(_)));
        assert!(matches!(reviewers[2], UserSetKind::UserSet(_)));
        assert_eq!(reviewers[2].as_user_set().is_backup(), Some(true));
        assert_eq!(
            settings.start_date_time().map(|t| t.to_rfc3339()),
            Some("2024-01-15T10:30:00+00:00".to_string())
        );

        let out = serialize_to_value(&settings).unwrap();
        assert_eq!(out["startDateTime"], json!("2024-01-15T10:30:00Z"));
        assert_eq!(out["reviewers"][2]["@odata.type"], json!("#microsoft.graph.somethingNew"));
    }

    #[test]
    fn unknown_timeout_behavior_is_rejected() {
        let payload = json!({"accessReviewTimeoutBehavior": "forgetAccess"});
        let err = deserialize_value(&payload, AssignmentReviewSettings::create_from_discriminator_value)
            .unwrap_err();
        assert!(matches!(
            err,
            SerializationError::UnknownEnumValue { type_name: "AccessReviewTimeoutBehavior", .. }
        ));
    }
}
