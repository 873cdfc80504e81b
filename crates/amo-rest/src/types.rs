//! amoCRM entity models.
//!
//! Fields are optional so the same structs can be used as create/update
//! bodies; unset fields are not serialized. Timestamps are Unix seconds.

use serde::{Deserialize, Serialize};

/// Value of one custom field on an entity.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CustomFieldValue {
    pub field_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[serde(default)]
    pub values: Vec<CustomFieldItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CustomFieldItem {
    pub value: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_code: Option<String>,
}

/// Related entities embedded via `with=` or returned by default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Embedded {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<EntityLink>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub companies: Vec<EntityLink>,
}

/// Reference to a linked entity.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EntityLink {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_main: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Lead {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loss_reason_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closest_task_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields_values: Option<Vec<CustomFieldValue>>,
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<Embedded>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closest_task_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields_values: Option<Vec<CustomFieldValue>>,
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<Embedded>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Company {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closest_task_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields_values: Option<Vec<CustomFieldValue>>,
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<Embedded>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periodicity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closest_task_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ltv: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchases_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_check: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields_values: Option<Vec<CustomFieldValue>>,
}

/// A catalog (lists such as products or invoices).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Catalog {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type", default)]
    pub catalog_type: Option<String>,
    #[serde(default)]
    pub sort: Option<i64>,
    #[serde(default)]
    pub can_add_elements: Option<bool>,
    #[serde(default)]
    pub can_show_in_cards: Option<bool>,
    #[serde(default)]
    pub can_link_multiple: Option<bool>,
    #[serde(default)]
    pub can_be_deleted: Option<bool>,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<i64>,
    #[serde(default)]
    pub account_id: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CatalogElement {
    pub id: u64,
    #[serde(default)]
    pub catalog_id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<i64>,
    #[serde(default)]
    pub is_deleted: Option<bool>,
    #[serde(default)]
    pub custom_fields_values: Option<Vec<CustomFieldValue>>,
    #[serde(default)]
    pub account_id: Option<u64>,
}

/// Outcome text of a completed task.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TaskResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<u64>,
    /// `leads`, `contacts`, `companies` or `customers`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_type_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complete_till: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<TaskResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CallDirection {
    Inbound,
    Outbound,
}

/// A call to log against the contact or company owning `phone`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Call {
    pub direction: CallDirection,
    pub phone: String,
    /// Duration in seconds.
    pub duration: i64,
    /// Name of the telephony integration.
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uniq: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_status: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Result of a batch create or call log.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CreatedEntity {
    pub id: u64,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub entity_id: Option<u64>,
    #[serde(default)]
    pub entity_type: Option<String>,
}

/// Entry of the account event log.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Event {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub entity_id: u64,
    pub entity_type: String,
    #[serde(default)]
    pub created_by: Option<u64>,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub value_after: serde_json::Value,
    #[serde(default)]
    pub value_before: serde_json::Value,
    #[serde(default)]
    pub account_id: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Note {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub entity_id: u64,
    /// `common`, `call_in`, `service_message`, ...
    pub note_type: String,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub params: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<u64>,
}

impl Note {
    /// A plain text note.
    pub fn common(entity_id: u64, text: impl Into<String>) -> Self {
        Self {
            entity_id,
            note_type: "common".to_string(),
            params: serde_json::json!({ "text": text.into() }),
            ..Self::default()
        }
    }
}

/// A stage of a sales pipeline.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PipelineStatus {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub sort: Option<i64>,
    #[serde(default)]
    pub is_editable: Option<bool>,
    #[serde(default)]
    pub pipeline_id: Option<u64>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(rename = "type", default)]
    pub status_type: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PipelineEmbedded {
    #[serde(default)]
    pub statuses: Vec<PipelineStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Pipeline {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub sort: Option<i64>,
    #[serde(default)]
    pub is_main: bool,
    #[serde(default)]
    pub is_unsorted_on: bool,
    #[serde(default)]
    pub is_archive: bool,
    #[serde(default)]
    pub account_id: Option<u64>,
    #[serde(rename = "_embedded", default)]
    pub embedded: PipelineEmbedded,
}

impl Pipeline {
    pub fn statuses(&self) -> &[PipelineStatus] {
        &self.embedded.statuses
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Tag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Tag {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    /// Access rights, kept as raw JSON.
    #[serde(default)]
    pub rights: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Webhook {
    #[serde(default)]
    pub id: Option<u64>,
    pub destination: String,
    /// Subscribed events (`add_lead`, `update_contact`, ...).
    #[serde(default)]
    pub settings: Vec<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub sort: Option<i64>,
    #[serde(default)]
    pub created_by: Option<u64>,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<i64>,
    #[serde(default)]
    pub account_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_body_skips_unset_fields() {
        let lead = Lead {
            name: Some("Deal".to_string()),
            price: Some(1000),
            ..Lead::default()
        };
        assert_eq!(
            serde_json::to_value(&lead).unwrap(),
            serde_json::json!({"name": "Deal", "price": 1000})
        );
    }

    #[test]
    fn test_lead_deserialize_with_embedded() {
        let lead: Lead = serde_json::from_value(serde_json::json!({
            "id": 19619,
            "name": "Сделка для примера",
            "price": 46333,
            "status_id": 143,
            "pipeline_id": 1300,
            "custom_fields_values": null,
            "_links": {"self": {"href": "https://example.amocrm.ru/api/v4/leads/19619"}},
            "_embedded": {"tags": [{"id": 1, "name": "vip"}], "companies": [{"id": 10971463}]}
        }))
        .unwrap();

        assert_eq!(lead.id, Some(19619));
        assert!(lead.custom_fields_values.is_none());
        let embedded = lead.embedded.unwrap();
        assert_eq!(embedded.tags[0].name, "vip");
        assert_eq!(embedded.companies[0].id, 10971463);
    }

    #[test]
    fn test_note_common() {
        let note = Note::common(42, "Called back");
        assert_eq!(
            serde_json::to_value(&note).unwrap(),
            serde_json::json!({"entity_id": 42, "note_type": "common", "params": {"text": "Called back"}})
        );
    }

    #[test]
    fn test_pipeline_statuses() {
        let pipeline: Pipeline = serde_json::from_value(serde_json::json!({
            "id": 3177727,
            "name": "Воронка",
            "is_main": true,
            "_embedded": {"statuses": [{"id": 142, "name": "Успешно реализовано", "type": 0}]}
        }))
        .unwrap();

        assert!(pipeline.is_main);
        assert_eq!(pipeline.statuses().len(), 1);
        assert_eq!(pipeline.statuses()[0].id, 142);
    }

    #[test]
    fn test_call_direction_serialization() {
        let call = Call {
            direction: CallDirection::Inbound,
            phone: "+79991234567".to_string(),
            duration: 60,
            source: "telephony".to_string(),
            uniq: None,
            link: None,
            call_result: None,
            call_status: Some(4),
            responsible_user_id: None,
            created_at: None,
            request_id: None,
        };
        let value = serde_json::to_value(&call).unwrap();
        assert_eq!(value["direction"], "inbound");
        assert_eq!(value["call_status"], 4);
        assert!(value.get("uniq").is_none());
    }
}
