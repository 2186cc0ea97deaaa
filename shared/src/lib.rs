use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

mod config;
mod endpoints;
mod fetch;
mod forms;
mod navigation;

pub use config::{AppConfig, LogLevel};
pub use endpoints::{
    qr_image_url, ListKey, Mutation, ALBUM_LIMIT, MESSAGES_LIMIT, NOTIFICATIONS_LIMIT,
    PICKUP_QR_PAYLOAD,
};
pub use fetch::{CancellationToken, ListGenerations, RequestSequence, Ticket};
pub use forms::{is_present, visible_items, AlbumUploadForm, LeaveForm, MedicineForm};
pub use navigation::{ParentTab, Role, TeacherTab};

/// Reads an explicit `null` the same way as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The document store emits `_id`; other backends use `id`. `_id` wins when
/// a record carries both.
fn record_id(mongo_id: Option<String>, id: Option<String>) -> String {
    mongo_id
        .filter(|value| !value.is_empty())
        .or(id)
        .unwrap_or_default()
}

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SenderRole {
    Parent,
    Teacher,
    /// Missing or unrecognised sender; never treated as own
    #[default]
    #[serde(other)]
    Unknown,
}

impl SenderRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            SenderRole::Parent => "parent",
            SenderRole::Teacher => "teacher",
            SenderRole::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SenderRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server-side lifecycle of a leave or medicine request.
///
/// The client never transitions this itself; it is only ever read back from
/// the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Confirmed,
    /// Any status string this client does not know about
    #[serde(other)]
    Unknown,
}

/// A school notice shown on the parent's notifications tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Notification {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,
}

/// One photo or video in the class album
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AlbumItem {
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

impl AlbumItem {
    /// Image source for the grid cell at `index`, falling back to a seeded
    /// placeholder when the record carries no URL.
    pub fn image_src(&self, index: usize) -> String {
        match self.media_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => format!("https://picsum.photos/seed/{}/300/300", index),
        }
    }
}

/// A chat message between a parent and the class teacher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Message {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sender_role: SenderRole,
    /// Missing for image messages
    #[serde(default)]
    pub text: Option<String>,
}

impl Message {
    pub fn display_text(&self) -> &str {
        match self.text.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => "Image",
        }
    }

    pub fn is_from(&self, role: SenderRole) -> bool {
        self.sender_role != SenderRole::Unknown && self.sender_role == role
    }
}

/// Absence request submitted by a parent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(from = "LeaveRequestRecord")]
pub struct LeaveRequest {
    pub id: String,
    /// YYYY-MM-DD, as typed by the parent
    pub date: String,
    pub reason: String,
    pub status: RequestStatus,
}

#[derive(Deserialize)]
struct LeaveRequestRecord {
    #[serde(rename = "_id", default)]
    mongo_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    reason: String,
    #[serde(default, deserialize_with = "null_as_default")]
    status: RequestStatus,
}

impl From<LeaveRequestRecord> for LeaveRequest {
    fn from(record: LeaveRequestRecord) -> Self {
        Self {
            id: record_id(record.mongo_id, record.id),
            date: record.date,
            reason: record.reason,
            status: record.status,
        }
    }
}

/// Medication the teacher is asked to administer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(from = "MedicineRequestRecord")]
pub struct MedicineRequest {
    pub id: String,
    pub drug_name: String,
    pub dosage: String,
    pub notes: String,
    pub status: RequestStatus,
}

#[derive(Deserialize)]
struct MedicineRequestRecord {
    #[serde(rename = "_id", default)]
    mongo_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    drug_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    dosage: String,
    #[serde(default, deserialize_with = "null_as_default")]
    notes: String,
    #[serde(default, deserialize_with = "null_as_default")]
    status: RequestStatus,
}

impl From<MedicineRequestRecord> for MedicineRequest {
    fn from(record: MedicineRequestRecord) -> Self {
        Self {
            id: record_id(record.mongo_id, record.id),
            drug_name: record.drug_name,
            dosage: record.dosage,
            notes: record.notes,
            status: record.status,
        }
    }
}

/// Teacher decision on a pending leave request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveDecision {
    Approve,
    Reject,
}

impl LeaveDecision {
    /// Path segment used by the status endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveDecision::Approve => "approve",
            LeaveDecision::Reject => "reject",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMessageRequest {
    pub sender_role: SenderRole,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAlbumItemRequest {
    pub media_url: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLeaveRequest {
    pub date: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMedicineRequest {
    pub drug_name: String,
    pub dosage: String,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sender_role_serializes_lowercase() {
        let request = NewMessageRequest {
            sender_role: SenderRole::Parent,
            text: "hi".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "sender_role": "parent", "text": "hi" })
        );
        assert_eq!(SenderRole::Teacher.to_string(), "teacher");
    }

    #[test]
    fn test_leave_request_accepts_mongo_style_id() {
        let leave: LeaveRequest = serde_json::from_value(json!({
            "_id": "65f0c1",
            "date": "2025-03-01",
            "reason": "Dentist",
            "status": "pending"
        }))
        .unwrap();
        assert_eq!(leave.id, "65f0c1");
        assert_eq!(leave.status, RequestStatus::Pending);

        let leave: LeaveRequest =
            serde_json::from_value(json!({ "id": "7", "date": "2025-03-02" })).unwrap();
        assert_eq!(leave.id, "7");
        assert_eq!(leave.reason, "");
    }

    #[test]
    fn test_unknown_status_does_not_fail_the_list() {
        let meds: Vec<MedicineRequest> = serde_json::from_value(json!([
            { "_id": "a", "drug_name": "Paracetamol", "dosage": "5ml", "status": "confirmed" },
            { "_id": "b", "drug_name": "Saline", "dosage": "2 drops", "status": "archived" }
        ]))
        .unwrap();
        assert_eq!(meds[0].status, RequestStatus::Confirmed);
        assert_eq!(meds[1].status, RequestStatus::Unknown);
        assert_eq!(meds[1].notes, "");
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let meds: Vec<MedicineRequest> = serde_json::from_value(json!([
            { "_id": "a", "drug_name": "Paracetamol", "dosage": "5ml", "notes": null, "status": "pending" },
            { "_id": "b", "drug_name": null, "dosage": "1 tab", "status": null }
        ]))
        .unwrap();
        assert_eq!(meds.len(), 2);
        assert_eq!(meds[0].notes, "");
        assert_eq!(meds[1].drug_name, "");
        assert_eq!(meds[1].status, RequestStatus::Pending);

        let notices: Vec<Notification> = serde_json::from_value(json!([
            { "title": "Sports day", "body": null },
            { "title": null, "body": "Bring a hat" }
        ]))
        .unwrap();
        assert_eq!(notices[0].body, "");
        assert_eq!(notices[1].title, "");

        let leave: LeaveRequest =
            serde_json::from_value(json!({ "_id": "c", "date": "2025-03-01", "reason": null }))
                .unwrap();
        assert_eq!(leave.reason, "");
    }

    #[test]
    fn test_unknown_sender_is_never_own() {
        let messages: Vec<Message> = serde_json::from_value(json!([
            { "sender_role": "parent", "text": "hello" },
            { "sender_role": "system", "text": "Class cancelled" },
            { "sender_role": null, "text": "?" }
        ]))
        .unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].sender_role, SenderRole::Unknown);
        assert!(!messages[1].is_from(SenderRole::Parent));
        assert!(!messages[1].is_from(SenderRole::Teacher));
        assert_eq!(messages[1].display_text(), "Class cancelled");
        assert_eq!(messages[2].sender_role, SenderRole::Unknown);
    }

    #[test]
    fn test_record_with_both_ids_prefers_mongo_id() {
        let leaves: Vec<LeaveRequest> = serde_json::from_value(json!([
            { "_id": "65f0c1", "id": "7", "date": "2025-03-01", "reason": "Dentist" },
            { "_id": "", "id": "8", "date": "2025-03-02" },
            { "date": "2025-03-03" }
        ]))
        .unwrap();
        assert_eq!(leaves[0].id, "65f0c1");
        assert_eq!(leaves[1].id, "8");
        assert_eq!(leaves[2].id, "");

        let med: MedicineRequest =
            serde_json::from_value(json!({ "id": "m1", "_id": "m2", "drug_name": "Saline" }))
                .unwrap();
        assert_eq!(med.id, "m2");
    }

    #[test]
    fn test_message_without_text_is_an_image() {
        let msg: Message = serde_json::from_value(json!({ "sender_role": "teacher" })).unwrap();
        assert_eq!(msg.display_text(), "Image");
        assert!(msg.is_from(SenderRole::Teacher));
        assert!(!msg.is_from(SenderRole::Parent));

        let msg: Message =
            serde_json::from_value(json!({ "sender_role": "parent", "text": "" })).unwrap();
        assert_eq!(msg.display_text(), "Image");
    }

    #[test]
    fn test_album_item_placeholder_is_seeded_by_index() {
        let item: AlbumItem = serde_json::from_value(json!({ "caption": "Sports day" })).unwrap();
        assert_eq!(item.image_src(3), "https://picsum.photos/seed/3/300/300");

        let item: AlbumItem =
            serde_json::from_value(json!({ "media_url": "https://x/1.jpg" })).unwrap();
        assert_eq!(item.image_src(0), "https://x/1.jpg");

        let blank = AlbumItem {
            media_url: Some("  ".to_string()),
            caption: None,
        };
        assert_eq!(blank.image_src(1), "https://picsum.photos/seed/1/300/300");
    }

    #[test]
    fn test_create_bodies_match_backend_shape() {
        let leave = NewLeaveRequest {
            date: "2025-03-01".to_string(),
            reason: "Family trip".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&leave).unwrap(),
            json!({ "date": "2025-03-01", "reason": "Family trip" })
        );

        let med = NewMedicineRequest {
            drug_name: "Ibuprofen".to_string(),
            dosage: "2.5ml".to_string(),
            notes: String::new(),
        };
        assert_eq!(
            serde_json::to_value(&med).unwrap(),
            json!({ "drug_name": "Ibuprofen", "dosage": "2.5ml", "notes": "" })
        );

        let album = NewAlbumItemRequest {
            media_url: "https://x/2.jpg".to_string(),
            caption: "Painting".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&album).unwrap(),
            json!({ "media_url": "https://x/2.jpg", "caption": "Painting" })
        );
    }

    #[test]
    fn test_leave_decision_path_segments() {
        assert_eq!(LeaveDecision::Approve.as_str(), "approve");
        assert_eq!(LeaveDecision::Reject.as_str(), "reject");
    }
}
