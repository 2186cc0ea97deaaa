//! Backend endpoint catalogue.
//!
//! Paths are relative to the configured backend origin.

use crate::LeaveDecision;

pub const NOTIFICATIONS_LIMIT: u32 = 10;
pub const ALBUM_LIMIT: u32 = 12;
pub const MESSAGES_LIMIT: u32 = 20;

/// Fixed string encoded in the pick-up QR code
pub const PICKUP_QR_PAYLOAD: &str = "WHEREMYKIDSAT";

/// Image URL of the pick-up QR code, rendered by an external QR service
pub fn qr_image_url() -> String {
    format!(
        "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data={}",
        PICKUP_QR_PAYLOAD
    )
}

/// A list the client reads; each key is one GET query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKey {
    Notifications,
    Album,
    Messages,
    PendingLeaveRequests,
    PendingMedicineRequests,
}

impl ListKey {
    pub fn path(&self) -> String {
        match self {
            ListKey::Notifications => format!("/notifications?limit={}", NOTIFICATIONS_LIMIT),
            ListKey::Album => format!("/album?limit={}", ALBUM_LIMIT),
            ListKey::Messages => format!("/messages?limit={}", MESSAGES_LIMIT),
            ListKey::PendingLeaveRequests => "/leave-requests?status=pending".to_string(),
            ListKey::PendingMedicineRequests => "/medicine-requests?status=pending".to_string(),
        }
    }
}

/// A write call issued on user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    SendMessage,
    UploadAlbumItem,
    CreateLeaveRequest,
    DecideLeaveRequest { id: String, decision: LeaveDecision },
    CreateMedicineRequest,
    ConfirmMedicineRequest { id: String },
}

impl Mutation {
    /// POST path of the write
    pub fn path(&self) -> String {
        match self {
            Mutation::SendMessage => "/messages".to_string(),
            Mutation::UploadAlbumItem => "/album".to_string(),
            Mutation::CreateLeaveRequest => "/leave-requests".to_string(),
            Mutation::DecideLeaveRequest { id, decision } => {
                format!("/leave-requests/{}/{}", urlencoding::encode(id), decision.as_str())
            }
            Mutation::CreateMedicineRequest => "/medicine-requests".to_string(),
            Mutation::ConfirmMedicineRequest { id } => {
                format!("/medicine-requests/{}/confirm", urlencoding::encode(id))
            }
        }
    }

    /// Status actions need a record id; creates never do
    pub fn is_addressable(&self) -> bool {
        match self {
            Mutation::DecideLeaveRequest { id, .. } | Mutation::ConfirmMedicineRequest { id } => {
                !id.trim().is_empty()
            }
            _ => true,
        }
    }

    /// Lists whose server-side contents this write can change
    pub fn affected_lists(&self) -> &'static [ListKey] {
        match self {
            Mutation::SendMessage => &[ListKey::Messages],
            Mutation::UploadAlbumItem => &[ListKey::Album],
            Mutation::CreateLeaveRequest | Mutation::DecideLeaveRequest { .. } => {
                &[ListKey::PendingLeaveRequests]
            }
            Mutation::CreateMedicineRequest | Mutation::ConfirmMedicineRequest { .. } => {
                &[ListKey::PendingMedicineRequests]
            }
        }
    }
}
