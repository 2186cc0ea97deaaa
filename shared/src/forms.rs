//! Form state and the presence checks applied before a write.

use crate::{NewAlbumItemRequest, NewLeaveRequest, NewMedicineRequest};

/// The only validation the client performs
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Items to render for a fetched list, or `None` when the list should show
/// its empty placeholder. Not-yet-loaded, failed and empty all look the same.
pub fn visible_items<T>(data: Option<&Vec<T>>) -> Option<&[T]> {
    match data {
        Some(items) if !items.is_empty() => Some(items.as_slice()),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeaveForm {
    pub date: String,
    pub reason: String,
}

impl LeaveForm {
    pub fn is_complete(&self) -> bool {
        is_present(&self.date) && is_present(&self.reason)
    }

    pub fn to_request(&self) -> NewLeaveRequest {
        NewLeaveRequest {
            date: self.date.trim().to_string(),
            reason: self.reason.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MedicineForm {
    pub drug_name: String,
    pub dosage: String,
    pub notes: String,
}

impl MedicineForm {
    /// Notes are optional
    pub fn is_complete(&self) -> bool {
        is_present(&self.drug_name) && is_present(&self.dosage)
    }

    pub fn to_request(&self) -> NewMedicineRequest {
        NewMedicineRequest {
            drug_name: self.drug_name.trim().to_string(),
            dosage: self.dosage.trim().to_string(),
            notes: self.notes.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlbumUploadForm {
    pub media_url: String,
    pub caption: String,
}

impl AlbumUploadForm {
    pub fn is_complete(&self) -> bool {
        is_present(&self.media_url)
    }

    pub fn to_request(&self) -> NewAlbumItemRequest {
        NewAlbumItemRequest {
            media_url: self.media_url.trim().to_string(),
            caption: self.caption.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AlbumItem;

    #[test]
    fn test_presence_ignores_whitespace() {
        assert!(is_present("hi"));
        assert!(!is_present(""));
        assert!(!is_present("  \n\t"));
    }

    #[test]
    fn test_null_and_empty_lists_both_show_placeholder() {
        let missing: Option<&Vec<AlbumItem>> = None;
        assert!(visible_items(missing).is_none());

        let empty: Vec<AlbumItem> = Vec::new();
        assert!(visible_items(Some(&empty)).is_none());
    }

    #[test]
    fn test_grid_length_equals_response_length() {
        let album = vec![AlbumItem {
            media_url: Some("https://x/1.jpg".to_string()),
            caption: None,
        }];
        let items = visible_items(Some(&album)).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].image_src(0), "https://x/1.jpg");
    }

    #[test]
    fn test_leave_form_requires_date_and_reason() {
        let mut form = LeaveForm::default();
        assert!(!form.is_complete());

        form.date = "2025-05-02".to_string();
        assert!(!form.is_complete());

        form.reason = "Grandma's birthday".to_string();
        assert!(form.is_complete());
        assert_eq!(form.to_request().date, "2025-05-02");
    }

    #[test]
    fn test_medicine_notes_are_optional() {
        let form = MedicineForm {
            drug_name: " Amoxicillin ".to_string(),
            dosage: "5ml after lunch".to_string(),
            notes: String::new(),
        };
        assert!(form.is_complete());

        let request = form.to_request();
        assert_eq!(request.drug_name, "Amoxicillin");
        assert_eq!(request.notes, "");

        let missing_dosage = MedicineForm {
            dosage: " ".to_string(),
            ..form
        };
        assert!(!missing_dosage.is_complete());
    }

    #[test]
    fn test_album_upload_needs_only_url() {
        let mut form = AlbumUploadForm::default();
        form.caption = "Field trip".to_string();
        assert!(!form.is_complete());

        form.media_url = "https://cdn.example/p.jpg".to_string();
        assert!(form.is_complete());
        assert_eq!(form.to_request().caption, "Field trip");
    }
}
