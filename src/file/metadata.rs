//! File metadata types for Filedrop.

use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

/// Identifier of a metadata row (`SERIAL` in PostgreSQL).
pub type FileId = i32;

/// Metadata row describing one uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow, ToSchema)]
pub struct FileRecord {
    /// Unique file ID, assigned by the database.
    pub id: FileId,
    /// Original filename as sent by the client.
    pub filename: String,
    /// Location of the stored bytes.
    pub filepath: String,
    /// When the row was inserted (database clock, UTC).
    #[schema(value_type = String, example = "2024-01-15T10:30:00")]
    pub uploaded_at: NaiveDateTime,
}

/// Data for inserting a new metadata row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFileRecord {
    /// Original filename.
    pub filename: String,
    /// Location of the stored bytes.
    pub filepath: String,
}

impl NewFileRecord {
    /// Create a new NewFileRecord.
    pub fn new(filename: impl Into<String>, filepath: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            filepath: filepath.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_file_record_json_shape() {
        let record = FileRecord {
            id: 7,
            filename: "report.pdf".to_string(),
            filepath: "uploads/report.pdf".to_string(),
            uploaded_at: NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["filename"], "report.pdf");
        assert_eq!(json["filepath"], "uploads/report.pdf");
        assert_eq!(json["uploaded_at"], "2024-01-15T10:30:00");
        assert_eq!(json.as_object().unwrap().len(), 4);
    }
}
