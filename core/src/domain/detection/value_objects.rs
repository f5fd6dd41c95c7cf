use bytes::Bytes;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Default upper bound on uploaded tray photos.
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AnalyzeTrayInput {
    pub image_data: Bytes,
    pub filename: String,
    pub user_id: Option<Uuid>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetDetectionsFilter {
    pub detected_from: Option<DateTime<Utc>>,
    pub detected_to: Option<DateTime<Utc>>,
    pub user_id: Option<Uuid>,
}
