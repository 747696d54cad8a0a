use std::path::PathBuf;

use validator::{Validate, ValidationError};

use crate::constants::{ALLOWED_MIME_TYPES, DEFAULT_MAX_UPLOAD_SIZE};
use crate::modules::post::schema::MediaType;

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Text fields of the upload form
#[derive(Debug, Clone, Default, Validate)]
pub struct PostForm {
    #[validate(custom(function = "non_blank"))]
    pub title: String,
    #[validate(custom(function = "non_blank"))]
    pub description: String,
    #[validate(custom(function = "non_blank"))]
    pub actor_category: String,
    #[validate(custom(function = "non_blank"))]
    pub cinema_region: String,
}

/// Uploaded media buffered from the multipart stream
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub original_file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Post fields known before the store assigns `id` and `createdAt`
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub description: String,
    pub actor_category: String,
    pub cinema_region: String,
    pub media_path: String,
    pub media_type: MediaType,
    pub original_file_name: String,
}

/// File upload configuration
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub max_file_size: usize,
    pub allowed_mime_types: Vec<String>,
    pub upload_dir: PathBuf,
    pub base_url: String,
}

impl UploadConfig {
    pub fn with_upload_dir(upload_dir: impl Into<PathBuf>) -> Self {
        Self { upload_dir: upload_dir.into(), ..Self::default() }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_UPLOAD_SIZE,
            allowed_mime_types: ALLOWED_MIME_TYPES.iter().map(|m| m.to_string()).collect(),
            upload_dir: PathBuf::from("./uploads"),
            base_url: "/uploads".to_string(),
        }
    }
}
