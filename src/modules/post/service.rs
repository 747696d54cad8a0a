use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::info;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use validator::Validate;

use crate::api::error;
use crate::modules::post::{
    model::{MediaUpload, NewPost, PostForm, UploadConfig},
    repository::PostRepository,
    schema::{MediaType, PostEntity},
};
use crate::utils::sanitize_filename;

pub const MISSING_FIELDS: &str = "Please provide all required fields.";
pub const MISSING_MEDIA: &str = "A media file is required.";
pub const DISALLOWED_MEDIA: &str = "Only JPEG, PNG, WEBP images and MP4/WEBM videos are allowed.";
pub const FILE_TOO_LARGE: &str = "File too large";

const MAX_NAME_ATTEMPTS: i64 = 16;

/// Writes and flushes `bytes`; a partial file at `file_path` is removed on
/// failure.
async fn write_or_discard<W>(
    mut file: W,
    file_path: &Path,
    bytes: &[u8],
) -> Result<(), error::SystemError>
where
    W: AsyncWrite + Unpin,
{
    let written = async {
        file.write_all(bytes).await?;
        file.flush().await
    }
    .await;
    drop(file);

    if let Err(e) = written {
        log::error!("Discarding partial upload {}: {}", file_path.display(), e);
        tokio::fs::remove_file(file_path).await.ok();
        return Err(e.into());
    }
    Ok(())
}

#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository + Send + Sync>,
    config: UploadConfig,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository + Send + Sync>, config: UploadConfig) -> Self {
        info!(
            "PostService initialized (upload dir: {}, max size: {} bytes)",
            config.upload_dir.display(),
            config.max_file_size
        );
        PostService { repo, config }
    }

    pub fn max_file_size(&self) -> usize {
        self.config.max_file_size
    }

    /// Checks the MIME type against the whitelist and classifies it.
    pub fn validate_mime(&self, mime_type: &str) -> Result<MediaType, error::SystemError> {
        if !self.config.allowed_mime_types.iter().any(|allowed| allowed == mime_type) {
            return Err(error::SystemError::bad_request(DISALLOWED_MEDIA));
        }
        Ok(MediaType::from_mime(mime_type))
    }

    pub fn validate_size(&self, file_size: usize) -> Result<(), error::SystemError> {
        if file_size > self.config.max_file_size {
            return Err(error::SystemError::bad_request(FILE_TOO_LARGE));
        }
        Ok(())
    }

    /// All posts, newest first
    pub async fn list_posts(&self) -> Result<Vec<PostEntity>, error::SystemError> {
        let mut posts = self.repo.find_all().await?;
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    /// Writes the media under `<timestamp>_<sanitized name>`, bumping the
    /// timestamp until the name is free.
    async fn save_file(
        &self,
        original_file_name: &str,
        bytes: &[u8],
    ) -> Result<(String, PathBuf), error::SystemError> {
        tokio::fs::create_dir_all(&self.config.upload_dir).await?;

        let safe_name = sanitize_filename(original_file_name);
        let timestamp = chrono::Utc::now().timestamp_millis();

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let filename = format!("{}_{}", timestamp + attempt, safe_name);
            let file_path = self.config.upload_dir.join(&filename);

            let file = match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&file_path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            };

            write_or_discard(file, &file_path, bytes).await?;
            return Ok((filename, file_path));
        }

        Err(std::io::Error::new(ErrorKind::AlreadyExists, "No free upload file name").into())
    }

    /// Validates the form and media, stores the file, then appends the post.
    /// Nothing touches the disk unless every check passes.
    pub async fn create_post(
        &self,
        form: PostForm,
        media: Option<MediaUpload>,
    ) -> Result<PostEntity, error::SystemError> {
        form.validate().map_err(|_| error::SystemError::bad_request(MISSING_FIELDS))?;

        let media = media.ok_or_else(|| error::SystemError::bad_request(MISSING_MEDIA))?;
        let media_type = self.validate_mime(&media.mime_type)?;
        self.validate_size(media.bytes.len())?;

        let (filename, file_path) = self.save_file(&media.original_file_name, &media.bytes).await?;

        let new_post = NewPost {
            title: form.title,
            description: form.description,
            actor_category: form.actor_category,
            cinema_region: form.cinema_region,
            media_path: format!("{}/{}", self.config.base_url, filename),
            media_type,
            original_file_name: media.original_file_name,
        };

        match self.repo.create(new_post).await {
            Ok(post) => {
                info!("Stored post {} ({:?}, {})", post.id, post.media_type, post.media_path);
                Ok(post)
            }
            Err(e) => {
                tokio::fs::remove_file(&file_path).await.ok();
                Err(e)
            }
        }
    }
}
