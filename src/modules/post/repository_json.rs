use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::{
    api::error,
    modules::post::{model::NewPost, repository::PostRepository, schema::PostEntity},
};

/// Post store backed by a single JSON array on disk.
///
/// Every access goes through `lock`, so a read-modify-write append can never
/// interleave with another append or observe a half-replaced file.
pub struct JsonPostRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonPostRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub async fn read_posts(path: &Path) -> Result<Vec<PostEntity>, error::SystemError> {
    let raw = tokio::fs::read(path).await?;
    let posts = serde_json::from_slice(&raw)?;
    Ok(posts)
}

pub async fn write_posts(path: &Path, posts: &[PostEntity]) -> Result<(), error::SystemError> {
    let serialized = serde_json::to_vec_pretty(posts)?;

    let tmp_path = path.with_extension("json.tmp");
    tokio::fs::write(&tmp_path, serialized).await?;
    tokio::fs::rename(&tmp_path, path).await?;

    Ok(())
}

/// Milliseconds id for a new post, strictly after every stored id.
fn next_id(posts: &[PostEntity], now_ms: i64) -> i64 {
    match posts.iter().map(|p| p.id).max() {
        Some(newest) if newest >= now_ms => newest + 1,
        _ => now_ms,
    }
}

#[async_trait::async_trait]
impl PostRepository for JsonPostRepository {
    async fn find_all(&self) -> Result<Vec<PostEntity>, error::SystemError> {
        let _guard = self.lock.lock().await;
        read_posts(&self.path).await
    }

    async fn create(&self, post: NewPost) -> Result<PostEntity, error::SystemError> {
        let _guard = self.lock.lock().await;

        let mut posts = read_posts(&self.path).await?;

        let id = next_id(&posts, Utc::now().timestamp_millis());
        let created_at = DateTime::from_timestamp_millis(id)
            .ok_or_else(|| error::SystemError::bad_request("Post timestamp out of range"))?;

        let entity = PostEntity {
            id,
            title: post.title,
            description: post.description,
            actor_category: post.actor_category,
            cinema_region: post.cinema_region,
            media_path: post.media_path,
            media_type: post.media_type,
            original_file_name: post.original_file_name,
            created_at,
        };

        posts.push(entity.clone());
        write_posts(&self.path, &posts).await?;

        Ok(entity)
    }
}
