use crate::{
    api::error,
    modules::post::{model::NewPost, schema::PostEntity},
};

#[async_trait::async_trait]
pub trait PostRepository {
    /// All stored posts in insertion order.
    async fn find_all(&self) -> Result<Vec<PostEntity>, error::SystemError>;

    /// Appends a post, assigning its `id` and `created_at`.
    async fn create(&self, post: NewPost) -> Result<PostEntity, error::SystemError>;
}
