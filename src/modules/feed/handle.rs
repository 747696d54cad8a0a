use actix_web::{get, web};

use crate::api::{error, success};
use crate::modules::feed::render::{render_feed, FeedFilter};
use crate::modules::post::service::PostService;
use crate::utils::ValidatedQuery;

/// Server-rendered feed fragment, filtered by region and category.
#[get("/feed")]
pub async fn get_feed(
    service: web::Data<PostService>,
    filter: ValidatedQuery<FeedFilter>,
) -> Result<success::Success<()>, error::Error> {
    let posts = service.list_posts().await?;
    let visible = filter.0.apply(&posts);
    Ok(success::Success::html(render_feed(&visible)))
}
