use serde::Deserialize;
use validator::Validate;

use crate::modules::post::schema::{MediaType, PostEntity};
use crate::utils::escape_html;

pub const ALL: &str = "all";
pub const EMPTY_FEED: &str = "No posts yet. Be the first to celebrate your favourite moment!";

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FeedFilter {
    #[validate(length(max = 256))]
    pub cinema_region: Option<String>,
    #[validate(length(max = 256))]
    pub actor_category: Option<String>,
}

fn field_matches(wanted: Option<&str>, actual: &str) -> bool {
    match wanted {
        None | Some(ALL) => true,
        Some(value) => value == actual,
    }
}

impl FeedFilter {
    pub fn matches(&self, post: &PostEntity) -> bool {
        field_matches(self.cinema_region.as_deref(), &post.cinema_region)
            && field_matches(self.actor_category.as_deref(), &post.actor_category)
    }

    pub fn apply<'a>(&self, posts: &'a [PostEntity]) -> Vec<&'a PostEntity> {
        posts.iter().filter(|post| self.matches(post)).collect()
    }
}

fn render_media(post: &PostEntity) -> String {
    let src = escape_html(&post.media_path);
    match post.media_type {
        MediaType::Video => {
            let mime = mime_guess::from_path(&post.media_path).first_raw().unwrap_or("video/mp4");
            format!(
                "<video controls preload=\"metadata\"><source src=\"{src}\" type=\"{mime}\" />\
                 Your browser does not support embedded videos.</video>"
            )
        }
        MediaType::Image => format!(
            "<img src=\"{src}\" alt=\"{}\" loading=\"lazy\" />",
            escape_html(&post.title)
        ),
    }
}

pub fn render_post(post: &PostEntity) -> String {
    format!(
        "<article class=\"card\">\
         <div class=\"card__media\">{media}</div>\
         <div class=\"card__content\">\
         <h3>{title}</h3>\
         <p class=\"meta\">{region} · {category}</p>\
         <p>{description}</p>\
         <p class=\"timestamp\">Shared on {shared}</p>\
         </div></article>",
        media = render_media(post),
        title = escape_html(&post.title),
        region = escape_html(&post.cinema_region),
        category = escape_html(&post.actor_category),
        description = escape_html(&post.description),
        shared = post.created_at.format("%d %b %Y, %I:%M %p UTC"),
    )
}

/// Card list for the posts, or the empty-state message.
pub fn render_feed(posts: &[&PostEntity]) -> String {
    if posts.is_empty() {
        return format!("<p class=\"empty\">{EMPTY_FEED}</p>");
    }
    posts.iter().map(|post| render_post(post)).collect()
}
