use actix_web::{web, FromRequest};
use futures_util::future::LocalBoxFuture;
use std::path::{Component, Path, PathBuf};
use validator::Validate;

use crate::api::error;

/// Replaces every character outside `[A-Za-z0-9.-]` with `_`.
pub fn sanitize_filename(original: &str) -> String {
    let safe: String = original
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
        .collect();

    if safe.is_empty() {
        "upload".to_string()
    } else {
        safe
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Joins a request path tail onto `root`, refusing anything that could
/// escape it.
pub fn resolve_under(root: &Path, tail: &str) -> Option<PathBuf> {
    let relative = Path::new(tail);
    let mut resolved = root.to_path_buf();

    for component in relative.components() {
        match component {
            Component::Normal(segment) => resolved.push(segment),
            Component::CurDir => {}
            _ => return None,
        }
    }

    Some(resolved)
}

pub struct ValidatedQuery<T>(pub T);

impl<T> FromRequest for ValidatedQuery<T>
where
    T: Validate + serde::de::DeserializeOwned + 'static,
{
    type Error = error::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(
        req: &actix_web::HttpRequest,
        payload: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        let fut = web::Query::<T>::from_request(req, payload);

        Box::pin(async move {
            let query = fut.await.map_err(|e| error::Error::BadRequest(e.to_string().into()))?;
            query.validate().map_err(|e| error::Error::BadRequest(e.to_string().into()))?;
            Ok(ValidatedQuery(query.into_inner()))
        })
    }
}
