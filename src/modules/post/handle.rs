use actix_multipart::{Field, Multipart};
use actix_web::{get, post, web};
use futures_util::TryStreamExt;

use crate::api::{error, success};
use crate::constants::MAX_TEXT_FIELD_SIZE;
use crate::modules::post::model::{MediaUpload, PostForm};
use crate::modules::post::schema::PostEntity;
use crate::modules::post::service::{PostService, FILE_TOO_LARGE};

async fn read_text(field: &mut Field) -> Result<String, error::Error> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.try_next().await? {
        if bytes.len() + chunk.len() > MAX_TEXT_FIELD_SIZE {
            return Err(error::Error::bad_request("Form field too large"));
        }
        bytes.extend_from_slice(&chunk);
    }
    String::from_utf8(bytes).map_err(|_| error::Error::bad_request("Form fields must be UTF-8"))
}

async fn drain(field: &mut Field) -> Result<(), error::Error> {
    while field.try_next().await?.is_some() {}
    Ok(())
}

async fn read_media(
    field: &mut Field,
    original_file_name: String,
    service: &PostService,
) -> Result<MediaUpload, error::Error> {
    // Declared type wins; the extension is only a fallback.
    let mime_type = field
        .content_type()
        .map(|m| m.essence_str().to_string())
        .or_else(|| mime_guess::from_path(&original_file_name).first_raw().map(str::to_string))
        .unwrap_or_else(|| "application/octet-stream".to_string());

    service.validate_mime(&mime_type)?;

    let max_file_size = service.max_file_size();
    let mut bytes = Vec::new();
    while let Some(chunk) = field.try_next().await? {
        if bytes.len() + chunk.len() > max_file_size {
            return Err(error::Error::bad_request(FILE_TOO_LARGE));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(MediaUpload { original_file_name, mime_type, bytes })
}

#[get("")]
pub async fn list_posts(
    service: web::Data<PostService>,
) -> Result<success::Success<Vec<PostEntity>>, error::Error> {
    let posts = service.list_posts().await?;
    Ok(success::Success::ok(posts))
}

#[post("")]
pub async fn create_post(
    service: web::Data<PostService>,
    mut payload: Multipart,
) -> Result<success::Success<PostEntity>, error::Error> {
    let mut form = PostForm::default();
    let mut media: Option<MediaUpload> = None;

    while let Some(mut field) = payload.try_next().await? {
        let (name, filename) = match field.content_disposition() {
            Some(cd) => (
                cd.get_name().unwrap_or_default().to_string(),
                cd.get_filename().map(str::to_string),
            ),
            None => (String::new(), None),
        };

        match name.as_str() {
            "title" => form.title = read_text(&mut field).await?,
            "description" => form.description = read_text(&mut field).await?,
            "actorCategory" => form.actor_category = read_text(&mut field).await?,
            "cinemaRegion" => form.cinema_region = read_text(&mut field).await?,
            // Browsers send an unnamed empty part when no file was picked.
            "media" if media.is_none() => match filename.filter(|f| !f.is_empty()) {
                Some(filename) => media = Some(read_media(&mut field, filename, &service).await?),
                None => drain(&mut field).await?,
            },
            _ => drain(&mut field).await?,
        }
    }

    let post = service.create_post(form, media).await?;
    Ok(success::Success::created(post))
}
