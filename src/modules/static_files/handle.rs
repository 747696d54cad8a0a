use std::io::ErrorKind;
use std::path::Path;

use actix_files::NamedFile;
use actix_web::{get, web, HttpRequest, HttpResponse};

use crate::api::error;
use crate::configs::StorageConfig;
use crate::utils::resolve_under;

const INDEX_FILE: &str = "index.html";

/// Streams the file with byte-range and conditional request support.
async fn file_response(req: &HttpRequest, path: &Path) -> Result<HttpResponse, error::Error> {
    let file = match NamedFile::open_async(path).await {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(error::Error::not_found("File not found"));
        }
        Err(e) => return Err(error::SystemError::from(e).into()),
    };

    Ok(file.into_response(req))
}

/// Raw uploaded media. Only flat file names are served.
#[get("/uploads/{name:.*}")]
pub async fn serve_upload(
    req: HttpRequest,
    storage: web::Data<StorageConfig>,
    name: web::Path<String>,
) -> Result<HttpResponse, error::Error> {
    let name = name.into_inner();
    if name.is_empty() || name.contains('/') || name.contains('\\') {
        return Err(error::Error::not_found("File not found"));
    }

    let path = resolve_under(&storage.upload_dir, &name)
        .ok_or_else(|| error::Error::not_found("File not found"))?;
    file_response(&req, &path).await
}

/// App shell assets, falling back to `index.html` for unknown paths.
pub async fn serve_public(
    req: HttpRequest,
    storage: web::Data<StorageConfig>,
    tail: web::Path<String>,
) -> Result<HttpResponse, error::Error> {
    let tail = tail.into_inner();

    if let Some(path) = resolve_under(&storage.public_dir, &tail) {
        if !tail.is_empty() && tokio::fs::metadata(&path).await.is_ok_and(|m| m.is_file()) {
            return file_response(&req, &path).await;
        }
    }

    file_response(&req, &storage.public_dir.join(INDEX_FILE)).await
}
