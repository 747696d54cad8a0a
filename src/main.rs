use actix_cors::Cors;
use actix_web::{
    middleware::{Condition, Logger},
    web, App, HttpServer,
};
use std::sync::{Arc, LazyLock};

use crate::{
    configs::{init_storage, StorageConfig},
    modules::post::{model::UploadConfig, repository_json::JsonPostRepository, service::PostService},
};

mod api;
mod configs;
mod constants;
mod modules;
mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

/// Route table shared by the server and the HTTP tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").configure(modules::post::route::configure))
        .configure(modules::feed::route::configure)
        .configure(modules::static_files::route::configure);
}

fn cors() -> Cors {
    match ENV.frontend_url.as_deref() {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .max_age(3600),
        None => Cors::default(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let storage = StorageConfig::from_env();
    init_storage(&storage).await.map_err(|e| std::io::Error::other(e.to_string()))?;

    let upload_config = UploadConfig {
        max_file_size: ENV.max_upload_size,
        ..UploadConfig::with_upload_dir(&storage.upload_dir)
    };
    let post_repo = JsonPostRepository::new(storage.posts_file());
    log::info!("Post store at {}", post_repo.path().display());
    let post_service = PostService::new(Arc::new(post_repo), upload_config);

    log::info!("CinemaTalks portal server running on http://{}:{}", ENV.ip.as_str(), ENV.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Condition::new(ENV.frontend_url.is_some(), cors()))
            .app_data(web::Data::new(post_service.clone()))
            .app_data(web::Data::new(storage.clone()))
            .configure(routes)
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(2)
    .run()
    .await
}
