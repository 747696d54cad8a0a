use crate::modules::static_files::handle::*;
use actix_web::web::{self, ServiceConfig};

/// Must be registered after every other route: the shell fallback matches
/// any GET path.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(serve_upload)
        .service(web::resource("/{tail:.*}").route(web::get().to(serve_public)));
}
