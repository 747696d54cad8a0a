use crate::modules::post::handle::*;
use actix_web::web::{scope, ServiceConfig};

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(scope("/posts").service(list_posts).service(create_post));
}
