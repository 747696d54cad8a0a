use actix_web::{http::header::ContentType, HttpResponse};

pub enum Body<T: serde::Serialize> {
    Json(T),
    Html(String),
}

pub struct Success<T: serde::Serialize> {
    pub status: actix_web::http::StatusCode,
    pub body: Body<T>,
}

impl<T: serde::Serialize> Success<T> {
    pub fn ok(data: T) -> Self {
        Self { status: actix_web::http::StatusCode::OK, body: Body::Json(data) }
    }

    pub fn created(data: T) -> Self {
        Self { status: actix_web::http::StatusCode::CREATED, body: Body::Json(data) }
    }
}

impl Success<()> {
    pub fn html(markup: String) -> Self {
        Self { status: actix_web::http::StatusCode::OK, body: Body::Html(markup) }
    }
}

impl<T: serde::Serialize> actix_web::Responder for Success<T> {
    type Body = actix_web::body::BoxBody;

    fn respond_to(self, _req: &actix_web::HttpRequest) -> HttpResponse<Self::Body> {
        let mut response = HttpResponse::build(self.status);

        match self.body {
            Body::Json(data) => response.json(data),
            Body::Html(markup) => response.content_type(ContentType::html()).body(markup),
        }
    }
}
