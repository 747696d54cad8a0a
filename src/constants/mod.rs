pub const DEFAULT_MAX_UPLOAD_SIZE: usize = 30 * 1024 * 1024; // 30 MB for short clips

pub const ALLOWED_MIME_TYPES: &[&str] =
    &["image/jpeg", "image/png", "image/webp", "video/mp4", "video/webm"];

pub const MAX_TEXT_FIELD_SIZE: usize = 64 * 1024;

pub struct Env {
    pub ip: String,
    pub port: u16,
    pub upload_dir: String,
    pub data_dir: String,
    pub public_dir: String,
    pub max_upload_size: usize,
    pub frontend_url: Option<String>,
}

impl Env {
    fn new() -> Self {
        let ip = std::env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16 integer");

        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string());
        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());
        let public_dir = std::env::var("PUBLIC_DIR").unwrap_or_else(|_| "./public".to_string());

        let max_upload_size = std::env::var("MAX_UPLOAD_SIZE")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_SIZE.to_string())
            .parse::<usize>()
            .expect("MAX_UPLOAD_SIZE must be a valid usize integer");

        let frontend_url = std::env::var("FRONTEND_URL").ok().filter(|s| !s.trim().is_empty());

        Env { ip, port, upload_dir, data_dir, public_dir, max_upload_size, frontend_url }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
