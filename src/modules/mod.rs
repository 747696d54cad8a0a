pub mod post {
    pub mod schema;
    pub mod model;
    pub mod repository;
    pub mod repository_json;
    pub mod handle;
    pub mod service;
    pub mod route;
}

pub mod feed {
    pub mod render;
    pub mod handle;
    pub mod route;
}

pub mod static_files {
    pub mod handle;
    pub mod route;
}
