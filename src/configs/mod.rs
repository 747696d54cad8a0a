use std::path::{Path, PathBuf};

use crate::{api::error, ENV};

pub const POSTS_FILE_NAME: &str = "posts.json";

/// On-disk layout shared by the post store and the static file routes.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub upload_dir: PathBuf,
    pub data_dir: PathBuf,
    pub public_dir: PathBuf,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        Self {
            upload_dir: PathBuf::from(&ENV.upload_dir),
            data_dir: PathBuf::from(&ENV.data_dir),
            public_dir: PathBuf::from(&ENV.public_dir),
        }
    }

    pub fn posts_file(&self) -> PathBuf {
        self.data_dir.join(POSTS_FILE_NAME)
    }
}

async fn ensure_directory(dir: &Path) -> Result<(), error::SystemError> {
    if !tokio::fs::try_exists(dir).await? {
        tokio::fs::create_dir_all(dir).await?;
        log::info!("Created directory {}", dir.display());
    }
    Ok(())
}

/// Creates the upload and data directories and seeds an empty post list.
pub async fn init_storage(config: &StorageConfig) -> Result<(), error::SystemError> {
    ensure_directory(&config.upload_dir).await?;
    ensure_directory(&config.data_dir).await?;

    let posts_file = config.posts_file();
    if !tokio::fs::try_exists(&posts_file).await? {
        tokio::fs::write(&posts_file, b"[]").await?;
        log::info!("Initialized empty post store at {}", posts_file.display());
    }
    Ok(())
}
