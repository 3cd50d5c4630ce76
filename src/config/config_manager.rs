// src/config/config_manager.rs

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::dao::file::FileCatalogAdapter;

#[derive(Clone, Debug)]
pub struct ConfigManager {
    pub port: u16,
    pub log_dir: String,
    pub content_file: PathBuf,
    pub targeting_file: PathBuf,
}

impl ConfigManager {
    pub fn new(port: u16, log_dir: &str, content_file: &str, targeting_file: &str) -> Self {
        ConfigManager {
            port,
            log_dir: log_dir.to_string(),
            content_file: PathBuf::from(content_file),
            targeting_file: PathBuf::from(targeting_file),
        }
    }

    /// 服务监听地址
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    pub fn catalog_adapter(&self) -> FileCatalogAdapter {
        FileCatalogAdapter::new(self.content_file.clone(), self.targeting_file.clone())
    }
}
