// src/dao/file.rs

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use crate::dao::memory::{InMemoryContentDao, InMemoryTargetingGroupDao};
use crate::model::content::AdvertisementContent;
use crate::targeting::group::{TargetingGroup, TargetingGroupRecord};

/// 目录文件加载错误
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate content id in catalog: {0}")]
    DuplicateContentId(String),
}

/// 加载完成的广告目录：创意存储 + 定向组存储
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub content_dao: InMemoryContentDao,
    pub targeting_group_dao: InMemoryTargetingGroupDao,
    pub content_count: usize,
    pub targeting_group_count: usize,
}

/// 从 JSON 文件读取广告目录
pub struct FileCatalogAdapter {
    pub content_file: PathBuf,
    pub targeting_file: PathBuf,
}

impl FileCatalogAdapter {
    pub fn new(content_file: impl Into<PathBuf>, targeting_file: impl Into<PathBuf>) -> Self {
        Self {
            content_file: content_file.into(),
            targeting_file: targeting_file.into(),
        }
    }

    /// 读取两个文件并构建内存存储，`content_id` 重复视为错误
    pub fn load(&self) -> Result<Catalog, CatalogError> {
        let contents: Vec<AdvertisementContent> = read_json(&self.content_file)?;
        let records: Vec<TargetingGroupRecord> = read_json(&self.targeting_file)?;

        let mut seen = HashSet::new();
        for content in &contents {
            if !seen.insert(content.content_id.as_str()) {
                return Err(CatalogError::DuplicateContentId(content.content_id.clone()));
            }
        }

        let content_count = contents.len();
        let targeting_group_count = records.len();
        let targeting_groups: Vec<TargetingGroup> = records.into_iter().map(TargetingGroup::from).collect();

        info!(
            content_file = %self.content_file.display(),
            targeting_file = %self.targeting_file.display(),
            content_count,
            targeting_group_count,
            "advertisement catalog loaded"
        );

        Ok(Catalog {
            content_dao: InMemoryContentDao::new(contents),
            targeting_group_dao: InMemoryTargetingGroupDao::new(targeting_groups),
            content_count,
            targeting_group_count,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
