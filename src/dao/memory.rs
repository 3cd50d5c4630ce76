// src/dao/memory.rs

use std::collections::HashMap;

use crate::dao::ReadableDao;
use crate::model::content::AdvertisementContent;
use crate::targeting::group::TargetingGroup;

/// 按 key 分组，组内保持原始顺序
fn group_by_key<T, F>(items: Vec<T>, key: F) -> HashMap<String, Vec<T>>
where
    F: Fn(&T) -> &str,
{
    let mut grouped: HashMap<String, Vec<T>> = HashMap::new();
    for item in items {
        grouped.entry(key(&item).to_string()).or_default().push(item);
    }
    grouped
}

/// 内存中的创意存储，按 marketplace 索引；构建后只读，可并发读取
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentDao {
    contents: HashMap<String, Vec<AdvertisementContent>>,
}

impl InMemoryContentDao {
    pub fn new(contents: Vec<AdvertisementContent>) -> Self {
        Self {
            contents: group_by_key(contents, |c| c.marketplace_id.as_str()),
        }
    }

    pub fn marketplace_count(&self) -> usize {
        self.contents.len()
    }
}

impl ReadableDao<str, Vec<AdvertisementContent>> for InMemoryContentDao {
    fn get(&self, marketplace_id: &str) -> Option<Vec<AdvertisementContent>> {
        self.contents.get(marketplace_id).cloned()
    }
}

/// 内存中的定向组存储，按 content id 索引
#[derive(Debug, Clone, Default)]
pub struct InMemoryTargetingGroupDao {
    targeting_groups: HashMap<String, Vec<TargetingGroup>>,
}

impl InMemoryTargetingGroupDao {
    pub fn new(targeting_groups: Vec<TargetingGroup>) -> Self {
        Self {
            targeting_groups: group_by_key(targeting_groups, |g| g.content_id.as_str()),
        }
    }
}

impl ReadableDao<str, Vec<TargetingGroup>> for InMemoryTargetingGroupDao {
    fn get(&self, content_id: &str) -> Option<Vec<TargetingGroup>> {
        self.targeting_groups.get(content_id).cloned()
    }
}
