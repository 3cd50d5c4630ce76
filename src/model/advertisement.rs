// src/model/advertisement.rs

use uuid::Uuid;

use crate::model::content::AdvertisementContent;

/// **广告选择结果**
///
/// 每次请求新建，不可变，不落库。`Empty` 是“未选中任何广告”的哨兵值，
/// 调用方只需要处理这一个枚举，不会拿到 null 或错误。
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedAdvertisement {
    Content {
        id: Uuid,
        content: AdvertisementContent,
    },
    Empty,
}

impl GeneratedAdvertisement {
    /// 包装选中的创意，并分配新的广告 ID
    pub fn new(content: AdvertisementContent) -> Self {
        GeneratedAdvertisement::Content {
            id: Uuid::new_v4(),
            content,
        }
    }

    pub fn empty() -> Self {
        GeneratedAdvertisement::Empty
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, GeneratedAdvertisement::Empty)
    }

    pub fn content(&self) -> Option<&AdvertisementContent> {
        match self {
            GeneratedAdvertisement::Content { content, .. } => Some(content),
            GeneratedAdvertisement::Empty => None,
        }
    }

    pub fn id(&self) -> Option<Uuid> {
        match self {
            GeneratedAdvertisement::Content { id, .. } => Some(*id),
            GeneratedAdvertisement::Empty => None,
        }
    }
}

impl Default for GeneratedAdvertisement {
    fn default() -> Self {
        GeneratedAdvertisement::Empty
    }
}
