// src/model/content.rs

use serde::{Serialize, Deserialize};

/// 一条可渲染的广告创意，由外部内容存储提供，这里只读
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AdvertisementContent {
    pub content_id: String,         // 创意唯一 ID
    pub marketplace_id: String,     // 所属 marketplace
    pub renderable_content: String, // 创意内容（HTML 等，对选择逻辑不透明）
}

impl AdvertisementContent {
    pub fn new(content_id: &str, marketplace_id: &str, renderable_content: &str) -> Self {
        Self {
            content_id: content_id.to_string(),
            marketplace_id: marketplace_id.to_string(),
            renderable_content: renderable_content.to_string(),
        }
    }
}
