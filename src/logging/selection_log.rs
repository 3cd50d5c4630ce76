// src/logging/selection_log.rs

use serde::{Serialize, Deserialize};
use chrono::Utc;
use tracing::info;

use crate::model::advertisement::GeneratedAdvertisement;

/// **广告选择日志**，每个 HTTP 选择请求一条
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SelectionLog {
    pub timestamp: String,          // 记录时间（RFC 3339）
    pub log_type: String,           // 日志类型，固定为 "ad_selection"
    pub request_id: String,         // 请求 ID
    pub customer_id: String,        // 客户 ID，可以为空
    pub marketplace_id: String,     // marketplace ID
    pub status: String,             // "selected" or "empty"
    pub advertisement_id: Option<String>, // 生成的广告 ID
    pub content_id: Option<String>, // 选中的创意
    pub elapsed_us: u64,            // 选择耗时（微秒）
}

impl SelectionLog {
    pub fn new(request_id: &str, customer_id: &str, marketplace_id: &str) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            log_type: "ad_selection".to_string(),
            request_id: request_id.to_string(),
            customer_id: customer_id.to_string(),
            marketplace_id: marketplace_id.to_string(),
            status: "empty".to_string(), // 默认未选中，后续更新
            advertisement_id: None,
            content_id: None,
            elapsed_us: 0,
        }
    }

    /// **记录选择结果**
    pub fn set_outcome(&mut self, advertisement: &GeneratedAdvertisement, elapsed_us: u64) {
        self.elapsed_us = elapsed_us;
        match advertisement {
            GeneratedAdvertisement::Content { id, content } => {
                self.status = "selected".to_string();
                self.advertisement_id = Some(id.to_string());
                self.content_id = Some(content.content_id.clone());
            }
            GeneratedAdvertisement::Empty => {
                self.status = "empty".to_string();
                self.advertisement_id = None;
                self.content_id = None;
            }
        }
    }

    /// 以 JSON 形式写入 `ad_selection` target
    pub fn emit(&self) {
        match serde_json::to_string(self) {
            Ok(line) => info!(target: "ad_selection", "{}", line),
            Err(e) => tracing::error!("Failed to serialize selection log: {}", e),
        }
    }
}
