// src/model/context.rs

use serde::{Serialize, Deserialize};

/// 定向判定的请求上下文（customer + marketplace），每次选择请求创建一次，之后只读
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    customer_id: String,
    marketplace_id: String,
}

impl RequestContext {
    pub fn new(customer_id: &str, marketplace_id: &str) -> Self {
        Self {
            customer_id: customer_id.to_string(),
            marketplace_id: marketplace_id.to_string(),
        }
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn marketplace_id(&self) -> &str {
        &self.marketplace_id
    }
}
