// src/targeting/predicates.rs

use serde::{Serialize, Deserialize};

use crate::model::context::RequestContext;
use crate::targeting::predicate::{TargetingPredicate, TargetingPredicateResult};

/// **内置定向谓词**
///
/// 用于从 JSON 目录文件加载的定向组，按 `type` 字段区分。
/// `inverse = true` 时结果取反。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PredicateSpec {
    /// 固定结果
    Constant {
        value: bool,
        #[serde(default)]
        inverse: bool,
    },
    /// 请求的 marketplace 在列表中
    MarketplaceIn {
        marketplace_ids: Vec<String>,
        #[serde(default)]
        inverse: bool,
    },
    /// 请求的 customer 在列表中
    CustomerIn {
        customer_ids: Vec<String>,
        #[serde(default)]
        inverse: bool,
    },
    /// customer id 以指定前缀开头，空 customer id 永远不匹配
    CustomerPrefix {
        prefix: String,
        #[serde(default)]
        inverse: bool,
    },
}

impl PredicateSpec {
    fn inverse(&self) -> bool {
        match self {
            PredicateSpec::Constant { inverse, .. }
            | PredicateSpec::MarketplaceIn { inverse, .. }
            | PredicateSpec::CustomerIn { inverse, .. }
            | PredicateSpec::CustomerPrefix { inverse, .. } => *inverse,
        }
    }

    fn matches(&self, request_context: &RequestContext) -> bool {
        match self {
            PredicateSpec::Constant { value, .. } => *value,
            PredicateSpec::MarketplaceIn { marketplace_ids, .. } => marketplace_ids
                .iter()
                .any(|id| id == request_context.marketplace_id()),
            PredicateSpec::CustomerIn { customer_ids, .. } => customer_ids
                .iter()
                .any(|id| id == request_context.customer_id()),
            PredicateSpec::CustomerPrefix { prefix, .. } => {
                let customer_id = request_context.customer_id();
                !customer_id.is_empty() && customer_id.starts_with(prefix.as_str())
            }
        }
    }
}

impl TargetingPredicate for PredicateSpec {
    fn evaluate(&self, request_context: &RequestContext) -> TargetingPredicateResult {
        let result = TargetingPredicateResult::from(self.matches(request_context));
        if self.inverse() {
            result.invert()
        } else {
            result
        }
    }
}
