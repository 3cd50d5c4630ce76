// src/targeting/predicate.rs

use std::fmt::Debug;
use serde::{Serialize, Deserialize};

use crate::model::context::RequestContext;

/// 定向谓词的判定结果
///
/// 刻意不用 `bool`：以后可以加 INDETERMINATE 之类的状态而不改调用方。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TargetingPredicateResult {
    True,
    False,
}

impl TargetingPredicateResult {
    pub fn is_true(self) -> bool {
        matches!(self, TargetingPredicateResult::True)
    }

    /// 逻辑与，两个都为 TRUE 才是 TRUE
    pub fn and(self, other: TargetingPredicateResult) -> TargetingPredicateResult {
        (self.is_true() && other.is_true()).into()
    }

    pub fn invert(self) -> TargetingPredicateResult {
        (!self.is_true()).into()
    }
}

impl From<bool> for TargetingPredicateResult {
    fn from(value: bool) -> Self {
        if value {
            TargetingPredicateResult::True
        } else {
            TargetingPredicateResult::False
        }
    }
}

/// 定向谓词能力：具体实现（地域、设备、时段……）由外部提供，选择逻辑只调用 `evaluate`
pub trait TargetingPredicate: Debug + Send + Sync {
    fn evaluate(&self, request_context: &RequestContext) -> TargetingPredicateResult;
}
