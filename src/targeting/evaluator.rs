// src/targeting/evaluator.rs

use tracing::trace;

use crate::model::context::RequestContext;
use crate::targeting::group::TargetingGroup;
use crate::targeting::predicate::TargetingPredicateResult;

/// 针对一个请求上下文判定定向组
pub struct TargetingEvaluator {
    request_context: RequestContext,
}

impl TargetingEvaluator {
    pub fn new(request_context: RequestContext) -> Self {
        Self { request_context }
    }

    pub fn request_context(&self) -> &RequestContext {
        &self.request_context
    }

    /// **判定定向组是否满足**
    ///
    /// 先对每个谓词求值，再以 TRUE 为初值做 AND 归约。
    /// 不短路：即使前面已经出现 FALSE，后面的谓词也会被调用一次。
    /// 空定向组返回 TRUE。
    pub fn evaluate(&self, targeting_group: &TargetingGroup) -> TargetingPredicateResult {
        let results: Vec<TargetingPredicateResult> = targeting_group
            .targeting_predicates
            .iter()
            .map(|predicate| predicate.evaluate(&self.request_context))
            .collect();

        let result = results
            .into_iter()
            .fold(TargetingPredicateResult::True, TargetingPredicateResult::and);

        trace!(
            targeting_group_id = %targeting_group.targeting_group_id,
            content_id = %targeting_group.content_id,
            result = ?result,
            "targeting group evaluated"
        );
        result
    }
}
