// src/targeting/group.rs

use std::sync::Arc;
use serde::{Serialize, Deserialize};

use crate::targeting::predicate::TargetingPredicate;
use crate::targeting::predicates::PredicateSpec;

/// **定向组**
///
/// 挂在某条创意（`content_id`）上的一组谓词，全部为 TRUE 才算满足。
/// 同一创意可以有多个定向组，满足任意一个即可投放。
/// `click_through_rate` 目前不参与选择，保留给以后的排序。
#[derive(Debug, Clone)]
pub struct TargetingGroup {
    pub targeting_group_id: String,
    pub content_id: String,
    pub click_through_rate: f64,
    pub targeting_predicates: Vec<Arc<dyn TargetingPredicate>>,
}

impl TargetingGroup {
    pub fn new(
        targeting_group_id: &str,
        content_id: &str,
        click_through_rate: f64,
        targeting_predicates: Vec<Arc<dyn TargetingPredicate>>,
    ) -> Self {
        Self {
            targeting_group_id: targeting_group_id.to_string(),
            content_id: content_id.to_string(),
            click_through_rate,
            targeting_predicates,
        }
    }
}

/// 目录文件中的定向组记录，谓词以 `PredicateSpec` 描述
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TargetingGroupRecord {
    pub targeting_group_id: String,
    pub content_id: String,
    #[serde(default)]
    pub click_through_rate: f64,
    #[serde(default)]
    pub targeting_predicates: Vec<PredicateSpec>,
}

impl From<TargetingGroupRecord> for TargetingGroup {
    fn from(record: TargetingGroupRecord) -> Self {
        let targeting_predicates = record
            .targeting_predicates
            .into_iter()
            .map(|spec| Arc::new(spec) as Arc<dyn TargetingPredicate>)
            .collect();
        TargetingGroup {
            targeting_group_id: record.targeting_group_id,
            content_id: record.content_id,
            click_through_rate: record.click_through_rate,
            targeting_predicates,
        }
    }
}
