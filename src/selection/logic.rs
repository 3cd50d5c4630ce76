// src/selection/logic.rs

use std::sync::Arc;
use tracing::{debug, warn};

use crate::dao::ReadableDao;
use crate::model::advertisement::GeneratedAdvertisement;
use crate::model::content::AdvertisementContent;
use crate::model::context::RequestContext;
use crate::targeting::evaluator::TargetingEvaluator;
use crate::targeting::group::TargetingGroup;

pub type ContentDao = Arc<dyn ReadableDao<str, Vec<AdvertisementContent>>>;
pub type TargetingGroupDao = Arc<dyn ReadableDao<str, Vec<TargetingGroup>>>;

/// 负责挑选要渲染的广告
///
/// 不持有任何请求级的可变状态，可以通过 `Arc` 在多个请求间共享。
pub struct AdvertisementSelectionLogic {
    content_dao: ContentDao,
    targeting_group_dao: TargetingGroupDao,
}

impl AdvertisementSelectionLogic {
    pub fn new(content_dao: ContentDao, targeting_group_dao: TargetingGroupDao) -> Self {
        Self {
            content_dao,
            targeting_group_dao,
        }
    }

    /// **为 customer 在 marketplace 上选择一条广告**
    ///
    /// 按内容存储返回的顺序扫描候选创意，返回第一条至少有一个定向组满足的创意。
    /// marketplace 为空、没有候选或者没有合格候选时返回 `GeneratedAdvertisement::Empty`。
    pub fn select_advertisement(&self, customer_id: &str, marketplace_id: &str) -> GeneratedAdvertisement {
        if marketplace_id.is_empty() {
            warn!(customer_id, "MarketplaceId cannot be empty. Returning empty ad.");
            return GeneratedAdvertisement::empty();
        }

        let contents = match self.content_dao.get(marketplace_id) {
            Some(contents) if !contents.is_empty() => contents,
            _ => {
                debug!(marketplace_id, "no advertisement content for marketplace");
                return GeneratedAdvertisement::empty();
            }
        };

        let evaluator = TargetingEvaluator::new(RequestContext::new(customer_id, marketplace_id));

        contents
            .into_iter()
            .find(|content| self.is_eligible(&evaluator, content))
            .map(GeneratedAdvertisement::new)
            .unwrap_or_default()
    }

    /// 任意一个定向组满足即合格；没有定向组的创意永远不合格
    fn is_eligible(&self, evaluator: &TargetingEvaluator, content: &AdvertisementContent) -> bool {
        let targeting_groups = self
            .targeting_group_dao
            .get(&content.content_id)
            .unwrap_or_default();

        let eligible = targeting_groups
            .iter()
            .any(|group| evaluator.evaluate(group).is_true());

        debug!(
            content_id = %content.content_id,
            targeting_groups = targeting_groups.len(),
            eligible,
            "candidate evaluated"
        );
        eligible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use proptest::prelude::*;

    use crate::dao::memory::{InMemoryContentDao, InMemoryTargetingGroupDao};
    use crate::targeting::predicate::{TargetingPredicate, TargetingPredicateResult};
    use crate::targeting::predicates::PredicateSpec;

    /// 记录调用次数的存储包装
    struct CountingDao<D> {
        inner: D,
        calls: AtomicUsize,
    }

    impl<D> CountingDao<D> {
        fn new(inner: D) -> Arc<Self> {
            Arc::new(Self { inner, calls: AtomicUsize::new(0) })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl<V, D: ReadableDao<str, V>> ReadableDao<str, V> for CountingDao<D> {
        fn get(&self, key: &str) -> Option<V> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.get(key)
        }
    }

    /// 对任何 key 都返回空列表（而不是 None）的存储
    struct EmptyListDao;

    impl<T> ReadableDao<str, Vec<T>> for EmptyListDao {
        fn get(&self, _key: &str) -> Option<Vec<T>> {
            Some(Vec::new())
        }
    }

    fn constant(value: bool) -> Arc<dyn TargetingPredicate> {
        Arc::new(PredicateSpec::Constant { value, inverse: false })
    }

    fn content(id: &str) -> AdvertisementContent {
        AdvertisementContent::new(id, "US", &format!("<html>{}</html>", id))
    }

    fn logic(contents: Vec<AdvertisementContent>, groups: Vec<TargetingGroup>) -> AdvertisementSelectionLogic {
        AdvertisementSelectionLogic::new(
            Arc::new(InMemoryContentDao::new(contents)),
            Arc::new(InMemoryTargetingGroupDao::new(groups)),
        )
    }

    fn selected_id(ad: &GeneratedAdvertisement) -> Option<&str> {
        ad.content().map(|c| c.content_id.as_str())
    }

    #[test]
    fn selects_first_candidate_with_satisfied_group() {
        let logic = logic(
            vec![content("C1"), content("C2")],
            vec![
                TargetingGroup::new("TG1", "C1", 0.9, vec![constant(false)]),
                TargetingGroup::new("TG2", "C2", 0.1, vec![constant(true)]),
            ],
        );

        let ad = logic.select_advertisement("cust-1", "US");
        assert_eq!(selected_id(&ad), Some("C2"));
    }

    #[test]
    fn candidate_without_targeting_groups_is_never_selected() {
        let logic = logic(vec![content("C1")], Vec::new());
        assert!(logic.select_advertisement("cust-1", "US").is_empty());
    }

    #[test]
    fn candidate_with_empty_targeting_group_is_eligible() {
        let logic = logic(
            vec![content("C1")],
            vec![TargetingGroup::new("TG1", "C1", 0.0, Vec::new())],
        );
        assert_eq!(selected_id(&logic.select_advertisement("cust-1", "US")), Some("C1"));
    }

    #[test]
    fn empty_marketplace_returns_empty_without_consulting_daos() {
        let contents = CountingDao::new(InMemoryContentDao::new(vec![content("C1")]));
        let groups = CountingDao::new(InMemoryTargetingGroupDao::new(vec![
            TargetingGroup::new("TG1", "C1", 0.0, vec![constant(true)]),
        ]));
        let logic = AdvertisementSelectionLogic::new(contents.clone(), groups.clone());

        assert!(logic.select_advertisement("cust-1", "").is_empty());
        assert_eq!(contents.calls(), 0);
        assert_eq!(groups.calls(), 0);
    }

    #[test]
    fn empty_candidate_list_returns_empty() {
        let groups = CountingDao::new(InMemoryTargetingGroupDao::new(vec![
            TargetingGroup::new("TG1", "C1", 0.0, Vec::new()),
        ]));
        let logic = AdvertisementSelectionLogic::new(Arc::new(EmptyListDao), groups.clone());

        assert!(logic.select_advertisement("cust-1", "US").is_empty());
        assert_eq!(groups.calls(), 0);
    }

    #[test]
    fn empty_targeting_group_list_is_ineligible() {
        let groups = CountingDao::new(EmptyListDao);
        let logic = AdvertisementSelectionLogic::new(
            Arc::new(InMemoryContentDao::new(vec![content("C1"), content("C2")])),
            groups.clone(),
        );

        assert!(logic.select_advertisement("cust-1", "US").is_empty());
        assert_eq!(groups.calls(), 2);
    }

    #[test]
    fn unknown_marketplace_returns_empty() {
        let logic = logic(
            vec![content("C1")],
            vec![TargetingGroup::new("TG1", "C1", 0.0, vec![constant(true)])],
        );
        assert!(logic.select_advertisement("cust-1", "JP").is_empty());
    }

    #[test]
    fn all_groups_unsatisfied_returns_empty() {
        let logic = logic(
            vec![content("C1"), content("C2")],
            vec![
                TargetingGroup::new("TG1", "C1", 0.5, vec![constant(true), constant(false)]),
                TargetingGroup::new("TG2", "C2", 0.5, vec![constant(false)]),
            ],
        );
        assert!(logic.select_advertisement("cust-1", "US").is_empty());
    }

    #[test]
    fn any_satisfied_group_makes_candidate_eligible() {
        let logic = logic(
            vec![content("C1")],
            vec![
                TargetingGroup::new("TG1", "C1", 0.5, vec![constant(false)]),
                TargetingGroup::new("TG2", "C1", 0.1, vec![constant(true)]),
            ],
        );
        assert_eq!(selected_id(&logic.select_advertisement("cust-1", "US")), Some("C1"));
    }

    #[test]
    fn first_eligible_wins_over_higher_click_through_rate() {
        let logic = logic(
            vec![content("C1"), content("C2")],
            vec![
                TargetingGroup::new("TG1", "C1", 0.01, vec![constant(true)]),
                TargetingGroup::new("TG2", "C2", 0.99, vec![constant(true)]),
            ],
        );
        assert_eq!(selected_id(&logic.select_advertisement("cust-1", "US")), Some("C1"));
    }

    #[test]
    fn scanning_stops_at_first_eligible_candidate() {
        let groups = CountingDao::new(InMemoryTargetingGroupDao::new(vec![
            TargetingGroup::new("TG1", "C1", 0.0, vec![constant(true)]),
            TargetingGroup::new("TG2", "C2", 0.0, vec![constant(true)]),
        ]));
        let logic = AdvertisementSelectionLogic::new(
            Arc::new(InMemoryContentDao::new(vec![content("C1"), content("C2")])),
            groups.clone(),
        );

        assert_eq!(selected_id(&logic.select_advertisement("cust-1", "US")), Some("C1"));
        assert_eq!(groups.calls(), 1);
    }

    #[test]
    fn customer_id_reaches_predicates() {
        #[derive(Debug)]
        struct CustomerIs(&'static str);

        impl TargetingPredicate for CustomerIs {
            fn evaluate(&self, request_context: &RequestContext) -> TargetingPredicateResult {
                (request_context.customer_id() == self.0).into()
            }
        }

        let logic = logic(
            vec![content("C1")],
            vec![TargetingGroup::new("TG1", "C1", 0.0, vec![Arc::new(CustomerIs("cust-1")) as Arc<dyn TargetingPredicate>])],
        );
        assert!(!logic.select_advertisement("cust-1", "US").is_empty());
        assert!(logic.select_advertisement("cust-2", "US").is_empty());
        assert!(logic.select_advertisement("", "US").is_empty());
    }

    proptest! {
        #[test]
        fn empty_marketplace_always_yields_empty(customer_id in ".*") {
            let logic = logic(
                vec![content("C1")],
                vec![TargetingGroup::new("TG1", "C1", 0.0, Vec::new())],
            );
            prop_assert!(logic.select_advertisement(&customer_id, "").is_empty());
        }
    }
}
