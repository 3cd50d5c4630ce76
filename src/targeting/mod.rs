pub mod evaluator;
pub mod group;
pub mod predicate;
pub mod predicates;
