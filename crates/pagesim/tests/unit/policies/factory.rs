use pagesim::PolicyKind;
use pagesim::policies::build_policy;
use rstest::rstest;

#[rstest]
#[case(PolicyKind::Lru, "LRU")]
#[case(PolicyKind::Lfu, "LFU")]
fn builds_the_named_policy(#[case] kind: PolicyKind, #[case] name: &str) {
    assert_eq!(build_policy(kind).name(), name);
    assert_eq!(kind.to_string(), name);
}
