use scrapers::{
    ExclusionSet, ImageCandidate, PaginationPlan, PaginationRequest, ScrapeError, SelectionResult,
    plan, select,
};

fn load_actions(target: u32) -> u32 {
    plan(PaginationRequest::new(target)).unwrap().load_actions
}

#[test]
fn first_page_covers_up_to_one_hundred() {
    for n in 1..=100 {
        assert_eq!(load_actions(n), 0, "target {n}");
    }
}

#[test]
fn second_page_covers_up_to_two_hundred() {
    for n in 101..=200 {
        assert_eq!(load_actions(n), 1, "target {n}");
    }
}

#[test]
fn known_targets() {
    assert_eq!(load_actions(250), 2);
    assert_eq!(load_actions(300), 2);
    assert_eq!(load_actions(301), 3);
}

#[test]
fn default_timeout_is_three_seconds() {
    for n in [1, 99, 150, 1000, u32::MAX] {
        assert_eq!(plan(PaginationRequest::new(n)).unwrap().timeout_ms, 3000);
    }
}

#[test]
fn zero_target_is_invalid() {
    assert!(matches!(
        plan(PaginationRequest::new(0)),
        Err(ScrapeError::InvalidArgument(_))
    ));
}

#[test]
fn plan_is_repeatable() {
    let req = PaginationRequest::new(420);
    assert_eq!(plan(req).unwrap(), plan(req).unwrap());
    assert_eq!(
        plan(req).unwrap(),
        PaginationPlan {
            load_actions: 4,
            timeout_ms: 3000
        }
    );
}

#[test]
fn empty_candidates_select_nothing() {
    assert_eq!(select(&[], &ExclusionSet::new(["plus"])), SelectionResult::None);
}

#[test]
fn query_string_is_stripped() {
    let candidates = [ImageCandidate::new("a.jpg?x=1", "1x")];
    assert_eq!(
        select(&candidates, &ExclusionSet::none()),
        SelectionResult::Url("a.jpg".into())
    );
}

#[test]
fn excluded_candidate_is_skipped() {
    let candidates = [
        ImageCandidate::new("a-plus.jpg", "2x"),
        ImageCandidate::new("b.jpg?y=2", "1x"),
    ];
    assert_eq!(
        select(&candidates, &ExclusionSet::new(["plus"])),
        SelectionResult::Url("b.jpg".into())
    );
}

#[test]
fn select_is_repeatable() {
    let candidates = [
        ImageCandidate::new("https://img.example/profile-1?w=64", "64w"),
        ImageCandidate::new("https://img.example/photo-2?w=1080", "1080w"),
    ];
    let exclusions = ExclusionSet::default();
    assert_eq!(select(&candidates, &exclusions), select(&candidates, &exclusions));
}

#[test]
fn filtering_keeps_input_order() {
    let candidates = [
        ImageCandidate::new("c.jpg", "3x"),
        ImageCandidate::new("premium-b.jpg", "2x"),
        ImageCandidate::new("a.jpg", "1x"),
        ImageCandidate::new("d.jpg", "1x"),
    ];
    let exclusions = ExclusionSet::default();
    let kept: Vec<&str> = scrapers::srcset::surviving(&candidates, &exclusions)
        .map(|c| c.url.as_str())
        .collect();
    assert_eq!(kept, ["c.jpg", "a.jpg", "d.jpg"]);
    assert_eq!(
        select(&candidates, &exclusions),
        SelectionResult::Url("c.jpg".into())
    );
}
