//! Repository listing integration tests

mod support;

use langstats::github::{PageLimits, RepositoryLister};
use langstats::utils::ExclusionFilter;
use langstats_github::GitHubError;
use support::{FakeGitHub, record};

fn limits(per_page: u32, max_pages: u32) -> PageLimits {
    PageLimits {
        per_page,
        max_pages,
    }
}

#[tokio::test]
async fn test_list_stops_on_short_page() {
    let source = FakeGitHub::new()
        .with_page(vec![record("a", false, 0), record("b", false, 0)])
        .with_page(vec![record("c", false, 0)])
        .with_page(vec![record("never", false, 0)]);

    let repos = RepositoryLister::new(ExclusionFilter::default())
        .with_limits(limits(2, 5))
        .list(&source, "octocat")
        .await
        .unwrap();

    let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert_eq!(source.page_calls(), vec![1, 2]);
}

#[tokio::test]
async fn test_list_never_exceeds_max_pages() {
    let full = || vec![record("x", false, 0), record("y", false, 0)];
    let source = FakeGitHub::new()
        .with_page(full())
        .with_page(full())
        .with_page(full());

    let repos = RepositoryLister::new(ExclusionFilter::default())
        .with_limits(limits(2, 2))
        .list(&source, "octocat")
        .await
        .unwrap();

    assert_eq!(repos.len(), 4);
    assert_eq!(source.page_calls(), vec![1, 2]);
}

#[tokio::test]
async fn test_list_empty_first_page() {
    let source = FakeGitHub::new().with_page(Vec::new());

    let repos = RepositoryLister::new(ExclusionFilter::default())
        .list(&source, "octocat")
        .await
        .unwrap();

    assert!(repos.is_empty());
    assert_eq!(source.page_calls(), vec![1]);
}

#[tokio::test]
async fn test_list_excludes_forks_and_denylisted_names() {
    let source = FakeGitHub::new().with_page(vec![
        record("app", false, 5),
        record("upstream-fork", true, 100),
        record(".github", false, 0),
        record("octocat", false, 1),
        record("Octocat", false, 2),
    ]);

    let repos = RepositoryLister::new(ExclusionFilter::new([".github", "octocat"]))
        .list(&source, "octocat")
        .await
        .unwrap();

    let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["app", "Octocat"]);
    assert!(repos.iter().all(|r| !r.fork));
    assert_eq!(repos[0].owner, "octocat");
    assert_eq!(repos[0].stars, 5);
}

#[tokio::test]
async fn test_list_propagates_page_errors() {
    let full = vec![record("a", false, 0), record("b", false, 0)];
    let source = FakeGitHub::new()
        .with_page(full)
        .with_failing_page(GitHubError::RateLimit {
            remaining: Some(0),
            reset_at: None,
            detail: None,
        });

    let err = RepositoryLister::new(ExclusionFilter::default())
        .with_limits(limits(2, 3))
        .list(&source, "octocat")
        .await
        .unwrap_err();

    assert!(err.is_rate_limited());
    assert_eq!(source.page_calls(), vec![1, 2]);
}

#[tokio::test]
async fn test_list_zero_max_pages_makes_no_requests() {
    let source = FakeGitHub::new().with_page(vec![record("a", false, 0)]);

    let repos = RepositoryLister::new(ExclusionFilter::default())
        .with_limits(limits(100, 0))
        .list(&source, "octocat")
        .await
        .unwrap();

    assert!(repos.is_empty());
    assert!(source.page_calls().is_empty());
}
