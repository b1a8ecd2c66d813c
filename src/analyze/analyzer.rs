use crate::azure::{PageCursor, ProjectSource};
use crate::model::{ContributionStats, Result};

pub type ScanProgress<'a> = Box<dyn FnMut(&str) + Send + 'a>;

/// Folds every non-disabled repository's activity into per-contributor
/// counters. Repositories are processed in listing order, commits before
/// pull requests, one request outstanding at a time. Any fetch failure
/// propagates to the caller and the partial aggregate is dropped with it.
pub async fn aggregate_by_contributor<S: ProjectSource>(
    source: &S,
    mut progress: ScanProgress<'_>,
) -> Result<ContributionStats> {
    let mut stats = ContributionStats::new();

    let repos = source.repositories().await?;
    for repo in &repos {
        if repo.is_disabled {
            continue;
        }

        let mut cursor = PageCursor::new();
        while let Some(page) = cursor.next_page() {
            progress(&format!("{}: fetch commits (#{page} page) ...", repo.name));
            let commits = source.commit_page(repo, page).await?;
            cursor.record(commits.len());
            for commit in &commits {
                stats.record_commit(&commit.author_email);
            }
        }

        let mut cursor = PageCursor::new();
        while let Some(page) = cursor.next_page() {
            progress(&format!(
                "{}: fetch pull requests (#{page} page) ...",
                repo.name
            ));
            let pulls = source.pull_request_page(repo, page).await?;
            cursor.record(pulls.len());
            for pull in &pulls {
                stats.record_pull_request(pull);
            }
        }
    }

    Ok(stats)
}
