use crate::model::PullRequest;
use indexmap::IndexMap;

/// Activity counters for a single contributor identity.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Contribution {
    pub commits: usize,
    pub pull_requests_created: usize,
    pub pull_requests_reviewed: usize,
}

/// Per-contributor totals for one scan, keyed by identity string: email for
/// commit authorship, account unique-name for pull-request activity. The two
/// identity spaces are not reconciled. Iteration order is first-seen order,
/// which becomes the chart's category order.
#[derive(Debug, Clone, Default)]
pub struct ContributionStats {
    contributors: IndexMap<String, Contribution>,
}

impl ContributionStats {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, identity: &str) -> &mut Contribution {
        self.contributors
            .entry(identity.to_string())
            .or_insert_with(Contribution::default)
    }

    pub fn record_commit(&mut self, author_email: &str) {
        self.entry(author_email).commits += 1;
    }

    pub fn record_pull_request(&mut self, pull: &PullRequest) {
        // The creator's record is touched before the reviewers' so
        // first-seen order is creator, then reviewers.
        self.entry(&pull.created_by);
        for reviewer in &pull.reviewers {
            self.entry(reviewer).pull_requests_reviewed += 1;
        }
        self.entry(&pull.created_by).pull_requests_created += 1;
    }

    pub fn get(&self, identity: &str) -> Option<&Contribution> {
        self.contributors.get(identity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Contribution)> {
        self.contributors.iter()
    }

    pub fn len(&self) -> usize {
        self.contributors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contributors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pull(created_by: &str, reviewers: &[&str]) -> PullRequest {
        PullRequest {
            created_by: created_by.to_string(),
            reviewers: reviewers.iter().map(|r| r.to_string()).collect(),
        }
    }

    fn identities(stats: &ContributionStats) -> Vec<&str> {
        stats.iter().map(|(identity, _)| identity.as_str()).collect()
    }

    #[test]
    fn commit_author_record_is_created_on_first_reference() {
        let mut stats = ContributionStats::new();
        stats.record_commit("a@x.com");
        stats.record_commit("a@x.com");
        assert_eq!(
            stats.get("a@x.com"),
            Some(&Contribution {
                commits: 2,
                pull_requests_created: 0,
                pull_requests_reviewed: 0,
            })
        );
    }

    #[test]
    fn pull_request_counts_creator_and_every_reviewer_entry() {
        let mut stats = ContributionStats::new();
        stats.record_pull_request(&pull("c", &["a@x.com", "d"]));
        assert_eq!(stats.get("c").unwrap().pull_requests_created, 1);
        assert_eq!(stats.get("a@x.com").unwrap().pull_requests_reviewed, 1);
        assert_eq!(stats.get("d").unwrap().pull_requests_reviewed, 1);
    }

    #[test]
    fn duplicate_reviewer_entries_are_each_counted() {
        let mut stats = ContributionStats::new();
        stats.record_pull_request(&pull("c", &["d", "d"]));
        assert_eq!(stats.get("d").unwrap().pull_requests_reviewed, 2);
    }

    #[test]
    fn creator_is_first_seen_before_reviewers() {
        let mut stats = ContributionStats::new();
        stats.record_pull_request(&pull("c", &["d"]));
        assert_eq!(identities(&stats), vec!["c", "d"]);
    }

    #[test]
    fn identities_keep_their_first_seen_position() {
        let mut stats = ContributionStats::new();
        stats.record_pull_request(&pull("c", &["a@x.com"]));
        stats.record_commit("a@x.com");
        stats.record_commit("b@x.com");
        assert_eq!(identities(&stats), vec!["c", "a@x.com", "b@x.com"]);
        assert_eq!(
            stats.get("a@x.com"),
            Some(&Contribution {
                commits: 1,
                pull_requests_created: 0,
                pull_requests_reviewed: 1,
            })
        );
    }
}
