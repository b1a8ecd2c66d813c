use crate::model::ContributionStats;

/// Chart-ready projection of the aggregate: four parallel sequences sharing
/// one index per contributor, in the mapping's insertion order. No sorting,
/// filtering, or normalization is applied.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub commits: Vec<usize>,
    pub pull_requests_created: Vec<usize>,
    pub pull_requests_reviewed: Vec<usize>,
}

impl ChartData {
    pub fn project(stats: &ContributionStats) -> Self {
        let mut data = Self::default();
        for (identity, contribution) in stats.iter() {
            data.labels.push(identity.clone());
            data.commits.push(contribution.commits);
            data.pull_requests_created
                .push(contribution.pull_requests_created);
            data.pull_requests_reviewed
                .push(contribution.pull_requests_reviewed);
        }
        data
    }
}
