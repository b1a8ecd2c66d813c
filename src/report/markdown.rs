use crate::model::{ContributionStats, Result};
use markdown_builder::Markdown;
use markdown_table::{Heading, HeadingAlignment, MarkdownTable};
use std::fs;

pub trait MarkdownReport {
    fn report_create(&self, path: &str) -> Result<()>;
}

impl MarkdownReport for ContributionStats {
    fn report_create(&self, path: &str) -> Result<()> {
        let mut doc = Markdown::new();

        doc.header1("Contributions");
        if self.is_empty() {
            doc.paragraph("No activity found in the scanned window.".to_string());
        } else {
            doc.paragraph(contributors_table(self));
        }

        fs::write(path, doc.render())?;
        Ok(())
    }
}

fn contributors_table(stats: &ContributionStats) -> String {
    let header = vec![
        Heading::new("Contributor".to_string(), None),
        Heading::new("Commits".to_string(), Some(HeadingAlignment::Center)),
        Heading::new(
            "Pull Requests Created".to_string(),
            Some(HeadingAlignment::Center),
        ),
        Heading::new(
            "Pull Requests Reviewed".to_string(),
            Some(HeadingAlignment::Center),
        ),
    ];

    let mut table = vec![];
    for (identity, contribution) in stats.iter() {
        table.push(vec![
            identity.clone(),
            format!("{}", contribution.commits),
            format!("{}", contribution.pull_requests_created),
            format!("{}", contribution.pull_requests_reviewed),
        ]);
    }

    let mut md_table = MarkdownTable::new(table);
    md_table.with_headings(header);
    md_table.as_markdown().unwrap()
}
