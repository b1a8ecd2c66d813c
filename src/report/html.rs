use crate::model::Result;
use crate::report::ChartData;
use itertools::Itertools;
use std::fs;

pub trait HtmlReport {
    fn report_create(&self, path: &str) -> Result<()>;
}

/// Writes a self-contained page that hands the projected labels and series
/// to Chart.js, which draws the stacked bar chart in the browser.
impl HtmlReport for ChartData {
    fn report_create(&self, path: &str) -> Result<()> {
        fs::write(path, render(self)?)?;
        Ok(())
    }
}

fn render(data: &ChartData) -> Result<String> {
    let labels = serde_json::to_string(&data.labels)?;
    let commits = data.commits.iter().join(", ");
    let created = data.pull_requests_created.iter().join(", ");
    let reviewed = data.pull_requests_reviewed.iter().join(", ");
    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Contributions</title>
    <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
</head>
<body>
    <canvas id="stackedBarChart"></canvas>
    <script>
        const ctx = document.getElementById('stackedBarChart').getContext('2d');
        new Chart(ctx, {{
            type: 'bar',
            data: {{
                labels: {labels},
                datasets: [
                    {{
                        label: 'Commits',
                        data: [{commits}],
                        backgroundColor: 'rgba(75, 192, 192, 0.5)',
                    }},
                    {{
                        label: 'Pull Requests Created',
                        data: [{created}],
                        backgroundColor: 'rgba(153, 102, 255, 0.5)',
                    }},
                    {{
                        label: 'Pull Requests Reviewed',
                        data: [{reviewed}],
                        backgroundColor: 'rgba(255, 159, 64, 0.5)',
                    }}
                ]
            }},
            options: {{
                plugins: {{
                    legend: {{
                        position: 'top',
                    }},
                }},
                responsive: true,
                scales: {{
                    x: {{
                        stacked: true,
                    }},
                    y: {{
                        stacked: true
                    }}
                }}
            }}
        }});
    </script>
</body>
</html>
"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_embeds_labels_and_series() {
        let data = ChartData {
            labels: vec!["a@x.com".to_string(), "c".to_string()],
            commits: vec![2, 0],
            pull_requests_created: vec![0, 1],
            pull_requests_reviewed: vec![1, 0],
        };
        let page = render(&data).unwrap();
        assert!(page.contains(r#"labels: ["a@x.com","c"]"#));
        assert!(page.contains("data: [2, 0]"));
        assert!(page.contains("data: [0, 1]"));
        assert!(page.contains("stacked: true"));
    }

    #[test]
    fn empty_projection_renders_empty_series() {
        let page = render(&ChartData::default()).unwrap();
        assert!(page.contains("labels: []"));
        assert!(page.contains("data: []"));
    }
}
