mod chart;
mod html;
mod markdown;

pub use chart::ChartData;
pub use html::HtmlReport;
pub use markdown::MarkdownReport;
