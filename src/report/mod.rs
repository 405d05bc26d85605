mod errors;
mod report_writer;

pub use errors::ReportError;
pub use report_writer::{render_summary_markdown, write_anomalies_csv, write_report, ReportPaths};
