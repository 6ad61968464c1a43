mod metrics;
#[cfg(test)]
mod tests;
mod writer;

pub use metrics::Metrics;
pub use writer::write_report_file;
