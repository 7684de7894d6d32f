pub mod formatters;
pub mod utils;

use std::path::Path;

use staffguard_core::{PipelineReport, SalesSummary};
pub use formatters::{json::JsonFormatter, stdout::StdOutFormatter};

pub trait Reporter {
    fn on_start(&self);
    fn on_loading(&self, source: &Path);
    fn on_report(&mut self, report: &PipelineReport);
    fn on_lookup(&mut self, entries: usize, sales: Option<&SalesSummary>);
    fn on_complete(&self, report: &PipelineReport);
}
