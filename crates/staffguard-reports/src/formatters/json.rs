use chrono::Local;
use serde::Serialize;
use serde_json::Error;
use std::path::Path;

use staffguard_core::{PipelineReport, SalesSummary};

use crate::Reporter;

#[derive(Serialize)]
pub struct JsonFormatter {
    version: String,
    timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    run: Option<PipelineReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lookup: Option<LookupFormatter>,
}

#[derive(Serialize)]
struct LookupFormatter {
    entries: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    sales: Option<SalesSummary>,
}

impl JsonFormatter {
    pub fn new(version: String) -> Self {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Self {
            version,
            timestamp,
            run: None,
            lookup: None,
        }
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Reporter for JsonFormatter {
    fn on_start(&self) {}

    fn on_loading(&self, _source: &Path) {}

    fn on_report(&mut self, report: &PipelineReport) {
        self.run = Some(report.clone());
    }

    fn on_lookup(&mut self, entries: usize, sales: Option<&SalesSummary>) {
        self.lookup = Some(LookupFormatter {
            entries,
            sales: sales.cloned(),
        });
    }

    fn on_complete(&self, _report: &PipelineReport) {}
}
