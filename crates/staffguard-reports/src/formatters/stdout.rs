use std::path::Path;

use prettytable::{Cell, Row, Table};
use staffguard_core::{AggregateSummary, BestValueEntry, PipelineReport, SalesSummary, SnapshotOutcome};

use crate::{
    Reporter,
    utils::numbers::{format_amount, format_numbers},
};

pub struct StdOutFormatter {
    intro: String,
    intro_len: usize,
}

fn header(titles: &[&str]) -> Row {
    Row::new(titles.iter().map(|t| Cell::new(t)).collect())
}

impl StdOutFormatter {
    pub fn new(version: String) -> Self {
        let s = format!("StaffGuard v{} - Pipeline Report", version);
        let n = s.len();
        Self {
            intro: s,
            intro_len: n,
        }
    }

    pub fn print_loading(&self, source: &Path) {
        println!("Loading {}...", source.display());
    }

    pub fn render_departments(&self, aggregates: &AggregateSummary) -> String {
        let mut table = Table::new();
        table.add_row(header(&["Department", "Avg. salary"]));
        for entry in &aggregates.average_salary_by_department {
            table.add_row(Row::new(vec![
                Cell::new(&entry.department),
                Cell::new(&format_amount(entry.average_salary)),
            ]));
        }
        table.to_string()
    }

    pub fn render_cities(&self, aggregates: &AggregateSummary) -> String {
        let mut table = Table::new();
        table.add_row(header(&["City", "Employees"]));
        for entry in &aggregates.top_cities {
            table.add_row(Row::new(vec![
                Cell::new(&entry.city),
                Cell::new(&format_numbers(entry.count)),
            ]));
        }
        table.to_string()
    }

    pub fn render_countries(&self, aggregates: &AggregateSummary) -> String {
        let mut table = Table::new();
        table.add_row(header(&["Country", "Total", "Remote", "On-site", "% Remote"]));
        for entry in &aggregates.work_split_by_country {
            table.add_row(Row::new(vec![
                Cell::new(&entry.country),
                Cell::new(&format_numbers(entry.total)),
                Cell::new(&format_numbers(entry.remote)),
                Cell::new(&format_numbers(entry.on_site)),
                Cell::new(&format!("{:.2}%", entry.remote_percentage)),
            ]));
        }
        table.to_string()
    }

    pub fn render_best_value(&self, entries: &[BestValueEntry]) -> String {
        let mut table = Table::new();
        table.add_row(header(&["Id", "Name", "Score", "Tenure (y)", "Net / month"]));
        for entry in entries {
            table.add_row(Row::new(vec![
                Cell::new(&entry.employee_id),
                Cell::new(&entry.name),
                Cell::new(&format!("{:.4}", entry.score)),
                Cell::new(&format!("{:.2}", entry.tenure_years)),
                Cell::new(&format_amount(entry.monthly_net_estimate)),
            ]));
        }
        table.to_string()
    }

    pub fn print_report(&self, report: &PipelineReport) {
        println!(
            "\n{} rows loaded: {} valid, {} invalid",
            format_numbers(report.loaded_rows),
            format_numbers(report.valid_rows),
            format_numbers(report.invalid_rows())
        );
        for (reason, count) in report.invalid_by_reason() {
            println!("  {:<24} {:>6}", reason.as_str(), format_numbers(count));
        }

        println!("\nAverage salary by department");
        print!("{}", self.render_departments(&report.aggregates));
        println!("\nTop cities");
        print!("{}", self.render_cities(&report.aggregates));
        println!("\nRemote work by country");
        print!("{}", self.render_countries(&report.aggregates));

        println!(
            "\nRemote: {}, on-site: {}",
            format_numbers(report.remote_count),
            format_numbers(report.onsite_count)
        );
        if !report.duplicate_ids.is_empty() {
            let ids: Vec<&str> = report.duplicate_ids.iter().map(String::as_str).collect();
            println!("Possible duplicates: {}", ids.join(", "));
        }

        if !report.best_value.is_empty() {
            println!("\nBest value");
            print!("{}", self.render_best_value(&report.best_value));
        }
    }

    pub fn print_lookup(&self, entries: usize, sales: Option<&SalesSummary>) {
        println!("\nDepartment map: {} employees", format_numbers(entries));
        let Some(sales) = sales else {
            return;
        };
        let join = &sales.transactions;

        let mut table = Table::new();
        table.add_row(header(&["Department", "Transactions"]));
        for (department, count) in &join.by_department {
            table.add_row(Row::new(vec![
                Cell::new(department),
                Cell::new(&format_numbers(*count)),
            ]));
        }
        print!("{}", table);
        println!(
            "Matched: {}, unmatched: {}",
            format_numbers(join.matched()),
            format_numbers(join.unmatched)
        );
        println!("Targets: {}", format_numbers(sales.targets));
    }

    pub fn print_summary(&self, report: &PipelineReport) {
        let i = "=".repeat(self.intro_len);
        println!("\n{}", i);
        match &report.snapshot {
            SnapshotOutcome::Written(path) => println!("Clean snapshot: {}", path.display()),
            SnapshotOutcome::Skipped => println!("Clean snapshot: skipped (no data)"),
            SnapshotOutcome::Failed(message) => println!("Clean snapshot: FAILED - {}", message),
        }
    }
}

impl Reporter for StdOutFormatter {
    fn on_start(&self) {
        let i = "=".repeat(self.intro_len);

        println!("{}", self.intro);
        println!("{}", i);
    }

    fn on_loading(&self, source: &Path) {
        self.print_loading(source);
    }

    fn on_report(&mut self, report: &PipelineReport) {
        self.print_report(report);
    }

    fn on_lookup(&mut self, entries: usize, sales: Option<&SalesSummary>) {
        self.print_lookup(entries, sales);
    }

    fn on_complete(&self, report: &PipelineReport) {
        self.print_summary(report);
    }
}
