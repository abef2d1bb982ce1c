// Batch runner.
// Runs the distance transform over every parsed case, optionally cross-checks
// against per-cell search, and collects per-case timing for the report.

use std::time::Instant;

use log::{debug, error};

use crate::core::Grid;
use crate::distance::{brute_force_distances, distance_transform, DistanceGrid};

#[derive(Debug)]
pub struct RunReport {
    pub total_cases: usize,
    pub total_cells: usize,
    pub max_distance: u32,
    pub elapsed_us: u64,
    pub mismatches: usize,
    pub per_case: Vec<CaseReport>,
    pub results: Vec<DistanceGrid>,
}

#[derive(Debug, Clone)]
pub struct CaseReport {
    pub case: usize,
    pub rows: usize,
    pub cols: usize,
    pub cells: usize,
    pub sources: usize,
    pub max_distance: u32,
    pub elapsed_us: u64,
    pub verified: Option<bool>,
}

pub fn run_cases(cases: &[Grid], verify: bool) -> RunReport {
    let total_start = Instant::now();
    let mut per_case = Vec::with_capacity(cases.len());
    let mut results = Vec::with_capacity(cases.len());

    for (i, grid) in cases.iter().enumerate() {
        let case = i + 1;
        let (rows, cols) = grid.dimensions();

        let start = Instant::now();
        let dist = distance_transform(grid);
        let elapsed_us = micros(start);

        let verified = verify.then(|| {
            let ok = brute_force_distances(grid) == dist.rows();
            if !ok {
                error!("case {}: ring expansion disagrees with per-cell search", case);
            }
            ok
        });
        debug!("case {}: {}x{} sources={} max={} in {}us", case, rows, cols, dist.sources(), dist.max_distance(), elapsed_us);

        per_case.push(CaseReport {
            case,
            rows,
            cols,
            cells: grid.len(),
            sources: dist.sources(),
            max_distance: dist.max_distance(),
            elapsed_us,
            verified,
        });
        results.push(dist);
    }

    RunReport {
        total_cases: per_case.len(),
        total_cells: per_case.iter().map(|c| c.cells).sum(),
        max_distance: per_case.iter().map(|c| c.max_distance).max().unwrap_or(0),
        elapsed_us: micros(total_start),
        mismatches: per_case.iter().filter(|c| c.verified == Some(false)).count(),
        per_case,
        results,
    }
}

fn micros(since: Instant) -> u64 {
    u64::try_from(since.elapsed().as_micros()).unwrap_or(u64::MAX)
}

impl RunReport {
    pub fn print_summary(&self) {
        eprintln!("=== Distance Transform Run ===");
        eprintln!("Cases: {} | Cells: {} | Max distance: {}",
            self.total_cases, self.total_cells, self.max_distance);
        eprintln!("Time: {}us | Mismatches: {}", self.elapsed_us, self.mismatches);
    }

    pub fn print_detail(&self) {
        self.print_summary();
        eprintln!("\nPer-case detail:");
        for c in &self.per_case {
            let status = match c.verified {
                Some(true) => "OK",
                Some(false) => "!!",
                None => "--",
            };
            eprintln!("  [{}] case {} | {}x{} sources={} max={} time={}us",
                status, c.case, c.rows, c.cols, c.sources, c.max_distance, c.elapsed_us);
        }
    }
}
