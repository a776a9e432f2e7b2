//! Per-cell result rows and CSV rendering.

use serde::{Deserialize, Serialize};

/// One campaign cell's result: the three scalars the solver reported,
/// alongside the cell coordinates. Absent objective and gap mean no
/// feasible solution was found within the limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub n: usize,
    /// 1-based pattern index.
    pub pattern: u8,
    pub objective: Option<i64>,
    pub gap: Option<f64>,
    pub runtime_secs: f64,
}

/// Render rows as CSV, header included. Absent values become empty fields.
pub fn render_csv(rows: &[ReportRow]) -> String {
    let mut out = String::from("n,pattern,objective,gap,runtime_secs\n");
    for row in rows {
        let objective = row
            .objective
            .map(|o| o.to_string())
            .unwrap_or_default();
        let gap = row.gap.map(|g| g.to_string()).unwrap_or_default();
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            row.n, row.pattern, objective, gap, row.runtime_secs
        ));
    }
    out
}
