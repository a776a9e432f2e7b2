//! Campaign execution: the (n, pattern) grid.

use std::time::Duration;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use scqbf_instance::rng::derived_seed;
use scqbf_instance::{GenError, Pattern, Variant};
use scqbf_model::encode;
use scqbf_solve::{MilpSolver, SolveError};

use crate::report::ReportRow;

/// Grid and policy for one campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignConfig {
    /// Universe sizes, one row group per entry.
    pub sizes: Vec<usize>,
    /// Cardinality patterns crossed with every size.
    pub patterns: Vec<Pattern>,
    /// Which generation policy builds each cell's instance.
    pub variant: Variant,
    /// Campaign seed; cell `k` generates from `seed + k`.
    pub seed: u64,
    /// Per-cell solver budget.
    pub time_limit: Duration,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            sizes: vec![25, 50, 100, 200, 400],
            patterns: vec![Pattern::Small, Pattern::Medium, Pattern::Mixed],
            variant: Variant::Hard,
            seed: 42,
            time_limit: Duration::from_secs(600),
        }
    }
}

/// A cell that failed, with enough context to rerun it alone.
#[derive(Debug, thiserror::Error)]
pub enum CampaignError {
    #[error("cell n={n} pattern={pattern}: {source}")]
    Generate {
        n: usize,
        pattern: Pattern,
        #[source]
        source: GenError,
    },

    #[error("cell n={n} pattern={pattern}: {source}")]
    Solve {
        n: usize,
        pattern: Pattern,
        #[source]
        source: SolveError,
    },
}

/// Run every cell of the grid and collect rows in grid order.
///
/// Cells execute in parallel; each owns an RNG seeded from the campaign
/// seed plus its grid position, so results do not depend on scheduling and
/// any one cell can be reproduced in isolation.
pub fn run_campaign<S>(config: &CampaignConfig, solver: &S) -> Result<Vec<ReportRow>, CampaignError>
where
    S: MilpSolver + Sync,
{
    let cells: Vec<(u64, usize, Pattern)> = config
        .sizes
        .iter()
        .flat_map(|&n| config.patterns.iter().map(move |&pattern| (n, pattern)))
        .enumerate()
        .map(|(id, (n, pattern))| (id as u64, n, pattern))
        .collect();

    cells
        .par_iter()
        .map(|&(cell_id, n, pattern)| run_cell(config, solver, cell_id, n, pattern))
        .collect()
}

fn run_cell<S: MilpSolver>(
    config: &CampaignConfig,
    solver: &S,
    cell_id: u64,
    n: usize,
    pattern: Pattern,
) -> Result<ReportRow, CampaignError> {
    let seed = derived_seed(config.seed, cell_id);

    let instance = config
        .variant
        .generate(n, pattern, Some(seed))
        .map_err(|source| CampaignError::Generate { n, pattern, source })?;

    let model = encode(&instance);

    let outcome = solver
        .solve(&model, config.time_limit)
        .map_err(|source| CampaignError::Solve { n, pattern, source })?;

    Ok(ReportRow {
        n,
        pattern: pattern.index(),
        objective: outcome.objective,
        gap: outcome.gap,
        runtime_secs: outcome.runtime.as_secs_f64(),
    })
}
