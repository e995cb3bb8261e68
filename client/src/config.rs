use std::{fs, path::Path};

use anyhow::Context;
use libcellsim::{
    SimulationController,
    error::Result,
    grid::{BackingKind, DefaultGridFactory, Grid},
    logger::LoggerKind,
    neighborhood::NeighborhoodKind,
    rule::RuleKind,
    seed,
    terminator::{CombinedTerminator, FixedStepTerminator, StableStateTerminator, Terminator},
};
use serde::{Deserialize, Serialize};

/// Everything needed to set up and run one simulation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExperimentConfig {
    pub height: usize,
    pub width: usize,
    pub backing: BackingKind,
    pub rule: RuleKind,

    /// Falls back to the neighborhood the rule was designed for.
    #[serde(default)]
    pub neighborhood: Option<NeighborhoodKind>,

    pub terminator: TerminatorConfig,

    #[serde(default = "default_logger")]
    pub logger: LoggerKind,

    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TerminatorConfig {
    FixedStep { max_steps: u64 },
    StableState,
    Combined { max_steps: u64 },
}

impl TerminatorConfig {
    pub fn build(self) -> Result<Box<dyn Terminator>> {
        Ok(match self {
            TerminatorConfig::FixedStep { max_steps } => {
                Box::new(FixedStepTerminator::new(max_steps)?)
            }
            TerminatorConfig::StableState => Box::new(StableStateTerminator),
            TerminatorConfig::Combined { max_steps } => {
                Box::new(CombinedTerminator::new(max_steps)?)
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SeedConfig {
    #[default]
    Empty,
    Stripes,
    CentreBlock,
    Cells { alive: Vec<(usize, usize)> },
    Rows { rows: Vec<String> },
    Random { alive_cells: usize },
}

impl SeedConfig {
    pub fn apply(&self, grid: &mut Grid) -> Result<()> {
        match self {
            SeedConfig::Empty => Ok(()),
            SeedConfig::Stripes => seed::stripes(grid),
            SeedConfig::CentreBlock => seed::centre_block(grid),
            SeedConfig::Cells { alive } => seed::pattern(grid, alive),
            SeedConfig::Rows { rows } => seed::from_rows(grid, rows.as_slice()),
            SeedConfig::Random { alive_cells } => seed::scatter(grid, *alive_cells),
        }
    }
}

fn default_logger() -> LoggerKind {
    LoggerKind::Console
}

impl ExperimentConfig {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read experiment config")?;
        let config = serde_json::from_slice(&config_serialized)
            .context("Couldn't deserialize experiment config")?;
        Ok(config)
    }

    pub fn neighborhood(&self) -> NeighborhoodKind {
        self.neighborhood
            .unwrap_or_else(|| self.rule.default_neighborhood())
    }

    pub fn build_grid(&self) -> Result<Grid> {
        let mut grid = Grid::empty(self.backing, self.height, self.width)?;
        self.seed.apply(&mut grid)?;
        Ok(grid)
    }

    pub fn build_controller(&self) -> anyhow::Result<SimulationController> {
        let grid = self.build_grid().context("Couldn't set up the seed grid")?;
        let terminator = self.terminator.build().context("Invalid terminator")?;
        let logger = self.logger.logger().context("Couldn't set up the logger")?;

        let controller = SimulationController::new(
            grid,
            &DefaultGridFactory::new(),
            self.rule.rule_set(),
            self.neighborhood().strategy(),
            terminator,
            logger,
        )?;

        Ok(controller)
    }
}

#[cfg(test)]
mod tests {
    use libcellsim::grid::CellGrid;

    use super::*;

    #[test]
    fn parses_full_config() {
        let config: ExperimentConfig = serde_json::from_str(
            r#"{
                "height": 3,
                "width": 3,
                "backing": "sparse",
                "rule": "game-of-life",
                "neighborhood": "von-neumann",
                "terminator": { "kind": "combined", "max_steps": 10 },
                "logger": "null",
                "seed": { "kind": "rows", "rows": ["010", "010", "110"] }
            }"#,
        )
        .unwrap();

        assert_eq!(config.backing, BackingKind::Sparse);
        assert_eq!(config.neighborhood(), NeighborhoodKind::VonNeumann);
        assert_eq!(config.terminator, TerminatorConfig::Combined { max_steps: 10 });

        let grid = config.build_grid().unwrap();
        assert_eq!(grid.alive_count(), 4);
        assert_eq!(grid.cell_state(2, 0).unwrap(), 1);
    }

    #[test]
    fn fills_in_defaults() {
        let config: ExperimentConfig = serde_json::from_str(
            r#"{
                "height": 4,
                "width": 5,
                "backing": "dense",
                "rule": "parity",
                "terminator": { "kind": "stable-state" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.neighborhood(), NeighborhoodKind::VonNeumann);
        assert_eq!(config.logger, LoggerKind::Console);
        assert_eq!(config.seed, SeedConfig::Empty);
    }

    #[test]
    fn rejects_unknown_backing() {
        let err = serde_json::from_str::<ExperimentConfig>(
            r#"{
                "height": 4,
                "width": 5,
                "backing": "quadtree",
                "rule": "parity",
                "terminator": { "kind": "stable-state" }
            }"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("GRID_STRUCTURE-500"));
    }

    #[test]
    fn invalid_values_fail_when_building() {
        let config = ExperimentConfig {
            height: 2,
            width: 2,
            backing: BackingKind::Dense,
            rule: RuleKind::GameOfLife,
            neighborhood: None,
            terminator: TerminatorConfig::FixedStep { max_steps: 0 },
            logger: LoggerKind::Null,
            seed: SeedConfig::Cells {
                alive: vec![(0, 0), (1, 1)],
            },
        };

        assert!(config.build_controller().is_err());
        assert!(config.terminator.build().is_err());

        let out_of_range = ExperimentConfig {
            seed: SeedConfig::Cells {
                alive: vec![(2, 0)],
            },
            terminator: TerminatorConfig::StableState,
            ..config
        };
        assert!(out_of_range.build_grid().is_err());
    }

    #[test]
    fn builds_and_runs() {
        let config = ExperimentConfig {
            height: 4,
            width: 4,
            backing: BackingKind::Sparse,
            rule: RuleKind::GameOfLife,
            neighborhood: Some(NeighborhoodKind::Moore),
            terminator: TerminatorConfig::StableState,
            logger: LoggerKind::Null,
            seed: SeedConfig::CentreBlock,
        };

        let mut controller = config.build_controller().unwrap();
        assert_eq!(controller.try_run().unwrap(), 1);
    }
}
