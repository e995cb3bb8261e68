use libcellsim::{grid::BackingKind, logger::LoggerKind, rule::RuleKind};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::config::{ExperimentConfig, SeedConfig, TerminatorConfig};

/// Two mirrored still-life/oscillator clusters next to each other.
const TWIN_STRUCTURE: &[(usize, usize)] = &[
    (17, 18),
    (17, 19),
    (18, 18),
    (18, 19),
    (19, 19),
    (20, 17),
    (20, 19),
    (21, 17),
    (21, 19),
    (22, 17),
    (22, 18),
    (17, 21),
    (17, 22),
    (18, 21),
    (18, 22),
    (19, 21),
    (20, 21),
    (20, 23),
    (21, 21),
    (21, 23),
    (22, 22),
    (22, 23),
];

/// The preset experiments offered by the menu, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Experiment {
    #[strum(to_string = "Game of Life, twin structure (dense)")]
    GameOfLifeTwinDense,
    #[strum(to_string = "Game of Life, twin structure (sparse)")]
    GameOfLifeTwinSparse,
    #[strum(to_string = "Game of Life, stripes (dense)")]
    GameOfLifeStripesDense,
    #[strum(to_string = "Game of Life, stripes (sparse)")]
    GameOfLifeStripesSparse,
    #[strum(to_string = "Game of Life, empty 300x300 (dense)")]
    GameOfLifeEmptyDense,
    #[strum(to_string = "Game of Life, empty 300x300 (sparse)")]
    GameOfLifeEmptySparse,
    #[strum(to_string = "Parity, centre block (dense)")]
    ParityBlockDense,
    #[strum(to_string = "Parity, centre block (sparse)")]
    ParityBlockSparse,
    #[strum(to_string = "Parity, stripes (dense)")]
    ParityStripesDense,
    #[strum(to_string = "Parity, stripes (sparse)")]
    ParityStripesSparse,
}

impl Experiment {
    /// Menu numbers start at 1.
    pub fn from_menu_number(number: u64) -> Option<Self> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::iter().nth(index)
    }

    pub fn count() -> usize {
        Self::iter().count()
    }

    pub fn backing(self) -> BackingKind {
        use Experiment::*;

        match self {
            GameOfLifeTwinDense | GameOfLifeStripesDense | GameOfLifeEmptyDense
            | ParityBlockDense | ParityStripesDense => BackingKind::Dense,

            GameOfLifeTwinSparse | GameOfLifeStripesSparse | GameOfLifeEmptySparse
            | ParityBlockSparse | ParityStripesSparse => BackingKind::Sparse,
        }
    }

    pub fn rule(self) -> RuleKind {
        use Experiment::*;

        match self {
            ParityBlockDense | ParityBlockSparse | ParityStripesDense | ParityStripesSparse => {
                RuleKind::Parity
            }
            _ => RuleKind::GameOfLife,
        }
    }

    /// `(height, width)` of the seed grid.
    pub fn dimensions(self) -> (usize, usize) {
        use Experiment::*;

        match self {
            GameOfLifeTwinDense | GameOfLifeTwinSparse => (40, 41),
            GameOfLifeStripesDense | GameOfLifeStripesSparse => (100, 100),
            GameOfLifeEmptyDense | GameOfLifeEmptySparse => (300, 300),
            ParityBlockDense | ParityBlockSparse | ParityStripesDense | ParityStripesSparse => {
                (40, 40)
            }
        }
    }

    pub fn seed(self) -> SeedConfig {
        use Experiment::*;

        match self {
            GameOfLifeTwinDense | GameOfLifeTwinSparse => SeedConfig::Cells {
                alive: TWIN_STRUCTURE.to_vec(),
            },
            GameOfLifeStripesDense | GameOfLifeStripesSparse | ParityStripesDense
            | ParityStripesSparse => SeedConfig::Stripes,
            GameOfLifeEmptyDense | GameOfLifeEmptySparse => SeedConfig::Empty,
            ParityBlockDense | ParityBlockSparse => SeedConfig::CentreBlock,
        }
    }

    pub fn config(self, terminator: TerminatorConfig, logger: LoggerKind) -> ExperimentConfig {
        let (height, width) = self.dimensions();

        ExperimentConfig {
            height,
            width,
            backing: self.backing(),
            rule: self.rule(),
            neighborhood: None,
            terminator,
            logger,
            seed: self.seed(),
        }
    }
}
