use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{
    cell::{Cell, CellState, MAX_ALIVE_NEIGHBORS},
    error::{Result, SimError},
    neighborhood::NeighborhoodKind,
};

/// Pure transition from a cell's state and alive neighbor count to its next state.
pub trait RuleSet {
    /// Both the state and the returned value are 0 (dead) or 1 (alive).
    fn next_state(&self, state: u8, alive_neighbors: u8) -> Result<u8>;

    fn compute_next_state(&self, cell: &Cell) -> Result<u8> {
        self.next_state(cell.state(), cell.alive_neighbors())
    }
}

/// Life-like birth/survival rule; the default is Conway's B3/S23.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOfLifeRuleSet {
    pub birth: Vec<u8>,
    pub survive: Vec<u8>,
}

impl Default for GameOfLifeRuleSet {
    fn default() -> Self {
        Self {
            birth: vec![3],
            survive: vec![2, 3],
        }
    }
}

impl RuleSet for GameOfLifeRuleSet {
    fn next_state(&self, state: u8, alive_neighbors: u8) -> Result<u8> {
        check_neighbor_count(alive_neighbors, MAX_ALIVE_NEIGHBORS)?;

        let alive = match CellState::try_from(state)? {
            CellState::Alive => self.survive.contains(&alive_neighbors),
            CellState::Dead => self.birth.contains(&alive_neighbors),
        };

        Ok(alive.into())
    }
}

/// A cell is alive next step iff an odd number of its von Neumann neighbors are
/// alive. The current state doesn't matter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParityRuleSet;

impl ParityRuleSet {
    pub const MAX_ALIVE_NEIGHBORS: u8 = 4;
}

impl RuleSet for ParityRuleSet {
    fn next_state(&self, _state: u8, alive_neighbors: u8) -> Result<u8> {
        check_neighbor_count(alive_neighbors, Self::MAX_ALIVE_NEIGHBORS)?;
        Ok(alive_neighbors % 2)
    }
}

fn check_neighbor_count(count: u8, max: u8) -> Result<()> {
    if count > max {
        return Err(SimError::InvalidNeighborCount { count, max });
    }

    Ok(())
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    GameOfLife,
    Parity,
}

impl RuleKind {
    pub fn rule_set(self) -> Box<dyn RuleSet> {
        match self {
            RuleKind::GameOfLife => Box::new(GameOfLifeRuleSet::default()),
            RuleKind::Parity => Box::new(ParityRuleSet),
        }
    }

    /// The neighborhood each rule was designed for.
    pub fn default_neighborhood(self) -> NeighborhoodKind {
        match self {
            RuleKind::GameOfLife => NeighborhoodKind::Moore,
            RuleKind::Parity => NeighborhoodKind::VonNeumann,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_of_life_survival() {
        let rule = GameOfLifeRuleSet::default();

        assert_eq!(rule.next_state(1, 2).unwrap(), 1);
        assert_eq!(rule.next_state(1, 3).unwrap(), 1);
        for neighbors in [0, 1, 4, 5, 6, 7, 8] {
            assert_eq!(rule.next_state(1, neighbors).unwrap(), 0, "{neighbors} neighbors");
        }
    }

    #[test]
    fn game_of_life_birth() {
        let rule = GameOfLifeRuleSet::default();

        assert_eq!(rule.next_state(0, 3).unwrap(), 1);
        for neighbors in (0..=8).filter(|n| *n != 3) {
            assert_eq!(rule.next_state(0, neighbors).unwrap(), 0, "{neighbors} neighbors");
        }
    }

    #[test]
    fn game_of_life_rejects_out_of_domain_input() {
        let rule = GameOfLifeRuleSet::default();

        assert!(matches!(
            rule.next_state(1, 9),
            Err(SimError::InvalidNeighborCount { count: 9, max: 8 })
        ));
        assert!(matches!(rule.next_state(2, 3), Err(SimError::InvalidState(2))));
    }

    #[test]
    fn game_of_life_reads_annotated_cell() {
        let mut cell = Cell::new(4, 4);
        cell.set_alive_neighbors(3).unwrap();

        assert_eq!(GameOfLifeRuleSet::default().compute_next_state(&cell).unwrap(), 1);
    }

    #[test]
    fn custom_life_like_rule() {
        // HighLife, B36/S23
        let rule = GameOfLifeRuleSet {
            birth: vec![3, 6],
            survive: vec![2, 3],
        };

        assert_eq!(rule.next_state(0, 6).unwrap(), 1);
        assert_eq!(rule.next_state(1, 6).unwrap(), 0);
    }

    #[test]
    fn parity_is_neighbor_count_mod_two() {
        for state in [0, 1] {
            for neighbors in 0..=4 {
                assert_eq!(ParityRuleSet.next_state(state, neighbors).unwrap(), neighbors % 2);
            }
        }
    }

    #[test]
    fn parity_rejects_more_than_four_neighbors() {
        assert!(matches!(
            ParityRuleSet.next_state(0, 5),
            Err(SimError::InvalidNeighborCount { count: 5, max: 4 })
        ));
    }

    #[test]
    fn kinds_pair_with_their_neighborhood() {
        assert_eq!(RuleKind::GameOfLife.default_neighborhood(), NeighborhoodKind::Moore);
        assert_eq!(RuleKind::Parity.default_neighborhood(), NeighborhoodKind::VonNeumann);
        assert_eq!("game-of-life".parse::<RuleKind>().unwrap(), RuleKind::GameOfLife);
    }
}
