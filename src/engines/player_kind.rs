//! Who controls a side: a person at the terminal or one of the engines.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessError;
use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_search::SearchEngine;
use crate::engines::engine_trait::Engine;
use crate::search::best_move_search::{SearchAlgorithm, SearchConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Random,
    Greedy,
    Search(SearchAlgorithm),
}

impl PlayerKind {
    /// Engine for this player, or `None` for a human.
    pub fn build_engine(self, config: SearchConfig) -> Option<Box<dyn Engine>> {
        match self {
            PlayerKind::Human => None,
            PlayerKind::Random => Some(Box::new(RandomEngine::new())),
            PlayerKind::Greedy => Some(Box::new(GreedyEngine::new())),
            PlayerKind::Search(algorithm) => Some(Box::new(SearchEngine::new(algorithm, config))),
        }
    }

    #[inline]
    pub fn is_human(self) -> bool {
        self == PlayerKind::Human
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => f.write_str("human"),
            PlayerKind::Random => f.write_str("random"),
            PlayerKind::Greedy => f.write_str("greedy"),
            PlayerKind::Search(algorithm) => write!(f, "{algorithm}"),
        }
    }
}

impl FromStr for PlayerKind {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "random" => Ok(PlayerKind::Random),
            "greedy" => Ok(PlayerKind::Greedy),
            other => other
                .parse::<SearchAlgorithm>()
                .map(PlayerKind::Search)
                .map_err(|_| ChessError::UnknownPlayerKind(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PlayerKind;
    use crate::chess_errors::ChessError;
    use crate::search::best_move_search::{SearchAlgorithm, SearchConfig};

    #[test]
    fn parses_every_player_kind() {
        let cases = [
            ("human", PlayerKind::Human),
            ("Random", PlayerKind::Random),
            ("greedy", PlayerKind::Greedy),
            ("minimax", PlayerKind::Search(SearchAlgorithm::Minimax)),
            ("negamax", PlayerKind::Search(SearchAlgorithm::Negamax)),
            ("alphabeta", PlayerKind::Search(SearchAlgorithm::NegamaxAlphaBeta)),
        ];
        for (text, expected) in cases {
            assert_eq!(text.parse::<PlayerKind>(), Ok(expected), "{text}");
            assert_eq!(expected.to_string().parse::<PlayerKind>(), Ok(expected));
        }

        assert_eq!(
            "stockfish".parse::<PlayerKind>(),
            Err(ChessError::UnknownPlayerKind("stockfish".to_owned()))
        );
    }

    #[test]
    fn only_humans_have_no_engine() {
        let config = SearchConfig::default();
        assert!(PlayerKind::Human.build_engine(config).is_none());
        assert!(PlayerKind::Random.build_engine(config).is_some());

        let engine = PlayerKind::Search(SearchAlgorithm::Negamax)
            .build_engine(SearchConfig { depth: 1 })
            .expect("search players have an engine");
        assert_eq!(engine.name(), "Mailbox negamax d1");
    }
}
