//! Reversi (Othello) Game Engine
//!
//! 黑白棋规则引擎 - 支持局面串输入输出

pub mod ai;
pub mod board;
pub mod fen;
pub mod game;
pub mod test_positions;
pub mod types;

pub use ai::{
    AIConfig, AIEngine, AIStrategy, FirstMoveAI, RandomAI, AVAILABLE_STRATEGIES, DEFAULT_STRATEGY,
};
pub use board::Board;
pub use fen::{board_to_fen, parse_fen};
pub use game::{Game, Phase};
pub use types::{Cell, GameOutcome, Position, Side};
