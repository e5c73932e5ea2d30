//! 随机 AI 策略

use super::AIStrategy;
use crate::board::Board;
use crate::types::{Position, Side};
use rand::prelude::*;

/// 随机 AI - 在所有合法走法中等概率挑选
pub struct RandomAI {
    rng: StdRng,
}

impl RandomAI {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        RandomAI { rng }
    }
}

impl AIStrategy for RandomAI {
    fn select_move(&self, board: &Board, side: Side) -> Option<Position> {
        let moves = board.legal_moves(side);
        let mut rng = self.rng.clone();
        moves.choose(&mut rng).copied()
    }
}
