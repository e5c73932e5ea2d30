//! 对局状态机
//!
//! 管理回合推进、过手与终局判定。不做任何输入输出；
//! 渲染和退出信号由调用方处理。

use crate::ai::AIStrategy;
use crate::board::Board;
use crate::types::{GameOutcome, Position, Side};
use rand::prelude::*;

/// 对局阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// 等待某方走子（或过手）
    Awaiting(Side),
    /// 对局结束，结果已定
    Over(GameOutcome),
}

/// 一局黑白棋
///
/// 独占持有棋盘。每个回合要么完整提交（落子 + 翻转），
/// 要么不改动任何状态，中途放弃对局不会留下半步。
pub struct Game {
    board: Board,
    phase: Phase,
}

impl Game {
    /// 开新局，随机先手
    ///
    /// seed 供确定性测试注入，None 时从系统熵取
    pub fn new(seed: Option<u64>) -> Game {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let side = if rng.gen::<bool>() {
            Side::Light
        } else {
            Side::Dark
        };
        Game::with_starting_side(side)
    }

    /// 开新局，指定先手
    pub fn with_starting_side(side: Side) -> Game {
        Game::from_position(Board::new(), side)
    }

    /// 从给定局面继续对局
    ///
    /// 已经终局的局面直接进入 Over
    pub fn from_position(board: Board, turn: Side) -> Game {
        let phase = match board.game_result() {
            GameOutcome::InProgress => Phase::Awaiting(turn),
            outcome => Phase::Over(outcome),
        };
        Game { board, phase }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 当前轮到的一方，终局时返回 None
    pub fn side_to_move(&self) -> Option<Side> {
        match self.phase {
            Phase::Awaiting(side) => Some(side),
            Phase::Over(_) => None,
        }
    }

    /// 当前方的所有合法走法
    pub fn legal_moves(&self) -> Vec<Position> {
        match self.phase {
            Phase::Awaiting(side) => self.board.legal_moves(side),
            Phase::Over(_) => Vec::new(),
        }
    }

    /// 当前方是否只能过手
    pub fn must_pass(&self) -> bool {
        match self.phase {
            Phase::Awaiting(side) => !self.board.has_any_move(side),
            Phase::Over(_) => false,
        }
    }

    /// 当前方落子
    ///
    /// 非法走法（越界、目标格非空、无子可翻）或对局已结束时
    /// 返回 false，任何状态都不改动
    pub fn play(&mut self, pos: Position) -> bool {
        let Phase::Awaiting(side) = self.phase else {
            return false;
        };
        if !self.board.place_disc(side, pos) {
            return false;
        }
        self.advance(side);
        true
    }

    /// 过手
    ///
    /// 仅当当前方没有合法走法时允许。过手本身不会结束对局，
    /// 只有双方都无子可走才会进入终局
    pub fn pass(&mut self) -> bool {
        let Phase::Awaiting(side) = self.phase else {
            return false;
        };
        if self.board.has_any_move(side) {
            return false;
        }
        self.advance(side);
        true
    }

    /// 让策略替当前方走一个回合
    ///
    /// 无子可走时过手并返回 None。策略给不出走法或给出非法
    /// 走法时同样视作无子可用、让出回合，不反复重试
    pub fn play_with(&mut self, strategy: &dyn AIStrategy) -> Option<Position> {
        let Phase::Awaiting(side) = self.phase else {
            return None;
        };
        if !self.board.has_any_move(side) {
            self.advance(side);
            return None;
        }
        match strategy.select_move(&self.board, side) {
            Some(pos) if self.board.place_disc(side, pos) => {
                self.advance(side);
                Some(pos)
            }
            _ => {
                // 策略失灵也不能卡死回合循环
                self.advance(side);
                None
            }
        }
    }

    /// 对局结果，进行中时返回 InProgress
    pub fn outcome(&self) -> GameOutcome {
        match self.phase {
            Phase::Over(outcome) => outcome,
            Phase::Awaiting(_) => GameOutcome::InProgress,
        }
    }

    /// 走子或过手后推进回合
    fn advance(&mut self, mover: Side) {
        self.phase = match self.board.game_result() {
            GameOutcome::InProgress => Phase::Awaiting(mover.opposite()),
            outcome => Phase::Over(outcome),
        };
    }
}
