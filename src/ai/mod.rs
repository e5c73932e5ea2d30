//! 对手策略模块
//!
//! 提供电脑方的走子策略。策略只负责挑选落点，
//! 合法性判定和翻子始终由规则引擎完成。

mod first;
mod random;

pub use first::FirstMoveAI;
pub use random::RandomAI;

use crate::board::Board;
use crate::types::{Position, Side};

/// 可用策略名称
pub const AVAILABLE_STRATEGIES: &[&str] = &["first", "random"];

/// 默认策略
pub const DEFAULT_STRATEGY: &str = "first";

/// 策略配置
#[derive(Debug, Clone, Default)]
pub struct AIConfig {
    /// 随机种子
    pub seed: Option<u64>,
}

/// 走子策略接口
pub trait AIStrategy {
    /// 选择一个合法落点，无子可走时返回 None
    fn select_move(&self, board: &Board, side: Side) -> Option<Position>;
}

/// AI 引擎 - 统一的策略接口
pub struct AIEngine {
    strategy: Box<dyn AIStrategy>,
}

impl AIEngine {
    /// 创建首位走法 AI
    pub fn first_move() -> Self {
        AIEngine {
            strategy: Box::new(FirstMoveAI::new()),
        }
    }

    /// 创建随机 AI
    pub fn random(seed: Option<u64>) -> Self {
        AIEngine {
            strategy: Box::new(RandomAI::new(seed)),
        }
    }

    /// 从策略名称创建
    pub fn from_strategy(name: &str, config: &AIConfig) -> Result<Self, String> {
        match name.to_lowercase().as_str() {
            "first" | "first_move" => Ok(Self::first_move()),
            "random" => Ok(Self::random(config.seed)),
            _ => Err(format!(
                "Unknown strategy: {}. Available: {}",
                name,
                AVAILABLE_STRATEGIES.join(", ")
            )),
        }
    }
}

impl AIStrategy for AIEngine {
    fn select_move(&self, board: &Board, side: Side) -> Option<Position> {
        self.strategy.select_move(board, side)
    }
}
