//! 黑白棋测试局面库
//!
//! 提供命名的局面串，方便测试和调试
//!
//! 命名规范:
//! - START: 初始局面
//! - EARLY_n: 开局后1-2步
//! - MID_n: 中局
//! - END_n: 终局（棋盘已满）
//! - SPECIAL_n: 特殊情况测试（过手、僵局）

// =============================================================================
// 开局 (START)
// =============================================================================

/// 初始局面 - 中央四子对角对称，白方先行
pub const START: &str = "8/8/8/3OX3/3XO3/8/8/8 O";

// =============================================================================
// 早期 (EARLY) - 开局后1-2步
// =============================================================================

/// 白方第一步: 3 e，翻转 (3,4) 的黑子
pub const EARLY_1: &str = "8/8/4O3/3OO3/3XO3/8/8/8 X";

/// 黑方回应: 3 d，翻转 (3,3) 的白子
pub const EARLY_2: &str = "8/8/3XO3/3XO3/3XO3/8/8/8 O";

// =============================================================================
// 中期 (MID)
// =============================================================================

/// 双方犬牙交错的典型中局，白方行棋
pub const MID_1: &str = "8/2X5/2XXO3/1XOXO3/2OOX3/3XO3/8/8 O";

// =============================================================================
// 终局 (END) - 棋盘已满
// =============================================================================

/// 白方 40 子对黑方 24 子，白胜
pub const END_1: &str =
    "OOOOOOOO/OOOOOOOO/OOOOOOOO/OOOOOOOO/OOOOOOOO/XXXXXXXX/XXXXXXXX/XXXXXXXX O";

/// 双方各 32 子，平局
pub const END_2: &str =
    "OOOOOOOO/OOOOOOOO/OOOOOOOO/OOOOOOOO/XXXXXXXX/XXXXXXXX/XXXXXXXX/XXXXXXXX O";

// =============================================================================
// 特殊情况 (SPECIAL)
// =============================================================================

/// 白方无子可走必须过手，黑方可在 1 c 落子
pub const SPECIAL_1: &str = "XO6/8/8/8/8/8/8/8 O";

/// 棋盘未满但双方都无走法，按子数黑胜
pub const SPECIAL_2: &str = "XXXX4/8/8/8/8/8/8/8 O";
