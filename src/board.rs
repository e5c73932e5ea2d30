//! 黑白棋棋盘与规则引擎
//!
//! 使用 64 格数组存储棋盘，提供落子合法性判定、翻子、
//! 候选走法枚举与终局判定。

use crate::types::{Cell, GameOutcome, Position, Side};

/// 8 个罗盘方向的步进向量
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// 黑白棋棋盘（8行 x 8列）
///
/// 棋盘上只存放 Empty/Light/Dark；Hint 只出现在 `hinted`
/// 生成的渲染快照里，规则引擎不读取这种快照。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// 64 个格子的状态数组
    squares: [Cell; 64],
}

impl Board {
    /// 创建初始局面
    ///
    /// 中央四格对角对称：(3,3)/(4,4) 白，(3,4)/(4,3) 黑
    pub fn new() -> Board {
        let mut board = Board::empty();
        board.squares[Position::new(3, 3).to_index()] = Cell::Light;
        board.squares[Position::new(4, 4).to_index()] = Cell::Light;
        board.squares[Position::new(3, 4).to_index()] = Cell::Dark;
        board.squares[Position::new(4, 3).to_index()] = Cell::Dark;
        board
    }

    /// 创建空棋盘
    pub fn empty() -> Board {
        Board {
            squares: [Cell::Empty; 64],
        }
    }

    /// 获取某格状态，越界返回 None
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if !pos.is_valid() {
            return None;
        }
        Some(self.squares[pos.to_index()])
    }

    /// 设置某格状态，越界时忽略
    #[inline]
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        if pos.is_valid() {
            self.squares[pos.to_index()] = cell;
        }
    }

    /// 统计某方的棋子数
    pub fn count(&self, side: Side) -> u32 {
        self.squares
            .iter()
            .filter(|c| c.disc() == Some(side))
            .count() as u32
    }

    /// 计算在 pos 落子会翻转的所有对方棋子
    ///
    /// 纯探测，不修改棋盘。坐标越界、目标格非空或八个方向
    /// 都无子可翻时返回空列表。每个方向独立扫描：第一步必须
    /// 是对方棋子，之后持续越过对方棋子；遇到己方棋子则把
    /// 途经的对方棋子全部记为翻转，遇到空格或棋盘边缘则整条
    /// 射线作废。
    pub fn captured_discs(&self, side: Side, pos: Position) -> Vec<Position> {
        if self.get(pos) != Some(Cell::Empty) {
            return Vec::new();
        }

        let own = side.to_cell();
        let other = side.opposite().to_cell();
        let mut captured = Vec::new();

        for (dr, dc) in DIRECTIONS {
            // 方向上的第一步必须是对方棋子
            let mut cur = pos.offset(dr, dc);
            if self.get(cur) != Some(other) {
                continue;
            }

            let mut line = vec![cur];
            loop {
                cur = cur.offset(dr, dc);
                match self.get(cur) {
                    Some(c) if c == other => line.push(cur),
                    Some(c) if c == own => {
                        // 己方棋子封口，这个方向的翻转成立
                        captured.append(&mut line);
                        break;
                    }
                    // 空格或棋盘边缘，整条射线作废
                    _ => break,
                }
            }
        }

        captured
    }

    /// 检查某方在 pos 落子是否合法
    ///
    /// 合法当且仅当至少翻转一个对方棋子
    #[inline]
    pub fn is_legal_move(&self, side: Side, pos: Position) -> bool {
        !self.captured_discs(side, pos).is_empty()
    }

    /// 落子并翻转对方棋子
    ///
    /// 走法不合法时返回 false 且棋盘保持原样；合法时写入落子
    /// 格和所有翻转格后返回 true。这是对局过程中唯一的棋盘
    /// 修改路径。
    pub fn place_disc(&mut self, side: Side, pos: Position) -> bool {
        let captured = self.captured_discs(side, pos);
        if captured.is_empty() {
            return false;
        }

        let own = side.to_cell();
        self.squares[pos.to_index()] = own;
        for p in captured {
            self.squares[p.to_index()] = own;
        }
        true
    }

    /// 枚举某方的所有合法走法（按行优先顺序）
    pub fn legal_moves(&self, side: Side) -> Vec<Position> {
        let mut moves = Vec::new();
        for row in 0..8 {
            for col in 0..8 {
                let pos = Position::new(row, col);
                if self.is_legal_move(side, pos) {
                    moves.push(pos);
                }
            }
        }
        moves
    }

    /// 检查某方是否还有合法走法（找到第一个即返回）
    pub fn has_any_move(&self, side: Side) -> bool {
        for row in 0..8 {
            for col in 0..8 {
                if self.is_legal_move(side, Position::new(row, col)) {
                    return true;
                }
            }
        }
        false
    }

    /// 生成带提示标记的渲染快照
    ///
    /// 在某方所有合法落点上写入 Hint。返回的是一次性的展示
    /// 副本，不要把它交回规则引擎。
    pub fn hinted(&self, side: Side) -> Board {
        let mut display = self.clone();
        for pos in self.legal_moves(side) {
            display.squares[pos.to_index()] = Cell::Hint;
        }
        display
    }

    /// 判断对局结果
    ///
    /// 双方都无合法走法时对局结束，结果由棋子数比较决定
    pub fn game_result(&self) -> GameOutcome {
        if self.has_any_move(Side::Light) || self.has_any_move(Side::Dark) {
            return GameOutcome::InProgress;
        }

        let light = self.count(Side::Light);
        let dark = self.count(Side::Dark);
        if light == dark {
            GameOutcome::Tie
        } else if light > dark {
            GameOutcome::LightWins
        } else {
            GameOutcome::DarkWins
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::parse_fen;

    #[test]
    fn test_initial_board() {
        let board = Board::new();
        assert_eq!(board.count(Side::Light), 2);
        assert_eq!(board.count(Side::Dark), 2);
        assert_eq!(board.get(Position::new(3, 3)), Some(Cell::Light));
        assert_eq!(board.get(Position::new(4, 4)), Some(Cell::Light));
        assert_eq!(board.get(Position::new(3, 4)), Some(Cell::Dark));
        assert_eq!(board.get(Position::new(4, 3)), Some(Cell::Dark));
        assert_eq!(board.game_result(), GameOutcome::InProgress);
    }

    #[test]
    fn test_legal_moves_initial() {
        let board = Board::new();
        let light = board.legal_moves(Side::Light);
        assert_eq!(
            light,
            vec![
                Position::new(2, 4),
                Position::new(3, 5),
                Position::new(4, 2),
                Position::new(5, 3),
            ]
        );

        let dark = board.legal_moves(Side::Dark);
        assert_eq!(
            dark,
            vec![
                Position::new(2, 3),
                Position::new(3, 2),
                Position::new(4, 5),
                Position::new(5, 4),
            ]
        );
    }

    #[test]
    fn test_first_move_flips_one_disc() {
        let mut board = Board::new();
        assert!(board.place_disc(Side::Light, Position::new(2, 4)));

        assert_eq!(board.get(Position::new(2, 4)), Some(Cell::Light));
        assert_eq!(board.get(Position::new(3, 4)), Some(Cell::Light));
        assert_eq!(board.count(Side::Light), 4);
        assert_eq!(board.count(Side::Dark), 1);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut board = Board::new();
        let before = board.clone();

        assert!(!board.place_disc(Side::Light, Position::new(3, 3)));
        assert!(!board.place_disc(Side::Light, Position::new(3, 4)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut board = Board::new();
        let before = board.clone();

        assert!(!board.place_disc(Side::Light, Position::new(-1, 0)));
        assert!(!board.place_disc(Side::Light, Position::new(8, 3)));
        assert!(!board.place_disc(Side::Dark, Position::new(0, 8)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_zero_flip_rejected() {
        let mut board = Board::new();
        let before = board.clone();

        // 空格但八个方向都无子可翻
        assert!(!board.place_disc(Side::Light, Position::new(0, 0)));
        assert!(!board.place_disc(Side::Light, Position::new(2, 3)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_ray_with_gap_is_discarded() {
        // 射线越过对方棋子后遇到空格，整条射线作废，不能只翻一半
        let (board, _) = parse_fen("8/8/8/O1XX4/8/8/8/8 O").unwrap();
        assert!(!board.is_legal_move(Side::Light, Position::new(3, 4)));
        assert!(!board.is_legal_move(Side::Light, Position::new(3, 1)));

        // 无空格时同样的形状是合法走法
        let (board, _) = parse_fen("8/8/8/OXX5/8/8/8/8 O").unwrap();
        assert!(board.is_legal_move(Side::Light, Position::new(3, 3)));
    }

    #[test]
    fn test_probe_matches_apply() {
        let board = Board::new();
        for pos in board.legal_moves(Side::Light) {
            let captured = board.captured_discs(Side::Light, pos);
            assert!(!captured.is_empty());

            let mut applied = board.clone();
            assert!(applied.place_disc(Side::Light, pos));
            assert_eq!(applied.get(pos), Some(Cell::Light));
            for p in &captured {
                assert_eq!(applied.get(*p), Some(Cell::Light));
            }

            // 守恒：己方 +1+翻转数，对方 -翻转数
            let flipped = captured.len() as u32;
            assert_eq!(
                applied.count(Side::Light),
                board.count(Side::Light) + 1 + flipped
            );
            assert_eq!(
                applied.count(Side::Dark),
                board.count(Side::Dark) - flipped
            );
        }
    }

    #[test]
    fn test_total_discs_grow_by_one() {
        let mut board = Board::new();
        let mut side = Side::Light;

        for _ in 0..10 {
            let moves = board.legal_moves(side);
            let Some(pos) = moves.first() else { break };
            let before = board.count(Side::Light) + board.count(Side::Dark);
            assert!(board.place_disc(side, *pos));
            let after = board.count(Side::Light) + board.count(Side::Dark);
            assert_eq!(after, before + 1);
            side = side.opposite();
        }
    }

    #[test]
    fn test_multi_direction_capture() {
        // (5,4) 落白子同时向上和向左上两个方向翻转
        let (mut board, _) = parse_fen("8/8/8/2O1O3/3XX3/8/8/8 O").unwrap();
        let captured = board.captured_discs(Side::Light, Position::new(5, 4));
        assert_eq!(captured.len(), 2);
        assert!(captured.contains(&Position::new(4, 3)));
        assert!(captured.contains(&Position::new(4, 4)));

        assert!(board.place_disc(Side::Light, Position::new(5, 4)));
        assert_eq!(board.count(Side::Dark), 0);
        assert_eq!(board.count(Side::Light), 5);
    }

    #[test]
    fn test_has_any_move_matches_enumeration() {
        let positions = [
            "8/8/8/3OX3/3XO3/8/8/8 O",
            "XXXX4/8/8/8/8/8/8/8 O",
            "XO6/8/8/8/8/8/8/8 O",
        ];
        for fen in positions {
            let (board, _) = parse_fen(fen).unwrap();
            for side in [Side::Light, Side::Dark] {
                assert_eq!(
                    board.has_any_move(side),
                    !board.legal_moves(side).is_empty(),
                    "mismatch for {} on {}",
                    side,
                    fen
                );
            }
        }
    }

    #[test]
    fn test_game_result_stalled_board() {
        // 棋盘未满但双方都无走法，按子数判负
        let (board, _) = parse_fen("XXXX4/8/8/8/8/8/8/8 O").unwrap();
        assert!(!board.has_any_move(Side::Light));
        assert!(!board.has_any_move(Side::Dark));
        assert_eq!(board.game_result(), GameOutcome::DarkWins);
    }

    #[test]
    fn test_game_result_counts() {
        let full_light = "OOOOOOOO/OOOOOOOO/OOOOOOOO/OOOOOOOO/OOOOOOOO/XXXXXXXX/XXXXXXXX/XXXXXXXX O";
        let (board, _) = parse_fen(full_light).unwrap();
        assert_eq!(board.game_result(), GameOutcome::LightWins);

        let tie = "OOOOOOOO/OOOOOOOO/OOOOOOOO/OOOOOOOO/XXXXXXXX/XXXXXXXX/XXXXXXXX/XXXXXXXX O";
        let (board, _) = parse_fen(tie).unwrap();
        assert_eq!(board.game_result(), GameOutcome::Tie);
    }

    #[test]
    fn test_hinted_snapshot() {
        let board = Board::new();
        let display = board.hinted(Side::Light);

        for pos in board.legal_moves(Side::Light) {
            assert_eq!(display.get(pos), Some(Cell::Hint));
        }
        // 原棋盘不受影响
        assert_eq!(board.get(Position::new(2, 4)), Some(Cell::Empty));
        // 提示格非空，规则引擎即使误用快照也会拒绝落子
        assert!(!display.is_legal_move(Side::Light, Position::new(2, 4)));
    }

    #[test]
    fn test_legal_moves_idempotent() {
        let board = Board::new();
        assert_eq!(board.legal_moves(Side::Light), board.legal_moves(Side::Light));
        assert_eq!(board.legal_moves(Side::Dark), board.legal_moves(Side::Dark));
    }
}
