//! 局面串解析和生成
//!
//! 黑白棋局面串
//!
//! 格式: `<棋盘> <回合>`
//!
//! 棋盘符号：
//! - 白方棋子：O
//! - 黑方棋子：X
//! - 空格：数字 (1-8)
//!
//! 行间以 '/' 分隔，自上而下对应 row 0 到 row 7。
//! 初始局面：`8/8/8/3OX3/3XO3/8/8/8 O`

use crate::board::Board;
use crate::types::{Position, Side};

/// 解析局面串
pub fn parse_fen(fen: &str) -> Result<(Board, Side), String> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(format!(
            "Invalid FEN format: expected '<board> <turn>', got: {}",
            fen
        ));
    }

    let board = parse_board(parts[0])?;
    let turn = Side::from_fen_char(parts[1].chars().next().unwrap_or(' '))
        .ok_or_else(|| format!("Invalid turn: {}", parts[1]))?;

    Ok((board, turn))
}

/// 解析棋盘字符串
fn parse_board(board_str: &str) -> Result<Board, String> {
    let rows: Vec<&str> = board_str.split('/').collect();
    if rows.len() != 8 {
        return Err(format!("Invalid board: expected 8 rows, got {}", rows.len()));
    }

    let mut board = Board::empty();

    for (row_idx, row_str) in rows.iter().enumerate() {
        let row = row_idx as i8;
        let mut col: i8 = 0;

        for ch in row_str.chars() {
            if col >= 8 {
                return Err(format!("Invalid board row (too long): {}", row_str));
            }

            if ch.is_ascii_digit() {
                col += (ch as i8) - ('0' as i8);
            } else if let Some(side) = Side::from_fen_char(ch) {
                board.set(Position::new(row, col), side.to_cell());
                col += 1;
            } else {
                return Err(format!("Invalid board char: {}", ch));
            }
        }

        if col != 8 {
            return Err(format!(
                "Invalid board row (expected 8 columns, got {}): {}",
                col, row_str
            ));
        }
    }

    Ok(board)
}

/// 生成局面串
pub fn board_to_fen(board: &Board, turn: Side) -> String {
    let mut out = String::new();

    for row in 0..8 {
        if row > 0 {
            out.push('/');
        }
        let mut empties = 0;
        for col in 0..8 {
            match board.get(Position::new(row, col)).and_then(|c| c.disc()) {
                Some(side) => {
                    if empties > 0 {
                        out.push((b'0' + empties) as char);
                        empties = 0;
                    }
                    out.push(side.to_fen_char());
                }
                None => empties += 1,
            }
        }
        if empties > 0 {
            out.push((b'0' + empties) as char);
        }
    }

    out.push(' ');
    out.push(turn.to_fen_char());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "8/8/8/3OX3/3XO3/8/8/8 O";

    #[test]
    fn test_parse_start_position() {
        let (board, turn) = parse_fen(START).unwrap();
        assert_eq!(turn, Side::Light);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_roundtrip() {
        let fens = [
            START,
            "8/8/8/3OX3/3XO3/8/8/8 X",
            "XXXX4/8/8/8/8/8/8/8 O",
            "XO6/8/8/8/8/8/8/8 O",
            "OOOOOOOO/OOOOOOOO/OOOOOOOO/OOOOOOOO/XXXXXXXX/XXXXXXXX/XXXXXXXX/XXXXXXXX X",
        ];
        for fen in fens {
            let (board, turn) = parse_fen(fen).unwrap();
            assert_eq!(board_to_fen(&board, turn), fen);
        }
    }

    #[test]
    fn test_generate_from_new_board() {
        assert_eq!(board_to_fen(&Board::new(), Side::Light), START);
    }

    #[test]
    fn test_parse_errors() {
        // 缺少回合字段
        assert!(parse_fen("8/8/8/3OX3/3XO3/8/8/8").is_err());
        // 行数不对
        assert!(parse_fen("8/8/8/3OX3/3XO3/8/8 O").is_err());
        // 行宽不对
        assert!(parse_fen("7/8/8/3OX3/3XO3/8/8/8 O").is_err());
        assert!(parse_fen("9/8/8/3OX3/3XO3/8/8/8 O").is_err());
        // 非法字符
        assert!(parse_fen("8/8/8/3oX3/3XO3/8/8/8 O").is_err());
        assert!(parse_fen("8/8/8/3#X4/3XO3/8/8/8 O").is_err());
        // 非法回合
        assert!(parse_fen("8/8/8/3OX3/3XO3/8/8/8 r").is_err());
    }
}
