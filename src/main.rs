//! Reversi CLI
//!
//! 命令行界面
//!
//! 支持两种用法：
//! 1. 交互模式：人机对战主循环（默认）
//! 2. 分析命令：对给定局面枚举走法、选点或算分

use clap::{Parser, Subcommand};
use reversi_engine::{
    parse_fen, AIConfig, AIEngine, AIStrategy, Board, Cell, Game, GameOutcome, Phase, Position,
    Side, DEFAULT_STRATEGY,
};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};

/// 人类执白，电脑执黑
const HUMAN: Side = Side::Light;

#[derive(Parser)]
#[command(name = "reversi-engine")]
#[command(about = "Reversi (Othello) game engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// 人机对战（默认）
    Play {
        /// 电脑策略 (first, random)
        #[arg(long, default_value = "first")]
        strategy: String,

        /// 随机种子（先手选择与随机策略）
        #[arg(long)]
        seed: Option<u64>,
    },

    /// 枚举合法走法
    Moves {
        /// 局面串
        #[arg(long)]
        fen: String,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 让策略选一个走法
    Best {
        /// 局面串
        #[arg(long)]
        fen: String,

        /// 策略 (first, random)
        #[arg(long, default_value = "first")]
        strategy: String,

        /// 随机种子
        #[arg(long)]
        seed: Option<u64>,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 双方子数与对局结果
    Score {
        /// 局面串
        #[arg(long)]
        fen: String,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize, Deserialize)]
struct MovesResponse {
    moves: Vec<String>,
    total: usize,
}

#[derive(Serialize, Deserialize)]
struct BestResponse {
    #[serde(rename = "move")]
    mv: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct ScoreResponse {
    light: u32,
    dark: u32,
    outcome: String,
}

fn outcome_to_str(outcome: GameOutcome) -> &'static str {
    match outcome {
        GameOutcome::InProgress => "in_progress",
        GameOutcome::Tie => "tie",
        GameOutcome::LightWins => "light",
        GameOutcome::DarkWins => "dark",
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        None => run_game(DEFAULT_STRATEGY, None),

        Some(Commands::Play { strategy, seed }) => run_game(&strategy, seed),

        Some(Commands::Moves { fen, json }) => match parse_fen(&fen) {
            Ok((board, turn)) => {
                let moves: Vec<String> = board
                    .legal_moves(turn)
                    .iter()
                    .map(|p| p.to_input_str())
                    .collect();

                if json {
                    let response = MovesResponse {
                        total: moves.len(),
                        moves,
                    };
                    println!("{}", serde_json::to_string_pretty(&response).unwrap());
                } else {
                    println!("Legal moves for {} ({}):", turn, moves.len());
                    for mv in &moves {
                        println!("  {}", mv);
                    }
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },

        Some(Commands::Best {
            fen,
            strategy,
            seed,
            json,
        }) => {
            let config = AIConfig { seed };
            let ai = match AIEngine::from_strategy(&strategy, &config) {
                Ok(ai) => ai,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            match parse_fen(&fen) {
                Ok((board, turn)) => {
                    let mv = ai.select_move(&board, turn).map(|p| p.to_input_str());

                    if json {
                        println!(
                            "{}",
                            serde_json::to_string_pretty(&BestResponse { mv }).unwrap()
                        );
                    } else {
                        match mv {
                            Some(mv) => println!("Best move (strategy={}): {}", strategy, mv),
                            None => println!("No move available for {}.", turn),
                        }
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Some(Commands::Score { fen, json }) => match parse_fen(&fen) {
            Ok((board, _)) => {
                let light = board.count(Side::Light);
                let dark = board.count(Side::Dark);
                let outcome = board.game_result();

                if json {
                    let response = ScoreResponse {
                        light,
                        dark,
                        outcome: outcome_to_str(outcome).to_string(),
                    };
                    println!("{}", serde_json::to_string_pretty(&response).unwrap());
                } else {
                    println!("Score: O = {} X = {}", light, dark);
                    match outcome {
                        GameOutcome::InProgress => println!("Game in progress."),
                        GameOutcome::Tie => println!("Game over: tie."),
                        GameOutcome::LightWins => println!("Game over: Light wins."),
                        GameOutcome::DarkWins => println!("Game over: Dark wins."),
                    }
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}

/// 人机对战主循环
///
/// 一局结束后自动开新局，直到 quit 或输入流结束
fn run_game(strategy: &str, seed: Option<u64>) {
    let config = AIConfig { seed };
    let ai = match AIEngine::from_strategy(strategy, &config) {
        Ok(ai) => ai,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let mut game = Game::new(seed);
        if let Some(side) = game.side_to_move() {
            log::debug!("new game, {} moves first", side);
        }

        // 对局循环
        while let Phase::Awaiting(side) = game.phase() {
            print_board(&game.board().hinted(side));
            println!("Current Player: {}", side.to_fen_char());

            if side == HUMAN {
                println!("Human's turn.");
                if game.must_pass() {
                    println!("Sorry, you don't have a move available.");
                    game.pass();
                    if !pause(&mut lines) {
                        return;
                    }
                } else if !human_turn(&mut game, &mut lines) {
                    return;
                }
            } else {
                println!("Computer's turn.");
                match game.play_with(&ai) {
                    Some(pos) => {
                        log::debug!("computer plays {}", pos);
                        println!("Computer places a disc at {}.", pos);
                    }
                    None => println!("Computer could not find a move."),
                }
                if !pause(&mut lines) {
                    return;
                }
            }
        }

        // 对局结束
        print_board(game.board());
        match game.outcome() {
            GameOutcome::Tie => println!("It's a tie!"),
            GameOutcome::DarkWins => println!("You have lost to the computer!"),
            GameOutcome::LightWins => println!("You have won the computer!"),
            GameOutcome::InProgress => {}
        }

        if !pause(&mut lines) {
            return;
        }
    }
}

/// 读取并执行人类的一步棋；返回 false 表示 quit 或输入流结束
fn human_turn(
    game: &mut Game,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> bool {
    loop {
        print!("-> ");
        let _ = io::stdout().flush();

        let Some(input) = read_line(lines) else {
            return false;
        };
        if input == "quit" {
            return false;
        }

        match Position::from_input_str(&input) {
            Some(pos) => {
                if game.play(pos) {
                    return true;
                }
                println!("That move does not flip any discs. / Coordinate is out of bounds.");
            }
            None => println!("Invalid input. Please type in the format of <row> <column>."),
        }
    }
}

/// 暂停等待回车；返回 false 表示 quit 或输入流结束
fn pause(lines: &mut impl Iterator<Item = io::Result<String>>) -> bool {
    println!("Press ENTER to continue.");
    match read_line(lines) {
        Some(input) => input != "quit",
        None => false,
    }
}

/// 读一行输入，流结束或读取失败时返回 None
fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    lines.next()?.ok()
}

/// 渲染棋盘（行号 1-8，列号 a-h，附带双方子数）
fn print_board(board: &Board) {
    for row in 0..8 {
        println!("  +---+---+---+---+---+---+---+---+");
        print!("{}", row + 1);
        for col in 0..8 {
            let cell = board.get(Position::new(row, col)).unwrap_or(Cell::Empty);
            print!(" | {}", cell.to_char());
        }
        println!(" |");
    }
    println!("  +---+---+---+---+---+---+---+---+");
    println!("    a   b   c   d   e   f   g   h");
    println!(
        "  Score: O = {} X = {}",
        board.count(Side::Light),
        board.count(Side::Dark)
    );
}
