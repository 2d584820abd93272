//! Command line front end for the evaluation core. Non-interactive: one
//! subcommand per invocation, results on stdout, failures on stderr.

use clap::{Parser, Subcommand, ValueEnum};
use scaccomatto::{
    count_legal_moves, decode, evaluate_position, move_text, select_best_move, Color, EngineError,
    Evaluation, RankOrder, START_BOARD_TEXT,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the combined evaluation of a position
    Eval {
        #[arg(short, long, default_value_t = String::from(START_BOARD_TEXT))]
        position: String,

        #[arg(short, long, value_enum, default_value = "white")]
        side: Side,
    },
    /// Pick the single-ply best move for the side to move
    BestMove {
        #[arg(short, long, default_value_t = String::from(START_BOARD_TEXT))]
        position: String,

        #[arg(short, long, value_enum, default_value = "white")]
        side: Side,
    },
    /// Count legal moves for the side to move
    Count {
        #[arg(short, long, default_value_t = String::from(START_BOARD_TEXT))]
        position: String,

        #[arg(short, long, value_enum, default_value = "white")]
        side: Side,
    },
    /// Print the board grid
    Show {
        #[arg(short, long, default_value_t = String::from(START_BOARD_TEXT))]
        position: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Color {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

fn run(args: Args) -> Result<(), EngineError> {
    match args.command {
        Command::Eval { position, side } => {
            let board = decode(&position, RankOrder::TopRankFirst)?;
            match evaluate_position(&board, side.into())? {
                Evaluation::ForcedMate => println!("#"),
                Evaluation::Verdict(verdict) => println!("{verdict}"),
                Evaluation::Score(score) => println!("{score}"),
            }
        }
        Command::BestMove { position, side } => {
            let board = decode(&position, RankOrder::TopRankFirst)?;
            let (best, resulting) = select_best_move(&board, side.into())?;
            println!("{}", move_text(&best));
            println!("{resulting}");
        }
        Command::Count { position, side } => {
            let board = decode(&position, RankOrder::TopRankFirst)?;
            println!("{}", count_legal_moves(&board, side.into())?);
        }
        Command::Show { position } => {
            let board = decode(&position, RankOrder::TopRankFirst)?;
            println!("{board}");
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
