use std::io::{self, BufRead, Write};
use std::time::Duration;

use tictactoe_engine::games::tictactoe::{
    GameError, GameOutcome, Mark, TicTacToeGameState, score_moves,
};
use tictactoe_engine::log;

use crate::config::{Config, FirstPlayerMode};
use crate::display::render_board;

pub const HUMAN_MARK: Mark = Mark::X;
pub const COMPUTER_MARK: Mark = Mark::O;

#[derive(Debug, Clone)]
pub struct GameSettings {
    pub first_player: FirstPlayerMode,
    pub think_delay: Duration,
    pub show_scores: bool,
}

impl From<&Config> for GameSettings {
    fn from(config: &Config) -> Self {
        Self {
            first_player: config.first_player,
            think_delay: Duration::from_millis(config.think_delay_ms),
            show_scores: config.show_scores,
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line.trim().to_string())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> io::Result<String> {
    write!(output, "{}", text)?;
    output.flush()?;
    read_line(input)
}

pub fn choose_first_mark<R: BufRead, W: Write>(
    mode: FirstPlayerMode,
    input: &mut R,
    output: &mut W,
) -> io::Result<Mark> {
    let human_first = match mode {
        FirstPlayerMode::Human => true,
        FirstPlayerMode::Computer => false,
        FirstPlayerMode::Random => rand::random(),
        FirstPlayerMode::Ask => {
            prompt(input, output, "Do you want to go first? (y/n): ")?.to_lowercase() == "y"
        }
    };

    if human_first {
        writeln!(output, "You go first!")?;
        Ok(HUMAN_MARK)
    } else {
        writeln!(output, "AI goes first!")?;
        Ok(COMPUTER_MARK)
    }
}

fn play_human_move<R: BufRead, W: Write>(
    state: &mut TicTacToeGameState,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    loop {
        let line = prompt(input, output, "Enter your move (0-8): ")?;
        let Ok(number) = line.parse::<i64>() else {
            writeln!(output, "Please enter a number between 0 and 8.")?;
            continue;
        };

        let placed = usize::try_from(number)
            .map_err(|_| ())
            .and_then(|position| state.place_mark(HUMAN_MARK, position).map_err(|_| ()));

        match placed {
            Ok(()) => return Ok(()),
            Err(()) => {
                log!("Rejected human move {}", number);
                writeln!(output, "Invalid move. Position already taken or out of range.")?;
            }
        }
    }
}

fn play_computer_move<W: Write>(
    state: &mut TicTacToeGameState,
    output: &mut W,
    settings: &GameSettings,
) -> io::Result<()> {
    writeln!(output, "AI is thinking...")?;
    output.flush()?;
    if !settings.think_delay.is_zero() {
        std::thread::sleep(settings.think_delay);
    }

    if settings.show_scores
        && let Ok(scores) = score_moves(state.board(), state.computer_mark())
    {
        let listing: Vec<String> = scores
            .iter()
            .map(|s| format!("{}:{}", s.position, s.score))
            .collect();
        log!("Move scores {}", listing.join(" "));
    }

    let position = state.play_computer_move().map_err(io::Error::other)?;
    writeln!(output, "AI chooses position {}", position)?;
    Ok(())
}

pub fn run_game<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    settings: &GameSettings,
) -> io::Result<GameOutcome> {
    writeln!(output, "Welcome to Tic Tac Toe!")?;
    writeln!(output, "You are {} and the AI is {}", HUMAN_MARK, COMPUTER_MARK)?;

    let first_mark = choose_first_mark(settings.first_player, input, output)?;
    log!("First move goes to {}", first_mark);
    let mut state = TicTacToeGameState::new(first_mark, COMPUTER_MARK);

    while state.status() == GameOutcome::InProgress {
        write!(output, "{}", render_board(state.board()))?;

        if state.is_computer_turn() {
            play_computer_move(&mut state, output, settings)?;
        } else {
            play_human_move(&mut state, input, output)?;
        }
    }

    write!(output, "{}", render_board(state.board()))?;
    match state.status() {
        GameOutcome::Win(mark) => writeln!(output, "{} wins!", mark)?,
        GameOutcome::Draw => writeln!(output, "It's a tie!")?,
        GameOutcome::InProgress => {
            return Err(io::Error::other(GameError::GameOver));
        }
    }
    if let Some(line) = state.winning_line() {
        log!("Winning line {:?}", line.cells);
    }

    Ok(state.status())
}
