use crate::config::Controls;
use crate::core::{Direction, GameChangeType, GameState, GameUpdate, ROW_TERMINATOR, UserAction, step};
use crate::error::SessionError;
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::{debug, info};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io::{self, Read, Write};

/// Reads a map up to the first empty line or the end of input. The last row keeps
/// its terminator; the blank line itself is consumed and dropped.
pub fn read_map<R: Read>(input: &mut R) -> Result<Vec<u8>, SessionError> {
    let mut map = Vec::new();
    let mut last_was_terminator = false;
    for byte in input.by_ref().bytes() {
        let byte = byte?;
        if byte == ROW_TERMINATOR {
            if last_was_terminator {
                break;
            }
            last_was_terminator = true;
        } else {
            last_was_terminator = false;
        }
        map.push(byte);
    }

    if map.is_empty() {
        return Err(SessionError::EmptyMap);
    }
    Ok(map)
}

pub enum ConsoleInput {
    UserAction(UserAction),
    SelectBox(u8),
    Direction(Direction),
    Print,
    Quit,
    Timeout,
    Unknown,
}

/// Reads one command from a byte stream: the quit key or end of input, a row
/// terminator to print, the undo key, or a box letter followed by a direction key.
pub fn read_command<I>(bytes: &mut I, controls: &Controls) -> Result<ConsoleInput, SessionError>
where
    I: Iterator<Item = io::Result<u8>>,
{
    let Some(first) = bytes.next().transpose()? else {
        return Ok(ConsoleInput::Quit);
    };
    if first == controls.quit {
        return Ok(ConsoleInput::Quit);
    }
    if first == ROW_TERMINATOR {
        return Ok(ConsoleInput::Print);
    }
    if first == controls.undo {
        return Ok(ConsoleInput::UserAction(UserAction::Undo));
    }

    // Anything else is taken as a letter, and always consumes a direction key.
    let Some(key) = bytes.next().transpose()? else {
        return Ok(ConsoleInput::Unknown);
    };
    match controls.direction_for(key) {
        Some(direction) if first.is_ascii_alphabetic() => {
            Ok(ConsoleInput::UserAction(UserAction::Push {
                letter: first,
                direction,
            }))
        }
        _ => {
            debug!("ignoring command {:?}", [first as char, key as char]);
            Ok(ConsoleInput::Unknown)
        }
    }
}

/// Plays a session over plain byte streams: prints the board once, then applies
/// commands until the quit key or end of input.
pub fn run_stream_session<R: Read, W: Write>(
    game: &mut GameState,
    controls: &Controls,
    input: &mut R,
    output: &mut W,
) -> Result<(), SessionError> {
    print_board(game, output)?;
    let mut bytes = input.by_ref().bytes();
    loop {
        match read_command(&mut bytes, controls)? {
            ConsoleInput::Quit => break,
            ConsoleInput::Print => print_board(game, output)?,
            ConsoleInput::UserAction(action) => {
                step(game, action);
            }
            _ => {}
        }
    }
    output.flush()?;
    info!(
        "stream session ended with {} pushes in the undo log",
        game.undo_log().len()
    );
    Ok(())
}

pub fn print_board<W: Write>(game: &GameState, output: &mut W) -> Result<(), SessionError> {
    output.write_all(game.grid().as_bytes())?;
    Ok(())
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, SessionError> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), SessionError> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), SessionError> {
    let instructions = render_instructions(state);
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        // Rows are ragged, so keep them left aligned.
        let game_text = state.game.grid().to_string();
        let game_paragraph = Paragraph::new(game_text)
            .block(Block::default().borders(Borders::ALL).title("Sokoban"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(game_paragraph, chunks[0]);

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

fn render_instructions(state: &GameRenderState) -> String {
    let controls = state.controls;
    let instructions = if state.game.is_solved() {
        "🎉 Solved! Undo to keep playing or quit.".to_string()
    } else {
        format!(
            "Letter selects a box, {}{}{}{} or arrows push, {} or Backspace undoes, {} or Esc quits",
            controls.key_for(Direction::Up) as char,
            controls.key_for(Direction::Down) as char,
            controls.key_for(Direction::Left) as char,
            controls.key_for(Direction::Right) as char,
            controls.undo as char,
            controls.quit as char,
        )
    };

    let instructions = match state.selected {
        Some(letter) => format!("{} | Box: {}", instructions, letter as char),
        None => instructions,
    };
    let instructions = format!(
        "{} | Pushes: {} | On goals: {}",
        instructions,
        state.game.undo_log().len(),
        state.game.boxes_on_goals()
    );

    if let Some(change_type) = &state.last_change {
        match change_type {
            GameChangeType::Push(m) => format!("{} | Last: push {}", instructions, m),
            GameChangeType::Undo(m) => format!("{} | Last: undo {}", instructions, m),
        }
    } else {
        instructions
    }
}

pub fn handle_input(controls: &Controls) -> Result<ConsoleInput, SessionError> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Backspace => ConsoleInput::UserAction(UserAction::Undo),
                KeyCode::Up => ConsoleInput::Direction(Direction::Up),
                KeyCode::Down => ConsoleInput::Direction(Direction::Down),
                KeyCode::Left => ConsoleInput::Direction(Direction::Left),
                KeyCode::Right => ConsoleInput::Direction(Direction::Right),
                KeyCode::Char(c) if c.is_ascii() => key_input(c as u8, controls),
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}

fn key_input(key: u8, controls: &Controls) -> ConsoleInput {
    if key == controls.quit {
        ConsoleInput::Quit
    } else if key == controls.undo {
        ConsoleInput::UserAction(UserAction::Undo)
    } else if let Some(direction) = controls.direction_for(key) {
        ConsoleInput::Direction(direction)
    } else if key.is_ascii_alphabetic() {
        ConsoleInput::SelectBox(key)
    } else {
        ConsoleInput::Unknown
    }
}

/// Runs the terminal UI until the player quits.
pub fn run_interactive(
    game: &mut GameState,
    controls: &Controls,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), SessionError> {
    let mut selected = None;
    let mut last_change = None;
    render_game(terminal, &GameRenderState::new(game, controls, selected, last_change))?;

    loop {
        let action = match handle_input(controls)? {
            ConsoleInput::Quit => break,
            ConsoleInput::SelectBox(letter) => {
                selected = Some(letter);
                None
            }
            ConsoleInput::Direction(direction) => {
                selected.map(|letter| UserAction::Push { letter, direction })
            }
            ConsoleInput::UserAction(action) => Some(action),
            ConsoleInput::Timeout => continue,
            ConsoleInput::Print | ConsoleInput::Unknown => None,
        };

        if let Some(action) = action {
            if let GameUpdate::NextState(change) = step(game, action) {
                last_change = Some(change);
            }
        }
        render_game(terminal, &GameRenderState::new(game, controls, selected, last_change))?;
    }

    info!(
        "interactive session ended with {} pushes in the undo log",
        game.undo_log().len()
    );
    Ok(())
}
