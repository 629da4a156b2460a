use common::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Turn(Direction),
    Restart,
    Quit,
    None,
}

/// Key bindings while the board is up. Only key presses count; repeats
/// and releases map to `None`.
pub fn map_game_key(key: KeyEvent) -> GameKey {
    if key.kind != KeyEventKind::Press {
        return GameKey::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return GameKey::Quit;
    }

    match key.code {
        KeyCode::Up => GameKey::Turn(Direction::Up),
        KeyCode::Down => GameKey::Turn(Direction::Down),
        KeyCode::Left => GameKey::Turn(Direction::Left),
        KeyCode::Right => GameKey::Turn(Direction::Right),

        KeyCode::Char('w') | KeyCode::Char('W') => GameKey::Turn(Direction::Up),
        KeyCode::Char('s') | KeyCode::Char('S') => GameKey::Turn(Direction::Down),
        KeyCode::Char('a') | KeyCode::Char('A') => GameKey::Turn(Direction::Left),
        KeyCode::Char('d') | KeyCode::Char('D') => GameKey::Turn(Direction::Right),

        KeyCode::Char('r') | KeyCode::Char('R') => GameKey::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => GameKey::Quit,

        _ => GameKey::None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Digit(char),
    Backspace,
    Confirm,
    Up,
    Down,
    Disarm,
    Rearm,
    StartGame,
    Quit,
    None,
}

/// Key bindings on the alarm and wake-up screens.
pub fn map_menu_key(key: KeyEvent) -> MenuKey {
    if key.kind != KeyEventKind::Press {
        return MenuKey::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return MenuKey::Quit;
    }

    match key.code {
        KeyCode::Char(c @ '0'..='9') | KeyCode::Char(c @ ':') => MenuKey::Digit(c),
        KeyCode::Backspace => MenuKey::Backspace,
        KeyCode::Enter => MenuKey::Confirm,
        KeyCode::Up => MenuKey::Up,
        KeyCode::Down => MenuKey::Down,

        KeyCode::Char('s') | KeyCode::Char('S') => MenuKey::Disarm,
        KeyCode::Char('a') | KeyCode::Char('A') => MenuKey::Rearm,
        KeyCode::Char('g') | KeyCode::Char('G') => MenuKey::StartGame,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => MenuKey::Quit,

        _ => MenuKey::None,
    }
}
