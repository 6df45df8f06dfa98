//! Keyboard mapping for the text front end.

use wild_west_core::{Action, Direction};

/// Meaning of one polled input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Input {
    /// Leave the game.
    Quit,
    /// Forward an action to the world.
    Act(Action),
    /// Let the frame pass without acting.
    Idle,
}

/// Interprets the first symbol of a line; an empty line is an idle frame.
pub(crate) fn interpret(line: &str) -> Input {
    let Some(key) = line.chars().next() else {
        return Input::Idle;
    };

    match key.to_ascii_lowercase() {
        'q' => Input::Quit,
        'w' => Input::Act(Action::Move(Direction::Up)),
        'a' => Input::Act(Action::Move(Direction::Left)),
        's' => Input::Act(Action::Move(Direction::Down)),
        'd' => Input::Act(Action::Move(Direction::Right)),
        'j' => Input::Act(Action::Jump),
        'f' | ' ' => Input::Act(Action::Shoot),
        _ => Input::Idle,
    }
}
