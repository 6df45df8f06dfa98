//! Story cards shown between frames.

use wild_west_core::Transition;

/// Cards following the welcome banner before the first level.
pub(crate) const INTRO: [&str; 4] = [
    "An infamous gang is roaming the region and attacking lone travellers",
    "Try to get to your hometown safe",
    "Press Space or F to shoot, J to jump and WASD to move",
    "Are you ready to embark on this treacherous journey?",
];

const LEVEL_COMPLETE: [&str; 2] = [
    "Congratulations Cowboy, you just completed the level. Now the real challenge starts.",
    "Welcome To The New Level",
];

const ARRIVAL: [&str; 1] = ["Congratulations! You arrived to your hometown safe and sound!"];

const DEATH: [&str; 1] = ["Game over. Good luck next time, Cowboy."];

/// Cards announcing the provided transition.
pub(crate) fn cards_for(transition: Transition) -> &'static [&'static str] {
    match transition {
        Transition::None => &[],
        Transition::NewLevel => &LEVEL_COMPLETE,
        Transition::GameOver => &ARRIVAL,
        Transition::YouDied => &DEATH,
    }
}
