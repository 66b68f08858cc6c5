//! Terminal UI: a thin adapter that turns key presses into drops and renders
//! the game and the outcome of the last drop.

mod app;
mod game_view;

pub use app::App;
