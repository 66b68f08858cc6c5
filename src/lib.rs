//! # Connect Four
//!
//! A two-player Connect Four engine. The core takes a "drop a piece in column
//! X" command and answers with a structured outcome; presentation layers (a
//! Ratatui terminal UI and a headless JSON driver) sit on top of it.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, players, win detection, game state
//! - [`script`]: Headless driver writing outcomes as JSON lines
//! - [`ui`]: Terminal UI
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod script;
pub mod ui;
