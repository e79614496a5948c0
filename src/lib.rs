//! # Connect Four
//!
//! Two-player Connect Four: players alternate dropping pieces into columns
//! until one gets four in a row or the board fills. The game core is free of
//! any presentation; front ends drive a [`game::Session`] and render its
//! results through the [`game::Presenter`] trait.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: grid, players, win detection, session state machine
//! - [`ui`] — Terminal UI and headless text front end
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
