//! Colour guessing game.
//!
//! The player sees a colour and types its hex code, or sees a hex code and
//! picks the colour with an HSV picker. Guesses are scored by their distance
//! in RGB space.

pub mod input;
pub mod logic;
pub mod models;
pub mod picker;
pub mod scoring;
pub mod state;
pub mod storage;
pub mod system;
pub mod views;
