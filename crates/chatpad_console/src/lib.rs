//! Consoles and everything that happens after a message parses.
//!
//! This crate provides:
//! - [`GameConsole`] - The input table of one console and its invalid combos
//! - [`ReverseParser`] - Renders sequences back to syntax or plain English
//! - [`InputValidator`] - Permission, port, and combo checks
//! - [`insert_mid_input_delays`] - Spaces consecutive steps with blank inputs
//! - [`ControllerDispatcher`] - Drives [`VirtualController`]s step by step

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod console;
pub mod controller;
pub mod delay;
pub mod reverse;
pub mod validation;


pub use console::{GameConsole, GameConsoleBuilder, InputKind};
pub use controller::{ControllerDispatcher, DispatchError, VirtualController};
pub use delay::insert_mid_input_delays;
pub use reverse::{ReverseOptions, ReverseParser, ShowDurations, ShowPorts};
pub use validation::{InputValidator, ValidationError};
