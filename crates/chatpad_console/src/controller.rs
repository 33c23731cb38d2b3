//! Driving virtual controllers.
//!
//! The dispatcher turns one step of a sequence into button and axis calls.
//! Callers invoke [`ControllerDispatcher::begin_step`], wait for the step's
//! duration, then invoke [`ControllerDispatcher::end_step`].

use chatpad_foundation::{InputStep, InputToken};
use thiserror::Error;
use tracing::trace;

use crate::console::{GameConsole, InputKind};

/// A controller that inputs can be sent to.
pub trait VirtualController {
    /// Presses a button.
    fn press_button(&mut self, code: u32);

    /// Releases a button.
    fn release_button(&mut self, code: u32);

    /// Pushes an axis by `percent` of its range.
    fn press_axis(&mut self, code: u32, percent: f64);

    /// Returns an axis to rest.
    fn release_axis(&mut self, code: u32);
}

impl<T: VirtualController + ?Sized> VirtualController for Box<T> {
    fn press_button(&mut self, code: u32) {
        (**self).press_button(code);
    }

    fn release_button(&mut self, code: u32) {
        (**self).release_button(code);
    }

    fn press_axis(&mut self, code: u32, percent: f64) {
        (**self).press_axis(code, percent);
    }

    fn release_axis(&mut self, code: u32) {
        (**self).release_axis(code);
    }
}

/// Why a step could not be sent.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// A token targets a port with no controller.
    #[error("no controller at port {port}; {controller_count} controllers available")]
    MissingController {
        /// 1-based port.
        port: u64,
        /// Number of controllers given.
        controller_count: usize,
    },
}

// =============================================================================
// ControllerDispatcher
// =============================================================================

/// Sends steps to controllers using a console's input table.
#[derive(Clone, Copy, Debug)]
pub struct ControllerDispatcher<'a> {
    console: &'a GameConsole,
}

impl<'a> ControllerDispatcher<'a> {
    /// Creates a dispatcher for `console`.
    #[must_use]
    pub fn new(console: &'a GameConsole) -> Self {
        Self { console }
    }

    /// Starts a step: presses every input and performs every release.
    ///
    /// Nothing is sent unless every token's port has a controller.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::MissingController`] for the first token whose
    /// port is out of range.
    pub fn begin_step<C: VirtualController>(
        &self,
        step: &InputStep,
        controllers: &mut [C],
    ) -> Result<(), DispatchError> {
        check_ports(step, controllers.len())?;
        for token in step {
            let controller = &mut controllers[port_index(token)];
            if token.is_release() {
                self.release(token, controller);
            } else {
                self.press(token, controller);
            }
        }
        Ok(())
    }

    /// Ends a step: releases every input that is neither held nor a release.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::MissingController`] for the first token whose
    /// port is out of range.
    pub fn end_step<C: VirtualController>(
        &self,
        step: &InputStep,
        controllers: &mut [C],
    ) -> Result<(), DispatchError> {
        check_ports(step, controllers.len())?;
        for token in step.iter().filter(|token| !token.is_hold() && !token.is_release()) {
            self.release(token, &mut controllers[port_index(token)]);
        }
        Ok(())
    }

    fn press<C: VirtualController>(&self, token: &InputToken, controller: &mut C) {
        match self.console.kind_of(token.name()) {
            Some(InputKind::Button { code }) => {
                trace!(input = token.name(), code, port = token.port(), "press button");
                controller.press_button(code);
            }
            Some(InputKind::Axis { code }) => {
                trace!(input = token.name(), code, port = token.port(), percent = token.percent(), "press axis");
                controller.press_axis(code, token.percent());
            }
            Some(InputKind::Blank) | None => {}
        }
    }

    fn release<C: VirtualController>(&self, token: &InputToken, controller: &mut C) {
        match self.console.kind_of(token.name()) {
            Some(InputKind::Button { code }) => {
                trace!(input = token.name(), code, port = token.port(), "release button");
                controller.release_button(code);
            }
            Some(InputKind::Axis { code }) => {
                trace!(input = token.name(), code, port = token.port(), "release axis");
                controller.release_axis(code);
            }
            Some(InputKind::Blank) | None => {}
        }
    }
}

fn port_index(token: &InputToken) -> usize {
    token.port() as usize
}

fn check_ports(step: &InputStep, controller_count: usize) -> Result<(), DispatchError> {
    match step.iter().find(|token| port_index(token) >= controller_count) {
        Some(token) => Err(DispatchError::MissingController {
            port: u64::from(token.port()) + 1,
            controller_count,
        }),
        None => Ok(()),
    }
}
