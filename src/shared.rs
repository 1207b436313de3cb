//! Interrupt-safe home for the controller.
//!
//! The tick and line handlers both lock the controller through a
//! `critical-section` mutex. While a line is handled no tick can run, and
//! tick delivery resumes when the closure returns, on every path out of it.

use core::cell::RefCell;
use core::fmt::Write;

use critical_section::Mutex;
use embedded_hal::delay::DelayNs;

use crate::OutputDriver;
use crate::controller::LightController;
use crate::protocol::Reply;
use crate::storage::Eeprom;

/// A controller slot that can live in a `static`.
///
/// Handlers return `None` until a controller has been installed.
pub struct SharedController<O: OutputDriver, E: Eeprom> {
    inner: Mutex<RefCell<Option<LightController<O, E>>>>,
}

impl<O: OutputDriver, E: Eeprom> SharedController<O, E> {
    /// Create an empty slot.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Install a controller, returning the previous one if any.
    pub fn install(&self, controller: LightController<O, E>) -> Option<LightController<O, E>> {
        critical_section::with(|cs| self.inner.borrow(cs).replace(Some(controller)))
    }

    /// Take the controller out of the slot.
    pub fn take(&self) -> Option<LightController<O, E>> {
        critical_section::with(|cs| self.inner.borrow(cs).take())
    }

    /// Run `f` with exclusive access to the controller.
    pub fn with<R>(&self, f: impl FnOnce(&mut LightController<O, E>) -> R) -> Option<R> {
        critical_section::with(|cs| {
            let mut slot = self.inner.borrow(cs).borrow_mut();
            slot.as_mut().map(f)
        })
    }

    /// Timer entry point.
    ///
    /// Returns `Some(true)` when the tick produced a color update.
    pub fn on_tick(&self) -> Option<bool> {
        self.with(|controller| controller.on_tick())
    }

    /// Line entry point, with ticks masked for the whole command.
    pub fn on_line_ready<W: Write>(&self, line: &[u8], out: &mut W) -> Option<Reply> {
        self.with(|controller| controller.on_line_ready(line, out))
    }

    /// Line entry point that also flashes the confirmation blink when it is
    /// enabled in the configuration. The blink runs inside the same masked
    /// section as the command.
    pub fn on_line_ready_with_delay<W: Write, D: DelayNs>(
        &self,
        line: &[u8],
        out: &mut W,
        delay: &mut D,
    ) -> Option<Reply> {
        self.with(|controller| {
            if controller.config().confirm_blink {
                controller.confirm_blink(delay);
            }
            controller.on_line_ready(line, out)
        })
    }
}

impl<O: OutputDriver, E: Eeprom> Default for SharedController<O, E> {
    fn default() -> Self {
        Self::new()
    }
}
