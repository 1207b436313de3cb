//! Acknowledgments and text blocks written back over the serial link

use core::fmt::{self, Write};

use embassy_time::Duration;

use crate::engine::ColorEngine;

/// Acknowledgment for a recognized command
pub const OK: &str = "\r\nOK\r\n";

/// Acknowledgment for a rejected line
pub const ERR: &str = "\r\nERR\r\n";

/// One of the two protocol acknowledgments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ack {
    Ok,
    Err,
}

impl Ack {
    pub const fn as_str(self) -> &'static str {
        match self {
            Ack::Ok => OK,
            Ack::Err => ERR,
        }
    }
}

/// Write every state field as `name: value` lines
pub fn write_status<W: Write>(
    out: &mut W,
    engine: &ColorEngine,
    tick_period: Duration,
) -> fmt::Result {
    let state = engine.state();
    let model = engine.hue_model();

    write!(out, "mode: {} ({})\r\n", state.mode.as_raw(), state.mode.as_str())?;
    write!(
        out,
        "rgb: {:03} {:03} {:03}\r\n",
        state.current.r, state.current.g, state.current.b
    )?;
    write!(
        out,
        "target: {:03} {:03} {:03}\r\n",
        state.target.r, state.target.g, state.target.b
    )?;
    write!(
        out,
        "{}: {:03} {:03} {:03}\r\n",
        model.as_str(),
        state.hue.hue,
        state.hue.sat,
        state.hue.level
    )?;
    write!(
        out,
        "offset: {:+03} {:+03} {:+03}\r\n",
        state.offset.r, state.offset.g, state.offset.b
    )?;
    write!(
        out,
        "bound: {:03} {:03} {:03}\r\n",
        state.bound.r, state.bound.g, state.bound.b
    )?;
    write!(
        out,
        "wait: {:03} ({} ms)\r\n",
        state.wait_ticks,
        engine.update_interval(tick_period).as_millis()
    )?;
    if let Some(white) = state.white {
        write!(out, "white: {:03}\r\n", white)?;
    }
    write!(out, "autosave: {}\r\n", u8::from(state.autosave))
}

/// Write the static usage text
pub fn write_help<W: Write>(out: &mut W, hue_token: &str, white_channel: bool) -> fmt::Result {
    out.write_str("SRGB:RRRGGGBBB  set fixed color\r\n")?;
    write!(out, "{}HHHSSSLLL  set hue triple\r\n", hue_token)?;
    out.write_str("SSV:SSSLLL      set saturation/level\r\n")?;
    out.write_str("SMD:MMM         mode 1=random 2=fixed 3=hue\r\n")?;
    out.write_str("SM:RRRGGGBBB    random bounds\r\n")?;
    out.write_str("SO:+RR+GG+BB    random offsets\r\n")?;
    if white_channel {
        out.write_str("SW:WWW          white level\r\n")?;
    }
    out.write_str("SD:DDD          ticks per update\r\n")?;
    out.write_str("SAV:V           autosave 0/1\r\n")?;
    out.write_str("status, help\r\n")
}
