//! Line-oriented serial command protocol
//!
//! A line is scanned for each known token in a fixed priority order and the
//! first one found is executed. Parameters are fixed-width decimal fields
//! directly after the token. The reply is always exactly one of [`OK`] or
//! [`ERR`], followed by a text block for `status` and `help`.

mod command;
mod fields;
mod reply;

pub use command::{Command, CommandError, ParsedCommand, parse};
pub use reply::{Ack, ERR, OK, write_help, write_status};

/// Outcome of handling one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reply {
    /// Acknowledgment sent on the wire
    pub ack: Ack,
    /// Fields that read as zero or carried stray characters
    pub malformed_fields: u8,
    /// Whether the state was written to storage afterwards
    pub saved: bool,
    /// Reason for an [`Ack::Err`]
    pub error: Option<CommandError>,
    /// The reply text did not fit into the output sink
    pub output_truncated: bool,
}

impl Reply {
    pub(crate) const fn rejected(error: CommandError) -> Self {
        Self {
            ack: Ack::Err,
            malformed_fields: 0,
            saved: false,
            error: Some(error),
            output_truncated: false,
        }
    }

    pub(crate) const fn accepted(malformed_fields: u8, saved: bool) -> Self {
        Self {
            ack: Ack::Ok,
            malformed_fields,
            saved,
            error: None,
            output_truncated: false,
        }
    }

    pub(crate) const fn truncated(mut self, truncated: bool) -> Self {
        self.output_truncated = truncated;
        self
    }

    pub const fn is_ok(&self) -> bool {
        matches!(self.ack, Ack::Ok)
    }
}
