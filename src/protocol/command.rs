//! Command tokens and their parameters

use crate::color::{HueColor, HueModel, Rgb};
use crate::engine::ColorEngine;
use crate::mode::ModeId;
use crate::protocol::fields::FieldReader;
use crate::state::{ChannelOffset, MAX_OFFSET};

/// A recognized command with its decoded parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `SRGB:RRRGGGBBB` - set the output directly and hold it
    SetRgb(Rgb),
    /// `SHSV:`/`SHSL:` `HHHSSSLLL` - set the hue triple and re-render
    SetHue(HueColor),
    /// `SSV:SSSLLL` - set saturation and value (or lightness)
    SetSatLevel { sat: u8, level: u8 },
    /// `SMD:MMM` - switch mode by numeric code
    SetMode(ModeId),
    /// `SM:RRRGGGBBB` - random draw ceiling per channel
    SetBound(Rgb),
    /// `SO:±RR±GG±BB` - signed random offset per channel
    SetOffset(ChannelOffset),
    /// `SW:WWW` - auxiliary white level
    SetWhite(u8),
    /// `SD:DDD` - ticks between color updates
    SetWait(u8),
    /// `SAV:V` - enable or disable saving after each command
    SetAutosave(bool),
    /// `status` - dump the current state
    Status,
    /// `help` - print usage
    Help,
}

/// Why a line was answered with ERR
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// No known token in the line
    Unrecognized,
    /// `SW:` on a board without a white channel
    WhiteChannelDisabled,
    /// `SMD:` with a code that is not a mode
    UnknownMode(u8),
}

impl core::fmt::Display for CommandError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CommandError::Unrecognized => write!(f, "unrecognized command"),
            CommandError::WhiteChannelDisabled => {
                write!(f, "white channel is not available on this board")
            }
            CommandError::UnknownMode(code) => write!(f, "unknown mode {}", code),
        }
    }
}

/// A parsed command and how many of its fields were malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCommand {
    pub command: Command,
    pub malformed_fields: u8,
}

#[derive(Debug, Clone, Copy)]
enum Keyword {
    SetRgb,
    SetHue,
    SetSatLevel,
    SetMode,
    SetBound,
    SetOffset,
    SetWhite,
    SetWait,
    SetAutosave,
    Status,
    Help,
}

impl Keyword {
    /// Matching order; the first keyword found anywhere in the line wins
    const PRIORITY: [Keyword; 11] = [
        Keyword::SetRgb,
        Keyword::SetHue,
        Keyword::SetSatLevel,
        Keyword::SetMode,
        Keyword::SetBound,
        Keyword::SetOffset,
        Keyword::SetWhite,
        Keyword::SetWait,
        Keyword::SetAutosave,
        Keyword::Status,
        Keyword::Help,
    ];

    const fn token(self, model: HueModel) -> &'static str {
        match self {
            Keyword::SetRgb => "SRGB:",
            Keyword::SetHue => model.set_token(),
            Keyword::SetSatLevel => "SSV:",
            Keyword::SetMode => "SMD:",
            Keyword::SetBound => "SM:",
            Keyword::SetOffset => "SO:",
            Keyword::SetWhite => "SW:",
            Keyword::SetWait => "SD:",
            Keyword::SetAutosave => "SAV:",
            Keyword::Status => "status",
            Keyword::Help => "help",
        }
    }
}

/// Locate the highest-priority keyword in `line`.
///
/// Returns the keyword and the bytes following its token.
fn find_keyword(line: &[u8], model: HueModel) -> Option<(Keyword, &[u8])> {
    Keyword::PRIORITY.iter().find_map(|&keyword| {
        let token = keyword.token(model).as_bytes();
        line.windows(token.len())
            .position(|window| window == token)
            .map(|at| (keyword, &line[at + token.len()..]))
    })
}

/// Decode one protocol line.
///
/// `model` selects which hue token is accepted and `white_channel` whether
/// `SW:` is available.
pub fn parse(
    line: &[u8],
    model: HueModel,
    white_channel: bool,
) -> Result<ParsedCommand, CommandError> {
    let (keyword, params) = find_keyword(line, model).ok_or(CommandError::Unrecognized)?;
    let mut fields = FieldReader::new(params);

    let command = match keyword {
        Keyword::SetRgb => Command::SetRgb(read_rgb(&mut fields)),
        Keyword::SetHue => Command::SetHue(HueColor::new(
            fields.next_u8(),
            fields.next_u8(),
            fields.next_u8(),
        )),
        Keyword::SetSatLevel => Command::SetSatLevel {
            sat: fields.next_u8(),
            level: fields.next_u8(),
        },
        Keyword::SetMode => {
            let code = fields.next_u8();
            Command::SetMode(ModeId::from_raw(code).ok_or(CommandError::UnknownMode(code))?)
        }
        Keyword::SetBound => Command::SetBound(read_rgb(&mut fields)),
        Keyword::SetOffset => Command::SetOffset(ChannelOffset::new(
            fields.next_offset(MAX_OFFSET),
            fields.next_offset(MAX_OFFSET),
            fields.next_offset(MAX_OFFSET),
        )),
        Keyword::SetWhite => {
            if !white_channel {
                return Err(CommandError::WhiteChannelDisabled);
            }
            Command::SetWhite(fields.next_u8())
        }
        Keyword::SetWait => Command::SetWait(fields.next_u8()),
        Keyword::SetAutosave => Command::SetAutosave(fields.next_flag()),
        Keyword::Status => Command::Status,
        Keyword::Help => Command::Help,
    };

    Ok(ParsedCommand {
        command,
        malformed_fields: fields.malformed(),
    })
}

fn read_rgb(fields: &mut FieldReader<'_>) -> Rgb {
    Rgb::new(fields.next_u8(), fields.next_u8(), fields.next_u8())
}

impl Command {
    /// Apply the command to the engine state
    pub fn apply(self, engine: &mut ColorEngine) {
        match self {
            Command::SetRgb(color) => {
                let state = engine.state_mut();
                state.current = color;
                state.mode = ModeId::Fixed;
            }
            Command::SetHue(hue) => {
                engine.state_mut().hue = hue;
                engine.render_hue();
            }
            Command::SetSatLevel { sat, level } => {
                let hue = &mut engine.state_mut().hue;
                hue.sat = sat;
                hue.level = level;
            }
            Command::SetMode(mode) => engine.state_mut().mode = mode,
            Command::SetBound(bound) => engine.state_mut().bound = bound,
            Command::SetOffset(offset) => engine.state_mut().offset = offset,
            Command::SetWhite(level) => engine.state_mut().white = Some(level),
            Command::SetWait(ticks) => engine.state_mut().wait_ticks = ticks,
            Command::SetAutosave(enabled) => engine.state_mut().autosave = enabled,
            Command::Status | Command::Help => {
                // Queries leave the state untouched
            }
        }
    }
}
