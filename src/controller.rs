//! Light controller - the two entry points of the firmware
//!
//! Ties the color engine to its output and storage. The platform calls
//! [`LightController::on_tick`] from the timer and
//! [`LightController::on_line_ready`] once per received line; the two must
//! never overlap, see [`crate::SharedController`].

use core::fmt::{self, Write};

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use crate::OutputDriver;
use crate::color::{BLACK, HueModel, Rgb};
use crate::engine::ColorEngine;
use crate::protocol::{self, Ack, Command, Reply};
use crate::random::EntropySource;
use crate::state::EngineState;
use crate::storage::{DEFAULT_BASE, Eeprom, PersistentStore, RestoreOutcome};

/// Timer overflow period at 20 MHz with a /64 prescaler (~610 Hz)
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_micros(1_638);

const CONFIRM_COLOR: Rgb = Rgb { r: 0, g: 255, b: 0 };
const CONFIRM_GAP_MS: u32 = 10;
const CONFIRM_FLASH_MS: u32 = 100;

const SELF_TEST_COLORS: [Rgb; 3] = [
    Rgb { r: 255, g: 0, b: 0 },
    Rgb { r: 0, g: 255, b: 0 },
    Rgb { r: 0, g: 0, b: 255 },
];
const SELF_TEST_STEP_MS: u32 = 1_000;

/// Configuration for the light controller
#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    /// Color model used by the hue fade
    pub hue_model: HueModel,
    /// Whether the board drives a fourth (white) channel
    pub white_channel: bool,
    /// Address of the first persisted byte
    pub storage_base: u16,
    /// Period of the hardware tick
    pub tick_period: Duration,
    /// Flash green on every received line
    pub confirm_blink: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            hue_model: HueModel::Hsv,
            white_channel: false,
            storage_base: DEFAULT_BASE,
            tick_period: DEFAULT_TICK_PERIOD,
            confirm_blink: false,
        }
    }
}

/// Light controller - owns the engine, its output and its storage
pub struct LightController<O: OutputDriver, E: Eeprom> {
    config: ControllerConfig,
    engine: ColorEngine,
    store: PersistentStore,
    output: O,
    eeprom: E,
}

impl<O: OutputDriver, E: Eeprom> LightController<O, E> {
    /// Create a controller holding the compiled-in defaults.
    ///
    /// Call [`Self::boot`] to load the persisted state.
    pub fn new(config: ControllerConfig, output: O, eeprom: E, entropy: EntropySource) -> Self {
        Self {
            engine: ColorEngine::new(
                EngineState::new(config.white_channel),
                config.hue_model,
                entropy,
            ),
            store: PersistentStore::new(config.storage_base),
            config,
            output,
            eeprom,
        }
    }

    /// Restore the persisted state, keeping defaults on a first run
    pub fn boot(&mut self) -> RestoreOutcome {
        let outcome = self
            .store
            .restore_all(&self.eeprom, self.engine.state_mut());

        #[cfg(feature = "esp32-log")]
        esp_println::println!(
            "controller: boot {:?}, mode {}",
            outcome,
            self.engine.state().mode.as_str()
        );
        outcome
    }

    /// Tick entry point
    pub fn on_tick(&mut self) -> bool {
        self.engine.tick(&mut self.output)
    }

    /// Line entry point.
    ///
    /// Writes the acknowledgment (and the `status`/`help` block) to `out`;
    /// [`Reply::output_truncated`] reports a sink that ran out of room.
    /// On success the full state is saved when autosave is enabled.
    pub fn on_line_ready<W: Write>(&mut self, line: &[u8], out: &mut W) -> Reply {
        let parsed = match protocol::parse(line, self.config.hue_model, self.config.white_channel) {
            Ok(parsed) => parsed,
            Err(error) => {
                #[cfg(feature = "esp32-log")]
                esp_println::println!("controller: rejected line: {}", error);

                let written = out.write_str(Ack::Err.as_str());
                return Reply::rejected(error).truncated(written.is_err());
            }
        };

        #[cfg(feature = "esp32-log")]
        if parsed.malformed_fields > 0 {
            esp_println::println!(
                "controller: {:?} had {} malformed field(s)",
                parsed.command,
                parsed.malformed_fields
            );
        }

        parsed.command.apply(&mut self.engine);
        let written = self.write_accepted(parsed.command, out);

        #[cfg(feature = "esp32-log")]
        if written.is_err() {
            esp_println::println!("controller: reply to {:?} truncated", parsed.command);
        }

        let saved = self.engine.state().autosave;
        if saved {
            self.save();
        }
        Reply::accepted(parsed.malformed_fields, saved).truncated(written.is_err())
    }

    fn write_accepted<W: Write>(&self, command: Command, out: &mut W) -> fmt::Result {
        out.write_str(Ack::Ok.as_str())?;
        match command {
            Command::Status => protocol::write_status(out, &self.engine, self.config.tick_period),
            Command::Help => protocol::write_help(
                out,
                self.config.hue_model.set_token(),
                self.config.white_channel,
            ),
            _ => Ok(()),
        }
    }

    /// Flash the output to confirm a received line.
    ///
    /// The engine restores its color on the next update.
    pub fn confirm_blink<D: DelayNs>(&mut self, delay: &mut D) {
        let white = self.engine.state().white.map(|_| 0);
        self.output.write(BLACK, white);
        delay.delay_ms(CONFIRM_GAP_MS);
        self.output.write(CONFIRM_COLOR, white);
        delay.delay_ms(CONFIRM_FLASH_MS);
        self.output.write(BLACK, white);
        delay.delay_ms(CONFIRM_GAP_MS);
    }

    /// Show red, green and blue for one second each, then go dark.
    ///
    /// Meant to run once after power-on, before ticks are enabled.
    pub fn power_on_self_test<D: DelayNs>(&mut self, delay: &mut D) {
        let white = self.engine.state().white.map(|_| 0);
        for color in SELF_TEST_COLORS {
            self.output.write(color, white);
            delay.delay_ms(SELF_TEST_STEP_MS);
        }
        self.output.write(BLACK, white);
    }

    /// Write the full state to storage
    pub fn save(&mut self) {
        self.store.save_all(&mut self.eeprom, self.engine.state());

        #[cfg(feature = "esp32-log")]
        esp_println::println!("controller: state saved at {:#x}", self.store.base());
    }

    /// Time between two color updates with the current wait setting
    pub fn update_interval(&self) -> Duration {
        self.engine.update_interval(self.config.tick_period)
    }

    pub const fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub const fn engine(&self) -> &ColorEngine {
        &self.engine
    }

    pub const fn state(&self) -> &EngineState {
        self.engine.state()
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub const fn eeprom(&self) -> &E {
        &self.eeprom
    }

    /// Release the hardware handles
    pub fn into_parts(self) -> (O, E) {
        (self.output, self.eeprom)
    }
}
