//! Shared test infrastructure

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use myrtio_tiny_rgb::{
    ControllerConfig, LightController, OutputDriver, RamEeprom, Rgb,
};

/// EEPROM size used by the tests
pub const EEPROM_SIZE: usize = 64;

pub type TestController = LightController<MockOutput, RamEeprom<EEPROM_SIZE>>;

/// Fixed boot noise so random draws are reproducible
pub fn fixed_entropy() -> u16 {
    1
}

/// Output sink that records every write
#[derive(Debug, Default)]
pub struct MockOutput {
    pub writes: Vec<(Rgb, Option<u8>)>,
    pub heartbeat: bool,
    pub heartbeat_toggles: usize,
}

impl MockOutput {
    pub fn last(&self) -> Option<(Rgb, Option<u8>)> {
        self.writes.last().copied()
    }
}

impl OutputDriver for MockOutput {
    fn write(&mut self, color: Rgb, white: Option<u8>) {
        self.writes.push((color, white));
    }

    fn toggle_heartbeat(&mut self) {
        self.heartbeat = !self.heartbeat;
        self.heartbeat_toggles += 1;
    }
}

/// EEPROM with every cell cleared to the unset mode marker
pub fn zeroed_eeprom() -> RamEeprom<EEPROM_SIZE> {
    use myrtio_tiny_rgb::Eeprom;

    let mut eeprom = RamEeprom::new();
    for offset in 0..EEPROM_SIZE as u16 {
        eeprom.write_byte(offset, 0);
    }
    eeprom
}

pub fn controller_with(config: ControllerConfig, eeprom: RamEeprom<EEPROM_SIZE>) -> TestController {
    let mut controller = LightController::new(config, MockOutput::default(), eeprom, fixed_entropy);
    controller.boot();
    controller
}

/// Freshly booted controller with default configuration and blank storage
pub fn booted_controller() -> TestController {
    controller_with(ControllerConfig::default(), RamEeprom::new())
}

/// Reply text buffer
pub type Out = heapless::String<512>;
