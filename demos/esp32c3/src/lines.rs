//! Pin adapters for the ESP32-C3 devkit.

use button_pipeline::{InputLine, OutputLine};
use esp_hal::gpio::{Input, Output};

/// Button wired between GPIO and GND with a pull-up, so pressed reads LOW.
pub struct ActiveLowButton {
    input: Input<'static>,
}

impl ActiveLowButton {
    pub fn new(input: Input<'static>) -> Self {
        Self { input }
    }
}

impl InputLine for ActiveLowButton {
    fn is_asserted(&self) -> bool {
        self.input.is_low()
    }
}

/// Indicator LED wired between VCC and GPIO, so ON drives LOW.
pub struct ActiveLowLed {
    output: Output<'static>,
}

impl ActiveLowLed {
    pub fn new(output: Output<'static>) -> Self {
        Self { output }
    }
}

impl OutputLine for ActiveLowLed {
    fn set_active(&mut self, active: bool) {
        if active {
            self.output.set_low();
        } else {
            self.output.set_high();
        }
    }
}
