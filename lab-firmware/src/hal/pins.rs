// GPIO- und ADC-Adapter für die Core-Traits

use defmt::warn;
use esp_hal::Blocking;
use esp_hal::analog::adc::{Adc, AdcConfig, AdcPin, Attenuation};
use esp_hal::gpio::{Input, InputConfig, InputPin, Level, Output, OutputConfig, OutputPin, Pull};
use esp_hal::peripherals::{ADC1, GPIO1};
use lab_core::{AnalogInput, BinaryIndicator, DigitalInput, PeripheralError};

/// Taster mit internem Pull-up
pub struct Button<'d> {
    input: Input<'d>,
}

impl<'d> Button<'d> {
    pub fn new(pin: impl InputPin + 'd) -> Self {
        Self {
            input: Input::new(pin, InputConfig::default().with_pull(Pull::Up)),
        }
    }
}

impl DigitalInput for Button<'_> {
    fn is_high(&mut self) -> bool {
        self.input.is_high()
    }
}

/// Einfache Status-LED, startet aus
pub struct StatusLed<'d> {
    output: Output<'d>,
}

impl<'d> StatusLed<'d> {
    pub fn new(pin: impl OutputPin + 'd) -> Self {
        Self {
            output: Output::new(pin, Level::Low, OutputConfig::default()),
        }
    }
}

impl BinaryIndicator for StatusLed<'_> {
    fn set(&mut self, on: bool) -> Result<(), PeripheralError> {
        self.output.set_level(Level::from(on));
        Ok(())
    }
}

/// Joystick Y-Achse an ADC1 / GPIO1 (12 Bit, 0-4095)
///
/// Schlägt eine Wandlung fehl, wird der letzte gültige Wert geliefert.
pub struct JoystickAxis<'d> {
    adc: Adc<'d, ADC1<'d>, Blocking>,
    pin: AdcPin<GPIO1<'d>, ADC1<'d>>,
    last: u16,
}

impl<'d> JoystickAxis<'d> {
    pub fn new(adc1: ADC1<'d>, gpio1: GPIO1<'d>) -> Self {
        let mut config = AdcConfig::new();
        // 11 dB Dämpfung: voller Spannungsbereich des Joystick-Potis
        let pin = config.enable_pin(gpio1, Attenuation::_11dB);
        Self {
            adc: Adc::new(adc1, config),
            pin,
            last: 0,
        }
    }
}

impl AnalogInput for JoystickAxis<'_> {
    fn read(&mut self) -> u16 {
        match nb::block!(self.adc.read_oneshot(&mut self.pin)) {
            Ok(sample) => self.last = sample,
            Err(_) => warn!("Joystick: ADC read failed, keeping last sample {=u16}", self.last),
        }
        self.last
    }
}
