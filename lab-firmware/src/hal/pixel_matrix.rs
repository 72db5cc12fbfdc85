// WS2812 LED-Matrix über das RMT Peripheral
//
// Hält einen Pixel-Puffer im RAM, `flush()` schreibt alle Pixel
// in einem Rutsch über den SmartLED-Adapter.

use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use lab_core::{PeripheralError, PixelSink};
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

use crate::config::MATRIX_LED_COUNT;

/// RMT-Puffer-Größe: 24 Bit pro LED + 1 Reset-Code
pub const MATRIX_BUFFER_SIZE: usize = MATRIX_LED_COUNT * 24 + 1;

/// Real Hardware Pixel-Matrix
///
/// Hinweis: Der RMT-Puffer muss länger leben als der Adapter, daher wird er
/// im Task erstellt und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtPixelMatrix<'a> {
    led: SmartLedsAdapter<'a, MATRIX_BUFFER_SIZE>,
    pixels: [RGB8; MATRIX_LED_COUNT],
}

impl<'a> RmtPixelMatrix<'a> {
    /// Erstellt eine neue RmtPixelMatrix mit allen Pixeln aus
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für die Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Puffer für RMT-Daten (erstellt mit smart_led_buffer! Macro)
    ///
    /// # Panics
    /// Wenn das RMT Peripheral die Frequenz nicht annimmt (fataler Init-Fehler)
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [esp_hal::rmt::PulseCode; MATRIX_BUFFER_SIZE],
    ) -> Self {
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .expect("RMT initialisation failed");

        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Self {
            led,
            pixels: [RGB8::default(); MATRIX_LED_COUNT],
        }
    }
}

impl PixelSink for RmtPixelMatrix<'_> {
    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), PeripheralError> {
        let pixel = self
            .pixels
            .get_mut(index)
            .ok_or(PeripheralError::IndexOutOfRange)?;
        *pixel = color;
        Ok(())
    }

    fn clear(&mut self) {
        self.pixels = [RGB8::default(); MATRIX_LED_COUNT];
    }

    fn flush(&mut self) -> Result<(), PeripheralError> {
        self.led
            .write(self.pixels.iter().copied())
            .map_err(|_| PeripheralError::WriteFailed)
    }
}
