// SSD1306 OLED-Display (128x64, I2C) als TextDisplay

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use lab_core::{PeripheralError, TextDisplay};
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;

/// Linker Rand in Pixeln
const TEXT_X: i32 = 5;

/// Zeilenhöhe in Pixeln (FONT_6X10)
const ROW_HEIGHT: i32 = 10;

/// Konkreter Display-Treiber, generisch über das I2C der HAL
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

pub struct OledDisplay<I2C> {
    display: Display<I2C>,
}

impl<I2C> OledDisplay<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Initialisiert das Display und löscht den Bildschirm
    pub fn new(i2c: I2C) -> Result<Self, PeripheralError> {
        let interface = I2CDisplayInterface::new(i2c);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display.init().map_err(|_| PeripheralError::WriteFailed)?;
        display.clear_buffer();
        display.flush().map_err(|_| PeripheralError::WriteFailed)?;
        Ok(Self { display })
    }
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

impl<I2C> TextDisplay for OledDisplay<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn show(&mut self, lines: &[&str]) -> Result<(), PeripheralError> {
        self.display.clear_buffer();

        let style = text_style();
        for (row, line) in lines.iter().enumerate().filter(|(_, l)| !l.is_empty()) {
            let origin = Point::new(TEXT_X, row as i32 * ROW_HEIGHT);
            Text::with_baseline(line, origin, style, Baseline::Top)
                .draw(&mut self.display)
                .map_err(|_| PeripheralError::WriteFailed)?;
        }

        self.display
            .flush()
            .map_err(|_| PeripheralError::WriteFailed)
    }
}
