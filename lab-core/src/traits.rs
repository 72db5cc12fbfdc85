//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.
//!
//! # Implementierungen
//! - **Production:** `lab-firmware` (esp-hal ADC, GPIO, SSD1306, RMT)
//! - **Testing:** Mocks in `lab-tests`

use rgb::RGB8;

/// Fehler-Typ für Ausgabe-Peripherie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PeripheralError {
    WriteFailed,
    IndexOutOfRange,
}

/// Analoger Eingang (ein fest gewählter ADC-Kanal)
///
/// Lesen schlägt nie fehl: bei Hardware-Problemen liefert die
/// Implementierung einen alten Wert oder 0.
pub trait AnalogInput {
    fn read(&mut self) -> u16;
}

/// Digitaler Eingang, liefert den elektrischen Pegel
///
/// Die Übersetzung in "gedrückt" passiert in der Core-Logik (`Polarity`).
pub trait DigitalInput {
    fn is_high(&mut self) -> bool;
}

/// Text-Display mit wenigen Zeilen
pub trait TextDisplay {
    /// Löscht das Display und zeichnet alle Zeilen neu
    fn show(&mut self, lines: &[&str]) -> Result<(), PeripheralError>;
}

/// Einfache LED mit zwei Zuständen
pub trait BinaryIndicator {
    fn set(&mut self, on: bool) -> Result<(), PeripheralError>;
}

/// Adressierbare LED-Kette (WS2812/Neopixel)
///
/// `set_pixel` und `clear` ändern nur den Puffer, erst `flush` schreibt
/// auf die Hardware.
pub trait PixelSink {
    /// Setzt die Farbe eines Pixels
    ///
    /// # Fehlerbehandlung
    /// Gibt `PeripheralError::IndexOutOfRange` zurück wenn `index` außerhalb der Kette liegt
    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), PeripheralError>;

    /// Schaltet alle Pixel im Puffer aus
    fn clear(&mut self);

    /// Schreibt den Puffer auf die LEDs
    fn flush(&mut self) -> Result<(), PeripheralError>;
}
