//! Output Presenter
//!
//! Bildet den ausgewerteten Zustand auf Display-Zeilen, Status-LEDs und
//! Matrix-Pixel ab. Reine Werte, jeder Zyklus baut sie neu.

use rgb::RGB8;

use crate::logic::access_granted;
use crate::types::{Channel, ChannelFlags, Cyclic, Gate, Indicator};

/// Anzahl der Textzeilen auf dem Display
pub const DISPLAY_ROWS: usize = 5;

/// Zeile des Gatter-Namens (Display-Mitte)
pub const GATE_LABEL_ROW: usize = 3;

/// Zeile des Kanal-Namens (oben)
pub const TURNSTILE_LABEL_ROW: usize = 0;

/// Pixel in der 5x5 LED-Matrix
pub const MATRIX_LED_COUNT: usize = 25;

const BLANK: &str = "";

fn lines_with(label: &'static str, row: usize) -> [&'static str; DISPLAY_ROWS] {
    let mut lines = [BLANK; DISPLAY_ROWS];
    lines[row] = label;
    lines
}

/// Matrix-Pixel eines Kanals: Kanal 0 → Pixel 4, …, Kanal 3 → Pixel 1
pub fn channel_pixel(channel: Channel) -> usize {
    4 - channel.index()
}

/// Ausgabe des Gatter-Demonstrators für einen Zyklus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateView {
    pub gate: Gate,
    pub output: Indicator,
    /// Gatter hat in diesem Zyklus gewechselt
    pub gate_changed: bool,
}

impl GateView {
    pub fn new(gate: Gate, output: bool, gate_changed: bool) -> Self {
        Self {
            gate,
            output: output.into(),
            gate_changed,
        }
    }

    pub fn label(&self) -> &'static str {
        self.gate.label()
    }

    pub fn lines(&self) -> [&'static str; DISPLAY_ROWS] {
        lines_with(self.label(), GATE_LABEL_ROW)
    }
}

/// Ausgabe des Drehkreuzes für einen Zyklus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnstileView {
    pub channel: Channel,
    pub flags: ChannelFlags,
    pub granted: Indicator,
    pub channel_changed: bool,
    /// Flag von `channel` wurde in diesem Zyklus umgeschaltet
    pub toggled: bool,
}

impl TurnstileView {
    pub fn new(channel: Channel, flags: ChannelFlags, channel_changed: bool, toggled: bool) -> Self {
        Self {
            channel,
            flags,
            granted: access_granted(&flags).into(),
            channel_changed,
            toggled,
        }
    }

    pub fn label(&self) -> &'static str {
        self.channel.label()
    }

    pub fn lines(&self) -> [&'static str; DISPLAY_ROWS] {
        lines_with(self.label(), TURNSTILE_LABEL_ROW)
    }

    /// Anzeige pro Kanal, in Kanal-Reihenfolge
    pub fn channel_indicators(&self) -> [Indicator; 4] {
        self.flags.as_array().map(Indicator::from)
    }

    /// (Pixel-Index, Farbe) für jeden Kanal
    pub fn pixels(&self, brightness: u8) -> [(usize, RGB8); 4] {
        let indicators = self.channel_indicators();
        Channel::ALL.map(|ch| (channel_pixel(ch), indicators[ch.index()].color(brightness)))
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for GateView {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "GateView {{ gate: {}, output: {} }}", self.gate, self.output)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TurnstileView {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "TurnstileView {{ channel: {}, flags: {}, granted: {} }}",
            self.channel,
            self.flags,
            self.granted
        )
    }
}
