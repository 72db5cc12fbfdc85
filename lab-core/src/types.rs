//! Core Types für die Labor-Übungen
//!
//! Datenstrukturen ohne Hardware-Dependencies: Gatter, Drehkreuz-Kanäle,
//! Kanal-Flags, Anzeige-Zustände und Trigger-Modi.

use rgb::RGB8;

use crate::settings::eq_ignore_case;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Zyklische Zustandsmenge mit fester Größe `COUNT`
///
/// Wird von `Gate` (7 Zustände) und `Channel` (4 Zustände) implementiert.
/// Der Joystick-Zyklus arbeitet nur über dieses Trait.
pub trait Cyclic: Copy {
    /// Anzahl der Zustände
    const COUNT: usize;

    /// Index im Bereich `0..COUNT`
    fn index(self) -> usize;

    /// Zustand aus Index, Werte `>= COUNT` werden modulo `COUNT` abgebildet
    fn from_index(index: usize) -> Self;

    /// Anzeige-Label (reine Funktion des Zustands)
    fn label(self) -> &'static str;
}

/// Logikgatter des Gatter-Demonstrators
///
/// Reihenfolge = Reihenfolge beim Durchschalten mit dem Joystick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Gate {
    #[default]
    And,
    Or,
    Not,
    Nand,
    Nor,
    Xor,
    Xnor,
}

impl Gate {
    pub const ALL: [Gate; 7] = [
        Gate::And,
        Gate::Or,
        Gate::Not,
        Gate::Nand,
        Gate::Nor,
        Gate::Xor,
        Gate::Xnor,
    ];
}

impl Cyclic for Gate {
    const COUNT: usize = 7;

    fn index(self) -> usize {
        self as usize
    }

    fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    fn label(self) -> &'static str {
        match self {
            Gate::And => "AND",
            Gate::Or => "OR",
            Gate::Not => "NOT",
            Gate::Nand => "NAND",
            Gate::Nor => "NOR",
            Gate::Xor => "XOR",
            Gate::Xnor => "XNOR",
        }
    }
}

/// Eingangskanal des Drehkreuzes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Channel {
    #[default]
    Gr,
    Ho,
    Di,
    Pt,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Gr, Channel::Ho, Channel::Di, Channel::Pt];
}

impl Cyclic for Channel {
    const COUNT: usize = 4;

    fn index(self) -> usize {
        self as usize
    }

    fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    fn label(self) -> &'static str {
        match self {
            Channel::Gr => "0 - GR",
            Channel::Ho => "1 - HO",
            Channel::Di => "2 - DI",
            Channel::Pt => "3 - PT",
        }
    }
}

/// Persistente Flags der vier Drehkreuz-Kanäle
///
/// Einziger dauerhafter Zustand im System. Startet mit allen Flags aus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelFlags([bool; 4]);

impl ChannelFlags {
    pub const fn new(flags: [bool; 4]) -> Self {
        Self(flags)
    }

    pub fn get(&self, channel: Channel) -> bool {
        self.0[channel.index()]
    }

    /// Invertiert genau das Flag von `channel`
    pub fn toggle(&mut self, channel: Channel) {
        let flag = &mut self.0[channel.index()];
        *flag = !*flag;
    }

    pub fn as_array(&self) -> [bool; 4] {
        self.0
    }
}

/// Zustand einer zweifarbigen Anzeige (grün = ja, rot = nein)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Affirmative,
    Negative,
}

impl Indicator {
    /// Farbe für die LED-Matrix bei gegebener Helligkeit
    ///
    /// ```
    /// # use rgb::RGB8;
    /// # use lab_core::Indicator;
    /// assert_eq!(Indicator::Affirmative.color(255), RGB8 { r: 0, g: 255, b: 0 });
    /// assert_eq!(Indicator::Negative.color(10), RGB8 { r: 10, g: 0, b: 0 });
    /// ```
    pub fn color(self, brightness: u8) -> RGB8 {
        match self {
            Indicator::Affirmative => RGB8 {
                r: 0,
                g: brightness,
                b: 0,
            },
            Indicator::Negative => RGB8 {
                r: brightness,
                g: 0,
                b: 0,
            },
        }
    }

    pub fn is_affirmative(self) -> bool {
        self == Indicator::Affirmative
    }
}

impl From<bool> for Indicator {
    fn from(value: bool) -> Self {
        if value {
            Indicator::Affirmative
        } else {
            Indicator::Negative
        }
    }
}

/// Wann ein gehaltener Eingang eine Aktion auslöst
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TriggerMode {
    /// Jeder Poll-Zyklus, solange der Eingang aktiv ist
    Level,
    /// Nur beim Übergang inaktiv → aktiv
    Edge,
}

impl TriggerMode {
    /// Modus aus `"level"` / `"edge"`, Groß-/Kleinschreibung egal
    ///
    /// `const`, damit die Firmware ihre Einstellungen zur Compile-Zeit auswertet.
    pub const fn from_name(name: &str) -> Option<Self> {
        if eq_ignore_case(name, "level") {
            Some(Self::Level)
        } else if eq_ignore_case(name, "edge") {
            Some(Self::Edge)
        } else {
            None
        }
    }
}

impl core::convert::TryFrom<&str> for TriggerMode {
    type Error = ();

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::from_name(name).ok_or(())
    }
}

/// Elektrischer Pegel eines gedrückten Tasters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// Pull-up: gedrückt = LOW
    #[default]
    ActiveLow,
    ActiveHigh,
}

impl Polarity {
    /// Übersetzt den gelesenen Pegel in "gedrückt"
    pub fn is_pressed(self, is_high: bool) -> bool {
        match self {
            Polarity::ActiveLow => !is_high,
            Polarity::ActiveHigh => is_high,
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Gate {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.label())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Channel {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.label())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ChannelFlags {
    fn format(&self, fmt: defmt::Formatter) {
        let [c0, c1, c2, c3] = self.0;
        defmt::write!(
            fmt,
            "[{=u8}{=u8}{=u8}{=u8}]",
            c0 as u8,
            c1 as u8,
            c2 as u8,
            c3 as u8
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Indicator {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Indicator::Affirmative => defmt::write!(fmt, "green"),
            Indicator::Negative => defmt::write!(fmt, "red"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TriggerMode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            TriggerMode::Level => defmt::write!(fmt, "level"),
            TriggerMode::Edge => defmt::write!(fmt, "edge"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_index_round_trip() {
        for (i, gate) in Gate::ALL.iter().enumerate() {
            assert_eq!(gate.index(), i);
            assert_eq!(Gate::from_index(i), *gate);
        }
    }

    #[test]
    fn test_from_index_wraps() {
        assert_eq!(Gate::from_index(7), Gate::And);
        assert_eq!(Channel::from_index(5), Channel::Ho);
    }

    #[test]
    fn test_channel_labels() {
        let labels = Channel::ALL.map(Channel::label);
        assert_eq!(labels, ["0 - GR", "1 - HO", "2 - DI", "3 - PT"]);
    }

    #[test]
    fn test_toggle_flips_only_selected_flag() {
        let mut flags = ChannelFlags::new([true, false, true, false]);
        flags.toggle(Channel::Di);
        assert_eq!(flags.as_array(), [true, false, false, false]);
        flags.toggle(Channel::Di);
        assert_eq!(flags.as_array(), [true, false, true, false]);
    }

    #[test]
    fn test_trigger_mode_from_name() {
        assert_eq!(TriggerMode::from_name("edge"), Some(TriggerMode::Edge));
        assert_eq!(TriggerMode::from_name("level"), Some(TriggerMode::Level));
        assert_eq!(TriggerMode::from_name("Edge"), Some(TriggerMode::Edge));
        assert_eq!(TriggerMode::from_name("LEVEL"), Some(TriggerMode::Level));
        assert_eq!(TriggerMode::from_name(""), None);
        assert_eq!(TriggerMode::from_name("edges"), None);
        assert_eq!(TriggerMode::from_name("pulse"), None);
    }

    #[test]
    fn test_trigger_mode_try_from_matches_from_name() {
        use core::convert::TryFrom;
        for name in ["edge", "Edge", "level", "Level", "", "toggle"] {
            assert_eq!(
                TriggerMode::try_from(name).ok(),
                TriggerMode::from_name(name),
                "{}",
                name
            );
        }
    }

    #[test]
    fn test_polarity() {
        assert!(Polarity::ActiveLow.is_pressed(false));
        assert!(!Polarity::ActiveLow.is_pressed(true));
        assert!(Polarity::ActiveHigh.is_pressed(true));
    }
}
