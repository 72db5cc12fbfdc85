//! Zustand der beiden Übungen
//!
//! `GateLab` und `TurnstileLab` sind die Kontext-Objekte der Poll-Schleife.
//! `step` verarbeitet genau einen Zyklus: Joystick-Zyklus, Auswertung,
//! Aufbau der Ausgabe. Keine Hardware, keine globalen Variablen.

use crate::input::{GateSample, JoystickCycler, PressDetector, TurnstileSample};
use crate::logic::evaluate;
use crate::present::{GateView, TurnstileView};
use crate::types::{Channel, ChannelFlags, Gate, TriggerMode};

/// Gatter-Demonstrator: Joystick wählt das Gatter, A/B sind Operanden
pub struct GateLab {
    cycler: JoystickCycler<Gate>,
}

impl GateLab {
    pub fn new(joystick_mode: TriggerMode) -> Self {
        Self {
            cycler: JoystickCycler::new(Gate::default(), joystick_mode),
        }
    }

    pub fn gate(&self) -> Gate {
        self.cycler.state()
    }

    pub fn step(&mut self, sample: GateSample) -> GateView {
        let changed = self.cycler.update(sample.joystick);
        let gate = self.cycler.state();
        GateView::new(gate, evaluate(gate, sample.a, sample.b), changed)
    }
}

/// Drehkreuz: Joystick wählt den Kanal, Joystick-Taster schaltet ihn um
pub struct TurnstileLab {
    cycler: JoystickCycler<Channel>,
    flags: ChannelFlags,
    toggle: PressDetector,
}

impl TurnstileLab {
    pub fn new(joystick_mode: TriggerMode, toggle_mode: TriggerMode) -> Self {
        Self {
            cycler: JoystickCycler::new(Channel::default(), joystick_mode),
            flags: ChannelFlags::default(),
            toggle: PressDetector::new(toggle_mode),
        }
    }

    pub fn channel(&self) -> Channel {
        self.cycler.state()
    }

    pub fn flags(&self) -> ChannelFlags {
        self.flags
    }

    /// Ein Zyklus: erst Kanalwahl, dann Umschalten des (neuen) Kanals
    pub fn step(&mut self, sample: TurnstileSample) -> TurnstileView {
        let changed = self.cycler.update(sample.joystick);
        let channel = self.cycler.state();

        let toggled = self.toggle.fire(sample.toggle);
        if toggled {
            self.flags.toggle(channel);
        }

        TurnstileView::new(channel, self.flags, changed, toggled)
    }
}
