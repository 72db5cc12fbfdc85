//! Input Sampler und Trigger-Logik
//!
//! Liest pro Poll-Zyklus Joystick und Taster und entscheidet, ob ein
//! gehaltener Eingang eine Aktion auslöst (Level) oder nur einmal pro
//! Betätigung (Edge).

use crate::logic::{Direction, direction};
use crate::traits::{AnalogInput, DigitalInput};
use crate::types::{Cyclic, Polarity, TriggerMode};

/// Ein Poll-Zyklus des Gatter-Demonstrators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GateSample {
    pub joystick: u16,
    pub a: bool,
    pub b: bool,
}

/// Ein Poll-Zyklus des Drehkreuzes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TurnstileSample {
    pub joystick: u16,
    pub toggle: bool,
}

/// Liest Joystick und beide Operanden-Taster
pub fn sample_gate_inputs<J, A, B>(
    joystick: &mut J,
    button_a: &mut A,
    button_b: &mut B,
    polarity: Polarity,
) -> GateSample
where
    J: AnalogInput,
    A: DigitalInput,
    B: DigitalInput,
{
    GateSample {
        joystick: joystick.read(),
        a: polarity.is_pressed(button_a.is_high()),
        b: polarity.is_pressed(button_b.is_high()),
    }
}

/// Liest Joystick und Joystick-Taster
pub fn sample_turnstile_inputs<J, T>(
    joystick: &mut J,
    toggle: &mut T,
    polarity: Polarity,
) -> TurnstileSample
where
    J: AnalogInput,
    T: DigitalInput,
{
    TurnstileSample {
        joystick: joystick.read(),
        toggle: polarity.is_pressed(toggle.is_high()),
    }
}

/// Entscheidet pro Zyklus, ob ein gedrückter Taster auslöst
#[derive(Debug, Clone, Copy)]
pub struct PressDetector {
    mode: TriggerMode,
    was_pressed: bool,
}

impl PressDetector {
    pub const fn new(mode: TriggerMode) -> Self {
        Self {
            mode,
            was_pressed: false,
        }
    }

    /// `true` wenn der Tastendruck in diesem Zyklus auslöst
    pub fn fire(&mut self, pressed: bool) -> bool {
        let fired = match self.mode {
            TriggerMode::Level => pressed,
            TriggerMode::Edge => pressed && !self.was_pressed,
        };
        self.was_pressed = pressed;
        fired
    }
}

/// Joystick-gesteuerter zyklischer Zustand
///
/// Im Level-Modus schaltet ein gehaltener Joystick jeden Zyklus weiter,
/// im Edge-Modus nur einmal bis er zurück in die Totzone geht.
#[derive(Debug, Clone, Copy)]
pub struct JoystickCycler<S: Cyclic> {
    state: S,
    mode: TriggerMode,
    last: Direction,
}

impl<S: Cyclic> JoystickCycler<S> {
    pub fn new(initial: S, mode: TriggerMode) -> Self {
        Self {
            state: initial,
            mode,
            last: Direction::Hold,
        }
    }

    pub fn state(&self) -> S {
        self.state
    }

    /// Verarbeitet einen ADC-Wert, gibt `true` zurück wenn der Zustand wechselte
    pub fn update(&mut self, sample: u16) -> bool {
        let dir = direction(sample);
        let step = match self.mode {
            TriggerMode::Level => dir,
            TriggerMode::Edge if dir == self.last => Direction::Hold,
            TriggerMode::Edge => dir,
        };
        self.last = dir;

        if step == Direction::Hold {
            return false;
        }
        self.state = crate::logic::advance(self.state, sample);
        true
    }
}
