//! Pure Business Logic Functions
//!
//! Joystick-Zyklus und Gatter-/Kanal-Auswertung ohne Hardware-Dependencies.

use crate::types::{ChannelFlags, Cyclic, Gate};

/// Roh-Wert oberhalb dessen der Joystick "vorwärts" bedeutet
pub const JOYSTICK_HIGH_THRESHOLD: u16 = 3000;

/// Roh-Wert unterhalb dessen der Joystick "rückwärts" bedeutet
pub const JOYSTICK_LOW_THRESHOLD: u16 = 1400;

/// Richtung, die ein einzelner ADC-Wert auslöst
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Forward,
    Backward,
    /// Totzone zwischen den Schwellen
    Hold,
}

/// Klassifiziert einen ADC-Roh-Wert (absolut, nicht als Geschwindigkeit)
pub fn direction(sample: u16) -> Direction {
    if sample > JOYSTICK_HIGH_THRESHOLD {
        Direction::Forward
    } else if sample < JOYSTICK_LOW_THRESHOLD {
        Direction::Backward
    } else {
        Direction::Hold
    }
}

/// Schaltet einen Index zyklisch in `0..count` weiter
///
/// # Beispiele
///
/// ```
/// # use lab_core::{step_index, Direction};
/// assert_eq!(step_index(6, Direction::Forward, 7), 0);
/// assert_eq!(step_index(0, Direction::Backward, 4), 3);
/// assert_eq!(step_index(2, Direction::Hold, 4), 2);
/// ```
pub fn step_index(state: usize, direction: Direction, count: usize) -> usize {
    match direction {
        Direction::Forward => (state + 1) % count,
        Direction::Backward => (state + count - 1) % count,
        Direction::Hold => state,
    }
}

/// Nächster Zustand für einen ADC-Roh-Wert
pub fn advance<S: Cyclic>(state: S, sample: u16) -> S {
    S::from_index(step_index(state.index(), direction(sample), S::COUNT))
}

/// Wertet ein Gatter für die Operanden A und B aus
///
/// NOT ignoriert `b`.
pub fn evaluate(gate: Gate, a: bool, b: bool) -> bool {
    match gate {
        Gate::And => a && b,
        Gate::Or => a || b,
        Gate::Not => !a,
        Gate::Nand => !(a && b),
        Gate::Nor => !(a || b),
        Gate::Xor => a ^ b,
        Gate::Xnor => !(a ^ b),
    }
}

/// Zugang gewährt: `(c0 ∧ c1 ∧ c2) ∨ ¬c3`
///
/// Unabhängig vom gerade gewählten Kanal.
pub fn access_granted(flags: &ChannelFlags) -> bool {
    let [c0, c1, c2, c3] = flags.as_array();
    (c0 && c1 && c2) || !c3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Channel;

    const FORWARD: u16 = 3001;
    const BACKWARD: u16 = 1399;

    #[test]
    fn test_direction_thresholds() {
        assert_eq!(direction(4095), Direction::Forward);
        assert_eq!(direction(FORWARD), Direction::Forward);
        assert_eq!(direction(3000), Direction::Hold);
        assert_eq!(direction(2048), Direction::Hold);
        assert_eq!(direction(1400), Direction::Hold);
        assert_eq!(direction(BACKWARD), Direction::Backward);
        assert_eq!(direction(0), Direction::Backward);
    }

    #[test]
    fn test_step_index_forward_wraps() {
        for s in 0..7 {
            assert_eq!(step_index(s, Direction::Forward, 7), (s + 1) % 7);
        }
    }

    #[test]
    fn test_step_index_backward_full_cycle() {
        for start in 0..4 {
            let mut s = start;
            for _ in 0..4 {
                s = step_index(s, Direction::Backward, 4);
            }
            assert_eq!(s, start);
        }
    }

    #[test]
    fn test_advance_dead_zone() {
        for gate in Gate::ALL {
            for sample in [1400, 2000, 3000] {
                assert_eq!(advance(gate, sample), gate);
            }
        }
    }

    #[test]
    fn test_advance_channels() {
        assert_eq!(advance(Channel::Pt, FORWARD), Channel::Gr);
        assert_eq!(advance(Channel::Gr, BACKWARD), Channel::Pt);
        assert_eq!(advance(Gate::And, BACKWARD), Gate::Xnor);
    }

    #[test]
    fn test_evaluate_spot_checks() {
        assert!(!evaluate(Gate::Nand, true, true));
        assert!(evaluate(Gate::Xor, true, false));
        assert!(evaluate(Gate::Not, false, false));
        assert!(evaluate(Gate::Not, false, true));
        assert!(evaluate(Gate::Xnor, false, false));
        assert!(!evaluate(Gate::Nor, false, true));
    }

    #[test]
    fn test_access_granted() {
        let granted = |f: [bool; 4]| access_granted(&ChannelFlags::new(f));
        assert!(granted([true, true, true, false]));
        assert!(granted([true, true, false, false]));
        assert!(!granted([false, false, false, true]));
        assert!(!granted([true, true, false, true]));
        assert!(granted([true, true, true, true]));
    }
}
