//! Peripherie-Bündel der beiden Übungen
//!
//! Ein Board besitzt alle Eingänge und Ausgaben einer Übung und kennt
//! nur die Traits aus `traits`. So läuft derselbe Poll-Zyklus auf der
//! Hardware und mit Mocks im Host-Test.

use crate::input::{GateSample, TurnstileSample, sample_gate_inputs, sample_turnstile_inputs};
use crate::present::{GateView, TurnstileView};
use crate::traits::{
    AnalogInput, BinaryIndicator, DigitalInput, PeripheralError, PixelSink, TextDisplay,
};
use crate::types::{Indicator, Polarity};

/// Grün/Rot LED-Paar, immer genau eine an
pub struct StatusLeds<G, R> {
    green: G,
    red: R,
}

impl<G: BinaryIndicator, R: BinaryIndicator> StatusLeds<G, R> {
    pub fn new(green: G, red: R) -> Self {
        Self { green, red }
    }

    /// Setzt beide LEDs, auch wenn die erste fehlschlägt
    pub fn show(&mut self, indicator: Indicator) -> Result<(), PeripheralError> {
        let on = indicator.is_affirmative();
        let green = self.green.set(on);
        let red = self.red.set(!on);
        green.and(red)
    }

    /// Zugriff auf die LEDs (z.B. für Assertions in Tests)
    pub fn parts(&self) -> (&G, &R) {
        (&self.green, &self.red)
    }
}

/// Hardware des Gatter-Demonstrators
pub struct GateBoard<J, A, B, D, G, R> {
    pub joystick: J,
    pub button_a: A,
    pub button_b: B,
    pub display: D,
    pub leds: StatusLeds<G, R>,
    pub polarity: Polarity,
}

impl<J, A, B, D, G, R> GateBoard<J, A, B, D, G, R>
where
    J: AnalogInput,
    A: DigitalInput,
    B: DigitalInput,
    D: TextDisplay,
    G: BinaryIndicator,
    R: BinaryIndicator,
{
    pub fn sample(&mut self) -> GateSample {
        sample_gate_inputs(
            &mut self.joystick,
            &mut self.button_a,
            &mut self.button_b,
            self.polarity,
        )
    }

    /// Schreibt Label und Ergebnis-LED
    ///
    /// Beide Ausgaben werden immer versucht, der erste Fehler wird zurückgegeben.
    pub fn render(&mut self, view: &GateView) -> Result<(), PeripheralError> {
        let display = self.display.show(&view.lines());
        let leds = self.leds.show(view.output);
        display.and(leds)
    }
}

/// Hardware des Drehkreuzes
pub struct TurnstileBoard<J, T, D, G, R, P> {
    pub joystick: J,
    pub toggle: T,
    pub display: D,
    pub leds: StatusLeds<G, R>,
    pub matrix: P,
    pub polarity: Polarity,
    /// Helligkeit der Matrix-Pixel (0-255)
    pub brightness: u8,
}

impl<J, T, D, G, R, P> TurnstileBoard<J, T, D, G, R, P>
where
    J: AnalogInput,
    T: DigitalInput,
    D: TextDisplay,
    G: BinaryIndicator,
    R: BinaryIndicator,
    P: PixelSink,
{
    pub fn sample(&mut self) -> TurnstileSample {
        sample_turnstile_inputs(&mut self.joystick, &mut self.toggle, self.polarity)
    }

    /// Schreibt Label, Kanal-Pixel und Zugangs-LED
    pub fn render(&mut self, view: &TurnstileView) -> Result<(), PeripheralError> {
        let display = self.display.show(&view.lines());
        let matrix = self.render_matrix(view);
        let leds = self.leds.show(view.granted);
        display.and(matrix).and(leds)
    }

    fn render_matrix(&mut self, view: &TurnstileView) -> Result<(), PeripheralError> {
        self.matrix.clear();
        for (index, color) in view.pixels(self.brightness) {
            self.matrix.set_pixel(index, color)?;
        }
        self.matrix.flush()
    }
}
