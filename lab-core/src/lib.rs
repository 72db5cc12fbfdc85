//! Lab Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, Pure Functions und die Kontext-Objekte der
//! beiden Übungen (Logikgatter und Drehkreuz).

#![no_std]

pub mod board;
pub mod input;
pub mod lab;
pub mod logic;
pub mod present;
pub mod settings;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use board::{GateBoard, StatusLeds, TurnstileBoard};
pub use input::{GateSample, JoystickCycler, PressDetector, TurnstileSample};
pub use lab::{GateLab, TurnstileLab};
pub use logic::{
    Direction, JOYSTICK_HIGH_THRESHOLD, JOYSTICK_LOW_THRESHOLD, access_granted, advance,
    direction, evaluate, step_index,
};
pub use present::{DISPLAY_ROWS, GateView, MATRIX_LED_COUNT, TurnstileView, channel_pixel};
pub use settings::parse_millis;
pub use traits::{
    AnalogInput, BinaryIndicator, DigitalInput, PeripheralError, PixelSink, TextDisplay,
};
pub use types::{Channel, ChannelFlags, Cyclic, Gate, Indicator, Polarity, TriggerMode};
