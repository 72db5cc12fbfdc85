// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus lab-core für die ESP32-C6 Peripherie.
// Die Poll-Schleifen sehen nur die Traits.

pub mod oled;
pub mod pins;
pub mod pixel_matrix;

pub use oled::OledDisplay;
pub use pins::{Button, JoystickAxis, StatusLed};
pub use pixel_matrix::{MATRIX_BUFFER_SIZE, RmtPixelMatrix};
