// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use lab_core::{Polarity, TriggerMode, parse_millis};

// ============================================================================
// Pin-Belegung (ESP32-C6 DevKit)
// ============================================================================
//
// Die Pins selbst werden in src/bin/ als typisierte Peripherals übergeben
// und müssen zu diesen Nummern passen. Die Tasks loggen sie beim Start.

/// Joystick Y-Achse (ADC1 Kanal 1)
pub const JOYSTICK_Y_GPIO_PIN: u8 = 1;

/// Joystick-Taster (Umschalten im Drehkreuz)
pub const JOYSTICK_SW_GPIO_PIN: u8 = 20;

/// Taster A (Operand A)
pub const BUTTON_A_GPIO_PIN: u8 = 18;

/// Taster B (Operand B)
pub const BUTTON_B_GPIO_PIN: u8 = 19;

/// Grüne Status-LED
pub const LED_GREEN_GPIO_PIN: u8 = 10;

/// Rote Status-LED
pub const LED_RED_GPIO_PIN: u8 = 11;

/// I2C SDA für das OLED-Display
pub const I2C_SDA_GPIO_PIN: u8 = 6;

/// I2C SCL für das OLED-Display
pub const I2C_SCL_GPIO_PIN: u8 = 7;

/// Datenleitung der WS2812 LED-Matrix
pub const MATRIX_GPIO_PIN: u8 = 8;

// ============================================================================
// Peripherie-Konfiguration
// ============================================================================

/// I2C Taktfrequenz in kHz (SSD1306 verträgt bis 400 kHz Fast-Mode)
pub const I2C_FREQUENCY_KHZ: u32 = 400;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Anzahl der LEDs in der Matrix (5x5)
pub const MATRIX_LED_COUNT: usize = lab_core::MATRIX_LED_COUNT;

/// Helligkeit der Matrix-Pixel (0-255)
pub const MATRIX_BRIGHTNESS: u8 = 255;

/// Taster hängen an internen Pull-ups: gedrückt = LOW
pub const BUTTON_POLARITY: Polarity = Polarity::ActiveLow;

// ============================================================================
// Poll-Schleife (überschreibbar via .env, siehe build.rs)
// ============================================================================

/// Poll-Intervall in Millisekunden
/// Wird zur Build-Zeit aus POLL_INTERVAL_MS geladen, Default 200
/// Ungültige Werte (leer, keine Zahl, 0) → Default
pub const POLL_INTERVAL_MS: u64 = match option_env!("POLL_INTERVAL_MS") {
    Some(value) => match parse_millis(value) {
        Some(ms) => ms,
        None => DEFAULT_POLL_INTERVAL_MS,
    },
    None => DEFAULT_POLL_INTERVAL_MS,
};

const DEFAULT_POLL_INTERVAL_MS: u64 = 200;

/// Joystick-Verhalten beim Halten
/// `level` = schaltet jeden Zyklus weiter (Default), `edge` = einmal pro Auslenkung
pub const JOYSTICK_TRIGGER: TriggerMode = match option_env!("JOYSTICK_TRIGGER") {
    Some(value) => trigger_or(value, TriggerMode::Level),
    None => TriggerMode::Level,
};

/// Verhalten des Joystick-Tasters beim Halten
/// `edge` = einmal pro Druck (Default), `level` = jeden Zyklus
pub const TOGGLE_TRIGGER: TriggerMode = match option_env!("TOGGLE_TRIGGER") {
    Some(value) => trigger_or(value, TriggerMode::Edge),
    None => TriggerMode::Edge,
};

const fn trigger_or(value: &str, default: TriggerMode) -> TriggerMode {
    match TriggerMode::from_name(value) {
        Some(mode) => mode,
        None => default,
    }
}
