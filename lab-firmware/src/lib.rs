// Library-Root: Wiederverwendbare Hardware-Adapter und Poll-Schleifen
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von lab-core
pub use lab_core::{
    AnalogInput, BinaryIndicator, DigitalInput, GateBoard, GateLab, PixelSink, StatusLeds,
    TextDisplay, TurnstileBoard, TurnstileLab,
};

// ============================================================================
// Testing-Strategie
// ============================================================================
//
// Dieses Crate kompiliert nur für riscv32imac-unknown-none-elf (esp-hal).
// Deshalb liegt die gesamte Entscheidungslogik in lab-core:
//
// - Gatter, Kanal-Flags und Joystick-Zyklus sind Pure Functions
// - GateBoard / TurnstileBoard kennen nur Traits
// - Die Tasks hier verbinden nur Hardware-Adapter mit dieser Logik
//
// Host-Tests: `cargo test` im Workspace-Root (lab-core + lab-tests).
