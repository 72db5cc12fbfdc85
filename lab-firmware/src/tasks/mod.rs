// Task-Modul: Poll-Schleifen der beiden Übungen
//
// Jedes Binary spawnt genau einen dieser Tasks. Es gibt keine
// Kommunikation zwischen Tasks, der gesamte Zustand gehört der Schleife.

pub mod gate_loop;
pub mod turnstile_loop;

// Re-export Tasks für einfachen Import
pub use gate_loop::{GatePeripherals, gate_loop_task};
pub use turnstile_loop::{TurnstilePeripherals, turnstile_loop_task};
