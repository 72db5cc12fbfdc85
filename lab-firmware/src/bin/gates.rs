// Logikgatter-Demonstrator
// Joystick wählt das Gatter, Taster A/B liefern die Operanden,
// grüne/rote LED zeigt das Ergebnis, das OLED den Gatter-Namen.
#![no_std]
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

use digilab::tasks::{GatePeripherals, gate_loop_task};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert die Runtime und spawnt die Poll-Schleife.
/// Danach schläft main() - die Arbeit läuft im Gatter-Task.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!("Logic gates demonstrator starting");

    spawner
        .spawn(gate_loop_task(GatePeripherals {
            adc1: peripherals.ADC1,
            joystick_y: peripherals.GPIO1,
            button_a: peripherals.GPIO18,
            button_b: peripherals.GPIO19,
            led_green: peripherals.GPIO10,
            led_red: peripherals.GPIO11,
            i2c0: peripherals.I2C0,
            sda: peripherals.GPIO6,
            scl: peripherals.GPIO7,
        }))
        .expect("Failed to spawn gate loop task");

    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
