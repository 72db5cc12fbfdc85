// Drehkreuz / Zugangskontrolle
// Joystick wählt einen von vier Kanälen, der Joystick-Taster schaltet ihn um.
// Die LED-Matrix zeigt die Kanal-Flags, grün/rot den Zugang.
#![no_std]
#![no_main]
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

use {esp_backtrace as _, esp_println as _};

use digilab::tasks::{TurnstilePeripherals, turnstile_loop_task};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!("Turnstile demonstrator starting");

    spawner
        .spawn(turnstile_loop_task(TurnstilePeripherals {
            adc1: peripherals.ADC1,
            joystick_y: peripherals.GPIO1,
            joystick_sw: peripherals.GPIO20,
            led_green: peripherals.GPIO10,
            led_red: peripherals.GPIO11,
            i2c0: peripherals.I2C0,
            sda: peripherals.GPIO6,
            scl: peripherals.GPIO7,
            matrix: peripherals.GPIO8,
            rmt: peripherals.RMT,
        }))
        .expect("Failed to spawn turnstile loop task");

    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
