// Gatter-Task - Joystick wählt Gatter, Taster A/B sind Operanden
use defmt::{debug, error, info};
use embassy_time::{Duration, Timer};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::time::Rate;

use crate::config::{
    BUTTON_A_GPIO_PIN, BUTTON_B_GPIO_PIN, BUTTON_POLARITY, I2C_FREQUENCY_KHZ, I2C_SCL_GPIO_PIN,
    I2C_SDA_GPIO_PIN, JOYSTICK_TRIGGER, JOYSTICK_Y_GPIO_PIN, LED_GREEN_GPIO_PIN, LED_RED_GPIO_PIN,
    POLL_INTERVAL_MS,
};
use crate::hal::{Button, JoystickAxis, OledDisplay, StatusLed};
use crate::{
    AnalogInput, BinaryIndicator, DigitalInput, GateBoard, GateLab, StatusLeds, TextDisplay,
};

/// Peripherals für den Gatter-Demonstrator
pub struct GatePeripherals {
    pub adc1: esp_hal::peripherals::ADC1<'static>,
    pub joystick_y: esp_hal::peripherals::GPIO1<'static>,
    pub button_a: esp_hal::peripherals::GPIO18<'static>,
    pub button_b: esp_hal::peripherals::GPIO19<'static>,
    pub led_green: esp_hal::peripherals::GPIO10<'static>,
    pub led_red: esp_hal::peripherals::GPIO11<'static>,
    pub i2c0: esp_hal::peripherals::I2C0<'static>,
    pub sda: esp_hal::peripherals::GPIO6<'static>,
    pub scl: esp_hal::peripherals::GPIO7<'static>,
}

/// Gatter Poll-Logik - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Pro Zyklus: Eingänge lesen → Gatter wählen → auswerten → Display und
/// LEDs neu schreiben, dann fester Delay. Läuft endlos.
///
/// # Trait-basierte Abstraktion
/// Alle Peripherie steckt im `GateBoard` und wird nur über die Traits aus
/// lab-core angesprochen (Hardware oder Mock).
pub async fn gate_loop_logic<J, A, B, D, G, R>(
    mut board: GateBoard<J, A, B, D, G, R>,
    mut lab: GateLab,
) -> !
where
    J: AnalogInput,
    A: DigitalInput,
    B: DigitalInput,
    D: TextDisplay,
    G: BinaryIndicator,
    R: BinaryIndicator,
{
    info!("Gates: Loop started, gate {}", lab.gate());

    loop {
        let sample = board.sample();
        let view = lab.step(sample);

        debug!("Gates: {} -> {}", sample, view);
        if view.gate_changed {
            info!("Gates: Selected {}", view.gate);
        }

        // Fehler nur loggen, der nächste Zyklus schreibt ohnehin neu
        if let Err(e) = board.render(&view) {
            error!("Gates: Failed to render output: {}", e);
        }

        Timer::after(Duration::from_millis(POLL_INTERVAL_MS)).await;
    }
}

/// Gatter-Task - Embassy Task
///
/// Übernimmt die Hardware-Initialisierung und ruft dann
/// `gate_loop_logic()` auf.
#[embassy_executor::task]
pub async fn gate_loop_task(p: GatePeripherals) {
    let i2c = I2c::new(
        p.i2c0,
        I2cConfig::default().with_frequency(Rate::from_khz(I2C_FREQUENCY_KHZ)),
    )
    .expect("I2C initialisation failed")
    .with_sda(p.sda)
    .with_scl(p.scl);

    let display = OledDisplay::new(i2c).expect("SSD1306 initialisation failed");

    let board = GateBoard {
        joystick: JoystickAxis::new(p.adc1, p.joystick_y),
        button_a: Button::new(p.button_a),
        button_b: Button::new(p.button_b),
        display,
        leds: StatusLeds::new(StatusLed::new(p.led_green), StatusLed::new(p.led_red)),
        polarity: BUTTON_POLARITY,
    };

    info!(
        "Gates: pins joystick GPIO{}, A GPIO{}, B GPIO{}, LED green GPIO{} red GPIO{}, I2C SDA GPIO{} SCL GPIO{}",
        JOYSTICK_Y_GPIO_PIN,
        BUTTON_A_GPIO_PIN,
        BUTTON_B_GPIO_PIN,
        LED_GREEN_GPIO_PIN,
        LED_RED_GPIO_PIN,
        I2C_SDA_GPIO_PIN,
        I2C_SCL_GPIO_PIN
    );
    info!(
        "Gates: joystick trigger {}, poll every {}ms",
        JOYSTICK_TRIGGER, POLL_INTERVAL_MS
    );
    gate_loop_logic(board, GateLab::new(JOYSTICK_TRIGGER)).await
}
