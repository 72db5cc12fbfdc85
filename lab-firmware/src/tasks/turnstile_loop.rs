// Drehkreuz-Task - Joystick wählt Kanal, Joystick-Taster schaltet ihn um
use defmt::{debug, error, info};
use embassy_time::{Duration, Timer};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::time::Rate;
use esp_hal_smartled::smart_led_buffer;

use crate::config::{
    BUTTON_POLARITY, I2C_FREQUENCY_KHZ, I2C_SCL_GPIO_PIN, I2C_SDA_GPIO_PIN, JOYSTICK_SW_GPIO_PIN,
    JOYSTICK_TRIGGER, JOYSTICK_Y_GPIO_PIN, LED_GREEN_GPIO_PIN, LED_RED_GPIO_PIN,
    MATRIX_BRIGHTNESS, MATRIX_GPIO_PIN, MATRIX_LED_COUNT, POLL_INTERVAL_MS, RMT_CLOCK_MHZ,
    TOGGLE_TRIGGER,
};
use crate::hal::{Button, JoystickAxis, OledDisplay, RmtPixelMatrix, StatusLed};
use crate::{
    AnalogInput, BinaryIndicator, DigitalInput, PixelSink, StatusLeds, TextDisplay,
    TurnstileBoard, TurnstileLab,
};

/// Peripherals für das Drehkreuz
pub struct TurnstilePeripherals {
    pub adc1: esp_hal::peripherals::ADC1<'static>,
    pub joystick_y: esp_hal::peripherals::GPIO1<'static>,
    pub joystick_sw: esp_hal::peripherals::GPIO20<'static>,
    pub led_green: esp_hal::peripherals::GPIO10<'static>,
    pub led_red: esp_hal::peripherals::GPIO11<'static>,
    pub i2c0: esp_hal::peripherals::I2C0<'static>,
    pub sda: esp_hal::peripherals::GPIO6<'static>,
    pub scl: esp_hal::peripherals::GPIO7<'static>,
    pub matrix: esp_hal::peripherals::GPIO8<'static>,
    pub rmt: esp_hal::peripherals::RMT<'static>,
}

/// Drehkreuz Poll-Logik
///
/// Pro Zyklus: Kanal wählen, bei Tastendruck dessen Flag umschalten,
/// Zugang `(c0 ∧ c1 ∧ c2) ∨ ¬c3` berechnen und alles neu ausgeben.
pub async fn turnstile_loop_logic<J, T, D, G, R, P>(
    mut board: TurnstileBoard<J, T, D, G, R, P>,
    mut lab: TurnstileLab,
) -> !
where
    J: AnalogInput,
    T: DigitalInput,
    D: TextDisplay,
    G: BinaryIndicator,
    R: BinaryIndicator,
    P: PixelSink,
{
    info!("Turnstile: Loop started, channel {}", lab.channel());

    loop {
        let sample = board.sample();
        let view = lab.step(sample);

        debug!("Turnstile: {} -> {}", sample, view);
        if view.channel_changed {
            info!("Turnstile: Selected {}", view.channel);
        }
        if view.toggled {
            info!(
                "Turnstile: Toggled {} -> {=bool}, flags {}, access {}",
                view.channel,
                view.flags.get(view.channel),
                view.flags,
                view.granted
            );
        }

        if let Err(e) = board.render(&view) {
            error!("Turnstile: Failed to render output: {}", e);
        }

        Timer::after(Duration::from_millis(POLL_INTERVAL_MS)).await;
    }
}

/// Drehkreuz-Task - Embassy Task
#[embassy_executor::task]
pub async fn turnstile_loop_task(p: TurnstilePeripherals) {
    // Puffer für SmartLED Daten (25 LEDs)
    let mut rmt_buffer = smart_led_buffer!(MATRIX_LED_COUNT);
    let matrix = RmtPixelMatrix::new(p.matrix, p.rmt, RMT_CLOCK_MHZ, &mut rmt_buffer);

    let i2c = I2c::new(
        p.i2c0,
        I2cConfig::default().with_frequency(Rate::from_khz(I2C_FREQUENCY_KHZ)),
    )
    .expect("I2C initialisation failed")
    .with_sda(p.sda)
    .with_scl(p.scl);

    let display = OledDisplay::new(i2c).expect("SSD1306 initialisation failed");

    let board = TurnstileBoard {
        joystick: JoystickAxis::new(p.adc1, p.joystick_y),
        toggle: Button::new(p.joystick_sw),
        display,
        leds: StatusLeds::new(StatusLed::new(p.led_green), StatusLed::new(p.led_red)),
        matrix,
        polarity: BUTTON_POLARITY,
        brightness: MATRIX_BRIGHTNESS,
    };

    info!(
        "Turnstile: pins joystick GPIO{}, SW GPIO{}, LED green GPIO{} red GPIO{}, I2C SDA GPIO{} SCL GPIO{}, matrix GPIO{}",
        JOYSTICK_Y_GPIO_PIN,
        JOYSTICK_SW_GPIO_PIN,
        LED_GREEN_GPIO_PIN,
        LED_RED_GPIO_PIN,
        I2C_SDA_GPIO_PIN,
        I2C_SCL_GPIO_PIN,
        MATRIX_GPIO_PIN
    );
    info!(
        "Turnstile: joystick trigger {}, toggle trigger {}, poll every {}ms",
        JOYSTICK_TRIGGER, TOGGLE_TRIGGER, POLL_INTERVAL_MS
    );
    turnstile_loop_logic(board, TurnstileLab::new(JOYSTICK_TRIGGER, TOGGLE_TRIGGER)).await
}
