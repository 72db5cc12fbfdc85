//! Integration Tests für die Labor-Logik
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen Mock-Peripherie
//! für Joystick, Taster, Display, Status-LEDs und LED-Matrix.

use std::collections::VecDeque;

use lab_core::{
    AnalogInput, BinaryIndicator, Channel, Cyclic, DigitalInput, Gate, GateBoard, GateLab,
    Indicator, MATRIX_LED_COUNT, PeripheralError, PixelSink, Polarity, StatusLeds, TextDisplay,
    TriggerMode, TurnstileBoard, TurnstileLab, advance, evaluate,
};
use rgb::RGB8;

const CENTER: u16 = 2048;
const UP: u16 = 4095;
const DOWN: u16 = 0;

// ============================================================================
// Mock Peripherie
// ============================================================================

/// Joystick mit vorgegebener Wert-Folge, danach Mittelstellung
#[derive(Default)]
pub struct ScriptedJoystick {
    pub samples: VecDeque<u16>,
}

impl ScriptedJoystick {
    pub fn new(samples: &[u16]) -> Self {
        Self {
            samples: samples.iter().copied().collect(),
        }
    }
}

impl AnalogInput for ScriptedJoystick {
    fn read(&mut self) -> u16 {
        self.samples.pop_front().unwrap_or(CENTER)
    }
}

/// Taster mit festem Pegel (Pull-up: losgelassen = HIGH)
pub struct ScriptedButton {
    pub levels: VecDeque<bool>,
    pub idle_high: bool,
}

impl ScriptedButton {
    pub fn released() -> Self {
        Self {
            levels: VecDeque::new(),
            idle_high: true,
        }
    }

    pub fn held() -> Self {
        Self {
            levels: VecDeque::new(),
            idle_high: false,
        }
    }

    /// Pegel-Folge in Druck-Logik (`true` = gedrückt, also LOW)
    pub fn presses(pressed: &[bool]) -> Self {
        Self {
            levels: pressed.iter().map(|p| !p).collect(),
            idle_high: true,
        }
    }
}

impl DigitalInput for ScriptedButton {
    fn is_high(&mut self) -> bool {
        self.levels.pop_front().unwrap_or(self.idle_high)
    }
}

#[derive(Default)]
pub struct MockDisplay {
    pub frames: Vec<Vec<String>>,
    pub fail_next_show: bool,
}

impl TextDisplay for MockDisplay {
    fn show(&mut self, lines: &[&str]) -> Result<(), PeripheralError> {
        if self.fail_next_show {
            self.fail_next_show = false;
            return Err(PeripheralError::WriteFailed);
        }
        self.frames
            .push(lines.iter().map(|l| (*l).to_string()).collect());
        Ok(())
    }
}

#[derive(Default)]
pub struct MockLed {
    pub on: Option<bool>,
    pub set_count: usize,
    pub fail_next_set: bool,
}

impl BinaryIndicator for MockLed {
    fn set(&mut self, on: bool) -> Result<(), PeripheralError> {
        if self.fail_next_set {
            self.fail_next_set = false;
            return Err(PeripheralError::WriteFailed);
        }
        self.on = Some(on);
        self.set_count += 1;
        Ok(())
    }
}

pub struct MockPixels {
    pub buffer: [RGB8; MATRIX_LED_COUNT],
    pub flushed: Vec<[RGB8; MATRIX_LED_COUNT]>,
}

impl Default for MockPixels {
    fn default() -> Self {
        Self {
            buffer: [RGB8::default(); MATRIX_LED_COUNT],
            flushed: Vec::new(),
        }
    }
}

impl PixelSink for MockPixels {
    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), PeripheralError> {
        let pixel = self
            .buffer
            .get_mut(index)
            .ok_or(PeripheralError::IndexOutOfRange)?;
        *pixel = color;
        Ok(())
    }

    fn clear(&mut self) {
        self.buffer = [RGB8::default(); MATRIX_LED_COUNT];
    }

    fn flush(&mut self) -> Result<(), PeripheralError> {
        self.flushed.push(self.buffer);
        Ok(())
    }
}

type TestGateBoard =
    GateBoard<ScriptedJoystick, ScriptedButton, ScriptedButton, MockDisplay, MockLed, MockLed>;

type TestTurnstileBoard =
    TurnstileBoard<ScriptedJoystick, ScriptedButton, MockDisplay, MockLed, MockLed, MockPixels>;

fn gate_board(joystick: &[u16], a: ScriptedButton, b: ScriptedButton) -> TestGateBoard {
    GateBoard {
        joystick: ScriptedJoystick::new(joystick),
        button_a: a,
        button_b: b,
        display: MockDisplay::default(),
        leds: StatusLeds::new(MockLed::default(), MockLed::default()),
        polarity: Polarity::ActiveLow,
    }
}

fn turnstile_board(joystick: &[u16], toggle: ScriptedButton) -> TestTurnstileBoard {
    TurnstileBoard {
        joystick: ScriptedJoystick::new(joystick),
        toggle,
        display: MockDisplay::default(),
        leds: StatusLeds::new(MockLed::default(), MockLed::default()),
        matrix: MockPixels::default(),
        polarity: Polarity::ActiveLow,
        brightness: 255,
    }
}

/// Ein Poll-Zyklus, wie ihn die Firmware-Schleife ausführt
fn run_gate_cycle(lab: &mut GateLab, board: &mut TestGateBoard) -> Result<(), PeripheralError> {
    let sample = board.sample();
    let view = lab.step(sample);
    board.render(&view)
}

fn run_turnstile_cycle(
    lab: &mut TurnstileLab,
    board: &mut TestTurnstileBoard,
) -> Result<(), PeripheralError> {
    let sample = board.sample();
    let view = lab.step(sample);
    board.render(&view)
}

fn green_red(leds: &StatusLeds<MockLed, MockLed>) -> (Option<bool>, Option<bool>) {
    let (green, red) = leds.parts();
    (green.on, red.on)
}

const GREEN: RGB8 = RGB8 { r: 0, g: 255, b: 0 };
const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };
const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

// ============================================================================
// Tests: State Cycler
// ============================================================================

#[test]
fn test_advance_forward_for_every_state() {
    for gate in Gate::ALL {
        for sample in [3001, 3500, 4095] {
            assert_eq!(advance(gate, sample), Gate::from_index(gate.index() + 1));
        }
    }
}

#[test]
fn test_advance_backward_returns_after_n_steps() {
    for start in Channel::ALL {
        let mut ch = start;
        for _ in 0..Channel::COUNT {
            ch = advance(ch, 1399);
        }
        assert_eq!(ch, start);
        assert_eq!(
            advance(start, 0).index(),
            (start.index() + Channel::COUNT - 1) % Channel::COUNT
        );
    }
}

#[test]
fn test_advance_backward_full_gate_cycle() {
    for start in Gate::ALL {
        let mut gate = start;
        for step in 1..=Gate::COUNT {
            gate = advance(gate, DOWN);
            if step < Gate::COUNT {
                assert_ne!(gate, start, "{} after {} steps", start.label(), step);
            }
        }
        assert_eq!(gate, start);
    }
}

#[test]
fn test_advance_dead_zone_boundaries() {
    for gate in Gate::ALL {
        assert_eq!(advance(gate, 1400), gate);
        assert_eq!(advance(gate, 3000), gate);
    }
}

// ============================================================================
// Tests: Gate Evaluator
// ============================================================================

#[test]
fn test_gate_truth_tables() {
    // (a, b) in der Reihenfolge 00, 01, 10, 11
    let table: [(Gate, [bool; 4]); 7] = [
        (Gate::And, [false, false, false, true]),
        (Gate::Or, [false, true, true, true]),
        (Gate::Not, [true, true, false, false]),
        (Gate::Nand, [true, true, true, false]),
        (Gate::Nor, [true, false, false, false]),
        (Gate::Xor, [false, true, true, false]),
        (Gate::Xnor, [true, false, false, true]),
    ];
    let inputs = [(false, false), (false, true), (true, false), (true, true)];

    for (gate, expected) in table {
        for ((a, b), want) in inputs.iter().zip(expected) {
            assert_eq!(evaluate(gate, *a, *b), want, "{} a={} b={}", gate.label(), a, b);
        }
    }
}

#[test]
fn test_gate_labels() {
    let labels = Gate::ALL.map(Gate::label);
    assert_eq!(labels, ["AND", "OR", "NOT", "NAND", "NOR", "XOR", "XNOR"]);
}

// ============================================================================
// Tests: Gate Poll-Zyklus
// ============================================================================

#[test]
fn test_gate_cycle_and_with_both_pressed_lights_green() {
    let mut lab = GateLab::new(TriggerMode::Level);
    let mut board = gate_board(&[CENTER], ScriptedButton::held(), ScriptedButton::held());

    run_gate_cycle(&mut lab, &mut board).unwrap();

    assert_eq!(green_red(&board.leds), (Some(true), Some(false)));
    assert_eq!(board.display.frames.last().unwrap()[3], "AND");
}

#[test]
fn test_gate_cycle_released_buttons_read_false() {
    let mut lab = GateLab::new(TriggerMode::Level);
    let mut board = gate_board(&[], ScriptedButton::released(), ScriptedButton::released());

    run_gate_cycle(&mut lab, &mut board).unwrap();

    // AND(false, false) = false → rot
    assert_eq!(green_red(&board.leds), (Some(false), Some(true)));
}

#[test]
fn test_gate_cycle_rapid_fire_while_held() {
    let mut lab = GateLab::new(TriggerMode::Level);
    let mut board = gate_board(
        &[UP, UP, UP],
        ScriptedButton::released(),
        ScriptedButton::released(),
    );

    for _ in 0..3 {
        run_gate_cycle(&mut lab, &mut board).unwrap();
    }

    assert_eq!(lab.gate(), Gate::Nand);
    let labels: Vec<&str> = board.display.frames.iter().map(|f| f[3].as_str()).collect();
    assert_eq!(labels, ["OR", "NOT", "NAND"]);
}

#[test]
fn test_gate_cycle_edge_joystick_steps_once() {
    let mut lab = GateLab::new(TriggerMode::Edge);
    let mut board = gate_board(
        &[DOWN, DOWN, DOWN, CENTER, DOWN],
        ScriptedButton::released(),
        ScriptedButton::released(),
    );

    for _ in 0..5 {
        run_gate_cycle(&mut lab, &mut board).unwrap();
    }

    assert_eq!(lab.gate(), Gate::Xor);
}

#[test]
fn test_gate_cycle_not_uses_only_a() {
    let mut lab = GateLab::new(TriggerMode::Level);
    let mut board = gate_board(
        &[UP, UP],
        ScriptedButton::released(),
        ScriptedButton::held(),
    );

    run_gate_cycle(&mut lab, &mut board).unwrap();
    run_gate_cycle(&mut lab, &mut board).unwrap();

    assert_eq!(lab.gate(), Gate::Not);
    assert_eq!(green_red(&board.leds), (Some(true), Some(false)));
}

#[test]
fn test_gate_cycle_display_failure_still_drives_leds() {
    let mut lab = GateLab::new(TriggerMode::Level);
    let mut board = gate_board(&[], ScriptedButton::held(), ScriptedButton::held());
    board.display.fail_next_show = true;

    let result = run_gate_cycle(&mut lab, &mut board);

    assert_eq!(result, Err(PeripheralError::WriteFailed));
    assert_eq!(green_red(&board.leds), (Some(true), Some(false)));

    // Nächster Zyklus läuft normal weiter
    run_gate_cycle(&mut lab, &mut board).unwrap();
    assert_eq!(board.display.frames.len(), 1);
}

#[test]
fn test_gate_cycle_re_renders_every_cycle() {
    let mut lab = GateLab::new(TriggerMode::Level);
    let mut board = gate_board(&[], ScriptedButton::held(), ScriptedButton::held());

    for _ in 0..4 {
        run_gate_cycle(&mut lab, &mut board).unwrap();
    }

    assert_eq!(board.display.frames.len(), 4);
    let (green, red) = board.leds.parts();
    assert_eq!(green.set_count, 4);
    assert_eq!(red.set_count, 4);
}

// ============================================================================
// Tests: Turnstile
// ============================================================================

#[test]
fn test_turnstile_initial_frame() {
    let mut lab = TurnstileLab::new(TriggerMode::Level, TriggerMode::Edge);
    let mut board = turnstile_board(&[], ScriptedButton::released());

    run_turnstile_cycle(&mut lab, &mut board).unwrap();

    assert_eq!(board.display.frames[0], ["0 - GR", "", "", "", ""]);
    // Alle Flags aus → ¬c3 → Zugang gewährt
    assert_eq!(green_red(&board.leds), (Some(true), Some(false)));

    let frame = board.matrix.flushed[0];
    assert_eq!(&frame[1..5], &[RED, RED, RED, RED]);
    assert_eq!(frame[0], OFF);
    assert!(frame[5..].iter().all(|p| *p == OFF));
}

#[test]
fn test_turnstile_toggle_only_selected_channel() {
    let mut lab = TurnstileLab::new(TriggerMode::Level, TriggerMode::Edge);
    let mut board = turnstile_board(
        &[UP, UP, CENTER],
        ScriptedButton::presses(&[false, false, true]),
    );

    for _ in 0..3 {
        run_turnstile_cycle(&mut lab, &mut board).unwrap();
    }

    assert_eq!(lab.channel(), Channel::Di);
    assert_eq!(lab.flags().as_array(), [false, false, true, false]);
    let frame = board.matrix.flushed.last().unwrap();
    assert_eq!(frame[2], GREEN);
    assert_eq!(frame[4], RED);
}

#[test]
fn test_turnstile_denied_when_pt_set_without_others() {
    let mut lab = TurnstileLab::new(TriggerMode::Level, TriggerMode::Edge);
    // Rückwärts von GR → PT, dann umschalten
    let mut board = turnstile_board(&[DOWN, CENTER], ScriptedButton::presses(&[false, true]));

    run_turnstile_cycle(&mut lab, &mut board).unwrap();
    run_turnstile_cycle(&mut lab, &mut board).unwrap();

    assert_eq!(lab.flags().as_array(), [false, false, false, true]);
    assert_eq!(green_red(&board.leds), (Some(false), Some(true)));
    assert_eq!(board.matrix.flushed.last().unwrap()[1], GREEN);
}

#[test]
fn test_turnstile_granted_with_all_flags() {
    let mut lab = TurnstileLab::new(TriggerMode::Level, TriggerMode::Edge);
    // Pro Kanal: umschalten, loslassen, weiter
    let mut board = turnstile_board(
        &[CENTER, UP, CENTER, UP, CENTER, UP, CENTER],
        ScriptedButton::presses(&[true, false, true, false, true, false, true]),
    );

    for _ in 0..7 {
        run_turnstile_cycle(&mut lab, &mut board).unwrap();
    }

    assert_eq!(lab.flags().as_array(), [true, true, true, true]);
    assert_eq!(green_red(&board.leds), (Some(true), Some(false)));
}

#[test]
fn test_turnstile_held_toggle_edge_vs_level() {
    let mut edge = TurnstileLab::new(TriggerMode::Level, TriggerMode::Edge);
    let mut level = TurnstileLab::new(TriggerMode::Level, TriggerMode::Level);
    let mut edge_board = turnstile_board(&[], ScriptedButton::held());
    let mut level_board = turnstile_board(&[], ScriptedButton::held());

    for _ in 0..4 {
        run_turnstile_cycle(&mut edge, &mut edge_board).unwrap();
        run_turnstile_cycle(&mut level, &mut level_board).unwrap();
    }

    assert!(edge.flags().get(Channel::Gr));
    // 4x umgeschaltet → wieder aus
    assert!(!level.flags().get(Channel::Gr));
}

#[test]
fn test_turnstile_label_independent_of_flags() {
    let mut lab = TurnstileLab::new(TriggerMode::Level, TriggerMode::Level);
    let mut board = turnstile_board(&[], ScriptedButton::presses(&[false, true]));

    run_turnstile_cycle(&mut lab, &mut board).unwrap();
    run_turnstile_cycle(&mut lab, &mut board).unwrap();

    assert_eq!(board.display.frames[0], board.display.frames[1]);
    assert_ne!(board.matrix.flushed[0], board.matrix.flushed[1]);
}

#[test]
fn test_turnstile_brightness_scales_pixels() {
    let mut lab = TurnstileLab::new(TriggerMode::Level, TriggerMode::Edge);
    let mut board = turnstile_board(&[], ScriptedButton::released());
    board.brightness = 10;

    run_turnstile_cycle(&mut lab, &mut board).unwrap();

    assert_eq!(board.matrix.flushed[0][4], RGB8 { r: 10, g: 0, b: 0 });
}

// ============================================================================
// Tests: Mock Peripherie
// ============================================================================

#[test]
fn test_mock_pixels_rejects_out_of_range() {
    let mut pixels = MockPixels::default();
    let result = pixels.set_pixel(MATRIX_LED_COUNT, GREEN);
    assert_eq!(result, Err(PeripheralError::IndexOutOfRange));
}

#[test]
fn test_status_leds_are_mutually_exclusive() {
    let mut leds = StatusLeds::new(MockLed::default(), MockLed::default());

    leds.show(Indicator::Affirmative).unwrap();
    assert_eq!(green_red(&leds), (Some(true), Some(false)));

    leds.show(Indicator::Negative).unwrap();
    assert_eq!(green_red(&leds), (Some(false), Some(true)));
}

#[test]
fn test_status_leds_green_failure_still_sets_red() {
    let mut leds = StatusLeds::new(
        MockLed {
            fail_next_set: true,
            ..MockLed::default()
        },
        MockLed::default(),
    );

    let result = leds.show(Indicator::Negative);

    assert_eq!(result, Err(PeripheralError::WriteFailed));
    assert_eq!(green_red(&leds), (None, Some(true)));
}

#[test]
fn test_turnstile_cycle_led_failure_still_drives_other_outputs() {
    let mut lab = TurnstileLab::new(TriggerMode::Level, TriggerMode::Edge);
    let mut board = turnstile_board(&[], ScriptedButton::released());
    board.leds = StatusLeds::new(
        MockLed {
            fail_next_set: true,
            ..MockLed::default()
        },
        MockLed::default(),
    );

    let result = run_turnstile_cycle(&mut lab, &mut board);

    // Alle Flags aus → ¬c3 → Zugang gewährt, rote LED aus
    assert_eq!(result, Err(PeripheralError::WriteFailed));
    assert_eq!(green_red(&board.leds), (None, Some(false)));
    assert_eq!(board.display.frames.len(), 1);
    assert_eq!(board.matrix.flushed.len(), 1);
}
