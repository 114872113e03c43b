//! Cooperative control loop
//!
//! One task owns the whole actuator: mode selection, debounced button
//! input, calibration, remote position tracking, idle power management, and
//! the status LEDs. Remote moves run to completion inside a single loop
//! iteration - button and mode-switch changes are not observed mid-move.
//! This keeps the control flow strictly sequential; making motion
//! preemptible would be a behavior change, not a refactor.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Instant, Timer};

use jalousie_core::calibration::Calibrator;
use jalousie_core::indicator::led_state;
use jalousie_core::input::Buttons;
use jalousie_core::motion::Stepper;
use jalousie_core::power;
use jalousie_core::remote::PositionController;
use jalousie_core::state::{ActuatorState, Mode};
use jalousie_core::traits::clock::Clock;
use jalousie_core::traits::cover::CoverHandle;
use jalousie_core::traits::leds::StatusLeds;
use jalousie_core::traits::store::load_or_init;

use crate::cover::AttributeCover;
use crate::flash::FlashStore;
use crate::leds::BoardLeds;
use crate::motor::GpioMotor;

/// Loop tick period while idle
const TICK_MS: u64 = 5;

/// Millisecond uptime clock
struct UptimeClock;

impl Clock for UptimeClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}

/// Control task - the single cooperative loop
#[embassy_executor::task]
pub async fn control_task(
    mut store: FlashStore<'static>,
    motor: GpioMotor<'static>,
    mut leds: BoardLeds<'static>,
    up: Input<'static>,
    down: Input<'static>,
    mode_switch: Input<'static>,
) {
    let clock = UptimeClock;

    let record = load_or_init(&mut store);
    info!(
        "Position record: min={} max={} current={}",
        record.min_pos, record.max_pos, record.current_pos
    );

    let mut state = ActuatorState::from_record(record);
    let mut stepper = Stepper::new(motor);
    let mut buttons = Buttons::new();
    let mut calibrator = Calibrator::new();
    let mut controller = PositionController::new();
    let mut cover = AttributeCover;

    // The remote side starts from the persisted truth; seeding the request
    // keeps the first poll from commanding a move.
    cover.seed_requested(state.current_pos, state.percent());
    controller.mark_handled(state.current_pos);
    cover.set_lift_raw(state.current_pos);
    cover.set_lift_percent(state.percent());

    let mut last_mode = None;

    loop {
        let now = clock.now_ms();

        // Switch closed (low) selects calibration mode
        let mode = if mode_switch.is_low() {
            Mode::Calibration
        } else {
            Mode::Remote
        };

        if last_mode != Some(mode) {
            match mode {
                Mode::Calibration => info!("Mode: calibration"),
                Mode::Remote => {
                    info!("Mode: remote control");
                    // Leaving calibration abandons any in-progress hold and
                    // republishes the (possibly recalibrated) position
                    calibrator.abort_hold();
                    cover.set_lift_raw(state.current_pos);
                    cover.set_lift_percent(state.percent());
                }
            }
            // Buttons are calibration-only inputs
            buttons.set_suppressed(mode == Mode::Remote);
            last_mode = Some(mode);
        }

        // Active-low buttons
        buttons.sample(up.is_low(), down.is_low(), now);

        match mode {
            Mode::Calibration => calibrator.service(
                &mut state,
                &mut stepper,
                &mut store,
                &mut cover,
                &mut leds,
                &buttons,
                &clock,
            ),
            Mode::Remote => controller.service(&mut state, &mut stepper, &mut cover, &clock),
        }

        if power::service(&mut state, &mut stepper, &mut store, &clock) {
            debug!("Persisted position {} after idle", state.current_pos);
        }

        leds.show(led_state(mode, calibrator.phase()));

        Timer::after(Duration::from_millis(TICK_MS)).await;
    }
}
