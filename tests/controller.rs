mod support;

use approx::assert_relative_eq;
use ship_controller::{InputSample, ShipController, ShipTuning};
use support::{LEFT, RIGHT, SequenceSampler, recording_battery};

fn controller_holding(
    sample: InputSample,
) -> ShipController<SequenceSampler, support::RecordingEmitter> {
    ShipController::new(
        ShipTuning::default(),
        SequenceSampler::hold(sample),
        recording_battery(),
    )
}

#[test]
fn ticks_are_ignored_while_inactive() {
    let mut controller = controller_holding(InputSample::new(1.0, 1.0, 1.0));

    controller.tick(0.1);
    assert_eq!(controller.sampler().sample_calls, 0);
    assert_eq!(controller.state().x, 0.0);
    assert_eq!(controller.state().vx, 0.0);

    controller.start();
    controller.stop();
    controller.tick(0.1);
    assert_eq!(controller.sampler().sample_calls, 0);
}

#[test]
fn lifecycle_brackets_the_input_source_exactly_once() {
    let mut controller = controller_holding(InputSample::IDLE);

    controller.start();
    controller.start();
    assert!(controller.is_active());
    assert_eq!(controller.sampler().enable_calls, 1);

    controller.stop();
    controller.stop();
    assert!(!controller.is_active());
    assert_eq!(controller.sampler().disable_calls, 1);
}

#[test]
fn one_frame_runs_motion_attitude_and_firing_in_order() {
    let mut controller = controller_holding(InputSample::new(1.0, 0.0, 1.0));
    controller.start();

    controller.tick(0.1);

    let state = controller.state();
    assert_relative_eq!(state.vx, 0.5);
    assert_relative_eq!(state.x, 0.05);
    // Pitch reads the already-clamped position; y has not moved.
    assert_eq!(state.pitch, 0.0);
    assert_relative_eq!(state.roll, -30.0);

    for side in [LEFT, RIGHT] {
        assert!(controller.battery().emitters()[side].playing);
    }
}

#[test]
fn out_of_range_samples_are_clamped_on_ingest() {
    // A misbehaving source cannot drive the ship past the stick envelope.
    let tuning = ShipTuning {
        acceleration: 1000.0,
        ..ShipTuning::default()
    };
    let mut controller = ShipController::new(
        tuning,
        SequenceSampler::hold(InputSample::new(5.0, -5.0, 3.0)),
        recording_battery(),
    );
    controller.start();

    controller.tick(1.0);

    assert_eq!(controller.state().vx, tuning.max_speed);
    assert_eq!(controller.state().vy, -tuning.max_speed);
}

#[test]
fn release_after_a_burst_parks_the_battery() {
    let mut controller = ShipController::new(
        ShipTuning::default(),
        SequenceSampler::new(vec![
            InputSample::new(0.0, 0.0, 1.0),
            InputSample::new(0.0, 0.0, 1.0),
            InputSample::IDLE,
        ]),
        recording_battery(),
    );
    controller.start();

    controller.tick(0.1); // fire
    controller.tick(0.1); // hold
    controller.tick(0.1); // release

    for e in controller.battery().emitters() {
        assert!(!e.active);
        assert!(!e.emission_enabled);
    }
    for side in [LEFT, RIGHT] {
        assert_eq!(controller.battery().emitters()[side].play_calls, 1);
        assert!(!controller.battery().emitters()[side].playing);
    }
}

#[test]
fn snapshots_carry_the_fixed_zero_yaw() {
    let mut controller = controller_holding(InputSample::new(-1.0, 0.5, 0.0));
    controller.start();
    controller.tick(0.1);

    let value = serde_json::to_value(controller.snapshot()).expect("snapshot serializes");
    assert_eq!(value["yaw"], 0.0);
    assert_eq!(value["x"], controller.state().x);
    assert_eq!(value["roll"], controller.state().roll);
}
