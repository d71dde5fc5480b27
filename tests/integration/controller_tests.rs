//! Controller behaviour against scripted sensor / recording heater.

use super::mock_hw::Call::{self, Off, On, Read};
use super::mock_hw::{Journal, RecordingHeater, ScriptedSource};
use thermostat::app::controller::Controller;
use thermostat::app::ports::TemperatureReading as R;
use thermostat::config::ControllerConfig;

const TARGET: i32 = 23;
const HYSTERESIS: i32 = 2;

type Ctl = Controller<ScriptedSource, RecordingHeater>;

fn controller(journal: &Journal, script: &[R]) -> Ctl {
    Controller::new(
        ScriptedSource::new(journal, script.iter().copied()),
        RecordingHeater::new(journal),
        TARGET,
        HYSTERESIS,
    )
}

/// Step once and return what the step did, reads included.
fn step(ctl: &mut Ctl, journal: &Journal) -> (bool, Vec<Call>) {
    let keep_going = ctl.step();
    (keep_going, journal.take())
}

// ── Regulation ────────────────────────────────────────────────

#[test]
fn happy_path() {
    let j = Journal::new();
    let mut c = controller(
        &j,
        &[
            R::good(0),
            R::good(TARGET),
            R::good(TARGET - HYSTERESIS / 2),
            R::good(TARGET - HYSTERESIS),
            R::good(TARGET - HYSTERESIS - 1),
            R::good(TARGET - HYSTERESIS + 1),
            R::good(TARGET + 1),
        ],
    );

    // Below target: heater on.
    assert_eq!(step(&mut c, &j), (true, vec![Read, On]));
    // At target: heater off.
    assert_eq!(step(&mut c, &j), (true, vec![Read, Off]));
    // Inside the dead-band: no command at all.
    assert_eq!(step(&mut c, &j), (true, vec![Read]));
    // Lower dead-band edge is still inside.
    assert_eq!(step(&mut c, &j), (true, vec![Read]));
    // One below the dead-band: heater on.
    assert_eq!(step(&mut c, &j), (true, vec![Read, On]));
    // Back in the dead-band: hold.
    assert_eq!(step(&mut c, &j), (true, vec![Read]));
    // Above target: heater off.
    assert_eq!(step(&mut c, &j), (true, vec![Read, Off]));
}

#[test]
fn all_good_sequence_from_cold() {
    let j = Journal::new();
    let mut c = controller(
        &j,
        &[R::good(0), R::good(23), R::good(22), R::good(21), R::good(24)],
    );
    for _ in 0..5 {
        assert!(c.step());
    }
    assert_eq!(j.heater_calls(), vec![On, Off, Off]);
    assert_eq!(
        j.calls(),
        vec![Read, On, Read, Off, Read, Read, Read, Off]
    );
}

#[test]
fn repeated_commands_are_reissued() {
    // No heater-state cache: every cold reading re-asserts `on`.
    let j = Journal::new();
    let mut c = controller(&j, &[R::good(0), R::good(5), R::good(30), R::good(40)]);
    for _ in 0..4 {
        assert!(c.step());
    }
    assert_eq!(j.heater_calls(), vec![On, On, Off, Off]);
}

// ── Sensor faults ─────────────────────────────────────────────

#[test]
fn single_sensor_failure_recovery() {
    let j = Journal::new();
    let mut c = controller(&j, &[R::bad(0), R::good(0), R::bad(0)]);

    assert_eq!(step(&mut c, &j), (true, vec![Read]));
    assert_eq!(step(&mut c, &j), (true, vec![Read, On]));
    assert_eq!(step(&mut c, &j), (true, vec![Read]));
}

#[test]
fn double_sensor_failure_give_up() {
    let j = Journal::new();
    let mut c = controller(&j, &[R::bad(0), R::bad(0)]);

    assert_eq!(step(&mut c, &j), (true, vec![Read]));
    // Heater explicitly switched off before giving up.
    assert_eq!(step(&mut c, &j), (false, vec![Read, Off]));
}

#[test]
fn alternating_faults_never_shut_down() {
    let j = Journal::new();
    let script: Vec<_> = (0..20)
        .map(|i| if i % 2 == 0 { R::bad(999) } else { R::good(22) })
        .collect();
    let mut c = controller(&j, &script);
    for _ in 0..20 {
        assert!(c.step());
    }
    assert!(j.heater_calls().is_empty());
}

#[test]
fn bad_value_is_never_acted_on() {
    let j = Journal::new();
    let mut c = controller(&j, &[R::bad(i32::MIN), R::good(22), R::bad(i32::MAX)]);
    for _ in 0..3 {
        assert!(c.step());
    }
    assert_eq!(j.count(On) + j.count(Off), 0);
}

#[test]
fn fault_after_good_readings_still_needs_two_strikes() {
    let j = Journal::new();
    let mut c = controller(&j, &[R::good(30), R::bad(0), R::good(0), R::bad(0), R::bad(0)]);
    assert!(c.step());
    assert!(c.step());
    assert!(c.step());
    assert!(c.step());
    assert!(!c.step());
    assert_eq!(j.heater_calls(), vec![Off, On, Off]);
}

// ── run() ─────────────────────────────────────────────────────

#[test]
fn run_stops_after_two_consecutive_faults() {
    let j = Journal::new();
    let mut c = controller(
        &j,
        &[R::good(0), R::good(TARGET + 1), R::bad(0), R::bad(0)],
    );

    assert_eq!(c.run(), 4);
    assert_eq!(j.calls(), vec![Read, On, Read, Off, Read, Read, Off]);

    // Nothing read past the terminal pair.
    let (source, _) = c.into_parts();
    assert_eq!(source.remaining(), 0);
}

#[test]
fn run_leaves_trailing_script_unread() {
    let j = Journal::new();
    let mut c = controller(&j, &[R::bad(0), R::bad(0), R::good(0), R::good(0)]);
    assert_eq!(c.run(), 2);
    let (source, _) = c.into_parts();
    assert_eq!(source.remaining(), 2);
    assert_eq!(j.heater_calls(), vec![Off]);
}

// ── Construction ──────────────────────────────────────────────

#[test]
#[should_panic(expected = "invalid controller parameters")]
fn hysteresis_equal_to_target_is_fatal() {
    let j = Journal::new();
    let _ = Controller::new(
        ScriptedSource::new(&j, []),
        RecordingHeater::new(&j),
        TARGET,
        TARGET,
    );
}

#[test]
#[should_panic(expected = "invalid controller parameters")]
fn negative_hysteresis_is_fatal() {
    let j = Journal::new();
    let _ = Controller::new(
        ScriptedSource::new(&j, []),
        RecordingHeater::new(&j),
        TARGET,
        -1,
    );
}

#[test]
fn construction_does_not_touch_hardware() {
    let j = Journal::new();
    let c = Controller::try_new(
        ScriptedSource::new(&j, []),
        RecordingHeater::new(&j),
        ControllerConfig::default(),
    );
    assert!(c.is_ok());
    assert!(j.calls().is_empty());
}

#[test]
fn borrowed_collaborators_outlive_the_controller() {
    let j = Journal::new();
    let mut source = ScriptedSource::new(&j, [R::good(0)]);
    let mut heater = RecordingHeater::new(&j);
    {
        let mut c = Controller::new(&mut source, &mut heater, TARGET, HYSTERESIS);
        assert!(c.step());
    }
    source.push(R::good(TARGET));
    let mut c = Controller::new(&mut source, &mut heater, TARGET, HYSTERESIS);
    assert!(c.step());
    assert_eq!(j.heater_calls(), vec![On, Off]);
}

#[test]
fn independent_instances_do_not_share_fault_memory() {
    let j1 = Journal::new();
    let j2 = Journal::new();
    let mut a = controller(&j1, &[R::bad(0), R::bad(0)]);
    let mut b = controller(&j2, &[R::good(0), R::bad(0)]);
    assert!(a.step());
    assert!(b.step());
    assert!(!a.step());
    assert!(b.step());
}
