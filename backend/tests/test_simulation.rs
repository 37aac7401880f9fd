//! End-to-end tests for the simulation driver

use ball_clock_core_rs::{
    run_clock, Ball, CycleReport, Event, Simulation, SimulationConfig, SimulationError,
    MINUTES_PER_DAY,
};

#[test]
fn test_thirty_balls_cycle_after_15_days() {
    let report = run_clock(30).unwrap();
    assert_eq!(report.balls, 30);
    assert_eq!(report.minutes, 21_600);
    assert_eq!(report.days, 15);
}

#[test]
fn test_forty_five_balls_cycle_after_378_days() {
    let report = run_clock(45).unwrap();
    assert_eq!(report.balls, 45);
    assert_eq!(report.minutes, 544_320);
    assert_eq!(report.days, 378);
}

#[test]
fn test_runs_are_deterministic() {
    assert_eq!(run_clock(30).unwrap(), run_clock(30).unwrap());
    assert_eq!(run_clock(45).unwrap(), run_clock(45).unwrap());
}

#[test]
fn test_invalid_sizes_are_rejected_before_simulating() {
    assert_eq!(run_clock(0).unwrap_err(), SimulationError::InvalidSize(0));
    assert_eq!(run_clock(26).unwrap_err(), SimulationError::InvalidSize(26));
    assert_eq!(
        run_clock(128).unwrap_err(),
        SimulationError::InvalidSize(128)
    );
}

#[test]
fn test_exhausted_step_bound_reports_no_cycle() {
    let config = SimulationConfig {
        max_steps: 100,
        record_events: false,
    };
    let mut sim = Simulation::with_config(30, config).unwrap();
    assert_eq!(
        sim.run().unwrap_err(),
        SimulationError::NoCycleFound {
            balls: 30,
            max_steps: 100,
        }
    );
    assert_eq!(sim.elapsed_minutes(), 100);
}

#[test]
fn test_boundary_counts_never_crash() {
    // The default step bound may or may not cover these cycle lengths;
    // either outcome is well-defined
    for balls in [27, 127] {
        match run_clock(balls) {
            Ok(report) => {
                assert_eq!(report.minutes % MINUTES_PER_DAY, 0);
                assert_eq!(report.days, report.minutes / MINUTES_PER_DAY);
                assert!(report.days > 0);
            }
            Err(SimulationError::NoCycleFound { balls: b, .. }) => assert_eq!(b, balls),
            Err(other) => panic!("unexpected error for {balls} balls: {other}"),
        }
    }
}

#[test]
fn test_clock_is_back_in_initial_order_after_run() {
    let mut sim = Simulation::new(30).unwrap();
    sim.run().unwrap();
    assert!(sim.clock().is_initial_order());
    assert_eq!(sim.elapsed_minutes(), 21_600);
}

#[test]
fn test_event_recording() {
    let config = SimulationConfig {
        record_events: true,
        ..SimulationConfig::default()
    };
    let mut sim = Simulation::with_config(30, config).unwrap();
    let report = sim.run().unwrap();

    let events = sim.events();
    assert!(!events.is_empty());

    // First action: ball 1 lifted at minute 1
    assert_eq!(
        events.events()[0],
        Event::Elevated {
            minute: 1,
            ball: Ball(1),
        }
    );

    // Minute 5 holds the first tilt, in reverse arrival order
    let tilts: Vec<&Event> = events
        .events_at_minute(5)
        .into_iter()
        .filter(|e| e.event_type() == "tilted")
        .collect();
    assert_eq!(tilts.len(), 1);

    // Exactly one cycle, found at the final minute
    let found = events.events_of_type("cycle_found");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].minute(), report.minutes);
    assert_eq!(events.events().last(), Some(found[0]));
}

#[test]
fn test_events_off_by_default() {
    let mut sim = Simulation::new(30).unwrap();
    sim.run().unwrap();
    assert!(sim.events().is_empty());
}

#[test]
fn test_cycle_report_serde_round_trip() {
    let report = run_clock(30).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    let restored: CycleReport = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, report);
}
