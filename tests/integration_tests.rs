use approx::assert_relative_eq;
use free_fall_simulation::{
    errors::SimulationError, simulate, simulate_batch, Aerodynamics, Atmosphere, FallIntegrator,
    FallingObject, ScenarioConfig, SimulationConfig, Telemetry,
};

// Helper function to create the reference 10 mm ball
fn create_test_ball() -> FallingObject {
    FallingObject::new(0.04, 10.0, 0.44).expect("reference ball is valid")
}

fn sea_level_terminal_velocity(object: &FallingObject) -> f64 {
    let air = Atmosphere::query(0.0);
    let k = Aerodynamics::calculate_drag_term(&air, object);
    Aerodynamics::calculate_terminal_velocity(object.mass(), 9.81, k)
}

#[test]
fn test_reference_drop_from_10km() {
    println!("INTEGRATION TEST: 10 mm ball dropped from 10 km");

    let ball = create_test_ball();
    let trajectory = simulate(&ball, 10_000.0, 0.05).expect("drop should succeed");
    let terminal = sea_level_terminal_velocity(&ball);

    println!("  - Falling time: {:.3}s", trajectory.falling_time());
    println!("  - Impact velocity: {:.3} m/s", trajectory.impact_velocity());
    println!("  - Sea level terminal velocity: {:.3} m/s", terminal);

    assert!(
        trajectory.falling_time() > 60.0 && trajectory.falling_time() < 85.0,
        "Falling time should be tens of seconds, got {:.3}s",
        trajectory.falling_time()
    );
    // The last step samples air a few meters above sea level, so the impact
    // velocity may sit a hair above the sea level value.
    assert_relative_eq!(trajectory.impact_velocity(), terminal, max_relative = 1e-3);
    assert!(
        trajectory.max_velocity() > trajectory.impact_velocity(),
        "Thin air aloft should let the ball exceed its sea level terminal velocity"
    );
    assert!(!trajectory.flags.mach_exceeded);
    assert!(!trajectory.flags.reynolds_exceeded);
}

#[test]
fn test_coarse_step_gives_similar_result() {
    let ball = create_test_ball();
    let fine = simulate(&ball, 10_000.0, 0.05).unwrap();
    let coarse = simulate(&ball, 10_000.0, 0.5).unwrap();

    assert!(
        (fine.falling_time() - coarse.falling_time()).abs() < 1.0,
        "Fine: {:.3}s, coarse: {:.3}s",
        fine.falling_time(),
        coarse.falling_time()
    );
    assert!(coarse.len() < fine.len());
}

#[test]
fn test_mach_flag_stays_latched() {
    println!("INTEGRATION TEST: Mach warning from 20 km");

    let ball = create_test_ball();
    let trajectory = simulate(&ball, 20_000.0, 0.05).unwrap();
    let impact_mach = trajectory.impact_velocity() / Atmosphere::query(0.0).speed_of_sound;

    assert!(trajectory.flags.mach_exceeded, "Ball should pass Mach 0.6 aloft");
    assert!(
        impact_mach < 0.6,
        "Ball should be subsonic again at impact, got Mach {:.3}",
        impact_mach
    );
    assert!(!trajectory.flags.reynolds_exceeded);
}

#[test]
fn test_reynolds_flag_for_large_sphere() {
    let sphere = FallingObject::new(1.0, 100.0, 0.47).unwrap();
    let trajectory = simulate(&sphere, 20_000.0, 0.1).unwrap();

    assert!(trajectory.flags.reynolds_exceeded);
    assert!(!trajectory.flags.mach_exceeded);
}

#[test]
fn test_both_flags_for_dense_sphere_from_ceiling() {
    let sphere = FallingObject::new(10.0, 50.0, 0.44).unwrap();
    let trajectory = simulate(&sphere, 25_000.0, 0.1).unwrap();

    assert!(trajectory.flags.mach_exceeded);
    assert!(trajectory.flags.reynolds_exceeded);
}

#[test]
fn test_runs_are_deterministic() {
    let ball = create_test_ball();
    let first = simulate(&ball, 5_000.0, 0.05).unwrap();
    let second = simulate(&ball, 5_000.0, 0.05).unwrap();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.velocity.iter().zip(&second.velocity) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
    for (a, b) in first.altitude.iter().zip(&second.altitude) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
    assert_eq!(first, second);
}

#[test]
fn test_termination_for_various_objects() {
    let cases = [
        (0.04, 10.0, 0.44, 100.0, 0.05),
        (0.001, 30.0, 1.2, 2_000.0, 0.1),
        (5.0, 80.0, 0.3, 15_000.0, 0.25),
        (0.2, 20.0, 0.47, 24_000.0, 0.5),
    ];

    for (mass, diameter, drag, altitude, time_step) in cases {
        let object = FallingObject::new(mass, diameter, drag).unwrap();
        let trajectory = simulate(&object, altitude, time_step).unwrap();
        let last = trajectory.last().unwrap();

        assert!(
            last.altitude <= 0.0,
            "Drop from {} m should end at or below ground, got {}",
            altitude,
            last.altitude
        );
        assert!(trajectory.altitude[..trajectory.len() - 1]
            .iter()
            .all(|&h| h > 0.0));
        assert!(trajectory.velocity.iter().all(|&v| v >= 0.0));
    }
}

#[test]
fn test_zero_parameters_are_rejected() {
    assert!(matches!(
        FallingObject::new(0.0, 10.0, 0.44),
        Err(SimulationError::InvalidParameter { name: "mass", .. })
    ));
    assert!(matches!(
        FallingObject::new(0.04, 0.0, 0.44),
        Err(SimulationError::InvalidParameter {
            name: "diameter",
            ..
        })
    ));
    assert!(matches!(
        simulate(&create_test_ball(), 0.0, 0.05),
        Err(SimulationError::InvalidParameter {
            name: "drop_altitude",
            ..
        })
    ));
}

#[test]
fn test_scenario_file_drives_simulation() {
    let scenario = ScenarioConfig::from_toml_str(
        r#"
        drop_altitude = 1000.0

        [object]
        mass = 0.04
        diameter = 10.0
        drag_coefficient = 0.44

        [simulation]
        time_step = 0.05
        "#,
    )
    .unwrap();

    let object = scenario.object.build().unwrap();
    let integrator = FallIntegrator::new(scenario.simulation.clone()).unwrap();
    let trajectory = integrator
        .simulate(&object, scenario.drop_altitude, scenario.initial_velocity)
        .unwrap();

    assert_eq!(trajectory, simulate(&object, 1_000.0, 0.05).unwrap());
    assert_relative_eq!(trajectory.falling_time(), 15.55, epsilon = 0.05);
}

#[test]
fn test_batch_sweep_orders_results() {
    let integrator = FallIntegrator::new(SimulationConfig::default()).unwrap();
    let ball = create_test_ball();
    let altitudes = [500.0, 1_000.0, 2_000.0, 4_000.0];

    let times: Vec<f64> = simulate_batch(&integrator, &ball, &altitudes, 0.0)
        .into_iter()
        .map(|result| result.unwrap().falling_time())
        .collect();

    for pair in times.windows(2) {
        assert!(pair[1] > pair[0], "Higher drops should take longer");
    }
}

#[test]
fn test_batch_sweep_keeps_initial_velocity() {
    let integrator = FallIntegrator::new(SimulationConfig::default()).unwrap();
    let ball = create_test_ball();

    let swept = simulate_batch(&integrator, &ball, &[500.0], 30.0)
        .pop()
        .unwrap()
        .unwrap();
    let single = integrator.simulate(&ball, 500.0, 30.0).unwrap();

    assert_eq!(swept, single);
    assert_relative_eq!(swept.falling_time(), 8.0, epsilon = 0.05);
}

#[test]
fn test_peaks_agree_with_latched_flags() {
    println!("INTEGRATION TEST: peak Mach/Reynolds against regime flags");

    let cases = [
        (0.04, 10.0, 0.44, 10_000.0, 0.05),
        (0.04, 10.0, 0.44, 20_000.0, 0.05),
        (1.0, 100.0, 0.47, 20_000.0, 0.1),
        (10.0, 50.0, 0.44, 25_000.0, 0.1),
    ];

    for (mass, diameter, drag, altitude, time_step) in cases {
        let object = FallingObject::new(mass, diameter, drag).unwrap();
        let trajectory = simulate(&object, altitude, time_step).unwrap();

        println!(
            "  - {} m: max Mach {:.3}, max Re {:.0}",
            altitude, trajectory.peak_mach, trajectory.peak_reynolds
        );
        assert_eq!(trajectory.peak_mach > 0.6, trajectory.flags.mach_exceeded);
        assert_eq!(
            trajectory.peak_reynolds > 200_000.0,
            trajectory.flags.reynolds_exceeded
        );
    }

    let reference = simulate(&create_test_ball(), 20_000.0, 0.05).unwrap();
    assert_relative_eq!(reference.peak_mach, 0.8816, epsilon = 1e-3);
}

#[test]
fn test_report_for_reference_drop() {
    let ball = create_test_ball();
    let trajectory = simulate(&ball, 10_000.0, 0.05).unwrap();
    let mut telemetry = Telemetry::from_trajectory(&ball, &trajectory);
    telemetry.sample_table(&trajectory, 10.0).unwrap();

    let lines = telemetry.summary_lines();
    assert!(lines.contains(&"RESULTS:".to_string()));
    assert!(lines
        .iter()
        .any(|line| line.starts_with("Falling time is: ")));
    assert!(lines.contains(&"Max Mach number is 0.556".to_string()));
    // Rows at 0, 10, ..., 70 s plus the impact.
    assert_eq!(telemetry.log.len(), 9);
}

#[test]
fn test_bundled_scenario_matches_defaults() {
    let scenario = ScenarioConfig::load("scenarios/reference_drop.toml")
        .expect("bundled scenario should parse");
    assert_eq!(scenario, ScenarioConfig::default());
}
