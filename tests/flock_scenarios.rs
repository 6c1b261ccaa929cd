use nannou::prelude::{pt2, vec2, Point2};
use steering_boids::angle::normalize;
use steering_boids::{Flock, FlockError, SimulationParams, SteeringParams};

fn flock_of(spawns: &[(f32, f32, f32)]) -> Flock {
    Flock::from_spawns(
        spawns.iter().map(|&(x, y, heading)| (pt2(x, y), heading)),
        SteeringParams::default(),
    )
    .expect("valid spawns")
}

fn assert_close(actual: f32, expected: f32, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "{what}: expected {expected}, got {actual}"
    );
}

fn assert_point_close(actual: Point2, expected: Point2, what: &str) {
    assert!(
        actual.distance(expected) < 1e-3,
        "{what}: expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn two_boids_on_the_separation_radius_only_cohere_and_align() {
    // Exactly 20 apart: separation needs strictly closer neighbours
    let mut flock = flock_of(&[(0.0, 200.0, 0.0), (20.0, 200.0, 0.0)]);
    flock.update(1.0).unwrap();

    // Cohesion turns the second boid 60 of 180 degrees, alignment meets at 30
    let step = vec2(30.0_f32.to_radians().cos(), 30.0_f32.to_radians().sin()) * 10.0;
    let boids = flock.boids();
    assert_close(boids[0].heading(), 30.0, "first heading");
    assert_close(boids[1].heading(), 30.0, "second heading");
    assert_point_close(boids[0].position, pt2(0.0, 200.0) + step, "first position");
    assert_point_close(boids[1].position, pt2(20.0, 200.0) + step, "second position");
}

#[test]
fn close_pair_runs_separation_before_cohesion_and_alignment() {
    let mut flock = flock_of(&[(0.0, 200.0, 0.0), (10.0, 200.0, 0.0)]);
    flock.update(1.0).unwrap();

    // Separation: 0 -> 90 and 0 -> 0; cohesion: 90 -> 30 and 0 -> 60; alignment: both 45
    let diagonal = 45.0_f32.to_radians();
    let step = vec2(diagonal.cos(), diagonal.sin()) * 10.0;
    let boids = flock.boids();
    assert_close(boids[0].heading(), 45.0, "first heading");
    assert_close(boids[1].heading(), 45.0, "second heading");
    assert_point_close(boids[0].position, pt2(0.0, 200.0) + step, "first position");
    assert_point_close(boids[1].position, pt2(10.0, 200.0) + step, "second position");
}

#[test]
fn identical_flock_moves_in_lockstep() {
    let mut flock = flock_of(&[(10.1, 200.3, 42.0); 5]);
    let before = flock.boids()[0].position;
    flock.update(0.1).unwrap();

    let first = flock.boids()[0].clone();
    for boid in flock.iter() {
        assert_eq!(boid.heading(), first.heading());
        assert_eq!(boid.position, first.position);
    }

    // Nothing separates, cohesion has no bearing and alignment is already met
    assert_close(first.heading(), 42.0, "heading");
    assert_close(first.position.distance(before), 1.0, "displacement");
}

#[test]
fn update_is_reproducible() {
    let spawns = [
        (0.0, 200.0, 0.0),
        (5.0, 203.0, 17.0),
        (12.0, 190.0, 300.0),
        (40.0, 210.0, 123.0),
    ];
    let mut a = flock_of(&spawns);
    let mut b = flock_of(&spawns);

    for _ in 0..240 {
        a.update(1.0 / 60.0).unwrap();
        b.update(1.0 / 60.0).unwrap();
    }

    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.heading().to_bits(), y.heading().to_bits());
        assert_eq!(x.position.x.to_bits(), y.position.x.to_bits());
        assert_eq!(x.position.y.to_bits(), y.position.y.to_bits());
    }
}

#[test]
fn single_boid_survives_many_ticks() {
    let params = SimulationParams {
        num_boids: 1,
        ..SimulationParams::default()
    };
    let mut flock = Flock::new(&params).unwrap();

    for _ in 0..1000 {
        flock.update(1.0 / 60.0).unwrap();
    }

    let boid = &flock.boids()[0];
    assert!(boid.heading().is_finite());
    assert!(boid.position.is_finite());
    assert_eq!(boid.heading(), 0.0);
    // Summing a thousand small steps drifts a little in f32
    assert!((boid.position.x - 1000.0 * 10.0 / 60.0).abs() < 0.05);
    assert_eq!(boid.position.y, 200.0);
    assert_point_close(flock.centroid(), boid.position, "centroid");
}

#[test]
fn headings_stay_normalized_over_a_run() {
    let mut flock = Flock::new(&SimulationParams::default()).unwrap();

    for _ in 0..600 {
        flock.update(1.0 / 60.0).unwrap();
        for boid in flock.iter() {
            let heading = boid.heading();
            assert!((0.0..360.0).contains(&heading), "heading {heading}");
            assert_eq!(normalize(heading), heading);
        }
    }
}

#[test]
fn headings_never_turn_faster_than_the_combined_budget() {
    let mut flock = Flock::new(&SimulationParams::default()).unwrap();
    let steering = *flock.steering();
    let delta_time = 1.0 / 60.0;
    let budget = (steering.separation_force + steering.cohesion_force + steering.alignment_force) * delta_time;

    for _ in 0..300 {
        let before: Vec<f32> = flock.iter().map(|boid| boid.heading()).collect();
        flock.update(delta_time).unwrap();

        for (boid, previous) in flock.iter().zip(before) {
            let turned = steering_boids::angle::angular_difference(previous, boid.heading()).abs();
            assert!(turned <= budget + 1e-3, "turned {turned} with budget {budget}");
        }
    }
}

#[test]
fn bad_delta_time_is_rejected_without_mutation() {
    let mut flock = flock_of(&[(0.0, 200.0, 0.0), (10.0, 200.0, 90.0)]);
    let before: Vec<_> = flock.iter().map(|boid| (boid.position, boid.heading())).collect();

    for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, -0.5] {
        let err = flock.update(bad).unwrap_err();
        assert!(matches!(err, FlockError::InvalidDeltaTime(_)));
    }

    let after: Vec<_> = flock.iter().map(|boid| (boid.position, boid.heading())).collect();
    assert_eq!(before, after);
}

#[test]
fn large_delta_time_is_not_clamped() {
    let mut flock = flock_of(&[(0.0, 0.0, 0.0)]);
    flock.update(100.0).unwrap();
    assert_point_close(flock.boids()[0].position, pt2(1000.0, 0.0), "position");
}

#[test]
fn rebuilt_flock_restarts_ids() {
    let params = SimulationParams {
        num_boids: 4,
        ..SimulationParams::default()
    };
    let first = Flock::new(&params).unwrap();
    let second = Flock::new(&params).unwrap();

    let ids = |flock: &Flock| flock.iter().map(|boid| boid.id()).collect::<Vec<_>>();
    assert_eq!(ids(&first), ids(&second));
}

#[test]
fn copied_boid_refuses_non_finite_heading() {
    let flock = flock_of(&[(0.0, 200.0, 45.0)]);
    let mut boid = flock.boids()[0].clone();

    assert!(matches!(
        boid.set_heading(f32::NAN),
        Err(FlockError::InvalidHeading(_))
    ));
    assert_eq!(boid.heading(), 45.0);
    assert!(boid.outline().iter().all(|corner| corner.is_finite()));
}
