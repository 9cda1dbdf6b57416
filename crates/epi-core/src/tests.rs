//! Unit tests for epi-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn usize_index_round_trips() {
        let id = AgentId(13);
        assert_eq!(id.index(), 13);
        assert_eq!(AgentId::try_from(13usize).unwrap(), id);
    }

    #[test]
    fn orders_by_raw_value() {
        assert!(AgentId(0) < AgentId(1));
        assert!(AgentId(200) > AgentId(199));
    }

    #[test]
    fn default_is_the_invalid_sentinel() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
    }

    #[test]
    fn display_shows_the_raw_id() {
        assert_eq!(AgentId(21).to_string(), "AgentId(21)");
    }
}

#[cfg(test)]
mod grid {
    use crate::{Position, WorldBounds};

    #[test]
    fn euclidean_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert!((a.distance_squared(b) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn zero_distance() {
        let p = Position::new(12.5, 7.25);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn wrap_at_exact_limit() {
        let bounds = WorldBounds::new(30.0, 30.0);
        let p = Position::new(29.0, 10.0);
        let moved = p.offset_wrapped(1.0, 0.0, bounds);
        assert_eq!(moved.x, 0.0);
        assert_eq!(moved.y, 10.0);
    }

    #[test]
    fn wrap_keeps_overshoot_remainder() {
        let bounds = WorldBounds::new(30.0, 30.0);
        let moved = Position::new(28.0, 29.5).offset_wrapped(4.5, 3.0, bounds);
        assert!((moved.x - 2.5).abs() < 1e-12);
        assert!((moved.y - 2.5).abs() < 1e-12);
        assert!(bounds.contains(moved));
    }

    #[test]
    fn wrap_handles_negative_offsets() {
        let bounds = WorldBounds::new(30.0, 30.0);
        let moved = Position::new(1.0, 1.0).offset_wrapped(-2.0, -3.0, bounds);
        assert!((moved.x - 29.0).abs() < 1e-12);
        assert!((moved.y - 28.0).abs() < 1e-12);
    }

    #[test]
    fn bounds_contains_is_half_open() {
        let bounds = WorldBounds::new(30.0, 30.0);
        assert!(bounds.contains(Position::new(0.0, 0.0)));
        assert!(bounds.contains(Position::new(29.999, 29.999)));
        assert!(!bounds.contains(Position::new(30.0, 0.0)));
        assert!(!bounds.contains(Position::new(0.0, 30.0)));
    }
}

#[cfg(test)]
mod time {
    use crate::Day;

    #[test]
    fn day_arithmetic() {
        let d = Day(10);
        assert_eq!(d + 5, Day(15));
        assert_eq!(d.next(), Day(11));
        assert_eq!(Day(15) - Day(10), 5u32);
        assert_eq!(Day(15).since(Day(4)), 11);
    }

    #[test]
    fn ordering() {
        assert!(Day::ZERO < Day(1));
        assert_eq!(Day::default(), Day::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(Day(37).to_string(), "day 37");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_replays_the_stream() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..64 {
            let a: f64 = r1.gen_range(0.0..1.0);
            let b: f64 = r2.gen_range(0.0..1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn draws_stay_inside_the_range() {
        let mut rng = SimRng::new(0);
        for _ in 0..500 {
            let v = rng.gen_range(1.0f64..10.0);
            assert!((1.0..10.0).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes_and_clamp() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        // out-of-range probabilities clamp instead of panicking
        assert!(rng.gen_bool(1.5));
        assert!(!rng.gen_bool(-0.3));
    }

    #[test]
    fn sample_indices_distinct_and_in_range() {
        let mut rng = SimRng::new(7);
        let mut picked = rng.sample_indices(50, 10);
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 10);
        assert!(picked.iter().all(|&i| i < 50));
    }

    #[test]
    fn sample_indices_full_range() {
        let mut rng = SimRng::new(7);
        let mut picked = rng.sample_indices(8, 8);
        picked.sort_unstable();
        assert_eq!(picked, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_preserves_elements() {
        let mut rng = SimRng::new(99);
        let mut v: Vec<u32> = (0..32).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..32).collect::<Vec<_>>());
    }
}

#[cfg(test)]
mod params {
    use crate::{EpiError, SimParams, WorkforceParams};

    #[test]
    fn defaults_validate() {
        SimParams::default().validate().unwrap();
    }

    #[test]
    fn rejects_empty_population() {
        let params = SimParams {
            population_size: 0,
            ..SimParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(EpiError::InvalidParameter(msg)) if msg.contains("population_size")
        ));
    }

    #[test]
    fn rejects_degenerate_world() {
        let params = SimParams {
            x_limit: 0,
            ..SimParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_bad_dist_limit() {
        for bad in [0.0, -1.5, f64::NAN, f64::INFINITY] {
            let params = SimParams {
                dist_limit: bad,
                ..SimParams::default()
            };
            assert!(params.validate().is_err(), "dist_limit {bad} accepted");
        }
    }

    #[test]
    fn rejects_out_of_range_fractions() {
        let params = SimParams {
            motion_rate: 1.2,
            ..SimParams::default()
        };
        assert!(params.validate().is_err());

        let params = SimParams {
            kill_prob: -0.01,
            ..SimParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_oversubscribed_workforce() {
        let params = SimParams {
            workforce: Some(WorkforceParams {
                working: 0.9,
                ..WorkforceParams::default()
            }),
            ..SimParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn default_workforce_mix_validates() {
        // 0.1 + 0.7 + 0.1 + 0.1 must survive float summation
        WorkforceParams::default().validate().unwrap();
    }

    #[test]
    fn mover_count_zero_rate_means_none() {
        let params = SimParams {
            motion_rate: 0.0,
            ..SimParams::default()
        };
        assert_eq!(params.mover_count(), 0);
    }

    #[test]
    fn mover_count_applies_minimum() {
        // floor(100 * 0.01) = 1, lifted to the minimum of 5
        let params = SimParams {
            population_size: 100,
            motion_rate: 0.01,
            ..SimParams::default()
        };
        assert_eq!(params.mover_count(), 5);
    }

    #[test]
    fn mover_count_clamps_to_tiny_populations() {
        let params = SimParams {
            population_size: 3,
            motion_rate: 0.5,
            ..SimParams::default()
        };
        assert_eq!(params.mover_count(), 3);
    }

    #[test]
    fn mover_count_default_rate() {
        let params = SimParams::default(); // 300 agents at 0.1
        assert_eq!(params.mover_count(), 30);
    }

    #[test]
    fn simulation_label_falls_back_to_seed() {
        let params = SimParams {
            seed: 0xbeef,
            ..SimParams::default()
        };
        assert_eq!(params.simulation_label(), "sim-0000beef");

        let params = SimParams {
            simulation_id: "trial-7".into(),
            ..SimParams::default()
        };
        assert_eq!(params.simulation_label(), "trial-7");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let params: SimParams =
            serde_json::from_str(r#"{"population_size": 50, "seed": 9}"#).unwrap();
        assert_eq!(params.population_size, 50);
        assert_eq!(params.seed, 9);
        assert_eq!(params.x_limit, 30);
        assert_eq!(params.day_cap, 100);
        assert!(params.workforce.is_none());
    }

    #[test]
    fn workforce_json_roundtrip() {
        let params = SimParams {
            workforce: Some(WorkforceParams::default()),
            ..SimParams::default()
        };
        let text = serde_json::to_string(&params).unwrap();
        let back: SimParams = serde_json::from_str(&text).unwrap();
        assert_eq!(back, params);
    }
}
