//! Unit tests for agent records and population transitions.

use epi_core::{Day, Position, SimParams, SimRng};

use crate::{Agent, Population};

fn small_params(n: u32) -> SimParams {
    SimParams {
        population_size: n,
        ..SimParams::default()
    }
}

fn single_agent() -> Population {
    Population::from_agents(vec![Agent::new(Position::new(1.0, 1.0))]).unwrap()
}

#[cfg(test)]
mod health {
    use crate::HealthState;

    #[test]
    fn immobile_states() {
        assert!(HealthState::Hospitalized.is_immobile());
        assert!(HealthState::Dead.is_immobile());
        assert!(!HealthState::Healthy.is_immobile());
        assert!(!HealthState::Infected.is_immobile());
        assert!(!HealthState::Cured.is_immobile());
    }

    #[test]
    fn terminal_states() {
        assert!(HealthState::Cured.is_terminal());
        assert!(HealthState::Dead.is_terminal());
        assert!(!HealthState::Hospitalized.is_terminal());
    }

    #[test]
    fn labels() {
        assert_eq!(HealthState::Healthy.as_str(), "healthy");
        assert_eq!(HealthState::Hospitalized.to_string(), "hospitalized");
    }

    #[test]
    fn default_is_healthy() {
        assert_eq!(HealthState::default(), HealthState::Healthy);
    }
}

#[cfg(test)]
mod generation {
    use super::{small_params, SimParams, SimRng};
    use crate::{HealthState, Occupation, Population};
    use epi_core::{EpiError, WorkforceParams};

    #[test]
    fn generates_requested_count_all_healthy() {
        let params = small_params(50);
        let mut rng = SimRng::new(1);
        let pop = Population::generate(&params, &mut rng).unwrap();
        assert_eq!(pop.len(), 50);
        let bounds = params.bounds();
        for agent in &pop.agents {
            assert_eq!(agent.health, HealthState::Healthy);
            assert_eq!(agent.infected_day, None);
            assert!(bounds.contains(agent.position), "agent outside world");
        }
    }

    #[test]
    fn mover_subset_size() {
        let params = small_params(100); // rate 0.1 → 10 movers
        let mut rng = SimRng::new(2);
        let pop = Population::generate(&params, &mut rng).unwrap();
        let flagged = pop.agents.iter().filter(|a| a.is_mover).count();
        assert_eq!(flagged, 10);
        assert_eq!(pop.active_movers.len(), 10);
        // ascending, since the set is derived by index scan
        assert!(pop.active_movers.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn zero_motion_rate_yields_no_movers() {
        let params = SimParams {
            motion_rate: 0.0,
            ..small_params(40)
        };
        let mut rng = SimRng::new(3);
        let pop = Population::generate(&params, &mut rng).unwrap();
        assert!(pop.agents.iter().all(|a| !a.is_mover));
        assert!(pop.active_movers.is_empty());
    }

    #[test]
    fn occupation_proportions() {
        let params = SimParams {
            workforce: Some(WorkforceParams::default()),
            ..small_params(300)
        };
        let mut rng = SimRng::new(4);
        let pop = Population::generate(&params, &mut rng).unwrap();

        let count = |o: Occupation| {
            pop.agents
                .iter()
                .filter(|a| a.occupation == Some(o))
                .count()
        };
        assert_eq!(count(Occupation::Student), 30);
        assert_eq!(count(Occupation::Working), 210);
        assert_eq!(count(Occupation::Child), 30);
        assert_eq!(count(Occupation::Old), 30);
        assert_eq!(pop.baseline_working_hours, 210 * 40);
        for agent in &pop.agents {
            let expected = if agent.occupation == Some(Occupation::Working) {
                40
            } else {
                0
            };
            assert_eq!(agent.working_hours, expected);
        }
    }

    #[test]
    fn occupation_padding_on_small_population() {
        // floors for 7 agents: student 0, working 4, child 0, old 0 — the
        // 3-slot shortfall falls to the first category
        let params = SimParams {
            workforce: Some(WorkforceParams::default()),
            ..small_params(7)
        };
        let mut rng = SimRng::new(5);
        let pop = Population::generate(&params, &mut rng).unwrap();

        let count = |o: Occupation| {
            pop.agents
                .iter()
                .filter(|a| a.occupation == Some(o))
                .count()
        };
        assert_eq!(count(Occupation::Working), 4);
        assert_eq!(count(Occupation::Student), 3);
        assert_eq!(count(Occupation::Child), 0);
        assert_eq!(count(Occupation::Old), 0);
        assert_eq!(pop.baseline_working_hours, 4 * 40);
    }

    #[test]
    fn rejects_invalid_params() {
        let params = small_params(0);
        let mut rng = SimRng::new(6);
        assert!(matches!(
            Population::generate(&params, &mut rng),
            Err(EpiError::InvalidParameter(_))
        ));
    }

    #[test]
    fn same_seed_same_population() {
        let params = SimParams {
            workforce: Some(WorkforceParams::default()),
            ..small_params(64)
        };
        let a = Population::generate(&params, &mut SimRng::new(7)).unwrap();
        let b = Population::generate(&params, &mut SimRng::new(7)).unwrap();
        assert_eq!(a.agents, b.agents);
        assert_eq!(a.active_movers, b.active_movers);
    }
}

#[cfg(test)]
mod infection {
    use super::{single_agent, small_params, Day, SimParams, SimRng};
    use crate::{Agent, HealthState, Occupation, Population};
    use epi_core::{AgentId, EpiError, Position};

    #[test]
    fn early_attempt_always_lands() {
        // late gate at probability 0 proves the early window skips it
        let params = SimParams {
            late_transmission_prob: 0.0,
            ..small_params(1)
        };
        let mut rng = SimRng::new(1);
        for day in [0u32, 1, 3] {
            let mut pop = single_agent();
            let hit = pop
                .try_infect(&mut rng, &params, Day(day), AgentId(0))
                .unwrap();
            assert!(hit, "attempt on day {day} should land");
            assert_eq!(pop.agents[0].health, HealthState::Infected);
            assert_eq!(pop.agents[0].infected_day, Some(Day(day)));
        }
    }

    #[test]
    fn re_seeding_is_idempotent() {
        let params = small_params(1);
        let mut rng = SimRng::new(2);
        let mut pop = single_agent();
        assert!(pop
            .try_infect(&mut rng, &params, Day::ZERO, AgentId(0))
            .unwrap());
        let again = pop
            .try_infect(&mut rng, &params, Day::ZERO, AgentId(0))
            .unwrap();
        assert!(!again);
        assert_eq!(pop.agents[0].infected_day, Some(Day::ZERO));
    }

    #[test]
    fn late_gate_blocks_at_zero_probability() {
        let params = SimParams {
            late_transmission_prob: 0.0,
            ..small_params(1)
        };
        let mut rng = SimRng::new(3);
        let mut pop = single_agent();
        let hit = pop
            .try_infect(&mut rng, &params, Day(4), AgentId(0))
            .unwrap();
        assert!(!hit);
        assert_eq!(pop.agents[0].health, HealthState::Healthy);
        assert_eq!(pop.agents[0].infected_day, None);
    }

    #[test]
    fn late_gate_passes_at_full_probability() {
        let params = SimParams {
            late_transmission_prob: 1.0,
            ..small_params(1)
        };
        let mut rng = SimRng::new(4);
        let mut pop = single_agent();
        let hit = pop
            .try_infect(&mut rng, &params, Day(40), AgentId(0))
            .unwrap();
        assert!(hit);
        assert_eq!(pop.agents[0].infected_day, Some(Day(40)));
    }

    #[test]
    fn unknown_agent_is_an_error() {
        let params = small_params(1);
        let mut rng = SimRng::new(5);
        let mut pop = single_agent();
        assert!(matches!(
            pop.try_infect(&mut rng, &params, Day::ZERO, AgentId(99)),
            Err(EpiError::AgentNotFound(AgentId(99)))
        ));
    }

    #[test]
    fn infection_zeroes_working_hours() {
        let params = small_params(1);
        let mut rng = SimRng::new(6);
        let mut worker = Agent::new(Position::new(0.0, 0.0));
        worker.occupation = Some(Occupation::Working);
        worker.working_hours = 40;
        let mut pop = Population::from_agents(vec![worker]).unwrap();
        assert_eq!(pop.baseline_working_hours, 40);

        pop.try_infect(&mut rng, &params, Day::ZERO, AgentId(0))
            .unwrap();
        assert_eq!(pop.agents[0].working_hours, 0);
        assert_eq!(pop.total_working_hours(), 0);
        // the baseline keeps the pre-infection figure
        assert_eq!(pop.baseline_working_hours, 40);
    }
}

#[cfg(test)]
mod vitals {
    use super::{single_agent, small_params, Day, SimRng};
    use crate::{Agent, HealthState, Occupation, Population};
    use epi_core::{AgentId, Position};

    fn infected_agent() -> Population {
        let mut pop = single_agent();
        let params = small_params(1);
        let mut rng = SimRng::new(1);
        pop.try_infect(&mut rng, &params, Day::ZERO, AgentId(0))
            .unwrap();
        pop
    }

    #[test]
    fn kill_requires_infected() {
        let mut pop = single_agent();
        assert!(!pop.kill(AgentId(0)));
        assert_eq!(pop.agents[0].health, HealthState::Healthy);

        let mut pop = infected_agent();
        assert!(pop.kill(AgentId(0)));
        assert_eq!(pop.agents[0].health, HealthState::Dead);
    }

    #[test]
    fn no_hospitalized_to_dead_edge() {
        let mut pop = infected_agent();
        assert!(pop.hospitalize(AgentId(0)));
        assert!(!pop.kill(AgentId(0)));
        assert_eq!(pop.agents[0].health, HealthState::Hospitalized);
    }

    #[test]
    fn hospitalize_requires_infected() {
        let mut pop = single_agent();
        assert!(!pop.hospitalize(AgentId(0)));
        assert_eq!(pop.agents[0].health, HealthState::Healthy);
    }

    #[test]
    fn cure_from_infected_and_hospitalized() {
        let mut pop = infected_agent();
        assert!(pop.cure(AgentId(0), 40));
        assert_eq!(pop.agents[0].health, HealthState::Cured);

        let mut pop = infected_agent();
        pop.hospitalize(AgentId(0));
        assert!(pop.cure(AgentId(0), 40));
        assert_eq!(pop.agents[0].health, HealthState::Cured);
    }

    #[test]
    fn cure_restores_hours_for_working_only() {
        let params = small_params(2);
        let mut rng = SimRng::new(2);
        let mut worker = Agent::new(Position::new(0.0, 0.0));
        worker.occupation = Some(Occupation::Working);
        worker.working_hours = 40;
        let mut student = Agent::new(Position::new(5.0, 5.0));
        student.occupation = Some(Occupation::Student);
        let mut pop = Population::from_agents(vec![worker, student]).unwrap();

        for id in [AgentId(0), AgentId(1)] {
            pop.try_infect(&mut rng, &params, Day::ZERO, id).unwrap();
            pop.cure(id, 40);
        }
        assert_eq!(pop.agents[0].working_hours, 40);
        assert_eq!(pop.agents[1].working_hours, 0);
    }

    #[test]
    fn terminal_states_stay() {
        let params = small_params(1);
        let mut rng = SimRng::new(3);

        let mut pop = infected_agent();
        pop.kill(AgentId(0));
        assert!(!pop.cure(AgentId(0), 40));
        assert!(!pop
            .try_infect(&mut rng, &params, Day(1), AgentId(0))
            .unwrap());
        assert_eq!(pop.agents[0].health, HealthState::Dead);

        let mut pop = infected_agent();
        pop.cure(AgentId(0), 40);
        assert!(!pop
            .try_infect(&mut rng, &params, Day(1), AgentId(0))
            .unwrap());
        assert_eq!(pop.agents[0].health, HealthState::Cured);
        // cure never re-stamps the infection day
        assert_eq!(pop.agents[0].infected_day, Some(Day::ZERO));
    }

    #[test]
    fn count_and_listing_helpers() {
        let mut pop = infected_agent();
        assert_eq!(pop.count_state(HealthState::Infected), 1);
        assert_eq!(pop.in_state(HealthState::Infected), vec![AgentId(0)]);
        pop.hospitalize(AgentId(0));
        assert_eq!(pop.count_state(HealthState::Infected), 0);
        assert_eq!(pop.count_state(HealthState::Hospitalized), 1);
    }
}

#[cfg(test)]
mod movers {
    use super::{small_params, Day, SimRng};
    use crate::{Agent, HealthState, Population};
    use epi_core::{AgentId, EpiError, Position};

    fn mover_at(x: f64, y: f64) -> Agent {
        let mut agent = Agent::new(Position::new(x, y));
        agent.is_mover = true;
        agent
    }

    #[test]
    fn retirement_is_permanent() {
        let params = small_params(1);
        let mut rng = SimRng::new(1);
        let mut pop = Population::from_agents(vec![mover_at(1.0, 1.0)]).unwrap();
        assert_eq!(pop.active_movers, vec![AgentId(0)]);

        pop.try_infect(&mut rng, &params, Day::ZERO, AgentId(0))
            .unwrap();
        pop.hospitalize(AgentId(0));
        pop.retire_immobile_movers();
        assert!(pop.active_movers.is_empty());

        // a later cure does not re-admit the mover
        pop.cure(AgentId(0), 0);
        pop.retire_immobile_movers();
        assert!(pop.active_movers.is_empty());
        assert!(pop.agents[0].is_mover, "the flag itself is untouched");
    }

    #[test]
    fn from_agents_skips_already_immobile_movers() {
        let mut hospitalized = mover_at(2.0, 2.0);
        hospitalized.health = HealthState::Hospitalized;
        let pop =
            Population::from_agents(vec![mover_at(1.0, 1.0), hospitalized, mover_at(3.0, 3.0)])
                .unwrap();
        assert_eq!(pop.active_movers, vec![AgentId(0), AgentId(2)]);
    }

    #[test]
    fn from_agents_rejects_empty() {
        assert!(matches!(
            Population::from_agents(Vec::new()),
            Err(EpiError::InvalidParameter(_))
        ));
    }
}
