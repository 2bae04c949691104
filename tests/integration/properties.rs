//! Property-based invariants over randomly assembled models.
//!
//! Models are generated as plain data (domain choices, relation specs,
//! initial assignments) and assembled inside each case, so shrinking
//! works over the raw inputs.

use std::collections::HashSet;

use proptest::prelude::*;

use envision_engine::{Generator, State, StateBuilder};
use envision_foundation::{DerivativeSign, Domain, Magnitude};
use envision_model::{CausalModel, RelationKind};

const QUANTITIES: usize = 3;

fn domain() -> impl Strategy<Value = Domain> {
    prop_oneof![Just(Domain::ZeroPositive), Just(Domain::ZeroPositiveMax)]
}

fn relation_kind() -> impl Strategy<Value = RelationKind> {
    prop_oneof![
        Just(RelationKind::InfluencePositive),
        Just(RelationKind::InfluenceNegative),
        Just(RelationKind::ProportionalPositive),
        Just(RelationKind::ProportionalNegative),
    ]
}

/// The raw ingredients of one generated scenario.
#[derive(Clone, Debug)]
struct Scenario {
    domains: Vec<Domain>,
    exogenous: Vec<bool>,
    relations: Vec<(usize, RelationKind, usize)>,
    initial: Vec<(u8, i8)>,
}

fn scenario() -> impl Strategy<Value = Scenario> {
    (
        prop::collection::vec(domain(), QUANTITIES),
        prop::collection::vec(any::<bool>(), QUANTITIES),
        prop::collection::vec(
            (0..QUANTITIES, relation_kind(), 0..QUANTITIES),
            0..=4,
        ),
        prop::collection::vec((0..3u8, -1..=1i8), QUANTITIES),
    )
        .prop_map(|(domains, exogenous, relations, initial)| Scenario {
            domains,
            exogenous,
            relations,
            initial,
        })
}

/// Assembles a model and initial state from raw scenario data. Relation
/// specs with `source == target` are skipped, and initial assignments are
/// clamped into the quantity's domain.
fn assemble(scenario: &Scenario) -> (CausalModel, State) {
    let mut model = CausalModel::new("generated");
    let entity = model.add_entity("system");
    let mut ids = Vec::with_capacity(QUANTITIES);
    for (i, &domain) in scenario.domains.iter().enumerate() {
        let id = model
            .add_quantity(entity, &format!("q{i}"), domain)
            .unwrap();
        ids.push(id);
    }
    for (i, &exo) in scenario.exogenous.iter().enumerate() {
        if exo {
            model.mark_exogenous(ids[i]).unwrap();
        }
    }
    for &(source, kind, target) in &scenario.relations {
        if source == target {
            continue;
        }
        model.add_relation(ids[source], kind, ids[target]).unwrap();
    }

    let mut builder = StateBuilder::new(&model);
    for (i, &(raw_magnitude, raw_sign)) in scenario.initial.iter().enumerate() {
        let domain = scenario.domains[i];
        let index = raw_magnitude.min(domain.maximum().index());
        let magnitude = Magnitude::from_index(index).unwrap();
        let derivative = DerivativeSign::from_i8(raw_sign).unwrap();
        builder.set(ids[i], magnitude, derivative).unwrap();
    }
    let initial = builder.build().unwrap();
    (model, initial)
}

proptest! {
    #[test]
    fn every_generated_magnitude_stays_in_its_domain(s in scenario()) {
        let (model, initial) = assemble(&s);
        let graph = Generator::new(&model).generate(&initial).unwrap();

        for state in graph.states() {
            for (id, pair) in state.iter() {
                let domain = model.quantity(id).unwrap().domain();
                prop_assert!(domain.contains(pair.magnitude));
            }
        }
    }

    #[test]
    fn graphs_have_no_self_edges(s in scenario()) {
        let (model, initial) = assemble(&s);
        let graph = Generator::new(&model).generate(&initial).unwrap();

        for (from, to) in graph.edges() {
            prop_assert_ne!(from, to);
        }
    }

    #[test]
    fn edge_endpoints_are_recorded_states(s in scenario()) {
        let (model, initial) = assemble(&s);
        let graph = Generator::new(&model).generate(&initial).unwrap();

        for (from, to) in graph.edges() {
            prop_assert!(graph.contains_state(from));
            prop_assert!(graph.contains_state(to));
        }
    }

    #[test]
    fn state_count_stays_within_the_combinatorial_bound(s in scenario()) {
        let (model, initial) = assemble(&s);
        let graph = Generator::new(&model).generate(&initial).unwrap();

        let bound: usize = s.domains.iter().map(|d| d.len() * 3).product();
        prop_assert!(graph.state_count() >= 1);
        prop_assert!(graph.state_count() <= bound);
    }

    #[test]
    fn boundary_derivatives_are_pinned(s in scenario()) {
        // Generated states never point a derivative past the extreme the
        // value already sits on. The caller-supplied root is exempt.
        let (model, initial) = assemble(&s);
        let graph = Generator::new(&model).generate(&initial).unwrap();

        for state in graph.states() {
            if state == &initial {
                continue;
            }
            for (id, pair) in state.iter() {
                let domain = model.quantity(id).unwrap().domain();
                if pair.magnitude == domain.minimum() {
                    prop_assert_ne!(pair.derivative, DerivativeSign::Negative);
                }
                if pair.magnitude == domain.maximum() {
                    prop_assert_ne!(pair.derivative, DerivativeSign::Positive);
                }
            }
        }
    }

    #[test]
    fn generation_is_deterministic_across_runs(s in scenario()) {
        let (model, initial) = assemble(&s);
        let first = Generator::new(&model).generate(&initial).unwrap();
        let second = Generator::new(&model).generate(&initial).unwrap();

        let first_states: HashSet<State> = first.states().cloned().collect();
        let second_states: HashSet<State> = second.states().cloned().collect();
        prop_assert_eq!(first_states, second_states);

        let first_edges: HashSet<(State, State)> = first.edges().cloned().collect();
        let second_edges: HashSet<(State, State)> = second.edges().cloned().collect();
        prop_assert_eq!(first_edges, second_edges);
    }
}
