//! Integration tests for behavior-graph generation.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use envision_engine::{Generator, State, StateBuilder};
use envision_foundation::{DerivativeSign, Domain, ErrorKind, Magnitude};
use envision_model::{CausalModel, RelationKind};

fn tap_model() -> CausalModel {
    let mut model = CausalModel::new("tap");
    let tap = model.add_entity("tap");
    let source = model
        .add_quantity(tap, "source", Domain::ZeroPositive)
        .unwrap();
    let level = model
        .add_quantity(tap, "level", Domain::ZeroPositiveMax)
        .unwrap();
    model.mark_exogenous(source).unwrap();
    model
        .add_relation(source, RelationKind::InfluencePositive, level)
        .unwrap();
    model
}

fn tap_initial(model: &CausalModel) -> State {
    let mut builder = StateBuilder::new(model);
    builder
        .set_by_name("source", Magnitude::Positive, DerivativeSign::Steady)
        .unwrap();
    builder
        .set_by_name("level", Magnitude::Zero, DerivativeSign::Steady)
        .unwrap();
    builder.build().unwrap()
}

#[test]
fn exploration_terminates_within_the_state_bound() {
    let model = tap_model();
    let graph = Generator::new(&model).generate(&tap_initial(&model)).unwrap();

    // (2 values x 3 signs) x (3 values x 3 signs) upper bound.
    assert!(graph.state_count() <= 6 * 9);
    assert!(graph.state_count() >= 1);
}

#[test]
fn every_reachable_state_is_expanded() {
    // Each state's successor set must be reflected in the edge set: no
    // frontier state is left unexpanded at termination.
    let model = tap_model();
    let graph = Generator::new(&model).generate(&tap_initial(&model)).unwrap();

    for state in graph.states() {
        let succs = envision_engine::successors(&model, state).unwrap();
        for succ in succs {
            assert!(graph.contains_edge(state, &succ));
            assert!(graph.contains_state(&succ));
        }
    }
}

#[test]
fn generation_is_deterministic() {
    let model = tap_model();
    let initial = tap_initial(&model);

    let first = Generator::new(&model).generate(&initial).unwrap();
    let second = Generator::new(&model).generate(&initial).unwrap();

    let first_states: HashSet<State> = first.states().cloned().collect();
    let second_states: HashSet<State> = second.states().cloned().collect();
    assert_eq!(first_states, second_states);

    let first_edges: HashSet<(State, State)> = first.edges().cloned().collect();
    let second_edges: HashSet<(State, State)> = second.edges().cloned().collect();
    assert_eq!(first_edges, second_edges);
}

#[test]
fn quiescent_model_yields_terminal_states() {
    // With the source shut off and nothing moving, the only branching
    // left is the source's own exogenous derivative.
    let mut model = CausalModel::new("still");
    let e = model.add_entity("e");
    model.add_quantity(e, "q", Domain::ZeroPositive).unwrap();

    let mut builder = StateBuilder::new(&model);
    builder
        .set_by_name("q", Magnitude::Zero, DerivativeSign::Steady)
        .unwrap();
    let initial = builder.build().unwrap();

    let graph = Generator::new(&model).generate(&initial).unwrap();

    // A single endogenous steady quantity never moves.
    assert_eq!(graph.state_count(), 1);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn cancellation_flag_aborts_generation() {
    let model = tap_model();
    let flag = Arc::new(AtomicBool::new(true));

    let err = Generator::new(&model)
        .with_cancel_flag(Arc::clone(&flag))
        .generate(&tap_initial(&model))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Cancelled { .. }));
}

#[test]
fn root_convenience_wrapper_matches_generator() {
    let model = tap_model();
    let initial = tap_initial(&model);

    let via_wrapper = envision::generate_states(&model, &initial).unwrap();
    let via_generator = Generator::new(&model).generate(&initial).unwrap();

    assert_eq!(via_wrapper.state_count(), via_generator.state_count());
    assert_eq!(via_wrapper.edge_count(), via_generator.edge_count());
}
