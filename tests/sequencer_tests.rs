// Host-side tests for the constellation phase sequencer.

#![allow(dead_code)]
mod sim {
    pub mod sequencer {
        include!("../src/core/sequencer.rs");
    }
}

use sim::sequencer::*;

fn fresh() -> PhaseSequencer {
    PhaseSequencer::new(STAR_POINTS.len())
}

#[test]
fn full_sequence_completes_and_phases_advance_once() {
    let mut seq = fresh();
    assert_eq!(seq.phase(), Phase::Constellation);

    let mut prev = None;
    for (step, &node) in DRAW_SEQUENCE.iter().enumerate() {
        assert_eq!(seq.expected_node(), Some(node));
        let outcome = seq.handle_click(node);
        assert_eq!(
            outcome,
            ClickOutcome::Connected {
                from: prev,
                to: node,
                completed: step == DRAW_SEQUENCE.len() - 1,
            }
        );
        prev = Some(node);
    }
    assert!(seq.is_complete());
    assert_eq!(seq.expected_node(), None);
    for node in 0..STAR_POINTS.len() {
        assert!(seq.is_connected(node));
    }

    assert!(seq.begin_transition());
    assert_eq!(seq.phase(), Phase::Transition);
    assert!(!seq.begin_transition());

    assert!(seq.enter_orbit());
    assert_eq!(seq.phase(), Phase::Orbit);
    assert!(!seq.enter_orbit());
}

#[test]
fn out_of_order_click_is_ignored_without_side_effects() {
    let mut seq = fresh();
    assert!(matches!(seq.handle_click(0), ClickOutcome::Connected { .. }));

    // Expected node is now 1; clicking 3 must change nothing.
    assert_eq!(seq.handle_click(3), ClickOutcome::Ignored);
    assert_eq!(seq.current_step(), 1);
    assert!(!seq.is_connected(3));
    assert_eq!(seq.expected_node(), Some(1));
}

#[test]
fn any_node_can_open_the_sequence() {
    let mut seq = fresh();
    assert_eq!(
        seq.handle_click(4),
        ClickOutcome::Connected {
            from: None,
            to: 4,
            completed: false,
        }
    );
    assert_eq!(seq.expected_node(), Some(DRAW_SEQUENCE[1]));
}

#[test]
fn lines_anchor_to_the_previously_confirmed_node() {
    let mut seq = fresh();
    // Open out of order with 4, then continue with the expected node 1.
    seq.handle_click(4);
    assert_eq!(
        seq.handle_click(1),
        ClickOutcome::Connected {
            from: Some(4),
            to: 1,
            completed: false,
        }
    );
}

#[test]
fn clicks_are_ignored_after_completion_and_outside_constellation() {
    let mut seq = fresh();
    for &node in DRAW_SEQUENCE.iter() {
        seq.handle_click(node);
    }
    assert_eq!(seq.handle_click(0), ClickOutcome::Ignored);

    seq.begin_transition();
    assert_eq!(seq.handle_click(1), ClickOutcome::Ignored);
    seq.enter_orbit();
    assert_eq!(seq.handle_click(2), ClickOutcome::Ignored);
}

#[test]
fn phase_advances_require_the_right_preconditions() {
    let mut seq = fresh();
    assert!(!seq.begin_transition(), "transition needs a complete sequence");
    assert!(!seq.enter_orbit(), "orbit needs the transition first");

    seq.handle_click(0);
    assert!(!seq.begin_transition());
}

#[test]
fn out_of_range_node_is_ignored() {
    let mut seq = fresh();
    assert_eq!(seq.handle_click(99), ClickOutcome::Ignored);
    assert_eq!(seq.current_step(), 0);
}

#[test]
fn custom_sequences_are_honoured() {
    let mut seq = PhaseSequencer::with_sequence(3, vec![2, 0, 1]);
    seq.handle_click(2);
    assert_eq!(seq.handle_click(0), ClickOutcome::Connected {
        from: Some(2),
        to: 0,
        completed: false,
    });
    assert_eq!(seq.handle_click(1), ClickOutcome::Connected {
        from: Some(0),
        to: 1,
        completed: true,
    });
}
