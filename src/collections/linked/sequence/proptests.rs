// proptest doesn't run under miri with default config
#![cfg(all(not(miri), test))]

use std::collections::VecDeque;

use proptest::prelude::*;
use proptest::test_runner::Config;
use proptest_state_machine::{ReferenceStateMachine, StateMachineTest};

use super::*;
use crate::collections::linked::CursorMut;

proptest_state_machine::prop_state_machine! {
    #![proptest_config(Config {
        failure_persistence: None,
        .. Config::default()
    })]

    #[test]
    fn linked_sequence_state_machine_test(sequential 1..200 => LinkedSequenceTest);
}

/// Operations applied to both the model and the sequence. Indices count from the before-begin
/// position, so `InsertAfter(0, _)` inserts at the front.
#[derive(Clone, Debug)]
pub enum Transition {
    PushFront(u32),
    PushBack(u32),
    PopFront,
    InsertAfter(usize, u32),
    EraseAfter(usize),
    Clear,
    CloneAndSwap,
}

pub struct SequenceModel;

impl ReferenceStateMachine for SequenceModel {
    type State = VecDeque<u32>;
    type Transition = Transition;

    fn init_state() -> BoxedStrategy<Self::State> {
        prop::collection::vec_deque(any::<u32>(), 0..8).boxed()
    }

    fn transitions(state: &Self::State) -> BoxedStrategy<Self::Transition> {
        let len = state.len();
        let growing = prop_oneof![
            3 => any::<u32>().prop_map(Transition::PushFront),
            3 => any::<u32>().prop_map(Transition::PushBack),
            2 => Just(Transition::PopFront),
            4 => (0..=len, any::<u32>()).prop_map(|(i, v)| Transition::InsertAfter(i, v)),
            1 => Just(Transition::CloneAndSwap),
        ];

        if len == 0 {
            growing.boxed()
        } else {
            prop_oneof![
                12 => growing,
                3 => (0..len).prop_map(Transition::EraseAfter),
                1 => Just(Transition::Clear),
            ]
            .boxed()
        }
    }

    fn preconditions(state: &Self::State, transition: &Self::Transition) -> bool {
        match transition {
            Transition::InsertAfter(index, _) => *index <= state.len(),
            Transition::EraseAfter(index) => *index < state.len(),
            _ => true,
        }
    }

    fn apply(mut state: Self::State, transition: &Self::Transition) -> Self::State {
        match transition {
            Transition::PushFront(value) => state.push_front(*value),
            Transition::PushBack(value) => state.push_back(*value),
            Transition::PopFront => {
                state.pop_front();
            },
            Transition::InsertAfter(index, value) => state.insert(*index, *value),
            Transition::EraseAfter(index) => {
                state.remove(*index);
            },
            Transition::Clear => state.clear(),
            Transition::CloneAndSwap => {},
        }
        state
    }
}

pub struct LinkedSequenceTest;

fn position(list: &mut LinkedSequence<u32>, index: usize) -> CursorMut<u32> {
    let mut cursor = list.before_begin();
    for _ in 0..index {
        // SAFETY: Preconditions keep index within the sequence, which isn't modified here.
        unsafe { cursor.advance(); }
    }
    cursor
}

impl StateMachineTest for LinkedSequenceTest {
    type SystemUnderTest = LinkedSequence<u32>;
    type Reference = SequenceModel;

    fn init_test(
        ref_state: &<Self::Reference as ReferenceStateMachine>::State,
    ) -> Self::SystemUnderTest {
        ref_state.iter().copied().collect()
    }

    fn apply(
        mut state: Self::SystemUnderTest,
        _ref_state: &<Self::Reference as ReferenceStateMachine>::State,
        transition: Transition,
    ) -> Self::SystemUnderTest {
        match transition {
            Transition::PushFront(value) => state.push_front(value),
            Transition::PushBack(value) => state.push_back(value),
            Transition::PopFront => {
                state.pop_front();
            },
            Transition::InsertAfter(index, value) => {
                let pos = position(&mut state, index);
                // SAFETY: pos was just taken from state.
                let inserted = unsafe { state.insert_after(pos, value) };
                // SAFETY: inserted points to the node that was just created.
                assert_eq!(unsafe { *inserted.get() }, value);
            },
            Transition::EraseAfter(index) => {
                let pos = position(&mut state, index);
                // SAFETY: pos was just taken from state.
                unsafe { state.erase_after(pos); }
            },
            Transition::Clear => state.clear(),
            Transition::CloneAndSwap => {
                let mut copy = state.clone();
                state.swap(&mut copy);
                assert_eq!(state, copy, "A clone should equal its source.");
            },
        }
        state
    }

    fn check_invariants(
        state: &Self::SystemUnderTest,
        ref_state: &<Self::Reference as ReferenceStateMachine>::State,
    ) {
        assert_eq!(state.len(), ref_state.len());
        assert!(state.iter().eq(ref_state.iter()));
        state.verify_len();
    }
}
