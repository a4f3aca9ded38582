use color_eyre::eyre::eyre;
use std::{cell::RefCell, rc::Rc};

use crate::{
    config::Config,
    store::{effect::Effect, reducer::StoreReducer, state::State},
};

use super::*;

fn setup() -> Store {
    Store::new(State::default(), StoreReducer::boxed())
}

#[test]
fn test_new() {
    let store = setup();
    let state = store.get_state();
    assert!(state.tasks.is_empty());
    assert!(state.error.is_none());
}

#[test]
fn test_dispatch_updates_state() {
    let store = setup();

    store.dispatch(Action::SubmitText("Buy milk".to_string()));

    let state = store.get_state();
    assert_eq!(state.tasks.len(), 1);
    assert_eq!(state.tasks.items()[0].name, "Buy milk");
}

#[test]
fn test_previous_state_snapshot_is_unchanged() {
    let store = setup();
    let before = store.get_state();

    store.dispatch(Action::SubmitText("Buy milk".to_string()));

    assert!(before.tasks.is_empty());
    assert_eq!(store.get_state().tasks.len(), 1);
}

#[test]
fn test_dispatch_passes_action_to_reducer() {
    let mut reducer = MockReducer::new();
    reducer
        .expect_reduce()
        .withf(|_, action| *action == Action::CancelEditing)
        .times(1)
        .returning(|_, _| Effect::None);

    let store = Store::new(State::default(), Box::new(reducer));
    store.dispatch(Action::CancelEditing);
}

#[test]
fn test_effect_handler_receives_effects() {
    let mut store = setup();
    let received = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&received);

    store.set_effect_handler(move |effect| {
        sink.borrow_mut().push(effect);
        Ok(())
    });

    let config = Config {
        theme: "Indigo".to_string(),
        ..Config::default()
    };

    store.dispatch(Action::SubmitText("Buy milk".to_string()));
    store.dispatch(Action::UpdateConfig(config.clone()));

    assert_eq!(*received.borrow(), vec![Effect::SaveConfig(config)]);
    assert!(store.get_state().error.is_none());
}

#[test]
fn test_failed_effect_sets_error() {
    let mut store = setup();
    store.set_effect_handler(|_| Err(eyre!("disk full")));

    store.dispatch(Action::UpdateConfig(Config::default()));

    assert_eq!(store.get_state().error, Some("disk full".to_string()));
}

#[test]
fn test_effects_ignored_without_handler() {
    let store = setup();

    store.dispatch(Action::UpdateConfig(Config::default()));

    assert!(store.get_state().error.is_none());
}
