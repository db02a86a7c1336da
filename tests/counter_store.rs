use chrono::NaiveDate;
use slicebank::app::counter_store;
use slicebank::features::account;
use slicebank::features::counter::{self, CounterReducer, CounterState};
use slicebank::money::Money;
use slicebank::store::{Action, Dispatched, StoreError};

#[test]
fn test_step_increment_reset_scenario() {
    let store = counter_store(CounterState::default()).unwrap();

    store.dispatch(counter::set_step(3)).unwrap();
    store.dispatch(counter::increment()).unwrap();
    store.dispatch(counter::increment()).unwrap();
    let state = store.get_state().slice::<CounterReducer>().unwrap();
    assert_eq!(state.count, 6);
    assert_eq!(state.step, 3);

    store.dispatch(counter::reset()).unwrap();
    assert_eq!(
        *store.get_state().slice::<CounterReducer>().unwrap(),
        CounterState { step: 1, count: 0 }
    );
}

#[test]
fn test_decrement_goes_negative() {
    let store = counter_store(CounterState { step: 2, count: 1 }).unwrap();
    store.dispatch(counter::decrement()).unwrap();
    assert_eq!(store.get_state().slice::<CounterReducer>().unwrap().count, -1);
}

#[test]
fn test_unknown_counter_event_is_rejected() {
    let store = counter_store(CounterState::default()).unwrap();
    let before = store.get_state();

    let err = store
        .dispatch(Action::new("counter/bogus", None).unwrap())
        .unwrap_err();

    assert_eq!(
        err,
        StoreError::UnknownAction {
            namespace: "counter".to_string(),
            action_type: "counter/bogus".to_string(),
        }
    );
    assert!(store.get_state().ptr_eq(&before));
}

#[test]
fn test_foreign_action_is_a_noop() {
    let store = counter_store(CounterState::default()).unwrap();
    let outcome = store.dispatch(account::deposit(Money::from_major(1))).unwrap();
    assert!(matches!(outcome, Dispatched::Reduced { changed: false }));
}

#[test]
fn test_date_follows_count() {
    let store = counter_store(CounterState { step: 7, count: 0 }).unwrap();
    store.dispatch(counter::increment()).unwrap();

    let base = NaiveDate::from_ymd_opt(2027, 6, 21).unwrap();
    let state = store.get_state().slice::<CounterReducer>().unwrap();
    assert_eq!(
        state.date_from(base),
        NaiveDate::from_ymd_opt(2027, 6, 28)
    );
}
