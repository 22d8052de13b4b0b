mod common;

use busstops::{StopsIntent, StopsState, StopsStore};
use common::stop;

#[test]
fn select_stop_on_empty_state() {
    let store = StopsStore::default();
    assert_eq!(store.state(), StopsState::default());

    store.dispatch(StopsIntent::SelectStop(Some("42".into())));

    assert_eq!(store.state().selected_stop.as_deref(), Some("42"));
}

#[test]
fn search_text_filters_by_full_name() {
    let store = StopsStore::default();
    store.dispatch(StopsIntent::LoadBusStops(vec![
        stop("1", "West Station"),
        stop("2", "Heuston Station"),
    ]));
    store.dispatch(StopsIntent::FilterStopsByText("West".into()));

    let ids: Vec<String> = store.read(|state| {
        state.filtered_stops().iter().map(|s| s.stopid.clone()).collect()
    });
    assert_eq!(ids, vec!["1"]);
}

#[test]
fn search_text_matches_localized_names() {
    let store = StopsStore::default();
    store.dispatch(StopsIntent::LoadBusStops(vec![
        stop("1", "Heuston"),
        stop("2", "Eden Quay"),
    ]));
    store.dispatch(StopsIntent::FilterStopsByText("(ga)".into()));

    assert_eq!(store.read(|state| state.filtered_stops().len()), 2);
}

#[test]
fn clearing_search_text_restores_all_stops() {
    let store = StopsStore::default();
    store.dispatch(StopsIntent::LoadBusStops(vec![stop("1", "A"), stop("2", "B")]));
    store.dispatch(StopsIntent::FilterStopsByText("A".into()));
    assert_eq!(store.read(|state| state.filtered_stops().len()), 1);

    store.dispatch(StopsIntent::FilterStopsByText(String::new()));
    assert_eq!(store.read(|state| state.filtered_stops().len()), 2);
}

#[test]
fn selected_stop_follows_reloaded_list() {
    let store = StopsStore::default();
    store.dispatch(StopsIntent::SelectStop(Some("2".into())));
    assert!(store.read(|state| state.selected_stop_data().is_none()));

    store.dispatch(StopsIntent::LoadBusStops(vec![stop("1", "A"), stop("2", "B")]));
    let name = store.read(|state| state.selected_stop_data().map(|s| s.fullname.clone()));
    assert_eq!(name.as_deref(), Some("B"));

    store.dispatch(StopsIntent::LoadBusStops(vec![stop("3", "C")]));
    assert!(store.read(|state| state.selected_stop_data().is_none()));
}
