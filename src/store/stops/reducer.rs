use crate::store::mvi::Reducer;

use super::intent::StopsIntent;
use super::state::StopsState;

pub struct StopsReducer;

impl Reducer for StopsReducer {
    type State = StopsState;
    type Intent = StopsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StopsIntent::LoadBusStops(stops) => StopsState { stops, ..state },
            StopsIntent::SelectStop(selected_stop) => StopsState {
                selected_stop,
                ..state
            },
            StopsIntent::FilterStopsByText(search_text) => StopsState {
                search_text,
                ..state
            },
        }
    }
}
