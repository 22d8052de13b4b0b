use crate::store::mvi::Reducer;

use super::intent::RoutesIntent;
use super::state::RoutesState;

pub struct RoutesReducer;

impl Reducer for RoutesReducer {
    type State = RoutesState;
    type Intent = RoutesIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RoutesIntent::SelectRoute(selected_route) => RoutesState { selected_route },
        }
    }
}
