//! Routes slice: holds the selected route.
//!
//! The stops loader reads it through [`RouteResolver`] when no route is
//! passed explicitly.

mod intent;
mod reducer;
mod state;

pub use intent::RoutesIntent;
pub use reducer::RoutesReducer;
pub use state::RoutesState;

use crate::store::container::Store;
use crate::store::stops::RouteResolver;

pub type RoutesStore = Store<RoutesReducer>;

impl RouteResolver for RoutesStore {
    fn selected_route(&self) -> Option<String> {
        self.read(|state| state.selected_route.clone())
    }
}
