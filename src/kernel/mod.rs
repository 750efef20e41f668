//! Headless browser core (state/action/effect).

pub mod action;
pub mod effect;
pub mod selection;
pub mod state;
pub mod store;

pub use action::{Action, Modifiers};
pub use effect::Effect;
pub use selection::{
    entries_includes, entries_index_of, ids_of_entries_to_move, is_descendant_of,
    new_selection_from_shift_click, ordered_entries, ordered_ids, shift_click_range,
    validate_move_target, Identified, MissingEndpointPolicy, OrderedEntries, SelectionError,
};
pub use state::{AppState, ExpandedNodes, SelectionState};
pub use store::{DispatchResult, Store};
