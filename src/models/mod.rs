// Models module for data structures
pub mod form_state;
pub mod identity;
pub mod taxonomy;
