// Service module exports

pub mod grid;
pub mod range;
pub mod selection;
pub mod settings;
pub mod slot_index;
pub mod sync;
pub mod transport;
