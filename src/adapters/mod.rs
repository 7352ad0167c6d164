// Adapters layer: text parsing and filesystem access around the solver core.

pub mod input;
pub mod storage;

pub use storage::LocalStorage;
