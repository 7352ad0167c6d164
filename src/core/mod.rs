pub mod equality;
pub mod format;
pub mod harness;
pub mod solver;
pub mod tolerance;

pub use crate::domain::model::{Equation, RootCount};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
