pub mod demo;
pub mod policy;
pub mod roster;
pub mod table;

pub use demo::{DealDemo, DemoTurn};
pub use policy::{HeuristicPolicy, Policy, PolicyContext, RandomPolicy};
pub use roster::{BOT_NAMES, Seating};
pub use table::{Table, TableError};
