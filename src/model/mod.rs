mod command;
mod ids;
mod tab;

pub use self::command::{ACTIVATE_TAB, Command, GET_TABS, ResultChunk, SWITCH_TAB};
pub use self::ids::TabRef;
pub use self::tab::{Tab, sort_by_recency};

#[cfg(test)]
#[path = "../tests/model/model_tests.rs"]
mod tests;
