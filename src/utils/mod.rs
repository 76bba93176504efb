// Shared utilities

pub mod constants;
pub mod date;
pub mod logging;
pub mod messages;
pub mod storage;
pub mod url;
pub mod validation;

pub use constants::*;
pub use date::{Clock, SystemClock};
pub use storage::{BrowserStorage, KeyValueStorage, MemoryStorage};
