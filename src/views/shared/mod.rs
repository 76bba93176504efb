mod navbar;

pub use navbar::*;
