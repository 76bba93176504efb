mod date_navigator;
mod home_view;
mod reservation_table;

pub use date_navigator::*;
pub use home_view::*;
pub use reservation_table::*;
