mod login_view;

pub use login_view::*;
