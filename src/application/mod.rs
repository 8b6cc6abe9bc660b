pub mod collection;
pub mod compose;
pub mod cursor;
pub mod expansion;
pub mod idle_fill;
pub mod layout;
pub mod view_session;
