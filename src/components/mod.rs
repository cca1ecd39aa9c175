pub mod app;
pub mod virtual_cursor;
