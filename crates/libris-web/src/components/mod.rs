pub mod layout;
pub mod ui;
pub mod update_stream;
