pub mod di;
pub mod handler;
pub mod state;
