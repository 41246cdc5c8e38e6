pub mod board;
pub mod list;
pub mod snapshot;
pub mod status;
pub mod ticket;
pub mod week;
