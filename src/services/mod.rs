pub mod board;
#[cfg(test)]
pub mod testing;

pub use board::BoardService;
