pub mod cards;
pub mod fetch;
pub mod report;
pub mod rollover;
