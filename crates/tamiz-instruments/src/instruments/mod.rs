pub mod aq10;
pub mod asrs;
pub mod vinegrad;
