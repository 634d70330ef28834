pub mod rank;
pub mod score;
pub mod stats;
