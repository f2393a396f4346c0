pub mod cards;
pub mod lookup;
pub mod meta;
pub mod stats;
