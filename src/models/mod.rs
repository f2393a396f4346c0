pub mod card;
pub mod lenient;
pub mod psa;

pub use card::*;
pub use psa::*;
