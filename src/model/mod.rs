pub mod bookmaker;
pub mod finish;
pub mod player;
pub mod tournament;

pub use bookmaker::*;
pub use finish::*;
pub use player::*;
pub use tournament::*;
