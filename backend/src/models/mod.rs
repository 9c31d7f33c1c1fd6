pub mod constraints;
pub mod reservation;
pub mod room;
pub mod schedule;
pub mod time;

pub use constraints::*;
pub use reservation::*;
pub use room::*;
pub use schedule::*;
pub use time::*;
