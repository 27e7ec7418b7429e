pub mod exec;
pub mod params;
pub mod row;

pub use exec::*;
pub use params::*;
pub use row::*;
