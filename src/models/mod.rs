pub mod dataset;
pub mod deposit;
pub mod kpi;
pub mod user;

pub use dataset::*;
pub use deposit::*;
pub use kpi::*;
pub use user::*;
