pub mod cache;
pub mod model;
pub mod session;
pub mod status;
pub mod timefmt;
