pub mod robot;
pub mod status;
