pub mod entity;
pub mod session;
pub mod table;
