pub mod lifetime;
pub mod page;
pub mod pages;
pub mod resolve;
