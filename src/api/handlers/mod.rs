pub mod catalog;
pub mod gardens;
pub mod info;
pub mod session;
