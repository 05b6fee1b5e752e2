pub mod garden;
pub mod info;
pub mod plant;
pub mod request;
pub mod session;
