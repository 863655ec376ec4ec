pub mod admin;
pub mod cart;
pub mod home;
pub mod impact;
pub mod store;
