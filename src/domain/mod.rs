pub mod cart;
pub mod catalog;
pub mod order;
pub mod review;
pub mod session;
pub mod token;
pub mod user;
