pub mod cart;
pub mod contact;
