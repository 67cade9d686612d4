pub mod contact;
pub mod smoke;
