pub mod contact;
mod macros;
pub mod navigation;
pub mod smoke;
