pub mod contact;
pub mod field;
pub mod form;
mod macros;
pub mod validation;
