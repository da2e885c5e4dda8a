//! Domain value objects and types.
//!
//! Each contact field is a small value type that is validated at
//! construction time, so an invalid name or phone number can never be
//! stored in a [`Record`](crate::models::Record).

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
