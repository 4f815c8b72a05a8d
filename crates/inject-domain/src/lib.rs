// inject-domain library entry point
pub mod errors;
pub mod property_kind;
pub mod schema;
pub mod value_type;
pub use errors::DomainError;
pub use property_kind::PropertyKind;
pub use schema::{PropertyDescriptor, StepSchema};
pub use value_type::ValueType;
