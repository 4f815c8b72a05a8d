//! inject-core: parser de rutas e inyector de propiedades para procesos
//! con forma de documento JSON.
pub mod errors;
pub mod injection;
pub mod path;

pub use errors::InjectError;
pub use injection::{AssignError, Injection, PendingInjection, PropertyInjector, ResolveError};
pub use path::{PathParseError, PathSegment, PropertyPath};
