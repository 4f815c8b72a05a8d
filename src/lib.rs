//! FlowInject Rust Library
//!
//! Este crate actúa como la fachada de FlowInject:
//! - Expone `inject_core`: parser de rutas de propiedad e inyector fail-fast.
//! - Expone `inject_domain`: kinds de propiedad y schemas explícitos.
//!
//! Puede usarse desde el engine del host o por otros crates/clientes.

pub use inject_core::{AssignError, InjectError, Injection, PathParseError, PathSegment, PendingInjection,
                      PropertyInjector, PropertyPath, ResolveError};
pub use inject_domain::{DomainError, PropertyDescriptor, PropertyKind, StepSchema, ValueType};
