//! Inyección de valores en el documento del proceso.
//!
//! Este módulo define:
//! - `Injection` y `PendingInjection`: el modelo de datos de una inyección.
//! - `PropertyInjector`: acumula entradas y las aplica fail-fast.
//! - `ResolveError` / `AssignError`: fallos de traversal y de escritura.

pub mod assign;
pub mod injector;
pub mod resolve;

pub use assign::AssignError;
pub use injector::{Injection, PendingInjection, PropertyInjector};
pub use resolve::ResolveError;
