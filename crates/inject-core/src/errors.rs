//! Errores del core de inyección.
//!
//! Tres familias, una por etapa de la operación: parseo de la ruta,
//! resolución contra la forma real del documento y asignación del valor.
//! Cada variante lleva la clave de elemento y la ruta ofensiva verbatim para
//! que el host pueda diagnosticar sin re-ejecutar.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::injection::{AssignError, ResolveError};
use crate::path::PathParseError;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum InjectError {
    #[error("ruta malformada `{path}` (entrada `{element_key}`): {source}")]
    PathParse {
        element_key: String,
        path: String,
        #[source]
        source: PathParseError,
    },

    #[error("no se pudo resolver `{path}` (entrada `{element_key}`): {source}")]
    PathResolution {
        element_key: String,
        path: String,
        #[source]
        source: ResolveError,
    },

    #[error("asignación rechazada en `{path}` (entrada `{element_key}`): {source}")]
    Assignment {
        element_key: String,
        path: String,
        #[source]
        source: AssignError,
    },
}

impl InjectError {
    /// Clave de elemento de la entrada que falló.
    pub fn element_key(&self) -> &str {
        match self {
            InjectError::PathParse { element_key, .. }
            | InjectError::PathResolution { element_key, .. }
            | InjectError::Assignment { element_key, .. } => element_key,
        }
    }

    /// Ruta ofensiva, tal cual la recibió el inyector.
    pub fn path(&self) -> &str {
        match self {
            InjectError::PathParse { path, .. }
            | InjectError::PathResolution { path, .. }
            | InjectError::Assignment { path, .. } => path,
        }
    }
}
