use serde::{Deserialize, Serialize};

/// Tipo declarado del valor escalar de una propiedad.
///
/// El inyector recibe siempre un string; este tipo dicta a qué se convierte
/// antes de escribirlo en el documento del proceso.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    Text,
    Integer,
    Float,
    Bool,
}

impl ValueType {
    /// Etiqueta legible, usada en mensajes de error de coerción.
    pub fn label(&self) -> &'static str {
        match self {
            ValueType::Text => "text",
            ValueType::Integer => "integer",
            ValueType::Float => "float",
            ValueType::Bool => "bool",
        }
    }
}
