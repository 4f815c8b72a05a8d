//! Coerción y escritura del valor terminal.
//!
//! El valor inyectado llega siempre como string. Si la propiedad terminal
//! tiene descriptor declarado, el `ValueType` del descriptor dicta la
//! conversión; si no, se infiere del tipo JSON del valor actual (pass-through
//! de string como mínimo).

use inject_domain::{PropertyDescriptor, ValueType};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use thiserror::Error;

use crate::path::PathSegment;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum AssignError {
    #[error("la propiedad `{name}` es de solo lectura")]
    ReadOnly { name: String },
    #[error("la propiedad `{name}` no admite un valor escalar")]
    NotScalar { name: String },
    #[error("no se puede asignar un escalar sobre la estructura `{name}`")]
    Structural { name: String },
    #[error("no se pudo convertir `{value}` a {expected}")]
    Coercion { value: String, expected: String },
}

/// Escribe `raw` en `slot`, que ya fue resuelto como la ubicación terminal
/// del segmento `segment`.
pub(crate) fn assign_value(slot: &mut Value,
                           raw: &str,
                           descriptor: Option<&PropertyDescriptor>,
                           segment: &PathSegment)
                           -> Result<(), AssignError> {
    let name = segment.name();
    if let Some(desc) = descriptor {
        if desc.is_read_only() {
            return Err(AssignError::ReadOnly { name: name.to_string() });
        }
        if segment.index().is_none() {
            if !desc.kind().is_scalar() {
                return Err(AssignError::NotScalar { name: name.to_string() });
            }
            *slot = coerce_declared(raw, desc.value_type())?;
            return Ok(());
        }
        // Terminal indexado: el descriptor describe la lista, no el elemento;
        // la forma del elemento actual dicta la conversión.
    }
    *slot = coerce_inferred(raw, slot, name)?;
    Ok(())
}

fn coerce_declared(raw: &str, value_type: ValueType) -> Result<Value, AssignError> {
    match value_type {
        ValueType::Text => Ok(Value::String(raw.to_string())),
        ValueType::Integer => raw.parse::<i64>()
                                 .map(|n| Value::Number(n.into()))
                                 .map_err(|_| coercion_error(raw, value_type.label())),
        ValueType::Float => raw.parse::<f64>()
                               .ok()
                               .and_then(Number::from_f64)
                               .map(Value::Number)
                               .ok_or_else(|| coercion_error(raw, value_type.label())),
        ValueType::Bool => raw.parse::<bool>()
                              .map(Value::Bool)
                              .map_err(|_| coercion_error(raw, value_type.label())),
    }
}

fn coerce_inferred(raw: &str, current: &Value, name: &str) -> Result<Value, AssignError> {
    match current {
        // Sin valor previo o ya string: pass-through
        Value::Null | Value::String(_) => Ok(Value::String(raw.to_string())),
        Value::Number(n) if n.is_f64() => raw.parse::<f64>()
                                             .ok()
                                             .and_then(Number::from_f64)
                                             .map(Value::Number)
                                             .ok_or_else(|| coercion_error(raw, "float")),
        Value::Number(_) => raw.parse::<i64>()
                               .map(|n| Value::Number(n.into()))
                               .map_err(|_| coercion_error(raw, "integer")),
        Value::Bool(_) => raw.parse::<bool>().map(Value::Bool).map_err(|_| coercion_error(raw, "bool")),
        Value::Object(_) | Value::Array(_) => Err(AssignError::Structural { name: name.to_string() }),
    }
}

fn coercion_error(raw: &str, expected: &str) -> AssignError {
    AssignError::Coercion { value: raw.to_string(),
                            expected: expected.to_string() }
}
