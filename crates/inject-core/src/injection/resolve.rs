//! Traversal del documento del proceso, segmento a segmento.
//!
//! Cada segmento se resuelve contra las claves del objeto actual con match
//! exacto (case-sensitive). Un segmento indexado exige que la propiedad sea
//! una lista con el índice dentro de rango. Si hay un `StepSchema` presente,
//! el descriptor de la propiedad restringe además qué formas de acceso son
//! legales para su kind.

use inject_domain::StepSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::assign::{assign_value, AssignError};
use crate::path::PropertyPath;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum ResolveError {
    #[error("propiedad desconocida `{name}`")]
    MissingProperty { name: String },
    #[error("el nodo que contiene `{name}` no es un objeto")]
    NotAnObject { name: String },
    #[error("la propiedad `{name}` no es una lista")]
    NotAList { name: String },
    #[error("índice {index} fuera de rango en `{name}` (longitud {len})")]
    IndexOutOfRange { name: String, index: usize, len: usize },
    #[error("la propiedad `{name}` es una lista y requiere índice")]
    ListRequiresIndex { name: String },
}

/// Fallo al aplicar una ruta sobre el documento: o la ruta no casa con la
/// forma real del documento, o la ubicación terminal rechazó el valor.
#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) enum ApplyError {
    Resolve(ResolveError),
    Assign(AssignError),
}

/// Recorre `target` siguiendo `path` y escribe `raw` en la ubicación
/// terminal. El documento solo se muta si la ruta completa resuelve y la
/// asignación es aceptada.
pub(crate) fn apply(target: &mut Value,
                    path: &PropertyPath,
                    raw: &str,
                    schema: Option<&StepSchema>)
                    -> Result<(), ApplyError> {
    let mut current = target;
    let last = path.len() - 1;
    for (pos, segment) in path.segments().iter().enumerate() {
        let name = segment.name();
        let map = match current {
            Value::Object(map) => map,
            _ => return Err(ApplyError::Resolve(ResolveError::NotAnObject { name: name.to_string() })),
        };
        let slot = match map.get_mut(name) {
            Some(slot) => slot,
            None => return Err(ApplyError::Resolve(ResolveError::MissingProperty { name: name.to_string() })),
        };

        let descriptor = schema.and_then(|s| s.descriptor(name));
        if let Some(desc) = descriptor {
            if segment.index().is_some() && !desc.kind().accepts_index() {
                return Err(ApplyError::Resolve(ResolveError::NotAList { name: name.to_string() }));
            }
            if segment.index().is_none() && desc.kind().accepts_index() && pos != last {
                // Atravesar una lista de steps sin decir cuál
                return Err(ApplyError::Resolve(ResolveError::ListRequiresIndex { name: name.to_string() }));
            }
        }

        let node = match segment.index() {
            Some(index) => {
                let list = match slot.as_array_mut() {
                    Some(list) => list,
                    None => return Err(ApplyError::Resolve(ResolveError::NotAList { name: name.to_string() })),
                };
                let len = list.len();
                match list.get_mut(index) {
                    Some(element) => element,
                    None => {
                        return Err(ApplyError::Resolve(ResolveError::IndexOutOfRange { name: name.to_string(),
                                                                                      index,
                                                                                      len }))
                    }
                }
            }
            None => slot,
        };

        if pos == last {
            return assign_value(node, raw, descriptor, segment).map_err(ApplyError::Assign);
        }
        current = node;
    }
    // Invariante del parser: una PropertyPath nunca está vacía
    Ok(())
}
