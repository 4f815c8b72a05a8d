use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{DomainError, PropertyKind, ValueType};

/// Descriptor de capacidad para una propiedad con nombre.
///
/// Sustituye a la reflexión del host: en lugar de descubrir propiedades por
/// atributos en runtime, cada tipo de proceso declara explícitamente qué
/// propiedades expone y con qué capacidades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    kind: PropertyKind,
    value_type: ValueType,
    read_only: bool,
}

impl PropertyDescriptor {
    pub fn new(kind: PropertyKind, value_type: ValueType) -> Self {
        PropertyDescriptor { kind,
                             value_type,
                             read_only: false }
    }

    /// Marca la propiedad como no asignable. La traversal puede atravesarla,
    /// pero un intento de escritura termina en rechazo.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }
}

/// Registro explícito nombre -> descriptor para un tipo de proceso.
///
/// El orden de inserción se preserva (`IndexMap`); la vista ordenada por el
/// `order` del kind es la que consume el host al enumerar sus propiedades.
/// La búsqueda es por nombre de segmento, plana: en el modelo del host los
/// nombres marcados son únicos dentro del grafo del proceso.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepSchema {
    properties: IndexMap<String, PropertyDescriptor>,
}

impl StepSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declara una propiedad. Falla con `DomainError::Validation` si el
    /// nombre está vacío o ya fue declarado.
    pub fn declare(&mut self, name: &str, descriptor: PropertyDescriptor) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation("El nombre de la propiedad no puede estar vacío".to_string()));
        }
        if self.properties.contains_key(name) {
            return Err(DomainError::Validation(format!("Propiedad duplicada: {name}")));
        }
        self.properties.insert(name.to_string(), descriptor);
        Ok(())
    }

    pub fn descriptor(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.get(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Propiedades ordenadas por el `order` de su kind. El sort es estable:
    /// a igual `order` gana el orden de declaración.
    pub fn properties_in_order(&self) -> Vec<(&str, &PropertyDescriptor)> {
        let mut out: Vec<(&str, &PropertyDescriptor)> = self.properties.iter().map(|(k, v)| (k.as_str(), v)).collect();
        out.sort_by_key(|(_, d)| d.kind().order());
        out
    }
}
