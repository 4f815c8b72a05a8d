//! El inyector de propiedades: entradas pendientes + aplicación fail-fast.

use inject_domain::StepSchema;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::resolve::{apply, ApplyError};
use crate::errors::InjectError;
use crate::path::PropertyPath;

/// Instrucción inmutable: asignar `value` en la ubicación `property_path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Injection {
    property_path: String,
    value: String,
}

impl Injection {
    pub fn new(property_path: impl Into<String>, value: impl Into<String>) -> Self {
        Injection { property_path: property_path.into(),
                    value: value.into() }
    }

    pub fn property_path(&self) -> &str {
        &self.property_path
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Entrada pendiente: clave de elemento (opaca, la define el host) más la
/// inyección a aplicar. La clave no se interpreta; solo viaja en el contexto
/// de error para diagnóstico.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingInjection {
    element_key: String,
    injection: Injection,
}

impl PendingInjection {
    pub fn new(element_key: impl Into<String>, injection: Injection) -> Self {
        PendingInjection { element_key: element_key.into(),
                           injection }
    }

    pub fn element_key(&self) -> &str {
        &self.element_key
    }

    pub fn injection(&self) -> &Injection {
        &self.injection
    }
}

/// Acumula inyecciones en orden de inserción (duplicados permitidos) y las
/// aplica sobre un documento de proceso con semántica fail-fast: la primera
/// entrada que falla corta el lote y las anteriores quedan ya aplicadas.
/// No hay rollback.
#[derive(Debug, Default)]
pub struct PropertyInjector {
    entries: Vec<PendingInjection>,
    schema: Option<StepSchema>,
}

impl PropertyInjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-siembra el inyector con una secuencia existente de entradas.
    /// Equivale a repetir `add` en el mismo orden.
    pub fn with_entries(entries: Vec<PendingInjection>) -> Self {
        PropertyInjector { entries,
                           schema: None }
    }

    /// Adjunta el registro de capacidades del tipo de proceso destino.
    /// Sin schema, las comprobaciones se infieren de la forma del documento.
    pub fn with_schema(mut self, schema: StepSchema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Encola una inyección. Nunca valida ni falla; la validación ocurre en
    /// `inject`.
    pub fn add(&mut self, element_key: impl Into<String>, injection: Injection) {
        self.entries.push(PendingInjection::new(element_key, injection));
    }

    pub fn entries(&self) -> &[PendingInjection] {
        &self.entries
    }

    /// Aplica cada entrada en orden de inserción sobre `target`. Devuelve
    /// `Ok(())` solo si todas las entradas aplicaron; el primer fallo aborta
    /// con un error que nombra la clave de elemento y la ruta ofensiva.
    pub fn inject(&self, target: &mut Value) -> Result<(), InjectError> {
        for entry in &self.entries {
            let path_str = entry.injection().property_path();
            let path = match PropertyPath::parse(path_str) {
                Ok(path) => path,
                Err(source) => {
                    warn!("ruta malformada `{path_str}` (entrada `{}`)", entry.element_key());
                    return Err(InjectError::PathParse { element_key: entry.element_key().to_string(),
                                                        path: path_str.to_string(),
                                                        source });
                }
            };
            match apply(target, &path, entry.injection().value(), self.schema.as_ref()) {
                Ok(()) => {
                    debug!("inyección aplicada en `{path_str}` (entrada `{}`)", entry.element_key());
                }
                Err(ApplyError::Resolve(source)) => {
                    warn!("no se pudo resolver `{path_str}` (entrada `{}`): {source}", entry.element_key());
                    return Err(InjectError::PathResolution { element_key: entry.element_key().to_string(),
                                                             path: path_str.to_string(),
                                                             source });
                }
                Err(ApplyError::Assign(source)) => {
                    warn!("asignación rechazada en `{path_str}` (entrada `{}`): {source}", entry.element_key());
                    return Err(InjectError::Assignment { element_key: entry.element_key().to_string(),
                                                         path: path_str.to_string(),
                                                         source });
                }
            }
        }
        Ok(())
    }
}
