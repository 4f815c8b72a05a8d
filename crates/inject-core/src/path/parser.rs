//! Parser de rutas de propiedad.
//!
//! Gramática aceptada:
//! ```text
//! ruta     := segmento ("." segmento)*
//! segmento := nombre índice?
//! nombre   := cualquier carácter salvo '.', '[' y ']' (match exacto, case-sensitive)
//! índice   := "[" dígitos "]"
//! ```
//! El parseo es todo-o-nada: o la ruta completa es válida o se devuelve un
//! `PathParseError`; nunca se produce una ruta parcial.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::segment::PathSegment;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum PathParseError {
    #[error("ruta vacía")]
    Empty,
    #[error("segmento vacío en la posición {position}")]
    EmptySegment { position: usize },
    #[error("nombre de propiedad vacío")]
    EmptyName,
    #[error("corchete sin balancear")]
    UnbalancedBracket,
    #[error("índice vacío")]
    EmptyIndex,
    #[error("índice inválido `{raw}`")]
    InvalidIndex { raw: String },
    #[error("caracteres tras el índice: `{raw}`")]
    TrailingAfterIndex { raw: String },
}

/// Secuencia ordenada e inmutable de segmentos, producida por `parse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyPath {
    segments: Vec<PathSegment>,
}

impl PropertyPath {
    /// Parsea una ruta con forma de string (`Name`, `Items[0].Name`).
    pub fn parse(input: &str) -> Result<Self, PathParseError> {
        if input.is_empty() {
            return Err(PathParseError::Empty);
        }
        let mut segments = Vec::new();
        for (position, chunk) in input.split('.').enumerate() {
            if chunk.is_empty() {
                return Err(PathParseError::EmptySegment { position });
            }
            segments.push(parse_segment(chunk)?);
        }
        Ok(PropertyPath { segments })
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

fn parse_segment(chunk: &str) -> Result<PathSegment, PathParseError> {
    match chunk.find('[') {
        None => {
            if chunk.contains(']') {
                return Err(PathParseError::UnbalancedBracket);
            }
            Ok(PathSegment::new(chunk.to_string(), None))
        }
        Some(open) => {
            let name = &chunk[..open];
            if name.is_empty() {
                return Err(PathParseError::EmptyName);
            }
            if name.contains(']') {
                return Err(PathParseError::UnbalancedBracket);
            }
            let rest = &chunk[open + 1..];
            let close = rest.find(']').ok_or(PathParseError::UnbalancedBracket)?;
            let raw = &rest[..close];
            let tail = &rest[close + 1..];
            if !tail.is_empty() {
                return Err(PathParseError::TrailingAfterIndex { raw: tail.to_string() });
            }
            if raw.is_empty() {
                return Err(PathParseError::EmptyIndex);
            }
            if !raw.bytes().all(|b| b.is_ascii_digit()) {
                return Err(PathParseError::InvalidIndex { raw: raw.to_string() });
            }
            let index = raw.parse::<usize>().map_err(|_| PathParseError::InvalidIndex { raw: raw.to_string() })?;
            Ok(PathSegment::new(name.to_string(), Some(index)))
        }
    }
}

impl FromStr for PropertyPath {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyPath::parse(s)
    }
}

// Render canónico: parse(p).to_string() == p para toda ruta válida.
impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
