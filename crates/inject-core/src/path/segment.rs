use serde::{Deserialize, Serialize};
use std::fmt;

/// Un paso de una ruta de propiedad: nombre y, opcionalmente, índice de lista.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSegment {
    name: String,
    index: Option<usize>,
}

impl PathSegment {
    pub(crate) fn new(name: String, index: Option<usize>) -> Self {
        PathSegment { name, index }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(i) => write!(f, "{}[{}]", self.name, i),
            None => write!(f, "{}", self.name),
        }
    }
}
