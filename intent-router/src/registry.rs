//! Handler registry: handler kind → descriptor (persona profile).

use std::collections::HashMap;

use chatterly_core::{HandlerKind, RouterError};

/// Static description of one handler: the persona the generation backend
/// assumes when answering for this kind. Uniform shape for all kinds.
#[derive(Debug, Clone)]
pub struct HandlerDescriptor {
    pub kind: HandlerKind,
    pub name: String,
    pub role: String,
    pub persona: String,
    pub memory_enabled: bool,
}

impl HandlerDescriptor {
    pub fn new(
        kind: HandlerKind,
        name: impl Into<String>,
        role: impl Into<String>,
        persona: impl Into<String>,
        memory_enabled: bool,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            role: role.into(),
            persona: persona.into(),
            memory_enabled,
        }
    }
}

/// Immutable lookup from handler kind to descriptor, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct HandlerRegistry {
    descriptors: HashMap<HandlerKind, HandlerDescriptor>,
}

impl HandlerRegistry {
    pub fn new(descriptors: Vec<HandlerDescriptor>) -> Self {
        Self {
            descriptors: descriptors.into_iter().map(|d| (d.kind, d)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Resolves a handler kind to its descriptor.
    ///
    /// A miss is a wiring bug (the classifier produced a kind nobody
    /// registered) and surfaces as [`RouterError::Configuration`].
    pub fn resolve(&self, kind: HandlerKind) -> Result<&HandlerDescriptor, RouterError> {
        self.descriptors.get(&kind).ok_or_else(|| {
            RouterError::Configuration(format!("no handler descriptor registered for '{kind}'"))
        })
    }
}
