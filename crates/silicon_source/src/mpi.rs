//! Memory peripheral interface table (`mpi.yaml`).

use indexmap::IndexMap;
use serde::Deserialize;

/// The MPI interfaces of one chip family.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MpiSource {
    /// Interfaces by name.
    #[serde(default)]
    pub mpis: IndexMap<String, MpiDecl>,
}

/// One memory interface.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize)]
pub struct MpiDecl {
    /// Whether the interface is wired to in-package (SiP) memory.
    #[serde(default)]
    pub sip: bool,
}

impl MpiSource {
    /// Returns `true` if `name` is a SiP interface.
    pub fn is_sip(&self, name: &str) -> bool {
        self.mpis.get(name).is_some_and(|m| m.sip)
    }
}
