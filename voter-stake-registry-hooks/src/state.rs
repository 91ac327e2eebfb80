use voter_stake_registry_shared::types::{PositionWithMeta, Registrar};

/// Registry state loaded for the connected wallet.
///
/// `None` fields have not been loaded yet.
#[derive(Debug, Clone, Default)]
pub struct VsrState {
    pub positions: Option<Vec<PositionWithMeta>>,
    pub registrar: Option<Registrar>,
}

impl VsrState {
    pub fn new(positions: Vec<PositionWithMeta>, registrar: Registrar) -> Self {
        Self {
            positions: Some(positions),
            registrar: Some(registrar),
        }
    }

    pub fn positions(&self) -> &[PositionWithMeta] {
        self.positions.as_deref().unwrap_or_default()
    }
}
