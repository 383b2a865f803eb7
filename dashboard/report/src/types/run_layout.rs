use derive_new::new;
use serde::{Deserialize, Serialize};

/// Actors present in a run: tenant ids and load balanced endpoint ports.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, new)]
pub struct RunLayout {
    pub tenants: Vec<u32>,
    pub endpoints: Vec<u32>,
}
