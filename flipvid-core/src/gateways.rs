use anyhow::Result;

use crate::entities::Phase;

/// Access to the remotely hosted course manifest.
pub trait CatalogGateway {
    fn load_phases(&self) -> Result<Vec<Phase>>;
}
