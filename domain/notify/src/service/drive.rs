use async_trait::async_trait;

use crate::model::vo::DriveFolder;

/// OneDrive folder provisioning via Microsoft Graph.
#[async_trait]
pub trait DriveService: Send + Sync {
    /// Creates the folder under the drive root, or returns the existing
    /// one with the same name.
    async fn ensure_folder(&self, name: &str) -> anyhow::Result<DriveFolder>;
}
