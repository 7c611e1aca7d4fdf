//! Selected assets and the rule deciding whether they form one launchable run.

use serde::Deserialize;

/// One selected asset: the op that materializes it and the job that op belongs to.
///
/// Either side may be absent. An empty string is treated the same as a missing value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AssetRef {
    #[serde(default)]
    pub op_name: Option<String>,
    #[serde(default)]
    pub job_name: Option<String>,
}

impl AssetRef {
    pub fn new(op_name: Option<&str>, job_name: Option<&str>) -> Self {
        Self { op_name: op_name.map(str::to_owned), job_name: job_name.map(str::to_owned) }
    }

    /// Op name, if present and non-empty.
    pub fn op_name(&self) -> Option<&str> {
        present(&self.op_name)
    }

    /// Job name, if present and non-empty.
    pub fn job_name(&self) -> Option<&str> {
        present(&self.job_name)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Job shared by every asset in the selection, when the selection can be launched as one run.
///
/// The first asset's job is the pivot: every asset must carry that same job and a present op.
/// An empty selection has no pivot and is never launchable.
pub fn launchable_job_name(assets: &[AssetRef]) -> Option<&str> {
    let job_name = assets.first()?.job_name()?;
    assets
        .iter()
        .all(|asset| asset.job_name() == Some(job_name) && asset.op_name().is_some())
        .then_some(job_name)
}

/// Whether the selection can be launched as a single run.
pub fn can_launch(assets: &[AssetRef]) -> bool {
    let launchable = launchable_job_name(assets).is_some();
    tracing::debug!(assets = assets.len(), launchable, "validated asset selection");
    launchable
}
