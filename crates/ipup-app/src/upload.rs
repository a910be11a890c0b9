//! Uploading a selected file

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ipup_core::prelude::*;
use ipup_core::ContentIdentifier;
use ipup_node::{AddRequest, ProgressFn, StorageNode, UploadStrategy};

/// Files picked by the user plus the "Keep Filename" flag.
///
/// Replaced wholesale on every selection. Only the first file is uploaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelection {
    pub files: Vec<PathBuf>,
    pub keep_filename: bool,
}

impl FileSelection {
    pub fn new(files: Vec<PathBuf>, keep_filename: bool) -> Self {
        Self {
            files,
            keep_filename,
        }
    }

    pub fn first(&self) -> Option<&Path> {
        self.files.first().map(PathBuf::as_path)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Wrap in a directory under the file's own name, or send the bytes alone
pub fn strategy_for(path: &Path, keep_filename: bool) -> UploadStrategy {
    if !keep_filename {
        return UploadStrategy::Raw;
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());
    UploadStrategy::WrapWithDirectory { path: name }
}

/// Upload the first file of `selection`.
///
/// `Ok(None)` for an empty selection. Failures come back as
/// [`Error::Upload`] with the underlying message.
pub async fn submit<N: StorageNode>(
    node: &N,
    selection: &FileSelection,
) -> Result<Option<ContentIdentifier>> {
    let Some(path) = selection.first() else {
        return Ok(None);
    };

    let content = tokio::fs::read(path).await.map_err(|e| {
        warn!("Cannot read {}: {}", path.display(), e);
        Error::upload(e.to_string())
    })?;

    let request = AddRequest {
        content,
        strategy: strategy_for(path, selection.keep_filename),
    };
    debug!(
        "Uploading {} ({} bytes, wrap={})",
        path.display(),
        request.content.len(),
        request.strategy.wraps()
    );

    let progress: ProgressFn = Arc::new(|bytes| debug!("received: {}", bytes));
    let entry = node
        .add(request, Some(progress))
        .await
        .map_err(|e| Error::upload(e.to_string()))?;

    info!("Uploaded {} as {}", path.display(), entry.cid);
    Ok(Some(entry.cid))
}
