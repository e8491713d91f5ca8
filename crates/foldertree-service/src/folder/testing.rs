//! Store wrappers for observing and breaking folder operations in tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use foldertree_core::error::AppError;
use foldertree_core::result::AppResult;
use foldertree_database::FolderStore;
use foldertree_entity::folder::{CreateFolder, Folder};

/// Delegating store that records successful deletes in order, can be told
/// to fail every delete after a number of successes, and can answer one
/// root lookup with a stale "no root" to reproduce a lost startup race.
#[derive(Debug)]
pub struct RecordingStore {
    inner: Arc<dyn FolderStore>,
    deleted: Mutex<Vec<Uuid>>,
    delete_budget: AtomicUsize,
    hide_root_once: AtomicBool,
}

impl RecordingStore {
    pub fn new(inner: Arc<dyn FolderStore>) -> Self {
        Self {
            inner,
            deleted: Mutex::new(Vec::new()),
            delete_budget: AtomicUsize::new(usize::MAX),
            hide_root_once: AtomicBool::new(false),
        }
    }

    pub fn fail_deletes_after(&self, successes: usize) {
        self.delete_budget.store(successes, Ordering::SeqCst);
    }

    pub fn hide_root_once(&self) {
        self.hide_root_once.store(true, Ordering::SeqCst);
    }

    pub async fn deleted(&self) -> Vec<Uuid> {
        self.deleted.lock().await.clone()
    }
}

#[async_trait]
impl FolderStore for RecordingStore {
    async fn find_all(&self) -> AppResult<Vec<Folder>> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Folder>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_parent_id(&self, parent_id: Uuid) -> AppResult<Vec<Folder>> {
        self.inner.find_by_parent_id(parent_id).await
    }

    async fn find_root(&self) -> AppResult<Option<Folder>> {
        if self.hide_root_once.swap(false, Ordering::SeqCst) {
            return Ok(None);
        }
        self.inner.find_root().await
    }

    async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        self.inner.create(data).await
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<bool> {
        let remaining = self.delete_budget.load(Ordering::SeqCst);
        if remaining == 0 {
            return Err(AppError::database("connection lost"));
        }
        self.delete_budget.store(remaining.saturating_sub(1), Ordering::SeqCst);

        let removed = self.inner.delete_by_id(id).await?;
        if removed {
            self.deleted.lock().await.push(id);
        }
        Ok(removed)
    }
}
