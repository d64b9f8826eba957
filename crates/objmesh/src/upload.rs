//! GPU upload interface.
//!
//! A renderer implements [`ModelUploader`] to turn a parsed model into
//! whatever objects it draws with. The uploader only borrows the model while
//! `upload` runs. [`UploadedModels`] keeps the returned handles by name and
//! releases whatever it still holds when dropped.

use std::collections::HashMap;

use objmesh_decode::{ParsedModel, VertexLayout};

use crate::error::{Error, Result};
use crate::table::ModelTable;

/// Creates and destroys renderer objects for parsed models.
pub trait ModelUploader {
    /// Opaque renderer object(s) for one model.
    type Handle;
    type Error: std::error::Error + Send + Sync + 'static;

    fn upload(
        &mut self,
        name: &str,
        model: &ParsedModel,
        layout: &VertexLayout,
    ) -> std::result::Result<Self::Handle, Self::Error>;

    fn release(&mut self, handle: Self::Handle);
}

/// Handles produced by an uploader, keyed by model name.
///
/// Dropping the registry releases every handle it still holds. Use
/// [`close`](Self::close) to also be told which ones those were, or
/// [`into_handles`](Self::into_handles) to keep them alive.
pub struct UploadedModels<U: ModelUploader> {
    uploader: U,
    handles: HashMap<String, U::Handle>,
}

impl<U: ModelUploader> UploadedModels<U> {
    pub fn new(uploader: U) -> Self {
        Self {
            uploader,
            handles: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&U::Handle> {
        self.handles.get(name)
    }

    pub fn uploader(&self) -> &U {
        &self.uploader
    }

    /// Upload one model and keep its handle under `name`.
    pub fn upload(&mut self, name: &str, model: &ParsedModel) -> Result<&U::Handle> {
        if self.handles.contains_key(name) {
            return Err(Error::DuplicateName(name.to_owned()));
        }

        let layout = model.layout();
        let handle = self
            .uploader
            .upload(name, model, &layout)
            .map_err(|source| Error::Upload {
                name: name.to_owned(),
                source: Box::new(source),
            })?;

        tracing::debug!(
            "Uploaded model \"{}\" ({} bytes, stride {})",
            name,
            model.as_bytes().len(),
            layout.stride
        );
        Ok(self.handles.entry(name.to_owned()).or_insert(handle))
    }

    /// Upload every model in `table` that has not been uploaded yet.
    ///
    /// Models go up in name order. Returns how many were uploaded.
    pub fn upload_all(&mut self, table: &ModelTable) -> Result<usize> {
        let mut uploaded = 0;
        for name in table.names() {
            if self.handles.contains_key(name) {
                continue;
            }
            if let Some(model) = table.get(name) {
                self.upload(name, model)?;
                uploaded += 1;
            }
        }
        Ok(uploaded)
    }

    /// Release one model's handle. Absent names are ignored.
    pub fn release(&mut self, name: &str) -> bool {
        match self.handles.remove(name) {
            Some(handle) => {
                self.uploader.release(handle);
                true
            }
            None => false,
        }
    }

    pub fn release_many<S: AsRef<str>>(&mut self, names: &[S]) -> usize {
        names
            .iter()
            .filter(|name| self.release(name.as_ref()))
            .count()
    }

    pub fn release_all(&mut self) -> usize {
        let count = self.handles.len();
        for (_, handle) in self.handles.drain() {
            self.uploader.release(handle);
        }
        count
    }

    /// Hand every handle to the caller without releasing it.
    pub fn into_handles(mut self) -> HashMap<String, U::Handle> {
        std::mem::take(&mut self.handles)
    }

    /// Release everything, reporting each handle that was still held.
    pub fn close(mut self, mut on_leftover: impl FnMut(&str)) {
        let mut names: Vec<&String> = self.handles.keys().collect();
        names.sort_unstable();
        for name in names {
            on_leftover(name);
        }
        self.release_all();
    }
}

impl<U: ModelUploader> Drop for UploadedModels<U> {
    fn drop(&mut self) {
        self.release_all();
    }
}
