//! Model loading: glTF scene handles, load-state polling and the shared-model cache.
//!
//! Loads are asynchronous.  A load is started by [`ModelLoader::load_scene`],
//! which returns a handle immediately; the scene systems then poll
//! [`ModelLoader::status`] once per frame until the handle settles on
//! [`ModelStatus::Ready`] or [`ModelStatus::Failed`].  A failed load is logged
//! once and the owner is left inert.  It never aborts the frame loop.

use crate::error::SailError;
use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;
use bevy_asset::RecursiveDependencyLoadState;

/// Where an asynchronous model load currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelStatus {
    /// Still loading (or not yet started on the asset task pool).
    Pending,
    /// The scene and all of its meshes / textures are available.
    Ready,
    /// The load failed; carries the loader's description.
    Failed(String),
}

/// The asset source seam.  Implemented for Bevy's [`AssetServer`]; tests use a
/// counting fake.
pub trait ModelLoader {
    /// Start loading the first glTF scene of the file at `path`.
    fn load_scene(&self, path: &str) -> Handle<Scene>;

    /// Current status of a handle returned by [`Self::load_scene`].
    fn status(&self, handle: &Handle<Scene>) -> ModelStatus;
}

impl ModelLoader for AssetServer {
    fn load_scene(&self, path: &str) -> Handle<Scene> {
        self.load(GltfAssetLabel::Scene(0).from_asset(path.to_string()))
    }

    fn status(&self, handle: &Handle<Scene>) -> ModelStatus {
        // Recursive state so the model counts as ready only once its meshes,
        // materials and textures are in too.
        match self.get_recursive_dependency_load_state(handle.id()) {
            Some(RecursiveDependencyLoadState::Loaded) => ModelStatus::Ready,
            Some(RecursiveDependencyLoadState::Failed(err)) => ModelStatus::Failed(err.to_string()),
            _ => ModelStatus::Pending,
        }
    }
}

/// A model that is loaded at most once and then cloned for every instance.
///
/// Cloning a [`Handle`] is a reference-count bump, so fifty trash items share
/// one load and one set of GPU assets.
#[derive(Debug, Clone, Default)]
pub struct SharedModel {
    path: String,
    handle: Option<Handle<Scene>>,
}

impl SharedModel {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            handle: None,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The handle, if a load has been started.
    pub fn handle(&self) -> Option<&Handle<Scene>> {
        self.handle.as_ref()
    }

    /// Return a clone of the shared handle, starting the load on first use.
    pub fn get_or_load(&mut self, loader: &impl ModelLoader) -> Handle<Scene> {
        self.handle
            .get_or_insert_with(|| loader.load_scene(&self.path))
            .clone()
    }
}

/// A model load that has been started but not yet resolved.
///
/// Attached to the owning entity; removed as soon as the load settles so a
/// failure is only reported once.
#[derive(Component, Debug, Clone)]
pub struct PendingModel {
    pub path: String,
    pub handle: Handle<Scene>,
}

/// Log an asset failure and return it as a [`SailError`].
pub fn report_load_failure(path: &str, reason: String) -> SailError {
    let err = SailError::AssetLoadFailure {
        path: path.to_string(),
        reason,
    };
    error!("{err}; entity stays inert");
    err
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory loader used by unit tests.

    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Counts `load_scene` calls and reports a scripted status.
    #[derive(Resource)]
    pub struct CountingLoader {
        loads: AtomicUsize,
        status: Mutex<ModelStatus>,
    }

    impl CountingLoader {
        pub fn new(status: ModelStatus) -> Self {
            Self {
                loads: AtomicUsize::new(0),
                status: Mutex::new(status),
            }
        }

        pub fn loads(&self) -> usize {
            self.loads.load(Ordering::SeqCst)
        }

        pub fn set_status(&self, status: ModelStatus) {
            *self.status.lock().unwrap() = status;
        }
    }

    impl ModelLoader for CountingLoader {
        fn load_scene(&self, _path: &str) -> Handle<Scene> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Handle::default()
        }

        fn status(&self, _handle: &Handle<Scene>) -> ModelStatus {
            self.status.lock().unwrap().clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::CountingLoader;
    use super::*;

    #[test]
    fn shared_model_loads_once() {
        let loader = CountingLoader::new(ModelStatus::Pending);
        let mut model = SharedModel::new("models/trash/scene.gltf");
        assert!(model.handle().is_none());

        for _ in 0..10 {
            let _ = model.get_or_load(&loader);
        }

        assert_eq!(loader.loads(), 1);
        assert!(model.handle().is_some());
    }

    #[test]
    fn clones_refer_to_the_same_asset() {
        let loader = CountingLoader::new(ModelStatus::Ready);
        let mut model = SharedModel::new("models/trash/scene.gltf");
        let a = model.get_or_load(&loader);
        let b = model.get_or_load(&loader);
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn failure_report_carries_path() {
        let err = report_load_failure("models/boat/scene.gltf", "404".into());
        assert_eq!(
            err,
            SailError::AssetLoadFailure {
                path: "models/boat/scene.gltf".into(),
                reason: "404".into()
            }
        );
    }
}
