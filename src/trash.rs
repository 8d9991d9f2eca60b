//! The trash pool: a fixed arena of collectible slots.
//!
//! Slots are never removed from the arena.  Each one moves forward through
//! [`SlotState`] exactly once per step:
//!
//! ```text
//! Pending ──(shared model ready)──▶ Live(entity) ──(boat overlaps)──▶ Retired
//! ```
//!
//! Indices stay stable for the whole session, so the collision sweep can walk
//! the arena without invalidating anything.

use crate::assets::{report_load_failure, ModelLoader, ModelStatus, SharedModel};
use crate::config::SailConfig;
use bevy::prelude::*;
use rand::Rng;

/// Marker component for spawned trash entities.
#[derive(Component)]
pub struct Trash;

/// Lifecycle of one trash slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// Position chosen, waiting for the shared model.
    Pending,
    /// Visible in the scene as this entity.
    Live(Entity),
    /// Collected and despawned.  Terminal.
    Retired,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrashSlot {
    pub position: Vec3,
    pub state: SlotState,
}

impl TrashSlot {
    #[inline]
    pub fn is_alive(&self) -> bool {
        matches!(self.state, SlotState::Live(_))
    }
}

/// Arena of every trash item created this session.
#[derive(Resource, Debug, Default)]
pub struct TrashPool {
    pub(crate) slots: Vec<TrashSlot>,
    model: SharedModel,
    model_failed: bool,
}

impl TrashPool {
    pub fn new(model_path: impl Into<String>) -> Self {
        Self {
            slots: Vec::new(),
            model: SharedModel::new(model_path),
            model_failed: false,
        }
    }

    pub fn slots(&self) -> &[TrashSlot] {
        &self.slots
    }

    pub fn live_count(&self) -> usize {
        self.count(|s| s.is_alive())
    }

    pub fn pending_count(&self) -> usize {
        self.count(|s| s.state == SlotState::Pending)
    }

    pub fn retired_count(&self) -> usize {
        self.count(|s| s.state == SlotState::Retired)
    }

    fn count(&self, pred: impl Fn(&TrashSlot) -> bool) -> usize {
        self.slots.iter().filter(|s| pred(s)).count()
    }

    /// Add one pending slot at a random planar position and make sure the
    /// shared model is loading.  Returns the new slot's index.
    ///
    /// The model is requested from `loader` on the first call only; every
    /// later call reuses the same handle.
    pub fn create_trash(
        &mut self,
        loader: &impl ModelLoader,
        rng: &mut impl Rng,
        config: &SailConfig,
    ) -> usize {
        let _ = self.model.get_or_load(loader);

        let h = config.spawn_half_extent;
        let position = Vec3::new(
            rng.gen_range(-h..h),
            config.trash_height,
            rng.gen_range(-h..h),
        );

        self.slots.push(TrashSlot {
            position,
            state: SlotState::Pending,
        });
        self.slots.len() - 1
    }

    /// Turn every pending slot live, using `spawn` to create its entity.
    /// Returns how many slots were activated.
    pub fn activate(&mut self, mut spawn: impl FnMut(Vec3) -> Entity) -> usize {
        let mut activated = 0;
        for slot in self
            .slots
            .iter_mut()
            .filter(|s| s.state == SlotState::Pending)
        {
            slot.state = SlotState::Live(spawn(slot.position));
            activated += 1;
        }
        activated
    }
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Startup system: fill the pool with `config.trash_count` pending slots.
pub fn spawn_trash_pool<L: ModelLoader + Resource>(
    mut pool: ResMut<TrashPool>,
    loader: Res<L>,
    config: Res<SailConfig>,
) {
    let mut rng = rand::thread_rng();
    *pool = TrashPool::new(config.trash_model_path.clone());
    for _ in 0..config.trash_count {
        pool.create_trash(&*loader, &mut rng, &config);
    }
    info!(
        "Trash pool created: {} slots waiting for {}",
        pool.slots.len(),
        pool.model.path()
    );
}

/// Spawn the pending slots once the shared trash model is ready.
///
/// All pending slots go live in the same frame, so the sweep never sees a
/// partially populated pool.  On failure the pool stays pending for the rest
/// of the session; the sweep skips pending slots.
pub fn populate_trash_pool_system<L: ModelLoader + Resource>(
    mut commands: Commands,
    loader: Res<L>,
    mut pool: ResMut<TrashPool>,
    config: Res<SailConfig>,
) {
    if pool.model_failed || pool.pending_count() == 0 {
        return;
    }
    let Some(handle) = pool.model.handle().cloned() else {
        return;
    };

    match loader.status(&handle) {
        ModelStatus::Pending => {}
        ModelStatus::Failed(reason) => {
            report_load_failure(pool.model.path(), reason);
            pool.model_failed = true;
        }
        ModelStatus::Ready => {
            let scale = Vec3::splat(config.trash_scale);
            let activated = pool.activate(|position| {
                commands
                    .spawn((
                        Trash,
                        SceneRoot(handle.clone()),
                        Transform::from_translation(position).with_scale(scale),
                    ))
                    .id()
            });
            info!("Spawned {activated} trash items");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::testing::CountingLoader;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn filled_pool(loader: &CountingLoader, n: usize) -> TrashPool {
        let config = SailConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = TrashPool::new(config.trash_model_path.clone());
        for _ in 0..n {
            pool.create_trash(loader, &mut rng, &config);
        }
        pool
    }

    #[test]
    fn fifty_creations_load_the_model_once() {
        let loader = CountingLoader::new(ModelStatus::Pending);
        let pool = filled_pool(&loader, 50);
        assert_eq!(pool.slots().len(), 50);
        assert_eq!(loader.loads(), 1);
    }

    #[test]
    fn positions_stay_inside_spawn_square_at_fixed_height() {
        let loader = CountingLoader::new(ModelStatus::Pending);
        let pool = filled_pool(&loader, 200);
        for slot in pool.slots() {
            assert!((-150.0..150.0).contains(&slot.position.x), "{:?}", slot.position);
            assert!((-150.0..150.0).contains(&slot.position.z), "{:?}", slot.position);
            assert_eq!(slot.position.y, -0.5);
        }
    }

    #[test]
    fn new_slots_start_pending() {
        let loader = CountingLoader::new(ModelStatus::Pending);
        let pool = filled_pool(&loader, 5);
        assert_eq!(pool.pending_count(), 5);
        assert_eq!(pool.live_count(), 0);
        assert_eq!(pool.retired_count(), 0);
    }

    #[test]
    fn activate_only_touches_pending_slots() {
        let loader = CountingLoader::new(ModelStatus::Ready);
        let mut pool = filled_pool(&loader, 3);
        pool.slots[0].state = SlotState::Retired;

        let mut world = World::new();
        let activated = pool.activate(|_| world.spawn_empty().id());

        assert_eq!(activated, 2);
        assert_eq!(pool.slots[0].state, SlotState::Retired);
        assert!(pool.slots[1].is_alive());
        assert!(pool.slots[2].is_alive());
        assert_eq!(pool.activate(|_| world.spawn_empty().id()), 0);
    }

    // ── systems ───────────────────────────────────────────────────────────────

    fn build_test_app(status: ModelStatus) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(SailConfig::default());
        app.insert_resource(CountingLoader::new(status));
        app.init_resource::<TrashPool>();
        app.add_systems(Startup, spawn_trash_pool::<CountingLoader>);
        app.add_systems(Update, populate_trash_pool_system::<CountingLoader>);
        app
    }

    #[test]
    fn pool_goes_live_in_one_frame_when_model_ready() {
        let mut app = build_test_app(ModelStatus::Pending);
        app.update();
        assert_eq!(app.world().resource::<TrashPool>().pending_count(), 50);

        app.world()
            .resource::<CountingLoader>()
            .set_status(ModelStatus::Ready);
        app.update();

        let pool = app.world().resource::<TrashPool>();
        assert_eq!(pool.live_count(), 50);
        let mut query = app.world_mut().query_filtered::<Entity, With<Trash>>();
        assert_eq!(query.iter(app.world()).count(), 50);
        assert_eq!(app.world().resource::<CountingLoader>().loads(), 1);
    }

    #[test]
    fn failed_model_keeps_pool_pending() {
        let mut app = build_test_app(ModelStatus::Failed("bad gltf".into()));
        app.update();
        app.update();

        let pool = app.world().resource::<TrashPool>();
        assert_eq!(pool.pending_count(), 50);
        assert!(pool.model_failed);
    }
}
