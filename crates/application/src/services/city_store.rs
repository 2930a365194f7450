//! Favorites-list service
//!
//! Owns the ordered, de-duplicated list of favorite places and the persisted
//! default city. Every successful mutation persists the whole list and
//! broadcasts the new state on the event bus.

use std::sync::Arc;

use domain::value_objects::Place;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::error::ApplicationError;
use crate::ports::{StateStore, StateStoreExt};

use super::events::EventBus;

/// Storage key for the favorites list (JSON array of places, newest first)
pub const CITIES_KEY: &str = "cities";

/// Storage key for the geolocation-fallback city (single JSON place)
pub const DEFAULT_CITY_KEY: &str = "default";

/// Ordered, name-unique favorites list with whole-list persistence
///
/// De-duplication and removal compare place names only; coordinates are
/// carried along but never consulted for identity.
pub struct CityStore {
    state: Arc<dyn StateStore>,
    cities: RwLock<Vec<Place>>,
    events: EventBus,
}

impl std::fmt::Debug for CityStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CityStore")
            .field("cities", &self.cities.read().len())
            .finish_non_exhaustive()
    }
}

impl CityStore {
    /// Create a store over the given persistence and event bus
    #[must_use]
    pub fn new(state: Arc<dyn StateStore>, events: EventBus) -> Self {
        Self {
            state,
            cities: RwLock::new(Vec::new()),
            events,
        }
    }

    /// Load the persisted favorites into memory and broadcast them
    ///
    /// Absent or malformed stored JSON degrades to the empty list; it is
    /// never an error.
    pub async fn load(&self) -> Result<Vec<Place>, ApplicationError> {
        let cities: Vec<Place> = match self.state.get_json(CITIES_KEY).await {
            Ok(Some(cities)) => cities,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Stored city list is unreadable, starting empty");
                Vec::new()
            },
        };

        *self.cities.write() = cities.clone();
        self.events.emit_cities(cities.clone());
        Ok(cities)
    }

    /// Current in-memory favorites, newest first
    #[must_use]
    pub fn cities(&self) -> Vec<Place> {
        self.cities.read().clone()
    }

    /// Whether a place name is already tracked
    #[must_use]
    pub fn is_tracked(&self, name: &str) -> bool {
        self.cities.read().iter().any(|c| c.name() == name)
    }

    /// Add a place to the front of the list
    ///
    /// A no-op returning `false` when an entry with the same name already
    /// exists; otherwise persists the updated list, broadcasts it, and
    /// returns `true`. When the persist fails, the in-memory insert is
    /// rolled back so memory never runs ahead of disk.
    pub async fn add(&self, place: Place) -> Result<bool, ApplicationError> {
        let name = place.name().to_string();
        {
            let mut cities = self.cities.write();
            if cities.iter().any(|c| c.same_city(&place)) {
                debug!(city = %name, "City already tracked, ignoring add");
                return Ok(false);
            }
            cities.insert(0, place);
        }
        if let Err(e) = self.persist().await {
            warn!(city = %name, error = %e, "Persist failed, rolling back add");
            self.cities.write().retain(|c| c.name() != name);
            return Err(e);
        }
        self.events.emit_cities(self.cities());
        Ok(true)
    }

    /// Remove the first entry sharing the place's name
    ///
    /// A no-op returning `false` when no entry matches; otherwise persists
    /// the updated list, broadcasts it, and returns `true`. When the persist
    /// fails, the removed entry is reinstated so memory never runs ahead of
    /// disk.
    pub async fn remove(&self, place: &Place) -> Result<bool, ApplicationError> {
        let (index, removed) = {
            let mut cities = self.cities.write();
            let Some(index) = cities.iter().position(|c| c.same_city(place)) else {
                debug!(city = %place.name(), "City not tracked, ignoring remove");
                return Ok(false);
            };
            (index, cities.remove(index))
        };
        if let Err(e) = self.persist().await {
            warn!(city = %removed.name(), error = %e, "Persist failed, rolling back remove");
            let mut cities = self.cities.write();
            let at = index.min(cities.len());
            cities.insert(at, removed);
            return Err(e);
        }
        self.events.emit_cities(self.cities());
        Ok(true)
    }

    /// Persist the geolocation-fallback city
    pub async fn set_default_city(&self, place: &Place) -> Result<(), ApplicationError> {
        self.state.put_json(DEFAULT_CITY_KEY, place).await
    }

    /// Read the geolocation-fallback city
    ///
    /// Absent or malformed stored JSON degrades to `None`.
    pub async fn default_city(&self) -> Result<Option<Place>, ApplicationError> {
        match self.state.get_json(DEFAULT_CITY_KEY).await {
            Ok(city) => Ok(city),
            Err(e) => {
                warn!(error = %e, "Stored default city is unreadable, treating as absent");
                Ok(None)
            },
        }
    }

    /// Whole-list overwrite of the persisted favorites
    async fn persist(&self) -> Result<(), ApplicationError> {
        let cities = self.cities();
        self.state.put_json(CITIES_KEY, &cities).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FlakyStateStore, MemoryStateStore};
    use domain::value_objects::GeoLocation;

    fn store() -> CityStore {
        CityStore::new(Arc::new(MemoryStateStore::default()), EventBus::new())
    }

    fn place(name: &str) -> Place {
        Place::new(name, GeoLocation::berlin()).expect("valid place")
    }

    #[tokio::test]
    async fn add_inserts_newest_first() {
        let store = store();
        store.add(place("Berlin")).await.expect("add");
        store.add(place("London")).await.expect("add");

        let cities = store.cities();
        assert_eq!(cities[0].name(), "London");
        assert_eq!(cities[1].name(), "Berlin");
    }

    #[tokio::test]
    async fn duplicate_name_leaves_list_unchanged() {
        let store = store();
        store.add(place("Berlin")).await.expect("add");

        // Same name, different coordinates - still a duplicate
        let other = Place::new("Berlin", GeoLocation::london()).expect("valid place");
        let added = store.add(other).await.expect("add");

        assert!(!added);
        assert_eq!(store.cities().len(), 1);
    }

    #[tokio::test]
    async fn add_then_remove_restores_prior_state() {
        let store = store();
        store.add(place("Berlin")).await.expect("add");
        let before = store.cities();

        store.add(place("London")).await.expect("add");
        let removed = store.remove(&place("London")).await.expect("remove");

        assert!(removed);
        assert_eq!(store.cities(), before);
    }

    #[tokio::test]
    async fn remove_unknown_is_noop() {
        let store = store();
        store.add(place("Berlin")).await.expect("add");

        let removed = store.remove(&place("Paris")).await.expect("remove");
        assert!(!removed);
        assert_eq!(store.cities().len(), 1);
    }

    #[tokio::test]
    async fn persists_and_reloads_structurally_identical_list() {
        let state = Arc::new(MemoryStateStore::default());
        let store = CityStore::new(state.clone(), EventBus::new());
        store.add(place("Berlin")).await.expect("add");
        store.add(place("London")).await.expect("add");
        let written = store.cities();

        // Fresh store over the same persistence
        let reloaded_store = CityStore::new(state, EventBus::new());
        let reloaded = reloaded_store.load().await.expect("load");

        assert_eq!(reloaded, written);
    }

    #[tokio::test]
    async fn load_defaults_to_empty_on_absence() {
        let store = store();
        let cities = store.load().await.expect("load");
        assert!(cities.is_empty());
    }

    #[tokio::test]
    async fn load_degrades_to_empty_on_malformed_json() {
        let state = Arc::new(MemoryStateStore::default());
        state
            .put(CITIES_KEY, b"{ definitely not a list".to_vec())
            .await
            .expect("put");

        let store = CityStore::new(state, EventBus::new());
        let cities = store.load().await.expect("load");
        assert!(cities.is_empty());
    }

    #[tokio::test]
    async fn default_city_round_trips() {
        let store = store();
        let city = place("Berlin");
        store.set_default_city(&city).await.expect("set");

        let loaded = store.default_city().await.expect("get");
        assert_eq!(loaded, Some(city));
    }

    #[tokio::test]
    async fn malformed_default_city_degrades_to_absent() {
        let state = Arc::new(MemoryStateStore::default());
        state
            .put(DEFAULT_CITY_KEY, b"broken".to_vec())
            .await
            .expect("put");

        let store = CityStore::new(state, EventBus::new());
        assert_eq!(store.default_city().await.expect("get"), None);
    }

    #[tokio::test]
    async fn mutations_broadcast_on_the_bus() {
        let bus = EventBus::new();
        let store = CityStore::new(Arc::new(MemoryStateStore::default()), bus.clone());
        let mut updates = bus.subscribe_cities();

        store.add(place("Berlin")).await.expect("add");
        let update = updates.recv().await.expect("event");
        assert_eq!(update.len(), 1);

        store.remove(&place("Berlin")).await.expect("remove");
        let update = updates.recv().await.expect("event");
        assert!(update.is_empty());
    }

    #[tokio::test]
    async fn failed_persist_rolls_back_add() {
        let bus = EventBus::new();
        let state = Arc::new(FlakyStateStore::default());
        let store = CityStore::new(state.clone(), bus.clone());
        let mut updates = bus.subscribe_cities();

        state.fail_puts(true);
        let result = store.add(place("Berlin")).await;

        assert!(result.is_err());
        assert!(store.cities().is_empty());
        assert!(updates.try_recv().is_err());

        // The list stays consistent once writes recover
        state.fail_puts(false);
        assert!(store.add(place("Berlin")).await.expect("add"));
        assert_eq!(store.cities().len(), 1);
    }

    #[tokio::test]
    async fn failed_persist_rolls_back_remove() {
        let bus = EventBus::new();
        let state = Arc::new(FlakyStateStore::default());
        let store = CityStore::new(state.clone(), bus.clone());
        store.add(place("Berlin")).await.expect("add");
        store.add(place("London")).await.expect("add");
        let before = store.cities();
        let mut updates = bus.subscribe_cities();

        state.fail_puts(true);
        let result = store.remove(&place("Berlin")).await;

        assert!(result.is_err());
        assert_eq!(store.cities(), before);
        assert!(updates.try_recv().is_err());
    }

    #[tokio::test]
    async fn noop_mutations_do_not_broadcast() {
        let bus = EventBus::new();
        let store = CityStore::new(Arc::new(MemoryStateStore::default()), bus.clone());
        let mut updates = bus.subscribe_cities();

        store.remove(&place("Nowhere")).await.expect("remove");
        assert!(updates.try_recv().is_err());
    }
}
