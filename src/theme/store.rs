use std::rc::Rc;

use crate::error::UiError;

use super::Theme;

/// Key-value slot holding the user's explicit theme choice.
pub trait PreferenceStorage {
    fn load(&self) -> Result<Option<String>, UiError>;
    fn save(&self, value: &str) -> Result<(), UiError>;
}

/// Pushes the current theme to the styling layer.
pub trait ThemePresenter {
    fn apply(&self, theme: Theme);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub value: Theme,
    pub initialized: bool,
}

pub type SubscriptionId = usize;

type Subscriber = Rc<dyn Fn(Theme)>;

/// Single owner of the page theme.
///
/// Resolution order on startup is stored preference, then the ambient
/// color-scheme signal, then light. Once a preference exists (found on
/// startup or written by [`ThemeStore::toggle`]) ambient changes are ignored
/// for the rest of the session.
pub struct ThemeStore<S, P> {
    storage: S,
    presenter: P,
    state: ThemeState,
    pinned: bool,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: SubscriptionId,
}

impl<S: PreferenceStorage, P: ThemePresenter> ThemeStore<S, P> {
    pub fn new(storage: S, presenter: P) -> Self {
        Self {
            storage,
            presenter,
            state: ThemeState::default(),
            pinned: false,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn theme(&self) -> Theme {
        self.state.value
    }

    pub fn has_explicit_preference(&self) -> bool {
        self.pinned
    }

    /// Runs once per session; later calls return the current theme untouched.
    pub fn resolve_initial(&mut self, ambient: Option<Theme>) -> Theme {
        if self.state.initialized {
            return self.state.value;
        }

        let stored = match self.storage.load() {
            Ok(value) => value.as_deref().and_then(Theme::from_stored),
            Err(e) => {
                log::debug!("theme preference unreadable, using ambient/default: {}", e);
                None
            }
        };
        self.pinned = stored.is_some();

        let theme = stored.or(ambient).unwrap_or_default();
        log::debug!(
            "resolved initial theme {} (stored: {:?}, ambient: {:?})",
            theme,
            stored,
            ambient
        );
        self.set(theme);
        theme
    }

    /// Flips the theme and persists it. A failed write keeps the in-memory
    /// and presented theme and still pins the session against ambient changes.
    pub fn toggle(&mut self) -> Theme {
        let next = self.state.value.toggled();
        self.pinned = true;
        if let Err(e) = self.storage.save(next.as_str()) {
            log::warn!("could not persist theme preference: {}", e);
        }
        self.set(next);
        log::info!("theme switched to {}", next);
        next
    }

    /// Applies an ambient color-scheme change. Returns whether the theme changed.
    pub fn ambient_changed(&mut self, ambient: Theme) -> bool {
        if self.pinned || !self.state.initialized || ambient == self.state.value {
            return false;
        }
        self.set(ambient);
        true
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(Theme) + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    fn set(&mut self, theme: Theme) {
        self.state = ThemeState {
            value: theme,
            initialized: true,
        };
        self.presenter.apply(theme);
        for (_, subscriber) in &self.subscribers {
            subscriber(theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::{Cell, RefCell};

    #[derive(Clone, Default)]
    struct MemoryStorage {
        value: Rc<RefCell<Option<String>>>,
        broken: bool,
    }

    impl MemoryStorage {
        fn with(value: &str) -> Self {
            let storage = Self::default();
            *storage.value.borrow_mut() = Some(value.to_string());
            storage
        }

        fn broken() -> Self {
            Self {
                broken: true,
                ..Self::default()
            }
        }

        fn stored(&self) -> Option<String> {
            self.value.borrow().clone()
        }
    }

    impl PreferenceStorage for MemoryStorage {
        fn load(&self) -> Result<Option<String>, UiError> {
            if self.broken {
                return Err(UiError::StorageUnavailable);
            }
            Ok(self.value.borrow().clone())
        }

        fn save(&self, value: &str) -> Result<(), UiError> {
            if self.broken {
                return Err(UiError::StorageUnavailable);
            }
            *self.value.borrow_mut() = Some(value.to_string());
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct RootAttribute(Rc<RefCell<Option<Theme>>>);

    impl RootAttribute {
        fn get(&self) -> Option<Theme> {
            *self.0.borrow()
        }
    }

    impl ThemePresenter for RootAttribute {
        fn apply(&self, theme: Theme) {
            *self.0.borrow_mut() = Some(theme);
        }
    }

    fn store(storage: &MemoryStorage) -> (ThemeStore<MemoryStorage, RootAttribute>, RootAttribute) {
        let root = RootAttribute::default();
        (ThemeStore::new(storage.clone(), root.clone()), root)
    }

    #[test]
    fn starts_uninitialized_on_light() {
        let (store, root) = store(&MemoryStorage::default());
        assert_eq!(store.state(), ThemeState::default());
        assert!(!store.state().initialized);
        assert_eq!(root.get(), None);
    }

    #[test]
    fn ambient_dark_wins_without_stored_preference() {
        let (mut store, root) = store(&MemoryStorage::default());
        assert_eq!(store.resolve_initial(Some(Theme::Dark)), Theme::Dark);
        assert!(store.state().initialized);
        assert_eq!(root.get(), Some(Theme::Dark));
        assert!(!store.has_explicit_preference());
    }

    #[test]
    fn stored_preference_wins_over_ambient() {
        let (mut store, _) = store(&MemoryStorage::with("light"));
        assert_eq!(store.resolve_initial(Some(Theme::Dark)), Theme::Light);
        assert!(store.has_explicit_preference());
    }

    #[test]
    fn defaults_to_light_without_any_signal() {
        let (mut store, root) = store(&MemoryStorage::default());
        assert_eq!(store.resolve_initial(None), Theme::Light);
        assert_eq!(root.get(), Some(Theme::Light));
    }

    #[test]
    fn garbage_in_storage_counts_as_no_preference() {
        let (mut store, _) = store(&MemoryStorage::with("sepia"));
        assert_eq!(store.resolve_initial(Some(Theme::Dark)), Theme::Dark);
        assert!(!store.has_explicit_preference());
    }

    #[test]
    fn resolution_runs_only_once() {
        let (mut store, _) = store(&MemoryStorage::default());
        store.resolve_initial(Some(Theme::Dark));
        assert_eq!(store.resolve_initial(Some(Theme::Light)), Theme::Dark);
    }

    #[test]
    fn unavailable_storage_falls_back_silently() {
        let storage = MemoryStorage::broken();
        let (mut store, root) = store(&storage);
        assert_eq!(store.resolve_initial(Some(Theme::Dark)), Theme::Dark);

        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(root.get(), Some(Theme::Light));
        assert_eq!(storage.stored(), None);
    }

    #[test]
    fn toggle_persists_and_presents_the_new_theme() {
        let storage = MemoryStorage::default();
        let (mut store, root) = store(&storage);
        store.resolve_initial(None);

        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(storage.stored().as_deref(), Some("dark"));
        assert_eq!(root.get(), Some(Theme::Dark));
    }

    #[test]
    fn ambient_changes_apply_until_the_user_toggles() {
        let (mut store, root) = store(&MemoryStorage::default());
        store.resolve_initial(Some(Theme::Light));

        assert!(store.ambient_changed(Theme::Dark));
        assert_eq!(root.get(), Some(Theme::Dark));
        assert!(!store.ambient_changed(Theme::Dark));

        store.toggle();
        assert!(!store.ambient_changed(Theme::Dark));
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn ambient_changes_are_ignored_with_a_stored_preference() {
        let (mut store, _) = store(&MemoryStorage::with("dark"));
        store.resolve_initial(Some(Theme::Light));
        assert!(!store.ambient_changed(Theme::Light));
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn ambient_changes_before_resolution_are_ignored() {
        let (mut store, root) = store(&MemoryStorage::default());
        assert!(!store.ambient_changed(Theme::Dark));
        assert_eq!(root.get(), None);
    }

    #[test]
    fn subscribers_see_every_change_until_unsubscribed() {
        let (mut store, _) = store(&MemoryStorage::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let id = store.subscribe({
            let seen = seen.clone();
            move |theme| seen.borrow_mut().push(theme)
        });

        store.resolve_initial(None);
        store.toggle();
        assert!(store.unsubscribe(id));
        store.toggle();

        assert_eq!(*seen.borrow(), vec![Theme::Light, Theme::Dark]);
        assert!(!store.unsubscribe(id));
    }

    #[test]
    fn unsubscribing_one_keeps_the_others() {
        let (mut store, _) = store(&MemoryStorage::default());
        let calls = Rc::new(Cell::new(0));
        let first = store.subscribe(|_| {});
        store.subscribe({
            let calls = calls.clone();
            move |_| calls.set(calls.get() + 1)
        });
        store.unsubscribe(first);
        store.resolve_initial(None);
        assert_eq!(calls.get(), 1);
    }

    proptest! {
        #[test]
        fn persisted_value_tracks_toggle_parity(toggles in 0usize..64) {
            let storage = MemoryStorage::default();
            let (mut store, root) = store(&storage);
            store.resolve_initial(None);

            for _ in 0..toggles {
                store.toggle();
                prop_assert_eq!(root.get(), Some(store.theme()));
            }

            let expected = if toggles % 2 == 0 { Theme::Light } else { Theme::Dark };
            prop_assert_eq!(store.theme(), expected);
            if toggles > 0 {
                prop_assert_eq!(storage.stored(), Some(expected.as_str().to_string()));
            }
        }
    }
}
