use log::{ debug, info, warn };
use crate::configs::THEME_STORAGE_KEY;
use crate::utils::ambient::{ platform_ambient, AmbientScheme };
use crate::utils::storage::PreferenceStore;
use crate::utils::theme_state::ThemeFlag;

/// Decides the initial theme and remembers the visitor's explicit choice.
///
/// An explicit choice in the store always wins over the ambient scheme.
/// Storage failures never surface: reads fall back to the ambient scheme
/// and writes are dropped, so the current session still renders correctly.
pub struct ThemePreference {
    store: Box<dyn PreferenceStore>,
    ambient: AmbientScheme,
    key: String,
}

impl ThemePreference {
    pub fn new(
        store: impl PreferenceStore + 'static,
        ambient: impl Fn() -> bool + 'static
    ) -> Self {
        Self {
            store: Box::new(store),
            ambient: Box::new(ambient),
            key: THEME_STORAGE_KEY.to_string(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// localStorage and `prefers-color-scheme` in the browser; an in-memory
    /// store and the environment override elsewhere.
    pub fn for_platform() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            use crate::utils::storage::{ BrowserStorage, UnavailableStore };
            match BrowserStorage::open() {
                Ok(storage) => Self::from_parts(Box::new(storage), platform_ambient()),
                Err(e) => {
                    warn!("Theme choice will not be remembered: {}", e);
                    Self::from_parts(Box::new(UnavailableStore::new(e.to_string())), platform_ambient())
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            use crate::utils::storage::MemoryStore;
            debug!("No persistent store on this platform, theme choice lasts for the session");
            Self::from_parts(Box::new(MemoryStore::new()), platform_ambient())
        }
    }

    fn from_parts(store: Box<dyn PreferenceStore>, ambient: AmbientScheme) -> Self {
        Self {
            store,
            ambient,
            key: THEME_STORAGE_KEY.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The stored choice, if there is a readable one.
    pub fn stored(&self) -> Option<ThemeFlag> {
        match self.store.get(&self.key) {
            Ok(value) => value.as_deref().and_then(ThemeFlag::from_stored),
            Err(e) => {
                warn!("Could not read theme preference: {}", e);
                None
            }
        }
    }

    pub fn resolve(&self) -> ThemeFlag {
        if let Some(flag) = self.stored() {
            debug!("Resolved theme {} from stored preference", flag);
            return flag;
        }
        let flag = ThemeFlag::from_dark((self.ambient)());
        debug!("Resolved theme {} from ambient color scheme", flag);
        flag
    }

    pub fn set(&self, flag: ThemeFlag) {
        match self.store.set(&self.key, flag.as_str()) {
            Ok(()) => info!("Theme set to {}", flag),
            Err(e) => warn!("Theme set to {} but not saved: {}", flag, e),
        }
    }
}

impl std::fmt::Debug for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemePreference").field("key", &self.key).finish_non_exhaustive()
    }
}
