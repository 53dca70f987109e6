pub mod ambient;
pub mod document;
pub mod scroll;
pub mod storage;
pub mod theme_preference;
pub mod theme_state;

pub use document::apply_theme_class;
pub use scroll::{ scroll_to_section, section_anchor };
pub use storage::{ MemoryStore, PreferenceStore, UnavailableStore };
pub use theme_preference::ThemePreference;
pub use theme_state::{ ThemeFlag, ThemeState };
