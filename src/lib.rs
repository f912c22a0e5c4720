// Bang table editor core: model, validation, import/export and owner sync

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod bangs;
pub mod codec;
pub mod config;
pub mod editor;
pub mod events;
pub mod owner;
pub mod paths;
pub mod sync;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use bangs::{BangEntry, BangId, BangTable};
pub use config::EditorConfig;
pub use editor::{EditorSession, EditorState};
pub use owner::OwnerHandle;
