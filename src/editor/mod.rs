// Editor model - candidate table, validation, and the session adapter

mod ops;
mod session;
mod state;
mod validate;

pub use ops::{add_entry, apply, rename_entry, EditorError, Operation};
pub use session::{EditorSession, PendingSave, SaveOutcome};
pub use state::EditorState;
pub use validate::{validate_for_save, ValidationError};
