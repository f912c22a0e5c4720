// Editor session - applies operations to the state and notifies the view
//
// Thin adapter over the pure operations in ops.rs. It owns the injected
// collaborators (owner link, id generator, defaults, parser, emitter) and
// turns every outcome into a bangs_updated event or a user notification.

use super::{add_entry, apply, EditorError, EditorState, Operation};
use crate::bangs::{
    BangEntry, BangTable, BuiltinDefaults, DefaultsProvider, IdGenerator, UuidIdGenerator,
};
use crate::codec::{self, BangParser, ExportError, ExportFile, ImportError, JsonBangParser};
use crate::config::EditorConfig;
use crate::editor::ValidationError;
use crate::events::{BangEventEmitter, BangsUpdatedPayload, NotificationPayload};
use crate::sync::{self, BangSource, LinkError, OwnerLink, SaveError};
use std::sync::Arc;
use std::time::Duration;

/// Result of a save request that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The owner acknowledged the table
    Saved,
    /// There were no unsaved changes, nothing was sent
    NothingToSave,
}

/// Snapshot of the table taken when a save starts
///
/// Lets the caller release the session while the commit is in flight and
/// keep editing; `finish_save` only clears the dirty flag if the table still
/// matches this snapshot.
#[derive(Debug, Clone)]
pub struct PendingSave {
    snapshot: BangTable,
    timeout: Duration,
}

impl PendingSave {
    pub fn table(&self) -> &BangTable {
        &self.snapshot
    }

    /// Run the save protocol for the snapshot against `link`
    pub async fn send<L: OwnerLink + ?Sized>(&self, link: &L) -> Result<(), SaveError> {
        sync::save(link, &self.snapshot, self.timeout).await
    }
}

/// Map a save error to the message shown to the user
pub fn to_user_error(error: &SaveError) -> String {
    match error {
        SaveError::Validation(ValidationError::EmptyKey { .. }) => {
            "Cannot save empty bang".to_string()
        }
        SaveError::Sync(_) => "Failed to save bangs".to_string(),
    }
}

/// One editing session over the bang table
pub struct EditorSession<L: OwnerLink, E: BangEventEmitter> {
    state: EditorState,
    config: EditorConfig,
    link: Arc<L>,
    emitter: Arc<E>,
    ids: Arc<dyn IdGenerator>,
    defaults: Arc<dyn DefaultsProvider>,
    parser: Arc<dyn BangParser>,
}

impl<L: OwnerLink, E: BangEventEmitter> EditorSession<L, E> {
    /// Create a session with an empty table, UUID ids, built-in defaults
    /// and the JSON import parser
    pub fn new(link: Arc<L>, emitter: Arc<E>, config: EditorConfig) -> Self {
        Self {
            state: EditorState::default(),
            config,
            link,
            emitter,
            ids: Arc::new(UuidIdGenerator),
            defaults: Arc::new(BuiltinDefaults),
            parser: Arc::new(JsonBangParser),
        }
    }

    /// Set the id generator (builder pattern)
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Set the default-set provider (builder pattern)
    pub fn with_defaults(mut self, defaults: Arc<dyn DefaultsProvider>) -> Self {
        self.defaults = defaults;
        self
    }

    /// Set the import parser (builder pattern)
    pub fn with_parser(mut self, parser: Arc<dyn BangParser>) -> Self {
        self.parser = parser;
        self
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn table(&self) -> &BangTable {
        &self.state.table
    }

    pub fn is_dirty(&self) -> bool {
        self.state.dirty
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Shared handle to the owner link, for saves run outside the session
    pub fn link(&self) -> Arc<L> {
        self.link.clone()
    }

    pub fn help_url(&self) -> &str {
        &self.config.help_url
    }

    /// Replace the state with the owner's current table
    pub async fn load<S: BangSource + ?Sized>(&mut self, source: &S) -> Result<(), LinkError> {
        match source.read().await {
            Ok(table) => {
                crate::info!("Loaded {} bangs into editor", table.len());
                self.ids.reserve(&table);
                self.state = EditorState::loaded(table);
                self.emit_updated("load", None);
                Ok(())
            }
            Err(e) => {
                crate::error!("Failed to load bangs: {}", e);
                self.notify_error("Failed to load bangs");
                Err(e)
            }
        }
    }

    /// Append a placeholder entry after all existing ones
    #[must_use = "this returns a Result that should be handled"]
    pub fn add_entry(&mut self) -> Result<(String, BangEntry), EditorError> {
        let id = self.ids.next_id();
        match add_entry(
            &self.state.table,
            id,
            &self.config.placeholder_trigger,
            self.config.placeholder_url.clone(),
        ) {
            Ok((table, trigger, entry)) => {
                self.state = EditorState { table, dirty: true };
                self.emit_updated("add", Some(trigger.clone()));
                crate::debug!("Added bang '{}' at pos {}", trigger, entry.pos);
                Ok((trigger, entry))
            }
            Err(e) => {
                self.notify_error(&e.to_string());
                Err(e)
            }
        }
    }

    #[must_use = "this returns a Result that should be handled"]
    pub fn rename_entry(&mut self, from: &str, to: &str) -> Result<(), EditorError> {
        self.dispatch(
            Operation::RenameEntry {
                from: from.to_string(),
                to: to.to_string(),
            },
            Some(to.to_string()),
        )
    }

    #[must_use = "this returns a Result that should be handled"]
    pub fn update_url(&mut self, trigger: &str, url: &str) -> Result<(), EditorError> {
        self.dispatch(
            Operation::UpdateUrl {
                trigger: trigger.to_string(),
                url: url.to_string(),
            },
            Some(trigger.to_string()),
        )
    }

    #[must_use = "this returns a Result that should be handled"]
    pub fn update_pos(&mut self, trigger: &str, pos: i64) -> Result<(), EditorError> {
        self.dispatch(
            Operation::UpdatePos {
                trigger: trigger.to_string(),
                pos,
            },
            Some(trigger.to_string()),
        )
    }

    #[must_use = "this returns a Result that should be handled"]
    pub fn remove_entry(&mut self, trigger: &str) -> Result<(), EditorError> {
        self.dispatch(
            Operation::RemoveEntry {
                trigger: trigger.to_string(),
            },
            Some(trigger.to_string()),
        )
    }

    /// Overwrite the table with the default set
    pub fn reset_to_defaults(&mut self) {
        let defaults = self.defaults.default_table();
        crate::info!("Resetting bangs to {} defaults", defaults.len());
        self.ids.reserve(&defaults);
        // Reset cannot fail
        let _ = self.dispatch(Operation::Reset { defaults }, None);
    }

    /// Parse an import file and fold it into the table
    ///
    /// Returns the number of entries read from the file. On failure the
    /// table is left untouched.
    #[must_use = "this returns a Result that should be handled"]
    pub fn import_bytes(&mut self, raw: &[u8]) -> Result<usize, ImportError> {
        let imported = match codec::import_table(raw, &*self.parser) {
            Ok(table) => table,
            Err(e) => {
                self.notify_error("Invalid file, unable to import");
                return Err(e);
            }
        };

        let count = imported.len();
        let policy = self.config.merge_policy;
        self.ids.reserve(&imported);
        // Import cannot fail once parsed
        let _ = self.dispatch(Operation::Import { imported, policy }, None);
        crate::info!("Imported {} bangs ({:?})", count, policy);
        Ok(count)
    }

    /// Serialize the current table as a downloadable file
    pub fn export(&self) -> Result<ExportFile, ExportError> {
        codec::export_file(&self.state.table, &self.config.export_file_name)
    }

    /// Snapshot the table for saving, or `None` if there is nothing unsaved
    pub fn begin_save(&self) -> Option<PendingSave> {
        if !self.state.can_save() {
            return None;
        }
        Some(PendingSave {
            snapshot: self.state.table.clone(),
            timeout: self.config.save_timeout(),
        })
    }

    /// Record the result of a save started with [`begin_save`](Self::begin_save)
    pub fn finish_save(
        &mut self,
        pending: PendingSave,
        result: Result<(), SaveError>,
    ) -> Result<SaveOutcome, SaveError> {
        match result {
            Ok(()) => {
                let _ = self.dispatch(
                    Operation::Acknowledge {
                        saved: pending.snapshot,
                    },
                    None,
                );
                if self.state.dirty {
                    crate::debug!("Table edited while saving, still unsaved");
                }
                self.emitter
                    .emit_notification(NotificationPayload::success("Saved bangs"));
                Ok(SaveOutcome::Saved)
            }
            Err(e) => {
                self.notify_error(&to_user_error(&e));
                Err(e)
            }
        }
    }

    /// Validate and commit the table to the owner process
    pub async fn save(&mut self) -> Result<SaveOutcome, SaveError> {
        let Some(pending) = self.begin_save() else {
            crate::debug!("No unsaved changes, skipping save");
            return Ok(SaveOutcome::NothingToSave);
        };

        let link = self.link.clone();
        let result = pending.send(&*link).await;
        self.finish_save(pending, result)
    }

    fn dispatch(&mut self, op: Operation, trigger: Option<String>) -> Result<(), EditorError> {
        let action = op.name();
        match apply(&self.state, op) {
            Ok(next) => {
                self.state = next;
                self.emit_updated(action, trigger);
                Ok(())
            }
            Err(e) => {
                crate::warn!("{} failed: {}", action, e);
                self.notify_error(&e.to_string());
                Err(e)
            }
        }
    }

    fn emit_updated(&self, action: &str, trigger: Option<String>) {
        self.emitter.emit_bangs_updated(BangsUpdatedPayload {
            action: action.to_string(),
            trigger,
            entry_count: self.state.table.len(),
            dirty: self.state.dirty,
        });
    }

    fn notify_error(&self, message: &str) {
        self.emitter
            .emit_notification(NotificationPayload::error(message));
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
