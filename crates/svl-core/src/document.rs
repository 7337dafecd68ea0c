//! The shader variant list document.
//!
//! A document owns one [`ShaderVariantList`] and is the only place it is
//! replaced. Every replacement resolves the shader's option schema before
//! anything is assigned and notifies the host afterwards. Only
//! [`ShaderVariantDocument::set_variant_list_source_data`] initializes an
//! empty list from the shader's system option setting; undo/redo, appends
//! and defragmentation keep the list they produce as is.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use svl_model::{
    OptionDescriptor, OptionName, OptionValue, OptionValues, ShaderVariantList, StableId,
    VariantInfo,
};
use svl_schema::{
    OptionSchema, SchemaError, SchemaResolver, SchemaView, SettingsLoader,
    resolve_path_reference, settings_path_for,
};

use crate::config::ExpansionOptions;
use crate::defrag::defragment;
use crate::diff::{EditOutcome, EditSession};
use crate::dirty::DirtyTracker;
use crate::enumerate::expand_from_settings;
use crate::error::{CoreError, Result};
use crate::host::{
    DocumentEvent, DocumentId, NotificationSink, NullSink, UndoEntry, UndoHistory,
    UndoRedoRegistrar,
};
use crate::sparse::expand_sparse_set;

/// External services a document reads from.
#[derive(Clone)]
pub struct DocumentServices {
    pub resolver: Arc<dyn SchemaResolver>,
    pub settings: Arc<dyn SettingsLoader>,
}

impl DocumentServices {
    pub fn new(
        resolver: impl SchemaResolver + 'static,
        settings: impl SettingsLoader + 'static,
    ) -> Self {
        Self {
            resolver: Arc::new(resolver),
            settings: Arc::new(settings),
        }
    }
}

pub struct ShaderVariantDocument<N = NullSink, U = UndoHistory> {
    id: DocumentId,
    /// Location of the document itself; relative shader references are
    /// resolved against its folder.
    document_path: Option<PathBuf>,
    list: ShaderVariantList,
    schema: SchemaView,
    edit: Option<EditSession>,
    dirty: DirtyTracker,
    options: ExpansionOptions,
    services: DocumentServices,
    notifier: N,
    history: U,
}

impl<N: NotificationSink, U: UndoRedoRegistrar> ShaderVariantDocument<N, U> {
    pub fn new(id: DocumentId, services: DocumentServices, notifier: N, history: U) -> Self {
        Self {
            id,
            document_path: None,
            list: ShaderVariantList::default(),
            schema: SchemaView::unloaded(),
            edit: None,
            dirty: DirtyTracker::new(),
            options: ExpansionOptions::default(),
            services,
            notifier,
            history,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ExpansionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn document_path(&self) -> Option<&Path> {
        self.document_path.as_deref()
    }

    pub fn options(&self) -> &ExpansionOptions {
        &self.options
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn history(&self) -> &U {
        &self.history
    }

    pub fn is_modified(&self) -> bool {
        self.dirty.is_dirty()
    }

    /// Record that the current content has been persisted.
    pub fn mark_saved(&mut self, saved_to: Option<PathBuf>) {
        if saved_to.is_some() {
            self.document_path = saved_to;
        }
        self.dirty.mark_clean();
    }

    /// Start a new list for a shader. Runs the empty-list initialization,
    /// and leaves the document unmodified.
    pub fn create_from_shader(&mut self, shader_path: impl Into<String>) -> Result<()> {
        self.set_variant_list_source_data(ShaderVariantList::new(shader_path))?;
        self.dirty.mark_clean();
        Ok(())
    }

    /// Adopt a list read from `document_path`, leaving the document
    /// unmodified. On failure the previous content and path are kept.
    pub fn load_variant_list(
        &mut self,
        document_path: Option<PathBuf>,
        list: ShaderVariantList,
    ) -> Result<()> {
        let previous = std::mem::replace(&mut self.document_path, document_path);
        if let Err(error) = self.set_variant_list_source_data(list) {
            self.document_path = previous;
            return Err(error);
        }
        self.dirty.mark_clean();
        Ok(())
    }

    /// Drop content, any open edit session, the schema and dirty state.
    pub fn clear(&mut self) {
        self.document_path = None;
        self.list = ShaderVariantList::default();
        self.schema = SchemaView::unloaded();
        self.edit = None;
        self.dirty = DirtyTracker::new();
    }

    pub fn variant_list_source_data(&self) -> &ShaderVariantList {
        &self.list
    }

    /// Direct access for hosts editing rows, normally between
    /// [`begin_edit`](Self::begin_edit) and [`end_edit`](Self::end_edit).
    pub fn variant_list_mut(&mut self) -> &mut ShaderVariantList {
        &mut self.list
    }

    pub fn schema(&self) -> &SchemaView {
        &self.schema
    }

    pub fn option_descriptor_count(&self) -> usize {
        self.schema.count()
    }

    pub fn option_descriptor(
        &self,
        index: usize,
    ) -> std::result::Result<&OptionDescriptor, SchemaError> {
        self.schema.descriptor_at(index)
    }

    /// Replace the list.
    ///
    /// An empty incoming list is initialized from the shader's system option
    /// setting. Fails without changing anything when the shader's schema
    /// cannot be resolved or initialization is rejected.
    pub fn set_variant_list_source_data(&mut self, list: ShaderVariantList) -> Result<()> {
        let shader_path =
            resolve_path_reference(self.document_path.as_deref(), &list.shader_file_path);
        let schema = self.load_schema(&shader_path)?;

        let mut list = list;
        if list.is_empty() {
            list.variants = self.initial_rows(&schema, &shader_path)?;
        }
        self.commit(schema, &shader_path, list);
        Ok(())
    }

    /// Apply one side of an [`UndoEntry`]. The snapshot is taken as is; an
    /// empty snapshot stays empty.
    pub fn restore(&mut self, state: ShaderVariantList) -> Result<()> {
        self.replace_verbatim(state)
    }

    /// Append one row with no options set. Returns its id.
    pub fn add_one_row(&mut self) -> Result<StableId> {
        let shader_path =
            resolve_path_reference(self.document_path.as_deref(), &self.list.shader_file_path);
        self.load_schema(&shader_path)?;
        let stable_id = self
            .list
            .next_stable_id()
            .ok_or(CoreError::StableIdsExhausted)?;
        self.list
            .variants
            .push(VariantInfo::new(stable_id, OptionValues::new()));
        self.dirty.mark_dirty();
        tracing::debug!(document = %self.id, %stable_id, "added variant row");
        Ok(stable_id)
    }

    /// Append rows built from a sparse set of option columns.
    ///
    /// `matrix` holds `headers.len()` values per row. Any other length is
    /// rejected and the list is left as it was.
    pub fn append_sparse_variant_set(
        &mut self,
        headers: &[OptionName],
        matrix: &[OptionValue],
    ) -> Result<()> {
        let Some(schema) = self.schema.schema() else {
            tracing::error!(document = %self.id, "cannot append variants: schema not loaded");
            return Err(CoreError::SchemaUnavailable {
                shader_path: PathBuf::from(&self.list.shader_file_path),
                source: SchemaError::NotLoaded,
            });
        };
        let rows = expand_sparse_set(&self.list, schema, headers, matrix).inspect_err(|e| {
            tracing::error!(document = %self.id, "append sparse variant set: {e}");
        })?;
        let mut updated = self.list.clone();
        updated.variants.extend(rows);
        self.replace_verbatim(updated)
    }

    /// Deduplicate the list and renumber its rows `1..=N`.
    pub fn defragment_variant_list(&mut self) -> Result<()> {
        let compacted = defragment(&self.list)?;
        self.replace_verbatim(compacted)
    }

    pub fn is_edit_open(&self) -> bool {
        self.edit.is_some()
    }

    /// Snapshot the list before a mutation. Sessions do not nest.
    pub fn begin_edit(&mut self) -> Result<()> {
        if self.edit.is_some() {
            return Err(CoreError::EditSessionActive);
        }
        self.edit = Some(EditSession::begin(&self.list));
        Ok(())
    }

    /// Close the edit session. When the list changed observably, an undo
    /// entry is registered and the host is notified. Returns whether that
    /// happened.
    pub fn end_edit(&mut self) -> Result<bool> {
        let session = self.edit.take().ok_or(CoreError::NoEditSession)?;
        match session.finish(&self.list) {
            EditOutcome::Unchanged => Ok(false),
            EditOutcome::Modified { undo, redo } => {
                self.history.register(UndoEntry {
                    document: self.id,
                    undo,
                    redo,
                });
                self.notifier
                    .notify(DocumentEvent::ObjectInfoInvalidated, self.id);
                self.notifier.notify(DocumentEvent::Modified, self.id);
                self.dirty.mark_dirty();
                Ok(true)
            }
        }
    }

    /// Replace the list without initializing it when empty.
    fn replace_verbatim(&mut self, list: ShaderVariantList) -> Result<()> {
        let shader_path =
            resolve_path_reference(self.document_path.as_deref(), &list.shader_file_path);
        let schema = self.load_schema(&shader_path)?;
        self.commit(schema, &shader_path, list);
        Ok(())
    }

    fn commit(&mut self, schema: Arc<OptionSchema>, shader_path: &Path, list: ShaderVariantList) {
        tracing::info!(
            document = %self.id,
            shader = %shader_path.display(),
            rows = list.len(),
            "variant list replaced"
        );
        self.schema = SchemaView::loaded(schema);
        self.list = list;
        self.notifier
            .notify(DocumentEvent::ObjectInfoInvalidated, self.id);
        self.notifier.notify(DocumentEvent::Modified, self.id);
        self.dirty.mark_dirty();
    }

    fn load_schema(&self, shader_path: &Path) -> Result<Arc<OptionSchema>> {
        self.services
            .resolver
            .load_schema(shader_path)
            .map_err(|source| {
                tracing::error!(
                    document = %self.id,
                    shader = %shader_path.display(),
                    "could not load shader option schema: {source}"
                );
                CoreError::SchemaUnavailable {
                    shader_path: shader_path.to_path_buf(),
                    source,
                }
            })
    }

    fn initial_rows(&self, schema: &OptionSchema, shader_path: &Path) -> Result<Vec<VariantInfo>> {
        let settings_path = settings_path_for(shader_path, &self.options.settings_extension);
        let settings = match self.services.settings.load_settings(&settings_path) {
            Ok(settings) => settings,
            Err(SchemaError::SettingsNotFound { path }) => {
                tracing::warn!("System option setting not found: {}", path.display());
                OptionValues::new()
            }
            Err(error) => {
                tracing::warn!("System option setting unreadable, ignoring it: {error}");
                OptionValues::new()
            }
        };
        expand_from_settings(schema, settings, &self.options)
    }
}
