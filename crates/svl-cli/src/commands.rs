//! Command implementations, kept free of argument parsing so they can be
//! driven directly.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use svl_core::{
    DocumentId, DocumentServices, ExpansionOptions, NullSink, ShaderVariantDocument, UndoHistory,
};
use svl_model::{OptionName, OptionValue, ShaderVariantList};
use svl_schema::{JsonLayoutResolver, JsonSettingsLoader, OptionSchema, SchemaResolver};
use tracing::info;

pub type CliDocument = ShaderVariantDocument<NullSink, UndoHistory>;

/// Expansion settings from `path`, or the defaults.
pub fn load_options(path: Option<&Path>) -> Result<ExpansionOptions> {
    match path {
        Some(path) => ExpansionOptions::from_toml_file(path)
            .with_context(|| format!("load config {}", path.display())),
        None => Ok(ExpansionOptions::default()),
    }
}

/// A document reading layouts and settings from disk.
pub fn open_document(options: ExpansionOptions) -> CliDocument {
    let services = DocumentServices::new(JsonLayoutResolver, JsonSettingsLoader);
    ShaderVariantDocument::new(DocumentId(1), services, NullSink, UndoHistory::new())
        .with_options(options)
}

pub fn read_list(path: &Path) -> Result<ShaderVariantList> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse variant list {}", path.display()))
}

/// Write `list` as pretty JSON to `path`, or to stdout when `path` is `None`.
pub fn write_list(list: &ShaderVariantList, path: Option<&Path>) -> Result<()> {
    let mut text = serde_json::to_string_pretty(list).context("serialize variant list")?;
    text.push('\n');
    match path {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), rows = list.len(), "wrote variant list");
        }
        None => {
            io::stdout()
                .lock()
                .write_all(text.as_bytes())
                .context("write variant list to stdout")?;
        }
    }
    Ok(())
}

pub fn run_descriptors(shader: &Path) -> Result<Arc<OptionSchema>> {
    JsonLayoutResolver
        .load_schema(shader)
        .with_context(|| format!("load option layout {}", shader.display()))
}

/// Build a new list for `shader` from its system option setting.
///
/// The stored shader reference is absolute so the list resolves wherever it
/// is written.
pub fn run_init(shader: &Path, options: ExpansionOptions) -> Result<ShaderVariantList> {
    let shader = std::path::absolute(shader)
        .with_context(|| format!("resolve shader path {}", shader.display()))?;
    let mut document = open_document(options);
    document
        .create_from_shader(shader.to_string_lossy())
        .with_context(|| format!("create variant list for {}", shader.display()))?;
    Ok(document.variant_list_source_data().clone())
}

/// Append a sparse block of rows to the list stored at `list_path`.
pub fn run_append(
    list_path: &Path,
    headers: &[String],
    values: &[String],
    options: ExpansionOptions,
) -> Result<ShaderVariantList> {
    let headers = headers
        .iter()
        .map(|name| OptionName::new(name.as_str()))
        .collect::<std::result::Result<Vec<_>, _>>()
        .context("invalid option name in headers")?;
    let matrix: Vec<OptionValue> = values
        .iter()
        .map(|value| OptionValue::from(value.as_str()))
        .collect();

    let mut document = load_document(list_path, options)?;
    document
        .append_sparse_variant_set(&headers, &matrix)
        .context("append variants")?;
    Ok(document.variant_list_source_data().clone())
}

/// Deduplicate the list stored at `list_path` and renumber its rows.
pub fn run_defrag(list_path: &Path, options: ExpansionOptions) -> Result<ShaderVariantList> {
    let mut document = load_document(list_path, options)?;
    let before = document.variant_list_source_data().len();
    document
        .defragment_variant_list()
        .context("defragment variant list")?;
    let list = document.variant_list_source_data().clone();
    info!(before, after = list.len(), "defragmented variant list");
    Ok(list)
}

fn load_document(list_path: &Path, options: ExpansionOptions) -> Result<CliDocument> {
    let list = read_list(list_path)?;
    let mut document = open_document(options);
    document
        .load_variant_list(Some(PathBuf::from(list_path)), list)
        .with_context(|| format!("load variant list {}", list_path.display()))?;
    Ok(document)
}
