//! Catalogue file discovery and XML parsing
//!
//! Documents use a small fixed vocabulary. An element is a *record* when its
//! tag is `system`, `binary`, `star` or `planet`, or when it has child
//! elements; anything else is a *field* whose trimmed text (and optional
//! `unit` attribute) is kept for the hierarchy builder.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::builder::HierarchyBuilder;
use crate::catalog::Catalog;
use crate::config::{DuplicatePolicy, LoaderConfig, MalformedPolicy};
use crate::error::{CatalogError, CatalogResult};
use crate::object::{Kind, NodeId};
use crate::record::{Field, RawRecord};

#[derive(Debug, Clone, Default)]
pub struct CatalogLoader {
    config: LoaderConfig,
}

impl CatalogLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load every catalogue file directly inside `dir`, in path order.
    ///
    /// Malformed files and duplicate system names are handled according to
    /// the loader configuration.
    pub fn load_dir(&self, dir: impl AsRef<Path>) -> CatalogResult<Catalog> {
        let files = self.discover(dir.as_ref())?;
        let mut catalog = Catalog::new();
        let mut skipped = 0usize;

        for path in &files {
            let result = self
                .parse_file(path)
                .and_then(|record| self.add_record(&mut catalog, &record));
            match result {
                Ok(_) => {}
                Err(e @ CatalogError::DuplicateSystem { .. }) => return Err(e.in_file(path)),
                Err(e) => match self.config.malformed {
                    MalformedPolicy::Skip => {
                        warn!("skipping {}: {e}", path.display());
                        skipped += 1;
                    }
                    MalformedPolicy::Abort => return Err(e.in_file(path)),
                },
            }
        }

        info!(
            "loaded {} systems ({} objects) from {} files, {} skipped",
            catalog.index().len(),
            catalog.len(),
            files.len(),
            skipped
        );
        Ok(catalog)
    }

    /// Catalogue files directly inside `dir` with the configured extension, sorted
    pub fn discover(&self, dir: &Path) -> CatalogResult<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|e| CatalogError::io(dir, e))?;
        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| CatalogError::io(dir, e))?.path();
            let matches = path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(self.config.extension.as_str()));
            if matches {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    pub fn parse_file(&self, path: &Path) -> CatalogResult<RawRecord> {
        let xml = fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        Self::parse_str(&xml)
    }

    /// Parse one catalogue document into its root `system` record
    pub fn parse_str(xml: &str) -> CatalogResult<RawRecord> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        let mut stack: Vec<OpenElement> = Vec::new();
        let mut root: Option<RawRecord> = None;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => {
                    let element = open(e, &stack, root.is_some())?;
                    stack.push(element);
                }
                Event::Empty(ref e) => {
                    let element = open(e, &stack, root.is_some())?;
                    close(element, &mut stack, &mut root)?;
                }
                Event::Text(e) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&e.unescape()?);
                    }
                }
                Event::CData(e) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&String::from_utf8_lossy(&e));
                    }
                }
                Event::End(_) => {
                    if let Some(element) = stack.pop() {
                        close(element, &mut stack, &mut root)?;
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.pop() {
            return Err(CatalogError::UnclosedElement { tag: open.tag });
        }
        root.ok_or(CatalogError::EmptyDocument)
    }

    /// Build `record` into `catalog`, applying the duplicate-name policy.
    ///
    /// Returns the new System's id, or `None` when a duplicate was dropped.
    pub fn add_record(
        &self,
        catalog: &mut Catalog,
        record: &RawRecord,
    ) -> CatalogResult<Option<NodeId>> {
        if let Some(name) = record.name() {
            if catalog.index().contains(name) {
                match self.config.duplicates {
                    DuplicatePolicy::KeepFirst => {
                        warn!("dropping duplicate system '{name}'");
                        return Ok(None);
                    }
                    DuplicatePolicy::Reject => return Err(CatalogError::duplicate_system(name)),
                }
            }
        }

        let id = HierarchyBuilder::new(catalog).build(record)?;
        debug!(
            "built system '{}' ({} objects so far)",
            record.name().unwrap_or_default(),
            catalog.len()
        );
        Ok(Some(id))
    }

    /// Parse one document from memory and add it to `catalog`
    pub fn add_str(&self, catalog: &mut Catalog, xml: &str) -> CatalogResult<Option<NodeId>> {
        let record = Self::parse_str(xml)?;
        self.add_record(catalog, &record)
    }
}

struct OpenElement {
    tag: String,
    unit: Option<String>,
    text: String,
    fields: Vec<Field>,
    children: Vec<RawRecord>,
    has_child_elements: bool,
}

fn open(
    start: &BytesStart<'_>,
    stack: &[OpenElement],
    root_closed: bool,
) -> CatalogResult<OpenElement> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();

    match stack.last() {
        None if root_closed || tag != Kind::System.tag() => {
            return Err(CatalogError::unexpected_root(tag));
        }
        Some(parent) if tag == Kind::System.tag() => {
            return Err(CatalogError::NestedSystem {
                parent: parent.tag.clone(),
            });
        }
        _ => {}
    }

    let mut unit = None;
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_ref() == b"unit" {
            unit = Some(String::from_utf8_lossy(&attr.value).trim().to_string());
        }
    }

    Ok(OpenElement {
        tag,
        unit,
        text: String::new(),
        fields: Vec::new(),
        children: Vec::new(),
        has_child_elements: false,
    })
}

fn close(
    element: OpenElement,
    stack: &mut [OpenElement],
    root: &mut Option<RawRecord>,
) -> CatalogResult<()> {
    let kind = Kind::from_tag(&element.tag);
    let parent = stack.last_mut();

    if kind.is_none() && !element.has_child_elements {
        let field = Field {
            tag: element.tag,
            text: element.text.trim().to_string(),
            unit: element.unit,
        };
        if let Some(parent) = parent {
            parent.has_child_elements = true;
            parent.fields.push(field);
        }
        return Ok(());
    }

    let kind = kind.ok_or_else(|| CatalogError::unknown_record_kind(&element.tag))?;
    let record = RawRecord {
        kind,
        fields: element.fields,
        children: element.children,
    };
    match parent {
        Some(parent) => {
            parent.has_child_elements = true;
            parent.children.push(record);
        }
        None => *root = Some(record),
    }
    Ok(())
}
