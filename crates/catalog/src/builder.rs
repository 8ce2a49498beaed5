//! Record-to-hierarchy conversion
//!
//! A raw `system` record is checked for structural legality in full before
//! any node is written, so a rejected entry never leaves a partial tree in
//! the catalogue. Both passes walk the record with an explicit stack; binary
//! nesting depth is unbounded.

use crate::binary::BinaryData;
use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};
use crate::object::{Kind, Node, NodeData, NodeId};
use crate::planet::PlanetData;
use crate::record::RawRecord;
use crate::star::StarData;
use crate::system::SystemData;

pub struct HierarchyBuilder<'c> {
    catalog: &'c mut Catalog,
}

impl<'c> HierarchyBuilder<'c> {
    pub fn new(catalog: &'c mut Catalog) -> Self {
        Self { catalog }
    }

    /// Add one system tree, children in document order.
    ///
    /// Same-named siblings are kept as they are; nothing is merged or sorted.
    pub fn build(&mut self, record: &RawRecord) -> CatalogResult<NodeId> {
        let count = validate(record)?;
        let Some(name) = record.name() else {
            return Err(CatalogError::MissingName { kind: record.kind });
        };
        if self.catalog.index().contains(name) {
            return Err(CatalogError::duplicate_system(name));
        }
        ensure_capacity(self.catalog.len(), count)?;

        let id = self.insert(record);
        self.catalog.register_system(name.to_string(), id);
        Ok(id)
    }

    /// Preorder insertion; siblings are pushed in reverse so they pop in
    /// document order
    fn insert(&mut self, root: &RawRecord) -> NodeId {
        let root_id = self.push(root, None);
        let mut pending: Vec<(&RawRecord, NodeId)> = root
            .children
            .iter()
            .rev()
            .map(|child| (child, root_id))
            .collect();

        while let Some((record, parent)) = pending.pop() {
            let id = self.push(record, Some(parent));
            self.catalog.push_child(parent, id);
            pending.extend(record.children.iter().rev().map(|child| (child, id)));
        }
        root_id
    }

    fn push(&mut self, record: &RawRecord, parent: Option<NodeId>) -> NodeId {
        let mut names = record.names().map(str::to_string);
        self.catalog.push_node(Node {
            name: names.next().unwrap_or_default(),
            alternate_names: names.collect(),
            parent,
            children: Vec::new(),
            data: node_data(record),
        })
    }
}

/// Fails when `incoming` more objects would run past the `u32` node ids
pub(crate) fn ensure_capacity(existing: usize, incoming: usize) -> CatalogResult<()> {
    let fits = existing
        .checked_add(incoming)
        .is_some_and(|total| u32::try_from(total).is_ok());
    if fits {
        Ok(())
    } else {
        Err(CatalogError::CatalogFull { existing, incoming })
    }
}

/// Check the whole tree in preorder; returns the number of records
fn validate(root: &RawRecord) -> CatalogResult<usize> {
    let mut pending: Vec<(&RawRecord, Option<&RawRecord>)> = vec![(root, None)];
    let mut count = 0;

    while let Some((record, parent)) = pending.pop() {
        match parent {
            None if record.kind != Kind::System => {
                return Err(CatalogError::unexpected_root(record.kind.tag()));
            }
            Some(parent) if record.kind == Kind::System => {
                return Err(CatalogError::NestedSystem {
                    parent: parent.kind.tag().to_string(),
                });
            }
            Some(parent) if !parent.kind.allows_child(record.kind) => {
                return Err(CatalogError::IllegalChild {
                    parent: parent.kind,
                    parent_name: parent.name().unwrap_or_default().to_string(),
                    child: record.kind,
                });
            }
            _ => {}
        }

        if record.name().is_none() {
            return Err(CatalogError::MissingName { kind: record.kind });
        }

        count += 1;
        pending.extend(
            record
                .children
                .iter()
                .rev()
                .map(|child| (child, Some(record))),
        );
    }
    Ok(count)
}

fn node_data(record: &RawRecord) -> NodeData {
    match record.kind {
        Kind::System => NodeData::System(SystemData::from_fields(&record.fields)),
        Kind::Binary => NodeData::Binary(BinaryData::from_fields(&record.fields)),
        Kind::Star => NodeData::Star(StarData::from_fields(&record.fields)),
        Kind::Planet => NodeData::Planet(PlanetData::from_fields(&record.fields)),
    }
}
