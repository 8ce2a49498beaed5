use std::collections::HashMap;
use std::path::Path;

use crate::binary::BinaryRef;
use crate::error::CatalogResult;
use crate::loader::CatalogLoader;
use crate::object::{AstroObject, Node, NodeId};
use crate::planet::PlanetRef;
use crate::star::StarRef;
use crate::system::SystemRef;

/// System name lookup
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    by_name: HashMap<String, NodeId>,
}

impl CatalogIndex {
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    pub(crate) fn insert(&mut self, name: String, id: NodeId) {
        self.by_name.insert(name, id);
    }
}

/// The loaded forest of systems.
///
/// Immutable once built; share it across threads by reference.
///
/// ```rust
/// use catalog::{Catalog, CatalogLoader};
///
/// let xml = "<system><name>Sol</name><star><name>Sun</name>\
///            <planet><name>Earth</name></planet></star></system>";
/// let mut catalog = Catalog::new();
/// CatalogLoader::default().add_str(&mut catalog, xml).unwrap();
///
/// let sol = catalog.system("Sol").unwrap();
/// assert_eq!(format!("{:?}", sol.children()), "[Star('Sun')]");
/// ```
#[derive(Debug, Default)]
pub struct Catalog {
    nodes: Vec<Node>,
    systems: Vec<NodeId>,
    index: CatalogIndex,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every catalogue file in `dir` with the default configuration
    pub fn load(dir: impl AsRef<Path>) -> CatalogResult<Self> {
        CatalogLoader::default().load_dir(dir)
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub(crate) fn push_node(&mut self, node: Node) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub(crate) fn push_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.index()].children.push(child);
    }

    pub(crate) fn register_system(&mut self, name: String, id: NodeId) {
        self.systems.push(id);
        self.index.insert(name, id);
    }

    /// Number of objects of every kind
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    pub fn object(&self, id: NodeId) -> Option<AstroObject<'_>> {
        (id.index() < self.nodes.len()).then(|| AstroObject::new(self, id))
    }

    pub fn system(&self, name: &str) -> Option<SystemRef<'_>> {
        self.index
            .get(name)
            .and_then(|id| AstroObject::new(self, id).as_system())
    }

    /// Systems in load order
    pub fn systems(&self) -> impl Iterator<Item = SystemRef<'_>> {
        self.systems
            .iter()
            .filter_map(|&id| AstroObject::new(self, id).as_system())
    }

    /// Every object, system by system, each tree depth first in document order
    pub fn objects(&self) -> impl Iterator<Item = AstroObject<'_>> {
        (0..self.nodes.len()).map(|i| AstroObject::new(self, NodeId::from_index(i)))
    }

    pub fn binaries(&self) -> impl Iterator<Item = BinaryRef<'_>> {
        self.objects().filter_map(AstroObject::as_binary)
    }

    pub fn stars(&self) -> impl Iterator<Item = StarRef<'_>> {
        self.objects().filter_map(AstroObject::as_star)
    }

    pub fn planets(&self) -> impl Iterator<Item = PlanetRef<'_>> {
        self.objects().filter_map(AstroObject::as_planet)
    }

    pub fn transiting_planets(&self) -> impl Iterator<Item = PlanetRef<'_>> {
        self.planets().filter(|planet| planet.is_transiting())
    }

    /// Planets whose name or any alternate name contains `query`, ignoring case
    pub fn search_planets(&self, query: &str) -> Vec<PlanetRef<'_>> {
        let query = query.to_lowercase();
        self.planets()
            .filter(|planet| {
                std::iter::once(planet.name())
                    .chain(planet.alternate_names().iter().map(String::as_str))
                    .any(|name| name.to_lowercase().contains(&query))
            })
            .collect()
    }
}
