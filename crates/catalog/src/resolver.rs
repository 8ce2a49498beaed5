//! Dotted-path lookup of attributes and derived quantities

use log::trace;
use units::Quantity;

use crate::error::{HierarchyError, ResolveError};
use crate::object::{AstroObject, Kind};
use crate::parameters::{ParameterTable, STAR_PREFIX};

/// Resolve `path` against `object`.
///
/// A `star.` prefix hands the rest of the path to the nearest Star above the
/// object; when there is none the result is a [`HierarchyError`], which is
/// distinct from a value that is merely unavailable (the sentinel).
///
/// ```rust
/// use catalog::{Catalog, CatalogLoader, resolve};
///
/// let xml = "<system><name>S</name><star><name>A</name><mass>1.0</mass>\
///            <planet><name>A b</name><mass>2.0</mass></planet></star></system>";
/// let mut catalog = Catalog::new();
/// CatalogLoader::default().add_str(&mut catalog, xml).unwrap();
///
/// let planet = catalog.planets().next().unwrap().object();
/// assert!((resolve(planet, "mass").unwrap().value - 2.0).abs() < 1e-12);
/// assert_eq!(resolve(planet, "star.mass").unwrap().value, 1.0);
/// assert!(resolve(planet, "mass()").is_err());
/// ```
pub fn resolve(object: AstroObject<'_>, path: &str) -> Result<Quantity, ResolveError> {
    if let Some(rest) = path.strip_prefix(STAR_PREFIX) {
        let star = object
            .nearest_star()
            .ok_or_else(|| HierarchyError::no_star_ancestor(object, path))?;
        trace!("{object}: '{path}' via {star}");
        return resolve(star.object(), rest);
    }

    let spec = ParameterTable::lookup(object.kind(), path)
        .ok_or_else(|| ResolveError::unknown_path(object.kind(), path))?;
    Ok(spec.evaluate(object))
}

/// Resolve `path` for every object of a homogeneous list.
///
/// Lists mixing object kinds are rejected before anything is resolved.
pub fn resolve_column(
    objects: &[AstroObject<'_>],
    path: &str,
) -> Result<Vec<Quantity>, ResolveError> {
    column_kind(objects)?;
    objects.iter().map(|&object| resolve(object, path)).collect()
}

/// The single kind shared by `objects`; `None` for an empty list
pub fn column_kind(objects: &[AstroObject<'_>]) -> Result<Option<Kind>, ResolveError> {
    let Some(first) = objects.first().map(|o| o.kind()) else {
        return Ok(None);
    };
    match objects.iter().map(|o| o.kind()).find(|&kind| kind != first) {
        Some(other) => Err(ResolveError::MixedKinds { first, other }),
        None => Ok(Some(first)),
    }
}

impl<'a> AstroObject<'a> {
    pub fn resolve(self, path: &str) -> Result<Quantity, ResolveError> {
        resolve(self, path)
    }
}
