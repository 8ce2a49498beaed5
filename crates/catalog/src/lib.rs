//! Exoplanet catalogue hierarchy
//!
//! Loads a directory of catalogue documents (one `system` per file, with
//! nested `binary`, `star` and `planet` records) into an immutable forest,
//! and resolves attributes and derived quantities on it by dotted path.
//!
//! ```text
//! CatalogLoader -> HierarchyBuilder -> Catalog (arena + CatalogIndex)
//!                                         |
//!                      resolve / ParameterTable -> equations
//! ```

pub mod binary;
pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
mod fields;
pub mod loader;
pub mod object;
pub mod parameters;
pub mod planet;
pub mod planet_class;
pub mod record;
pub mod resolver;
pub mod spectral;
pub mod star;
pub mod system;

pub use binary::{BinaryData, BinaryRef};
pub use builder::HierarchyBuilder;
pub use catalog::{Catalog, CatalogIndex};
pub use config::{DuplicatePolicy, LoaderConfig, MalformedPolicy};
pub use error::{CatalogError, CatalogResult, HierarchyError, ResolveError};
pub use loader::CatalogLoader;
pub use object::{Ancestors, AstroObject, Body, Kind, NodeId};
pub use parameters::{PARAMETER_TABLE_VERSION, ParamSpec, ParameterTable, STAR_PREFIX};
pub use planet::{PlanetData, PlanetRef};
pub use planet_class::{PlanetClass, TemperatureClass};
pub use record::{Field, RawRecord};
pub use resolver::{column_kind, resolve, resolve_column};
pub use spectral::{SpectralClass, SpectralType};
pub use star::{Magnitudes, StarData, StarRef};
pub use system::{SystemData, SystemRef};

#[cfg(test)]
mod builder_test;
#[cfg(test)]
mod config_test;
#[cfg(test)]
mod test_fixtures;
