use crate::builder::{HierarchyBuilder, ensure_capacity};
use crate::test_fixtures::reference_catalog;
use crate::{Catalog, CatalogError, Field, Kind, RawRecord};

fn record(kind: Kind, name: &str, children: Vec<RawRecord>) -> RawRecord {
    RawRecord {
        kind,
        fields: vec![Field::new("name", name)],
        children,
    }
}

fn children_of(catalog: &Catalog, system: &str) -> String {
    format!("{:?}", catalog.system(system).unwrap().children())
}

#[test]
fn test_children_keep_document_order() {
    let catalog = reference_catalog();

    assert_eq!(children_of(&catalog, "System 5"), "[Binary('Binary 5AB')]");
    let binary = catalog.system("System 5").unwrap().children()[0];
    assert_eq!(
        format!("{:?}", binary.children()),
        "[Binary('Binary 5B-AB'), Star('Star 5A')]"
    );
    let inner = binary.children()[0];
    assert_eq!(
        format!("{:?}", inner.children()),
        "[Star('Star 5B-A'), Star('Star 5B-B')]"
    );
}

#[test]
fn test_parent_links_point_back() {
    let catalog = reference_catalog();
    for object in catalog.objects() {
        for child in object.children() {
            assert_eq!(child.parent(), Some(object));
        }
    }
    for system in catalog.systems() {
        assert_eq!(system.parent(), None);
    }
}

#[test]
fn test_same_named_siblings_are_not_merged() {
    let mut catalog = Catalog::new();
    let star = record(
        Kind::Star,
        "Twin",
        vec![
            record(Kind::Planet, "Twin b", vec![]),
            record(Kind::Planet, "Twin b", vec![]),
        ],
    );
    let system = record(Kind::System, "Twins", vec![star]);
    HierarchyBuilder::new(&mut catalog).build(&system).unwrap();

    let star = catalog.system("Twins").unwrap().children()[0];
    assert_eq!(format!("{:?}", star.children()), "[Planet('Twin b'), Planet('Twin b')]");
}

#[test]
fn test_planet_under_system_is_rejected_without_partial_tree() {
    let mut catalog = Catalog::new();
    let system = record(
        Kind::System,
        "Bad",
        vec![
            record(Kind::Star, "Fine", vec![]),
            record(Kind::Planet, "Orphan", vec![]),
        ],
    );

    let err = HierarchyBuilder::new(&mut catalog).build(&system).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::IllegalChild {
            parent: Kind::System,
            child: Kind::Planet,
            ..
        }
    ));
    assert!(catalog.is_empty());
    assert!(catalog.index().is_empty());
}

#[test]
fn test_planets_are_leaves_and_stars_hold_only_planets() {
    let mut catalog = Catalog::new();
    let moon_like = record(
        Kind::System,
        "S",
        vec![record(
            Kind::Star,
            "A",
            vec![record(Kind::Planet, "A b", vec![record(Kind::Planet, "A b I", vec![])])],
        )],
    );
    assert!(HierarchyBuilder::new(&mut catalog).build(&moon_like).is_err());

    let star_in_star = record(
        Kind::System,
        "S",
        vec![record(Kind::Star, "A", vec![record(Kind::Star, "B", vec![])])],
    );
    assert!(HierarchyBuilder::new(&mut catalog).build(&star_in_star).is_err());
    assert!(catalog.is_empty());
}

#[test]
fn test_planet_under_binary_is_built_as_is() {
    let catalog = reference_catalog();
    let binary = catalog.system("System 6").unwrap().children()[0];
    assert_eq!(
        format!("{:?}", binary.children()),
        "[Star('Star 6A'), Star('Star 6B'), Planet('Planet 6AB b')]"
    );
}

#[test]
fn test_missing_name_is_rejected() {
    let mut catalog = Catalog::new();
    let nameless_star = RawRecord::new(Kind::Star);
    let system = record(Kind::System, "S", vec![nameless_star]);

    let err = HierarchyBuilder::new(&mut catalog).build(&system).unwrap_err();
    assert!(matches!(err, CatalogError::MissingName { kind: Kind::Star }));
}

#[test]
fn test_root_must_be_a_system() {
    let mut catalog = Catalog::new();
    let err = HierarchyBuilder::new(&mut catalog)
        .build(&record(Kind::Star, "Loose", vec![]))
        .unwrap_err();
    assert!(matches!(err, CatalogError::UnexpectedRoot { .. }));
}

#[test]
fn test_duplicate_system_is_rejected_by_builder() {
    let mut catalog = Catalog::new();
    let system = record(Kind::System, "Once", vec![record(Kind::Star, "A", vec![])]);
    HierarchyBuilder::new(&mut catalog).build(&system).unwrap();

    let err = HierarchyBuilder::new(&mut catalog).build(&system).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateSystem { .. }));
    assert_eq!(catalog.len(), 2);
}

#[test]
fn test_alternate_names() {
    let mut catalog = Catalog::new();
    let mut star = record(Kind::Star, "Alpha Cen A", vec![]);
    star.fields.push(Field::new("name", "Rigil Kentaurus"));
    star.fields.push(Field::new("name", "HD 128620"));
    HierarchyBuilder::new(&mut catalog)
        .build(&record(Kind::System, "Alpha Centauri", vec![star]))
        .unwrap();

    let star = catalog.stars().next().unwrap();
    assert_eq!(star.name(), "Alpha Cen A");
    assert_eq!(star.alternate_names(), ["Rigil Kentaurus", "HD 128620"]);
}

#[test]
fn test_deep_binary_nesting() {
    let mut tree = record(Kind::Star, "Core", vec![]);
    for depth in 0..40 {
        tree = record(Kind::Binary, &format!("Level {depth}"), vec![tree]);
    }
    let mut catalog = Catalog::new();
    HierarchyBuilder::new(&mut catalog)
        .build(&record(Kind::System, "Deep", vec![tree]))
        .unwrap();

    let star = catalog.stars().next().unwrap();
    assert_eq!(star.ancestors().count(), 41);
    assert_eq!(star.system().name(), "Deep");
}

#[test]
fn test_nesting_deeper_than_the_call_stack() {
    const DEPTH: usize = 100_000;
    let planet = record(Kind::Planet, "Core b", vec![]);
    let mut tree = record(Kind::Star, "Core", vec![planet]);
    for depth in 0..DEPTH {
        tree = record(Kind::Binary, &format!("Level {depth}"), vec![tree]);
    }
    let mut catalog = Catalog::new();
    HierarchyBuilder::new(&mut catalog)
        .build(&record(Kind::System, "Deep", vec![tree]))
        .unwrap();

    assert_eq!(catalog.len(), DEPTH + 3);
    let first: Vec<String> = catalog
        .objects()
        .take(3)
        .map(|o| o.name().to_string())
        .collect();
    let expected = [
        "Deep".to_string(),
        format!("Level {}", DEPTH - 1),
        format!("Level {}", DEPTH - 2),
    ];
    assert_eq!(first, expected);

    let planet = catalog.planets().next().unwrap();
    assert_eq!(planet.ancestors().count(), DEPTH + 2);
    assert_eq!(planet.star().unwrap().name(), "Core");
    assert_eq!(planet.system().name(), "Deep");
}

#[test]
fn test_deep_illegal_child_is_found() {
    let star = record(Kind::Star, "Inside", vec![]);
    let mut tree = record(Kind::Planet, "Orphan", vec![star]);
    for depth in 0..50_000 {
        tree = record(Kind::Binary, &format!("Level {depth}"), vec![tree]);
    }
    let mut catalog = Catalog::new();
    let err = HierarchyBuilder::new(&mut catalog)
        .build(&record(Kind::System, "Deep", vec![tree]))
        .unwrap_err();

    assert!(matches!(
        err,
        CatalogError::IllegalChild {
            parent: Kind::Planet,
            child: Kind::Star,
            ..
        }
    ));
    assert!(catalog.is_empty());
}

#[test]
fn test_capacity_limit() {
    assert!(ensure_capacity(0, 3).is_ok());
    assert!(ensure_capacity(u32::MAX as usize - 3, 3).is_ok());
    assert!(matches!(
        ensure_capacity(u32::MAX as usize, 1),
        Err(CatalogError::CatalogFull {
            incoming: 1,
            ..
        })
    ));
    assert!(ensure_capacity(usize::MAX, 1).is_err());
}
