//! Randomly generated hierarchies checked against the document that produced
//! them.

use std::fmt::Write as _;
use std::fs;

use catalog::{AstroObject, Catalog, CatalogLoader, Kind, ResolveError, resolve};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

const SEEDS: [u64; 8] = [1, 2, 3, 5, 8, 13, 21, 42];
const MAX_DEPTH: usize = 6;

/// Shape of one generated object, mirrored in the emitted document
struct Expected {
    kind: Kind,
    name: String,
    mag_v: Option<f64>,
    children: Vec<Expected>,
}

impl Expected {
    fn canonical(&self) -> String {
        format!("{}('{}')", self.kind, self.name)
    }

    fn children_string(&self) -> String {
        let parts: Vec<_> = self.children.iter().map(Expected::canonical).collect();
        format!("[{}]", parts.join(", "))
    }

    fn to_xml(&self, out: &mut String) {
        let tag = self.kind.tag();
        write!(out, "<{tag}><name>{}</name>", self.name).unwrap();
        if let Some(mag) = self.mag_v {
            write!(out, "<magV>{mag}</magV>").unwrap();
        }
        for child in &self.children {
            child.to_xml(out);
        }
        write!(out, "</{tag}>").unwrap();
    }
}

struct Generator {
    rng: ChaChaRng,
    counter: usize,
}

impl Generator {
    fn new(seed: u64) -> Self {
        Self {
            rng: ChaChaRng::seed_from_u64(seed),
            counter: 0,
        }
    }

    fn name(&mut self, kind: Kind) -> String {
        self.counter += 1;
        // repeat names now and then; siblings with equal names stay distinct
        if self.rng.random_bool(0.1) {
            format!("{kind} dup")
        } else {
            format!("{kind} {}", self.counter)
        }
    }

    fn system(&mut self, index: usize) -> Expected {
        let count = self.rng.random_range(1..=3);
        let children = (0..count)
            .map(|_| {
                if self.rng.random_bool(0.4) {
                    self.body(Kind::Binary, 1)
                } else {
                    self.body(Kind::Star, 1)
                }
            })
            .collect();
        Expected {
            kind: Kind::System,
            name: format!("Random System {index}"),
            mag_v: None,
            children,
        }
    }

    fn body(&mut self, kind: Kind, depth: usize) -> Expected {
        let name = self.name(kind);
        let mut children = Vec::new();
        match kind {
            Kind::Binary => {
                let count = self.rng.random_range(1..=3);
                for _ in 0..count {
                    let child = match self.rng.random_range(0..3) {
                        0 if depth < MAX_DEPTH => Kind::Binary,
                        1 => Kind::Planet,
                        _ => Kind::Star,
                    };
                    children.push(self.body(child, depth + 1));
                }
            }
            Kind::Star => {
                let count = self.rng.random_range(0..=3);
                for _ in 0..count {
                    children.push(self.body(Kind::Planet, depth + 1));
                }
            }
            Kind::Planet | Kind::System => {}
        }
        let mag_v = (kind == Kind::Star && self.rng.random_bool(0.7))
            .then(|| f64::from(self.rng.random_range(0..200u32)) / 10.0);
        Expected {
            kind,
            name,
            mag_v,
            children,
        }
    }
}

fn generate(seed: u64, systems: usize) -> Vec<Expected> {
    let mut generator = Generator::new(seed);
    (0..systems).map(|i| generator.system(i)).collect()
}

fn document(system: &Expected) -> String {
    let mut xml = String::new();
    system.to_xml(&mut xml);
    xml
}

fn build(expected: &[Expected]) -> Catalog {
    let loader = CatalogLoader::default();
    let mut catalog = Catalog::new();
    for system in expected {
        loader.add_str(&mut catalog, &document(system)).unwrap();
    }
    catalog
}

fn assert_same_shape(object: AstroObject<'_>, expected: &Expected) {
    assert_eq!(object.to_string(), expected.canonical());
    assert_eq!(format!("{:?}", object.children()), expected.children_string());
    for (child, expected_child) in object.children().into_iter().zip(&expected.children) {
        assert_eq!(child.parent(), Some(object));
        assert_same_shape(child, expected_child);
    }
}

/// Walk expected planets alongside the magV of their nearest star, if any
fn check_star_paths(object: AstroObject<'_>, expected: &Expected, star_mag: Option<Option<f64>>) {
    if expected.kind == Kind::Planet {
        let result = resolve(object, "star.magV");
        match star_mag {
            None => assert!(
                matches!(result, Err(ResolveError::Hierarchy(_))),
                "{object} has no star above it"
            ),
            Some(None) => assert!(!result.unwrap().is_available()),
            Some(Some(mag)) => assert_eq!(result.unwrap().value, mag),
        }
    }
    let below = match expected.kind {
        Kind::Star => Some(expected.mag_v),
        _ => star_mag,
    };
    for (child, expected_child) in object.children().into_iter().zip(&expected.children) {
        check_star_paths(child, expected_child, below);
    }
}

#[test]
fn children_follow_document_order() {
    for seed in SEEDS {
        let expected = generate(seed, 5);
        let catalog = build(&expected);

        let systems: Vec<_> = catalog.systems().collect();
        assert_eq!(systems.len(), expected.len(), "seed {seed}");
        for (system, expected) in systems.into_iter().zip(&expected) {
            assert_same_shape(system.object(), expected);
        }
    }
}

#[test]
fn star_prefix_resolves_iff_a_star_is_above() {
    for seed in SEEDS {
        let expected = generate(seed, 5);
        let catalog = build(&expected);

        for (system, expected) in catalog.systems().zip(&expected) {
            check_star_paths(system.object(), expected, None);
        }
    }
}

#[test]
fn every_object_belongs_to_its_system() {
    let expected = generate(99, 10);
    let catalog = build(&expected);

    for system in catalog.systems() {
        for object in system.descendants() {
            assert_eq!(object.system(), system);
            assert_eq!(object.ancestors().last(), Some(system.object()));
        }
    }
}

#[test]
fn loading_twice_gives_the_same_forest() {
    let expected = generate(7, 12);
    let dir = tempfile::tempdir().unwrap();
    for (i, system) in expected.iter().enumerate() {
        fs::write(dir.path().join(format!("{i:03}.xml")), document(system)).unwrap();
    }

    let dump = |catalog: &Catalog| -> Vec<String> {
        catalog.systems().map(|system| system.tree()).collect()
    };
    let first = Catalog::load(dir.path()).unwrap();
    let second = Catalog::load(dir.path()).unwrap();

    assert_eq!(dump(&first), dump(&second));
    assert_eq!(first.len(), second.len());
}

#[test]
fn concurrent_readers_agree() {
    let expected = generate(2024, 8);
    let catalog = build(&expected);

    let read = |catalog: &Catalog| -> Vec<String> {
        catalog
            .planets()
            .map(|planet| match resolve(planet.object(), "star.magV") {
                Ok(q) => format!("{planet} {}", q.value),
                Err(e) => format!("{planet} {e}"),
            })
            .collect()
    };
    let serial = read(&catalog);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| read(&catalog))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), serial);
        }
    });
}
