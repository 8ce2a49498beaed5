//! Query an exoplanet catalogue directory
//!
//! Prints resolved parameter values or system hierarchies:
//!
//! ```text
//! oec-query systems/ --path star.magV
//! oec-query systems/ --system "Kepler-16" --tree
//! oec-query systems/ --kind star --list-paths
//! ```
//!
//! Set `RUST_LOG=debug` to follow the load.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use catalog::{
    AstroObject, CatalogLoader, Kind, LoaderConfig, ParameterTable, ResolveError, SystemRef,
    resolve,
};
use clap::{Parser, ValueEnum};
use log::{error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KindArg {
    Planet,
    Star,
    Binary,
    System,
}

impl From<KindArg> for Kind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Planet => Kind::Planet,
            KindArg::Star => Kind::Star,
            KindArg::Binary => Kind::Binary,
            KindArg::System => Kind::System,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "oec-query",
    about = "Resolve parameters and print hierarchies from an exoplanet catalogue",
    long_about = None
)]
struct Args {
    /// Directory of catalogue documents
    dir: PathBuf,

    /// Parameter path to resolve, e.g. `mass`, `density()` or `star.magV`
    #[arg(long)]
    path: Option<String>,

    /// Kind of object the path is resolved on
    #[arg(long, value_enum, default_value_t = KindArg::Planet)]
    kind: KindArg,

    /// Restrict output to one system
    #[arg(long)]
    system: Option<String>,

    /// Print the hierarchy of each selected system
    #[arg(long)]
    tree: bool,

    /// JSON loader configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// List the parameter paths available for --kind and exit
    #[arg(long)]
    list_paths: bool,
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let kind = Kind::from(args.kind);

    if args.list_paths {
        for spec in ParameterTable::specs(kind) {
            println!("{:<26} {}", spec.path, spec.axis_label());
        }
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => LoaderConfig::from_json_file(path)?,
        None => LoaderConfig::default(),
    };
    let catalog = CatalogLoader::new(config).load_dir(&args.dir)?;

    let systems: Vec<SystemRef<'_>> = match &args.system {
        Some(name) => vec![
            catalog
                .system(name)
                .ok_or_else(|| format!("no system named '{name}'"))?,
        ],
        None => catalog.systems().collect(),
    };

    if args.tree {
        for system in &systems {
            print!("{}", system.tree());
        }
    }

    let objects: Vec<AstroObject<'_>> = systems
        .iter()
        .flat_map(|system| std::iter::once(system.object()).chain(system.descendants()))
        .filter(|object| object.kind() == kind)
        .collect();

    match &args.path {
        Some(path) => {
            let spec = ParameterTable::spec_for(kind, path)?;
            println!("# {path}: {}", spec.axis_label());
            for object in objects {
                match resolve(object, path) {
                    Ok(quantity) => println!("{object}\t{quantity}"),
                    Err(ResolveError::Hierarchy(e)) => warn!("{e}"),
                    Err(e) => return Err(e.into()),
                }
            }
        }
        None if !args.tree => {
            for object in objects {
                println!("{object}");
            }
        }
        None => {}
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
