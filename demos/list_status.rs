//! List installed packages, or show one package in detail.
//!
//! ```text
//! cargo run --example list_status [PACKAGE [DEPENDENCY]]
//! DPKG_STATUS_FILE=./status.real cargo run --example list_status lsb-release
//! ```

use std::process::ExitCode;

use dpkg_status::{Config, Package, Reference, Repository};
use tracing_subscriber::EnvFilter;

fn references(title: &str, refs: &[Reference]) {
    if refs.is_empty() {
        return;
    }
    println!("\n{title}:");
    for r in refs {
        let marker = if r.installed { "*" } else { " " };
        print!("  {marker} {}", r.name);
        if !r.alternatives.is_empty() {
            let alts: Vec<&str> = r.alternatives.iter().map(|a| a.name.as_str()).collect();
            print!(" ({})", alts.join(", "));
        }
        println!();
    }
}

fn details(package: &Package, highlight: Option<&str>) {
    if package.is_leaf() {
        println!("{} (no installed package depends on it)", package.name);
    } else {
        println!("{}", package.name);
    }
    println!("{}", package.description.synopsis);
    if !package.description.description.is_empty() {
        println!("\n{}", package.description.description);
    }
    references("Depends on", &package.depends);
    references("Dependants", &package.dependants);

    if let Some(name) = highlight {
        match package.find_dependency(name) {
            Some(dep) if dep.installed => println!("\n{name}: direct dependency, installed"),
            Some(_) => println!("\n{name}: direct dependency, not installed"),
            None => println!("\n{name}: not a direct dependency"),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    let repo = Repository::from_config(&config);

    let mut args = std::env::args().skip(1);
    match args.next() {
        Some(name) => match repo.find_package(&name) {
            Ok(Some(package)) => details(package, args.next().as_deref()),
            Ok(None) => {
                eprintln!("package {name} not found");
                return ExitCode::from(2);
            }
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => match repo.list_packages() {
            Ok(packages) => {
                for package in packages {
                    println!("{:<40} {}", package.name, package.description.synopsis);
                }
            }
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}
