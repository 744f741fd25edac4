mod cli;
mod config;
mod descriptor;
mod requirements;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Metadata, Opts};
use descriptor::PackageDescriptor;
use requirements::Requirements;

/// Exit codes:
/// 1 => program screwed up
/// 2 => user cancelled operation
fn main() {
    if let Err(err) = try_main() {
        error!("{}", err.to_string());
        err.chain().skip(1).for_each(|cause| {
            due_to!("{}", cause);
        });
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let opts = Opts::parse();

    let metadata = Metadata::from_file(&opts.metadata)?;
    metadata.check_sanity().context("Invalid package metadata")?;

    let reqs = Requirements::from_file(opts.requirements.clone())?;
    let specifiers = reqs.specifiers();
    info!(
        "Found {} dependency specifier(s) in {}",
        specifiers.len(),
        reqs.path().display()
    );
    if opts.verbose {
        for req in &specifiers {
            msg!("{}", req);
        }
    }

    let descriptor = PackageDescriptor::new(
        &metadata,
        specifiers.iter().map(|s| s.to_string()).collect(),
    );

    match &opts.output {
        Some(path) => {
            if path.exists()
                && !cli::ask_confirm(
                    &opts,
                    &format!("{} already exists. Overwrite?", path.display()),
                )?
            {
                std::process::exit(2);
            }
            descriptor.write_to(path)?;
            success!(
                "Descriptor for {} {} written to {}",
                descriptor.name,
                descriptor.version,
                path.display()
            );
        }
        None => {
            print!("{}", descriptor.render()?);
        }
    }

    Ok(())
}
