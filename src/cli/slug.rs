//! `slug`, `simplify` and `link` commands.
//!
//! Pure string commands: results go to stdout, one per line.

use anyhow::Result;
use serde::Serialize;

use super::args::SlugArgs;
use super::common::collect_inputs;
use crate::config::Config;
use crate::debug;
use crate::utils::path::simplify_slug;

/// One `slug --json` record
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SlugRecord {
    pub path: String,
    pub slug: String,
}

/// Slugify every input path with the configured rules.
pub fn slug_records(paths: &[String], no_ext: bool, config: &Config) -> Vec<SlugRecord> {
    let rules = config.rules();
    paths
        .iter()
        .map(|path| SlugRecord {
            slug: rules.slugify_file_path(path, no_ext),
            path: path.clone(),
        })
        .collect()
}

/// Execute slug command
pub fn run_slug(args: &SlugArgs, config: &Config) -> Result<()> {
    let paths = collect_inputs(&args.paths)?;
    let records = slug_records(&paths, args.no_ext, config);
    debug!("slug"; "{} path(s)", records.len());

    if args.json {
        let json = if args.pretty {
            serde_json::to_string_pretty(&records)?
        } else {
            serde_json::to_string(&records)?
        };
        println!("{json}");
    } else {
        for record in &records {
            println!("{}", record.slug);
        }
    }
    Ok(())
}

/// Execute simplify command
pub fn run_simplify(slugs: &[String]) -> Result<()> {
    for slug in collect_inputs(slugs)? {
        println!("{}", simplify_slug(&slug));
    }
    Ok(())
}

/// Execute link command
pub fn run_link(from: &str, to: &str, config: &Config) -> Result<()> {
    println!("{}", config.rules().relative_link(from, to));
    Ok(())
}
