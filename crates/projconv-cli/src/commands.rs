use anyhow::{Context, Result};
use tracing::debug;

use projconv_cli::convert::{convert_all, transform_project};
use projconv_cli::discovery::discover_projects;
use projconv_cli::types::BatchResult;
use projconv_model::{ConversionOptions, WriteMode};
use projconv_transform::TransformationSet;
use projconv_xml::write_project;

use crate::cli::{ConvertArgs, InspectArgs};

pub fn run_convert(args: &ConvertArgs) -> Result<BatchResult> {
    let write_mode = if args.dry_run {
        WriteMode::DryRun
    } else if let Some(dir) = &args.output_dir {
        WriteMode::OutputDir(dir.clone())
    } else {
        WriteMode::InPlace
    };
    let options = ConversionOptions::new()
        .with_write_mode(write_mode)
        .with_backup(!args.no_backup);
    let pipeline = TransformationSet::default_set();
    debug!(?options, ?pipeline, "conversion settings");

    let projects = discover_projects(&args.paths)?;
    Ok(convert_all(&projects, &pipeline, &options))
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let project = transform_project(&args.path, &TransformationSet::default_set())?;
    if args.json {
        let json = serde_json::to_string_pretty(&project).context("serialize project")?;
        println!("{json}");
        return Ok(());
    }
    println!("Project: {}", project.project_name);
    println!("WPF: {}", if project.is_wpf { "yes" } else { "no" });
    println!();
    println!("{}", write_project(&project)?);
    Ok(())
}
