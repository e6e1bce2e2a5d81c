// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! cflayout CLI entrypoint.
//!
//! Reads a graph document (file or stdin), lays it out and prints the layout
//! document as JSON. Set `RUST_LOG=debug` to trace the pipeline phases.

use std::error::Error;
use std::io::Read;

use cflayout::config::LayoutConfig;
use cflayout::format::json::{graph_schema, GraphDocument, LayoutDocument};
use cflayout::layout::{layout_control_flow, GridSpace, NeverCancel};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--config <file>] [--grid-only] [<graph.json>|-]\n  {program} --schema\n\nReads the graph document from stdin when the path is omitted or `-`.\n--config loads layout tunables from a JSON file (missing fields keep their defaults).\n--grid-only prints cells and junctions without continuous coordinates.\n--schema prints the JSON schema of the graph document."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    config: Option<String>,
    grid_only: bool,
    schema: bool,
    input: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.config = Some(path);
            }
            "--grid-only" => {
                if options.grid_only {
                    return Err(());
                }
                options.grid_only = true;
            }
            "--schema" => {
                if options.schema {
                    return Err(());
                }
                options.schema = true;
            }
            "-" => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(arg);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(arg);
            }
        }
    }

    if options.schema
        && (options.config.is_some() || options.grid_only || options.input.is_some())
    {
        return Err(());
    }

    Ok(options)
}

fn read_input(input: Option<&str>) -> std::io::Result<String> {
    match input {
        None | Some("-") => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
        Some(path) => std::fs::read_to_string(path),
    }
}

fn run(options: CliOptions) -> Result<(), Box<dyn Error>> {
    if options.schema {
        println!("{}", serde_json::to_string_pretty(&graph_schema())?);
        return Ok(());
    }

    let config = match options.config.as_deref() {
        Some(path) => LayoutConfig::load(path)?,
        None => LayoutConfig::default(),
    };
    let raw = read_input(options.input.as_deref())?;
    let graph = GraphDocument::from_json_str(&raw)?.into_graph()?;
    log::info!("loaded {} vertices and {} edges", graph.vertices().len(), graph.edges().len());

    let layout = layout_control_flow(&graph, &config, &NeverCancel)?;
    let mut doc = LayoutDocument::from_layout(&layout);
    if !options.grid_only {
        let space = GridSpace::new(&graph, layout.grid(), &config);
        let polylines = layout.articulate(&space, &NeverCancel)?;
        doc = doc.with_articulation(&space, &polylines);
    }

    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn main() {
    env_logger::init();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "cflayout".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    if let Err(err) = run(options) {
        eprintln!("cflayout: {err}");
        std::process::exit(1);
    }
}
