//! Model listing command.

use crate::ModelsArgs;
use anyhow::{Context, Result};
use serde::Serialize;
use tint_color::{Model, Registry};
use tint_core::Component;

/// One registry row as printed by `--json`.
#[derive(Serialize)]
struct ModelRow<'a> {
    index: usize,
    model: Model,
    components: &'a [Component],
}

/// Runs the models command.
pub fn run(args: ModelsArgs, verbose: u8) -> Result<()> {
    let registry = Registry::init();

    if args.json {
        let rows: Vec<ModelRow> = registry
            .iter()
            .map(|e| ModelRow {
                index: e.index,
                model: e.model,
                components: &e.descriptors,
            })
            .collect();
        let json = serde_json::to_string_pretty(&rows).context("Failed to serialize registry")?;
        println!("{}", json);
        return Ok(());
    }

    for entry in registry.iter() {
        let labels: Vec<String> = entry.descriptors.iter().map(Component::label).collect();
        println!("{:>3}  {:<8} {}", entry.index, entry.model, labels.join(", "));
        if verbose > 0 {
            for d in &entry.descriptors {
                println!("       {:<12} {} .. {}", d.name, d.min, d.max);
            }
        }
    }
    Ok(())
}
