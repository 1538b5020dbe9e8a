use crate::core::{input, output};
use crate::domain::model::{HexPolicy, LoadResult};
use crate::utils::error::{LoadError, Result};
use crate::utils::validation;
use serde_json::Value;
use std::path::Path;

/// Fixed top-level shape every job file must have. The values are
/// placeholders; only key presence and coarse type are checked.
const JOB_SCHEMA: &str = r#"{"name":"","input":{},"output":{},"events":{}}"#;

/// Load a job-description file with the default hex policy.
pub fn load<P: AsRef<Path>>(path: P) -> Result<LoadResult> {
    load_with_policy(path, HexPolicy::default())
}

/// Load a job-description file: parse it, check its top-level shape, then
/// resolve the input and output sections in order. The first failure aborts
/// the load; nothing partial is returned.
pub fn load_with_policy<P: AsRef<Path>>(path: P, policy: HexPolicy) -> Result<LoadResult> {
    let path = path.as_ref();
    let document = validation::parse_file(path)
        .inspect_err(|err| tracing::error!("failed to load {}: {}", path.display(), err))?;

    let result = resolve_document(&document, policy)?;
    tracing::info!("{} loaded successfully!", path.display());
    Ok(result)
}

fn resolve_document(document: &Value, policy: HexPolicy) -> Result<LoadResult> {
    let schema = validation::parse_literal(JOB_SCHEMA)?;
    if !validation::validate(&schema, document) {
        tracing::error!("erroneous job file schema");
        return Err(LoadError::SchemaError {
            reason: "expected top-level keys name (string), input, output and events (objects)"
                .to_string(),
        });
    }

    // Best effort only; a job without a readable name still loads.
    let name = document.get("name").and_then(Value::as_str);
    match name {
        Some(name) => tracing::info!("job name: {}", name),
        None => tracing::info!("job name not supplied"),
    }

    let input_section = validation::get_object(document, "input").ok_or_else(|| {
        tracing::error!("failed to read the job input section");
        LoadError::SchemaError {
            reason: "\"input\" is not an object".to_string(),
        }
    })?;
    let raw_data = input::resolve_input(input_section, policy)?;

    let output_section = validation::get_object(document, "output").ok_or_else(|| {
        tracing::error!("failed to read the job output section");
        LoadError::SchemaError {
            reason: "\"output\" is not an object".to_string(),
        }
    })?;
    let output = output::resolve_output(output_section)?;

    tracing::info!(
        "resolved {} bytes of input data, exporting {}",
        raw_data.len(),
        output
    );

    Ok(LoadResult {
        name: name.map(str::to_string),
        raw_data,
        output,
    })
}
