use crate::domain::model::{OutputMethod, OutputParams};
use crate::utils::error::OutputError;
use crate::utils::validation;
use serde_json::{Map, Value};

/// Resolve the `output` section of a job document into sink parameters.
///
/// The only sink currently implemented is `file-out`. Resolution is pure
/// parameter capture: no path normalization, no existence or writability
/// checks, no filesystem I/O of any kind.
pub fn resolve_output(section: &Map<String, Value>) -> Result<OutputParams, OutputError> {
    let Some(method) = validation::get_str(section, "method") else {
        tracing::error!("output method was not specified");
        return Err(OutputError::MissingMethod);
    };

    match method.parse::<OutputMethod>() {
        Ok(OutputMethod::FileOut) => build_file_out_params(section),
        Err(err) => {
            tracing::error!("unsupported export method: {}", method);
            Err(err)
        }
    }
}

fn build_file_out_params(section: &Map<String, Value>) -> Result<OutputParams, OutputError> {
    let Some(directory_path) = validation::get_str(section, "directory-path") else {
        tracing::error!("export directory path not supplied: \"directory-path\"");
        return Err(OutputError::MissingField("directory-path"));
    };

    let Some(name_suffix) = validation::get_str(section, "name-suffix") else {
        tracing::error!("name suffix for exported files not supplied: \"name-suffix\"");
        return Err(OutputError::MissingField("name-suffix"));
    };

    let params = OutputParams::FileOut {
        directory_path: directory_path.to_string(),
        name_suffix: name_suffix.to_string(),
    };

    tracing::info!("output parameters set to export {}", params);
    Ok(params)
}
