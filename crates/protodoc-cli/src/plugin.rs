//! One documentation run over a code generator request
//!
//! Every file the host asks for is added to a single document, which comes
//! back as exactly one output file. Any failure replaces the file with an
//! error message in the response.

use crate::config::Config;
use protodoc_core::{
    render, BuildOptions, DocumentBuilder, Error, FsSourceReader, Parameter, Result, TypeRenderer,
};
use prost_types::compiler::code_generator_response::{Feature, File};
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use tracing::{debug, info, warn};

/// Answer `request`; `parameter_override` replaces the request's parameter
pub fn generate(
    request: &CodeGeneratorRequest,
    config: &Config,
    parameter_override: Option<&str>,
) -> CodeGeneratorResponse {
    let mut response = CodeGeneratorResponse {
        supported_features: Some(Feature::Proto3Optional as u64),
        ..Default::default()
    };

    match document(request, config, parameter_override) {
        Ok((name, content)) => {
            info!(output = %name, bytes = content.len(), "Documentation generated");
            response.file.push(File {
                name: Some(name),
                content: Some(content),
                ..Default::default()
            });
        }
        Err(e) => {
            warn!(error = %e, "Documentation run failed");
            response.error = Some(e.to_string());
        }
    }

    response
}

/// Build and render the document, returning the output name and text
fn document(
    request: &CodeGeneratorRequest,
    config: &Config,
    parameter_override: Option<&str>,
) -> Result<(String, String)> {
    let parameter = Parameter::parse(parameter_override.unwrap_or(request.parameter()))?;
    let format = parameter.output_format()?;
    debug!(format = %parameter.format, output = %parameter.output_name, "Parsed parameter");

    let options = BuildOptions {
        exclusion: parameter.exclusion,
        types: TypeRenderer::new(config.links.clone()),
    };
    let reader = FsSourceReader::new(config.source_roots.clone());
    let mut builder = DocumentBuilder::new(reader, options);

    for name in &request.file_to_generate {
        let file = request
            .proto_file
            .iter()
            .find(|file| file.name() == name)
            .ok_or_else(|| Error::descriptor(format!("{}: not described in the request", name)))?;
        builder.add_file(file)?;
    }

    let tree = builder.finish();
    let content = render(&tree, &format)?;
    Ok((parameter.output_name, content))
}
