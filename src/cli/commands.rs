//! CLI command implementations
//!
//! Commands register the catalog first, so a malformed declaration fails
//! the command before any instance is read or any socket is bound. Exit
//! codes: 0 valid, 1 invalid data, 2 configuration or I/O failure.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::http_server::{HttpConfig, StatusServer};
use crate::observability::Logger;
use crate::validation::{ConstraintRegistry, ObjectValidator};

use super::args::Command;
use super::catalog;
use super::errors::{CliError, CliResult};

/// Process exit code for a clean, valid run
pub const EXIT_VALID: i32 = 0;
/// Process exit code when the instance violates its constraints
pub const EXIT_INVALID: i32 = 1;

/// Dispatch a parsed command, returning the process exit code.
pub fn run_command(command: Command) -> CliResult<i32> {
    match command {
        Command::Validate {
            type_name,
            instance,
        } => validate(&type_name, &instance),
        Command::Types => types(),
        Command::Serve { host, port } => serve(host, port),
    }
}

/// Register the catalog and log how many types it declares.
fn boot_registry() -> CliResult<ConstraintRegistry> {
    let registry = catalog::builtin_registry()?;
    Logger::info(
        "CATALOG_REGISTERED",
        &[("types", &registry.type_count().to_string())],
    );
    Ok(registry)
}

/// Validate one instance file against a catalog type.
pub fn validate(type_name: &str, instance_path: &Path) -> CliResult<i32> {
    let registry = boot_registry()?;

    let content = fs::read_to_string(instance_path).map_err(|e| {
        CliError::io_error(format!(
            "Failed to read instance file '{}': {}",
            instance_path.display(),
            e
        ))
    })?;

    let instance: Value = serde_json::from_str(&content).map_err(|e| {
        CliError::invalid_instance(format!(
            "Instance file '{}' is not valid JSON: {}",
            instance_path.display(),
            e
        ))
    })?;

    let validator = ObjectValidator::new(&registry);
    let report = validator.validate(type_name, &instance)?;

    Logger::info(
        "VALIDATION_COMPLETE",
        &[
            ("errors", &report.error_count().to_string()),
            ("type", type_name),
            ("valid", if report.is_valid() { "true" } else { "false" }),
        ],
    );

    if report.is_valid() {
        Ok(EXIT_VALID)
    } else {
        for message in report.errors() {
            println!("{}", message);
        }
        Ok(EXIT_INVALID)
    }
}

/// List catalog types and their constraint counts.
pub fn types() -> CliResult<i32> {
    let registry = boot_registry()?;

    // Sorted by name for stable output
    let mut declarations: Vec<_> = registry.all_types().collect();
    declarations.sort_by(|a, b| a.type_name.cmp(&b.type_name));

    for declaration in declarations {
        println!(
            "{}\t{} field(s), {} constraint(s)",
            declaration.type_name,
            declaration.fields.len(),
            declaration.constraint_count()
        );
    }

    Ok(EXIT_VALID)
}

/// Boot the HTTP status service.
///
/// The catalog is registered first so a malformed declaration fails the
/// boot instead of surfacing later.
pub fn serve(host: Option<String>, port: Option<u16>) -> CliResult<i32> {
    let _registry = boot_registry()?;

    let mut config = HttpConfig::default();
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let server = StatusServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("Status server failed: {}", e)))
    })?;

    Ok(EXIT_VALID)
}
