//! Command-line front-end.
//!
//! Only types linked into the running binary can be discovered. Crates that
//! declare schema types ship their own binary that delegates here:
//!
//! ```no_run
//! fn main() -> std::process::ExitCode {
//!     asyncapi_gen::cli::main()
//! }
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::DiscoveryRequest;
use crate::error::GenerateError;
use crate::pipeline::generate;

#[derive(Parser, Debug)]
#[command(name = "asyncapi-gen")]
#[command(about = "Generate AsyncAPI documents from registered schema types")]
#[command(version)]
pub struct Cli {
    /// Config file (YAML or JSON) with plugin-style options
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fully-qualified type to generate (repeatable)
    #[arg(long = "class-name", short = 'c')]
    pub class_names: Vec<String>,

    /// Module path to scan for AsyncAPI subtypes (repeatable)
    #[arg(long = "package", short = 'p')]
    pub package_names: Vec<String>,

    /// Suffix segment of every output file name
    #[arg(long)]
    pub schema_file_name: Option<String>,

    /// Output format: json or yaml
    #[arg(long)]
    pub format: Option<String>,

    /// Output directory (blank: asyncapi-schemas)
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Keep null attributes in the output
    #[arg(long, action = clap::ArgAction::Set)]
    pub include_nulls: Option<bool>,

    /// Multi-line indented output
    #[arg(long, action = clap::ArgAction::Set)]
    pub pretty_print: Option<bool>,

    /// Artifact providing schema types (repeatable)
    #[arg(long = "class-path")]
    pub class_path: Vec<PathBuf>,

    /// Supplementary artifact (repeatable)
    #[arg(long = "build-classpath")]
    pub build_classpath: Vec<PathBuf>,
}

impl Cli {
    /// Build the run request: config file values overridden by flags.
    pub fn into_request(self) -> Result<DiscoveryRequest, GenerateError> {
        let mut request = match &self.config {
            Some(path) => DiscoveryRequest::from_file(path)?,
            None => DiscoveryRequest::default(),
        };

        if !self.class_names.is_empty() {
            request.class_names = self.class_names;
        }
        if !self.package_names.is_empty() {
            request.package_names = self.package_names;
        }
        if let Some(name) = self.schema_file_name {
            request.schema_file_name = name;
        }
        if let Some(format) = self.format {
            request.schema_file_format = format;
        }
        if let Some(dir) = self.output_dir {
            request.schema_file_path = dir;
        }
        if let Some(include_nulls) = self.include_nulls {
            request.include_nulls = include_nulls;
        }
        if let Some(pretty_print) = self.pretty_print {
            request.pretty_print = pretty_print;
        }
        if !self.class_path.is_empty() {
            request.class_path = self.class_path;
        }
        if !self.build_classpath.is_empty() {
            request.build_classpath = self.build_classpath;
        }

        Ok(request)
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the `warn` default.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Parse arguments from the environment and run.
pub fn main() -> ExitCode {
    init_logging();
    run(Cli::parse())
}

/// Run with parsed arguments, reporting failures on stderr.
pub fn run(cli: Cli) -> ExitCode {
    let result = cli.into_request().and_then(|request| generate(&request));

    match result {
        Ok(report) => {
            for schema in &report.generated {
                println!("{}", schema.path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
