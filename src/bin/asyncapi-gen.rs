//! AsyncAPI generator CLI
//!
//! Emits documents for schema types linked into this binary.

use std::process::ExitCode;

fn main() -> ExitCode {
    asyncapi_gen::cli::main()
}
