//! No-argument construction of resolved types.

use std::any::Any;
use std::panic;

use crate::error::GenerateError;
use crate::registry::SchemaInstance;
use crate::resolver::TypeHandle;

/// Construct an instance of the type behind `handle`.
///
/// # Errors
///
/// Returns `GenerateError::Instantiation` when the type is abstract, when
/// its constructor returns an error, or when the constructor panics.
pub fn instantiate(handle: &TypeHandle) -> Result<Box<dyn SchemaInstance>, GenerateError> {
    let failed = |message: String| GenerateError::Instantiation {
        type_name: handle.simple_name().to_string(),
        message,
    };

    let constructor = handle
        .constructor()
        .ok_or_else(|| failed("it has no accessible no-argument constructor".to_string()))?;

    match panic::catch_unwind(constructor) {
        Ok(Ok(instance)) => Ok(instance),
        Ok(Err(e)) => Err(failed(e.to_string())),
        Err(payload) => Err(failed(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("constructor panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("constructor panicked: {}", s)
    } else {
        "constructor panicked".to_string()
    }
}
