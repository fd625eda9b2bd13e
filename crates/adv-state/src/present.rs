use std::io::Write;

use serde::Serialize;

use crate::error::PresentError;

/// Rendering of "no state yet".
pub const EMPTY_STATE: &str = "{}";

/// Render a resolved state as two-space indented JSON, or [`EMPTY_STATE`].
pub fn render<S: Serialize>(state: Option<&S>) -> Result<String, PresentError> {
    match state {
        None => Ok(EMPTY_STATE.to_string()),
        Some(state) => Ok(serde_json::to_string_pretty(state)?),
    }
}

/// Write the rendering of `state` followed by a newline.
pub fn present<W: Write, S: Serialize>(out: &mut W, state: Option<&S>) -> Result<(), PresentError> {
    let rendered = render(state)?;
    writeln!(out, "{rendered}")?;
    out.flush()?;
    Ok(())
}
