//! JSON in, JSON-ready output back. Shared by the wasm exports and native callers.

use crate::layout;
use crate::output::{ArrangeOutput, ErrorInfo};
use crate::request::{parse_request, RequestError};

impl From<&RequestError> for ErrorInfo {
    fn from(e: &RequestError) -> Self {
        let (line, column) = e.location();
        ErrorInfo { message: e.to_string(), line, column }
    }
}

/// Parse, arrange and package the result.
pub fn arrange_json(input: &str) -> Result<ArrangeOutput, RequestError> {
    let request = parse_request(input)?;
    let cfg = request.layout_config();
    let objects = request.placed_objects();
    let result = layout::arrange(&request.room_label, &objects, &cfg);
    Ok(ArrangeOutput::from_result(&result))
}

/// Like [`arrange_json`], with the error folded into the output.
pub fn arrange_json_or_error(input: &str) -> ArrangeOutput {
    match arrange_json(input) {
        Ok(output) => output,
        Err(e) => ArrangeOutput::from_error(ErrorInfo::from(&e)),
    }
}
