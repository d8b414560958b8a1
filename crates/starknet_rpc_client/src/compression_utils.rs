//! Encoding of contract programs into the form the node accepts on the wire:
//! base64(gzip(canonical JSON)).

#[cfg(test)]
#[path = "compression_utils_test.rs"]
mod compression_utils_test;

use serde::{Deserialize, Serialize};

/// A contract program as it appears inside a contract definition.
///
/// The node accepts the program only in its encoded form; a definition assembled locally
/// carries the structured form until submission. A JSON string is always interpreted as
/// already encoded, so re-encoding an encoded program is not possible by construction.
#[derive(Debug, Clone, Deserialize, Serialize, Eq, PartialEq)]
#[serde(untagged)]
pub enum Program {
    /// base64(gzip(canonical JSON)) of the program, ready for submission.
    Encoded(String),
    /// A structured program that was not encoded yet.
    Structured(serde_json::Value),
}

/// Errors that may be returned while encoding a program. Local and non-retryable.
#[derive(thiserror::Error, Debug)]
pub enum ProgramEncodingError {
    /// The program could not be serialized to canonical JSON.
    #[error(transparent)]
    SerializationError(serde_json::Error),
    /// Writing or finalizing the compressed stream failed.
    #[error("Failed to compress the program: {0}")]
    CompressionError(#[from] std::io::Error),
}

/// Compresses the program using gzip with the default compression level and encodes it in
/// base64 with the standard alphabet and padding.
///
/// An already encoded program is returned as is; no second compression pass is applied. The
/// output is deterministic: the gzip header carries no timestamp, so structurally identical
/// programs encode to identical strings.
pub fn encode_program(program: &Program) -> Result<String, ProgramEncodingError> {
    match program {
        Program::Encoded(encoded) => Ok(encoded.clone()),
        Program::Structured(value) => {
            let mut compressor =
                flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
            serde_json::to_writer(&mut compressor, value).map_err(|err| {
                if err.is_io() {
                    ProgramEncodingError::CompressionError(err.into())
                } else {
                    ProgramEncodingError::SerializationError(err)
                }
            })?;
            // A truncated gzip stream would corrupt the payload, so the finish error is
            // surfaced as well.
            let compressed_data = compressor.finish()?;
            Ok(base64::encode(compressed_data))
        }
    }
}
