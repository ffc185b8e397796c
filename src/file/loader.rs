//! YAML document loading.
//!
//! This module reads YAML documents from files or stdin and builds value
//! trees from them. Gzip-compressed input is decompressed transparently.

use crate::diagnostics::Diagnostics;
use crate::document::node::Value;
use crate::document::parser::parse_str;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads a YAML file and builds its value tree.
///
/// Files ending in `.gz` are gunzipped first.
///
/// # Returns
///
/// - `Ok(Some(tree))` if the document was built
/// - `Ok(None)` if the document is empty or its structure could not be
///   built; `diagnostics` says which
/// - `Err(anyhow::Error)` if the file cannot be read or decompressed, or the
///   scanner rejected its contents
///
/// # Examples
///
/// ```no_run
/// use yamlpick::diagnostics::Diagnostics;
/// use yamlpick::file::loader::load_document;
///
/// let mut diagnostics = Diagnostics::new();
/// let tree = load_document("config.yaml", &mut diagnostics).unwrap();
/// ```
pub fn load_document<P: AsRef<Path>>(
    path: P,
    diagnostics: &mut Diagnostics,
) -> Result<Option<Value>> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    parse_str(&content, diagnostics)
        .with_context(|| format!("Failed to parse YAML in {}", path_ref.display()))
}

/// Loads a YAML document from standard input.
///
/// Input starting with the gzip magic bytes (0x1f 0x8b) is decompressed.
pub fn load_document_from_stdin(diagnostics: &mut Diagnostics) -> Result<Option<Value>> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    load_document_from_bytes(buffer, diagnostics)
}

/// Builds a tree from raw bytes, gunzipping them if they look compressed.
pub fn load_document_from_bytes(
    bytes: Vec<u8>,
    diagnostics: &mut Diagnostics,
) -> Result<Option<Value>> {
    let content = if bytes.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&bytes)?
    } else {
        String::from_utf8(bytes).context("Invalid UTF-8 in input")?
    };

    parse_str(&content, diagnostics).context("Failed to parse YAML from stdin")
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}
