//! Binary/text classification for raw file entries.
//!
//! Decision order:
//! 1. Extension (or well-known filename) in the text allowlist ⇒ treat as
//!    text regardless of the declared encoding and attempt UTF-8 decoding.
//!    Bytes already declared UTF-8 are converted in place, not re-decoded.
//! 2. Otherwise, a `Binary` declaration is trusted: no decode attempt.
//! 3. Otherwise attempt strict UTF-8 decoding; failure degrades to a
//!    `decode-error` skip, distinct from `binary`.
//!
//! Classification never panics and never aborts the run: every failure
//! becomes a [`SkipRecord`].

use repofold_utils::types::{DeclaredEncoding, RawEntry, SkipReason, SkipRecord};

use crate::model::ClassifiedEntry;

/// Extensions treated as text content regardless of the declared encoding:
/// source code, markup, documents, style, and config formats.
pub const TEXT_EXTENSIONS: &[&str] = &[
    // general purpose languages
    "rs", "py", "js", "mjs", "cjs", "ts", "tsx", "jsx", "java", "kt", "go", "c", "h", "cpp",
    "cc", "hpp", "cs", "rb", "swift", "php", "scala", "dart", "zig", "lua", "ex", "exs",
    // scripts
    "sh", "bash", "zsh", "fish", "ps1", "bat", "cmd",
    // docs and markup
    "md", "mdx", "rst", "adoc", "txt", "html", "htm", "xml", "svg",
    // style
    "css", "scss", "sass", "less",
    // config / data
    "json", "jsonc", "yaml", "yml", "toml", "ini", "cfg", "conf", "env", "properties",
    "gradle", "sql", "graphql", "prisma", "proto", "tf", "hcl",
];

/// Well-known extensionless filenames treated as text.
pub const TEXT_FILENAMES: &[&str] = &[
    "Dockerfile",
    "Makefile",
    "Justfile",
    "Gemfile",
    "Rakefile",
    "Procfile",
    "LICENSE",
    "CODEOWNERS",
    ".gitignore",
    ".dockerignore",
    ".env",
    ".editorconfig",
    ".npmrc",
    ".nvmrc",
];

/// Classify a raw entry as decodable text or reject it with a skip record.
///
/// Deterministic for the same bytes and path. Consumes the entry so the
/// declared-UTF-8 path can reuse the byte buffer without copying.
pub fn classify(entry: RawEntry) -> Result<ClassifiedEntry, SkipRecord> {
    let RawEntry {
        path,
        bytes,
        encoding,
    } = entry;

    if has_text_shape(&path) {
        // Allowlisted paths get a decode attempt even when the clone layer
        // declared them binary; mislabeled text is common in archives.
        return match String::from_utf8(bytes) {
            Ok(content) => Ok(ClassifiedEntry { path, content }),
            Err(_) => Err(SkipRecord::new(
                path,
                SkipReason::DecodeError,
                "declared text file is not valid UTF-8",
            )),
        };
    }

    match encoding {
        DeclaredEncoding::Binary => Err(SkipRecord::new(
            path,
            SkipReason::Binary,
            "binary content",
        )),
        DeclaredEncoding::Utf8 | DeclaredEncoding::Unknown => {
            // Without an allowlisted extension there is no independent
            // signal that this is text; an empty or NUL-containing decode
            // result is not usable as content.
            match String::from_utf8(bytes) {
                Ok(content) if content.is_empty() || content.contains('\u{0}') => Err(SkipRecord::new(
                    path,
                    SkipReason::DecodeError,
                    "content is not representable as text",
                )),
                Ok(content) => Ok(ClassifiedEntry { path, content }),
                Err(_) => Err(SkipRecord::new(
                    path,
                    SkipReason::DecodeError,
                    "could not decode content as UTF-8",
                )),
            }
        }
    }
}

fn has_text_shape(path: &str) -> bool {
    let basename = path.rsplit('/').next().unwrap_or(path);

    if TEXT_FILENAMES.iter().any(|name| *name == basename) {
        return true;
    }

    match basename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            let ext = ext.to_lowercase();
            TEXT_EXTENSIONS.iter().any(|candidate| *candidate == ext)
        }
        _ => false,
    }
}
