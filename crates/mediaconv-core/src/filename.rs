//! Output filename derivation.

/// Replace the final dot-segment of `name` with `extension`.
///
/// The basename is preserved. A name with no extension (or only a leading
/// dot, like `.profile`) gets the extension appended; an empty name becomes
/// `file.<extension>`.
///
/// ```ignore
/// assert_eq!(replace_extension("scan.final.jpeg", "png"), "scan.final.png");
/// assert_eq!(replace_extension("README", "pdf"), "README.pdf");
/// ```
pub fn replace_extension(name: &str, extension: &str) -> String {
    let stem = match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    };

    if stem.is_empty() {
        format!("file.{}", extension)
    } else {
        format!("{}.{}", stem, extension)
    }
}
