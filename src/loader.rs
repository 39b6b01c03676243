//! Input loading - from a flat path-list file to ordered path strings.
//!
//! The input is a plain text file with one slash-delimited relative path per
//! line, not an actual filesystem scan. Loading:
//! - Reads the whole file as UTF-8 (the lists are small; streaming is not
//!   worth the complexity)
//! - Strips a leading byte-order mark, which editors on some platforms
//!   prepend to UTF-8 files
//! - Trims each line and drops lines that become empty
//!
//! Returned paths keep their file order. Deduplication is not needed here:
//! tree insertion is idempotent, so duplicates merge downstream.

use std::path::Path;

use anyhow::Result;

/// Load the ordered path list from the given input file.
///
/// ## Errors
/// Fails if the file is missing, unreadable, or not valid UTF-8. The error
/// message carries the underlying I/O description so the pipeline can
/// surface it verbatim in the output file.
pub fn load_path_list(path: &Path) -> Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("'{}': {}", path.display(), e))?;

    // A BOM survives read_to_string; it would otherwise glue itself onto
    // the first path segment.
    let text = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

    let paths = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_trims_and_drops_blank_lines() -> Result<()> {
        let temp_file = std::env::temp_dir().join("pathmap_test_loader_blanks.txt");
        fs::write(&temp_file, "  a/b.txt  \n\n   \nd.txt\n")?;

        let paths = load_path_list(&temp_file)?;
        assert_eq!(paths, vec!["a/b.txt", "d.txt"]);

        fs::remove_file(temp_file)?;
        Ok(())
    }

    #[test]
    fn test_load_strips_leading_bom() -> Result<()> {
        let temp_file = std::env::temp_dir().join("pathmap_test_loader_bom.txt");
        fs::write(&temp_file, "\u{feff}a/b.txt\nc.txt\n")?;

        let paths = load_path_list(&temp_file)?;
        assert_eq!(paths, vec!["a/b.txt", "c.txt"]);

        fs::remove_file(temp_file)?;
        Ok(())
    }

    #[test]
    fn test_load_preserves_file_order() -> Result<()> {
        let temp_file = std::env::temp_dir().join("pathmap_test_loader_order.txt");
        fs::write(&temp_file, "z.txt\na.txt\nm.txt\n")?;

        let paths = load_path_list(&temp_file)?;
        assert_eq!(paths, vec!["z.txt", "a.txt", "m.txt"]);

        fs::remove_file(temp_file)?;
        Ok(())
    }

    #[test]
    fn test_load_empty_file() -> Result<()> {
        let temp_file = std::env::temp_dir().join("pathmap_test_loader_empty.txt");
        fs::write(&temp_file, "")?;

        let paths = load_path_list(&temp_file)?;
        assert!(paths.is_empty());

        fs::remove_file(temp_file)?;
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_path_list(Path::new("/nonexistent/pathmap/input.txt"));
        assert!(result.is_err());
    }
}
