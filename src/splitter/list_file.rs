use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use log::{debug, trace};
use crate::error::{Result, SplitError};
use super::ClassificationResult;
use super::classifier::{EntryClassifier, LineClass};

/// Scan a list file and partition its lines.
///
/// Any failure to open the file (missing, unreadable, a directory) is
/// reported as `InputNotFound`; failures after that are read errors.
pub fn read_entries(path: &Path, classifier: &EntryClassifier) -> Result<ClassificationResult> {
    let file = open_input(path)?;

    let result = classify_lines(BufReader::new(file), classifier).map_err(|source| SplitError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "Read {} lines from {}: {} class, {} other, {} skipped",
        result.total_lines(),
        path.display(),
        result.class_entries.len(),
        result.other_entries.len(),
        result.skipped
    );

    Ok(result)
}

fn open_input(path: &Path) -> Result<File> {
    let not_found = || SplitError::InputNotFound { path: path.to_path_buf() };

    let file = File::open(path).map_err(|e| {
        debug!("Cannot open {}: {}", path.display(), e);
        not_found()
    })?;

    match file.metadata() {
        Ok(meta) if meta.is_dir() => Err(not_found()),
        _ => Ok(file),
    }
}

/// Classify every line from `reader`, in order.
///
/// A line ends at `\n`, `\r\n` or a lone `\r`. Bytes that are not valid
/// UTF-8 are replaced with U+FFFD rather than failing the scan.
pub fn classify_lines<R: BufRead>(mut reader: R, classifier: &EntryClassifier) -> io::Result<ClassificationResult> {
    let mut result = ClassificationResult::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let chunk = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let chunk = chunk.strip_suffix(b"\r").unwrap_or(chunk);

        for raw in chunk.split(|&b| b == b'\r') {
            let line = String::from_utf8_lossy(raw);

            match classifier.classify_line(&line) {
                LineClass::Skip => result.skipped += 1,
                LineClass::Entry(kind, entry) => {
                    trace!("{:?}: {}", kind, entry);
                    result.push(kind, entry);
                }
            }
        }
    }

    Ok(result)
}

/// Write `entries` to `path`, one per line, truncating any existing file.
pub fn write_list(path: &Path, entries: &[String]) -> Result<()> {
    let to_error = |source| SplitError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut out = BufWriter::new(file);

    for entry in entries {
        writeln!(out, "{}", entry).map_err(to_error)?;
    }

    out.flush().map_err(to_error)?;
    debug!("Wrote {} entries to {}", entries.len(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_classify_lines_partitions_in_order() {
        let input = "a.class\n\n# comment\nimg.png\nb.class\n";
        let result = classify_lines(Cursor::new(input), &EntryClassifier::new()).unwrap();

        assert_eq!(result.class_entries, vec!["a.class", "b.class"]);
        assert_eq!(result.other_entries, vec!["img.png"]);
        assert_eq!(result.skipped, 2);
        assert_eq!(result.total_lines(), 5);
    }

    #[test]
    fn test_crlf_line_endings() {
        let input = "a.class\r\n\r\nimg.png\r\n";
        let result = classify_lines(Cursor::new(input), &EntryClassifier::new()).unwrap();

        assert_eq!(result.class_entries, vec!["a.class"]);
        assert_eq!(result.other_entries, vec!["img.png"]);
        assert_eq!(result.skipped, 1);
    }

    #[test]
    fn test_last_line_without_newline() {
        let result = classify_lines(Cursor::new("x.png\ny.class"), &EntryClassifier::new()).unwrap();

        assert_eq!(result.class_entries, vec!["y.class"]);
        assert_eq!(result.other_entries, vec!["x.png"]);
    }

    #[test]
    fn test_lone_cr_line_endings() {
        let input = "a.class\rimg.png\r\r# note\rb.class\r";
        let result = classify_lines(Cursor::new(input), &EntryClassifier::new()).unwrap();

        assert_eq!(result.class_entries, vec!["a.class", "b.class"]);
        assert_eq!(result.other_entries, vec!["img.png"]);
        assert_eq!(result.skipped, 2);
    }

    #[test]
    fn test_mixed_line_endings() {
        let input = "a.class\r\n\nimg.png\rb.class\r\r\n";
        let result = classify_lines(Cursor::new(input), &EntryClassifier::new()).unwrap();

        assert_eq!(result.class_entries, vec!["a.class", "b.class"]);
        assert_eq!(result.other_entries, vec!["img.png"]);
        assert_eq!(result.skipped, 2);
        assert_eq!(result.total_lines(), 5);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let bytes: &[u8] = b"a.class\nres/caf\xe9.png\n\xff.class\n";
        let result = classify_lines(Cursor::new(bytes), &EntryClassifier::new()).unwrap();

        assert_eq!(result.class_entries, vec!["a.class", "\u{FFFD}.class"]);
        assert_eq!(result.other_entries, vec!["res/caf\u{FFFD}.png"]);
    }

    struct FailingReader;

    impl io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device went away"))
        }
    }

    #[test]
    fn test_reader_failure_is_returned() {
        let err = classify_lines(BufReader::new(FailingReader), &EntryClassifier::new()).unwrap_err();

        assert_eq!(err.to_string(), "device went away");
    }

    #[test]
    fn test_read_entries_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = read_entries(&missing, &EntryClassifier::new()).unwrap_err();
        assert!(matches!(err, SplitError::InputNotFound { .. }));
    }

    #[test]
    fn test_read_entries_directory_is_not_found() {
        let dir = TempDir::new().unwrap();

        let err = read_entries(dir.path(), &EntryClassifier::new()).unwrap_err();
        assert!(matches!(err, SplitError::InputNotFound { .. }));
    }

    #[test]
    fn test_write_list_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "stale\ncontent\nthat is longer\n").unwrap();

        write_list(&path, &["a.class".to_string(), "b.class".to_string()]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a.class\nb.class\n");

        write_list(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_list_bad_destination() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("out.txt");

        let err = write_list(&path, &["a.class".to_string()]).unwrap_err();
        assert!(matches!(err, SplitError::Write { .. }));
    }
}
