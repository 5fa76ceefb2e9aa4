use std::io::Write;

use soundalike_input::{DEFAULT_DELIMITER, InputError, parse_file};
use soundalike_types::RawRecord;

#[test]
fn parse_file_reads_records_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# sample").unwrap();
    writeln!(file, "Katherine,10").unwrap();
    writeln!(file, "Zzyzx,1").unwrap();

    let got = parse_file(file.path(), DEFAULT_DELIMITER).unwrap();
    assert_eq!(
        got,
        vec![RawRecord::new("Katherine", 10), RawRecord::new("Zzyzx", 1)]
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_file(&dir.path().join("absent.txt"), DEFAULT_DELIMITER).unwrap_err();
    assert!(matches!(err, InputError::Io(_)));
    assert!(err.to_string().contains("Failed to read input file"));
}

#[test]
fn crlf_line_endings_are_accepted() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"Ann,1\r\nAnne,2\r\n").unwrap();

    let got = parse_file(file.path(), DEFAULT_DELIMITER).unwrap();
    assert_eq!(got, vec![RawRecord::new("Ann", 1), RawRecord::new("Anne", 2)]);
}
