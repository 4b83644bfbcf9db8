//! Shared helpers for CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// The compiled binary under test.
pub fn combo_filter() -> Command {
    Command::new(env!("CARGO_BIN_EXE_combo_filter"))
}

/// Writes `contents` to `dir/name` and returns the path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

/// Reads one XML part of an exported workbook.
#[cfg(feature = "xlsx")]
pub fn read_xlsx_part(bytes: &[u8], name: &str) -> String {
    use std::io::{Cursor, Read};

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("xlsx is a zip archive");
    let mut part = archive.by_name(name).expect("workbook part exists");
    let mut xml = String::new();
    part.read_to_string(&mut xml).expect("workbook part is utf-8");
    xml
}

/// Value of the cell at `reference` (e.g. `B1`) in a worksheet part.
#[cfg(feature = "xlsx")]
pub fn cell_value<'a>(sheet: &'a str, reference: &str) -> Option<&'a str> {
    let start = sheet.find(&format!("<c r=\"{reference}\""))?;
    let cell = &sheet[start..];
    let cell = &cell[..cell.find("</c>")?];
    let value = cell.find("<v>")? + "<v>".len();
    let end = cell.find("</v>")?;
    Some(&cell[value..end])
}

/// Survivors of 1..=6 choose 3 with three-consecutive and all-even enabled.
pub const ONE_TO_SIX_CONSECUTIVE_EVEN: &str = "\
1,2,4
1,2,5
1,2,6
1,3,4
1,3,5
1,3,6
1,4,5
1,4,6
1,5,6
2,3,5
2,3,6
2,4,5
2,5,6
3,4,6
3,5,6
";
