use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Returns `true` for lines that carry no data (blank or `#` comments).
pub(crate) fn is_ignorable(line: &str) -> bool {
	let trimmed = line.trim();
	trimmed.is_empty() || trimmed.starts_with('#')
}

/// Splits one table row into trimmed columns.
///
/// Tabs win over commas: a row containing a tab is split on tabs only,
/// so candidates may themselves contain commas (`、` is not a separator).
///
/// Examples:
/// - `"本日,今日"` → `["本日", "今日"]`
/// - `"提供\tシェア\t渡す"` → `["提供", "シェア", "渡す"]`
pub(crate) fn split_row(line: &str) -> Vec<String> {
	let separator = if line.contains('\t') { '\t' } else { ',' };
	line.split(separator).map(|s| s.trim().to_owned()).collect()
}

/// Reads a tabular file into rows of columns, skipping blank and comment lines.
pub(crate) fn read_table<P: AsRef<Path>>(filename: P) -> io::Result<Vec<Vec<String>>> {
	Ok(read_file(filename)?
		.iter()
		.filter(|line| !is_ignorable(line))
		.map(|line| split_row(line))
		.collect())
}

/// Reads a one-entry-per-line word list, skipping blank and comment lines.
pub(crate) fn read_word_list<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	Ok(read_file(filename)?
		.iter()
		.filter(|line| !is_ignorable(line))
		.map(|line| line.trim().to_owned())
		.collect())
}
