//! Sport name normalization
//!
//! Load → locate SSV column → classify rows → project columns → write.
//! The SSV column is replaced by a trailing `sport` column holding the canonical
//! label, or an empty cell when nothing matched.

use std::fmt;
use std::path::{Path, PathBuf};

use tb_core::models::SPORT_COLUMN;
use tb_core::{Sport, SportClassifier};

use crate::error::{CaseError, Result};
use crate::table::{read_table, write_table, Table};

const SSV_NEEDLE: &str = "ssv";
const OUTPUT_SUFFIX: &str = "-converted-sport-names.csv";

/// Characters stripped from the end of the input path to get the output base
const STRIP_CHARS: &[char] = &['.', 'c', 's', 'v'];

/// Classification counts for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationStats {
    /// Name of the classified (and dropped) column
    pub column: String,
    pub total_rows: usize,
    /// Matches per sport, indexed like [`Sport::ALL`]
    pub per_sport: [usize; Sport::ALL.len()],
    pub unmatched: usize,
}

impl ClassificationStats {
    pub fn count(&self, sport: Sport) -> usize {
        self.per_sport[sport.index()]
    }

    fn record(&mut self, sport: Option<Sport>) {
        self.total_rows += 1;
        match sport {
            Some(sport) => self.per_sport[sport.index()] += 1,
            None => self.unmatched += 1,
        }
    }
}

impl fmt::Display for ClassificationStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "   Rows:        {}", self.total_rows)?;
        for sport in Sport::ALL {
            writeln!(f, "   {:<12} {}", format!("{}:", sport), self.count(sport))?;
        }
        write!(f, "   Unmatched:   {}", self.unmatched)
    }
}

/// Outcome of [`normalize_file`]
#[derive(Debug, Clone)]
pub struct NormalizeReport {
    pub output_path: PathBuf,
    /// Name of the column that was replaced
    pub source_column: String,
    pub stats: ClassificationStats,
}

/// First column whose name contains "ssv", ignoring case
pub fn find_ssv_column(table: &Table) -> Option<usize> {
    table.find_column(SSV_NEEDLE)
}

/// Output path for `input`: trailing `.`, `c`, `s`, `v` characters are trimmed
/// (not just a `.csv` suffix) before appending `-converted-sport-names.csv`.
/// `stats.csv` therefore becomes `stat-converted-sport-names.csv`.
///
/// The trim works on the raw path bytes on Unix, so non-UTF-8 names keep their
/// bytes. Elsewhere such names go through a lossy UTF-8 conversion.
pub fn converted_output_path(input: &Path) -> PathBuf {
    strip_and_suffix(input)
}

#[cfg(unix)]
fn strip_and_suffix(input: &Path) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let bytes = input.as_os_str().as_bytes();
    let end = bytes
        .iter()
        .rposition(|b| !STRIP_CHARS.contains(&char::from(*b)))
        .map_or(0, |i| i + 1);
    let mut output = bytes[..end].to_vec();
    output.extend_from_slice(OUTPUT_SUFFIX.as_bytes());
    PathBuf::from(OsStr::from_bytes(&output))
}

#[cfg(not(unix))]
fn strip_and_suffix(input: &Path) -> PathBuf {
    let input = input.to_string_lossy();
    let base = input.trim_end_matches(STRIP_CHARS);
    PathBuf::from(format!("{}{}", base, OUTPUT_SUFFIX))
}

/// Replace the SSV column of `table` with a classified `sport` column
pub fn convert_sport_names(
    table: &Table,
    classifier: &SportClassifier,
) -> Result<(Table, ClassificationStats)> {
    let column = find_ssv_column(table).ok_or_else(|| CaseError::MissingColumn {
        columns: table.headers.join(", "),
    })?;

    let mut headers: Vec<String> = table
        .headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != column)
        .map(|(_, h)| h.clone())
        .collect();
    headers.push(SPORT_COLUMN.to_string());

    let mut converted = Table::new(headers);
    let mut stats = ClassificationStats {
        column: table.headers[column].clone(),
        ..Default::default()
    };
    log::info!("Classifying column '{}' ({} rows)", stats.column, table.len());

    for (row_idx, row) in table.rows.iter().enumerate() {
        let value = table.cell(row_idx, column);
        let sport = classifier.classify(value);
        if sport.is_none() {
            log::warn!("Row {}: no sport matches '{}'", row_idx + 1, value);
        }
        stats.record(sport);

        let mut cells: Vec<String> = row
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != column)
            .map(|(_, c)| c.clone())
            .collect();
        cells.push(sport.map(|s| s.label().to_string()).unwrap_or_default());
        converted.rows.push(cells);
    }

    Ok((converted, stats))
}

/// Normalize the sport names in `input`, writing next to it
pub fn normalize_file(input: &Path) -> Result<NormalizeReport> {
    let table = read_table(input)?;
    let (converted, stats) = convert_sport_names(&table, SportClassifier::standard())?;

    let output_path = converted_output_path(input);
    write_table(&output_path, &converted)?;

    Ok(NormalizeReport {
        output_path,
        source_column: stats.column.clone(),
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_input(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            converted_output_path(Path::new("test-cases/input.csv")),
            PathBuf::from("test-cases/input-converted-sport-names.csv")
        );
        // The trailing "s" of "players" is in the strip set
        assert_eq!(
            converted_output_path(Path::new("test-cases/test-input-64-players.csv")),
            PathBuf::from("test-cases/test-input-64-player-converted-sport-names.csv")
        );
    }

    #[test]
    fn test_output_path_strips_trailing_char_set_quirk() {
        // Trailing characters from {'.', 'c', 's', 'v'} go too, not only ".csv"
        assert_eq!(
            converted_output_path(Path::new("stats.csv")),
            PathBuf::from("stat-converted-sport-names.csv")
        );
        assert_eq!(
            converted_output_path(Path::new("players_vs")),
            PathBuf::from("players_-converted-sport-names.csv")
        );
        assert_eq!(
            converted_output_path(Path::new("./clubs.csv")),
            PathBuf::from("./club-converted-sport-names.csv")
        );
    }

    #[test]
    fn test_usbf_becomes_basketball() -> Result<()> {
        let dir = tempdir()?;
        let input = write_input(
            dir.path(),
            "players.csv",
            "First name,Last name,Sex,Which SSV are you member of?\n\
             Alice,F,Female,USKV Hebbes\n\
             Bob,M,Male,USBF\n",
        );

        let report = normalize_file(&input)?;
        assert_eq!(
            report.output_path,
            dir.path().join("player-converted-sport-names.csv")
        );
        assert_eq!(report.source_column, "Which SSV are you member of?");

        let output = read_table(&report.output_path)?;
        assert_eq!(output.headers, vec!["First name", "Last name", "Sex", "sport"]);
        assert!(find_ssv_column(&output).is_none());
        assert_eq!(output.rows[0], vec!["Alice", "F", "Female", "Korfball"]);
        assert_eq!(output.rows[1], vec!["Bob", "M", "Male", "Basketball"]);

        assert_eq!(report.stats.total_rows, 2);
        assert_eq!(report.stats.count(Sport::Basketball), 1);
        assert_eq!(report.stats.count(Sport::Korfball), 1);
        Ok(())
    }

    #[test]
    fn test_unmatched_value_leaves_empty_cell() -> Result<()> {
        let dir = tempdir()?;
        let input = write_input(
            dir.path(),
            "mixed.csv",
            "ssv club,Name\nUnknown Club,Alice\nSB Helios,Bob\n,Carol\n",
        );

        let report = normalize_file(&input)?;
        let output = read_table(&report.output_path)?;

        assert_eq!(output.headers, vec!["Name", "sport"]);
        assert_eq!(output.rows[0], vec!["Alice", ""]);
        assert_eq!(output.rows[1], vec!["Bob", "Badminton"]);
        assert_eq!(output.rows[2], vec!["Carol", ""]);
        assert_eq!(report.stats.unmatched, 2);
        Ok(())
    }

    #[test]
    fn test_first_ssv_column_is_used() {
        let mut table = Table::new(vec!["Name".into(), "SSV".into(), "Former SSV".into()]);
        table
            .rows
            .push(vec!["Alice".into(), "USBF".into(), "Hebbes".into()]);

        let (converted, stats) = convert_sport_names(&table, SportClassifier::standard()).unwrap();
        assert_eq!(stats.column, "SSV");
        assert_eq!(converted.headers, vec!["Name", "Former SSV", "sport"]);
        assert_eq!(converted.rows[0], vec!["Alice", "Hebbes", "Basketball"]);
    }

    #[test]
    fn test_missing_column_writes_nothing() -> Result<()> {
        let dir = tempdir()?;
        let input = write_input(dir.path(), "no-club.csv", "Name,Sport\nAlice,Squash\n");

        let err = normalize_file(&input).unwrap_err();
        assert!(matches!(err, CaseError::MissingColumn { .. }), "{err}");
        assert!(!converted_output_path(&input).exists());
        Ok(())
    }

    #[test]
    fn test_empty_table() -> Result<()> {
        let dir = tempdir()?;
        let input = write_input(
            dir.path(),
            "empty.csv",
            "First name,Which SSV are you member of?\n",
        );

        let report = normalize_file(&input)?;
        let output = read_table(&report.output_path)?;
        assert_eq!(output.headers, vec!["First name", "sport"]);
        assert!(output.is_empty());
        assert_eq!(report.stats.total_rows, 0);
        assert_eq!(report.stats.unmatched, 0);
        assert_eq!(report.stats.per_sport, [0; Sport::ALL.len()]);
        Ok(())
    }

    #[test]
    fn test_convert_without_ssv_column_is_an_error() {
        let mut table = Table::new(vec!["Name".into(), "Sport".into()]);
        table.rows.push(vec!["Alice".into(), "Squash".into()]);

        let err = convert_sport_names(&table, SportClassifier::standard()).unwrap_err();
        match err {
            CaseError::MissingColumn { columns } => assert_eq!(columns, "Name, Sport"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_output_path_keeps_non_utf8_bytes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let input = Path::new(OsStr::from_bytes(b"team-\xff.csv"));
        let output = converted_output_path(input);
        assert_eq!(
            output.as_os_str().as_bytes(),
            b"team-\xff-converted-sport-names.csv"
        );
    }

    #[test]
    fn test_missing_input_file() {
        let err = normalize_file(Path::new("missing-input.csv")).unwrap_err();
        assert!(matches!(err, CaseError::FileNotFound { .. }), "{err}");
    }
}
