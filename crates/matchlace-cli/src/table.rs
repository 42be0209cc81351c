//! CSV reading and writing of level tables.

use std::io;

use matchlace_analyzer::{LevelInput, ResultRecord};

/// The two-level sample table.
pub(crate) const SAMPLE_CSV: &str = include_str!("../assets/sample.csv");

/// Reads level rows from a CSV table with a header row.
///
/// Quoted fields may span several lines. Rows shorter than the header are
/// padded with blank fields; fields past the header are ignored.
pub(crate) fn read_levels<R>(reader: R) -> Result<Vec<LevelInput>, csv::Error>
where
    R: io::Read,
{
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = reader.headers()?.clone();
    reader
        .records()
        .map(|record| {
            let mut record = record?;
            while record.len() < headers.len() {
                record.push_field("");
            }
            record.deserialize(Some(&headers))
        })
        .collect()
}

/// Writes results as a CSV table with a header row.
pub(crate) fn write_results<W>(writer: W, results: &[ResultRecord]) -> Result<(), csv::Error>
where
    W: io::Write,
{
    let mut writer = csv::Writer::from_writer(writer);
    for record in results {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use matchlace_analyzer::BatchRunner;
    use matchlace_solver::testing::XorShiftSource;

    use super::*;

    fn render(results: &[ResultRecord]) -> String {
        let mut out = Vec::new();
        write_results(&mut out, results).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_read_sample_table() {
        let levels = read_levels(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[0].level_id, "1");
        assert_eq!(levels[0].grid.lines().count(), 5);
        assert_eq!(levels[0].grid.lines().nth(4), Some("B A C B A"));
        assert_eq!(levels[1].move_limit, "20");
        assert_eq!(levels[1].traps, "1");
    }

    #[test]
    fn test_read_tolerates_missing_columns_and_short_rows() {
        let csv = "LevelID,MoveLimit,Traps\n7,12\n8,,2\n9\n10,5,1,extra\n";
        let levels = read_levels(csv.as_bytes()).unwrap();
        assert_eq!(levels.len(), 4);
        assert_eq!(levels[0].move_limit, "12");
        assert_eq!(levels[0].traps, "");
        assert_eq!(levels[0].grid, "");
        assert_eq!(levels[1].traps, "2");
        assert_eq!(levels[2].level_id, "9");
        assert_eq!(levels[2].move_limit, "");
        assert_eq!((levels[3].move_limit.as_str(), levels[3].traps.as_str()), ("5", "1"));
    }

    #[test]
    fn test_sample_table_end_to_end() {
        let levels = read_levels(SAMPLE_CSV.as_bytes()).unwrap();
        let results = BatchRunner::default()
            .run_with_source(&levels, &mut XorShiftSource::new(42))
            .unwrap();

        assert_eq!(
            render(&results),
            "LevelID,Rows,Cols,MoveLimit,BlockTypes,Traps,Efficiency,StepsUsed,TotalCleared,DifficultyScore,Error\n\
             1,5,5,18,3,0,23.440,18,586,0.90,\n\
             2,6,6,20,5,1,0.000,0,0,11.50,\n"
        );
    }

    #[test]
    fn test_write_includes_error_column() {
        let csv = "LevelID,GridRows,GridCols,Grid\n4,2,2,\"A B\nB Z\"\n";
        let levels = read_levels(csv.as_bytes()).unwrap();
        let results = BatchRunner::default().run(&levels).unwrap();

        let text = render(&results);
        let row = text.lines().nth(1).unwrap();
        // no efficiency or score for a level that was never played
        assert!(row.starts_with("4,2,2,10,3,0,,0,0,,"));
        assert!(row.contains("invalid symbol 'Z' at (1, 1)"));
    }
}
