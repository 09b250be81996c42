use std::error::Error;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::{dto::Operation, LoanLedger};

use super::{apply_logged, write_summary};

/// Replays the operations script at the given path and writes the bike
/// summary to the provided writer.
///
/// # Arguments
/// * `input_path` - Path to the input CSV file containing operations
/// * `writer` - Where to write the bike summary (e.g. stdout)
///
/// # Errors
/// Returns an error if:
/// * The input file cannot be read
/// * The CSV is malformed
/// * Writing to the output fails
pub fn run<P, W>(input_path: P, writer: W) -> Result<(), Box<dyn Error>>
where
    P: AsRef<Path>,
    W: Write,
{
    let mut ledger = LoanLedger::new();
    let mut rejected = 0;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(input_path)?;
    for row in reader.deserialize::<Operation>() {
        // CSV parsing errors are critical - propagate them.
        // Rejected operations are an expected outcome - log and move on.
        apply_logged(&mut ledger, &row?, &mut rejected);
    }
    if rejected > 0 {
        debug!(rejected, "script finished with rejected operations");
    }

    write_summary(&ledger, writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_script() -> Result<(), Box<dyn Error>> {
        let mut output = Vec::new();
        run("data/example_ops.csv", &mut output)?;

        let expected = "id,label,available
B001,Mountain,true
B002,City,false
B003,Road,false
";
        assert_eq!(String::from_utf8(output)?, expected);
        Ok(())
    }

    #[test]
    fn test_missing_input_file() {
        let mut output = Vec::new();
        assert!(run("data/does_not_exist.csv", &mut output).is_err());
    }
}
