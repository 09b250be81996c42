use std::error::Error;
use std::io::Write;
use std::path::Path;

use csv_async::{AsyncReaderBuilder, Error as CsvError, Trim};
use tokio::fs::File;
use tokio::sync::mpsc;
use tokio_stream::StreamExt;
use tracing::debug;

use crate::{dto::Operation, LoanLedger};

use super::{apply_logged, write_summary};

const BUFFER_SIZE: usize = 1024;

type Result<T, E = Box<dyn Error + Send + Sync>> = std::result::Result<T, E>;

/// Replays an operations script async and writes the bike summary to the
/// provided writer. Spawns two tasks:
/// * CSV reader - streams operations from the input file, deserializes them and sends them to the processor via channel.
/// * Processor - receives operations from the channel and applies them until the channel is closed.
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
pub async fn run<P, W>(input_path: P, writer: W) -> Result<()>
where
    P: AsRef<Path>,
    W: Write,
{
    // Create channel for passing operations from reader to processor
    let (tx, rx) = mpsc::channel(BUFFER_SIZE);
    let input_path = input_path.as_ref().to_owned();

    let reader_handle = tokio::spawn(read_operations(input_path, tx));
    let processor_handle = tokio::spawn(process_operations(rx));

    // Wait for reader to finish and propagate any errors
    reader_handle.await??;

    // Get final ledger state
    let ledger = processor_handle.await?;

    write_summary(&ledger, writer)?;
    Ok(())
}

/// Reads and deserializes operations from a CSV file.
/// Returns them through the provided channel.
async fn read_operations(
    input_path: impl AsRef<Path> + Send,
    tx: mpsc::Sender<Operation>,
) -> Result<(), CsvError> {
    let file = File::open(input_path).await?;
    let mut csv_reader = AsyncReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .create_deserializer(file);

    let mut records = csv_reader.deserialize::<Operation>();
    while let Some(result) = records.next().await {
        match result {
            Ok(operation) => {
                if tx.send(operation).await.is_err() {
                    // Receiver dropped, exit gracefully
                    break;
                }
            }
            // CSV parsing errors are critical - propagate them
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Applies operations received through the channel.
/// Returns the final ledger state once the channel is closed by the reader.
async fn process_operations(mut rx: mpsc::Receiver<Operation>) -> LoanLedger {
    let mut ledger = LoanLedger::new();
    let mut rejected = 0;
    while let Some(operation) = rx.recv().await {
        apply_logged(&mut ledger, &operation, &mut rejected);
    }
    if rejected > 0 {
        debug!(rejected, "script finished with rejected operations");
    }
    ledger
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_example_script() -> Result<()> {
        let mut output = Vec::new();
        run("data/example_ops.csv", &mut output).await?;

        let expected = "id,label,available
B001,Mountain,true
B002,City,false
B003,Road,false
";
        assert_eq!(String::from_utf8(output)?, expected);
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_input_file() {
        let mut output = Vec::new();
        assert!(run("data/does_not_exist.csv", &mut output).await.is_err());
    }
}
