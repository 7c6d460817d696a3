use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use wire_ledger::application::engine::TransferEngine;
use wire_ledger::domain::ports::WireTransfersBox;
use wire_ledger::infrastructure::in_memory::InMemoryBank;
use wire_ledger::infrastructure::sharded::ShardedBank;
use wire_ledger::interfaces::csv::balance_writer::BalanceWriter;
use wire_ledger::interfaces::csv::instruction_reader::InstructionReader;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Backend {
    /// One lock around the whole balance table.
    InMemory,
    /// Per-shard locks for contended workloads.
    Sharded,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input instructions CSV file
    input: PathBuf,

    /// Ledger backend to run the batch against.
    #[arg(long, value_enum, default_value = "in-memory")]
    backend: Backend,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let bank: WireTransfersBox = match cli.backend {
        Backend::InMemory => Box::new(InMemoryBank::new()),
        Backend::Sharded => Box::new(ShardedBank::new()),
    };
    let engine = TransferEngine::new(bank);

    // Process instructions
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = InstructionReader::new(file);
    for row in reader.instructions() {
        match row {
            Ok(instruction) => {
                if let Err(e) = engine.process_instruction(instruction).await {
                    eprintln!("Error processing instruction: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading instruction: {}", e);
            }
        }
    }

    // Collect final state from engine
    let balances = engine.into_results().await?;

    // Output final state
    let stdout = io::stdout();
    let writer = BalanceWriter::new(stdout.lock());
    writer.write_balances(balances)?;

    Ok(())
}
