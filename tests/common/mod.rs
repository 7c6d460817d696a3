use rand::Rng;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn generate_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["op", "account", "to", "amount"])?;

    for i in 1..=rows {
        wtr.write_record(["set", &format!("acct{i}"), "", "100"])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn generate_large_csv(path: &Path, size_mb: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(["op", "account", "to", "amount"])?;

    let mut rng = rand::thread_rng();
    let target_size = (size_mb * 1024 * 1024) as u64;

    // Check size every 5000 rows to avoid syscall overhead
    loop {
        for _ in 0..5000 {
            let account = format!("acct{}", rng.gen_range(1..=50));
            if rng.gen_bool(0.1) {
                let to = format!("acct{}", rng.gen_range(1..=50));
                wtr.write_record(["transfer", &account, &to, "10"])?;
            } else {
                let amount = rng.gen_range(0..10_000u64).to_string();
                wtr.write_record(["set", &account, "", &amount])?;
            }
        }
        wtr.flush()?; // Flush to ensure file size is updated
        if std::fs::metadata(path)?.len() >= target_size {
            break;
        }
    }
    Ok(())
}
