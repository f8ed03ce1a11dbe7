use std::io::{self, Read};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;

use bench_report::{
    BenchRecord, BenchReportError, RunConfig, append_record, extract_mean_stats, load_records,
    parse_document,
};

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match RunConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };
    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(config: &RunConfig) -> Result<(), BenchReportError> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| BenchReportError::io(e.to_string()))?;
    let root = parse_document(input.as_bytes())?;
    let stats = extract_mean_stats(&root)?;
    let record = BenchRecord {
        timestamp: epoch_seconds(),
        commit: config.commit.clone(),
        mean: stats.mean,
        lower_bound: stats.lower_bound,
        upper_bound: stats.upper_bound,
    };
    debug!("appending {}", record.summary());
    append_record(&config.report_path, &record)?;
    if log::log_enabled!(log::Level::Debug) {
        let history = load_records(&config.report_path)?;
        debug!("report now holds {} runs", history.len());
    }
    Ok(())
}

fn epoch_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}
