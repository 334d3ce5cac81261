use clap::Parser;

use pairspace::defaults;
use pairspace::executor::{effective_worker_count, process_all_pairs, ExecutionMode};
use pairspace::partition::partition_offsets;
use pairspace::store::PairStore;
use pairspace::triangular::TriangularIndex;
use pairspace::utils;
use pairspace::verify::find_first_deviation;

#[derive(Parser)]
#[command(name = "pairspace")]
#[command(about = "Parallel processing of integer vectors keyed by unordered index pairs", long_about = None)]
#[command(version)]
struct Cli {
    /// Matrix dimension; unordered pairs are drawn from indices 0..ROWS-1
    #[arg(value_name = "ROWS")]
    rows: usize,

    /// Length of the integer vector associated with each unordered pair
    #[arg(value_name = "VLEN")]
    vector_length: usize,

    /// Number of simulated workers. If <= 0 or absent, use hardware
    /// parallelism and run real threads; if > 0, run that many logical
    /// partitions sequentially on the calling thread.
    #[arg(value_name = "WORKERS", allow_negative_numbers = true)]
    simulated_workers: Option<i64>,

    /// Verbose level: 1=error, 2=warning, 3=message, 4+=debugging
    #[arg(short = 'v', long, value_name = "INT", default_value = "3")]
    verbosity: i32,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbosity {
        v if v <= 1 => log::LevelFilter::Error,
        2 => log::LevelFilter::Warn,
        3 => log::LevelFilter::Info,
        4 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None)
        .format_target(false)
        .init();

    if cli.rows < defaults::MIN_DIMENSION {
        log::error!(
            "At least {} rows are needed for any pair to exist, got {}",
            defaults::MIN_DIMENSION,
            cli.rows
        );
        std::process::exit(1);
    }
    if cli.vector_length < defaults::MIN_VECTOR_LENGTH {
        log::error!(
            "Vector length must be at least {}, got {}",
            defaults::MIN_VECTOR_LENGTH,
            cli.vector_length
        );
        std::process::exit(1);
    }

    let start_real = utils::realtime();
    let start_cpu = utils::cputime();

    let index = TriangularIndex::new(cli.rows);
    log::info!(
        "Pair space: {} rows, {} unordered pairs, {} elements per pair",
        index.dimension(),
        index.pair_count(),
        cli.vector_length
    );

    let requested = cli.simulated_workers.unwrap_or(0);
    let (mode, workers) = if requested > 0 {
        (ExecutionMode::Simulated, requested as usize)
    } else {
        (ExecutionMode::Threaded, effective_worker_count(requested))
    };

    log::info!("Potential hardware threads: {}", num_cpus::get());
    log::info!(
        "Workers attempted in this run: {} ({})",
        workers,
        match mode {
            ExecutionMode::Threaded => "threaded",
            ExecutionMode::Simulated => "simulated",
        }
    );

    let ranges = match partition_offsets(index.pair_count(), workers) {
        Ok(ranges) => ranges,
        Err(e) => {
            log::error!("Partitioning failed: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(first) = ranges.first() {
        log::info!("Maximum pairs per worker: {}", first.end - first.start);
    }

    let mut store = PairStore::new(index.pair_count(), cli.vector_length);
    if let Err(e) = process_all_pairs(&index, &mut store, &ranges, mode) {
        // Indexing and consistency errors mean a broken invariant, not bad
        // input; nothing is retried and no partial result is reported.
        log::error!("Processing failed: {}", e);
        std::process::exit(1);
    }

    log::info!("Final check ...");
    let outcome = find_first_deviation(&index, &store, defaults::EXPECTED_ELEMENT_VALUE);
    let exit_code = match outcome {
        Ok(None) => {
            log::info!("Success!");
            0
        }
        Ok(Some(dev)) => {
            log::error!(
                "Error at pair ({}, {}) element {}: {} (expected {})",
                dev.row,
                dev.col,
                dev.element,
                dev.value,
                defaults::EXPECTED_ELEMENT_VALUE
            );
            1
        }
        Err(e) => {
            log::error!("Verification failed: {}", e);
            1
        }
    };

    log::info!(
        "Total elapsed time: {:.3} sec real, {:.3} sec CPU",
        utils::realtime() - start_real,
        utils::cputime() - start_cpu
    );
    std::process::exit(exit_code);
}
