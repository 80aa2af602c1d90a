use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use casemint_archive::{ArchiveOptions, compress};
use casemint_generate::{GenerateOptions, GenerationEngine};
use casemint_publish::{S3ObjectStore, UploadTarget, publish_latest};

/// Environment variable consumed as a fallback for `--service`.
const SERVICE_ENV: &str = "SERVICE";

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] casemint_generate::GenerationError),
    #[error("archive error: {0}")]
    Archive(#[from] casemint_archive::ArchiveError),
    #[error("publish error: {0}")]
    Publish(#[from] casemint_publish::PublishError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("no archive was uploaded")]
    NothingUploaded,
}

#[derive(Parser, Debug)]
#[command(name = "casemint", version, about = "Synthetic case data toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the per-category dummy datasets as CSV.
    Generate(GenerateArgs),
    /// Compress a folder into a timestamped .7z archive.
    Archive(ArchiveArgs),
    /// Upload the newest archive in a directory to object storage.
    Publish(PublishArgs),
    /// Echo which service this instance would run.
    Service(ServiceArgs),
    /// Print a value a number of times.
    Echo(EchoArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Rows generated per category dataset.
    #[arg(long, default_value_t = 100)]
    rows: u64,
    /// Directory the CSV files are written to.
    #[arg(long, default_value = "dummy_data/raw_data")]
    out_dir: PathBuf,
    /// Seed for deterministic generation.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Args, Debug)]
struct ArchiveArgs {
    /// Folder to compress.
    #[arg(long, default_value = "dummy_data/raw_data")]
    source_dir: PathBuf,
    /// Where to save the archive.
    #[arg(long, default_value = "dummy_data/7z")]
    out_dir: PathBuf,
    /// Password protecting the archive contents.
    #[arg(long)]
    password: Option<String>,
    /// Prefix prepended to the default archive name.
    #[arg(long)]
    prefix: Option<String>,
}

#[derive(Args, Debug)]
struct PublishArgs {
    /// Directory scanned for .7z archives.
    #[arg(long, default_value = "dummy_data/7z")]
    dir: PathBuf,
    /// Destination bucket.
    #[arg(long)]
    bucket: String,
    /// Key prefix prepended to the archive filename.
    #[arg(long, default_value = "cps_dummy/")]
    key_prefix: String,
}

#[derive(Args, Debug)]
struct ServiceArgs {
    /// Service to run; overrides the SERVICE environment variable.
    #[arg(long)]
    service: Option<String>,
}

#[derive(Args, Debug)]
struct EchoArgs {
    /// Value to print.
    value: String,
    /// How many times to print it.
    #[arg(short = 't', long, default_value_t = 1)]
    times: u64,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Archive(args) => run_archive(args),
        Command::Publish(args) => run_publish(args).await,
        Command::Service(args) => run_service(args),
        Command::Echo(args) => run_echo(args),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let engine = GenerationEngine::new(GenerateOptions {
        out_dir: args.out_dir,
        rows: args.rows,
        seed: args.seed,
    });
    let result = engine.run()?;
    info!(out_dir = %result.out_dir.display(), "datasets written");
    Ok(())
}

fn run_archive(args: ArchiveArgs) -> Result<(), CliError> {
    let path = compress(&ArchiveOptions {
        source_dir: args.source_dir,
        output_dir: args.out_dir,
        password: args.password,
        prefix: args.prefix,
    })?;
    println!("{}", path.display());
    Ok(())
}

async fn run_publish(args: PublishArgs) -> Result<(), CliError> {
    let store = S3ObjectStore::from_env().await;
    let target = UploadTarget {
        bucket: args.bucket,
        key_prefix: args.key_prefix,
    };
    let uploaded = publish_latest(&args.dir, &target, &store).await?;
    if uploaded {
        info!(dir = %args.dir.display(), "publish finished");
        Ok(())
    } else {
        Err(CliError::NothingUploaded)
    }
}

fn run_service(args: ServiceArgs) -> Result<(), CliError> {
    let service = resolve_service(args.service, std::env::var(SERVICE_ENV).ok())?;
    println!("Running {service} service");
    Ok(())
}

/// Explicit flag wins over the SERVICE environment variable.
fn resolve_service(flag: Option<String>, env: Option<String>) -> Result<String, CliError> {
    flag.or(env).ok_or_else(|| {
        CliError::InvalidConfig(format!("pass --service or set {SERVICE_ENV}"))
    })
}

fn run_echo(args: EchoArgs) -> Result<(), CliError> {
    for _ in 0..args.times {
        println!("{}", args.value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};
    use std::time::{SystemTime, UNIX_EPOCH};

    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    #[derive(Clone, Default)]
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl CaptureWriter {
        fn contents(&self) -> String {
            self.0
                .lock()
                .map(|buf| String::from_utf8_lossy(&buf).into_owned())
                .unwrap_or_default()
        }
    }

    impl io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if let Ok(mut inner) = self.0.lock() {
                inner.extend_from_slice(buf);
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CaptureWriter {
        type Writer = CaptureWriter;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn generate_logs_the_run_outcome() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos())
            .unwrap_or_default();
        let mut out_dir = std::env::temp_dir();
        out_dir.push(format!("casemint_cli_generate_{nanos}"));

        let writer = CaptureWriter::default();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(writer.clone())
            .finish();

        let args = GenerateArgs {
            rows: 5,
            out_dir,
            seed: 1,
        };
        tracing::subscriber::with_default(subscriber, || run_generate(args))
            .expect("run generate");

        let logs = writer.contents();
        assert!(logs.contains("datasets written"), "got logs: {logs}");
    }

    #[test]
    fn service_resolution_prefers_the_flag() {
        let resolved = resolve_service(Some("court".to_string()), Some("env".to_string()))
            .expect("resolve");
        assert_eq!(resolved, "court");

        let fallback = resolve_service(None, Some("env".to_string())).expect("resolve env");
        assert_eq!(fallback, "env");

        let missing = resolve_service(None, None);
        assert!(matches!(missing, Err(CliError::InvalidConfig(_))));
    }
}
