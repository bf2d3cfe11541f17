mod sequences;

use std::fmt::Display;
use std::io::Write;

use clap::{Args, Parser, Subcommand};
use strand::{RenderOptions, Stream};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// The natural numbers, counting up from a starting point.
    Naturals {
        /// first number of the sequence
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        from: i64,
        #[command(flatten)]
        output: Output,
    },
    /// The Fibonacci numbers, starting 1, 1.
    Fibonacci(Output),
    /// The factorials of 1, 2, 3 and up.
    Factorial(Output),
    /// The prime numbers.
    Primes(Output),
}

#[derive(Debug, Args)]
struct Output {
    /// Number of elements to compute and print.
    #[arg(long, default_value_t = 10)]
    take: usize,
    /// Show at most this many elements when rendering the stream.
    #[arg(long)]
    render_limit: Option<usize>,
}

impl Output {
    fn show<T>(&self, stream: Stream<T>) -> anyhow::Result<()>
    where
        T: strand::Element + Display,
    {
        tracing::debug!(take = self.take, "forcing stream prefix");
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for item in stream.take(self.take) {
            writeln!(out, "{}", item)?;
        }
        let mut options = RenderOptions::default();
        if let Some(limit) = self.render_limit {
            options = options.limit(limit);
        }
        writeln!(out, "{}", stream.render_with(&options))?;
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Naturals { from, output } => {
            output.show(sequences::naturals(from))?;
        }
        Commands::Fibonacci(output) => {
            output.show(sequences::fibonacci())?;
        }
        Commands::Factorial(output) => {
            output.show(sequences::factorial())?;
        }
        Commands::Primes(output) => {
            output.show(sequences::primes())?;
        }
    }
    Ok(())
}
