use clap::Parser;
use mimalloc::MiMalloc;

use snptab::analyzer::DEFAULT_OUTPUT;
use snptab::{SnpAnalyzer, SnpTabError};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[command(name = "snptab")]
#[command(author, version, about = "Extract VCF records into a quality-filtered variant table")]
struct Args {
    /// Input VCF or BCF file. Use - for stdin.
    vcf: String,

    /// Minimum quality a variant must reach to count as filtered
    #[arg(short, long, default_value_t = 20.0)]
    min_quality: f64,

    /// Output path for the delimited table
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: String,

    /// Field delimiter for the output table
    #[arg(short, long, default_value_t = ';')]
    delimiter: char,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), SnpTabError> {
    let delimiter =
        u8::try_from(args.delimiter).map_err(|_| SnpTabError::InvalidDelimiter(args.delimiter))?;

    let mut analyzer = SnpAnalyzer::new(args.vcf.as_str());
    let table = analyzer.parse()?;
    println!("Total variants: {}", table.len());

    let filtered = analyzer.filter_by_quality(args.min_quality);
    println!("Filtered variants: {}", filtered.len());

    analyzer.export(Some(args.output.as_str()), delimiter)?;
    Ok(())
}
