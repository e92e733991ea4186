use clap::Parser;

/// Computes the Soft-Vote Index (SVI) report for one project's
/// social-listening records.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The file containing the project records: a JSON records
    /// file or an Excel workbook in the listening-template layout.
    #[clap(short, long, value_parser)]
    pub input: String,

    /// (default inferred from the file extension) The type of the input:
    /// 'json' or 'xlsx'.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the report will be written
    /// in JSON format to the given location instead of the standard output.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference report in JSON format. If provided, svindex
    /// will check that the computed report matches the reference and print a
    /// diff otherwise.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
