use super::{DEFAULT_RTT_FILE, VERSION};
use clap::{App, Arg, ArgMatches};
use std::ffi::OsString;
use std::path::PathBuf;

/// Options of the rtt_plot binary
#[derive(Debug, Clone, PartialEq)]
pub struct PlotArgs {
    pub txtin: PathBuf,
    /// None opens the interactive viewer
    pub output: Option<PathBuf>,
    pub verbose: bool,
}

fn cli_app() -> App<'static, 'static> {
    let arg_txtin = Arg::with_name("input_txtfile")
        .help("name of the two-column text file with time [s] and RTT [ms]")
        .short("f")
        .long("file")
        .takes_value(true)
        .default_value(DEFAULT_RTT_FILE);
    let arg_output = Arg::with_name("output_file")
        .help("write the chart to this svg or png file instead of opening a window")
        .short("o")
        .long("output")
        .takes_value(true);
    let arg_verbose = Arg::with_name("verbose")
        .help("print debug information")
        .short("v")
        .long("verbose")
        .takes_value(false)
        .required(false);
    App::new("rtt_plot")
        .version(VERSION.unwrap_or("unknown"))
        .author("Luca Peruzzo")
        .about("cli app to plot the RTT time series")
        .arg(arg_txtin)
        .arg(arg_output)
        .arg(arg_verbose)
}

fn from_matches(cli_args: &ArgMatches) -> PlotArgs {
    let txtin = PathBuf::from(cli_args.value_of("input_txtfile").unwrap_or(DEFAULT_RTT_FILE));
    let output = cli_args.value_of("output_file").map(PathBuf::from);
    let verbose = cli_args.is_present("verbose");
    PlotArgs {
        txtin,
        output,
        verbose,
    }
}

/// Takes the CLI arguments that control the plotting of the RTT time series.
pub fn parse_cli() -> PlotArgs {
    from_matches(&cli_app().get_matches())
}

/// Same as `parse_cli` on the given arguments, the first one being the binary name
pub fn parse_cli_from<I, T>(args: I) -> Result<PlotArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli_args = cli_app().get_matches_from_safe(args)?;
    Ok(from_matches(&cli_args))
}
