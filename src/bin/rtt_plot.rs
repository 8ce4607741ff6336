use rtt_plot::plot::{parse_cli, PlotArgs};
use rtt_plot::render::{sink_for, ChartStyle};
use rtt_plot::stats::RttSummary;
use rtt_plot::{RttError, Series};
use tracing::{error, info, warn, Level};

fn main() {
    let args = parse_cli();
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: PlotArgs) -> Result<(), RttError> {
    let sink = sink_for(args.output.clone())?;
    match &args.output {
        Some(out) => info!(
            "read data from {} and plot to {}",
            args.txtin.display(),
            out.display()
        ),
        None => info!("read data from {} and open the viewer", args.txtin.display()),
    }
    let series = Series::from_txt(&args.txtin)?;
    match RttSummary::from_series(&series) {
        Some(summary) => info!("{}", summary),
        None => warn!("no finite samples in {}", args.txtin.display()),
    }
    sink.render(&series, &ChartStyle::default())?;
    Ok(())
}
