use html_builder::demos::Demo;
use html_builder::Error;
use tracing::{info, span, Level};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

struct Args {
    /// Print only this demo instead of all of them
    pub demo: Option<Demo>,
    pub list: bool,
    pub trace: bool,
}

fn main() -> Result<(), Error> {
    let args = parse_args()?;
    if args.trace {
        tracing_subscriber::fmt::fmt()
            .with_span_events(FmtSpan::ACTIVE)
            .with_max_level(Level::TRACE)
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .finish()
            .init();
        info!("Logger initialized");
    }

    if args.list {
        for demo in Demo::ALL {
            println!("{}", demo.name());
        }
        return Ok(());
    }

    match args.demo {
        Some(demo) => print_demo(demo),
        None => Demo::ALL.into_iter().for_each(print_demo),
    }
    Ok(())
}

fn parse_args() -> Result<Args, Error> {
    let mut pargs = pico_args::Arguments::from_env();
    let args = Args {
        list: pargs.contains(["--list", "-l"]),
        trace: pargs.contains(["--trace", "-t"]),
        demo: pargs.opt_free_from_str()?,
    };
    Ok(args)
}

fn print_demo(demo: Demo) {
    let span = span!(Level::DEBUG, "Building demo", "{}", demo.name());
    let _enter = span.enter();
    print!("{}", demo.build());
}
