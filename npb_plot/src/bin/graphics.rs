use clap::{App, Arg};
use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use npb::{ImageFormat, Paths};
use std::path::PathBuf;

const DEFAULT_FORMAT: &str = "png";

struct GraphicsArgs {
    json_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    format: ImageFormat,
    paths: Paths,
}

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    npb_plot::init_tracing();

    let args = parse_args()?;

    let task = npb_plot::benchmarks_task(
        args.json_file,
        args.output_file,
        args.format,
        &args.paths,
    )?;
    if let Some(task) = task {
        npb_plot::benchmarks_plot(&task.matrix, &task.output_file, task.format)
            .wrap_err("benchmarks plot")?;
    }
    Ok(())
}

fn parse_args() -> Result<GraphicsArgs, Report> {
    let matches = App::new("graphics")
        .version("0.1")
        .about("Compares all benchmarks across DO CONCURRENT, MPI and OpenMP.")
        .arg(
            Arg::with_name("json")
                .long("json")
                .value_name("PATH")
                .help("results file to plot; by default the most recent 'all_implementations_*.json' in the results folder is used")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .value_name("PATH")
                .help("file in which the chart is saved; by default a timestamped file in the graphics folder is created")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("format")
                .long("format")
                .value_name("FORMAT")
                .help("format of the generated chart; default: png")
                .possible_values(&["png", "jpeg"])
                .default_value(DEFAULT_FORMAT)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("base_dir")
                .long("base_dir")
                .value_name("DIR")
                .help("directory with the 'Results' and 'Graphics' folders; default: $NPB_BASE_DIR or '/mnt/f/NAS Parallel Benchmarks'")
                .takes_value(true),
        )
        .get_matches();

    // parse arguments
    let json_file = matches.value_of("json").map(PathBuf::from);
    let output_file = matches.value_of("output").map(PathBuf::from);
    let format = matches
        .value_of("format")
        .unwrap_or(DEFAULT_FORMAT)
        .parse::<ImageFormat>()?;
    let paths = Paths::resolve(matches.value_of("base_dir"));

    tracing::debug!("json file: {:?}", json_file);
    tracing::debug!("output file: {:?}", output_file);
    tracing::debug!("format: {}", format);
    tracing::debug!("base dir: {}", paths.base_dir().display());

    Ok(GraphicsArgs {
        json_file,
        output_file,
        format,
        paths,
    })
}
