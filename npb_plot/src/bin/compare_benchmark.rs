use clap::{App, Arg};
use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use npb::{ImageFormat, Paths, Search};

const DEFAULT_FORMAT: &str = "png";

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    npb_plot::init_tracing();

    let (search, format, paths) = parse_args()?;

    if let Some(task) = npb_plot::comparison_task(&search, format, &paths)? {
        npb_plot::comparison_plot(
            &task.comparison,
            &task.output_file,
            task.format,
        )
        .wrap_err("comparison plot")?;
    }
    Ok(())
}

fn parse_args() -> Result<(Search, ImageFormat, Paths), Report> {
    let matches = App::new("compare_benchmark")
        .version("0.1")
        .about("Compares one benchmark across DO CONCURRENT, MPI and OpenMP.")
        .arg(
            Arg::with_name("benchmark")
                .long("benchmark")
                .value_name("CODE")
                .help("benchmark to compare (e.g. CG, MG, FT)")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("class")
                .long("class")
                .value_name("LETTER")
                .help("only consider results of this class; by default the first result of each implementation is used")
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
    let mut search = Search::new(
        matches
            .value_of("benchmark")
            .expect("benchmark is a required argument"),
    );
    if let Some(class) = matches.value_of("class") {
        search.class(class);
    }
    let format = matches
        .value_of("format")
        .unwrap_or(DEFAULT_FORMAT)
        .parse::<ImageFormat>()?;
    let paths = Paths::resolve(matches.value_of("base_dir"));

    tracing::debug!("search: {:?}", search);
    tracing::debug!("format: {}", format);
    tracing::debug!("base dir: {}", paths.base_dir().display());

    Ok((search, format, paths))
}
