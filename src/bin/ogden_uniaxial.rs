use ogden::prelude::*;
use std::path::Path;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "ogden_uniaxial",
    about = "Computes the uniaxial stress-stretch response of Ogden hyperelastic models"
)]
struct Options {
    /// JSON file with the configuration (default values are used otherwise)
    #[structopt(long)]
    config: Option<String>,

    /// Shear-modulus-like coefficient
    #[structopt(long, default_value = "1.0")]
    c1: f64,

    /// Ogden exponent
    #[structopt(long, default_value = "12.0")]
    m1: f64,

    /// Bulk-modulus-like coefficient
    #[structopt(long, default_value = "1000.0")]
    k: f64,

    /// Strategy to find the Jacobian: "root" or "interp" (overrides the configuration file)
    #[structopt(long)]
    strategy: Option<String>,

    /// Directory for the output files
    #[structopt(long, default_value = "/tmp/ogden/results")]
    out_dir: String,

    /// Generates SVG figures
    #[structopt(long)]
    plot: bool,

    /// Stops at the first failed sample
    #[structopt(long)]
    fail_fast: bool,

    /// Solves the samples in parallel
    #[structopt(long)]
    parallel: bool,

    /// Prints messages
    #[structopt(short, long)]
    verbose: bool,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // configuration
    let mut config = match &options.config {
        Some(path) => Config::from_json(path)?,
        None => Config::new(),
    };
    if let Some(key) = &options.strategy {
        let strategy = match key.as_str() {
            "root" => Strategy::RootFinding,
            "interp" => Strategy::Interpolation,
            _ => return Err("strategy must be \"root\" or \"interp\""),
        };
        config.set_strategy(strategy)?;
    }
    if options.fail_fast {
        config.set_fail_fast(true)?;
    }
    if options.parallel {
        config.set_parallel(true)?;
    }
    if options.verbose {
        config.set_verbose(true)?;
        println!("{}", config);
    }

    // run all formulations
    let param = ParamOgden::new(options.c1, options.m1, options.k)?;
    let sweep = UniaxialSweep::new(&param, &config)?;
    let mut paths = Vec::new();
    for formulation in Formulation::all() {
        let results = sweep.run(formulation)?;
        let path_json = Path::new(&options.out_dir).join(format!("{}.json", formulation.key()));
        results.write(&path_json)?;
        paths.push(path_json.display().to_string());
        if options.plot {
            let mut plotter = Plotter::new();
            plotter.draw(&results);
            if results.states.len() > 0 {
                let path_svg = Path::new(&options.out_dir).join(format!("{}.svg", formulation.key()));
                plotter.save(&path_svg)?;
                paths.push(path_svg.display().to_string());
            }
        }
        for failure in &results.failures {
            println!("{}", failure);
        }
    }

    // message
    let width = paths.iter().map(|p| p.chars().count()).max().unwrap_or(0);
    let thin_line = format!("{:─^1$}", "", width);
    println!("\n\n{}", thin_line);
    println!("Results generated; the output files are:");
    for path in &paths {
        println!("{}", path);
    }
    println!("{}\n\n", thin_line);
    Ok(())
}
