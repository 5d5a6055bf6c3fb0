use clap::{arg, crate_version, Command};
use ltfos_gomea::{driver::Driver, rng::Rng, Config, Error, DEFAULT_CONFIG};

const RCH: &str = "unreachable was reached";

fn main() {
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(exit_code(&e));
    }
}

fn exit_code(err: &Error) -> i32 {
    match err {
        Error::ConfigError(_) => 2,
        Error::EvaluatorError(_) => 3,
        Error::BackendError(_) => 4,
        Error::InvalidEncoding(_) | Error::OutOfRange => 5,
    }
}

fn run() -> Result<(), Error> {
    let long_help =
"Examples:
---------
Default run:          `ltfos-gomea run`
Tune the problem:     `ltfos-gomea run --size 128 --length 64 --generations 50 --index 1`";

    let main_cmd = Command::new("ltfos-gomea")
        .about("GOMEA with a linkage-tree family of subsets")
        .after_long_help(long_help)
        .version(crate_version!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("evolve a population toward a chosen fitness function")
                .arg(arg!(--size <N> "population size").value_parser(clap::value_parser!(usize)))
                .arg(arg!(--length <L> "problem length").value_parser(clap::value_parser!(usize)))
                .arg(arg!(--generations <G> "maximum generations").value_parser(clap::value_parser!(usize)))
                .arg(arg!(--random <SEED> "RNG seed, 0 means time-based").value_parser(clap::value_parser!(u64)))
                .arg(arg!(--index <I> "problem selector: 0=deceptive trap(4), 1=hiff").value_parser(clap::value_parser!(u32)))
                .arg(arg!(--verbosity <V> "trace detail 0-4").value_parser(clap::value_parser!(u8))),
        );

    let matches = main_cmd.get_matches();

    let cmd = matches.subcommand_matches("run").expect(RCH);
    let config = Config {
        size: cmd.get_one::<usize>("size").copied().unwrap_or(DEFAULT_CONFIG.size),
        length: cmd.get_one::<usize>("length").copied().unwrap_or(DEFAULT_CONFIG.length),
        generations: cmd.get_one::<usize>("generations").copied().unwrap_or(DEFAULT_CONFIG.generations),
        random: cmd.get_one::<u64>("random").copied().unwrap_or(DEFAULT_CONFIG.random),
        index: cmd.get_one::<u32>("index").copied().unwrap_or(DEFAULT_CONFIG.index),
        verbosity: cmd.get_one::<u8>("verbosity").copied().unwrap_or(DEFAULT_CONFIG.verbosity),
    };

    init_logging(config.verbosity);
    config.validate()?;

    let evaluator = config.evaluator();
    let driver = Driver::new(config.size, config.length, config.generations, evaluator);
    let mut rng = Rng::new(config.random);

    let result = driver.run(&mut rng)?;

    println!(
        "ran {} generation(s){}, best fitness = {:.3}, mean fitness = {:.3}",
        result.generations_run,
        if result.converged { " (converged early)" } else { "" },
        result.population.best_fitness(),
        result.population.mean_fitness(),
    );

    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env().filter_level(level).try_init().ok();
}
