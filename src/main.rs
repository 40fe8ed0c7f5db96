use {
    percolation::{progress::Overwriter, render::Grid, Error, RunConfig},
    std::{
        io::{BufRead, Write},
        process::ExitCode,
    },
    tracing_subscriber::{fmt, prelude::*, EnvFilter},
};

fn main() -> ExitCode {
    init_tracing();

    match main_inner() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main_inner() -> Result<(), Error> {
    let config = RunConfig::from_args(pico_args::Arguments::from_env(), prompt_grid_size)?;

    println!("searching n = {} ({})...", config.size, config.mode);

    let now = std::time::Instant::now();
    let mut overwriter = Overwriter::default();
    let best = percolation::search::run(&config, |progress| overwriter.print(progress.to_string()))?;
    overwriter.finish();

    println!("total time: {:?}", now.elapsed());
    println!("Max length = {}", best.length);
    println!("Best state = {}", best.state);
    print!("{}", Grid::new(config.size, best.state));

    Ok(())
}

fn prompt_grid_size() -> Result<String, Error> {
    print!("Enter grid size (1 to 8): ");
    std::io::stdout().lock().flush()?;

    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(Error::MissingGridSize);
    }

    Ok(line)
}
