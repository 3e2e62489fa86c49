use clap::Parser;
use color_eyre::Result;
use fastfood_dash::app::App;
use fastfood_dash::cli::CliArgs;
use fastfood_dash::{config, data, event, terminal};

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    // Dataset load failure is fatal; there is no dashboard without data.
    let data_path = config::init_app_config();
    let dataset = data::load_dataset(&data_path)?;

    let mut app = App::new(dataset);

    // Run headless when asked to, or when stdout is not a terminal.
    if args.headless || !is_terminal() {
        return event::run_headless(&app, args.json);
    }

    // Setup terminal
    let mut terminal = terminal::setup()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app);

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
