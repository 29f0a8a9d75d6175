use course_planner::Session;
use course_planner::config::{Args, Config};
use course_planner::io_adapters::{BufferedInput, EditorInput};
use std::io::{self, IsTerminal};

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();
    let config = Config::from_env(args);

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .init();

    log::info!("course data file: {}", config.data_file.display());
    let mut session = Session::new(config.data_file);

    if io::stdin().is_terminal() {
        let mut input = EditorInput::new()?;
        session.run(&mut input, &mut io::stdout())
    } else {
        let mut input = BufferedInput::new(io::stdin().lock(), io::stdout());
        session.run(&mut input, &mut io::stdout())
    }
}
