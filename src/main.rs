/// Replays a JSON event script against a picker and prints its notifications
#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use tinct::config::PickerConfig;
    use tinct::replay::{load_script, render_messages, replay};
    use tinct::{Picker, ReplayError};

    fn run(script: PathBuf, config: Option<PathBuf>) -> Result<String, ReplayError> {
        let config = match config {
            Some(path) => PickerConfig::load(&path)?,
            None => PickerConfig::new(),
        };

        env_logger::Builder::new()
            .filter_level(config.log_level.to_level_filter())
            .parse_default_env()
            .init();

        let events = load_script(&script)?;
        let mut picker = Picker::new(config);
        let messages = replay(&mut picker, events);
        render_messages(&messages)
    }

    let mut args = std::env::args_os().skip(1);
    let Some(script) = args.next().map(PathBuf::from) else {
        eprintln!("Usage: tinct-replay <events.json> [config.json]");
        return ExitCode::from(2);
    };
    let config = args.next().map(PathBuf::from);

    match run(script, config) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Replay error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// Hosts on wasm embed the library directly
#[cfg(target_arch = "wasm32")]
fn main() {}
