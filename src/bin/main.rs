use log::{debug, info};
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};
use vinculum::prelude::*;

fn main() -> rustyline::Result<()> {
    env_logger::init();

    let config = ReplConfig::from_env();
    info!("starting with {:?}", config);

    let editor_config = Config::builder()
        .max_history_size(config.history_size)?
        .auto_add_history(true)
        .build();
    let mut rl = DefaultEditor::with_config(editor_config)?;
    if let Some(path) = &config.history_file {
        if let Err(error) = rl.load_history(path) {
            debug!("no history loaded from {}: {}", path.display(), error);
        }
    }

    let mut dispatcher = Dispatcher::new(config);
    loop {
        let line = match rl.readline(">> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(error) => return Err(error),
        };

        match dispatcher.dispatch(&line) {
            DispatchResult::Success(Some(message)) => println!("{}", message),
            DispatchResult::Success(None) => {}
            DispatchResult::Failure(message) => eprintln!("error: {}", message),
            DispatchResult::Exit => break,
        }
    }

    if let Some(path) = &dispatcher.config().history_file {
        rl.save_history(path)?;
    }
    Ok(())
}
