use clap::Args;
use pomofocus_core::{Action, Config, RenderLoop, Session, TaskStore, TimerEngine};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::input::{self, Input};
use crate::surface::TerminalSurface;

#[derive(Args)]
pub struct RunArgs {
    /// Start with an empty task list
    #[arg(long)]
    pub no_starter_tasks: bool,
}

pub fn run(args: RunArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    let result = rt.block_on(run_session(args, config));
    // A pending stdin read must not hold up process exit.
    rt.shutdown_background();
    result
}

async fn run_session(args: RunArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = if config.tasks.starter_tasks && !args.no_starter_tasks {
        TaskStore::with_starter_tasks()
    } else {
        TaskStore::new()
    };
    let mut session = Session::with_parts(TimerEngine::new(), tasks);
    let mut surface = TerminalSurface::stdout(config);

    eprintln!("type 'help' for commands, 'q' to quit");
    let (tx, rx) = mpsc::channel(16);
    let reader = tokio::spawn(read_actions(tx));

    RenderLoop::new().run(&mut session, &mut surface, rx).await?;
    reader.abort();

    surface.finish(&session.snapshot())?;
    Ok(())
}

/// Forward parsed stdin commands until EOF or `quit`.
async fn read_actions(tx: mpsc::Sender<Action>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "stdin read failed");
                break;
            }
        };
        match input::parse(&line) {
            Ok(None) => {}
            Ok(Some(Input::Action(action))) => {
                if tx.send(action).await.is_err() {
                    break;
                }
            }
            Ok(Some(Input::Help)) => eprintln!("{}", input::HELP),
            Ok(Some(Input::Quit)) => break,
            Err(e) => eprintln!("error: {e}"),
        }
    }
    debug!("input closed");
}
