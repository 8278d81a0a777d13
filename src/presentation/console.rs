// Console front end - Prints the view on change and reads operator commands
use crate::application::dashboard_service::Dashboard;
use crate::application::notifier::UserNotifier;
use crate::presentation::view::render;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ping,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "ping" | "p" => Some(Command::Ping),
            "quit" | "q" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Shows notifications inline on stdout, between view refreshes
pub struct ConsoleNotifier;

impl UserNotifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!(">>> {}", message);
    }
}

/// Runs until `quit` or Ctrl-C, then unmounts the dashboard.
/// End of stdin only stops command input.
pub async fn run_console(mut dashboard: Dashboard) -> anyhow::Result<()> {
    let mut updates = dashboard.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    // One listener for the whole loop so a signal between iterations is not lost
    let interrupted = tokio::signal::ctrl_c();
    tokio::pin!(interrupted);

    println!("{}\n", render(&updates.borrow_and_update()));

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                println!("{}\n", render(&updates.borrow_and_update()));
            }
            line = lines.next_line(), if stdin_open => match line? {
                Some(line) => match Command::parse(&line) {
                    Some(Command::Ping) => dashboard.ping(),
                    Some(Command::Quit) => break,
                    None if line.trim().is_empty() => {}
                    None => warn!("Unknown command {:?} (try `ping` or `quit`)", line.trim()),
                },
                None => {
                    info!("Stdin closed, press Ctrl-C to stop");
                    stdin_open = false;
                }
            },
            _ = &mut interrupted => {
                info!("Interrupted");
                break;
            }
        }
    }

    dashboard.unmount().await;
    Ok(())
}
