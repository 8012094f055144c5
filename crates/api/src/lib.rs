mod controller;
mod display;
mod error;
mod fetch_times;
mod scheduler;
mod shared;
#[cfg(test)]
mod test_helpers;

pub use controller::Controller;
pub use error::MawaqitError;
pub use scheduler::ScheduledNotification;

use std::io::Write;

use mawaqit_infra::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

/// Options resolved from the command line.
#[derive(Debug, Default, Clone)]
pub struct AppOptions {
    pub city: Option<String>,
    pub country: Option<String>,
    pub locate: bool,
    pub notify: bool,
    pub once: bool,
}

#[derive(Debug, PartialEq)]
enum Command {
    Search(String, String),
    Locate,
    Notify,
    Refresh,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    let (cmd, rest) = match line.find(' ') {
        Some(idx) => (&line[..idx], line[idx + 1..].trim()),
        None => (line, ""),
    };
    match cmd {
        "search" => {
            // `search <city>, <country>`; a missing country falls through to
            // the controller's validation
            let (city, country) = match rest.find(',') {
                Some(idx) => (&rest[..idx], &rest[idx + 1..]),
                None => (rest, ""),
            };
            Command::Search(city.trim().to_string(), country.trim().to_string())
        }
        "locate" => Command::Locate,
        "notify" => Command::Notify,
        "refresh" => Command::Refresh,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

/// The interactive terminal application. One fetch up front, then commands
/// from stdin until the user quits; everything runs on the single event loop.
pub struct Application {
    controller: Controller,
    options: AppOptions,
}

impl Application {
    pub fn new(context: Context, options: AppOptions) -> Self {
        Self {
            controller: Controller::new(context),
            options,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        // Initial fetch precedence: explicit search fields, then
        // geolocation, then the configured default.
        let city = self.options.city.clone().unwrap_or_default();
        let country = self.options.country.clone().unwrap_or_default();
        if !city.is_empty() || !country.is_empty() {
            self.controller.search(&city, &country).await;
        } else if self.options.locate {
            self.controller.locate().await;
        } else {
            self.controller.fetch_default().await;
        }

        if self.options.notify {
            self.controller.enable_notifications().await;
        }
        display::render(&self.controller);

        if self.options.once {
            // Stay resident just long enough for a pending alert to fire
            if let Some(pending) = self.controller.take_pending() {
                println!(
                    "  Waiting for the {} alert before exiting (Ctrl-C to stop)...",
                    pending.prayer
                );
                pending.wait().await;
            }
            return Ok(());
        }

        println!("  Commands: search <city>, <country> | locate | notify | refresh | quit");
        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();
        loop {
            print!("> ");
            std::io::stdout().flush()?;
            let line = match lines.next_line().await? {
                Some(line) => line,
                None => break,
            };
            debug!("command: {}", line);
            match parse_command(&line) {
                Command::Search(city, country) => self.controller.search(&city, &country).await,
                Command::Locate => self.controller.locate().await,
                Command::Notify => self.controller.enable_notifications().await,
                Command::Refresh => self.controller.refresh().await,
                Command::Help => {
                    println!(
                        "  Commands: search <city>, <country> | locate | notify | refresh | quit"
                    );
                    continue;
                }
                Command::Quit => break,
                Command::Empty => continue,
                Command::Unknown(cmd) => {
                    println!("  Unknown command: {}. Try `help`.", cmd);
                    continue;
                }
            }
            display::render(&self.controller);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_search_with_city_and_country() {
        assert_eq!(
            parse_command("search London, UK"),
            Command::Search("London".into(), "UK".into())
        );
        assert_eq!(
            parse_command("search  New York ,  United States "),
            Command::Search("New York".into(), "United States".into())
        );
    }

    #[test]
    fn search_without_a_country_keeps_the_field_empty() {
        assert_eq!(
            parse_command("search London"),
            Command::Search("London".into(), String::new())
        );
    }

    #[test]
    fn parses_the_plain_commands() {
        assert_eq!(parse_command("locate"), Command::Locate);
        assert_eq!(parse_command("notify"), Command::Notify);
        assert_eq!(parse_command("refresh"), Command::Refresh);
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("exit"), Command::Quit);
        assert_eq!(parse_command("  "), Command::Empty);
        assert_eq!(parse_command("pray"), Command::Unknown("pray".into()));
    }
}
