//! # Taskive
//!
//! A terminal companion for personal work: break projects into tasks, check
//! them off during the day, and watch the work log build itself.
//!
//! ## Usage
//!
//! Run without arguments to launch the interactive UI:
//!
//! ```bash
//! taskive
//! # or explicitly, with a sample project preloaded
//! taskive ui --demo
//! ```
//!
//! The first run walks through a short onboarding (name, experience, job
//! title, daily hour target) and then lands on the dashboard.
//!
//! ## Key Bindings
//!
//! **Global**
//! *   `q`: Quit (during onboarding: `Ctrl-C`, or `Esc` on the first step)
//! *   `Tab`: Cycle Dashboard / Work Log / Profile
//!
//! **Dashboard**
//! *   `j`/`k`: Move selection
//! *   `Space`: Toggle the selected task
//! *   `a`: Create a new project (title, kind, description, due date,
//!     then one task per Enter — an empty line finishes)
//!
//! **Profile**
//! *   `n` / `e` / `o` / `h`: Edit name, experience, job, target hours
//!
//! ## Data
//!
//! Everything lives in memory for the current session only; quitting
//! discards it. There is no database and no network.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use taskive::tui::run_tui;

#[derive(Parser)]
#[command(name = "taskive")]
#[command(about = "Terminal project and task tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive UI
    Ui {
        /// Preload a sample project
        #[arg(long)]
        demo: bool,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let shell_enum = match shell.as_str() {
                "bash" => Shell::Bash,
                "zsh" => Shell::Zsh,
                "fish" => Shell::Fish,
                "powershell" => Shell::PowerShell,
                "elvish" => Shell::Elvish,
                _ => {
                    eprintln!("Unsupported shell: {}", shell);
                    return;
                }
            };
            let mut cmd = Cli::command();
            generate(shell_enum, &mut cmd, "taskive", &mut io::stdout());
        }
        Some(Commands::Ui { demo }) => {
            if let Err(e) = run_tui(demo) {
                eprintln!("Error running UI: {}", e);
            }
        }
        None => {
            if let Err(e) = run_tui(false) {
                eprintln!("Error running UI: {}", e);
            }
        }
    }
}
