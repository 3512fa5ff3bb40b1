use crate::models::project::TaskStatus;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rattendance
/// CLI client to clock in/out and track breaks against the HR backend
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance client: clock in/out, track breaks and review your working hours",
    long_about = None
)]
pub struct Cli {
    /// Override the backend URL from the configuration
    #[arg(global = true, long = "base-url")]
    pub base_url: Option<String>,

    /// Override the session file (useful for tests or multiple accounts)
    #[arg(global = true, long = "session")]
    pub session: Option<String>,

    /// Use this bearer token for this run only
    #[arg(global = true, long = "token")]
    pub token: Option<String>,

    /// Run in test mode (no config file or activity log writes)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration directory and file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Start a session (with credentials, or by importing a token via --token)
    Login {
        #[arg(long, requires = "password")]
        email: Option<String>,

        #[arg(long, requires = "email")]
        password: Option<String>,
    },

    /// End the current session
    Logout,

    /// Show the user id carried by the current token
    Whoami,

    /// Show today's attendance panel
    Status,

    /// Clock in for today
    #[command(alias = "clockin")]
    Checkin,

    /// Clock out for today
    #[command(alias = "clockout")]
    Checkout,

    /// Start today's break
    #[command(name = "break-start", alias = "breakin")]
    BreakStart,

    /// End today's break
    #[command(name = "break-end", alias = "breakout")]
    BreakEnd,

    /// Show the attendance history
    History {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM              → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD           → specific day (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same formats, e.g. "2025-06-01:2025-06-10".
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// List notifications, or mark one read / delete it
    Notifications {
        #[arg(long = "read", value_name = "ID", help = "Mark a notification as read")]
        read: Option<String>,

        #[arg(
            long = "delete",
            value_name = "ID",
            conflicts_with = "read",
            help = "Delete a notification"
        )]
        delete: Option<String>,
    },

    /// List your projects, a project's tasks, or update a task's status
    Projects {
        #[arg(
            long,
            short,
            help = "Filter projects by status (all, in-progress, on-hold, completed)"
        )]
        status: Option<String>,

        #[arg(long = "tasks", value_name = "PROJECT_ID", help = "List the tasks of a project")]
        tasks: Option<String>,

        #[arg(
            long = "set-status",
            value_name = "TASK_ID",
            requires = "to",
            help = "Update the status of a task"
        )]
        set_status: Option<String>,

        #[arg(long, value_enum, requires = "set_status", help = "New task status")]
        to: Option<TaskStatus>,
    },

    /// Show your performance summary, optionally with leaves and payroll
    Performance {
        #[arg(long, help = "Also list leave requests")]
        leaves: bool,

        #[arg(long, help = "Also list payroll records")]
        payroll: bool,
    },

    /// Print the local activity log
    Log {
        #[arg(long = "print", help = "Print the local activity log")]
        print: bool,
    },
}
