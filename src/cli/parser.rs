use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for clubadmin
#[derive(Parser)]
#[command(
    name = "clubadmin",
    version = env!("CARGO_PKG_VERSION"),
    about = "Administration client for the UCSB organizations and request-tracking backend",
    long_about = None
)]
pub struct Cli {
    /// Override the backend base URL (e.g. http://localhost:8080)
    #[arg(global = true, long = "server")]
    pub server: Option<String>,

    /// Run in test mode (configuration file is neither read nor written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
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

    /// Describe the entity types and their form fields
    Entities {
        /// Entity to describe (e.g. organizations, helprequests)
        entity: Option<String>,
    },

    /// Show the pages reachable by the current user
    Routes {
        /// Evaluate for a user holding these roles instead of the session user
        #[arg(long = "role", value_name = "ROLE")]
        roles: Vec<String>,
    },

    /// Show the logged-in user and system information
    Whoami,

    /// List all records of an entity type
    List {
        entity: String,

        /// Also write the list to --file in this format
        #[arg(long, value_enum, requires = "file")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE", requires = "format")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show one record
    Show { entity: String, key: String },

    /// Create a record
    Create {
        entity: String,

        /// Field assignment, repeatable (e.g. --set orgCode=SKY)
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,
    },

    /// Update a record; the key itself cannot be changed
    Edit {
        entity: String,
        key: String,

        #[arg(long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,
    },

    /// Delete a record
    Delete {
        entity: String,
        key: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Check field values against the form rules without contacting the backend
    Validate {
        entity: String,

        /// Validate as an edit of the record with this key
        #[arg(long = "key")]
        key: Option<String>,

        #[arg(long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,
    },
}
