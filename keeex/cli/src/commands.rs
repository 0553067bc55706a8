//! Subcommands, one per API operation.

use clap::{Args, Subcommand};
use keeex_lib::{
    EnvVar, KeeexClient, KeeexOptions, RefKind, SearchOptions, ShareOptions, VerifyOptions,
    WritableEnvVar,
};
use serde_json::Value;

use crate::CliError;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that the local API is reachable
    Hello,

    /// Ask the user to grant this application an API token and print it
    Token {
        /// Application name shown in the consent prompt
        #[arg(value_name = "APP_NAME", default_value = "keeex-cli")]
        app_name: String,
    },

    /// Fingerprint a file
    Keeex(KeeexArgs),

    /// Verify a file against registered fingerprints
    Verify {
        #[arg(value_name = "PATH")]
        path: String,

        /// Import the file into the local database when valid
        #[arg(long)]
        import: bool,
    },

    /// Show topics
    Topics {
        #[arg(value_name = "IDX", required = true)]
        idxs: Vec<String>,
    },

    /// Show known file locations of topics
    Locations {
        #[arg(value_name = "IDX", required = true)]
        idxs: Vec<String>,
    },

    /// Show the author of a topic
    Author {
        #[arg(value_name = "IDX")]
        idx: String,
    },

    /// List comments on a topic
    Comments {
        #[arg(value_name = "IDX")]
        idx: String,
    },

    /// Comment on a topic
    Comment {
        #[arg(value_name = "IDX")]
        idx: String,

        #[arg(value_name = "MESSAGE")]
        message: String,
    },

    /// List previous versions of a topic
    Prevs {
        #[arg(value_name = "IDX")]
        idx: String,
    },

    /// List next versions of a topic
    Nexts {
        #[arg(value_name = "IDX")]
        idx: String,
    },

    /// List topics referenced by a topic
    Refs {
        #[arg(value_name = "IDX")]
        idx: String,
    },

    /// Show who a topic was shared with
    Shared {
        #[arg(value_name = "IDX")]
        idx: String,
    },

    /// List users who agreed with a topic
    Agreements {
        #[arg(value_name = "IDX")]
        idx: String,
    },

    /// Share a topic's file with other users
    Share {
        #[arg(value_name = "IDX")]
        idx: String,

        #[arg(value_name = "PATH")]
        path: String,

        /// Profile idxs of the recipients
        #[arg(value_name = "RECIPIENT", required = true)]
        recipients: Vec<String>,

        /// Notify recipients by e-mail
        #[arg(long)]
        email: bool,
    },

    /// Link two topics (reference, version or agreement)
    MakeRef {
        #[arg(value_name = "KIND")]
        kind: RefKind,

        /// Source topic; omit for agreements
        #[arg(long, value_name = "IDX")]
        from: Option<String>,

        #[arg(value_name = "TO")]
        to: String,
    },

    /// Remove a topic
    Remove {
        #[arg(value_name = "IDX")]
        idx: String,
    },

    /// Show the current user's profile
    Me,

    /// Show user profiles
    Users {
        #[arg(value_name = "IDX", required = true)]
        idxs: Vec<String>,
    },

    /// Look a user up by e-mail address
    UserByEmail {
        #[arg(value_name = "EMAIL")]
        email: String,
    },

    /// Create an empty document
    GenerateFile {
        #[arg(value_name = "NAME")]
        name: String,

        /// Destination folder
        #[arg(value_name = "TARGET")]
        target: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Search topics
    Search(SearchArgs),

    /// Show the topic currently open in the application
    CurrentView,

    /// Read an application variable
    Env {
        /// DATA_PATH, KEEEX_PATH, KEEEXED_PATH, RECEIVED_PATH or FILENAME_FORMAT
        #[arg(value_name = "NAME")]
        name: EnvVar,
    },

    /// Write an application variable
    SetEnv {
        /// KEEEXED_PATH, RECEIVED_PATH or FILENAME_FORMAT
        #[arg(value_name = "NAME")]
        name: WritableEnvVar,

        #[arg(value_name = "VALUE")]
        value: String,
    },
}

#[derive(Debug, Args)]
pub struct KeeexArgs {
    #[arg(value_name = "PATH")]
    path: String,

    /// Referenced topic (repeatable)
    #[arg(long = "ref", value_name = "IDX")]
    refs: Vec<String>,

    /// Previous version (repeatable)
    #[arg(long = "prev", value_name = "IDX")]
    prevs: Vec<String>,

    #[arg(long)]
    name: Option<String>,

    #[arg(long, default_value = "")]
    description: String,

    /// Output folder [default: the application's folder]
    #[arg(long, value_name = "DIR")]
    target_folder: Option<String>,

    /// Request a blockchain timestamp
    #[arg(long)]
    timestamp: bool,

    /// Store the filename pattern in the metadata
    #[arg(long)]
    pattern: bool,

    /// Store the bitcoin signature in the metadata
    #[arg(long)]
    bitcoin: bool,
}

impl KeeexArgs {
    fn options(&self) -> KeeexOptions {
        KeeexOptions {
            name: self.name.clone(),
            target_folder: self.target_folder.clone(),
            timestamp: self.timestamp.then_some(true),
            pattern: self.pattern.then_some(true),
            bitcoin: self.bitcoin.then_some(true),
        }
    }
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to search for
    #[arg(value_name = "FILTER", default_value = "")]
    filter: String,

    /// Results must reference this topic (repeatable)
    #[arg(long = "topic", value_name = "IDX")]
    topics: Vec<String>,

    /// Results must not reference this topic (repeatable)
    #[arg(long = "not-topic", value_name = "IDX")]
    neg_topics: Vec<String>,

    #[arg(long, default_value_t = 0)]
    skip: u64,

    #[arg(long, default_value_t = 20)]
    limit: u64,

    #[arg(long)]
    document: bool,

    #[arg(long)]
    discussion: bool,

    #[arg(long)]
    comment: bool,

    #[arg(long)]
    agreed: bool,

    #[arg(long)]
    concept: bool,

    /// Include superseded versions
    #[arg(long)]
    older_version: bool,

    /// Match descriptions too
    #[arg(long)]
    description: bool,
}

impl SearchArgs {
    fn options(&self) -> SearchOptions {
        SearchOptions {
            document: self.document.then_some(true),
            discussion: self.discussion.then_some(true),
            comment: self.comment.then_some(true),
            agreed: self.agreed.then_some(true),
            concept: self.concept.then_some(true),
            older_version: self.older_version.then_some(true),
            description: self.description.then_some(true),
        }
    }
}

/// What a command printed: plain text or a JSON document.
#[derive(Debug)]
pub enum Output {
    Text(String),
    Json(Value),
}

fn json<T: serde::Serialize>(value: T) -> Result<Output, CliError> {
    Ok(Output::Json(serde_json::to_value(value)?))
}

/// Runs one command against `client`.
pub async fn run(client: &KeeexClient, command: Commands) -> Result<Output, CliError> {
    match command {
        Commands::Hello => Ok(Output::Text(client.hello().await?)),
        Commands::Token { app_name } => {
            let response = client.request_token(&app_name).await?;
            Ok(Output::Text(response.token.unwrap_or_default()))
        }
        Commands::Keeex(args) => json(
            client
                .keeex(
                    &args.path,
                    &args.refs,
                    &args.prevs,
                    &args.description,
                    &args.options(),
                )
                .await?,
        ),
        Commands::Verify { path, import } => {
            json(client.verify(&path, VerifyOptions { import }).await?)
        }
        Commands::Topics { idxs } => json(client.topics(&idxs).await?),
        Commands::Locations { idxs } => json(client.locations(&idxs).await?),
        Commands::Author { idx } => json(client.author(&idx).await?),
        Commands::Comments { idx } => json(client.comments(&idx).await?),
        Commands::Comment { idx, message } => json(client.comment(&idx, &message).await?),
        Commands::Prevs { idx } => json(client.prevs(&idx).await?),
        Commands::Nexts { idx } => json(client.nexts(&idx).await?),
        Commands::Refs { idx } => json(client.refs(&idx).await?),
        Commands::Shared { idx } => json(client.shared(&idx).await?),
        Commands::Agreements { idx } => json(client.agreements(&idx).await?),
        Commands::Share {
            idx,
            path,
            recipients,
            email,
        } => json(
            client
                .share(&idx, &path, &recipients, ShareOptions { email })
                .await?,
        ),
        Commands::MakeRef { kind, from, to } => {
            json(client.make_ref(kind, from.as_deref(), &to).await?)
        }
        Commands::Remove { idx } => json(client.remove(&idx).await?),
        Commands::Me => json(client.me().await?),
        Commands::Users { idxs } => json(client.users(&idxs).await?),
        Commands::UserByEmail { email } => json(client.user_by_email(&email).await?),
        Commands::GenerateFile {
            name,
            target,
            description,
        } => json(client.generate_file(&name, &description, &target).await?),
        Commands::Search(args) => json(
            client
                .search(
                    &args.filter,
                    &args.topics,
                    &args.neg_topics,
                    args.skip,
                    args.limit,
                    args.options(),
                )
                .await?,
        ),
        Commands::CurrentView => json(client.current_view().await?),
        Commands::Env { name } => json(client.env(name).await?),
        Commands::SetEnv { name, value } => json(client.set_env(name, &value).await?),
    }
}
