use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storymaker_client_adapters::infrastructure::create_transport;
use storymaker_client_app::application::services::{
    AuthService, BookService, CharacterService, HealthService,
};
use storymaker_client_app::application::wizard::{BookWizard, SubmitOutcome};
use storymaker_client_app::application::Api;
use storymaker_client_ports::ApiConfig;
use storymaker_protocol::CreateCharacterRequest;

use crate::cli::{Cli, Command};

pub async fn run(cli: Cli) -> Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storymaker=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ApiConfig::from_env().context("Failed to load client configuration")?;
    let api = Api::new(create_transport(&config));
    tracing::debug!(transport = ?api.kind(), base_url = %config.base_url, "client ready");

    execute(cli.command, api).await
}

async fn execute(command: Command, api: Api) -> Result<()> {
    match command {
        Command::Health => {
            let health = HealthService::new(api)
                .health()
                .await
                .context("Health check failed")?;
            print_json(&health)
        }
        Command::Books => {
            let books = BookService::new(api)
                .list_books()
                .await
                .context("Failed to list books")?;
            print_json(&books.data)
        }
        Command::Book { id } => {
            let book = BookService::new(api)
                .get_book(&id)
                .await
                .with_context(|| format!("Failed to fetch book {id}"))?;
            print_json(&book.data)
        }
        Command::Characters => {
            let characters = CharacterService::new(api)
                .list_characters()
                .await
                .context("Failed to list characters")?;
            print_json(&characters.data)
        }
        Command::Character { id } => {
            let character = CharacterService::new(api)
                .get_character(&id)
                .await
                .with_context(|| format!("Failed to fetch character {id}"))?;
            print_json(&character.data)
        }
        Command::CreateCharacter {
            name,
            kind,
            description,
        } => {
            let request = CreateCharacterRequest {
                name,
                kind,
                description,
            };
            let created = CharacterService::new(api)
                .create_character(&request)
                .await
                .context("Failed to create character")?;
            print_json(&created.data)
        }
        Command::CreateBook {
            name,
            description,
            main,
            side,
        } => create_book(api, name, description, main, side).await,
        Command::Login { email, password } => {
            let session = AuthService::new(api)
                .login(&email, password.as_deref())
                .await
                .context("Login failed")?;
            print_json(&session.data)
        }
        Command::Me { token } => {
            let profile = AuthService::new(api)
                .me(&token)
                .await
                .context("Failed to fetch profile")?;
            print_json(&profile.data)
        }
    }
}

/// Drive the book wizard the way the studio page does.
async fn create_book(
    api: Api,
    name: String,
    description: String,
    main: String,
    side: Vec<String>,
) -> Result<()> {
    let mut wizard = BookWizard::new(api);
    wizard.subscribe(|snapshot| {
        tracing::debug!(
            step = %snapshot.step,
            saving = snapshot.saving,
            can_submit = snapshot.can_submit,
            "wizard state changed"
        );
    });

    wizard.activate().await;
    if let Some(error) = wizard.error() {
        bail!("Failed to load characters: {error}");
    }

    wizard.set_name(name);
    wizard.set_description(description);
    wizard.set_main_character(main);
    // Repeated ids must not toggle a pick back off.
    for id in side {
        if !wizard.draft().is_side_character(&id) {
            wizard.toggle_side_character(id);
        }
    }

    match wizard.submit().await {
        SubmitOutcome::Completed(book_id) => {
            print_json(&json!({ "book_id": book_id, "step": wizard.step().to_string() }))
        }
        SubmitOutcome::Blocked => bail!("A book needs a name and a main character"),
        SubmitOutcome::Failed(message) => bail!("Failed to create book: {message}"),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render output")?;
    println!("{rendered}");
    Ok(())
}

/// `.env.local` first so local overrides win; variables already set are kept.
fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
    dotenvy::dotenv().ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use storymaker_client_adapters::infrastructure::SimulatedTransport;

    fn simulated() -> (Api, SimulatedTransport) {
        let transport = SimulatedTransport::new();
        (Api::new(Arc::new(transport.clone())), transport)
    }

    #[tokio::test]
    async fn create_book_runs_the_wizard_to_completion() {
        let (api, transport) = simulated();
        create_book(
            api,
            "Dawn".into(),
            String::new(),
            "c1".into(),
            vec!["c2".into()],
        )
        .await
        .unwrap();

        let backend = transport.backend();
        let created = backend.books().last().unwrap();
        assert_eq!(created.name, "Dawn");
        assert_eq!(created.side_characters.len(), 1);
    }

    #[tokio::test]
    async fn repeated_side_id_is_kept_once() {
        let (api, transport) = simulated();
        create_book(
            api,
            "Dawn".into(),
            String::new(),
            "c1".into(),
            vec!["c2".into(), "c2".into()],
        )
        .await
        .unwrap();

        let backend = transport.backend();
        let created = backend.books().last().unwrap();
        assert_eq!(created.side_characters.len(), 1);
        assert_eq!(created.side_characters[0].id.as_str(), "c2");
    }

    #[tokio::test]
    async fn create_book_reports_the_backend_message() {
        let (api, _) = simulated();
        let err = create_book(api, "Dawn".into(), String::new(), "c404".into(), Vec::new())
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to create book: main_character: field required"
        );
    }

    #[tokio::test]
    async fn empty_name_is_blocked() {
        let (api, _) = simulated();
        let err = create_book(api, String::new(), String::new(), "c1".into(), Vec::new())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("needs a name"));
    }

    #[tokio::test]
    async fn lookups_surface_backend_errors_with_context() {
        let (api, _) = simulated();
        let err = execute(Command::Book { id: "zzz".into() }, api)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch book zzz");
        assert_eq!(err.root_cause().to_string(), "Book not found");
    }
}
