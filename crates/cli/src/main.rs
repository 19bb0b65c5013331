mod browser;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use campus_kernel::{settings::Settings, AppContext, InitCtx, ModuleRegistry};

/// Student and book records over HTTP
#[derive(Debug, Parser)]
#[command(name = "campus", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve(ServeArgs),
    /// Print the resolved settings as JSON and exit
    Settings,
}

#[derive(Debug, Default, Args)]
struct ServeArgs {
    /// Do not open the index page in a browser after startup
    #[arg(long)]
    no_browser: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load().with_context(|| "failed to load campus settings")?;

    match cli.command.unwrap_or(Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => serve(settings, args).await,
        Command::Settings => {
            let rendered = serde_json::to_string_pretty(&settings)
                .with_context(|| "failed to render settings")?;
            println!("{rendered}");
            Ok(())
        }
    }
}

async fn serve(settings: Settings, args: ServeArgs) -> anyhow::Result<()> {
    campus_telemetry::init(&settings.telemetry);

    tracing::info!(
        env = ?settings.environment,
        backend = ?settings.database.backend,
        db = %settings.database.name,
        "campus bootstrap starting"
    );

    let ctx = AppContext::connect(&settings.database)
        .await
        .with_context(|| "failed to open document store")?;

    let mut registry = ModuleRegistry::new();
    campus_app::register_all(&mut registry);

    registry
        .init_modules(&InitCtx {
            settings: &settings,
            app: &ctx,
        })
        .await?;

    if settings.browser.enabled && !args.no_browser {
        browser::open_after_delay(
            format!("http://localhost:{}", settings.server.port),
            settings.browser.delay_ms,
        );
    }

    tracing::info!("campus bootstrap complete");
    campus_http::start_server(&registry, &settings, ctx).await?;

    registry.stop_modules().await
}
