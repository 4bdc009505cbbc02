use anyhow::anyhow;
use clap::{Args, Parser, Subcommand};
use portfolio_site::{
    cli::{
        db::{db_generate, db_list, db_migrate, db_revert},
        scene::preview,
        seed::seed_content,
    },
    core::{
        db::init_pool,
        security::{check_code, hash_admin_code},
    },
    scene::{generator::SceneOptions, ornament::DEFAULT_ORNAMENT_COUNT, surface::DEFAULT_SEGMENTS},
    settings::get_config,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database related command
    Db(DbArgs),
    /// Admin gate related command
    Admin(AdminArgs),
    /// Hero scene related command
    Scene(SceneArgs),
}

#[derive(Debug, Args)]
struct DbArgs {
    #[command(subcommand)]
    command: DbCommands,
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Generate new migration file
    Generate { migration_name: String },
    /// List all migration
    List,
    /// Run all pending migration
    Migrate,
    /// Revert latest migration
    Revert,
    /// Insert sample projects, about and contact content
    Seed,
}

#[derive(Debug, Args)]
struct AdminArgs {
    #[command(subcommand)]
    command: AdminCommands,
}

#[derive(Debug, Subcommand)]
enum AdminCommands {
    /// Check a code against the configured ADMIN_CODE
    CheckCode { code: String },
}

#[derive(Debug, Args)]
struct SceneArgs {
    #[command(subcommand)]
    command: SceneCommands,
}

#[derive(Debug, Subcommand)]
enum SceneCommands {
    /// Run the hero scene headless and print the final state as json
    Preview {
        #[arg(short, long, default_value_t = DEFAULT_ORNAMENT_COUNT)]
        count: usize,
        #[arg(short, long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_SEGMENTS)]
        segments: u32,
        #[arg(short, long, default_value_t = 60)]
        frames: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Db(db_args) => match &db_args.command {
            DbCommands::Generate { migration_name } => {
                println!("generate migration: {migration_name:?}");
                let _ = dotenvy::dotenv();
                db_generate(migration_name).await?;
            }
            DbCommands::List => {
                println!("list migration");
                let config = get_config()?;
                db_list(&config).await?;
            }
            DbCommands::Migrate => {
                println!("run all pending migration");
                let config = get_config()?;
                db_migrate(&config).await?;
            }
            DbCommands::Revert => {
                println!("revert latest migration");
                let config = get_config()?;
                db_revert(&config).await?;
            }
            DbCommands::Seed => {
                println!("seed sample content");
                let config = get_config()?;
                let pool = init_pool(&config).await?;
                let report = seed_content(&pool).await?;
                println!(
                    "inserted {} projects, about: {}, contact: {}",
                    report.projects, report.about, report.contact
                );
            }
        },
        Commands::Admin(admin_args) => match &admin_args.command {
            AdminCommands::CheckCode { code } => {
                let config = get_config()?;
                let hash = hash_admin_code(&config.admin_code).map_err(|err| anyhow!(err))?;
                if check_code(code, &hash)? {
                    println!("code accepted");
                } else {
                    println!("code rejected");
                }
            }
        },
        Commands::Scene(scene_args) => match &scene_args.command {
            SceneCommands::Preview {
                count,
                seed,
                segments,
                frames,
            } => {
                let options = SceneOptions {
                    ornament_count: *count,
                    surface_segments: *segments,
                    seed: *seed,
                };
                let result = preview(options, *frames)?;
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
        },
    }
    Ok(())
}
