use clap::Parser;
use echonotes::api::RemoteNoteClient;
use echonotes::cli::{
    run_add, run_categorize, run_delete, run_edit, run_key_points, run_list, run_menu, run_search,
    run_show, run_summarize, Cli, Commands,
};
use echonotes::config::ApiConfig;
use echonotes::NoteStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = ApiConfig::load();
    let client = RemoteNoteClient::new(&config.effective_base_url(), config.effective_timeout())?;
    let mut store = NoteStore::new(Box::new(client));

    match cli.command {
        None => {
            // No subcommand provided - show interactive menu
            run_menu(&mut store).await?;
        }
        Some(Commands::List) => {
            run_list(&mut store).await?;
        }
        Some(Commands::Search(args)) => {
            run_search(&mut store, &args.query).await?;
        }
        Some(Commands::Show(args)) => {
            run_show(&mut store, args.id).await?;
        }
        Some(Commands::Add(args)) => {
            run_add(
                &mut store,
                args.title,
                args.content,
                args.summary,
                args.category,
                args.no_ai,
            )
            .await?;
        }
        Some(Commands::Edit(args)) => {
            run_edit(&mut store, args.id).await?;
        }
        Some(Commands::Delete(args)) => {
            run_delete(&mut store, args.id, args.force).await?;
        }
        Some(Commands::Summarize(args)) => {
            run_summarize(&mut store, args.id).await?;
        }
        Some(Commands::Categorize(args)) => {
            run_categorize(&mut store, args.id).await?;
        }
        Some(Commands::KeyPoints(args)) => {
            run_key_points(&store, args.id).await?;
        }
    }

    Ok(())
}
