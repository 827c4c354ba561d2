use {
    anyhow::{Result, bail},
    clap::Parser,
    setup_grader::{
        App, Cli, Command,
        app::{SendOutcome, render_overview, render_story_book},
        config::{DEFAULTS, GRADING},
        data::{StatePaths, write_export},
        models::{StoryUpdate, WorksheetUpdate},
    },
    std::panic,
};

fn init_log() {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Warn)
    };

    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some("setup_grader"), my_code_level)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    init_log();

    let args = Cli::parse();
    let paths = args
        .state_dir
        .as_ref()
        .map(StatePaths::in_dir)
        .unwrap_or_default();
    let mut app = App::load(paths, &DEFAULTS, GRADING);

    match args.command.unwrap_or(Command::Show) {
        Command::Show => {}
        Command::Set { field, value } => {
            let update = WorksheetUpdate::parse(&field, &value)?;
            app.update_worksheet(&update)?;
        }
        Command::Story {
            pair,
            anchor,
            story,
            correlation,
        } => {
            let update = StoryUpdate {
                anchor,
                story,
                correlation,
            };
            if update.is_empty() {
                bail!("Nothing to change: pass --anchor, --story and/or --correlation");
            }
            app.update_story(pair, &update)?;
            println!("{}", render_story_book(app.registry()));
            return Ok(());
        }
        Command::Stories => {
            println!("{}", render_story_book(app.registry()));
            return Ok(());
        }
        Command::Export { format, out } => {
            let path = write_export(&app.snapshot(), format, out.as_deref())?;
            println!("Exported {}", path.display());
            return Ok(());
        }
        Command::Send => {
            match app.send_to_journal().await? {
                SendOutcome::MissingEndpoint => println!(
                    "Add your journal webhook URL first: setup-grader set relay.url <URL>"
                ),
                SendOutcome::Sent => println!("Sent to journal"),
            }
            return Ok(());
        }
        Command::Reset { stories } => app.reset(&DEFAULTS, stories)?,
    }

    println!(
        "{}",
        render_overview(app.worksheet(), app.registry(), &app.grade())
    );
    Ok(())
}
