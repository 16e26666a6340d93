use crate::chat::ChatOrchestrator;
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::persona::{Page, SidebarSettings};
use crate::session::Session;
use crate::ui::style as ui;
use anyhow::Result;
use dialoguer::Select;
use std::fmt::Write as _;
use strum::IntoEnumIterator;

enum MenuItem {
    Page(Page),
    Settings,
    Quit,
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let settings = cli.sidebar.apply(config.sidebar.clone());

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Persona => {
            println!("{}", settings.persona());
            Ok(())
        }
        Commands::Config => {
            print_config(&config, &settings, &ChatOrchestrator::from_config(&config));
            Ok(())
        }
        Commands::Chat { message } => {
            let mut session = Session::from_config(&config, settings)?;
            let chat = ChatOrchestrator::from_config(&config);
            match message {
                Some(message) => super::chat::run_once(&mut session, &chat, &message).await,
                None => super::chat::run(&mut session, &chat).await,
            }
        }
        Commands::Guess => {
            let mut session = Session::from_config(&config, settings)?;
            super::guess::run(&mut session)
        }
        Commands::Quiz => {
            let mut session = Session::from_config(&config, settings)?;
            super::quiz::run(&mut session)
        }
        Commands::Play => {
            let mut session = Session::from_config(&config, settings)?;
            let chat = ChatOrchestrator::from_config(&config);
            run_menu(&mut session, &chat).await
        }
    }
}

async fn run_menu(session: &mut Session, chat: &ChatOrchestrator) -> Result<()> {
    let mut items: Vec<MenuItem> = Page::iter().map(MenuItem::Page).collect();
    items.push(MenuItem::Settings);
    items.push(MenuItem::Quit);
    let labels: Vec<String> = items
        .iter()
        .map(|item| match item {
            MenuItem::Page(page) => page.to_string(),
            MenuItem::Settings => "Settings".to_string(),
            MenuItem::Quit => "Quit".to_string(),
        })
        .collect();

    println!("  {}", ui::header("🦆 Welcome to Mr. Quack's pond"));
    let mut selected = 0;
    loop {
        println!();
        selected = Select::new()
            .with_prompt("Go to:")
            .items(&labels)
            .default(selected)
            .interact()?;

        tracing::debug!(page = labels[selected].as_str(), "Menu selection");
        match &items[selected] {
            MenuItem::Page(Page::Chat) => super::chat::run(session, chat).await?,
            MenuItem::Page(Page::MiniGame) => super::guess::run(session)?,
            MenuItem::Page(Page::DuckQuiz) => super::quiz::run(session)?,
            MenuItem::Settings => super::settings::run(&mut session.settings)?,
            MenuItem::Quit => {
                println!("  {}", ui::dim("Quack! Bye 👋"));
                return Ok(());
            }
        }
    }
}

fn print_config(config: &Config, settings: &SidebarSettings, chat: &ChatOrchestrator) {
    print!("{}", render_config(config, settings, chat));
}

/// Effective configuration, with command-line sidebar overrides applied.
fn render_config(config: &Config, settings: &SidebarSettings, chat: &ChatOrchestrator) -> String {
    let quiz_file = config.games.quiz_file.as_ref().map_or_else(
        || ui::dim("(built-in duck quiz)"),
        |path| path.display().to_string(),
    );
    let mut out = String::new();
    let _ = writeln!(out, "{}", ui::header("Mr. Quack configuration"));
    let _ = writeln!(out, "  config file: {}", config.config_path.display());
    let _ = writeln!(out, "  provider:    {} ({})", chat.provider_name(), chat.model());
    let _ = writeln!(out, "  temperature: {}", config.temperature);
    let _ = writeln!(out, "  timeout:     {}s", config.chat.timeout_secs);
    let _ = writeln!(out, "  log level:   {}", config.log_level);
    let _ = writeln!(out, "  quiz file:   {quiz_file}");
    let _ = writeln!(out, "  persona:     {}", settings.persona());
    out
}
