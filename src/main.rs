// std imports
use std::{
    io::{IsTerminal, stdin, stdout},
    process,
    sync::Arc,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};
use itertools::Itertools;

// local imports
use wf::{
    App, AppInfo, Options, SearchMode, Theme, Wordlist,
    appdirs::AppDirs,
    cli, config,
    error::*,
    output::OutputStream,
    settings::Settings,
    state::State,
    themecfg,
};

const WF_DEBUG_LOG: &str = "WF_DEBUG_LOG";
const WF_DEBUG_LOG_STYLE: &str = "WF_DEBUG_LOG_STYLE";

// ---

fn bootstrap() -> Result<(AppDirs, Settings)> {
    if std::env::var(WF_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(WF_DEBUG_LOG).write_style(WF_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }

    let app_dirs = config::app_dirs().ok_or(Error::AppDirs)?;
    let settings = Settings::load(&app_dirs)?;
    config::initialize(settings.clone());

    Ok((app_dirs, settings))
}

fn run() -> Result<()> {
    let (app_dirs, settings) = bootstrap()?;

    let opt = cli::Opt::parse_from(wild::args());

    let color_supported = if stdout().is_terminal() {
        if let Err(err) = wf::enable_ansi_support() {
            eprintln!("failed to enable ansi support: {}", err);
            false
        } else {
            true
        }
    } else {
        false
    };

    // Configure color scheme.
    let use_colors = match opt.color {
        cli::ColorOption::Auto => color_supported,
        cli::ColorOption::Always => true,
        cli::ColorOption::Never => false,
    };

    if opt.list_themes {
        return list_themes(&app_dirs);
    }

    // The theme selected with :theme in a previous session takes precedence
    // over the configured one, an explicit --theme option wins over both.
    let state = State::load(&app_dirs);
    let theme_name = opt.theme.or(state.theme).unwrap_or(settings.theme);

    let theme = if use_colors {
        Theme::load(&app_dirs, &theme_name)?
    } else {
        Theme::none()
    };

    let interactive = opt.pattern.is_none();

    // Configure the word corpus.
    let corpus = match opt.wordlist.or(settings.wordlist) {
        Some(path) if path.to_str() == Some("-") => {
            if interactive {
                return Err(Error::WordlistFromStdin);
            }
            Wordlist::from_reader(stdin().lock())?
        }
        Some(path) => match Wordlist::load(&path) {
            Ok(corpus) => {
                log::debug!("loaded {} words from {}", corpus.len(), path.display());
                corpus
            }
            Err(err) => {
                log::error!("failed to load word list {}: {}", path.display(), err);
                Wordlist::default()
            }
        },
        None => {
            log::error!("no word list configured, specify one with --wordlist or in the configuration file");
            Wordlist::default()
        }
    };

    let mode = if opt.contains {
        SearchMode::Contains
    } else {
        SearchMode::Pattern
    };

    // Create the app.
    let app = App::new(Options {
        theme: Arc::new(theme),
        theme_name,
        mode,
        use_colors,
        app_dirs,
        page: opt.page,
        all: opt.all,
        prompt: stdin().is_terminal(),
    });

    let mut output: OutputStream = Box::new(stdout());

    // Run the app.
    if let Some(pattern) = &opt.pattern {
        app.run_once(corpus, pattern, &mut output)
    } else {
        app.run_interactive(corpus, &mut stdin().lock(), &mut output)
    }
}

fn list_themes(app_dirs: &AppDirs) -> Result<()> {
    let items = themecfg::Theme::list(app_dirs)?
        .into_iter()
        .sorted_by_key(|(name, info)| (info.origin, name.clone()))
        .chunk_by(|(_, info)| info.origin);

    for (origin, group) in &items {
        println!("{}:", origin);
        for (name, _) in group {
            println!("  {}", name);
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        err.log(&AppInfo);
        process::exit(1);
    }
}
