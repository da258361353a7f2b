// std imports
use std::{
    borrow::Cow,
    io::{BufRead, Write},
    num::NonZeroUsize,
    sync::Arc,
};

// workspace imports
use wordmask::has_wildcards;

// local imports
use crate::{
    appdirs::AppDirs,
    error::{AppInfoProvider, Error, Result, UsageRequest, UsageResponse},
    paging::{PageView, ResultView},
    render::Renderer,
    search::{self, SearchMode},
    state::State,
    theme::Theme,
    themecfg,
    wordlist::Wordlist,
};

// ---

pub struct Options {
    pub theme: Arc<Theme>,
    pub theme_name: String,
    pub mode: SearchMode,
    pub use_colors: bool,
    pub app_dirs: AppDirs,
    pub page: Option<NonZeroUsize>,
    pub all: bool,
    pub prompt: bool,
}

pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Runs a single search and renders its outcome.
    pub fn run_once(&self, corpus: Wordlist, query: &str, output: &mut impl Write) -> Result<()> {
        let renderer = Renderer::new(self.options.theme.clone(), false);
        let mut session = Session::new(corpus, self.options.mode);

        let status = match session.search(query) {
            Reply::Status(status) => Some(status),
            Reply::Results { .. } => None,
        };

        if let Some(status) = status {
            emit(&renderer, &Reply::Status(status), output)?;
        } else if self.options.all {
            if let Some(reply) = session.all() {
                emit(&renderer, &reply, output)?;
            }
        } else {
            if let Some(page) = self.options.page {
                session.goto_page(page.get())?;
            }
            if let Some(reply) = session.current() {
                emit(&renderer, &reply, output)?;
            }
        }

        Ok(())
    }

    /// Runs a line-oriented session until end of input or a quit command.
    pub fn run_interactive(
        &self,
        corpus: Wordlist,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<()> {
        let mut renderer = Renderer::new(self.options.theme.clone(), true);
        let mut session = Session::new(corpus, self.options.mode);
        let mut theme_name = self.options.theme_name.clone();

        let mut line = String::new();
        loop {
            if self.options.prompt {
                let mut buf = Vec::new();
                renderer.prompt(&mut buf);
                output.write_all(&buf)?;
                output.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let text = line.trim_end_matches(['\r', '\n']);

            match Command::parse(text) {
                Command::Quit => break,
                Command::Search(query) => {
                    let reply = session.search(query);
                    emit(&renderer, &reply, output)?;
                }
                Command::Next => {
                    let reply = session.next_page();
                    emit(&renderer, &reply, output)?;
                }
                Command::Prev => {
                    let reply = session.prev_page();
                    emit(&renderer, &reply, output)?;
                }
                Command::Mode(None) => {
                    let reply = Reply::Status(format!("Search mode: {}.", session.mode()).into());
                    emit(&renderer, &reply, output)?;
                }
                Command::Mode(Some(name)) => {
                    let reply = match name.parse::<SearchMode>() {
                        Ok(mode) => {
                            session.set_mode(mode);
                            Reply::Status(format!("Search mode: {}.", mode).into())
                        }
                        Err(_) => Reply::Status(
                            format!("Unknown mode {:?}, use \"pattern\" or \"contains\".", name)
                                .into(),
                        ),
                    };
                    emit(&renderer, &reply, output)?;
                }
                Command::Theme(arg) => {
                    if let Some(reply) = self.switch_theme(&mut renderer, &mut theme_name, arg) {
                        emit(&renderer, &reply, output)?;
                    }
                }
                Command::Help => {
                    emit(&renderer, &Reply::Status(HELP.into()), output)?;
                }
                Command::Unknown(name) => {
                    let reply = Reply::Status(
                        format!("Unknown command \":{}\", use :help to list commands.", name)
                            .into(),
                    );
                    emit(&renderer, &reply, output)?;
                }
            }
        }

        Ok(())
    }

    /// Switches the theme and persists the selection.
    ///
    /// Without an explicit name, toggles between light and dark. On failure
    /// the error is reported to stderr and the session continues unchanged.
    fn switch_theme(
        &self,
        renderer: &mut Renderer,
        theme_name: &mut String,
        arg: Option<&str>,
    ) -> Option<Reply<'static>> {
        let name = match arg {
            Some(name) => name.to_string(),
            None if theme_name == "light" => "dark".to_string(),
            None => "light".to_string(),
        };
        match themecfg::Theme::load(&self.options.app_dirs, &name) {
            Ok(cfg) => {
                if self.options.use_colors {
                    renderer.set_theme(Arc::new(Theme::from(&cfg)));
                }
                *theme_name = name.clone();
                let state = State {
                    theme: Some(name.clone()),
                };
                if let Err(e) = state.save(&self.options.app_dirs) {
                    log::warn!("failed to persist theme selection: {}", e);
                }
                Some(Reply::Status(format!("Theme: {}.", name).into()))
            }
            Err(e) => {
                Error::from(e).log(&AppInfo);
                None
            }
        }
    }
}

// ---

/// Provides usage tips for error reporting.
pub struct AppInfo;

impl AppInfoProvider for AppInfo {
    fn usage_suggestion(&self, request: UsageRequest) -> Option<UsageResponse> {
        match request {
            UsageRequest::ListThemes => Some(("--list-themes".into(), "".into())),
        }
    }
}

// ---

/// Search session over a fixed corpus.
///
/// Holds the active result view between inputs so page navigation can be
/// replayed against it. Every search replaces the previous results.
pub struct Session {
    corpus: Wordlist,
    mode: SearchMode,
    header: String,
    view: Option<ResultView<Arc<str>>>,
}

impl Session {
    pub fn new(corpus: Wordlist, mode: SearchMode) -> Self {
        Self {
            corpus,
            mode,
            header: String::new(),
            view: None,
        }
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
    }

    /// Runs one search over the corpus, replacing any previous results.
    pub fn search(&mut self, input: &str) -> Reply<'_> {
        self.view = None;
        let query = input.to_lowercase();
        if query.is_empty() {
            return Reply::Status("Please enter a word pattern.".into());
        }
        if self.mode == SearchMode::Pattern && !has_wildcards(&query) {
            return Reply::Status(
                "In pattern mode, please use underscores (_) or asterisks (*).".into(),
            );
        }

        let mut matches = search::find(&self.corpus, &query, self.mode);
        if matches.is_empty() {
            return Reply::Status("No matching words found.".into());
        }
        matches.sort_unstable();

        self.header = match self.mode {
            SearchMode::Contains => {
                format!("Found {} words containing \"{}\":", matches.len(), query)
            }
            SearchMode::Pattern => format!("Found {} matching words:", matches.len()),
        };
        let view = self.view.insert(ResultView::new(matches));
        Reply::Results {
            header: &self.header,
            page: view.page(),
        }
    }

    /// Re-emits the active results block, if any.
    pub fn current(&self) -> Option<Reply<'_>> {
        let view = self.view.as_ref()?;
        Some(Reply::Results {
            header: &self.header,
            page: view.page(),
        })
    }

    /// Returns the whole result list as a single page.
    pub fn all(&self) -> Option<Reply<'_>> {
        let view = self.view.as_ref()?;
        Some(Reply::Results {
            header: &self.header,
            page: PageView {
                items: view.items(),
                index: 1,
                total: 1,
                has_prev: false,
                has_next: false,
            },
        })
    }

    pub fn next_page(&mut self) -> Reply<'_> {
        let Some(view) = &mut self.view else {
            return Reply::Status("No active search results.".into());
        };
        view.next();
        Reply::Results {
            header: &self.header,
            page: view.page(),
        }
    }

    pub fn prev_page(&mut self) -> Reply<'_> {
        let Some(view) = &mut self.view else {
            return Reply::Status("No active search results.".into());
        };
        view.prev();
        Reply::Results {
            header: &self.header,
            page: view.page(),
        }
    }

    pub fn goto_page(&mut self, page: usize) -> Result<()> {
        let Some(view) = &mut self.view else {
            return Ok(());
        };
        if !view.goto(page) {
            return Err(Error::PageOutOfRange {
                page,
                total: view.page().total,
            });
        }
        Ok(())
    }
}

// ---

/// Render instruction produced by the session in response to one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<'a> {
    Status(Cow<'static, str>),
    Results {
        header: &'a str,
        page: PageView<'a, Arc<str>>,
    },
}

// ---

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Search(&'a str),
    Next,
    Prev,
    Mode(Option<&'a str>),
    Theme(Option<&'a str>),
    Help,
    Quit,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let Some(rest) = line.strip_prefix(':') else {
            return Self::Search(line);
        };
        let mut parts = rest.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default();
        let arg = parts.next().map(|arg| arg.trim()).filter(|arg| !arg.is_empty());
        match name {
            "n" | "next" => Self::Next,
            "p" | "prev" => Self::Prev,
            "mode" => Self::Mode(arg),
            "theme" => Self::Theme(arg),
            "help" => Self::Help,
            "q" | "quit" => Self::Quit,
            _ => Self::Unknown(name),
        }
    }
}

// ---

const HELP: &str = "\
Commands:
  :n, :next      show the next page of results
  :p, :prev      show the previous page of results
  :mode [NAME]   show or set the search mode (pattern or contains)
  :theme [NAME]  toggle between light and dark or select a theme by name
  :help          show this message
  :q, :quit      exit";

fn emit(renderer: &Renderer, reply: &Reply, output: &mut impl Write) -> Result<()> {
    let mut buf = Vec::new();
    renderer.render(&mut buf, reply);
    output.write_all(&buf)?;
    Ok(())
}

// ---
