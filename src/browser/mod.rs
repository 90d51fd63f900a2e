use std::io::Write;

use colored::Colorize;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::api::models::{Character, CharacterPage};
use crate::api::{ApiClient, ApiError};
use crate::output;
use crate::utils;

pub const DEFAULT_API_URL: &str = "https://rickandmortyapi.com/api";

#[derive(Clone, Debug)]
pub struct Options {
    pub api_url: String,
    pub name: String,
    pub status: String,
    pub species: String,
    pub timeout_seconds: usize,
    pub proxy: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            name: String::new(),
            status: String::new(),
            species: String::new(),
            timeout_seconds: 10,
            proxy: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("failed to setup HTTP client: {source}")]
    Client {
        #[source]
        source: ApiError,
    },

    #[error("failed to read command input: {source}")]
    Stdin {
        #[source]
        source: std::io::Error,
    },

    #[error("detail fetch failed: {source}")]
    Detail {
        #[source]
        source: ApiError,
    },
}

/// One line of user input, parsed. Unrecognized bare text is treated as a
/// name search, mirroring a search box that fires on every input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Status(String),
    Species(String),
    More,
    Open(usize),
    List,
    Help,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Option<Command> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (trimmed, ""),
        };
        match keyword.to_ascii_lowercase().as_str() {
            "search" => Some(Command::Search(rest.to_string())),
            "status" => Some(Command::Status(rest.to_string())),
            "species" => Some(Command::Species(rest.to_string())),
            "more" | "m" => Some(Command::More),
            "open" | "o" => rest.parse::<usize>().ok().map(Command::Open),
            "list" | "ls" => Some(Command::List),
            "help" | "h" | "?" => Some(Command::Help),
            "quit" | "q" | "exit" => Some(Command::Quit),
            _ => Some(Command::Search(trimmed.to_string())),
        }
    }
}

/// Interactive browsing session: the growing item list, the three search
/// filters, and the next-page cursor.
///
/// Cursor invariant: `next_page` is set only from a successful page fetch;
/// any list fetch failure clears it, halting pagination until the user
/// triggers a new search.
pub struct Session {
    client: ApiClient,
    options: Options,
    items: Vec<Character>,
    next_page: Option<String>,
}

impl Session {
    pub fn new(options: Options) -> Result<Self, BrowserError> {
        let client = ApiClient::new(options.timeout_seconds, options.proxy.as_deref())
            .map_err(|source| BrowserError::Client { source })?;
        Ok(Self {
            client,
            options,
            items: Vec::new(),
            next_page: None,
        })
    }

    pub fn items(&self) -> &[Character] {
        &self.items
    }

    pub fn next_page(&self) -> Option<&str> {
        self.next_page.as_deref()
    }

    /// The "load more visible" predicate.
    pub fn can_load_more(&self) -> bool {
        self.next_page.is_some()
    }

    /// Folds a fetched page into the session. Returns the index of the
    /// first newly appended item.
    pub fn apply_page(&mut self, page: CharacterPage, clear: bool) -> usize {
        if clear {
            self.items.clear();
        }
        let first = self.items.len();
        self.next_page = page.info.next;
        self.items.extend(page.results);
        first
    }

    /// A failed list fetch clears the cursor so no further loads are
    /// attempted. Already rendered items stay.
    pub fn apply_failure(&mut self) {
        self.next_page = None;
    }

    /// Fetches one page of results and renders the new entries. A clearing
    /// fetch drops the existing items before the request is issued, so a
    /// failed fresh search still leaves the list empty.
    pub async fn fetch_characters(&mut self, url: &str, clear: bool) {
        if clear {
            self.items.clear();
        }
        let pb = output::spinner("fetching characters");
        let outcome = self.client.get_page(url).await;
        pb.finish_and_clear();

        match outcome {
            Ok(page) => {
                let first = self.apply_page(page, false);
                for (i, character) in self.items.iter().enumerate().skip(first) {
                    println!("{}", output::format_list_entry(i + 1, character));
                }
            }
            Err(e) => {
                println!("{}", output::empty_state(&e).bold().yellow());
                self.apply_failure();
            }
        }

        if self.can_load_more() {
            println!(
                "{}",
                ":: more results available, type 'more' to load the next page"
                    .bold()
                    .white()
            );
        }
    }

    /// Builds the query URL from the current filters and runs a clearing
    /// fetch. Every filter change triggers an immediate request; there is
    /// no debouncing and no supersession of earlier responses.
    pub async fn search(&mut self) {
        let url = utils::build_search_url(
            &self.options.api_url,
            &self.options.name,
            &self.options.status,
            &self.options.species,
        );
        println!(":: Searched for :: {}", url);
        self.fetch_characters(&url, true).await;
    }

    /// Appends the next page without clearing the existing entries.
    pub async fn load_more(&mut self) {
        match self.next_page.clone() {
            Some(url) => {
                println!(":: Loading more characters ::");
                self.fetch_characters(&url, false).await;
            }
            None => println!(":: No further pages :: run a new search ::"),
        }
    }

    /// Issues exactly one detail fetch for the selected entry and renders
    /// the detail card. Failures on this path propagate out of the command
    /// loop unhandled.
    pub async fn open(&mut self, index: usize) -> Result<(), ApiError> {
        let character = match index.checked_sub(1).and_then(|i| self.items.get(i)) {
            Some(character) => character,
            None => {
                println!(":: No such entry :: {} ::", index);
                return Ok(());
            }
        };
        let url = character.url.clone();

        let pb = output::spinner("fetching character");
        let outcome = self.client.get_character(&url).await;
        pb.finish_and_clear();

        let detail = outcome?;
        println!(":: Opened :: {}", url);
        println!("{}", output::format_detail(&detail));
        Ok(())
    }

    fn print_help(&self) {
        println!("commands:");
        println!("  search <name>     search by name (bare text works too)");
        println!("  status <value>    set the status filter (alive, dead, unknown)");
        println!("  species <value>   set the species filter");
        println!("  more              load the next page of results");
        println!("  open <n>          show the detail card for entry n");
        println!("  list              reprint the current entries");
        println!("  quit              exit");
    }

    /// The event loop: an initial search with the configured filters, then
    /// one command per input line. Each fetch completes before the next
    /// command is read, so requests stay sequential.
    pub async fn run(&mut self) -> Result<(), BrowserError> {
        self.print_help();
        println!();
        self.search().await;

        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        loop {
            print!("{} ", "charview>".bold().blue());
            let _ = std::io::stdout().flush();

            let line = lines
                .next_line()
                .await
                .map_err(|source| BrowserError::Stdin { source })?;
            let line = match line {
                Some(line) => line,
                None => break,
            };

            match Command::parse(&line) {
                None => continue,
                Some(Command::Quit) => break,
                Some(Command::Help) => self.print_help(),
                Some(Command::List) => {
                    for (i, character) in self.items.iter().enumerate() {
                        println!("{}", output::format_list_entry(i + 1, character));
                    }
                }
                Some(Command::More) => self.load_more().await,
                Some(Command::Open(index)) => self
                    .open(index)
                    .await
                    .map_err(|source| BrowserError::Detail { source })?,
                Some(Command::Search(name)) => {
                    self.options.name = name;
                    self.search().await;
                }
                Some(Command::Status(status)) => {
                    self.options.status = status;
                    self.search().await;
                }
                Some(Command::Species(species)) => {
                    self.options.species = species;
                    self.search().await;
                }
            }
        }

        Ok(())
    }
}
