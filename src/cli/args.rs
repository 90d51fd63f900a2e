use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "charview",
    version,
    about = "interactive character catalog browser",
    long_about = "Charview is an interactive terminal browser for the Rick and Morty character catalog.\n\nExamples:\n  charview\n  charview -q rick -s alive\n  charview --species human --config ~/.charview/config.yml\n\nTip: Use --config to persist settings and keep CLI invocations short."
)]
pub struct CliArgs {
    #[arg(
        short = 'u',
        long = "api-url",
        value_name = "URL",
        help_heading = "Input",
        help = "Base catalog API URL."
    )]
    pub api_url: Option<String>,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.charview/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        short = 'q',
        long = "name",
        value_name = "NAME",
        help_heading = "Search",
        help = "Initial name filter (substring match)."
    )]
    pub name: Option<String>,

    #[arg(
        short = 's',
        long = "status",
        value_name = "STATUS",
        help_heading = "Search",
        help = "Initial status filter (alive, dead or unknown)."
    )]
    pub status: Option<String>,

    #[arg(
        short = 'e',
        long = "species",
        value_name = "SPECIES",
        help_heading = "Search",
        help = "Initial species filter."
    )]
    pub species: Option<String>,

    #[arg(
        short = 'T',
        long = "to",
        visible_alias = "timeout",
        value_name = "SECONDS",
        help_heading = "HTTP",
        help = "Per-request timeout in seconds."
    )]
    pub timeout: Option<usize>,

    #[arg(
        short = 'p',
        long = "px",
        visible_alias = "proxy",
        value_name = "URL",
        help_heading = "HTTP",
        help = "HTTP proxy URL (e.g. http://127.0.0.1:8080)."
    )]
    pub proxy: Option<String>,

    #[arg(
        short = 'c',
        long = "clr",
        visible_alias = "color",
        help_heading = "Output",
        help = "Enable colored output (overrides --no-color)."
    )]
    pub color: bool,

    #[arg(
        short = 'n',
        long = "nc",
        visible_alias = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,
}
