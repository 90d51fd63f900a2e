use clap::{error::ErrorKind, Parser};

use crate::browser::{self, Options, Session};
use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::output;

fn print_banner() {
    const BANNER: &str = r#"
       __                     _
  ____/ /_  ____ ______   __(_)__ _      __
 / ___/ __ \/ __ `/ ___| / / / _ \ | /| / /
/ /__/ / / / /_/ / /  | |/ / /  __/ |/ |/ /
\___/_/ /_/\__,_/_/   |___/_/\___/|__/|__/

       v0.1.0 - character catalog browser
    "#;
    print!("{}", BANNER);
    println!();
}

#[derive(Clone, Debug)]
struct RunConfig {
    api_url: String,
    name: String,
    status: String,
    species: String,
    timeout: usize,
    proxy: Option<String>,
    no_color: bool,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let no_color = if args.color {
        false
    } else {
        args.no_color || cfg.no_color.unwrap_or(false)
    };

    let api_url = args
        .api_url
        .or(cfg.api_url)
        .unwrap_or_else(|| browser::DEFAULT_API_URL.to_string());
    let name = args.name.or(cfg.name).unwrap_or_default();
    let status = args.status.or(cfg.status).unwrap_or_default();
    if !status.is_empty() {
        validation::validate_status_filter(&status).map_err(|e| format!("invalid status: {e}"))?;
    }
    let species = args.species.or(cfg.species).unwrap_or_default();

    let timeout = args.timeout.or(cfg.timeout).unwrap_or(10);
    if timeout == 0 {
        return Err("invalid timeout, expected positive integer".to_string());
    }

    let proxy = args.proxy.or(cfg.proxy).filter(|p| !p.trim().is_empty());

    Ok(RunConfig {
        api_url,
        name,
        status,
        species,
        timeout,
        proxy,
        no_color,
    })
}

async fn run_async(run: RunConfig) -> Result<(), String> {
    print_banner();
    output::print_kv("API", &run.api_url);
    output::print_kv("Timeout", &format!("{}s", run.timeout));
    if !run.name.is_empty() {
        output::print_kv("Name", &run.name);
    }
    if !run.status.is_empty() {
        output::print_kv("Status", &run.status);
    }
    if !run.species.is_empty() {
        output::print_kv("Species", &run.species);
    }
    println!();

    let options = Options {
        api_url: run.api_url,
        name: run.name,
        status: run.status,
        species: run.species,
        timeout_seconds: run.timeout,
        proxy: run.proxy,
    };

    let mut session = Session::new(options).map_err(|e| e.to_string())?;
    session.run().await.map_err(|e| e.to_string())
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{e}");
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    let user_config_path = args.config.clone().map(|p| config::expand_tilde(&p));
    let cfg = match user_config_path.as_ref() {
        Some(path) => config::load_config(path, false)?,
        None => match config::default_config_path() {
            Some(path) => {
                config::ensure_default_config_file(&path)?;
                config::load_config(&path, true)?
            }
            None => ConfigFile::default(),
        },
    };

    let run = build_run_config(args, cfg)?;

    if run.no_color {
        colored::control::set_override(false);
    }

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to build runtime: {e}"))?;

    rt.block_on(run_async(run))?;
    Ok(())
}
