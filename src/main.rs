use std::io::Write;

use clap::Parser;
use tokio::io::AsyncBufReadExt;

use triagem::app::{App, Panel};
use triagem::classify::{Classifier, Client};
use triagem::config;
use triagem::term::TermPanel;

#[derive(clap::Parser)]
struct Opts {
    /// Base URL of the classification API (overrides the API_BASE environment variable)
    #[clap(long)]
    api_base: Option<String>,

    /// Email body to classify
    #[clap(long)]
    text: Option<String>,

    /// Email file (.txt/.pdf/.eml) to classify; wins over --text
    #[clap(long)]
    file: Option<std::path::PathBuf>,

    /// Copy the suggested reply to the clipboard after a successful run
    #[clap(long)]
    copy: bool,

    /// Probe the API's /health endpoint and exit
    #[clap(long)]
    health: bool,
}

fn prompt() -> String {
    format!(
        "[t] texto  [a caminho] arquivo  [p] {}  [c] {}  [q] sair",
        triagem::app::PROCESS_LABEL,
        triagem::app::COPY_LABEL
    )
}

async fn run_interactive<C: Classifier, P: Panel>(
    app: &mut App<C, P>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    println!("{}", prompt());
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };
        let line = line.trim();

        if line == "q" {
            break;
        } else if line == "t" {
            println!("Cole o texto do email; termine com uma linha contendo apenas \".\"");
            let mut text = String::new();
            loop {
                let line = match lines.next_line().await? {
                    Some(line) => line,
                    None => break,
                };
                if line.trim() == "." {
                    break;
                }
                text.push_str(&line);
                text.push('\n');
            }
            app.set_text(text);
        } else if line == "a" || line.starts_with("a ") {
            let path = line[1..].trim();
            if path.is_empty() {
                app.set_file(None);
                println!("Arquivo removido.");
            } else {
                app.set_file(Some(path.into()));
            }
        } else if line == "p" || line.is_empty() {
            app.submit().await;
        } else if line == "c" {
            app.copy_reply().await;
        } else {
            println!("{}", prompt());
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::builder()
        .filter_module("triagem", log::LevelFilter::Info)
        .init();

    let opts = Opts::parse();

    let config = config::resolve_from_env(opts.api_base.as_deref());
    log::info!("API base: {}", config.api_base);

    let client = Client::new(&config.api_base);

    if opts.health {
        let status = client.health().await?;
        println!("API ok: {}", status);
        return Ok(());
    }

    let mut app = App::new(client, TermPanel::new());

    if opts.text.is_some() || opts.file.is_some() {
        if let Some(text) = opts.text {
            app.set_text(text);
        }
        app.set_file(opts.file);
        app.submit().await;
        if opts.copy && !app.panel().reply_text().is_empty() {
            app.copy_reply().await;
        }
        return Ok(());
    }

    run_interactive(&mut app).await
}
