//! Command-line front end for wordtext.
//!
//! Every FILE argument is uploaded in turn into one session, so the last
//! readable document is the one shown and exported.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use wordtext::{Cli, Completion, DocxExtractor, Session, SystemClipboard, logging};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let session = Session::new(cli.loader(), DocxExtractor::new(cli.layout()));
    let sources = cli.sources();
    let announce = sources.len() > 1 && !cli.is_quiet();
    let mut failed = false;

    for source in &sources {
        match session.upload(source).await {
            Ok(Completion::Applied) => {
                if announce {
                    eprintln!("  extracted: {}", source);
                }
            }
            Ok(Completion::Superseded) => {}
            Err(err) => {
                eprintln!("error: {}", err);
                failed = true;
            }
        }
    }

    // Snapshot the state so no lock is held while writing files.
    let (view, artifact, payload) = {
        let presenter = session.presenter();
        (
            presenter.render().to_string(),
            presenter.download(),
            presenter.clipboard_payload()?,
        )
    };

    if cli.shows_view() {
        println!("{}", view);
    }

    if cli.json {
        println!("{}", payload);
    }

    if let Some(path) = cli.save_path() {
        match artifact.save_as(&path).await {
            Ok(()) => {
                if !cli.is_very_quiet() {
                    eprintln!(
                        "  saved: {} ({} bytes, {})",
                        path.display(),
                        artifact.bytes.len(),
                        artifact.mime_type()
                    );
                }
            }
            Err(err) => {
                eprintln!("error: {}", err);
                failed = true;
            }
        }
    }

    if cli.copy {
        let result = session
            .presenter()
            .copy_to_clipboard(&mut SystemClipboard::new());
        match result {
            Ok(notice) => {
                if !cli.is_very_quiet() {
                    eprintln!("{}", notice);
                }
            }
            Err(err) => {
                eprintln!("error: {}", err);
                failed = true;
            }
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
