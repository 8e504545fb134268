use clap::Parser;
use std::path::PathBuf;

use crate::docx::TextLayout;
use crate::export::DOWNLOAD_FILE_NAME;
use crate::loader::{Loader, Source};

#[derive(Parser, Debug)]
#[command(name = "wordtext")]
#[command(version)]
#[command(about = "Extract the text of Word documents, then save it or copy it as JSON", long_about = None)]
#[command(after_help = "Examples:\n  \
  wordtext report.docx                 print the text of report.docx\n  \
  wordtext -s -c report.docx           save contenido-extraido.txt and copy JSON to the clipboard\n  \
  wordtext -j https://example.com/a.docx   print the JSON record of a remote document\n  \
  wordtext old.docx new.docx --save=out.txt   later files replace earlier ones")]
pub struct Cli {
    /// Word documents (paths or HTTP URLs); each one replaces the previous text
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<String>,

    /// Save the text as a file (default name: contenido-extraido.txt)
    #[arg(short = 's', long = "save", value_name = "PATH", num_args = 0..=1, require_equals = true)]
    pub save: Option<Option<PathBuf>>,

    /// Directory for the default-named text file
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Copy {"doc_content": ...} JSON to the system clipboard
    #[arg(short = 'c', long = "copy")]
    pub copy: bool,

    /// Print the JSON record to stdout
    #[arg(short = 'j', long = "json")]
    pub json: bool,

    /// Separate paragraphs with newlines and keep tabs and line breaks
    #[arg(short = 'P', long = "paragraphs")]
    pub paragraphs: bool,

    /// Accept files that do not end in .docx
    #[arg(short = 'a', long = "any-extension")]
    pub any_extension: bool,

    /// Quiet mode (-qq => quieter)
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// More log output (-vv => trace)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn sources(&self) -> Vec<Source> {
        self.files.iter().map(|f| Source::parse(f)).collect()
    }

    pub fn loader(&self) -> Loader {
        if self.any_extension {
            Loader::new().accept_any_extension()
        } else {
            Loader::new()
        }
    }

    pub fn layout(&self) -> TextLayout {
        if self.paragraphs {
            TextLayout::Paragraphs
        } else {
            TextLayout::Flat
        }
    }

    /// Where `--save` writes, if it was given.
    pub fn save_path(&self) -> Option<PathBuf> {
        match &self.save {
            None => None,
            Some(Some(path)) => Some(path.clone()),
            Some(None) => Some(
                self.dir
                    .clone()
                    .unwrap_or_default()
                    .join(DOWNLOAD_FILE_NAME),
            ),
        }
    }

    /// Whether the rendered text goes to stdout.
    pub fn shows_view(&self) -> bool {
        self.quiet == 0 && !self.json
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet > 0
    }

    pub fn is_very_quiet(&self) -> bool {
        self.quiet > 1
    }
}
