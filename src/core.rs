use crate::{cli::Command, lang::Lang, snippets, utils};
use std::path::PathBuf;

use colored::Colorize;

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Show { lang, raw } => {
            show(&lang, raw);
            Ok(())
        }
        Command::List { json } => {
            print!("{}", render_list(json)?);
            Ok(())
        }
        Command::Export { lang, out } => export(&lang, out).await,
    }
}

fn show(lang: &Lang, raw: bool) {
    let block = lang.get_block();

    // header goes to stderr so stdout stays byte-exact for piping
    if !raw {
        eprintln!(
            "{} {}",
            format!("[{}]", block.lang.get_tag()).cyan(),
            block.name.bold()
        );
    }

    print!("{}", block.body);
}

#[derive(Debug, serde::Serialize)]
struct Row {
    name: &'static str,
    lang: Lang,
    tag: &'static str,
    extension: &'static str,
}

fn rows() -> Vec<Row> {
    snippets::blocks()
        .into_iter()
        .map(|block| Row {
            name: block.name,
            lang: block.lang,
            tag: block.lang.get_tag(),
            extension: block.lang.get_extension(),
        })
        .collect()
}

fn render_list(json: bool) -> anyhow::Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(&rows())?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    for row in rows() {
        out.push_str(&format!(
            "{} {} (.{})\n",
            format!("[{}]", row.tag).cyan(),
            row.name.bold(),
            row.extension
        ));
    }

    Ok(out)
}

async fn export(lang: &Lang, out: Option<String>) -> anyhow::Result<()> {
    let path = match out {
        Some(raw) => {
            let path = PathBuf::from(shellexpand::tilde(&raw).into_owned());
            utils::write_snippet(lang, &path).await?;
            path
        }
        None => utils::temp_file(lang).await?,
    };

    eprintln!("Exported '{}' to {}", lang.get_name(), path.display());

    Ok(())
}
