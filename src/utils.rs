use crate::lang::Lang;
use std::{
    env,
    path::{Path, PathBuf},
    process,
};
use tokio::io::AsyncWriteExt;

pub async fn write_snippet(lang: &Lang, path: &Path) -> anyhow::Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(lang.get_snippet().as_bytes()).await?;

    Ok(())
}

pub async fn temp_file(lang: &Lang) -> anyhow::Result<PathBuf> {
    let pid = process::id();

    let mut path = env::temp_dir();
    path.push(&format!("snipbox-{pid}.{}", lang.get_extension()));

    write_snippet(lang, &path).await?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn temp_file_writes_payload_verbatim() {
        let path = temp_file(&Lang::Javascript).await.unwrap();
        let written = tokio::fs::read_to_string(&path).await.unwrap();

        assert_eq!(written, Lang::Javascript.get_snippet());

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn write_snippet_targets_the_given_path() {
        let mut path = env::temp_dir();
        path.push(format!("snipbox-test-{}.py", process::id()));

        write_snippet(&Lang::Python, &path).await.unwrap();
        let written = tokio::fs::read_to_string(&path).await.unwrap();

        assert_eq!(written, crate::snippets::PYTHON);

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
