use super::read_input;
use anyhow::Context;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use wordlist_core::books::{book_code, detect_book};
use wordlist_core::{build_concordance, Scope, ScriptureReference};

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

fn is_usfm(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("usfm") || ext.eq_ignore_ascii_case("sfm"))
        .unwrap_or(false)
}

/// `Ok(None)` when the file has no recognizable `\id` line.
fn build_one(path: &Path, out_dir: &Path) -> anyhow::Result<Option<PathBuf>> {
    let text = read_input(Some(path))?;
    let Some(book) = detect_book(&text) else {
        log::warn!("{}: no \\id line with a known book code, skipping", path.display());
        return Ok(None);
    };
    let point = ScriptureReference::new(book, 1, 1)?;
    let concordance = build_concordance(&text, point, Scope::Book)
        .with_context(|| format!("failed to build concordance for {}", path.display()))?;
    let code = book_code(book).unwrap_or("UNK");
    let out = out_dir.join(format!("{}.json", code));
    fs::write(&out, serde_json::to_vec(&concordance)?)
        .with_context(|| format!("failed to write {}", out.display()))?;
    log::info!("{} -> {} ({} words)", path.display(), out.display(), concordance.len());
    Ok(Some(out))
}

/// Build one book-scope concordance per USFM file under `dir`, in parallel.
/// Each file is an independent build; one failure does not stop the others.
pub fn run_batch(dir: &Path, out_dir: &Path) -> anyhow::Result<BatchSummary> {
    if !dir.is_dir() {
        anyhow::bail!("{} is not a directory", dir.display());
    }
    fs::create_dir_all(out_dir).with_context(|| format!("failed to create {}", out_dir.display()))?;

    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_usfm(e.path()))
        .map(|e| e.into_path())
        .collect();
    paths.sort();

    let results: Vec<(PathBuf, anyhow::Result<Option<PathBuf>>)> = paths
        .into_par_iter()
        .map(|p| {
            let r = build_one(&p, out_dir);
            (p, r)
        })
        .collect();

    let mut summary = BatchSummary::default();
    for (path, result) in results {
        match result {
            Ok(Some(out)) => summary.written.push(out),
            Ok(None) => summary.skipped.push(path),
            Err(e) => {
                log::error!("{:#}", e);
                summary.skipped.push(path);
            }
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordlist_core::Concordance;

    #[test]
    fn writes_one_json_per_book() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("nt")).unwrap();
        fs::write(src.join("01GEN.usfm"), "\\id GEN\n\\c 1\n\\v 1 In the beginning.").unwrap();
        fs::write(src.join("nt").join("43JHN.SFM"), "\\id JHN\n\\c 11\n\\v 1 Jesus wept.").unwrap();
        fs::write(src.join("notes.txt"), "\\id EXO\n\\c 1\n\\v 1 ignored").unwrap();
        fs::write(src.join("noid.usfm"), "\\c 1\n\\v 1 orphan").unwrap();
        let out = dir.path().join("out");

        let summary = run_batch(&src, &out).unwrap();
        assert_eq!(summary.written, vec![out.join("GEN.json"), out.join("JHN.json")]);
        assert_eq!(summary.skipped, vec![src.join("noid.usfm")]);

        let jhn: Concordance = serde_json::from_slice(&fs::read(out.join("JHN.json")).unwrap()).unwrap();
        let wept = jhn.get("wept").unwrap();
        // First \c segment is chapter 1 regardless of its numeral.
        assert_eq!(wept.locations, vec![ScriptureReference::new(43, 1, 1).unwrap()]);
        assert_eq!(wept.snippets, vec!["Jesus WEPT."]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run_batch(&dir.path().join("nope"), &dir.path().join("out")).is_err());
    }
}
