use super::{read_input, reference_point};
use crate::Selection;
use wordlist_core::{build_concordance, Concordance, Scope, ScriptureReference};

fn load(sel: &Selection) -> anyhow::Result<(Concordance, ScriptureReference, Scope)> {
    let text = read_input(sel.file.as_deref())?;
    let (point, scope) = reference_point(sel, &text)?;
    let concordance = build_concordance(&text, point, scope)?;
    log::info!("built {} words for {} scope at {}", concordance.len(), scope, point);
    Ok((concordance, point, scope))
}

pub(crate) fn build_envelope(
    concordance: &Concordance,
    point: ScriptureReference,
    scope: Scope,
    filter: Option<&str>,
) -> serde_json::Value {
    let results = concordance.filter(filter.unwrap_or(""));
    serde_json::json!({
        "count": results.len(),
        "totalWords": concordance.len(),
        "scope": scope,
        "reference": point,
        "results": results,
    })
}

pub(crate) fn build_table(concordance: &Concordance, filter: Option<&str>) -> String {
    let mut out = String::new();
    for e in concordance.filter(filter.unwrap_or("")) {
        let first = e.locations.first().map(|r| r.to_string()).unwrap_or_default();
        out.push_str(&format!("{}\t{}\t{}\n", e.word, e.count(), first));
    }
    out
}

pub fn build(sel: &Selection, filter: Option<&str>, json: bool) -> anyhow::Result<()> {
    let (concordance, point, scope) = load(sel)?;
    if json {
        let envelope = build_envelope(&concordance, point, scope, filter);
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        print!("{}", build_table(&concordance, filter));
    }
    Ok(())
}

pub fn cloud(sel: &Selection, json: bool) -> anyhow::Result<()> {
    let (concordance, _, _) = load(sel)?;
    let freqs = concordance.frequencies();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "count": freqs.len(),
                "totalOccurrences": concordance.total_occurrences(),
                "range": concordance.frequency_range(),
                "words": freqs,
            }))?
        );
    } else {
        for f in freqs {
            println!("{}\t{}", f.word, f.count);
        }
    }
    Ok(())
}
