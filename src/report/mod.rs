pub mod bundle;
pub mod card;
pub mod page;
pub mod section;
pub mod theme;

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use maud::html;

use crate::config::AppConfig;
use crate::model::risk::{classify, RiskCategory};
use crate::model::work_item::WorkItem;
use theme::Theme;

pub const COMBINED_FILE_NAME: &str = "roadmap_geral.html";

/// Everything the renderer needs besides the items themselves. Built once per run.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub today: NaiveDate,
    pub due_soon_days: i64,
    pub title: String,
    pub tailwind_cdn: String,
    pub theme: Theme,
}

impl RenderContext {
    pub fn new(config: &AppConfig, today: NaiveDate) -> Self {
        Self {
            today,
            due_soon_days: config.due_soon_days(),
            title: config.title(),
            tailwind_cdn: config.tailwind_cdn(),
            theme: Theme::from_config(config.theme.as_ref()),
        }
    }

    pub fn risk(&self, item: &WorkItem) -> RiskCategory {
        classify(item, self.today, self.due_soon_days)
    }

    #[cfg(test)]
    pub fn for_tests(today: NaiveDate) -> Self {
        Self::new(&AppConfig::default(), today)
    }
}

/// A rendered HTML page and the name it is stored under.
#[derive(Debug, Clone)]
pub struct ReportFile {
    pub name: String,
    pub html: String,
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    }
}

/// Case- and accent-insensitive ordering key, so `Évora` sorts next to `Evora`.
pub fn issuer_sort_key(issuer: &str) -> String {
    issuer
        .chars()
        .flat_map(char::to_lowercase)
        .map(fold_accent)
        .collect()
}

/// Items per issuer, issuers in alphabetical order, input order kept within each.
pub fn group_by_issuer(items: &[WorkItem]) -> Vec<(&str, Vec<&WorkItem>)> {
    let mut groups: BTreeMap<&str, Vec<&WorkItem>> = BTreeMap::new();
    for item in items {
        groups.entry(item.issuer.as_str()).or_default().push(item);
    }
    let mut groups: Vec<_> = groups.into_iter().collect();
    groups.sort_by_cached_key(|(issuer, _)| (issuer_sort_key(issuer), issuer.to_string()));
    groups
}

/// File name for an issuer's report. Anything outside alphanumerics, `-` and `_`
/// becomes `_` so the name is safe inside an archive and on disk.
pub fn issuer_file_name(issuer: &str) -> String {
    let safe: String = issuer
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("roadmap_{safe}.html")
}

/// Claim `name`, or the first free `_2`, `_3`, ... variant of it.
fn claim_name(name: String, used: &mut HashSet<String>) -> String {
    if used.insert(name.clone()) {
        return name;
    }
    let stem = name.trim_end_matches(".html");
    let mut n = 2;
    loop {
        let candidate = format!("{stem}_{n}.html");
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

/// The combined report first, then one report per issuer. File names are unique
/// within the returned set.
pub fn build_reports(items: &[WorkItem], ctx: &RenderContext) -> Vec<ReportFile> {
    let groups = group_by_issuer(items);
    let mut files = Vec::with_capacity(groups.len() + 1);
    let mut used = HashSet::from([COMBINED_FILE_NAME.to_string()]);

    let combined = html! {
        @for (issuer, group) in &groups {
            (page::issuer_content(issuer, group, ctx))
        }
    };
    files.push(ReportFile {
        name: COMBINED_FILE_NAME.to_string(),
        html: page::page(&format!("{} Geral", ctx.title), combined, ctx),
    });

    for (issuer, group) in &groups {
        let body = page::issuer_content(issuer, group, ctx);
        let name = claim_name(issuer_file_name(issuer), &mut used);
        if name != issuer_file_name(issuer) {
            log::warn!("issuer {issuer:?} written as {name} to avoid a file name clash");
        }
        files.push(ReportFile {
            name,
            html: page::page(&format!("{} - {issuer}", ctx.title), body, ctx),
        });
    }

    log::debug!("rendered {} report file(s)", files.len());
    files
}
