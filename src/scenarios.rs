//! End-to-end checks: CSV text in, rendered archive out.

use std::io::{Cursor, Read};

use chrono::NaiveDate;
use zip::ZipArchive;

use crate::loader::load_from_reader;
use crate::model::risk::RiskCategory;
use crate::report::section::group_by_month;
use crate::report::{build_reports, bundle, RenderContext};

const CSV: &str = "\
Emissor,Chave,Resumo,Tipo de Item,Conta de Esforço,Status,Data limite,Data real
Acme,A-1,Nova tela de login,Story,Evolução,Em andamento,2025-01-05,
Acme,A-2,Corrigir relatório,Bug,Sustentação,Concluído,2024-01-01,2024-01-02
Acme,,Linha sem chave NO-KEY,Task,SETUP,BACKLOG,2025-01-10,
Beta,B-1,Migrar banco,Epic,SETUP,BACKLOG,,
Beta,B-2,Revisar contrato,Task,Sustentação,Concluido,,2024-12-20
";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn read_entry(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
    let mut html = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut html)
        .unwrap();
    html
}

#[test]
fn in_progress_item_is_due_soon_in_january_bucket() {
    let items = load_from_reader(CSV.as_bytes()).unwrap();
    let ctx = RenderContext::for_tests(today());

    let a1 = items.iter().find(|i| i.key == "A-1").unwrap();
    assert_eq!(ctx.risk(a1), RiskCategory::DueSoon);

    let acme: Vec<_> = items.iter().filter(|i| i.issuer == "Acme").collect();
    let buckets = group_by_month(acme);
    let january = buckets
        .iter()
        .find(|b| b.year == 2025 && b.month == 1)
        .unwrap();
    assert!(january.items.iter().any(|i| i.key == "A-1"));
}

#[test]
fn done_item_is_completed_whatever_today_is() {
    let items = load_from_reader(CSV.as_bytes()).unwrap();
    let a2 = items.iter().find(|i| i.key == "A-2").unwrap();
    for day in [
        NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
        today(),
        NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
    ] {
        assert_eq!(RenderContext::for_tests(day).risk(a2), RiskCategory::Completed);
    }
}

#[test]
fn keyless_row_is_missing_from_every_report() {
    let items = load_from_reader(CSV.as_bytes()).unwrap();
    assert_eq!(items.len(), 4);
    assert!(items.len() <= CSV.lines().count() - 1);

    let files = build_reports(&items, &RenderContext::for_tests(today()));
    for file in &files {
        assert!(!file.html.contains("NO-KEY"), "{} leaked a keyless row", file.name);
    }
}

#[test]
fn archive_holds_combined_and_issuer_reports() {
    let items = load_from_reader(CSV.as_bytes()).unwrap();
    let files = build_reports(&items, &RenderContext::for_tests(today()));
    let cursor = bundle::write_zip(&files, Cursor::new(Vec::new())).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(cursor.into_inner())).unwrap();

    let mut names: Vec<String> = archive.file_names().map(String::from).collect();
    names.sort();
    assert_eq!(
        names,
        ["roadmap_Acme.html", "roadmap_Beta.html", "roadmap_geral.html"]
    );

    let beta = read_entry(&mut archive, "roadmap_Beta.html");
    assert!(beta.contains("B-1"));
    assert!(beta.contains("Em aberto (1)"));
    assert!(beta.contains("Concluídos (1)"));
    assert!(beta.contains("20/12/2024"));
    assert!(!beta.contains("A-1"));

    let geral = read_entry(&mut archive, "roadmap_geral.html");
    let acme_pos = geral.find("A-1").unwrap();
    let beta_pos = geral.find("B-1").unwrap();
    assert!(acme_pos < beta_pos);
}
