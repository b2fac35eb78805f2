use chrono::Datelike;
use maud::{html, Markup};

use crate::model::work_item::WorkItem;
use crate::report::card::{backlog_row, card};
use crate::report::RenderContext;
use crate::util::dates::month_name;

/// Dated items sharing the (year, month) of their due date.
#[derive(Debug)]
pub struct MonthBucket<'a> {
    pub year: i32,
    pub month: u32,
    pub items: Vec<&'a WorkItem>,
}

impl MonthBucket<'_> {
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

/// Undated items, split by completion. Input order is kept in both lists.
#[derive(Debug, Default)]
pub struct Backlog<'a> {
    pub open: Vec<&'a WorkItem>,
    pub done: Vec<&'a WorkItem>,
}

/// Bucket dated items by month, oldest first. Items inside a bucket are ordered
/// by due date; ties keep input order. Undated items are skipped.
pub fn group_by_month<'a, I>(items: I) -> Vec<MonthBucket<'a>>
where
    I: IntoIterator<Item = &'a WorkItem>,
{
    let mut dated: Vec<_> = items
        .into_iter()
        .filter_map(|item| item.due.map(|due| (due, item)))
        .collect();
    dated.sort_by_key(|(due, _)| *due);

    let mut buckets: Vec<MonthBucket<'a>> = Vec::new();
    for (due, item) in dated {
        match buckets.last_mut() {
            Some(bucket) if bucket.year == due.year() && bucket.month == due.month() => {
                bucket.items.push(item);
            }
            _ => buckets.push(MonthBucket {
                year: due.year(),
                month: due.month(),
                items: vec![item],
            }),
        }
    }
    buckets
}

pub fn split_backlog<'a, I>(items: I) -> Backlog<'a>
where
    I: IntoIterator<Item = &'a WorkItem>,
{
    let mut backlog = Backlog::default();
    for item in items.into_iter().filter(|i| i.due.is_none()) {
        if item.is_done() {
            backlog.done.push(item);
        } else {
            backlog.open.push(item);
        }
    }
    backlog
}

pub fn roadmap_section<'a, I>(items: I, ctx: &RenderContext) -> Markup
where
    I: IntoIterator<Item = &'a WorkItem>,
{
    let buckets = group_by_month(items);

    html! {
        section class="mb-10" {
            h3 class="text-xl font-semibold text-gray-700 mb-4" { "Roadmap" }
            @if buckets.is_empty() {
                p class="text-gray-500 italic" { "Nenhum item com data limite." }
            } @else {
                div class="flex space-x-8 overflow-x-auto pb-4" {
                    @for bucket in &buckets {
                        div class="flex-shrink-0 w-80" {
                            h4 class="text-lg font-bold text-gray-700 mb-4 pb-2 border-b-2 border-gray-300" {
                                (bucket.label())
                            }
                            div class="space-y-4" {
                                @for item in &bucket.items {
                                    (card(item, ctx))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn backlog_table(title: &str, items: &[&WorkItem], ctx: &RenderContext) -> Markup {
    html! {
        div class="mb-6" {
            h4 class="text-lg font-bold text-gray-700 mb-2" { (title) " (" (items.len()) ")" }
            table class="w-full text-left rounded-lg overflow-hidden shadow-md" {
                thead class="bg-gray-100 text-gray-600 text-sm" {
                    tr {
                        th class="p-3" { "Item" }
                        th class="p-3 text-center" { "Status" }
                        th class="p-3 text-center" { "Esforço" }
                        th class="p-3 text-center" { "Tipo" }
                        th class="p-3 text-center" { "Concluído em" }
                    }
                }
                tbody {
                    @for item in items {
                        (backlog_row(item, ctx))
                    }
                }
            }
        }
    }
}

pub fn backlog_section<'a, I>(items: I, ctx: &RenderContext) -> Markup
where
    I: IntoIterator<Item = &'a WorkItem>,
{
    let backlog = split_backlog(items);

    html! {
        section class="mb-10" {
            h3 class="text-xl font-semibold text-gray-700 mb-4" { "Backlog (sem data limite)" }
            @if backlog.open.is_empty() && backlog.done.is_empty() {
                p class="text-gray-500 italic" { "Nenhum item sem data limite." }
            }
            @if !backlog.open.is_empty() {
                (backlog_table("Em aberto", &backlog.open, ctx))
            }
            @if !backlog.done.is_empty() {
                (backlog_table("Concluídos", &backlog.done, ctx))
            }
        }
    }
}
