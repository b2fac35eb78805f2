use chrono::Datelike;
use maud::{html, Markup};

use crate::model::work_item::WorkItem;
use crate::report::RenderContext;
use crate::util::dates::format_br;

const CHIP: &str = "text-xs font-semibold px-2 py-1 rounded-full";
const NEUTRAL_CHIP: &str = "bg-gray-200 text-gray-800";

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

fn chip(classes: &str, text: &str) -> Markup {
    html! {
        span class=(format!("{CHIP} {classes}")) { (or_na(text)) }
    }
}

fn status_chip(item: &WorkItem, ctx: &RenderContext) -> Markup {
    chip(
        &format!("text-white {}", ctx.theme.status_bg(&item.status)),
        item.status.label(),
    )
}

/// Completion date, shown only for done items that have one.
fn completion_date(item: &WorkItem) -> Option<String> {
    if item.is_done() {
        item.completed.map(format_br)
    } else {
        None
    }
}

/// Roadmap card. Background follows the risk category; the corner shows the
/// completion day when known, otherwise the due day.
pub fn card(item: &WorkItem, ctx: &RenderContext) -> Markup {
    let risk = ctx.risk(item);
    let classes = format!(
        "p-4 rounded-lg shadow-md border-l-4 {} {} flex flex-col h-full",
        ctx.theme.status_border(&item.status),
        risk.css_class()
    );
    let day = item.completed.or(item.due).map(|d| d.day());

    html! {
        div class=(classes) data-risk=(risk.label(ctx.due_soon_days)) {
            div {
                div class="flex justify-between items-start" {
                    p class="font-bold text-lg text-gray-800" { (or_na(&item.key)) }
                    @if let Some(day) = day {
                        p class="text-sm font-bold text-gray-600" { (day) }
                    }
                }
                @if let Some(done_on) = completion_date(item) {
                    p class="text-xs text-gray-500 mt-1" { "Concluído em: " (done_on) }
                }
            }
            p class="text-sm text-gray-700 my-2 flex-grow" { (or_na(&item.summary)) }
            div class="mt-auto flex items-center flex-wrap gap-2 pt-2" {
                (chip(NEUTRAL_CHIP, &item.item_type))
                (chip(ctx.theme.effort_classes(&item.effort), &item.effort))
                (status_chip(item, ctx))
            }
        }
    }
}

/// Backlog table row for an item without a due date.
pub fn backlog_row(item: &WorkItem, ctx: &RenderContext) -> Markup {
    let key_cell = format!("p-3 border-l-4 {}", ctx.theme.status_border(&item.status));

    html! {
        tr class="border-t border-gray-200 bg-white" {
            td class=(key_cell) style="width: 50%;" {
                p class="font-bold text-gray-800" { (or_na(&item.key)) }
                p class="text-sm text-gray-600" { (or_na(&item.summary)) }
            }
            td class="p-3 align-middle text-center" { (status_chip(item, ctx)) }
            td class="p-3 align-middle text-center" {
                (chip(ctx.theme.effort_classes(&item.effort), &item.effort))
            }
            td class="p-3 align-middle text-center" { (chip(NEUTRAL_CHIP, &item.item_type)) }
            td class="p-3 align-middle text-center" {
                @if let Some(done_on) = completion_date(item) {
                    span class="text-sm text-gray-600" { (done_on) }
                }
            }
        }
    }
}
