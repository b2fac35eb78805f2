use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::model::risk::RiskCategory;
use crate::model::work_item::{Status, WorkItem};
use crate::report::section::{backlog_section, roadmap_section};
use crate::report::RenderContext;
use crate::util::dates::format_br;

pub fn legends(ctx: &RenderContext) -> Markup {
    html! {
        div class="mt-8 pt-4 border-t-2" {
            div class="grid grid-cols-1 md:grid-cols-2 gap-8" {
                div {
                    h3 class="font-bold text-lg mb-4" { "Legenda de Risco" }
                    div class="flex flex-wrap gap-x-6 gap-y-2 text-sm" {
                        @for risk in RiskCategory::LEGEND {
                            div class="flex items-center gap-2" {
                                div class=(format!("w-4 h-4 rounded-full {} border border-gray-300", risk.css_class())) {}
                                span { (risk.label(ctx.due_soon_days)) }
                            }
                        }
                    }
                }
                div {
                    h3 class="font-bold text-lg mb-4" { "Legenda de Status" }
                    div class="flex flex-wrap gap-x-6 gap-y-2 text-sm" {
                        @for status in &Status::KNOWN {
                            div class="flex items-center gap-2" {
                                div class=(format!("w-4 h-4 rounded-full {}", ctx.theme.status_bg(status))) {}
                                span { (status.label()) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One issuer's slide: heading, roadmap timeline and backlog tables.
pub fn issuer_content(issuer: &str, items: &[&WorkItem], ctx: &RenderContext) -> Markup {
    html! {
        div class="bg-white rounded-xl shadow-lg p-8 mb-12" {
            h2 class="text-2xl font-bold text-gray-800 mb-6" { (issuer) }
            (roadmap_section(items.iter().copied(), ctx))
            (backlog_section(items.iter().copied(), ctx))
        }
    }
}

/// Wrap a body in the shared standalone page scaffold.
pub fn page(title: &str, body: Markup, ctx: &RenderContext) -> String {
    let markup = html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(ctx.tailwind_cdn) {}
                style { (PreEscaped("body { font-family: 'Inter', system-ui, sans-serif; }")) }
            }
            body class="bg-gray-50 p-8" {
                header class="mb-8" {
                    h1 class="text-3xl font-bold text-gray-900" { (title) }
                    p class="text-sm text-gray-500" { "Gerado em " (format_br(ctx.today)) }
                }
                main { (body) }
                (legends(ctx))
            }
        }
    };
    markup.into_string()
}
