//! Per-page rendering of the analysis results.

use leptos::*;

use crate::config::NO_TABLE_DATA_MESSAGE;
use crate::table::{page_heading, PageView, Table};
use crate::types::PageResult;

#[component]
pub fn ResultDisplay(results: Vec<PageResult>) -> impl IntoView {
    view! {
        <div class="results">
            {results
                .into_iter()
                .map(|result| view! { <PageBlock result=result/> })
                .collect_view()}
        </div>
    }
}

#[component]
fn PageBlock(result: PageResult) -> impl IntoView {
    let heading = page_heading(result.page);

    let body = match PageView::from_result(&result) {
        PageView::Table(table) => {
            if table.is_ragged() {
                log::warn!(
                    "⚠️ Page {}: rows disagree on columns, aligned to {} header(s)",
                    result.page,
                    table.headers.len()
                );
            }
            view! { <DataTable table=table/> }.into_view()
        }
        PageView::Empty => view! {
            <p class="no-table-data">{NO_TABLE_DATA_MESSAGE}</p>
        }.into_view(),
    };

    let summary = (!result.raw_texts.is_empty()).then(|| {
        format!(
            "{} text block(s) • {} box(es)",
            result.raw_texts.len(),
            result.boxes.len()
        )
    });

    view! {
        <section class="page-result">
            <h2>{heading}</h2>
            {body}
            {summary.map(|s| view! { <p class="page-summary">{s}</p> })}
        </section>
    }
}

#[component]
fn DataTable(table: Table) -> impl IntoView {
    let Table { headers, rows, .. } = table;

    view! {
        <div class="table-wrapper">
            <table>
                <thead>
                    <tr>
                        {headers
                            .into_iter()
                            .map(|header| view! { <th>{header}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| view! {
                            <tr>
                                {row
                                    .into_iter()
                                    .map(|cell| view! { <td>{cell}</td> })
                                    .collect_view()}
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
