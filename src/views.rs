// HTML rendering for the dashboard page (maud) and the embedded static assets.

use maud::{DOCTYPE, Markup, html};

use crate::dashboard::DashboardView;
use crate::filter::ANY;
use crate::models::{Average, Sample};
use crate::version::{NAME, VERSION};

pub const STYLE_SHEET: &str = include_str!("../assets/style.css");
pub const REFRESH_SCRIPT: &str = include_str!("../assets/settimedrefresh.js");

/// Full dashboard page. `error` is shown above the (possibly empty) view.
pub fn dashboard_page(view: &DashboardView, error: Option<&str>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Speedtest results" }
                link rel="stylesheet" href="/style.css";
                script src="/js/settimedrefresh.js" defer {}
            }
            body {
                h1 { "Speedtest results" }
                @if let Some(msg) = error {
                    p.error { (msg) }
                }
                @if view.has_data() {
                    p.summary {
                        (view.total_samples) " samples logged, "
                        (view.results.len()) " shown"
                    }
                    @if !view.filter_options.is_empty() {
                        (filter_form(view))
                    }
                    div.averages {
                        (averages_table("Daily averages", "Day", &view.daily))
                        (averages_table("Monthly averages", "Month", &view.monthly))
                        (averages_table("Yearly averages", "Year", &view.yearly))
                    }
                    h2 { "Individual results" }
                    @if view.results.is_empty() {
                        p."no-data" { "No results match the selected filter." }
                    } @else {
                        (results_table(&view.results))
                    }
                } @else {
                    p."no-data" { "No speedtest data available yet." }
                }
                footer { (NAME) " " (VERSION) }
            }
        }
    }
}

fn filter_form(view: &DashboardView) -> Markup {
    let options = &view.filter_options;
    let selection = &view.selection;
    html! {
        form.filters method="get" action="/" {
            (filter_select("year", "Year", &options.years, selection.year()))
            (filter_select("month", "Month", &options.months, selection.month()))
            (filter_select("day", "Day", &options.days, selection.day()))
            button type="submit" { "Filter" }
            @if !selection.is_unconstrained() {
                a href="/" { "Reset" }
            }
        }
    }
}

fn filter_select(name: &str, label: &str, values: &[String], selected: Option<&str>) -> Markup {
    html! {
        label {
            (label)
            select name=(name) {
                option value=(ANY) selected[selected.is_none()] { "Any" }
                @for value in values {
                    option value=(value) selected[selected == Some(value.as_str())] { (value) }
                }
            }
        }
    }
}

fn averages_table(title: &str, period_label: &str, averages: &[Average]) -> Markup {
    html! {
        section {
            h2 { (title) }
            table {
                thead {
                    tr {
                        th { (period_label) }
                        th.num { "Download (Mbps)" }
                        th.num { "Upload (Mbps)" }
                        th.num { "Ping (ms)" }
                        th.num { "Tests" }
                    }
                }
                tbody {
                    @for avg in averages {
                        tr {
                            td { (avg.period) }
                            td.num { (format!("{:.2}", avg.avg_download)) }
                            td.num { (format!("{:.2}", avg.avg_upload)) }
                            td.num { (format!("{:.2}", avg.avg_ping)) }
                            td.num { (avg.num_data_points) }
                        }
                    }
                }
            }
        }
    }
}

fn results_table(results: &[Sample]) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "Time" }
                    th { "Server" }
                    th.num { "Download (Mbps)" }
                    th.num { "Upload (Mbps)" }
                    th.num { "Ping (ms)" }
                }
            }
            tbody {
                @for s in results {
                    tr {
                        td { (s.display_timestamp()) }
                        td { (s.server_name) }
                        td.num { (format!("{:.2}", s.download_mbps)) }
                        td.num { (format!("{:.2}", s.upload_mbps)) }
                        td.num { (format!("{:.2}", s.ping_ms)) }
                    }
                }
            }
        }
    }
}
