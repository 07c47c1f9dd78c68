//! Turns an `AppViewModel` into styled text lines. No terminal IO here.

use docdash_core::{
    AppViewModel, ChartKind, ChartSpec, QueryResultView, Section, Severity, EMPTY_ACTIVITY_TEXT,
};

const BAR_WIDTH: f64 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Title,
    Heading,
    Body,
    Muted,
    Accent,
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub tone: Tone,
}

impl Line {
    fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    fn blank() -> Self {
        Self::new(Tone::Body, "")
    }
}

pub fn render(view: &AppViewModel) -> Vec<Line> {
    let mut lines = Vec::new();

    lines.push(Line::new(
        Tone::Title,
        format!(
            "DocDash   [{}]  [{}]   theme: {}",
            view.header.documents_badge,
            view.header.chunks_badge,
            if view.dark_mode { "dark" } else { "light" }
        ),
    ));
    let nav = view
        .nav
        .iter()
        .map(|item| {
            if item.active {
                format!("[{}]", item.label)
            } else {
                format!(" {} ", item.label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(Line::new(Tone::Accent, nav));
    lines.push(Line::blank());

    for note in &view.notifications {
        lines.push(Line::new(
            severity_tone(note.severity),
            format!("{} #{} {}", glyph(note.icon), note.id, note.message),
        ));
    }
    if view.clear_confirmation_pending {
        lines.push(Line::new(
            Tone::Warning,
            "Clear all documents? This cannot be undone. (yes / no)",
        ));
    }
    if !view.notifications.is_empty() || view.clear_confirmation_pending {
        lines.push(Line::blank());
    }

    match view.section {
        Section::Dashboard => render_dashboard(view, &mut lines),
        Section::Upload => render_upload(view, &mut lines),
        Section::Search => render_search(view, &mut lines),
        Section::Documents => render_documents(view, &mut lines),
        Section::Analytics => render_charts(&view.charts, &mut lines),
    }

    lines.push(Line::blank());
    lines.push(Line::new(
        Tone::Muted,
        "show <section> | ask <question> | upload <paths> | filter <type> | theme | clear | dismiss <id> | help | quit",
    ));
    lines
}

fn render_dashboard(view: &AppViewModel, lines: &mut Vec<Line>) {
    let header = &view.header;
    lines.push(Line::new(Tone::Heading, "Overview"));
    lines.push(Line::new(
        Tone::Body,
        format!(
            "  Documents {}   Chunks {}   Queries today {}   Avg response {}",
            header.total_documents,
            header.total_chunks,
            header.queries_today,
            header.avg_response_time
        ),
    ));
    lines.push(Line::blank());

    lines.push(Line::new(Tone::Heading, "Recent activity"));
    if view.activity.is_empty() {
        lines.push(Line::new(Tone::Muted, format!("  {EMPTY_ACTIVITY_TEXT}")));
    }
    for row in &view.activity {
        lines.push(Line::new(
            Tone::Body,
            format!("  {} {:<56} {}", glyph(row.icon), row.description, row.timestamp),
        ));
    }
    lines.push(Line::blank());

    render_charts(&view.charts, lines);
}

fn render_upload(view: &AppViewModel, lines: &mut Vec<Line>) {
    lines.push(Line::new(Tone::Heading, "Upload documents"));
    lines.push(Line::new(
        Tone::Muted,
        "  PDF, DOCX and TXT files are accepted: upload <path>...",
    ));

    if let Some(progress) = &view.upload.progress {
        lines.push(Line::new(
            Tone::Info,
            format!(
                "  {} {} {}",
                progress.status,
                bar(progress.percent, 100.0),
                progress.percent_label
            ),
        ));
    }

    if !view.upload.results.is_empty() {
        lines.push(Line::blank());
        lines.push(Line::new(Tone::Heading, "Upload results"));
    }
    for result in &view.upload.results {
        let line = if result.success {
            Line::new(
                Tone::Success,
                format!(
                    "  {} {}  {}  {}",
                    glyph("check-circle"),
                    result.filename,
                    result.detail,
                    result.file_type.as_deref().unwrap_or_default()
                ),
            )
        } else {
            Line::new(
                Tone::Error,
                format!("  {} {}  {}", glyph("x-circle"), result.filename, result.detail),
            )
        };
        lines.push(line);
    }
}

fn render_search(view: &AppViewModel, lines: &mut Vec<Line>) {
    let search = &view.search;
    lines.push(Line::new(Tone::Heading, "Ask your documents"));

    let filters = view
        .filters
        .iter()
        .map(|f| {
            if f.active {
                format!("[{}]", f.label)
            } else {
                f.label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(Line::new(Tone::Accent, format!("  Filter: {filters}")));

    if !search.query_input.is_empty() {
        lines.push(Line::new(Tone::Body, format!("  Question: {}", search.query_input)));
    }
    if search.loading {
        lines.push(Line::new(Tone::Info, "  Searching..."));
    } else if !search.submit_enabled {
        lines.push(Line::new(
            Tone::Muted,
            "  Waiting for the previous question to finish...",
        ));
    }

    match &search.result {
        None => {}
        Some(QueryResultView::Error { message }) => {
            lines.push(Line::blank());
            lines.push(Line::new(Tone::Error, "  Search Error"));
            lines.push(Line::new(Tone::Error, format!("  {message}")));
        }
        Some(QueryResultView::Answer {
            question,
            paragraphs,
            latency,
            sources,
        }) => {
            lines.push(Line::blank());
            lines.push(Line::new(Tone::Heading, format!("  Q: {question}")));
            for (i, paragraph) in paragraphs.iter().enumerate() {
                if i > 0 {
                    lines.push(Line::blank());
                }
                for text in paragraph {
                    lines.push(Line::new(Tone::Body, format!("  {text}")));
                }
            }
            lines.push(Line::new(Tone::Muted, format!("  {latency}")));
            if !sources.is_empty() {
                lines.push(Line::blank());
                lines.push(Line::new(Tone::Heading, format!("  Sources ({})", sources.len())));
            }
            for source in sources {
                lines.push(Line::new(
                    Tone::Accent,
                    format!(
                        "  {}. {} [{}]  relevance {}",
                        source.rank, source.document_id, source.file_type, source.relevance
                    ),
                ));
                lines.push(Line::new(Tone::Muted, format!("     {}", source.preview)));
            }
        }
    }
}

fn render_documents(view: &AppViewModel, lines: &mut Vec<Line>) {
    lines.push(Line::new(Tone::Heading, "Documents"));
    lines.push(Line::new(
        Tone::Body,
        format!(
            "  {} indexed, {} total",
            view.header.documents_badge, view.header.chunks_badge
        ),
    ));
    lines.push(Line::new(Tone::Muted, "  clear: remove all documents"));
}

fn render_charts(charts: &[ChartSpec], lines: &mut Vec<Line>) {
    for chart in charts {
        lines.push(Line::new(
            Tone::Heading,
            format!("{} ({})", chart.id.title(), kind_label(chart.kind)),
        ));
        for series in &chart.series {
            let max = series.values.iter().copied().fold(0.0_f64, f64::max);
            if chart.series.len() > 1 {
                lines.push(Line::new(Tone::Muted, format!("  {}", series.label)));
            }
            for (label, value) in chart.labels.iter().zip(&series.values) {
                lines.push(Line::new(
                    Tone::Body,
                    format!("  {label:<12} {value:>5} {}", bar(*value, max)),
                ));
            }
        }
        if let Some(grid) = chart.grid_color {
            lines.push(Line::new(Tone::Muted, format!("  grid {grid}")));
        }
        lines.push(Line::blank());
    }
}

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * BAR_WIDTH).round().clamp(0.0, BAR_WIDTH) as usize;
    "#".repeat(filled)
}

fn kind_label(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Line => "line",
        ChartKind::Doughnut => "doughnut",
        ChartKind::Bar => "bar",
        ChartKind::Radar => "radar",
    }
}

fn severity_tone(severity: Severity) -> Tone {
    match severity {
        Severity::Success => Tone::Success,
        Severity::Error => Tone::Error,
        Severity::Info => Tone::Info,
        Severity::Warning => Tone::Warning,
    }
}

fn glyph(icon: &str) -> &'static str {
    match icon {
        "upload" => "^",
        "search" => "?",
        "check-circle" => "+",
        "x-circle" => "x",
        "alert-triangle" => "!",
        _ => "i",
    }
}
