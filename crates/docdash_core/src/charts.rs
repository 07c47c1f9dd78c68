//! Chart data handed to the charting collaborator. The series are fixed
//! showcase values; only the grid colour follows the theme.

use crate::Section;

pub const GRID_COLOR_DARK: &str = "rgba(148, 163, 184, 0.1)";
pub const GRID_COLOR_LIGHT: &str = "rgba(0, 0, 0, 0.1)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartId {
    QueryActivity,
    DocumentTypes,
    SearchTrends,
    AnswerQuality,
}

impl ChartId {
    pub fn title(self) -> &'static str {
        match self {
            ChartId::QueryActivity => "Query Activity",
            ChartId::DocumentTypes => "Document Types",
            ChartId::SearchTrends => "Search Trends",
            ChartId::AnswerQuality => "Answer Quality",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Doughnut,
    Bar,
    Radar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: &'static str,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub id: ChartId,
    pub kind: ChartKind,
    pub labels: Vec<&'static str>,
    pub series: Vec<ChartSeries>,
    /// Axis grid colour; `None` for charts without cartesian axes.
    pub grid_color: Option<&'static str>,
}

pub fn grid_color(dark_mode: bool) -> &'static str {
    if dark_mode {
        GRID_COLOR_DARK
    } else {
        GRID_COLOR_LIGHT
    }
}

/// Charts visible in `section`.
pub fn charts_for(section: Section, dark_mode: bool) -> Vec<ChartSpec> {
    let grid = grid_color(dark_mode);
    match section {
        Section::Dashboard => vec![
            ChartSpec {
                id: ChartId::QueryActivity,
                kind: ChartKind::Line,
                labels: vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
                series: vec![ChartSeries {
                    label: "Queries",
                    values: vec![12.0, 19.0, 3.0, 5.0, 2.0, 3.0, 9.0],
                }],
                grid_color: Some(grid),
            },
            ChartSpec {
                id: ChartId::DocumentTypes,
                kind: ChartKind::Doughnut,
                labels: vec!["PDF", "DOCX", "TXT"],
                series: vec![ChartSeries {
                    label: "Documents",
                    values: vec![45.0, 30.0, 25.0],
                }],
                grid_color: None,
            },
        ],
        Section::Analytics => vec![
            ChartSpec {
                id: ChartId::SearchTrends,
                kind: ChartKind::Bar,
                labels: vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
                series: vec![ChartSeries {
                    label: "Search Volume",
                    values: vec![65.0, 59.0, 80.0, 81.0, 56.0, 55.0],
                }],
                grid_color: Some(grid),
            },
            ChartSpec {
                id: ChartId::AnswerQuality,
                kind: ChartKind::Radar,
                labels: vec!["Accuracy", "Relevance", "Speed", "Completeness", "Clarity"],
                series: vec![ChartSeries {
                    label: "Performance",
                    values: vec![85.0, 90.0, 78.0, 88.0, 92.0],
                }],
                grid_color: None,
            },
        ],
        Section::Upload | Section::Search | Section::Documents => Vec::new(),
    }
}
