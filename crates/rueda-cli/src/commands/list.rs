use anyhow::{Context, Result};
use rueda_core::{
    CategoryCatalog, CategoryFilter, DifficultyFilter, Move, Selection, SelectionSummary,
    SortDirection, SortField, EMPTY_MESSAGE,
};
use rueda_etl::{Config, DocumentLoader};

const DESCRIPTION_WIDTH: usize = 48;
const HEADERS: [&str; 6] = [
    "Move",
    "Translation",
    "Difficulty",
    "Category",
    "Description",
    "Video",
];

/// Options for `rueda list`.
#[derive(Debug, Clone, Copy)]
pub struct ListOptions {
    pub category: CategoryFilter,
    pub difficulty: DifficultyFilter,
    pub sort: SortField,
    pub desc: bool,
    pub json: bool,
}

impl ListOptions {
    fn selection(&self) -> Selection {
        Selection {
            category: self.category,
            difficulty: self.difficulty,
            field: self.sort,
            direction: if self.desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            },
        }
    }
}

pub async fn run_list(config: &Config, options: ListOptions) -> Result<()> {
    let loader = DocumentLoader::from_config(config)?;

    let (moves, catalog) = tokio::join!(loader.load_moves(), loader.load_categories_or_empty());
    let ingested = moves.context("Failed to load moves")?;

    let selected = options.selection().apply(&ingested.moves);

    if options.json {
        let json =
            serde_json::to_string_pretty(&selected).context("Failed to serialise moves")?;
        println!("{json}");
        return Ok(());
    }

    let summary = SelectionSummary::new(selected.len(), ingested.moves.len());
    if summary.is_empty() {
        println!("{EMPTY_MESSAGE}");
    } else {
        print!("{}", format_table(&selected, &catalog));
        println!("\n{summary}");
    }

    Ok(())
}

/// Render moves as a plain-text table, one row per move.
pub fn format_table(moves: &[Move], catalog: &CategoryCatalog) -> String {
    let rows: Vec<[String; 6]> = moves.iter().map(|m| row(m, catalog)).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut lines = vec![line(&HEADERS.map(String::from), &widths), rule.join("  ")];
    lines.extend(rows.iter().map(|row| line(row, &widths)));
    lines.push(String::new());
    lines.join("\n")
}

fn row(m: &Move, catalog: &CategoryCatalog) -> [String; 6] {
    [
        m.spanish_name.clone(),
        m.english_name.clone(),
        format!("{} {}", m.difficulty.stars(), m.difficulty.label()),
        catalog.display_name(m.category_id).to_string(),
        truncate(&m.description, DESCRIPTION_WIDTH),
        if m.has_video() { "▶" } else { "-" }.to_string(),
    ]
}

fn line(cells: &[String; 6], widths: &[usize; 6]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    padded.join("  ").trim_end().to_string()
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
