use experience_catalog::{CatalogItem, Category, Query};
use tabular::{Row, Table};

fn badges(item: &CatalogItem) -> String {
    let mut badges = Vec::new();
    if item.is_popular {
        badges.push("Popular");
    }
    if item.is_new_experience {
        badges.push("New");
    }
    badges.join(", ")
}

pub fn result_summary(count: usize) -> String {
    match count {
        0 => "No experiences found".to_string(),
        1 => "1 experience found".to_string(),
        n => format!("{} experiences found", n),
    }
}

pub fn render_table(items: &[&CatalogItem]) -> String {
    #[allow(clippy::literal_string_with_formatting_args)]
    let mut table = Table::new("{:<}  {:<}  {:<}  {:>}  {:>}  {:>}  {:<}").with_row(
        Row::from_cells(
            ["ID", "Title", "Category", "Price", "Rating", "Reviews", "Badges"]
                .iter()
                .cloned(),
        ),
    );
    for item in items {
        table.add_row(
            Row::new()
                .with_cell(&item.id)
                .with_cell(&item.title)
                .with_cell(item.category)
                .with_cell(format!("${}", item.price))
                .with_cell(format!("{:.1}", item.rating))
                .with_cell(item.review_count)
                .with_cell(badges(item)),
        );
    }
    table.to_string()
}

/// Table plus a summary line. An empty result is reported, never an error.
pub fn render_results(items: &[&CatalogItem], query: &Query) -> String {
    let mut out = String::new();
    if !items.is_empty() {
        out.push_str(&render_table(items));
    }
    out.push_str(&result_summary(items.len()));
    match query.active_filter_count() {
        0 => {}
        1 => out.push_str(" (1 filter active)"),
        n => out.push_str(&format!(" ({} filters active)", n)),
    }
    out.push('\n');
    out
}

pub fn render_detail(item: &CatalogItem, related: &[&CatalogItem]) -> String {
    let mut lines = vec![
        item.title.clone(),
        format!("  id:        {}", item.id),
        format!("  category:  {}", item.category.label()),
        format!("  price:     ${} per person", item.price),
        format!("  rating:    {:.1} ({} reviews)", item.rating, item.review_count),
    ];
    for (label, key) in [
        ("duration", "duration"),
        ("group", "groupSize"),
        ("location", "location"),
    ] {
        if let Some(value) = item.detail_str(key) {
            lines.push(format!("  {:<10} {}", format!("{}:", label), value));
        }
    }
    let badges = badges(item);
    if !badges.is_empty() {
        lines.push(format!("  badges:    {}", badges));
    }
    if !item.description.is_empty() {
        lines.push(String::new());
        lines.push(item.description.clone());
    }
    if !item.features.is_empty() {
        lines.push(String::new());
        lines.push("Features:".to_string());
        lines.extend(item.features.iter().map(|f| format!("  - {}", f)));
    }
    if !related.is_empty() {
        lines.push(String::new());
        lines.push("Related experiences:".to_string());
        lines.extend(
            related
                .iter()
                .map(|r| format!("  - {} ({}, ${})", r.title, r.id, r.price)),
        );
    }
    lines.push(String::new());
    lines.join("\n")
}

pub fn render_categories(counts: &[(Category, usize)], total: usize) -> String {
    #[allow(clippy::literal_string_with_formatting_args)]
    let mut table = Table::new("{:<}  {:<}  {:>}")
        .with_row(Row::from_cells(["ID", "Name", "Count"].iter().cloned()))
        .with_row(
            Row::new()
                .with_cell("all")
                .with_cell("All Experiences")
                .with_cell(total),
        );
    for (category, count) in counts {
        table.add_row(
            Row::new()
                .with_cell(category)
                .with_cell(category.label())
                .with_cell(count),
        );
    }
    table.to_string()
}
