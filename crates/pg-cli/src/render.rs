//! Text and JSON rendering of generated records.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use pg_core::{Ability, Character, Draw, Orientation, StatRole, TraitKind};

/// Pretty-printed JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("failed to serialize: {e}"))
}

/// Ability modifier for a score.
pub fn modifier(score: u32) -> i64 {
    (i64::from(score) - 10).div_euclid(2)
}

fn signed(n: i64) -> String {
    if n >= 0 { format!("+{n}") } else { n.to_string() }
}

fn role_marker(role: Option<StatRole>) -> &'static str {
    match role {
        Some(StatRole::Primary) => "P",
        Some(StatRole::Secondary) => "S",
        Some(StatRole::Tertiary) => "T",
        Some(StatRole::Dump) => "D",
        None => "",
    }
}

/// One oracle draw on a single line.
pub fn draw(d: &Draw) -> String {
    let title = match d.orientation {
        Orientation::Upright => d.title.bold(),
        Orientation::Reversed => d.title.bold().red(),
    };
    format!(
        "{title} {} {}",
        format!("({}, {})", d.orientation, d.category).dimmed(),
        d.text
    )
}

/// The highlighted party-level draw.
pub fn party_banner(d: &Draw) -> String {
    let line = "=".repeat(60);
    format!(
        "  {}\n  {} {}: {}\n  {}",
        line.yellow(),
        "Party oracle".yellow().bold(),
        d.title.bold(),
        d.text,
        line.yellow()
    )
}

/// A full character sheet, one field per line.
pub fn character(c: &Character) -> String {
    let kind = if c.is_player { "PC" } else { "NPC" };
    let mut lines = vec![
        format!(
            "  {} [{}]",
            c.name.bold(),
            format!("{kind}, level {} {}", c.level, c.species).dimmed()
        ),
        format!("  class:      {}", c.class),
    ];
    if let Some(culture) = &c.culture {
        lines.push(format!("  culture:    {culture}"));
    }
    lines.push(format!(
        "  background: {} ({}/{})",
        c.background.name,
        c.background.primary.abbreviation(),
        c.background.tertiary.abbreviation()
    ));

    let traits: Vec<String> = c
        .traits
        .traits()
        .iter()
        .map(|t| match t.kind {
            TraitKind::Virtue => t.name.green().to_string(),
            TraitKind::Vice => t.name.red().to_string(),
        })
        .collect();
    lines.push(format!("  traits:     {}", traits.join(", ")));

    let feats = if c.feats.is_empty() {
        "-".to_string()
    } else {
        c.feats
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    lines.push(format!("  feats:      {feats}"));
    lines.push(stat_table(c).to_string());
    lines.extend(c.draws.iter().map(|d| format!("  oracle:     {}", draw(d))));

    let mut sheet = lines.join("\n");
    sheet.push('\n');
    sheet
}

fn stat_cell(score: u32, bonus: usize) -> String {
    let cell = format!("{score} ({})", signed(modifier(score)));
    if bonus > 0 {
        format!("{cell} +{bonus}")
    } else {
        cell
    }
}

fn stat_table(c: &Character) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let mut header = vec![String::new()];
    header.extend(Ability::ALL.iter().map(|a| a.abbreviation().to_string()));
    table.set_header(header);

    let mut scores = vec!["score".to_string()];
    let mut roles = vec!["role".to_string()];
    for ability in Ability::ALL {
        let score = c.stats.scores.get(ability);
        scores.push(stat_cell(score, c.stats.bonus_count(ability)));
        roles.push(role_marker(c.stats.roles.role_of(ability)).to_string());
    }
    table.add_row(scores);
    table.add_row(roles);
    table
}
