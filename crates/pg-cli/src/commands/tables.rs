use std::fmt::Display;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use pg_mechanics::WeightedTable;

use super::Context;
use crate::render;

pub fn run(ctx: &Context, json: bool) -> Result<(), String> {
    let tables = ctx.generator.tables();
    if json {
        println!("{}", render::to_json(tables)?);
        return Ok(());
    }

    print_weights("Primary ability", &tables.ability_weights);
    print_weights("Species", &tables.species_weights);
    print_weights("Level", &tables.level_weights);
    print_weights("Class type (mental primaries)", &tables.class_type_weights);

    println!("  {}", "Primary mapping".bold());
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Primary", "Secondary", "Dump"]);
    for (primary, targets) in tables.primary_mapping.iter() {
        table.add_row(vec![
            primary.abbreviation(),
            targets.secondary.abbreviation(),
            targets.dump.abbreviation(),
        ]);
    }
    println!("{table}");
    println!();

    println!("  {}", "Cultures".bold());
    if tables.cultures.is_empty() {
        println!("  (none)");
    }
    for c in &tables.cultures {
        let syllables = if c.syllables.min == c.syllables.max {
            c.syllables.min.to_string()
        } else {
            format!("{}-{}", c.syllables.min, c.syllables.max)
        };
        println!(
            "  {:<12} {} syllables, {} male / {} female presets",
            c.name,
            syllables,
            c.male.presets.len(),
            c.female.presets.len()
        );
    }
    println!();

    let cfg = ctx.generator.config();
    println!("  {}", "Catalogs".bold());
    println!("  class entries: {}", tables.classes.entries().len());
    println!("  backgrounds:   {}", tables.backgrounds.len());
    println!("  virtues:       {}", tables.virtues.len());
    println!("  vices:         {}", tables.vices.len());
    println!("  origin feats:  {}", tables.feats.len());
    println!("  vowel names:   {}", tables.vowel_names.entries().len());
    println!("  oracle cards:  {}", ctx.generator.deck().len());
    println!();
    println!("  {}", "Probabilities".bold());
    println!("  preset name:        {:.2}", cfg.preset_name_chance);
    println!("  background primary: {:.2}", cfg.background_primary_chance);
    println!("  feat from any:      {:.2}", cfg.feat_any_chance);
    println!("  npc feat:           {:.2}", cfg.npc_feat_chance);
    println!("  female:             {:.2}", cfg.gender_female_chance);

    Ok(())
}

fn print_weights<T: Display>(title: &str, weights: &WeightedTable<T>) {
    println!("  {}", title.bold());
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Value", "Weight", "Chance"]);
    let total = weights.total_weight();
    for entry in weights.entries() {
        table.add_row(vec![
            entry.value.to_string(),
            entry.weight.to_string(),
            format!("{:.1}%", entry.weight / total * 100.0),
        ]);
    }
    println!("{table}");
    println!();
}
