//! Built-in tables.

use pg_core::Ability::{self, Charisma, Constitution, Dexterity, Intelligence, Strength, Wisdom};
use pg_core::{Background, ClassType, OriginFeat};
use pg_mechanics::WeightedTable;

use super::Tables;
use crate::class::{ClassCatalog, ClassEntry};
use crate::error::GenResult;
use crate::names;
use crate::stats::{PrimaryMapping, StatRules};

/// Assemble the default data set.
pub fn tables() -> GenResult<Tables> {
    Ok(Tables {
        ability_weights: WeightedTable::new([
            (Strength, 24.0),
            (Dexterity, 20.0),
            (Constitution, 18.0),
            (Intelligence, 15.0),
            (Wisdom, 13.0),
            (Charisma, 10.0),
        ])?,
        species_weights: WeightedTable::new(
            [
                ("Human", 35.0),
                ("Elf", 20.0),
                ("Dwarf", 15.0),
                ("Halfling", 12.0),
                ("Orc", 8.0),
                ("Tiefling", 10.0),
            ]
            .map(|(s, w)| (s.to_string(), w)),
        )?,
        level_weights: WeightedTable::new([(1, 40.0), (2, 25.0), (3, 15.0), (4, 10.0), (5, 10.0)])?,
        class_type_weights: WeightedTable::new([
            (ClassType::Blunt, 50.0),
            (ClassType::Caster, 30.0),
            (ClassType::Semicaster, 20.0),
        ])?,
        primary_mapping: PrimaryMapping::new([
            (Strength, Wisdom, Intelligence),
            (Dexterity, Charisma, Wisdom),
            (Constitution, Dexterity, Wisdom),
            (Intelligence, Wisdom, Strength),
            (Wisdom, Constitution, Dexterity),
            (Charisma, Intelligence, Constitution),
        ]),
        classes: classes(),
        backgrounds: backgrounds(),
        virtues: strings(&[
            "Honest", "Brave", "Loyal", "Kind", "Wise", "Patient", "Generous", "Humble",
        ]),
        vices: strings(&[
            "Greedy",
            "Cowardly",
            "Cruel",
            "Arrogant",
            "Lazy",
            "Deceitful",
            "Envious",
            "Wrathful",
        ]),
        feats: feats(),
        cultures: names::builtin::cultures(),
        vowel_names: names::builtin::vowel_names(),
        baseline_stats: StatRules::baseline(),
        player_stats: StatRules::player_grade(),
    })
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn classes() -> ClassCatalog {
    use ClassType::{Blunt, Caster, Semicaster};
    ClassCatalog::new(vec![
        ClassEntry::new(
            Blunt,
            Strength,
            &["Fighter", "Barbarian"],
            &["Champion", "Battle Master", "Berserker", "Zealot"],
        ),
        ClassEntry::new(
            Blunt,
            Dexterity,
            &["Rogue", "Monk", "Fighter"],
            &["Thief", "Assassin", "Warrior of Shadow", "Swashbuckler"],
        ),
        ClassEntry::new(
            Blunt,
            Constitution,
            &["Barbarian", "Fighter"],
            &["Wild Heart", "World Tree", "Champion", "Banneret"],
        ),
        ClassEntry::new(
            Blunt,
            Intelligence,
            &["Fighter", "Rogue"],
            &["Battle Master", "Mastermind", "Inquisitive", "Psi Warrior"],
        ),
        ClassEntry::new(
            Blunt,
            Wisdom,
            &["Monk", "Fighter"],
            &["Warrior of the Open Hand", "Warrior of Mercy", "Samurai", "Champion"],
        ),
        ClassEntry::new(
            Blunt,
            Charisma,
            &["Rogue", "Fighter"],
            &["Swashbuckler", "Banneret", "Soulknife", "Battle Master"],
        ),
        ClassEntry::new(
            Caster,
            Intelligence,
            &["Wizard"],
            &["Evoker", "Abjurer", "Diviner", "Illusionist"],
        ),
        ClassEntry::new(
            Caster,
            Wisdom,
            &["Cleric", "Druid"],
            &["Life Domain", "Light Domain", "Circle of the Moon", "Circle of the Land"],
        ),
        ClassEntry::new(
            Caster,
            Charisma,
            &["Sorcerer", "Warlock", "Bard"],
            &["Draconic Sorcery", "Fiend Patron", "College of Lore", "Wild Magic"],
        ),
        ClassEntry::new(
            Semicaster,
            Intelligence,
            &["Fighter", "Rogue", "Artificer"],
            &["Eldritch Knight", "Arcane Trickster", "Battle Smith"],
        ),
        ClassEntry::new(
            Semicaster,
            Wisdom,
            &["Ranger"],
            &["Hunter", "Gloom Stalker", "Beast Master"],
        ),
        ClassEntry::new(
            Semicaster,
            Charisma,
            &["Paladin"],
            &["Oath of Devotion", "Oath of Vengeance", "Oath of Glory"],
        ),
    ])
}

fn backgrounds() -> Vec<Background> {
    let rows: [(&str, Ability, Ability); 17] = [
        ("Acolyte", Wisdom, Charisma),
        ("Criminal", Dexterity, Charisma),
        ("Folk Hero", Strength, Constitution),
        ("Noble", Charisma, Wisdom),
        ("Scholar", Intelligence, Wisdom),
        ("Soldier", Strength, Constitution),
        ("Artisan", Intelligence, Dexterity),
        ("Charlatan", Charisma, Dexterity),
        ("Entertainer", Charisma, Dexterity),
        ("Farmer", Constitution, Wisdom),
        ("Guard", Strength, Wisdom),
        ("Guide", Wisdom, Dexterity),
        ("Hermit", Wisdom, Constitution),
        ("Merchant", Charisma, Intelligence),
        ("Sailor", Dexterity, Strength),
        ("Scribe", Intelligence, Dexterity),
        ("Wayfarer", Dexterity, Wisdom),
    ];
    rows.into_iter()
        .map(|(name, primary, tertiary)| Background::new(name, primary, tertiary))
        .collect()
}

fn feats() -> Vec<OriginFeat> {
    [
        ("Lucky", Charisma),
        ("Tough", Constitution),
        ("Alert", Dexterity),
        ("Skilled", Intelligence),
        ("Healer", Wisdom),
        ("Savage Attacker", Strength),
        ("Magic Initiate", Intelligence),
        ("Crafter", Dexterity),
        ("Musician", Charisma),
        ("Tavern Brawler", Strength),
    ]
    .into_iter()
    .map(|(name, ability)| OriginFeat::new(name, ability))
    .collect()
}
