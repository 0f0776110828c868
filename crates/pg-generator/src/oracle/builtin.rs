//! The built-in oracle deck.

use pg_core::{MeaningCategory, MeaningSet, OracleCard};

fn meanings(texts: [&str; 5]) -> MeaningSet {
    MeaningCategory::ALL
        .into_iter()
        .zip(texts)
        .fold(MeaningSet::new(), |set, (category, text)| set.with(category, text))
}

fn card(title: &str, upright: [&str; 5], reversed: [&str; 5]) -> OracleCard {
    OracleCard {
        title: title.to_string(),
        upright_meaning: meanings(upright),
        reversed_meaning: meanings(reversed),
    }
}

/// Ten cards, each with all five categories in both orientations.
///
/// Meaning order: person, creature or trap, place, treasure, situation.
pub fn cards() -> Vec<OracleCard> {
    vec![
        card(
            "BALANCE",
            [
                "A fair-minded person who can see multiple perspectives.",
                "A pressure plate that springs when weight shifts.",
                "A crossroads shrine with two offering bowls.",
                "A set of brass merchant's scales, true to the grain.",
                "A situation where maintaining balance is important.",
            ],
            [
                "A judgmental person ignoring one perspective.",
                "A beast that strikes whoever is weakest.",
                "A bridge that sags badly toward one bank.",
                "A loaded die that always favours its owner.",
                "Something being over- or undervalued.",
            ],
        ),
        card(
            "BLADE",
            [
                "A veteran duellist looking for a worthy match.",
                "A tripwire strung with hooked knives.",
                "A smithy where the forge never cools.",
                "A sword with a maker's mark nobody recognises.",
                "A quarrel that can only be settled by steel.",
            ],
            [
                "A coward who hires others to fight.",
                "A rusted mechanism that fires late and wild.",
                "A battlefield overgrown and forgotten.",
                "A broken blade whose hilt hides a map.",
                "Violence that solves nothing and spreads.",
            ],
        ),
        card(
            "CROWN",
            [
                "A noble who truly serves their people.",
                "A lion that guards a ruined throne room.",
                "A palace open to petitioners at dawn.",
                "A circlet that grants its wearer a clear voice.",
                "A rightful claim waiting to be made.",
            ],
            [
                "A pretender propped up by bought loyalty.",
                "A cursed seat that binds whoever sits in it.",
                "A court where every smile is a threat.",
                "A gilded crown of painted lead.",
                "Authority used for petty ends.",
            ],
        ),
        card(
            "DOOR",
            [
                "A gatekeeper who asks one fair question.",
                "A mimic that looks exactly like an exit.",
                "A threshold between two very different rooms.",
                "A key that opens any lock once.",
                "An opportunity that will not come again.",
            ],
            [
                "A jailer who has lost the key.",
                "A portcullis that drops behind the party.",
                "A sealed vault with no visible seam.",
                "A lockbox that is empty but very heavy.",
                "A path that closes as soon as it is chosen.",
            ],
        ),
        card(
            "EYE",
            [
                "A seer whose visions are always literal.",
                "A floating watcher that reports to someone.",
                "A tower with a view of the whole valley.",
                "A lens that shows heat instead of light.",
                "A secret about to be revealed.",
            ],
            [
                "A spy who has been spotted by everyone.",
                "A glyph that blinds whoever reads it.",
                "A hall of mirrors that shows false exits.",
                "A crystal that shows only what you fear.",
                "Something hidden in plain sight.",
            ],
        ),
        card(
            "FLAME",
            [
                "A zealot whose conviction warms a crowd.",
                "A salamander curled in the hearth.",
                "A lighthouse whose keeper never sleeps.",
                "An ever-burning coal in an iron cage.",
                "A passion that drives everything forward.",
            ],
            [
                "An arsonist who thinks they are a saviour.",
                "A gas pocket that ignites at a spark.",
                "A village still smoking from last night.",
                "Ashes that still hold the shape of a letter.",
                "Anger that burns out of control.",
            ],
        ),
        card(
            "HOURGLASS",
            [
                "An elder who remembers how this began.",
                "A sand trap that fills the room slowly.",
                "A clock tower that strikes thirteen.",
                "A timepiece that runs a minute ahead.",
                "A deadline that everyone is racing.",
            ],
            [
                "A messenger who arrives too late.",
                "A creature that ages whatever it touches.",
                "A ruin where time runs backwards.",
                "A pocket watch stopped at someone's death.",
                "Delay that turns a small problem into a large one.",
            ],
        ),
        card(
            "LANTERN",
            [
                "A guide who knows the safe roads.",
                "Will-o'-wisps that lead toward solid ground.",
                "A roadside inn with every window lit.",
                "A shuttered lantern that never runs out of oil.",
                "A small kindness in a dark hour.",
            ],
            [
                "A false guide leading travellers astray.",
                "Lures that draw the curious into a bog.",
                "A lamp-lit alley where the lights go out.",
                "A lantern that attracts moths and worse.",
                "Hope that turns out to be misplaced.",
            ],
        ),
        card(
            "SERPENT",
            [
                "A healer with an unsettling bedside manner.",
                "A giant snake that hoards warm stones.",
                "An apothecary's cellar full of jars.",
                "A vial of antivenom for one poison only.",
                "A transformation that sheds an old life.",
            ],
            [
                "A confidant who sells every secret.",
                "A poisoned needle in a drawer handle.",
                "A marsh where the paths move at night.",
                "A ring that slowly tightens.",
                "Betrayal from someone close.",
            ],
        ),
        card(
            "WHEEL",
            [
                "A gambler on a winning streak.",
                "A rolling boulder down a sloped corridor.",
                "A market fair that moves town to town.",
                "A lucky coin that lands true when it matters.",
                "A change of fortune for the better.",
            ],
            [
                "A debtor running out of places to hide.",
                "A grinding mill that never stops turning.",
                "A mill town where the river has dried up.",
                "A prize that changes hands too often.",
                "A run of bad luck that repeats itself.",
            ],
        ),
    ]
}
