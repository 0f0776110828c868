//! Built-in cultures and vowel names.

use super::{Culture, NamePools, SyllableCount, VowelNameTable, VowelNames};

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn pools(start: &[&str], middle: &[&str], end: &[&str], presets: &[&str]) -> NamePools {
    NamePools {
        start: list(start),
        middle: list(middle),
        end: list(end),
        presets: list(presets),
    }
}

/// The five default cultures, in table order.
pub fn cultures() -> Vec<Culture> {
    vec![aquilonian(), oriental(), lusitanian(), qharan(), nordheimer()]
}

fn aquilonian() -> Culture {
    Culture {
        name: "Aquilonian".to_string(),
        syllables: SyllableCount::between(2, 3),
        male: pools(
            &["Ar", "Ca", "Mer", "Mor", "Per", "Lan", "Vi", "Ig", "Ka"],
            &["bel", "cal", "gal", "mor", "tar", "uth", "win", "nor"],
            &["gon", "loc", "lon", "din", "der", "lan", "thur", "gaw"],
            &[
                "Lancelot", "Gawain", "Percival", "Galahad", "Kay", "Bedivere", "Tristan",
                "Gareth", "Lamorak", "Bors", "Ector", "Uther", "Pellinore", "Caradoc",
                "Yvain", "Dinadan", "Geraint", "Owain", "Tancred", "Reynard",
            ],
        ),
        female: pools(
            &["An", "Mor", "Gua", "Hel", "Is", "Ela", "Vi", "Gly", "Ca"],
            &["a", "e", "i", "o", "ia", "ora", "ella", "lyn", "thea"],
            &["wen", "lin", "vyr", "min", "sir", "lott", "ryn", "dell"],
            &[
                "Guinevere", "Morgan", "Igraine", "Elaine", "Lynette", "Isolde", "Nimue",
                "Viviane", "Enide", "Laudine", "Blanchefleur", "Ragnell", "Angharad",
                "Ermengarde", "Olwen", "Rotrud",
            ],
        ),
        titles: Vec::new(),
        title_chance: 0.0,
    }
}

fn oriental() -> Culture {
    Culture {
        name: "Oriental".to_string(),
        syllables: SyllableCount::between(2, 5),
        male: pools(
            &[
                "Kai", "Ryu", "Ken", "Shin", "Taka", "Hiro", "Zhe", "Jin", "Chen", "Bao",
                "Feng", "Wei", "Som", "Pon", "Kham", "Seng",
            ],
            &[
                "shu", "kun", "suke", "nori", "hiko", "long", "ming", "hua", "zhong", "sam",
                "phet", "vong",
            ],
            &[
                "shi", "ro", "to", "ki", "ji", "tao", "lin", "jun", "bin", "rak", "nan", "det",
            ],
            &[
                "Akira", "Daisuke", "Haruki", "Hiroshi", "Kenji", "Takeshi", "Ryota",
                "Wei Ming", "Li Jun", "Zhang Wei", "Bao Long", "Somchai", "Khamsing",
            ],
        ),
        female: pools(
            &[
                "Mei", "Saku", "Aki", "Haru", "Nao", "Rei", "Hua", "Lin", "Yue", "Jing",
                "Lan", "Phim", "Vien", "Nou",
            ],
            &["mi", "ko", "ra", "yu", "na", "rin", "ying", "xia", "li", "tha", "ly", "vi"],
            &["ko", "mi", "ka", "ri", "na", "mei", "ling", "yan", "xue", "ny", "thy", "vy"],
            &[
                "Sakura", "Yuki", "Haruka", "Aiko", "Naomi", "Mei Lin", "Xiu Ying",
                "Hua Mei", "Lan Yue", "Malee", "Phimchan",
            ],
        ),
        titles: Vec::new(),
        title_chance: 0.0,
    }
}

fn lusitanian() -> Culture {
    Culture {
        name: "Lusitanian".to_string(),
        syllables: SyllableCount::between(2, 5),
        male: pools(
            &["Al", "Fer", "Mar", "Gui", "Ema", "Ro", "Dal", "Gio", "Alv", "Vin"],
            &["an", "di", "do", "ro", "ma", "ber", "car", "ver", "ri", "se"],
            &["io", "so", "to", "ar", "o", "ino", "es", "el", "al"],
            &[
                "Afonso", "Rodrigo", "Mateus", "Tomas", "João", "Lorenzo", "Henrique",
                "Gaspar", "Rui", "Vicente", "Guilherme", "Bernardo", "Marco", "Pietro",
                "Vittorio", "Duarte",
            ],
        ),
        female: pools(
            &["Ma", "Al", "Ro", "Li", "Eu", "An", "Be", "Ca", "El", "Si"],
            &["ri", "sa", "ta", "di", "bo", "lis", "ra", "me", "do", "co"],
            &["na", "lia", "ta", "ra", "ia", "la", "ria", "ela", "sa", "nda"],
            &[
                "Isabela", "Sofia", "Lúcia", "Teresa", "Helena", "Beatriz", "Mariana",
                "Luísa", "Catarina", "Amélia", "Carlota", "Francesca", "Valentina",
                "Chiara", "Leonor",
            ],
        ),
        titles: Vec::new(),
        title_chance: 0.0,
    }
}

fn qharan() -> Culture {
    let start = ["Al", "El", "Qa", "Sa", "Za", "Ba", "Na", "Ma", "Ka", "Ha"];
    let middle = ["li", "ri", "si", "mi", "di", "fi", "hi", "zi", "ni", "qi"];
    let end = ["m", "r", "d", "f", "l", "n", "b", "h", "k", "q"];
    Culture {
        name: "Q'haran".to_string(),
        syllables: SyllableCount::exactly(3),
        male: pools(
            &start,
            &middle,
            &end,
            &[
                "Malik", "Hassan", "Karim", "Jamal", "Rashid", "Tariq", "Zafar", "Qadir",
                "Nasir", "Khalil", "Hakim", "Samir", "Al-Hazir", "Nur-Din", "Badr-El",
                "Shams-Din", "Imad-Din",
            ],
        ),
        female: pools(
            &start,
            &middle,
            &end,
            &[
                "Amira", "Layla", "Nadia", "Samira", "Jamila", "Zahra", "Malika", "Safiya",
                "Rania", "Dalila", "Latifa", "Qamara", "Nur-El", "Qamar-Din", "Shams-El",
                "Zain-El",
            ],
        ),
        titles: list(&[
            "al-Din", "el-Haq", "al-Nur", "el-Qadir", "al-Azim", "el-Hakim", "al-Rashid",
            "el-Karim", "al-Malik",
        ]),
        title_chance: 0.3,
    }
}

fn nordheimer() -> Culture {
    Culture {
        name: "Nordheimer".to_string(),
        syllables: SyllableCount::between(2, 4),
        male: pools(
            &["Bjor", "Ulf", "Sig", "Thor", "Hal", "Gunn", "Ey", "Rag", "Sven", "Ket"],
            &["ar", "vi", "mun", "gri", "ste", "bran"],
            &["n", "ulf", "ar", "stein", "mund", "rik", "geir", "bjorn"],
            &[
                "Bjorn", "Leif", "Ragnar", "Sigurd", "Gunnar", "Halvard", "Eirik", "Torvald",
                "Ulfric", "Ketil", "Asmund", "Hrolf",
            ],
        ),
        female: pools(
            &["Ast", "Sig", "Ing", "Hel", "Ran", "Fre", "Gud", "Thy", "Sol", "Al"],
            &["ri", "vei", "hil", "ve", "run", "dis"],
            &["rid", "a", "dis", "hild", "veig", "run", "borg", "fa"],
            &[
                "Astrid", "Sigrid", "Ingrid", "Freydis", "Gudrun", "Solveig", "Thyra",
                "Ragnhild", "Helga", "Alfhild", "Ylva",
            ],
        ),
        titles: Vec::new(),
        title_chance: 0.0,
    }
}

/// The default vowel-name table: A, E, I, O, U.
pub fn vowel_names() -> VowelNameTable {
    let entry = |vowel: char, male: &[&str], female: &[&str]| VowelNames {
        vowel,
        male: list(male),
        female: list(female),
    };
    VowelNameTable::new(vec![
        entry(
            'A',
            &["Aldric", "Anselm", "Arno", "Ambrose", "Alaric"],
            &["Adela", "Aveline", "Agnes", "Alys", "Astra"],
        ),
        entry(
            'E',
            &["Edric", "Emeric", "Everard", "Elias", "Ewan"],
            &["Edith", "Elinor", "Emma", "Estrid", "Elowen"],
        ),
        entry(
            'I',
            &["Ivo", "Ingram", "Isidor", "Ithel", "Ivar"],
            &["Ida", "Imogen", "Ilse", "Isaura", "Iona"],
        ),
        entry(
            'O',
            &["Osric", "Odo", "Oswin", "Orrin", "Otto"],
            &["Odile", "Olwen", "Osanna", "Oriel", "Orla"],
        ),
        entry(
            'U',
            &["Ulric", "Urien", "Ubald", "Uther", "Ulf"],
            &["Ursula", "Una", "Ulla", "Udela", "Undine"],
        ),
    ])
}
