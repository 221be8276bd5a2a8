//! Curated title catalogs for franchise and studio tagging.
//!
//! The catalogs are immutable, order-preserving, deduplicated lookup tables:
//! a list backs display/pattern order, a set backs membership tests. They are
//! built once at first use and never mutated. Consumers use them to surface
//! franchise flags when presenting results; they never feed model logic.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Immutable, order-preserving, deduplicated title lookup table.
///
/// Duplicate entries in the source list keep their first occurrence, so the
/// iteration order is stable for display while membership stays O(1).
#[derive(Debug)]
pub struct TitleCatalog {
    ordered: Vec<&'static str>,
    members: HashSet<&'static str>,
}

impl TitleCatalog {
    fn new(titles: &[&'static str]) -> Self {
        let mut members = HashSet::with_capacity(titles.len());
        let mut ordered = Vec::with_capacity(titles.len());
        for title in titles {
            if members.insert(*title) {
                ordered.push(*title);
            }
        }
        Self { ordered, members }
    }

    fn chained(lists: &[&[&'static str]]) -> Self {
        let combined: Vec<&'static str> = lists.iter().flat_map(|l| l.iter().copied()).collect();
        Self::new(&combined)
    }

    /// Exact membership test.
    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.members.contains(title)
    }

    /// Titles in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ordered.iter().copied()
    }

    /// Number of unique titles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// True when the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

const DISNEY_LIVE_ACTION_REMAKE_TITLES: &[&str] = &[
    "101 Dalmatians (1996)",
    "Alice in Wonderland (2010)",
    "Cinderella (2015)",
    "The Jungle Book (2016)",
    "Beauty and the Beast (2017)",
    "Dumbo (2019)",
    "Aladdin (2019)",
    "The Lion King (2019)",
    "Lady and the Tramp (2019)",
    "Mulan (2020)",
    "Pinocchio (2022)",
    "Peter Pan & Wendy (2023)",
    "The Little Mermaid (2023)",
    "Mufasa: The Lion King (2024)",
    "Snow White (2025)",
    "Lilo & Stitch (2025)",
    "Moana (2026)",
];

const OTHER_LIVE_ACTION_REMAKE_TITLES: &[&str] = &["How to Train Your Dragon (2025)"];

const MARVEL_MCU_TITLES: &[&str] = &[
    // Phase One
    "Iron Man",
    "The Incredible Hulk",
    "Iron Man 2",
    "Thor",
    "Captain America: The First Avenger",
    "The Avengers",
    // Phase Two
    "Iron Man 3",
    "Thor: The Dark World",
    "Captain America: The Winter Soldier",
    "Guardians of the Galaxy",
    "Avengers: Age of Ultron",
    "Ant-Man",
    // Phase Three
    "Captain America: Civil War",
    "Doctor Strange",
    "Guardians of the Galaxy Vol. 2",
    "Spider-Man: Homecoming",
    "Thor: Ragnarok",
    "Black Panther",
    "Avengers: Infinity War",
    "Ant-Man and the Wasp",
    "Captain Marvel",
    "Avengers: Endgame",
    "Spider-Man: Far From Home",
    // Phase Four
    "Black Widow",
    "Shang-Chi and the Legend of the Ten Rings",
    "Eternals",
    "Spider-Man: No Way Home",
    "Doctor Strange in the Multiverse of Madness",
    "Thor: Love and Thunder",
    "Black Panther: Wakanda Forever",
    // Phase Five
    "Ant-Man and the Wasp: Quantumania",
    "Guardians of the Galaxy Vol. 3",
    "The Marvels",
    "Deadpool & Wolverine",
    "Captain America: Brave New World",
    "Thunderbolts*",
    "The Fantastic Four: First Steps",
    // Phase Six and beyond
    "Spider-Man: Brand New Day",
    "Avengers: Doomsday",
    "Avengers: Secret Wars",
];

const DC_TITLES: &[&str] = &[
    "Man of Steel",
    "Batman v Superman: Dawn of Justice",
    "Suicide Squad",
    "Wonder Woman",
    "Justice League",
    "Aquaman",
    "Shazam!",
    "Birds of Prey",
    "Wonder Woman 1984",
    "Zack Snyder's Justice League",
    "The Suicide Squad",
    "Black Adam",
    "Shazam! Fury of the Gods",
    "The Flash",
    "Blue Beetle",
    "Aquaman and the Lost Kingdom",
];

const STAR_WARS_TITLES: &[&str] = &[
    "Star Wars: The Force Awakens",
    "Rogue One: A Star Wars Story",
    "Star Wars: The Last Jedi",
    "Solo: A Star Wars Story",
    "Star Wars: The Rise of Skywalker",
];

const FAST_FURIOUS_TITLES: &[&str] = &[
    "Fast Five",
    "Fast & Furious 6",
    "Furious 7",
    "The Fate of the Furious",
    "Hobbs & Shaw",
    "F9: The Fast Saga",
    "Fast X",
];

const FRANCHISE_SEQUEL_TITLES: &[&str] = &[
    // Jurassic World (sequels to Jurassic Park)
    "Jurassic World",
    "Jurassic World: Fallen Kingdom",
    "Jurassic World Dominion",
    // Despicable Me sequels/spinoffs
    "Despicable Me 2",
    "Despicable Me 3",
    "Minions",
    "Minions: The Rise of Gru",
    // Pixar and Illumination follow-ups
    "Finding Dory",
    "The Secret Life of Pets",
    "The Secret Life of Pets 2",
    // Other franchise sequels
    "Jumanji: Welcome to the Jungle",
    "Jumanji: The Next Level",
    "Twisters",
];

const WIZARDING_WORLD_TITLES: &[&str] = &[
    "Fantastic Beasts and Where to Find Them",
    "Fantastic Beasts: The Crimes of Grindelwald",
    "Fantastic Beasts: The Secrets of Dumbledore",
];

const MEDIA_ADAPTATION_TITLES: &[&str] = &[
    "Transformers",
    "Transformers: Revenge of the Fallen",
    "Transformers: Dark of the Moon",
    "Transformers: Age of Extinction",
    "Transformers: The Last Knight",
    "Bumblebee",
    "Transformers: Rise of the Beasts",
    "G.I. Joe: The Rise of Cobra",
    "G.I. Joe: Retaliation",
    "Teenage Mutant Ninja Turtles",
    "Teenage Mutant Ninja Turtles: Out of the Shadows",
    "The Smurfs",
    "The Smurfs 2",
    "Sonic the Hedgehog",
    "Sonic the Hedgehog 2",
    "Sonic the Hedgehog 3",
    "Detective Pikachu",
    "Angry Birds Movie",
    "The Angry Birds Movie 2",
    "Battleship",
    // Jurassic World franchise (sequels to the original Jurassic Park)
    "Jurassic World",
    "Jurassic World: Fallen Kingdom",
    "Jurassic World Dominion",
    // Despicable Me / Minions franchise
    "Despicable Me 2",
    "Despicable Me 3",
    "Minions",
    "Minions: The Rise of Gru",
    // Other animated sequels/franchises
    "The Secret Life of Pets",
    "The Secret Life of Pets 2",
    "Finding Dory",
    // Jumanji franchise
    "Jumanji: Welcome to the Jungle",
    "Jumanji: The Next Level",
    // James Bond franchise
    "Spectre",
    "No Time to Die",
    "Skyfall",
    // Video game adaptations
    "The Minecraft Movie",
    "Minecraft",
];

const NON_MCU_SUPERHERO_TITLES: &[&str] = &[
    // Sony Spider-Man (pre-MCU collaboration)
    "The Amazing Spider-Man",
    "The Amazing Spider-Man 2",
    "Venom",
    "Venom: Let There Be Carnage",
    "Morbius",
    "Madame Web",
    "Kraven the Hunter",
    // Fox X-Men / Fantastic Four
    "X-Men: Days of Future Past",
    "X-Men: Apocalypse",
    "Dark Phoenix",
    "The New Mutants",
    "Deadpool",
    "Deadpool 2",
    "Logan",
    "Fantastic Four (2015)",
    "Fantastic Four",
    // Warner Bros Batman
    "The Dark Knight",
    "The Dark Knight Rises",
    "Batman Begins",
    "Batman v Superman: Dawn of Justice",
    "Justice League",
    "Zack Snyder's Justice League",
    // Other DC
    "Superman Returns",
    "Green Lantern",
    "Catwoman",
    "Jonah Hex",
    // Other studios
    "The Punisher",
    "Punisher: War Zone",
    "Ghost Rider",
    "Ghost Rider: Spirit of Vengeance",
    "Blade: Trinity",
    "Elektra",
    "Daredevil",
    "The Spirit",
    "Hellboy",
    "Hellboy II: The Golden Army",
    "The Rocketeer",
    "The Phantom",
    "The Shadow",
    "Dick Tracy",
];

/// Disney live-action remakes.
pub static DISNEY_LIVE_ACTION_REMAKES: Lazy<TitleCatalog> =
    Lazy::new(|| TitleCatalog::new(DISNEY_LIVE_ACTION_REMAKE_TITLES));

/// Live-action remakes from other studios.
pub static OTHER_LIVE_ACTION_REMAKES: Lazy<TitleCatalog> =
    Lazy::new(|| TitleCatalog::new(OTHER_LIVE_ACTION_REMAKE_TITLES));

/// Marvel Cinematic Universe films.
pub static MARVEL_MCU_FILMS: Lazy<TitleCatalog> =
    Lazy::new(|| TitleCatalog::new(MARVEL_MCU_TITLES));

/// DC Extended Universe / DC films.
pub static DC_FILMS: Lazy<TitleCatalog> = Lazy::new(|| TitleCatalog::new(DC_TITLES));

/// Star Wars films (Disney era).
pub static STAR_WARS_FILMS: Lazy<TitleCatalog> =
    Lazy::new(|| TitleCatalog::new(STAR_WARS_TITLES));

/// Fast & Furious franchise.
pub static FAST_FURIOUS_FILMS: Lazy<TitleCatalog> =
    Lazy::new(|| TitleCatalog::new(FAST_FURIOUS_TITLES));

/// Sequels to established franchises outside the dedicated lists.
pub static FRANCHISE_SEQUELS: Lazy<TitleCatalog> =
    Lazy::new(|| TitleCatalog::new(FRANCHISE_SEQUEL_TITLES));

/// Wizarding World films.
pub static WIZARDING_WORLD_FILMS: Lazy<TitleCatalog> =
    Lazy::new(|| TitleCatalog::new(WIZARDING_WORLD_TITLES));

/// Adaptations of TV shows, games, toys, and other media.
pub static MEDIA_ADAPTATIONS: Lazy<TitleCatalog> =
    Lazy::new(|| TitleCatalog::new(MEDIA_ADAPTATION_TITLES));

/// Superhero films outside the MCU.
pub static NON_MCU_SUPERHERO_FILMS: Lazy<TitleCatalog> =
    Lazy::new(|| TitleCatalog::new(NON_MCU_SUPERHERO_TITLES));

/// All live-action remakes (Disney first, then other studios).
pub static ALL_LIVE_ACTION_REMAKES: Lazy<TitleCatalog> = Lazy::new(|| {
    TitleCatalog::chained(&[
        DISNEY_LIVE_ACTION_REMAKE_TITLES,
        OTHER_LIVE_ACTION_REMAKE_TITLES,
    ])
});

/// All superhero films (MCU, DC, then the rest). Titles shared between the
/// DC and non-MCU lists are deduplicated, keeping first occurrence.
pub static ALL_SUPERHERO_FILMS: Lazy<TitleCatalog> =
    Lazy::new(|| TitleCatalog::chained(&[MARVEL_MCU_TITLES, DC_TITLES, NON_MCU_SUPERHERO_TITLES]));

/// A named group of title patterns for flexible matching when exact titles
/// don't line up across data sources.
#[derive(Debug)]
pub struct PatternGroup {
    /// Stable group identifier (e.g. `superhero`, `star_wars`).
    pub name: &'static str,
    patterns: Vec<Regex>,
}

impl PatternGroup {
    fn new(name: &'static str, sources: &[&str]) -> Self {
        // Source patterns are static and known-valid; a pattern that fails to
        // compile is dropped rather than poisoning the whole group.
        let patterns = sources.iter().filter_map(|p| Regex::new(p).ok()).collect();
        Self { name, patterns }
    }

    /// True when any pattern in the group matches a substring of `title`.
    #[must_use]
    pub fn matches(&self, title: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(title))
    }

    /// Number of compiled patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True when no patterns compiled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Pattern groups for flexible title matching, mirroring the curated lists.
pub static REMAKE_PATTERNS: Lazy<Vec<PatternGroup>> = Lazy::new(|| {
    vec![
        PatternGroup::new(
            "live_action_remakes",
            &[
                "Beauty and the Beast",
                "Aladdin",
                "The Lion King",
                "Mulan",
                "Dumbo",
                "Cinderella",
                "The Jungle Book",
                "Alice in Wonderland",
                "Maleficent",
                "Christopher Robin",
                "Lady and the Tramp",
                "Pinocchio",
                "Peter Pan",
                "Snow White",
                "Mufasa",
                "Lilo.*Stitch",
                "Little.*Mermaid",
                "Moana",
                "How to Train Your Dragon",
            ],
        ),
        PatternGroup::new(
            "other_adaptations",
            &[
                "How to Train Your Dragon",
                "Sonic",
                "Pokemon",
                "Detective.*Pikachu",
                "Transformers",
                "G.I. Joe",
                "Teenage Mutant Ninja Turtles",
                "The Smurfs",
                "Garfield",
                "Scooby",
                "Tom.*Jerry",
                "Angry Birds",
                "Battleship",
                "Clue",
                "Monopoly",
                "Jurassic.*World",
                "Minions",
                "Despicable.*Me",
                "Finding.*Dory",
                "Jumanji",
                "Secret.*Life.*Pets",
                "Spectre",
                "Bond",
                "James.*Bond",
                "Minecraft",
            ],
        ),
        PatternGroup::new(
            "superhero",
            &[
                "Spider.*Man",
                "Batman",
                "Superman",
                "Wonder Woman",
                "Aquaman",
                "Flash",
                "Green.*Lantern",
                "Fantastic.*Four",
                "X.*Men",
                "Deadpool",
                "Wolverine",
                "Venom",
                "Ghost.*Rider",
                "Punisher",
                "Daredevil",
                "Hellboy",
                "Blade",
                "Iron.*Man",
                "Thor",
                "Captain.*America",
                "Hulk",
                "Avengers",
                "Guardians.*Galaxy",
                "Ant.*Man",
                "Doctor.*Strange",
                "Black.*Panther",
                "Captain.*Marvel",
                "Shazam",
                "Suicide.*Squad",
                "Justice.*League",
                "Dark.*Knight",
                "Man.*of.*Steel",
            ],
        ),
        PatternGroup::new(
            "star_wars",
            &[
                "Star Wars",
                "Rogue One",
                "Solo.*Star Wars",
                "Force Awakens",
                "Last Jedi",
                "Rise.*Skywalker",
            ],
        ),
        PatternGroup::new("fast_furious", &["Fast", "Furious"]),
        PatternGroup::new(
            "harry_potter",
            &["Harry Potter", "Hogwarts", "Fantastic Beasts"],
        ),
    ]
});

/// Title fragments that hint a film is a remake or franchise relaunch.
pub static REMAKE_TITLE_INDICATORS: Lazy<TitleCatalog> = Lazy::new(|| {
    TitleCatalog::new(&[
        "Reboot", "Remake", "Origins", "Begins", "Returns", "Forever", "Rising",
    ])
});

/// Look up a pattern group by name.
#[must_use]
pub fn pattern_group(name: &str) -> Option<&'static PatternGroup> {
    REMAKE_PATTERNS.iter().find(|g| g.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_membership_is_exact() {
        assert!(MARVEL_MCU_FILMS.contains("Avengers: Endgame"));
        assert!(!MARVEL_MCU_FILMS.contains("avengers: endgame"));
        assert!(!MARVEL_MCU_FILMS.contains("The Dark Knight"));
    }

    #[test]
    fn combined_superhero_catalog_dedups_shared_titles() {
        // "Justice League" appears in both the DC and non-MCU lists.
        let occurrences = ALL_SUPERHERO_FILMS
            .iter()
            .filter(|t| *t == "Justice League")
            .count();
        assert_eq!(occurrences, 1);
        assert!(ALL_SUPERHERO_FILMS.contains("Justice League"));
    }

    #[test]
    fn combined_superhero_catalog_preserves_mcu_first_order() {
        let first = ALL_SUPERHERO_FILMS.iter().next().unwrap();
        assert_eq!(first, "Iron Man");
    }

    #[test]
    fn media_adaptations_dedup_repeated_franchises() {
        let occurrences = MEDIA_ADAPTATIONS
            .iter()
            .filter(|t| *t == "Jurassic World")
            .count();
        assert_eq!(occurrences, 1);
    }

    #[test]
    fn live_action_remakes_combined_in_order() {
        assert!(ALL_LIVE_ACTION_REMAKES.contains("The Lion King (2019)"));
        assert!(ALL_LIVE_ACTION_REMAKES.contains("How to Train Your Dragon (2025)"));
        let last = ALL_LIVE_ACTION_REMAKES.iter().last().unwrap();
        assert_eq!(last, "How to Train Your Dragon (2025)");
    }

    #[test]
    fn superhero_patterns_match_variant_titles() {
        let group = pattern_group("superhero").unwrap();
        assert!(group.matches("Spider-Man: Across the Spider-Verse"));
        assert!(group.matches("The Batman"));
        assert!(!group.matches("Paddington 2"));
    }

    #[test]
    fn star_wars_patterns_span_subtitles() {
        let group = pattern_group("star_wars").unwrap();
        assert!(group.matches("Star Wars: The Force Awakens"));
        assert!(group.matches("Rogue One: A Star Wars Story"));
        assert!(!group.matches("Galaxy Quest"));
    }

    #[test]
    fn all_pattern_groups_compiled() {
        for group in REMAKE_PATTERNS.iter() {
            assert!(!group.is_empty(), "group {} lost its patterns", group.name);
        }
        assert!(pattern_group("no_such_group").is_none());
    }

    #[test]
    fn remake_indicators_are_fragments_not_titles() {
        assert!(REMAKE_TITLE_INDICATORS.contains("Begins"));
        assert_eq!(REMAKE_TITLE_INDICATORS.len(), 7);
    }

    #[test]
    fn catalogs_are_non_empty() {
        for catalog in [
            &*DISNEY_LIVE_ACTION_REMAKES,
            &*MARVEL_MCU_FILMS,
            &*DC_FILMS,
            &*STAR_WARS_FILMS,
            &*FAST_FURIOUS_FILMS,
            &*FRANCHISE_SEQUELS,
            &*WIZARDING_WORLD_FILMS,
            &*MEDIA_ADAPTATIONS,
            &*NON_MCU_SUPERHERO_FILMS,
        ] {
            assert!(!catalog.is_empty());
        }
    }
}
