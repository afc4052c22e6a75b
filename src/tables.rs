//! Static variant-name tables for the sprite build
//!
//! A table entry's (column, row) position is the block address of that
//! variant on its sheet, so these lists are part of the asset contract:
//! reordering or resizing a row silently shifts every later cell assignment.
//! Edit them only in lockstep with the sheet images.

/// Sheets loaded by the bulk build, in load order.
pub const SPRITESHEETS: &[&str] = &[
    "lineart",
    "lineartdf",
    "lineartdead",
    "eyes",
    "eyes2",
    "skin",
    "scars",
    "missingscars",
    "medcatherbs",
    "collars",
    "bellcollars",
    "bowcollars",
    "nyloncollars",
    "singlecolours",
    "speckledcolours",
    "tabbycolours",
    "bengalcolours",
    "marbledcolours",
    "rosettecolours",
    "smokecolours",
    "tickedcolours",
    "mackerelcolours",
    "classiccolours",
    "sokokecolours",
    "agouticolours",
    "singlestripecolours",
    "maskedcolours",
    "shadersnewwhite",
    "lightingnew",
    "whitepatches",
    "tortiepatchesmasks",
    "fademask",
    "fadestarclan",
    "fadedarkforest",
];

/// Eye colours on the `eyes` and `eyes2` sheets.
pub const EYE_COLOURS: &[&[&str]] = &[
    &[
        "YELLOW",
        "AMBER",
        "HAZEL",
        "PALEGREEN",
        "GREEN",
        "BLUE",
        "DARKBLUE",
        "GREY",
        "CYAN",
        "EMERALD",
        "HEATHERBLUE",
        "SUNLITICE",
    ],
    &[
        "COPPER",
        "SAGE",
        "COBALT",
        "PALEBLUE",
        "BRONZE",
        "SILVER",
        "PALEYELLOW",
        "GOLD",
        "GREENYELLOW",
    ],
];

/// White patch variants on the `whitepatches` sheet.
pub const WHITE_PATCHES: &[&[&str]] = &[
    &[
        "FULLWHITE",
        "ANY",
        "TUXEDO",
        "LITTLE",
        "COLOURPOINT",
        "VAN",
        "ANYTWO",
        "MOON",
        "PHANTOM",
        "POWDER",
        "BLEACHED",
        "SAVANNAH",
        "FADESPOTS",
        "PEBBLESHINE",
    ],
    &[
        "EXTRA",
        "ONEEAR",
        "BROKEN",
        "LIGHTTUXEDO",
        "BUZZARDFANG",
        "RAGDOLL",
        "LIGHTSONG",
        "VITILIGO",
        "BLACKSTAR",
        "PIEBALD",
        "CURVED",
        "PETAL",
        "SHIBAINU",
        "OWL",
    ],
    &[
        "TIP",
        "FANCY",
        "FRECKLES",
        "RINGTAIL",
        "HALFFACE",
        "PANTSTWO",
        "GOATEE",
        "VITILIGOTWO",
        "PAWS",
        "MITAINE",
        "BROKENBLAZE",
        "SCOURGE",
        "DIVA",
        "BEARD",
    ],
    &[
        "TAIL",
        "BLAZE",
        "PRINCE",
        "BIB",
        "VEE",
        "UNDERS",
        "HONEY",
        "FAROFA",
        "DAMIEN",
        "MISTER",
        "BELLY",
        "TAILTIP",
        "TOES",
        "TOPCOVER",
    ],
    &[
        "APRON",
        "CAPSADDLE",
        "MASKMANTLE",
        "SQUEAKS",
        "STAR",
        "TOESTAIL",
        "RAVENPAW",
        "PANTS",
        "REVERSEPANTS",
        "SKUNK",
        "KARPATI",
        "HALFWHITE",
        "APPALOOSA",
        "DAPPLEPAW",
    ],
    &[
        "HEART",
        "LILTWO",
        "GLASS",
        "MOORISH",
        "SEPIAPOINT",
        "MINKPOINT",
        "SEALPOINT",
        "MAO",
        "LUNA",
        "CHESTSPECK",
        "WINGS",
        "PAINTED",
        "HEARTTWO",
        "WOODPECKER",
    ],
    &[
        "BOOTS",
        "MISS",
        "COW",
        "COWTWO",
        "BUB",
        "BOWTIE",
        "MUSTACHE",
        "REVERSEHEART",
        "SPARROW",
        "VEST",
        "LOVEBUG",
        "TRIXIE",
        "SAMMY",
        "SPARKLE",
    ],
    &[
        "RIGHTEAR",
        "LEFTEAR",
        "ESTRELLA",
        "SHOOTINGSTAR",
        "EYESPOT",
        "REVERSEEYE",
        "FADEBELLY",
        "FRONT",
        "BLOSSOMSTEP",
        "PEBBLE",
        "TAILTWO",
        "BUDDY",
        "BACKSPOT",
        "EYEBAGS",
    ],
    &[
        "BULLSEYE",
        "FINN",
        "DIGIT",
        "KROPKA",
        "FCTWO",
        "FCONE",
        "MIA",
        "SCAR",
        "BUSTER",
        "SMOKEY",
        "HAWKBLAZE",
        "CAKE",
        "ROSINA",
        "PRINCESS",
    ],
    &["LOCKET", "BLAZEMASK", "TEARS", "DOUGIE"],
];

/// Pelt colours; every pattern sheet shares this layout.
pub const PELT_COLOURS: &[&[&str]] = &[
    &[
        "WHITE", "PALEGREY", "SILVER", "GREY", "DARKGREY", "GHOST", "BLACK",
    ],
    &[
        "CREAM",
        "PALEGINGER",
        "GOLDEN",
        "GINGER",
        "DARKGINGER",
        "SIENNA",
    ],
    &[
        "LIGHTBROWN",
        "LILAC",
        "BROWN",
        "GOLDEN-BROWN",
        "DARKBROWN",
        "CHOCOLATE",
    ],
];

/// Pelt pattern sheets and the sprite-name prefix each contributes.
pub const PELT_SHEETS: &[(&str, &str)] = &[
    ("singlecolours", "single"),
    ("tabbycolours", "tabby"),
    ("marbledcolours", "marbled"),
    ("rosettecolours", "rosette"),
    ("smokecolours", "smoke"),
    ("tickedcolours", "ticked"),
    ("speckledcolours", "speckled"),
    ("bengalcolours", "bengal"),
    ("mackerelcolours", "mackerel"),
    ("classiccolours", "classic"),
    ("sokokecolours", "sokoke"),
    ("agouticolours", "agouti"),
    ("singlestripecolours", "singlestripe"),
    ("maskedcolours", "masked"),
];

/// Tortoiseshell mask variants on the `tortiepatchesmasks` sheet.
pub const TORTIE_MASKS: &[&[&str]] = &[
    &[
        "ONE", "TWO", "THREE", "FOUR", "REDTAIL", "DELILAH", "HALF", "STREAK", "MASK", "SMOKE",
    ],
    &[
        "MINIMALONE",
        "MINIMALTWO",
        "MINIMALTHREE",
        "MINIMALFOUR",
        "OREO",
        "SWOOP",
        "CHIMERA",
        "CHEST",
        "ARMTAIL",
        "GRUMPYFACE",
    ],
    &[
        "MOTTLED",
        "SIDEMASK",
        "EYEDOT",
        "BANDANA",
        "PACMAN",
        "STREAMSTRIKE",
        "SMUDGED",
        "DAUB",
        "EMBER",
        "BRIE",
    ],
    &[
        "ORIOLE",
        "ROBIN",
        "BRINDLE",
        "PAIGE",
        "ROSETAIL",
        "SAFI",
        "DAPPLENIGHT",
        "BLANKET",
        "BELOVED",
        "BODY",
    ],
    &["SHILOH", "FRECKLED", "HEARTBEAT"],
];

/// Skin colours on the `skin` sheet.
pub const SKIN_COLOURS: &[&[&str]] = &[
    &["BLACK", "RED", "PINK", "DARKBROWN", "BROWN", "LIGHTBROWN"],
    &["DARK", "DARKGREY", "GREY", "DARKSALMON", "SALMON", "PEACH"],
    &[
        "DARKMARBLED",
        "MARBLED",
        "LIGHTMARBLED",
        "DARKBLUE",
        "BLUE",
        "LIGHTBLUE",
    ],
];

/// Scar variants on the `scars` sheet.
pub const SCARS: &[&[&str]] = &[
    &[
        "ONE",
        "TWO",
        "THREE",
        "MANLEG",
        "BRIGHTHEART",
        "MANTAIL",
        "BRIDGE",
        "RIGHTBLIND",
        "LEFTBLIND",
        "BOTHBLIND",
        "BURNPAWS",
        "BURNTAIL",
    ],
    &[
        "BURNBELLY",
        "BEAKCHEEK",
        "BEAKLOWER",
        "BURNRUMP",
        "CATBITE",
        "RATBITE",
        "FROSTFACE",
        "FROSTTAIL",
        "FROSTMITT",
        "FROSTSOCK",
        "QUILLCHUNK",
        "QUILLSCRATCH",
    ],
    &[
        "TAILSCAR",
        "SNOUT",
        "CHEEK",
        "SIDE",
        "THROAT",
        "TAILBASE",
        "BELLY",
        "TOETRAP",
        "SNAKE",
        "LEGBITE",
        "NECKBITE",
        "FACE",
    ],
    &[
        "HINDLEG",
        "BACK",
        "QUILLSIDE",
        "SCRATCHSIDE",
        "TOE",
        "BEAKSIDE",
        "CATBITETWO",
        "SNAKETWO",
        "FOUR",
    ],
];

/// Missing-body-part markers on the `missingscars` sheet.
///
/// These share the `scars` sprite-name prefix with [`SCARS`].
pub const MISSING_PARTS: &[&[&str]] = &[&[
    "LEFTEAR",
    "RIGHTEAR",
    "NOTAIL",
    "NOLEFTEAR",
    "NORIGHTEAR",
    "NOEAR",
    "HALFTAIL",
    "NOPAW",
]];

/// Herb accessories on the `medcatherbs` sheet.
///
/// Row 2 is empty on purpose: that row of the sheet holds the wild
/// accessories ([`WILD_ACCESSORIES`]) plus the dried-herbs cell at block
/// (5, 2), both sliced separately.
pub const HERB_ACCESSORIES: &[&[&str]] = &[
    &[
        "MAPLE LEAF",
        "HOLLY",
        "BLUE BERRIES",
        "FORGET ME NOTS",
        "RYE STALK",
        "LAUREL",
    ],
    &["BLUEBELLS", "NETTLE", "POPPY", "LAVENDER", "HERBS", "PETALS"],
    &[],
    &["OAK LEAVES", "CATMINT", "MAPLE SEED", "JUNIPER"],
];

/// Wild accessories; stored on row 2 of the `medcatherbs` sheet.
pub const WILD_ACCESSORIES: &[&[&str]] = &[&[
    "RED FEATHERS",
    "BLUE FEATHERS",
    "JAY FEATHERS",
    "MOTH WINGS",
    "CICADA WINGS",
]];

/// Plain collars on the `collars` sheet.
pub const COLLARS: &[&[&str]] = &[
    &["CRIMSON", "BLUE", "YELLOW", "CYAN", "RED", "LIME"],
    &["GREEN", "RAINBOW", "BLACK", "SPIKES", "WHITE"],
    &["PINK", "PURPLE", "MULTI", "INDIGO"],
];

/// Bell collars on the `bellcollars` sheet.
pub const BELL_COLLARS: &[&[&str]] = &[
    &[
        "CRIMSONBELL",
        "BLUEBELL",
        "YELLOWBELL",
        "CYANBELL",
        "REDBELL",
        "LIMEBELL",
    ],
    &[
        "GREENBELL",
        "RAINBOWBELL",
        "BLACKBELL",
        "SPIKESBELL",
        "WHITEBELL",
    ],
    &["PINKBELL", "PURPLEBELL", "MULTIBELL", "INDIGOBELL"],
];

/// Bow collars on the `bowcollars` sheet.
pub const BOW_COLLARS: &[&[&str]] = &[
    &[
        "CRIMSONBOW",
        "BLUEBOW",
        "YELLOWBOW",
        "CYANBOW",
        "REDBOW",
        "LIMEBOW",
    ],
    &["GREENBOW", "RAINBOWBOW", "BLACKBOW", "SPIKESBOW", "WHITEBOW"],
    &["PINKBOW", "PURPLEBOW", "MULTIBOW", "INDIGOBOW"],
];

/// Nylon collars on the `nyloncollars` sheet.
pub const NYLON_COLLARS: &[&[&str]] = &[
    &[
        "CRIMSONNYLON",
        "BLUENYLON",
        "YELLOWNYLON",
        "CYANNYLON",
        "REDNYLON",
        "LIMENYLON",
    ],
    &[
        "GREENNYLON",
        "RAINBOWNYLON",
        "BLACKNYLON",
        "SPIKESNYLON",
        "WHITENYLON",
    ],
    &["PINKNYLON", "PURPLENYLON", "MULTINYLON", "INDIGONYLON"],
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_no_duplicates(table: &[&[&str]], label: &str) {
        let mut seen = HashSet::new();
        for row in table {
            for entry in *row {
                assert!(seen.insert(*entry), "{}: duplicate entry '{}'", label, entry);
            }
        }
    }

    #[test]
    fn test_variant_tables_have_unique_entries() {
        assert_no_duplicates(EYE_COLOURS, "EYE_COLOURS");
        assert_no_duplicates(WHITE_PATCHES, "WHITE_PATCHES");
        assert_no_duplicates(PELT_COLOURS, "PELT_COLOURS");
        assert_no_duplicates(TORTIE_MASKS, "TORTIE_MASKS");
        assert_no_duplicates(SKIN_COLOURS, "SKIN_COLOURS");
        assert_no_duplicates(SCARS, "SCARS");
        assert_no_duplicates(MISSING_PARTS, "MISSING_PARTS");
        assert_no_duplicates(HERB_ACCESSORIES, "HERB_ACCESSORIES");
        assert_no_duplicates(WILD_ACCESSORIES, "WILD_ACCESSORIES");
        assert_no_duplicates(COLLARS, "COLLARS");
        assert_no_duplicates(BELL_COLLARS, "BELL_COLLARS");
        assert_no_duplicates(BOW_COLLARS, "BOW_COLLARS");
        assert_no_duplicates(NYLON_COLLARS, "NYLON_COLLARS");
    }

    #[test]
    fn test_scar_and_missing_part_names_do_not_collide() {
        // Both tables feed the shared `scars` prefix.
        let mut seen = HashSet::new();
        for row in SCARS.iter().chain(MISSING_PARTS) {
            for entry in *row {
                assert!(seen.insert(*entry), "duplicate scar name '{}'", entry);
            }
        }
    }

    #[test]
    fn test_spritesheet_list_is_unique() {
        let unique: HashSet<_> = SPRITESHEETS.iter().collect();
        assert_eq!(unique.len(), SPRITESHEETS.len());
        assert_eq!(SPRITESHEETS.len(), 34);
    }

    #[test]
    fn test_pelt_sheets_are_loaded_and_prefixes_unique() {
        let loaded: HashSet<_> = SPRITESHEETS.iter().collect();
        let mut prefixes = HashSet::new();
        for (sheet, prefix) in PELT_SHEETS {
            assert!(loaded.contains(sheet), "pelt sheet '{}' not loaded", sheet);
            assert!(prefixes.insert(*prefix), "duplicate prefix '{}'", prefix);
        }
    }

    #[test]
    fn test_collar_tables_share_one_layout() {
        for table in [BELL_COLLARS, BOW_COLLARS, NYLON_COLLARS] {
            assert_eq!(table.len(), COLLARS.len());
            for (row, base_row) in table.iter().zip(COLLARS) {
                assert_eq!(row.len(), base_row.len());
            }
        }
    }
}
