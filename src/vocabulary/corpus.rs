//! Secondary canonicalization tables applied to an assembled corpus.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The consolidated rating-board scale, in scan priority order.
pub const RATING_BOARD_SCALE: [&str; 7] = ["RP", "EC", "E", "E10", "T", "M", "AO"];

static PLATFORM_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Legacy Mobile Device", "Mobile"),
        ("PlayStation", "PS1"),
        ("PlayStation 2", "PS2"),
        ("PlayStation 3", "PS3"),
        ("PlayStation 4", "PS4"),
        ("PlayStation 5", "PS5"),
        ("PlayStation Vita", "VITA"),
        ("PS Vita", "VITA"),
        ("PlayStation Portable", "PSP"),
        ("PlayStation VR", "PSVR"),
        ("PlayStation VR2", "PSVR2"),
        ("Dreamcast", "DC"),
        ("Game Boy", "GB"),
        ("Game Boy Color", "GBC"),
        ("Game Boy Advance", "GBA"),
        ("Nintendo GameCube", "GCN"),
        ("GameCube", "GCN"),
        ("Nintendo 3DS", "3DS"),
        ("Nintendo 64", "N64"),
        ("Nintendo DS", "DS"),
        ("Nintendo DSi", "DSi"),
        ("Nintendo Switch", "NS"),
        ("Sega Game Gear", "GG"),
        ("Game Gear", "GG"),
        ("Sega Mega Drive/Genesis", "GEN"),
        ("Genesis", "GEN"),
        ("SEGA 32X", "32X"),
        ("SEGA CD", "SCD"),
        ("Sega Master System/Mark III", "SMS"),
        ("SEGA Master System", "SMS"),
        ("Sega Saturn", "SAT"),
        ("Xbox", "XBOX"),
        ("Xbox 360", "XB360"),
        ("Xbox One", "XB1"),
        ("Xbox Series S/X", "XSX"),
        ("Xbox Series X|S", "XSX"),
        ("Family Computer", "FC"),
        ("Nintendo Famicom", "FC"),
        ("Famicom", "FC"),
        ("Family Computer Disk System", "FDS"),
        ("Super Famicom", "SFC"),
        ("Nintendo Entertainment System", "NES"),
        ("Super Nintendo Entertainment System", "SNES"),
        ("PC (Microsoft Windows)", "Windows"),
        ("New Nintendo 3DS", "New 3DS"),
        ("Nintendo 64DD", "64DD"),
        ("Turbografx-16/PC Engine CD", "TGCD/PCECD"),
        ("TurboGrafx-16/PC Engine", "TG16/PCE"),
        ("Web browser", "Browser"),
        ("Neo Geo CD", "NGCD"),
        ("ZX Spectrum", "ZXS"),
        ("3DO Interactive Multiplayer", "3DO"),
        ("Philips CD-i", "CDI"),
        ("Amiga CD32", "CD32"),
        ("N-Gage", "NGAGE"),
        ("Game.com", "GCOM"),
        ("Commodore VIC-20", "VIC"),
        ("Commodore C64/128/MAX", "C64"),
        ("Commodore 16", "C16"),
        ("Atari 2600", "A26"),
        ("Atari 5200", "A52"),
        ("Atari 7800", "A78"),
        ("Atari Lynx", "LYNX"),
        ("Atari Jaguar", "JAG"),
        ("Atari Jaguar CD", "JCD"),
        ("Odyssey 2 / Videopac G7000", "ODY2"),
        ("Amiga", "AMI"),
        ("Amazon Fire TV", "FIRE"),
        ("Oculus Rift", "RIFT"),
        ("Vectrex", "VECT"),
        ("Neo Geo AES", "AES"),
        ("Neo Geo Pocket", "NGP"),
        ("Neo Geo Pocket Color", "NGPC"),
        ("ColecoVision", "CV"),
        ("Intellivision", "INTV"),
    ])
});

/// Maps every board-qualified label onto the rating-board scale.
static RATING_REMAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Three", "EC"),
        ("Seven", "E"),
        ("Twelve", "E10"),
        ("Sixteen", "T"),
        ("Eighteen", "M"),
        ("RP", "RP"),
        ("EC", "EC"),
        ("E", "E"),
        ("E10", "E10"),
        ("T", "T"),
        ("M", "M"),
        ("AO", "AO"),
        ("CERO_A", "E"),
        ("CERO_B", "E10"),
        ("CERO_C", "T"),
        ("CERO_D", "M"),
        ("CERO_Z", "M"),
        ("USK_0", "E"),
        ("USK_6", "E10"),
        ("USK_12", "T"),
        ("USK_16", "T"),
        ("USK_18", "M"),
        ("GRAC_ALL", "E"),
        ("GRAC_Twelve", "E10"),
        ("GRAC_Fifteen", "T"),
        ("GRAC_Eighteen", "M"),
        ("GRAC_TESTING", "RP"),
        ("CLASS_IND_L", "E"),
        ("CLASS_IND_Ten", "E10"),
        ("CLASS_IND_Twelve", "T"),
        ("CLASS_IND_Fourteen", "T"),
        ("CLASS_IND_Sixteen", "T"),
        ("CLASS_IND_Eighteen", "M"),
        ("ACB_G", "E"),
        ("ACB_PG", "T"),
        ("ACB_M", "T"),
        ("ACB_MA15", "T"),
        ("ACB_R18", "M"),
        ("ACB_RC", "AO"),
    ])
});

static GENRE_VOCABULARY: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let raw = [
        ("Adventure", "Adventure"),
        ("Sport", "Sport"),
        ("Role-playing (RPG)", "RPG"),
        ("Simulator", "Simulation"),
        ("Shooter", "Shooter"),
        ("Strategy", "Strategy"),
        ("Platform", "Platformer"),
        ("Puzzle", "Puzzle"),
        ("Racing", "Racing"),
        ("Fighting", "Fighting"),
        ("Hack and slash/Beat 'em up", "Hack & slash"),
        ("Arcade", "Arcade"),
        ("Music", "Rhythm"),
        ("Turn-based strategy (TBS)", "TBS"),
        ("Tactical", "Tactical"),
        ("Visual Novel", "Visual Novel"),
        ("Real Time Strategy (RTS)", "RTS"),
        ("Quiz/Trivia", "Quiz/Trivia"),
        ("Card & Board Game", "Card/Board"),
        ("Point-and-click", "Point-and-click"),
        ("Indie", "Indie"),
        ("Pinball", "Pinball"),
        ("MOBA", "MOBA"),
    ];

    // Canonical labels resolve to themselves so remapping an already-remapped
    // corpus is a no-op.
    let mut map = HashMap::with_capacity(raw.len() * 2);
    for (_, canonical) in raw {
        map.insert(canonical, canonical);
    }
    map.extend(raw);
    map
});

/// Short alias for a catalog platform name
pub fn platform_alias(platform: &str) -> Option<&'static str> {
    PLATFORM_ALIASES.get(platform).copied()
}

/// Scale value a board-qualified rating label consolidates to
pub fn remap_rating(label: &str) -> Option<&'static str> {
    RATING_REMAP.get(label).copied()
}

/// Canonical genre label, for either a catalog genre name or an already canonical label
pub fn canonical_genre(genre: &str) -> Option<&'static str> {
    GENRE_VOCABULARY.get(genre).copied()
}
