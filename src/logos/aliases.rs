// src/logos/aliases.rs
//
// Lowercase team name / nickname → ESPN team id.
//
// Keys are unique. Nicknames shared by several programs ("tigers", "bulldogs",
// "wildcats", "aggies", "huskies", ...) are left out on purpose: an alias must
// identify exactly one school. Same for abbreviations that hide inside common
// words ("uga" in "cougars").

pub static ALIASES: &[(&str, u32)] = &[
    // SEC
    ("alabama", 333),
    ("bama", 333),
    ("crimson tide", 333),
    ("alabama crimson tide", 333),
    ("georgia", 61),
    ("georgia bulldogs", 61),
    ("lsu", 99),
    ("louisiana state", 99),
    ("lsu tigers", 99),
    ("texas", 251),
    ("longhorns", 251),
    ("texas longhorns", 251),
    ("texas a&m", 245),
    ("tamu", 245),
    ("texas a&m aggies", 245),
    ("oklahoma", 201),
    ("sooners", 201),
    ("oklahoma sooners", 201),
    ("tennessee", 2633),
    ("vols", 2633),
    ("volunteers", 2633),
    ("florida", 57),
    ("gators", 57),
    ("florida gators", 57),
    ("auburn", 2),
    ("auburn tigers", 2),
    ("ole miss", 145),
    ("mississippi", 145),
    ("ole miss rebels", 145),
    ("mississippi state", 344),
    ("miss state", 344),
    ("missouri", 142),
    ("mizzou", 142),
    ("kentucky", 96),
    ("kentucky wildcats", 96),
    ("south carolina", 2579),
    ("gamecocks", 2579),
    ("arkansas", 8),
    ("razorbacks", 8),
    ("vanderbilt", 238),
    ("vandy", 238),
    ("commodores", 238),
    // Big Ten
    ("ohio state", 194),
    ("buckeyes", 194),
    ("ohio state buckeyes", 194),
    ("michigan", 130),
    ("wolverines", 130),
    ("michigan wolverines", 130),
    ("penn state", 213),
    ("psu", 213),
    ("nittany lions", 213),
    ("oregon", 2483),
    ("oregon ducks", 2483),
    ("usc", 30),
    ("southern california", 30),
    ("trojans", 30),
    ("ucla", 26),
    ("ucla bruins", 26),
    ("washington", 264),
    ("washington huskies", 264),
    ("wisconsin", 275),
    ("badgers", 275),
    ("iowa", 2294),
    ("hawkeyes", 2294),
    ("michigan state", 127),
    ("michigan state spartans", 127),
    ("nebraska", 158),
    ("cornhuskers", 158),
    ("minnesota", 135),
    ("golden gophers", 135),
    ("illinois", 356),
    ("fighting illini", 356),
    ("northwestern", 77),
    ("purdue", 2509),
    ("boilermakers", 2509),
    ("indiana", 84),
    ("hoosiers", 84),
    ("maryland", 120),
    ("terrapins", 120),
    ("terps", 120),
    ("rutgers", 164),
    ("scarlet knights", 164),
    // Big 12
    ("utah", 254),
    ("utes", 254),
    ("oklahoma state", 197),
    ("oklahoma state cowboys", 197),
    ("kansas state", 2306),
    ("k-state", 2306),
    ("kansas", 2305),
    ("jayhawks", 2305),
    ("baylor", 239),
    ("tcu", 2628),
    ("horned frogs", 2628),
    ("texas tech", 2641),
    ("red raiders", 2641),
    ("iowa state", 66),
    ("cyclones", 66),
    ("west virginia", 277),
    ("wvu", 277),
    ("byu", 252),
    ("brigham young", 252),
    ("cincinnati", 2132),
    ("bearcats", 2132),
    ("houston", 248),
    ("ucf", 2116),
    ("central florida", 2116),
    ("colorado", 38),
    ("buffaloes", 38),
    ("buffs", 38),
    ("arizona", 12),
    ("arizona state", 9),
    ("sun devils", 9),
    // ACC
    ("clemson", 228),
    ("clemson tigers", 228),
    ("florida state", 52),
    ("fsu", 52),
    ("seminoles", 52),
    ("miami", 2390),
    ("miami hurricanes", 2390),
    ("notre dame", 87),
    ("fighting irish", 87),
    ("north carolina", 153),
    ("unc", 153),
    ("tar heels", 153),
    ("nc state", 152),
    ("wolfpack", 152),
    ("duke", 150),
    ("blue devils", 150),
    ("wake forest", 154),
    ("demon deacons", 154),
    ("virginia tech", 259),
    ("hokies", 259),
    ("virginia", 258),
    ("louisville", 97),
    ("pittsburgh", 221),
    ("pitt", 221),
    ("syracuse", 183),
    ("boston college", 103),
    ("georgia tech", 59),
    ("yellow jackets", 59),
    ("smu", 2567),
    ("mustangs", 2567),
    ("stanford", 24),
    ("california", 25),
    ("cal bears", 25),
    ("golden bears", 25),
    // Pac / independents / Group of Five
    ("oregon state", 204),
    ("beavers", 204),
    ("washington state", 265),
    ("wazzu", 265),
    ("boise state", 68),
    ("tulane", 2655),
    ("green wave", 2655),
    ("memphis", 235),
    ("army", 349),
    ("black knights", 349),
    ("navy", 2426),
    ("midshipmen", 2426),
    ("air force", 2005),
    ("liberty", 2335),
    ("james madison", 256),
    ("jmu", 256),
    ("dukes", 256),
    ("app state", 2026),
    ("appalachian state", 2026),
];
