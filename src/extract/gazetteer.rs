//! Built-in gazetteers for the rule-based entity recognizer
//!
//! The lists lean towards Indian and international news copy. Extra entries
//! come from the `gazetteer` section of the config.

use std::collections::HashSet;

use crate::core::config::GazetteerConfig;

const LOCATIONS: &[&str] = &[
    // Countries
    "india", "pakistan", "china", "nepal", "bhutan", "bangladesh", "sri lanka", "myanmar",
    "afghanistan", "iran", "iraq", "israel", "palestine", "gaza", "syria", "turkey",
    "saudi arabia", "uae", "qatar", "kuwait", "oman", "egypt", "united states", "usa",
    "america", "canada", "mexico", "brazil", "argentina", "united kingdom", "uk", "britain",
    "england", "scotland", "ireland", "france", "germany", "italy", "spain", "netherlands",
    "switzerland", "russia", "ukraine", "poland", "japan", "south korea", "north korea",
    "singapore", "malaysia", "indonesia", "thailand", "vietnam", "philippines", "australia",
    "new zealand", "south africa", "nigeria", "kenya",
    // Indian states and union territories
    "andhra pradesh", "arunachal pradesh", "assam", "bihar", "chhattisgarh", "goa", "gujarat",
    "haryana", "himachal pradesh", "jharkhand", "karnataka", "kerala", "madhya pradesh",
    "maharashtra", "manipur", "meghalaya", "mizoram", "nagaland", "odisha", "punjab",
    "rajasthan", "sikkim", "tamil nadu", "telangana", "tripura", "uttar pradesh",
    "uttarakhand", "west bengal", "jammu", "kashmir", "jammu and kashmir", "ladakh",
    "puducherry", "delhi",
    // Cities
    "new delhi", "mumbai", "kolkata", "chennai", "bengaluru", "bangalore", "hyderabad",
    "pune", "ahmedabad", "jaipur", "lucknow", "patna", "bhopal", "chandigarh", "noida",
    "gurugram", "surat", "kochi", "thiruvananthapuram", "mysuru", "visakhapatnam",
    "varanasi", "ayodhya", "srinagar", "amritsar", "london", "paris", "washington",
    "new york", "beijing", "moscow", "tokyo", "dubai", "kabul", "dhaka", "karachi", "lahore",
    "islamabad", "colombo", "kathmandu", "sydney", "toronto", "berlin",
];

const GROUPS: &[&str] = &[
    // Nationalities
    "indian", "indians", "american", "americans", "british", "chinese", "pakistani",
    "pakistanis", "russian", "russians", "french", "german", "germans", "japanese",
    "australian", "australians", "canadian", "canadians", "israeli", "israelis",
    "palestinian", "palestinians", "iranian", "afghan", "afghans", "bangladeshi", "nepali",
    "sri lankan", "ukrainian", "ukrainians", "european", "europeans", "african", "asian",
    // Religious and linguistic groups
    "hindu", "hindus", "muslim", "muslims", "christian", "christians", "sikh", "sikhs",
    "jain", "jains", "buddhist", "buddhists", "jewish", "jews", "tamil", "tamils", "telugu",
    "kannada", "kannadiga", "malayali", "bengali", "punjabi", "gujarati", "marathi",
    "kashmiri", "kashmiris",
    // Political
    "democrats", "republicans", "communists", "maoists",
];

const ORGANIZATIONS: &[&str] = &[
    "bjp", "congress", "aap", "isro", "drdo", "nasa", "united nations", "fifa",
    "icc", "bcci", "ipl", "rbi", "sebi", "cbi", "google", "apple", "microsoft", "amazon",
    "meta", "facebook", "twitter", "tesla", "reliance", "tata", "infosys", "wipro", "netflix",
    "youtube", "instagram", "whatsapp", "bollywood", "hollywood", "tollywood", "kollywood",
];

/// Last words that mark an organization name
const ORG_SUFFIXES: &[&str] = &[
    "inc", "ltd", "limited", "corp", "corporation", "company", "co", "group", "party", "bank",
    "university", "college", "institute", "ministry", "department", "council", "committee",
    "commission", "board", "agency", "authority", "court", "police", "army", "navy", "force",
    "association", "federation", "union", "league", "club", "foundation", "trust", "society",
    "organisation", "organization", "times", "news", "express", "post", "channel", "studios",
    "films", "productions", "motors", "airlines", "airways", "railways", "technologies",
    "systems", "services", "hospital", "school", "assembly", "parliament", "senate",
    "cabinet", "office", "bureau", "tribunal",
];

/// First words that mark an organization name
const ORG_PREFIXES: &[&str] = &[
    "ministry", "university", "department", "bank", "institute", "office", "college",
    "council", "government",
];

const EVENTS: &[&str] = &[
    "diwali", "holi", "eid", "christmas", "navratri", "ramadan", "pongal", "onam",
    "ganesh chaturthi", "durga puja", "independence day", "republic day", "olympics",
];

/// Last words that mark an event name
const EVENT_SUFFIXES: &[&str] = &[
    "olympics", "cup", "festival", "fest", "summit", "war", "elections", "election", "polls",
    "championship", "championships", "games", "awards", "expo", "conference", "tournament",
    "trophy", "marathon", "mela", "series", "open", "puja", "utsav",
];

/// Leading titles dropped from a name; their presence marks a person
const HONORIFICS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "shri", "smt", "sri", "sir", "prof", "president", "pm", "cm",
    "minister", "prime", "chief", "actor", "actress", "director", "star", "captain", "coach",
    "superstar",
];

/// Capitalized words that never start or form an entity on their own
const NON_ENTITIES: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "january",
    "february", "march", "april", "may", "june", "july", "august", "september", "october",
    "november", "december", "breaking", "watch", "video", "photos", "update", "live",
    "exclusive", "news", "report", "today", "yesterday", "tomorrow", "also", "however",
    "meanwhile", "according", "read", "many", "several", "amid", "despite", "earlier",
    "later", "every",
];

/// Lowercase words allowed inside a multi-word name
const CONNECTORS: &[&str] = &["of", "for", "de", "da", "del", "van", "von", "bin", "&"];

fn to_set(words: &[&str], extra: &[String]) -> HashSet<String> {
    words
        .iter()
        .map(|w| w.to_string())
        .chain(extra.iter().map(|w| w.trim().to_lowercase()))
        .filter(|w| !w.is_empty())
        .collect()
}

/// Lookup tables used by [`super::entities::RuleBasedRecognizer`]
#[derive(Debug, Clone)]
pub struct Gazetteer {
    locations: HashSet<String>,
    groups: HashSet<String>,
    organizations: HashSet<String>,
    events: HashSet<String>,
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::with_additions(&GazetteerConfig::default())
    }
}

impl Gazetteer {
    /// Built-in lists merged with config additions
    pub fn with_additions(extra: &GazetteerConfig) -> Self {
        Self {
            locations: to_set(LOCATIONS, &extra.locations),
            groups: to_set(GROUPS, &extra.groups),
            organizations: to_set(ORGANIZATIONS, &extra.organizations),
            events: to_set(EVENTS, &extra.events),
        }
    }

    pub fn is_location(&self, name: &str) -> bool {
        self.locations.contains(name)
    }

    pub fn is_group(&self, name: &str) -> bool {
        self.groups.contains(name)
    }

    pub fn is_organization(&self, name: &str) -> bool {
        self.organizations.contains(name)
    }

    pub fn is_event(&self, name: &str) -> bool {
        self.events.contains(name)
    }

    /// Any gazetteer knows this exact name
    pub fn knows(&self, name: &str) -> bool {
        self.is_location(name)
            || self.is_group(name)
            || self.is_organization(name)
            || self.is_event(name)
    }
}

pub fn is_org_suffix(word: &str) -> bool {
    ORG_SUFFIXES.contains(&word)
}

pub fn is_org_prefix(word: &str) -> bool {
    ORG_PREFIXES.contains(&word)
}

pub fn is_event_suffix(word: &str) -> bool {
    EVENT_SUFFIXES.contains(&word)
}

pub fn is_honorific(word: &str) -> bool {
    HONORIFICS.contains(&word)
}

pub fn is_non_entity(word: &str) -> bool {
    NON_ENTITIES.contains(&word)
}

pub fn is_connector(word: &str) -> bool {
    CONNECTORS.contains(&word)
}
