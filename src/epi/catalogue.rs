//! Value sets used by the epidemiological schema.

pub const GENDERS: [&str; 2] = ["male", "female"];

pub const MALE_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
    "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark", "Paul", "Steven", "Andrew",
    "Kenneth", "George", "Edward", "Brian", "Ronald", "Kevin", "Jason", "Gary", "Timothy",
    "Peter", "Stephen", "Ian",
];

pub const FEMALE_NAMES: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica", "Sarah",
    "Karen", "Nancy", "Margaret", "Lisa", "Betty", "Dorothy", "Sandra", "Ashley", "Helen",
    "Emily", "Donna", "Michelle", "Carol", "Amanda", "Melissa", "Deborah", "Rebecca", "Laura",
    "Ruth", "Joan", "Alice",
];

pub const SURNAMES: &[&str] = &[
    "Smith", "Jones", "Williams", "Taylor", "Brown", "Davies", "Evans", "Wilson", "Thomas",
    "Johnson", "Roberts", "Robinson", "Thompson", "Wright", "Walker", "White", "Edwards",
    "Hughes", "Green", "Hall", "Lewis", "Harris", "Clarke", "Patel", "Jackson", "Wood", "Turner",
    "Martin", "Cooper", "Hill",
];

pub const STREET_NAMES: &[&str] = &[
    "High Street", "Station Road", "Main Street", "Park Road", "Church Road", "Church Street",
    "London Road", "Victoria Road", "Green Lane", "Manor Road", "Church Lane", "Park Avenue",
    "The Avenue", "The Crescent", "Queens Road", "New Road", "Grange Road", "Kings Road",
    "Kingsway", "Windsor Road", "Highfield Road", "Mill Lane", "Alexander Road", "York Road",
    "St. Johns Road", "Main Road", "Broadway", "King Street", "The Green", "Springfield Road",
    "Meadow Drive", "Acacia Avenue", "Orchard Drive", "Mill Road",
];

/// Pattern for a house number followed by a space.
pub const HOUSE_NUMBER_PATTERN: &str = "([1-9]|([1-9][0-9]?[0-9]?)) ";

pub const POSTCODE_PATTERN: &str = "[A-Z][A-Z][1-9][1-9][A-Z][A-Z]";

/// Pattern for a GP practice identifier.
pub const GP_ID_PATTERN: &str = "[A-Z][0-9][0-9][0-9][0-9][0-9]";

pub const CAUSES_OF_DEATH: &[&str] = &["Natural causes", "Accidental"];

pub const PRIMARY_CARE_CODES: &[&str] = &["ITX10", "QB65", "ABC456"];

pub const PRIMARY_CARE_VALUES: &[&str] = &["10", "22", "55", "3.22"];

pub const HOSPITALS: &[&str] = &["SGH2498753", "MST9530622"];

/// Secondary care diagnoses recorded for control participants.
pub const CONTROL_SECONDARY_CODES: &[&str] = &["V00.131S", "J11.82", "J44.9", "V15.82", "F41.9"];

/// Secondary care diagnoses recorded for case participants.
pub const CASE_SECONDARY_CODES: &[&str] = &[
    "W00.9", "W06.XXXA", "W11.XXXA", "W14.XXXA", "W17.2XXA", "W19.XXXA", "F32.9", "G40.909",
    "C34.00", "C46.51", "D12.8", "I15.9", "I27.0", "F41.9",
];
