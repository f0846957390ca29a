use crate::types::{Address, CandidateRecord, Identifier, Name};

/// Build an individual's watchlist record.
pub fn individual(uid: &str, first: &str, last: &str, dob: Option<&str>) -> CandidateRecord {
    CandidateRecord {
        uid: Some(uid.to_string()),
        name: Name::new(first, last),
        display_name: format!("{}, {}", last.to_uppercase(), first),
        category: "individual".into(),
        dob: dob.map(str::to_string),
        programs: vec!["SDGT".into()],
        ..Default::default()
    }
}

/// Build an entity's watchlist record; entities carry their name in `last`.
pub fn entity(uid: &str, name: &str, country: &str) -> CandidateRecord {
    CandidateRecord {
        uid: Some(uid.to_string()),
        name: Name::last_only(name),
        display_name: name.to_uppercase(),
        category: "entity".into(),
        address: Address {
            country: Some(country.to_string()),
            ..Default::default()
        },
        programs: vec!["IRAN".into()],
        ..Default::default()
    }
}

/// A small fixed watchlist for demos, tests and benches.
pub fn sample_watchlist() -> Vec<CandidateRecord> {
    let mut smith = individual("1001", "Jon", "Smith", Some("1975-01-01"));
    smith.identifiers = vec![
        Identifier::new("Passport", "X-4455667"),
        Identifier::new("National ID", "778-899"),
    ];
    smith.address = Address {
        street: Some("12 Harbour Road".into()),
        city: Some("Limassol".into()),
        state: None,
        country: Some("Cyprus".into()),
    };

    let mut ahmad = individual("1002", "Mohammed", "Al-Rashid", Some("12 May 1980"));
    ahmad.name.middle = Some("Abdul".into());
    ahmad.aliases = vec![
        Name::new("Mohamed", "Al Rasheed"),
        Name::new("Abu", "Rashid"),
    ];

    vec![
        smith,
        individual("1003", "Alice", "Jones", Some("1990-07-21")),
        ahmad,
        entity("2001", "Bank Melli Iran", "Iran"),
        entity("2002", "Islamic Republic of Iran Shipping Lines", "Iran"),
    ]
}

/// `count` synthetic individuals with deterministic, distinct names.
pub fn synthetic_watchlist(count: usize) -> Vec<CandidateRecord> {
    const FIRST: [&str; 8] = [
        "John", "Ahmad", "Maria", "Viktor", "Li", "Fatima", "Carlos", "Olga",
    ];
    const LAST: [&str; 8] = [
        "Smith", "Hassan", "Petrov", "Garcia", "Wang", "Kowalski", "Okafor", "Nguyen",
    ];
    (0..count)
        .map(|i| {
            let first = FIRST[i % FIRST.len()];
            let last = LAST[(i / FIRST.len()) % LAST.len()];
            let year = 1950 + (i % 50);
            individual(
                &format!("syn-{i}"),
                first,
                &format!("{last}{}", i / 64),
                Some(&format!("{year}-01-15")),
            )
        })
        .collect()
}
