//! End-to-end data-linking dataset test.
//!
//! Generates a small population into a temp directory, reads the CSV tables
//! back and checks that they link the way a record-linkage study expects.

use dgen::generator::parse_timestamp;
use dgen::{run, PopulationConfig};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tempfile::TempDir;

const SEED: u64 = 42;

fn config() -> PopulationConfig {
    PopulationConfig {
        persons: 30,
        cases: 10,
        primary_events: 4,
        secondary_events: 3,
        dead_controls: 5,
        dead_cases: 10,
        reference: parse_timestamp("2017-04-01 00:00:00").unwrap(),
        seed: Some(SEED),
        ..PopulationConfig::default()
    }
}

fn read_table(dir: &Path, name: &str) -> (Vec<String>, Vec<HashMap<String, String>>) {
    let mut reader = csv::Reader::from_path(dir.join(format!("{name}.csv"))).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    let rows = reader
        .records()
        .map(|record| {
            let record = record.unwrap();
            headers
                .iter()
                .cloned()
                .zip(record.iter().map(String::from))
                .collect()
        })
        .collect();
    (headers, rows)
}

#[test]
fn test_generate_and_link_tables() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let summary = run(&config(), temp_dir.path())?;
    assert_eq!(summary.files.len(), 4);

    let (headers, gp_dem) = read_table(temp_dir.path(), "GP_DEM");
    assert_eq!(
        headers,
        vec!["PATID", "NAME", "SURNAME", "DOB", "GENDER", "ADDRESS", "POSTCODE", "GPID"]
    );
    assert_eq!(gp_dem.len(), 30);

    let patids: HashSet<&str> = gp_dem.iter().map(|r| r["PATID"].as_str()).collect();
    assert_eq!(patids.len(), 30);

    let (_, gp_clin) = read_table(temp_dir.path(), "GP_CLIN");
    assert_eq!(gp_clin.len(), 30 * 4);
    assert!(gp_clin.iter().all(|r| patids.contains(r["PATID"].as_str())));

    let (headers, hospdat) = read_table(temp_dir.path(), "HOSPDAT");
    assert_eq!(headers, vec!["PATID", "HOSPID", "EVENT_DATE", "EVENT_CODE"]);
    assert_eq!(hospdat.len(), 30 * 3);

    let dobs: HashMap<&str, &str> = gp_dem
        .iter()
        .map(|r| (r["PATID"].as_str(), r["DOB"].as_str()))
        .collect();
    for event in gp_clin.iter().chain(&hospdat) {
        let dob = parse_timestamp(dobs[event["PATID"].as_str()]).unwrap();
        let date = parse_timestamp(&event["EVENT_DATE"]).unwrap();
        assert!(dob <= date, "event {date} before birth {dob}");
    }

    Ok(())
}

#[test]
fn test_death_register_links_by_demographics() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    run(&config(), temp_dir.path())?;

    let (_, gp_dem) = read_table(temp_dir.path(), "GP_DEM");
    let (headers, deathreg) = read_table(temp_dir.path(), "DEATHREG");
    assert_eq!(
        headers,
        vec!["PATID", "NAME", "SURNAME", "DOB", "GENDER", "ADDRESS", "POSTCODE", "DOD", "CAUSE"]
    );
    // Every case dies; controls die with probability 1/4.
    assert!(deathreg.len() >= 10 && deathreg.len() <= 30);

    let reference = config().reference;
    for dead in &deathreg {
        let person = gp_dem
            .iter()
            .find(|p| {
                p["NAME"] == dead["NAME"]
                    && p["SURNAME"] == dead["SURNAME"]
                    && p["DOB"] == dead["DOB"]
                    && p["POSTCODE"] == dead["POSTCODE"]
            })
            .expect("death register row links to a GP record");
        assert_eq!(person["GENDER"], dead["GENDER"]);

        let dod = parse_timestamp(&dead["DOD"]).unwrap();
        assert!(dod <= reference);
        assert!(["", "Natural causes", "Accidental"].contains(&dead["CAUSE"].as_str()));
    }

    Ok(())
}

#[test]
fn test_same_seed_same_demographics() -> Result<(), Box<dyn std::error::Error>> {
    let first = TempDir::new()?;
    let second = TempDir::new()?;
    run(&config(), first.path())?;
    run(&config(), second.path())?;

    let columns = |dir: &Path| {
        read_table(dir, "GP_DEM")
            .1
            .into_iter()
            .map(|r| (r["NAME"].clone(), r["SURNAME"].clone(), r["DOB"].clone()))
            .collect::<Vec<_>>()
    };
    assert_eq!(columns(first.path()), columns(second.path()));

    Ok(())
}

#[test]
fn test_invalid_config_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out");
    let config = PopulationConfig {
        dead_cases: 11,
        ..config()
    };

    let err = run(&config, &output).unwrap_err();
    assert!(err.to_string().contains("dead cases"));
    assert!(!output.exists());
}
