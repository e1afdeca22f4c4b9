//! Demographic record template.

use super::catalogue::{
    FEMALE_NAMES, GENDERS, GP_ID_PATTERN, HOUSE_NUMBER_PATTERN, MALE_NAMES, POSTCODE_PATTERN,
    STREET_NAMES, SURNAMES,
};
use super::field;
use crate::error::PipelineError;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use dgen_generator::{
    Bundle, Concat, ConditionalGenerator, DateRangeGenerator, GeneratorExt, OptionGenerator,
    PatternGenerator, UidGenerator,
};

/// Age bounds of a population, relative to a reference instant ("now").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonConfig {
    pub min_age: u32,
    pub max_age: u32,
    pub reference: NaiveDateTime,
}

impl PersonConfig {
    /// Range of birth dates: 1 January of the year `max_age` years before the
    /// reference, up to 31 December of the year `min_age` years before it.
    pub fn birth_dates(&self) -> Result<DateRangeGenerator, PipelineError> {
        let year = self.reference.year();
        let first = year_offset(year, self.max_age)
            .and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1))
            .ok_or_else(|| age_error(self.max_age))?;
        let last = year_offset(year, self.min_age)
            .and_then(|y| NaiveDate::from_ymd_opt(y, 12, 31))
            .ok_or_else(|| age_error(self.min_age))?;
        Ok(DateRangeGenerator::from_dates(first, last)?)
    }
}

fn year_offset(year: i32, age: u32) -> Option<i32> {
    year.checked_sub(i32::try_from(age).ok()?)
}

fn age_error(age: u32) -> PipelineError {
    PipelineError::InvalidConfig(format!("age {age} is out of range"))
}

/// House number followed by a street name.
pub fn address_generator() -> Result<Concat, PipelineError> {
    let number = PatternGenerator::new(HOUSE_NUMBER_PATTERN)?;
    let street = OptionGenerator::new(STREET_NAMES.iter().copied())?;
    Ok(number.concat(street))
}

/// GP practice identifier.
pub fn gp_id_generator() -> Result<PatternGenerator, PipelineError> {
    Ok(PatternGenerator::new(GP_ID_PATTERN)?)
}

/// Bundle producing a person's demographic fields.
///
/// Gender is generated before Name, which is drawn from the name list of
/// that gender.
pub fn person_template(config: &PersonConfig) -> Result<Bundle, PipelineError> {
    let name = ConditionalGenerator::new([
        (GENDERS[0], OptionGenerator::new(MALE_NAMES.iter().copied())?.boxed()),
        (GENDERS[1], OptionGenerator::new(FEMALE_NAMES.iter().copied())?.boxed()),
    ])?
    .keyed_on(field::GENDER);

    let bundle = Bundle::new([
        UidGenerator::new().named(field::PATID),
        OptionGenerator::new(GENDERS)?.named(field::GENDER),
        name.named(field::NAME),
        OptionGenerator::new(SURNAMES.iter().copied())?.named(field::SURNAME),
        config.birth_dates()?.named(field::DOB),
        address_generator()?.named(field::ADDRESS),
        PatternGenerator::new(POSTCODE_PATTERN)?.named(field::POSTCODE),
        gp_id_generator()?.named(field::GPID),
    ])?;
    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dgen_generator::parse_timestamp;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config() -> PersonConfig {
        PersonConfig {
            min_age: 18,
            max_age: 65,
            reference: parse_timestamp("2017-04-01 00:00:00").unwrap(),
        }
    }

    #[test]
    fn test_field_order() {
        let template = person_template(&config()).unwrap();
        assert_eq!(
            template.field_names().collect::<Vec<_>>(),
            vec!["PATID", "Gender", "Name", "Surname", "DOB", "Address", "Postcode", "GPID"]
        );
    }

    #[test]
    fn test_name_matches_gender() {
        let mut rng = StdRng::seed_from_u64(42);
        let template = person_template(&config()).unwrap();

        for _ in 0..100 {
            let person = template.generate_record(&mut rng).unwrap();
            let name = person.get_text(field::NAME).unwrap();
            match person.get_text(field::GENDER).unwrap() {
                "male" => assert!(MALE_NAMES.contains(&name)),
                "female" => assert!(FEMALE_NAMES.contains(&name)),
                other => panic!("unexpected gender {other}"),
            }
        }
    }

    #[test]
    fn test_birth_dates_within_age_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let template = person_template(&config()).unwrap();

        for _ in 0..100 {
            let person = template.generate_record(&mut rng).unwrap();
            let dob = parse_timestamp(person.get_text(field::DOB).unwrap()).unwrap();
            assert!((1952..=1999).contains(&dob.year()), "dob {dob}");
        }
    }

    #[test]
    fn test_address_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let address = address_generator().unwrap();

        for _ in 0..100 {
            let value = address.generate_value(&mut rng).unwrap();
            let (number, street) = value.as_text().unwrap().split_once(' ').unwrap();
            assert!(number.parse::<u32>().unwrap() >= 1);
            assert!(STREET_NAMES.contains(&street));
        }
    }

    #[test]
    fn test_age_out_of_range() {
        let config = PersonConfig {
            max_age: u32::MAX,
            ..config()
        };
        assert!(matches!(
            config.birth_dates(),
            Err(PipelineError::InvalidConfig(_))
        ));
    }
}
