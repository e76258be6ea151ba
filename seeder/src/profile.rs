//! Locale-aware synthetic data.
//!
//! Every value is drawn from the caller's rng so a seeded run is reproducible.

use crate::seed::SeedError;
use chrono::{Duration, NaiveDateTime, Utc};
use fake::Fake;
use fake::faker::internet::raw::SafeEmail;
use fake::faker::lorem::raw::{Sentence, Word};
use fake::faker::name::raw::{FirstName, LastName};
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::{EN, FR_FR, JA_JP, PT_BR, ZH_CN, ZH_TW};
use rand::Rng;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

pub const DESCRIPTION_MAX_CHARS: usize = 100;
pub const PHONE_MAX_CHARS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Locale {
    #[default]
    En,
    FrFr,
    PtBr,
    JaJp,
    ZhCn,
    ZhTw,
}

macro_rules! localized {
    ($locale:expr, $rng:expr, $faker:ident $(, $arg:expr)*) => {
        match $locale {
            Locale::En => $faker(EN $(, $arg)*).fake_with_rng($rng),
            Locale::FrFr => $faker(FR_FR $(, $arg)*).fake_with_rng($rng),
            Locale::PtBr => $faker(PT_BR $(, $arg)*).fake_with_rng($rng),
            Locale::JaJp => $faker(JA_JP $(, $arg)*).fake_with_rng($rng),
            Locale::ZhCn => $faker(ZH_CN $(, $arg)*).fake_with_rng($rng),
            Locale::ZhTw => $faker(ZH_TW $(, $arg)*).fake_with_rng($rng),
        }
    };
}

/// Selects which locale names, emails and phone numbers are generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Profile {
    pub locale: Locale,
}

impl Profile {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn from_locale_name(name: &str) -> Result<Self, SeedError> {
        Locale::from_str(name.trim())
            .map(Self::new)
            .map_err(|_| SeedError::UnknownLocale(name.to_string()))
    }

    pub fn first_name<R: Rng>(&self, rng: &mut R) -> String {
        localized!(self.locale, rng, FirstName)
    }

    pub fn last_name<R: Rng>(&self, rng: &mut R) -> String {
        localized!(self.locale, rng, LastName)
    }

    pub fn email<R: Rng>(&self, rng: &mut R) -> String {
        localized!(self.locale, rng, SafeEmail)
    }

    pub fn word<R: Rng>(&self, rng: &mut R) -> String {
        localized!(self.locale, rng, Word)
    }

    pub fn sentence<R: Rng>(&self, rng: &mut R) -> String {
        localized!(self.locale, rng, Sentence, 4..10)
    }

    pub fn phone<R: Rng>(&self, rng: &mut R) -> String {
        let phone: String = localized!(self.locale, rng, PhoneNumber);
        truncate_chars(&phone, PHONE_MAX_CHARS)
    }

    /// Two title-cased words and a three digit number, e.g. `Amber Quartz 417`.
    pub fn product_name<R: Rng>(&self, rng: &mut R) -> String {
        let first = title_case(&self.word(rng));
        let second = title_case(&self.word(rng));
        format!("{first} {second} {}", rng.random_range(100..=999))
    }

    /// Whole sentences up to [`DESCRIPTION_MAX_CHARS`] characters.
    pub fn description<R: Rng>(&self, rng: &mut R) -> String {
        let mut text = String::new();
        loop {
            let sentence = self.sentence(rng);
            let separator = usize::from(!text.is_empty());
            if text.chars().count() + separator + sentence.chars().count() > DESCRIPTION_MAX_CHARS {
                if text.is_empty() {
                    text = truncate_chars(&sentence, DESCRIPTION_MAX_CHARS);
                }
                break;
            }
            if separator == 1 {
                text.push(' ');
            }
            text.push_str(&sentence);
        }
        text
    }
}

/// A uniformly drawn instant between `span` ago and now.
pub fn moment_within<R: Rng>(rng: &mut R, span: Duration) -> NaiveDateTime {
    let offset = rng.random_range(0..=span.num_seconds().max(0));
    (Utc::now() - Duration::seconds(offset)).naive_utc()
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strum::IntoEnumIterator;

    #[test]
    fn locale_names_parse_case_insensitively() {
        assert_eq!(Profile::from_locale_name("en").unwrap().locale, Locale::En);
        assert_eq!(Profile::from_locale_name("FR_FR").unwrap().locale, Locale::FrFr);
        assert_eq!(Profile::from_locale_name(" pt_br ").unwrap().locale, Locale::PtBr);
        assert!(matches!(
            Profile::from_locale_name("ru_ru"),
            Err(SeedError::UnknownLocale(name)) if name == "ru_ru"
        ));
        assert_eq!(Locale::ZhCn.to_string(), "zh_cn");
    }

    #[test]
    fn every_locale_produces_bounded_values() {
        let mut rng = StdRng::seed_from_u64(1);
        for locale in Locale::iter() {
            let profile = Profile::new(locale);
            for _ in 0..20 {
                assert!(!profile.first_name(&mut rng).is_empty());
                assert!(!profile.last_name(&mut rng).is_empty());
                assert!(profile.email(&mut rng).contains('@'));
                assert!(profile.phone(&mut rng).chars().count() <= PHONE_MAX_CHARS);
                let description = profile.description(&mut rng);
                assert!(!description.is_empty());
                assert!(description.chars().count() <= DESCRIPTION_MAX_CHARS);
            }
        }
    }

    #[test]
    fn product_name_has_two_title_words_and_number() {
        let mut rng = StdRng::seed_from_u64(3);
        let profile = Profile::new(Locale::En);
        for _ in 0..50 {
            let name = profile.product_name(&mut rng);
            let parts: Vec<&str> = name.split(' ').collect();
            assert_eq!(parts.len(), 3, "{name}");
            assert!(parts[0].chars().next().unwrap().is_uppercase());
            assert!(parts[1].chars().next().unwrap().is_uppercase());
            let number: u32 = parts[2].parse().unwrap();
            assert!((100..=999).contains(&number));
        }
    }

    #[test]
    fn moments_fall_inside_the_window() {
        let mut rng = StdRng::seed_from_u64(5);
        let span = Duration::days(60);
        for _ in 0..100 {
            let moment = moment_within(&mut rng, span);
            let now = Utc::now().naive_utc();
            assert!(moment <= now);
            assert!(moment >= now - span - Duration::seconds(5));
        }
    }

    #[test]
    fn title_case_lowers_the_tail() {
        assert_eq!(title_case("quARTZ"), "Quartz");
        assert_eq!(title_case(""), "");
    }
}
