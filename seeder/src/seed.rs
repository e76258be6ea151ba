use crate::profile::Profile;
use colored::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sea_orm::{DatabaseConnection, DbErr};
use std::collections::HashSet;
use std::fmt;
use std::pin::Pin;
use std::time::Instant;

const STATUS_COLUMN: usize = 60;

/// Redraws allowed before giving up on finding an unissued email.
pub const MAX_UNIQUE_ATTEMPTS: usize = 1000;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("database error: {0}")]
    Database(#[from] DbErr),
    #[error("unknown locale `{0}`")]
    UnknownLocale(String),
    #[error("category `{category}` references parent `{parent}` before it was inserted")]
    UnknownParent {
        category: &'static str,
        parent: &'static str,
    },
    #[error("no unused email after {0} attempts")]
    UniqueEmailExhausted(usize),
}

/// Why a generator left the database untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    AlreadySeeded,
    TargetReached,
    NoCategories,
    NoUsers,
    NoProducts,
    DuplicateEmail,
    DuplicateWishlistPair,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Inserted(u64),
    Skipped(SkipReason),
}

impl Outcome {
    pub fn inserted(&self) -> u64 {
        match self {
            Outcome::Inserted(n) => *n,
            Outcome::Skipped(_) => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Inserted(n) => write!(f, "{n} inserted"),
            Outcome::Skipped(reason) => write!(f, "skipped: {reason:?}"),
        }
    }
}

/// Everything a generator needs: the live connection plus the run's random
/// state. Created once per run and handed to each seeder in turn.
pub struct SeedContext {
    pub db: DatabaseConnection,
    pub rng: StdRng,
    pub profile: Profile,
    issued_emails: HashSet<String>,
}

impl SeedContext {
    /// Uses `rng_seed` for a reproducible run, OS entropy otherwise.
    pub fn new(db: DatabaseConnection, profile: Profile, rng_seed: Option<u64>) -> Self {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            db,
            rng,
            profile,
            issued_emails: HashSet::new(),
        }
    }

    /// Draws an email that has not been handed out earlier in this run.
    pub fn issue_email(&mut self) -> Result<String, SeedError> {
        for _ in 0..MAX_UNIQUE_ATTEMPTS {
            let email = self.profile.email(&mut self.rng);
            if self.issued_emails.insert(email.clone()) {
                return Ok(email);
            }
        }
        Err(SeedError::UniqueEmailExhausted(MAX_UNIQUE_ATTEMPTS))
    }

    pub fn into_db(self) -> DatabaseConnection {
        self.db
    }
}

pub trait Seeder {
    fn seed<'a>(
        &'a self,
        ctx: &'a mut SeedContext,
    ) -> Pin<Box<dyn Future<Output = Result<Outcome, SeedError>> + Send + 'a>>;
}

/// Runs one seeding phase and prints a status line with its duration.
pub async fn run_seeder<S: Seeder + ?Sized>(
    seeder: &S,
    name: &str,
    ctx: &mut SeedContext,
) -> Result<Outcome, SeedError> {
    let start = Instant::now();
    let result = seeder.seed(ctx).await;

    let base_msg = format!("Seeding {}", name);
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
    let time_str = format!("({:.2?})", start.elapsed()).dimmed();

    match &result {
        Ok(outcome) => println!(
            "Seeding {}{} {} {} {}",
            name.bold(),
            dots,
            "done".green(),
            outcome.to_string().dimmed(),
            time_str
        ),
        Err(_) => println!("Seeding {}{} {} {}", name.bold(), dots, "failed".red(), time_str),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Locale;
    use db::test_utils::setup_test_db;

    #[tokio::test]
    async fn issued_emails_are_unique_within_a_run() {
        let db = setup_test_db().await;
        let mut ctx = SeedContext::new(db, Profile::new(Locale::En), Some(7));

        let mut seen = HashSet::new();
        for _ in 0..200 {
            let email = ctx.issue_email().unwrap();
            assert!(seen.insert(email));
        }
    }

    #[tokio::test]
    async fn same_seed_gives_same_emails() {
        let mut a = SeedContext::new(setup_test_db().await, Profile::new(Locale::En), Some(99));
        let mut b = SeedContext::new(setup_test_db().await, Profile::new(Locale::En), Some(99));

        for _ in 0..5 {
            assert_eq!(a.issue_email().unwrap(), b.issue_email().unwrap());
        }
    }

    #[test]
    fn outcome_counts_only_inserts() {
        assert_eq!(Outcome::Inserted(3).inserted(), 3);
        assert_eq!(Outcome::Skipped(SkipReason::NoUsers).inserted(), 0);
        assert_eq!(Outcome::Inserted(2).to_string(), "2 inserted");
    }
}
