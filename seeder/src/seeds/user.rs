use crate::profile::moment_within;
use crate::seed::{Outcome, SeedContext, SeedError, Seeder, SkipReason};
use chrono::Duration;
use db::models::user;
use sha2::{Digest, Sha256};
use std::pin::Pin;

/// Unsalted SHA-256 hex digest.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Creates at most one user with a freshly issued email.
pub struct UserSeeder;

impl UserSeeder {
    /// Inserts a user under `email` unless the address is already taken,
    /// in which case nothing happens.
    pub async fn create_with_email(ctx: &mut SeedContext, email: &str) -> Result<Outcome, SeedError> {
        let first_name = ctx.profile.first_name(&mut ctx.rng);
        let last_name = ctx.profile.last_name(&mut ctx.rng);
        let password_hash = hash_password(&ctx.profile.word(&mut ctx.rng));
        let phone = ctx.profile.phone(&mut ctx.rng);
        let registration_date = moment_within(&mut ctx.rng, Duration::days(730));

        if user::Model::find_by_email(&ctx.db, email).await?.is_some() {
            return Ok(Outcome::Skipped(SkipReason::DuplicateEmail));
        }

        user::Model::create(
            &ctx.db,
            email,
            &first_name,
            &last_name,
            &password_hash,
            &phone,
            registration_date,
        )
        .await?;

        log::info!("created user {first_name} {last_name}");
        Ok(Outcome::Inserted(1))
    }
}

impl Seeder for UserSeeder {
    fn seed<'a>(
        &'a self,
        ctx: &'a mut SeedContext,
    ) -> Pin<Box<dyn Future<Output = Result<Outcome, SeedError>> + Send + 'a>> {
        Box::pin(async move {
            let email = ctx.issue_email()?;
            Self::create_with_email(ctx, &email).await
        })
    }
}

/// Runs [`UserSeeder`] `count` times.
pub struct UserBatchSeeder {
    pub count: u32,
}

impl Seeder for UserBatchSeeder {
    fn seed<'a>(
        &'a self,
        ctx: &'a mut SeedContext,
    ) -> Pin<Box<dyn Future<Output = Result<Outcome, SeedError>> + Send + 'a>> {
        Box::pin(async move {
            let mut inserted = 0;
            for _ in 0..self.count {
                inserted += UserSeeder.seed(ctx).await?.inserted();
            }
            Ok(Outcome::Inserted(inserted))
        })
    }
}
