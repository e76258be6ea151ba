use crate::seed::{Outcome, SeedContext, SeedError, Seeder, SkipReason};
use db::models::{category, product};
use rand::Rng;
use rand::seq::IndexedRandom;
use sea_orm::TransactionTrait;
use sea_orm::prelude::Decimal;
use std::pin::Pin;

pub const DEFAULT_PRODUCT_TARGET: u64 = 100;

/// Share of products rated in the upper band.
const HIGH_RATING_PROBABILITY: f64 = 0.7;

/// Uniform over whole cents in [50.00, 5000.00].
pub fn sample_price<R: Rng>(rng: &mut R) -> Decimal {
    Decimal::new(rng.random_range(5_000i64..=500_000), 2)
}

/// [3.00, 5.00] with probability 0.7, otherwise [2.00, 3.00].
pub fn sample_rating<R: Rng>(rng: &mut R) -> Decimal {
    let hundredths = if rng.random_bool(HIGH_RATING_PROBABILITY) {
        rng.random_range(300i64..=500)
    } else {
        rng.random_range(200i64..=300)
    };
    Decimal::new(hundredths, 2)
}

/// Tops the `products` table up to `target` rows.
pub struct ProductSeeder {
    pub target: u64,
}

impl Default for ProductSeeder {
    fn default() -> Self {
        Self {
            target: DEFAULT_PRODUCT_TARGET,
        }
    }
}

impl Seeder for ProductSeeder {
    fn seed<'a>(
        &'a self,
        ctx: &'a mut SeedContext,
    ) -> Pin<Box<dyn Future<Output = Result<Outcome, SeedError>> + Send + 'a>> {
        Box::pin(async move {
            let existing = product::Model::count(&ctx.db).await?;
            let remaining = self.target.saturating_sub(existing);
            if remaining == 0 {
                log::info!("{} products already exist (target {})", existing, self.target);
                return Ok(Outcome::Skipped(SkipReason::TargetReached));
            }

            let category_ids = category::Model::all_ids(&ctx.db).await?;
            if category_ids.is_empty() {
                log::warn!("no categories to attach products to");
                return Ok(Outcome::Skipped(SkipReason::NoCategories));
            }

            let txn = ctx.db.begin().await?;
            for _ in 0..remaining {
                let name = ctx.profile.product_name(&mut ctx.rng);
                let description = ctx.profile.description(&mut ctx.rng);
                let price = sample_price(&mut ctx.rng);
                let rating = sample_rating(&mut ctx.rng);
                let Some(&category_id) = category_ids.choose(&mut ctx.rng) else {
                    break;
                };

                product::Model::create(&txn, &name, &description, category_id, price, rating).await?;
            }
            txn.commit().await?;

            log::info!("created {remaining} products");
            Ok(Outcome::Inserted(remaining))
        })
    }
}
