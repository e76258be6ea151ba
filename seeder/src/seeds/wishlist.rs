use crate::profile::moment_within;
use crate::seed::{Outcome, SeedContext, SeedError, Seeder, SkipReason};
use chrono::Duration;
use db::models::{product, user, wishlist};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::pin::Pin;

const NOTES_PROBABILITY: f64 = 0.3;

/// Saves one random product to one random user's wishlist, unless that
/// pair is already there.
pub struct WishlistSeeder;

impl Seeder for WishlistSeeder {
    fn seed<'a>(
        &'a self,
        ctx: &'a mut SeedContext,
    ) -> Pin<Box<dyn Future<Output = Result<Outcome, SeedError>> + Send + 'a>> {
        Box::pin(async move {
            let user_ids = user::Model::all_ids(&ctx.db).await?;
            let product_ids = product::Model::all_ids(&ctx.db).await?;

            let (Some(&user_id), Some(&product_id)) = (
                user_ids.choose(&mut ctx.rng),
                product_ids.choose(&mut ctx.rng),
            ) else {
                log::info!("not enough users or products to build a wishlist item");
                let reason = if user_ids.is_empty() {
                    SkipReason::NoUsers
                } else {
                    SkipReason::NoProducts
                };
                return Ok(Outcome::Skipped(reason));
            };

            if wishlist::Model::find_by_user_and_product(&ctx.db, user_id, product_id)
                .await?
                .is_some()
            {
                return Ok(Outcome::Skipped(SkipReason::DuplicateWishlistPair));
            }

            let added_at = moment_within(&mut ctx.rng, Duration::days(60));
            let notes = if ctx.rng.random_bool(NOTES_PROBABILITY) {
                Some(ctx.profile.sentence(&mut ctx.rng))
            } else {
                None
            };

            wishlist::Model::create(&ctx.db, user_id, product_id, added_at, notes).await?;

            log::info!("added wishlist item for user {user_id}");
            Ok(Outcome::Inserted(1))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Profile;
    use crate::seeds::{category::CategorySeeder, product::ProductSeeder, user::UserBatchSeeder};
    use db::models::wishlist::Entity as WishlistEntity;
    use db::test_utils::setup_test_db;
    use sea_orm::EntityTrait;
    use std::collections::HashSet;

    async fn context() -> SeedContext {
        SeedContext::new(setup_test_db().await, Profile::default(), Some(51))
    }

    #[tokio::test]
    async fn empty_store_skips() {
        let mut ctx = context().await;

        let outcome = WishlistSeeder.seed(&mut ctx).await.unwrap();

        assert_eq!(outcome, Outcome::Skipped(SkipReason::NoUsers));
        assert_eq!(wishlist::Model::count(&ctx.db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn pairs_are_never_duplicated() {
        let mut ctx = context().await;
        CategorySeeder::default().seed(&mut ctx).await.unwrap();
        ProductSeeder { target: 3 }.seed(&mut ctx).await.unwrap();
        UserBatchSeeder { count: 2 }.seed(&mut ctx).await.unwrap();

        let mut inserted = 0;
        let mut duplicates = 0;
        for _ in 0..60 {
            match WishlistSeeder.seed(&mut ctx).await.unwrap() {
                Outcome::Inserted(1) => inserted += 1,
                Outcome::Skipped(SkipReason::DuplicateWishlistPair) => duplicates += 1,
                other => panic!("unexpected outcome {other:?}"),
            }
        }

        let rows = WishlistEntity::find().all(&ctx.db).await.unwrap();
        let pairs: HashSet<(i32, i32)> = rows.iter().map(|w| (w.user_id, w.product_id)).collect();

        assert_eq!(rows.len(), inserted);
        assert_eq!(pairs.len(), rows.len());
        assert!(rows.len() <= 6);
        assert!(duplicates > 0);
    }
}
