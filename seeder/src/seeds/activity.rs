use crate::seed::{Outcome, SeedContext, SeedError, Seeder};
use crate::seeds::{order::OrderSeeder, user::UserSeeder, wishlist::WishlistSeeder};
use std::pin::Pin;
use std::time::Duration;

const USER_EVERY: u32 = 17;
const ORDER_EVERY: u32 = 2;
const WISHLIST_EVERY: u32 = 5;

/// Simulated shop traffic: on iteration `i` a user signs up when `i` is a
/// multiple of 17, an order is placed when it is even and a wishlist item
/// is saved when it is a multiple of 5. Iterations are spaced by `delay`.
pub struct ActivitySeeder {
    pub iterations: u32,
    pub delay: Duration,
}

impl Seeder for ActivitySeeder {
    fn seed<'a>(
        &'a self,
        ctx: &'a mut SeedContext,
    ) -> Pin<Box<dyn Future<Output = Result<Outcome, SeedError>> + Send + 'a>> {
        Box::pin(async move {
            let mut inserted = 0;

            for i in 0..self.iterations {
                if i % USER_EVERY == 0 {
                    inserted += UserSeeder.seed(ctx).await?.inserted();
                }
                if i % ORDER_EVERY == 0 {
                    inserted += OrderSeeder.seed(ctx).await?.inserted();
                }
                if i % WISHLIST_EVERY == 0 {
                    inserted += WishlistSeeder.seed(ctx).await?.inserted();
                }

                if !self.delay.is_zero() {
                    tokio::time::sleep(self.delay).await;
                }
            }

            Ok(Outcome::Inserted(inserted))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Profile;
    use crate::seeds::{category::CategorySeeder, product::ProductSeeder};
    use db::models::{order, user, wishlist};
    use db::test_utils::setup_test_db;

    #[tokio::test]
    async fn hundred_iterations_follow_the_schedule() {
        let mut ctx = SeedContext::new(setup_test_db().await, Profile::default(), Some(61));
        CategorySeeder::default().seed(&mut ctx).await.unwrap();
        ProductSeeder::default().seed(&mut ctx).await.unwrap();

        let activity = ActivitySeeder {
            iterations: 100,
            delay: Duration::ZERO,
        };
        activity.seed(&mut ctx).await.unwrap();

        // i in {0, 17, 34, 51, 68, 85}
        assert_eq!(user::Model::count(&ctx.db).await.unwrap(), 6);
        assert_eq!(order::Model::count(&ctx.db).await.unwrap(), 50);
        let wishes = wishlist::Model::count(&ctx.db).await.unwrap();
        assert!(wishes >= 1 && wishes <= 20, "{wishes}");
    }

    #[tokio::test]
    async fn zero_iterations_do_nothing() {
        let mut ctx = SeedContext::new(setup_test_db().await, Profile::default(), Some(62));

        let outcome = ActivitySeeder { iterations: 0, delay: Duration::ZERO }
            .seed(&mut ctx)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Inserted(0));
    }

    #[tokio::test]
    async fn delay_is_applied_between_iterations() {
        let mut ctx = SeedContext::new(setup_test_db().await, Profile::default(), Some(63));
        let start = std::time::Instant::now();

        ActivitySeeder { iterations: 3, delay: Duration::from_millis(20) }
            .seed(&mut ctx)
            .await
            .unwrap();

        assert!(start.elapsed() >= Duration::from_millis(60));
    }
}
