use crate::models::{category, order, product, user, wishlist};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// In-memory SQLite database with the shop tables created from the entity
/// definitions.
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory db");

    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let tables = [
        schema.create_table_from_entity(category::Entity),
        schema.create_table_from_entity(product::Entity),
        schema.create_table_from_entity(user::Entity),
        schema.create_table_from_entity(order::Entity),
        schema.create_table_from_entity(wishlist::Entity),
    ];

    for table in tables {
        db.execute(backend.build(&table))
            .await
            .expect("Failed to create table");
    }

    db
}
