use sqlx::SqlitePool;

use crate::error::{AppError, AppResult};
use crate::models::{CreatePlant, Plant};

pub async fn fetch_all_plants(pool: &SqlitePool) -> AppResult<Vec<Plant>> {
    let plants = sqlx::query_as::<_, Plant>(
        "SELECT id, name, image, price, is_in_stock FROM plants ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(plants)
}

pub async fn fetch_plant_by_id(pool: &SqlitePool, id: i64) -> AppResult<Plant> {
    sqlx::query_as::<_, Plant>("SELECT id, name, image, price, is_in_stock FROM plants WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Plant not found".to_string()))
}

pub async fn insert_plant(pool: &SqlitePool, payload: &CreatePlant) -> AppResult<Plant> {
    let plant = sqlx::query_as::<_, Plant>(
        r#"
        INSERT INTO plants (name, image, price)
        VALUES (?, ?, ?)
        RETURNING id, name, image, price, is_in_stock
        "#,
    )
    .bind(&payload.name)
    .bind(&payload.image)
    .bind(payload.price)
    .fetch_one(pool)
    .await?;

    Ok(plant)
}

pub async fn update_plant_stock(pool: &SqlitePool, id: i64, is_in_stock: bool) -> AppResult<Plant> {
    sqlx::query_as::<_, Plant>(
        r#"
        UPDATE plants
        SET is_in_stock = ?
        WHERE id = ?
        RETURNING id, name, image, price, is_in_stock
        "#,
    )
    .bind(is_in_stock)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Plant not found".to_string()))
}

pub async fn delete_plant(pool: &SqlitePool, id: i64) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM plants WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Plant not found".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    /// A single connection keeps every query on the same in-memory database
    /// (each SQLite `:memory:` connection is otherwise its own database).
    async fn setup() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        pool
    }

    fn fern() -> CreatePlant {
        CreatePlant {
            name: "Fern".to_string(),
            image: "fern.jpg".to_string(),
            price: 9.99,
        }
    }

    #[tokio::test]
    async fn insert_assigns_id_and_defaults_stock_to_false() {
        let pool = setup().await;

        let plant = insert_plant(&pool, &fern()).await.unwrap();

        assert!(plant.id >= 1);
        assert_eq!(plant.name, "Fern");
        assert_eq!(plant.image, "fern.jpg");
        assert!((plant.price - 9.99).abs() < f64::EPSILON);
        assert!(!plant.is_in_stock);
    }

    #[tokio::test]
    async fn fetch_by_id_returns_the_inserted_plant() {
        let pool = setup().await;
        let created = insert_plant(&pool, &fern()).await.unwrap();

        let fetched = fetch_plant_by_id(&pool, created.id).await.unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn fetch_by_unknown_id_is_not_found() {
        let pool = setup().await;
        let err = fetch_plant_by_id(&pool, 999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_stock_persists_the_flag() {
        let pool = setup().await;
        let created = insert_plant(&pool, &fern()).await.unwrap();

        let updated = update_plant_stock(&pool, created.id, true).await.unwrap();
        assert!(updated.is_in_stock);

        // Each write is visible to the next read
        let fetched = fetch_plant_by_id(&pool, created.id).await.unwrap();
        assert!(fetched.is_in_stock);

        let updated = update_plant_stock(&pool, created.id, false).await.unwrap();
        assert!(!updated.is_in_stock);
    }

    #[tokio::test]
    async fn update_stock_on_unknown_id_is_not_found() {
        let pool = setup().await;
        let err = update_plant_stock(&pool, 999, true).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_removes_the_row_and_repeat_delete_is_not_found() {
        let pool = setup().await;
        let created = insert_plant(&pool, &fern()).await.unwrap();

        delete_plant(&pool, created.id).await.unwrap();

        let err = delete_plant(&pool, created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        let err = fetch_plant_by_id(&pool, created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn ids_are_never_reused_after_delete() {
        let pool = setup().await;
        let first = insert_plant(&pool, &fern()).await.unwrap();
        delete_plant(&pool, first.id).await.unwrap();

        let second = insert_plant(&pool, &fern()).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn list_returns_plants_in_insertion_order() {
        let pool = setup().await;
        for name in ["Fern", "Cactus", "Monstera"] {
            insert_plant(
                &pool,
                &CreatePlant {
                    name: name.to_string(),
                    image: format!("{}.jpg", name.to_lowercase()),
                    price: 5.0,
                },
            )
            .await
            .unwrap();
        }

        let plants = fetch_all_plants(&pool).await.unwrap();

        let names: Vec<&str> = plants.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Fern", "Cactus", "Monstera"]);
        assert!(plants.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn list_reflects_creates_minus_deletes() {
        let pool = setup().await;
        let mut ids = Vec::new();
        for _ in 0..4 {
            ids.push(insert_plant(&pool, &fern()).await.unwrap().id);
        }
        delete_plant(&pool, ids[1]).await.unwrap();
        delete_plant(&pool, ids[3]).await.unwrap();

        let plants = fetch_all_plants(&pool).await.unwrap();

        assert_eq!(plants.len(), 2);
        assert!(plants.iter().all(|p| p.id == ids[0] || p.id == ids[2]));
    }
}
