use serde::{Deserialize, Serialize};

/// Core catalog entity — one row in the `plants` table.
///
/// Serializes to a flat JSON object with exactly these five fields; clients
/// rely on that shape, so nothing computed or nested is ever added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Plant {
    pub id: i64,
    pub name: String,
    /// URL or path of the plant photo
    pub image: String,
    pub price: f64,
    pub is_in_stock: bool,
}


// ── Request payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreatePlant {
    pub name: String,
    pub image: String,
    pub price: f64,
}

/// PATCH body — the stock flag is the only field a client may change.
#[derive(Debug, Deserialize)]
pub struct UpdatePlantStock {
    pub is_in_stock: bool,
}
