//! Database queries for pricing configuration

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::Result;
use crate::models::PricingConfigRecord;

/// Get the pricing config in effect at `check_time`, newest first
pub async fn get_active_pricing_config(
    pool: &PgPool,
    check_time: DateTime<Utc>,
) -> Result<Option<PricingConfigRecord>> {
    let record = sqlx::query_as::<_, PricingConfigRecord>(
        r#"
        SELECT
            id,
            base_price_per_bag,
            price_per_day_per_bag,
            multi_day_discount_tiers,
            multi_bag_discount_threshold,
            multi_bag_discount_rate,
            is_active,
            effective_from,
            effective_to
        FROM pricing_configs
        WHERE is_active = TRUE
          AND effective_from <= $1
          AND (effective_to IS NULL OR effective_to > $1)
        ORDER BY effective_from DESC
        LIMIT 1
        "#,
    )
    .bind(check_time)
    .fetch_optional(pool)
    .await?;

    Ok(record.filter(|r| r.is_effective_at(check_time)))
}
