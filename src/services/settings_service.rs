// 福袋设置服务
// 负责设置的查询与更新，以及固定折扣/佣金的定价计算

use sqlx::PgPool;
use uuid::Uuid;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::ToPrimitive;
use crate::models::{LuckyBagSettings, PricingPreview, UpdateSettingsRequest};
use super::ServiceError;

/// 售价折扣率: 原价的七折
const SALE_RATE: Decimal = Decimal::from_parts(7, 0, 0, false, 1);
/// 到手比例: 售价扣除7%平台佣金
const NET_RATE: Decimal = Decimal::from_parts(93, 0, 0, false, 2);

/// 福袋设置服务
pub struct SettingsService {
    pool: PgPool,
}

impl SettingsService {
    /// 创建新的设置服务实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 获取福袋设置
    ///
    /// 店铺尚未配置福袋时返回 NotFound
    ///
    /// # Arguments
    /// * `store_id` - 店铺ID
    pub async fn get_settings(&self, store_id: Uuid) -> Result<LuckyBagSettings, ServiceError> {
        sqlx::query_as::<_, LuckyBagSettings>(
            "SELECT * FROM lucky_bag_settings WHERE store_id = $1",
        )
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(ServiceError::NotFound("Settings"))
    }

    /// 更新福袋设置 (浅合并)
    ///
    /// 售价不在这里自动推导: 前端修改原价时会连同七折售价一起提交，
    /// 与原有约定保持一致
    ///
    /// # Arguments
    /// * `store_id` - 店铺ID
    /// * `update` - 更新请求，缺失字段保持原值
    pub async fn update_settings(
        &self,
        store_id: Uuid,
        update: UpdateSettingsRequest,
    ) -> Result<LuckyBagSettings, ServiceError> {
        let mut settings = self.get_settings(store_id).await?;
        settings.apply_update(update);

        sqlx::query(
            r#"
            UPDATE lucky_bag_settings
            SET quantity = $2, original_price = $3, sale_price = $4,
                description = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(settings.id)
        .bind(settings.quantity)
        .bind(settings.original_price)
        .bind(settings.sale_price)
        .bind(&settings.description)
        .bind(settings.updated_at)
        .execute(&self.pool)
        .await?;

        log::info!(
            "Updated lucky bag settings: quantity={} original={} sale={}",
            settings.quantity,
            settings.original_price,
            settings.sale_price
        );

        Ok(settings)
    }
}

/// 由原价推导七折售价，四舍五入到整数货币单位
pub fn sale_price(original_price: i32) -> i32 {
    round_to_unit(Decimal::from(original_price) * SALE_RATE)
}

/// 由售价推导扣除7%平台佣金后的到手金额
pub fn net_amount(sale_price: i32) -> i32 {
    round_to_unit(Decimal::from(sale_price) * NET_RATE)
}

/// 定价预览: 原价 → 售价 → 到手金额
pub fn pricing_preview(original_price: i32) -> PricingPreview {
    let sale = sale_price(original_price);
    PricingPreview {
        original_price,
        sale_price: sale,
        net_amount: net_amount(sale),
    }
}

fn round_to_unit(amount: Decimal) -> i32 {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i32()
        .unwrap_or(0)
}
