// 演示数据初始化
// `luckybag seed` 子命令: 写入演示店铺、福袋设置、取货时段、
// 订单、员工和结算记录，供首次部署和本地联调使用

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;
use crate::models::{OrderStatus, SettlementStatus, StaffRole};
use crate::utils::today_window;

struct SeedOrder {
    order_code: &'static str,
    customer_name: &'static str,
    customer_phone: &'static str,
    quantity: i32,
    total_price: i32,
    status: OrderStatus,
    customer_rating: f64,
    customer_order_count: i32,
    cancel_reason: Option<&'static str>,
    first_slot: bool,
}

/// 写入演示数据
///
/// 假设数据库为空 (不做幂等处理): 重复执行会产生重复店铺行
pub async fn run(pool: &PgPool) -> Result<()> {
    let now = Utc::now();
    let (today, _) = today_window();
    let yesterday = today - Duration::days(1);

    let store_id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO stores (id, name, description, address, phone, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        "#,
    )
    .bind(store_id)
    .bind("맛있는 베이커리")
    .bind("신선한 빵과 케이크를 판매하는 동네 베이커리")
    .bind("서울시 강남구 테헤란로 123")
    .bind("02-1234-5678")
    .bind(now)
    .execute(pool)
    .await
    .context("Failed to seed store")?;

    sqlx::query(
        r#"
        INSERT INTO lucky_bag_settings (id, store_id, quantity, original_price, sale_price, description, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(store_id)
    .bind(15)
    .bind(9800)
    .bind(7000)
    .bind("오늘의 신선한 빵 3-4개")
    .bind(now)
    .execute(pool)
    .await
    .context("Failed to seed lucky bag settings")?;

    let first_slot = seed_time_slot(pool, store_id, "17:30", "18:30", now).await?;
    let second_slot = seed_time_slot(pool, store_id, "19:00", "20:00", now).await?;

    let orders = [
        SeedOrder {
            order_code: "A1234",
            customer_name: "김철수",
            customer_phone: "010-1234-5678",
            quantity: 2,
            total_price: 14000,
            status: OrderStatus::Paid,
            customer_rating: 4.8,
            customer_order_count: 15,
            cancel_reason: None,
            first_slot: true,
        },
        SeedOrder {
            order_code: "A1235",
            customer_name: "이영희",
            customer_phone: "010-2345-6789",
            quantity: 1,
            total_price: 7000,
            status: OrderStatus::Paid,
            customer_rating: 4.5,
            customer_order_count: 8,
            cancel_reason: None,
            first_slot: true,
        },
        SeedOrder {
            order_code: "A1236",
            customer_name: "박지민",
            customer_phone: "010-3456-7890",
            quantity: 3,
            total_price: 21000,
            status: OrderStatus::Confirmed,
            customer_rating: 4.9,
            customer_order_count: 23,
            cancel_reason: None,
            first_slot: true,
        },
        SeedOrder {
            order_code: "A1237",
            customer_name: "최수진",
            customer_phone: "010-4567-8901",
            quantity: 1,
            total_price: 7000,
            status: OrderStatus::Paid,
            customer_rating: 4.2,
            customer_order_count: 3,
            cancel_reason: None,
            first_slot: false,
        },
        SeedOrder {
            order_code: "A1238",
            customer_name: "정민호",
            customer_phone: "010-5678-9012",
            quantity: 2,
            total_price: 14000,
            status: OrderStatus::Canceled,
            customer_rating: 4.0,
            customer_order_count: 5,
            cancel_reason: Some("고객 요청"),
            first_slot: true,
        },
    ];

    for order in &orders {
        let slot_id = if order.first_slot { first_slot } else { second_slot };
        sqlx::query(
            r#"
            INSERT INTO orders (
                id, order_code, store_id, time_slot_id, customer_name, customer_phone,
                quantity, total_price, status, customer_rating, customer_order_count,
                cancel_reason, pickup_date, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(order.order_code)
        .bind(store_id)
        .bind(slot_id)
        .bind(order.customer_name)
        .bind(order.customer_phone)
        .bind(order.quantity)
        .bind(order.total_price)
        .bind(order.status)
        .bind(order.customer_rating)
        .bind(order.customer_order_count)
        .bind(order.cancel_reason)
        .bind(today)
        .bind(now)
        .execute(pool)
        .await
        .with_context(|| format!("Failed to seed order {}", order.order_code))?;
    }

    seed_staff(pool, store_id, "admin@bakery.com", StaffRole::Admin, true, now).await?;
    seed_staff(pool, store_id, "staff@bakery.com", StaffRole::Staff, false, now).await?;

    seed_settlement(pool, store_id, yesterday, 12, 84000, SettlementStatus::Completed, now).await?;
    seed_settlement(pool, store_id, today, 5, 63000, SettlementStatus::Pending, now).await?;

    log::info!("Seed data created for store {}", store_id);

    Ok(())
}

async fn seed_time_slot(
    pool: &PgPool,
    store_id: Uuid,
    start_time: &str,
    end_time: &str,
    now: DateTime<Utc>,
) -> Result<Uuid> {
    let slot_id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO time_slots (id, store_id, start_time, end_time, max_orders, is_active, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(slot_id)
    .bind(store_id)
    .bind(start_time)
    .bind(end_time)
    .bind(15)
    .bind(true)
    .bind(now)
    .execute(pool)
    .await
    .with_context(|| format!("Failed to seed time slot {}", start_time))?;

    Ok(slot_id)
}

async fn seed_staff(
    pool: &PgPool,
    store_id: Uuid,
    email: &str,
    role: StaffRole,
    notify_enabled: bool,
    now: DateTime<Utc>,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO staff (id, store_id, email, role, notify_enabled, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(store_id)
    .bind(email)
    .bind(role)
    .bind(notify_enabled)
    .bind(now)
    .execute(pool)
    .await
    .with_context(|| format!("Failed to seed staff {}", email))?;

    Ok(())
}

async fn seed_settlement(
    pool: &PgPool,
    store_id: Uuid,
    date: DateTime<Utc>,
    total_orders: i32,
    total_amount: i32,
    status: SettlementStatus,
    now: DateTime<Utc>,
) -> Result<()> {
    // 平台佣金10%，到手为销售额扣除佣金
    let commission = total_amount / 10;
    sqlx::query(
        r#"
        INSERT INTO settlements (
            id, store_id, date, total_orders, total_amount, commission, net_amount, status, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(store_id)
    .bind(date)
    .bind(total_orders)
    .bind(total_amount)
    .bind(commission)
    .bind(total_amount - commission)
    .bind(status)
    .bind(now)
    .execute(pool)
    .await
    .context("Failed to seed settlement")?;

    Ok(())
}
